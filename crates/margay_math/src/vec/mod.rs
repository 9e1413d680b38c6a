use core::{
    ops::*,
    str::FromStr,
};
use crate::{
    numeric::*,
    parse::parse_tuple,
    Error, Result,
};

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $(($comp:ident, $idx:literal, $ser:literal)),+;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T: Numeric> {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $ser))]
                pub $comp: T,
            )+
        }

        impl<T: Numeric> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp: $comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                Self{ $($comp: val),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }
            }

            /// Create a vector from a slice, the slice needs to contain exactly as many values as the vector has components
            pub fn from_slice(vals: &[T]) -> Result<Self> {
                let arr: [T; $elem_cnt] = vals.try_into().map_err(|_| Error::InvalidArgument("slice length does not match the number of components"))?;
                Ok(Self::from_array(arr))
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),*]
            }

            /// Get the content of the vector as a `Vec`
            #[inline]
            #[must_use]
            pub fn to_vec(self) -> Vec<T> {
                self.to_array().to_vec()
            }

            /// Get the component at `index`
            #[inline]
            pub fn component(self, index: usize) -> Result<T> {
                crate::error::check_index(index, $elem_cnt)?;
                Ok(self[index])
            }

            /// Get a mutable reference to the component at `index`
            #[inline]
            pub fn component_mut(&mut self, index: usize) -> Result<&mut T> {
                crate::error::check_index(index, $elem_cnt)?;
                Ok(&mut self[index])
            }

            /// Set the component at `index`
            #[inline]
            pub fn set_component(&mut self, index: usize, val: T) -> Result<()> {
                *self.component_mut(index)? = val;
                Ok(())
            }

        //--------------------------------------------------------------

            /// Calculate the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            #[must_use]
            pub fn len_sq(self) -> T {
                self.dot(self)
            }

            /// Calculate the length of the vector
            #[inline]
            #[must_use]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist_sq(self, other: Self) -> T {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist(self, other: Self) -> T {
                self.dist_sq(other).sqrt()
            }

            /// Check if the vector is close to being normalized, using a given epsilon, which defines the max difference `len` can be relative to 1
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                self.len_sq().is_close_to(T::one(), epsilon)
            }

            /// Check if the vector is normalized, using the default tolerance
            pub fn is_normalized(self) -> bool {
                self.len_sq().is_approx_eq(T::one())
            }

            /// Get the component-wise minimum of 2 vectors
            #[inline]
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Get the component-wise maximum of 2 vectors
            #[inline]
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            /// Component-wise clamp of the vector
            #[inline]
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self{ $($comp: self.$comp.clamp(min.$comp, max.$comp)),+ }
            }

            /// Get the component-wise absolute value of the vector
            #[inline]
            #[must_use]
            pub fn abs(self) -> Self {
                Self{ $($comp: self.$comp.abs()),+ }
            }

            /// Get the minimum component of the vector
            #[must_use]
            pub fn min_component(self) -> T {
                let arr = self.to_array();
                arr[1..].iter().fold(arr[0], |acc, val| acc.min(*val))
            }

            /// Get the maximum component of the vector
            #[must_use]
            pub fn max_component(self) -> T {
                let arr = self.to_array();
                arr[1..].iter().fold(arr[0], |acc, val| acc.max(*val))
            }

            /// Check if every component is smaller than the matching component in `rhs`
            #[inline]
            #[must_use]
            pub fn all_lt(self, rhs: Self) -> bool {
                $(self.$comp < rhs.$comp)&&+
            }

            /// Check if every component is smaller or equal to the matching component in `rhs`
            #[inline]
            #[must_use]
            pub fn all_le(self, rhs: Self) -> bool {
                $(self.$comp <= rhs.$comp)&&+
            }

            /// Check if every component is larger than the matching component in `rhs`
            #[inline]
            #[must_use]
            pub fn all_gt(self, rhs: Self) -> bool {
                $(self.$comp > rhs.$comp)&&+
            }

            /// Check if every component is larger or equal to the matching component in `rhs`
            #[inline]
            #[must_use]
            pub fn all_ge(self, rhs: Self) -> bool {
                $(self.$comp >= rhs.$comp)&&+
            }

        //--------------------------------------------------------------

            /// Component-wise division, fails if any component of `rhs` is exactly 0
            pub fn checked_div(self, rhs: Self) -> Result<Self> {
                if $(rhs.$comp == T::zero())||+ {
                    return Err(Error::DivideByZero);
                }
                Ok(self / rhs)
            }

            /// Divide each component by a scalar, fails if `rhs` is exactly 0
            pub fn checked_div_scalar(self, rhs: T) -> Result<Self> {
                if rhs == T::zero() {
                    return Err(Error::DivideByZero);
                }
                Ok(self / rhs)
            }

            /// Add 2 vectors and write the result into `out`
            #[inline]
            pub fn add_into(self, rhs: Self, out: &mut Self) {
                *out = self + rhs;
            }

            /// Subtract 2 vectors and write the result into `out`
            #[inline]
            pub fn sub_into(self, rhs: Self, out: &mut Self) {
                *out = self - rhs;
            }

            /// Scale the vector and write the result into `out`
            #[inline]
            pub fn mul_into(self, rhs: T, out: &mut Self) {
                *out = self * rhs;
            }

            /// Divide the vector by a scalar and write the result into `out`, `out` is left untouched on failure
            #[inline]
            pub fn div_into(self, rhs: T, out: &mut Self) -> Result<()> {
                *out = self.checked_div_scalar(rhs)?;
                Ok(())
            }
        }

        impl<T: Real> $name<T> {
            /// Normalize the vector in place, fails if the length of the vector is exactly 0
            pub fn normalize(&mut self) -> Result<()> {
                *self = self.normalized()?;
                Ok(())
            }

            /// Get a normalized copy of the vector, fails if the length of the vector is exactly 0
            pub fn normalized(self) -> Result<Self> {
                let len = self.len();
                if len == T::zero() {
                    return Err(Error::DivideByZero);
                }
                Ok(self / len)
            }

            /// Get the direction and length of the vector
            pub fn dir_and_len(self) -> Result<(Self, T)> {
                let len = self.len();
                if len == T::zero() {
                    return Err(Error::DivideByZero);
                }
                Ok((self / len, len))
            }

            /// Linearly interpolate between 2 vectors
            #[inline]
            #[must_use]
            pub fn lerp(self, other: Self, t: T) -> Self {
                self + (other - self) * t
            }
        }

        impl<T: Numeric> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$comp,)+
                    _ => panic!("index {index} is out of range for {} components", $elem_cnt),
                }
            }
        }

        impl<T: Numeric> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$comp,)+
                    _ => panic!("index {index} is out of range for {} components", $elem_cnt),
                }
            }
        }

        impl<T: Numeric> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        impl<T: Numeric> One for $name<T> {
            fn one() -> Self {
                Self{ $($comp: T::one()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> Add for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl<T: Numeric> AddAssign for $name<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$comp += rhs.$comp);+
            }
        }

        impl<T: Numeric> Add<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp + rhs),+ }
            }
        }

        impl<T: Numeric> AddAssign<T> for $name<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: T) {
                $(self.$comp += rhs);+
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> Sub for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl<T: Numeric> SubAssign for $name<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$comp -= rhs.$comp);+
            }
        }

        impl<T: Numeric> Sub<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp - rhs),+ }
            }
        }

        impl<T: Numeric> SubAssign<T> for $name<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: T) {
                $(self.$comp -= rhs);+
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> Mul for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl<T: Numeric> MulAssign for $name<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$comp *= rhs.$comp);+
            }
        }

        impl<T: Numeric> Mul<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp * rhs),+ }
            }
        }

        impl<T: Numeric> MulAssign<T> for $name<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$comp *= rhs);+
            }
        }

        // We can't implement pre-multipy genericly here, so `impl_vec_premul` is used instead

        //--------------------------------------------------------------

        impl<T: Numeric> Div for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp / rhs.$comp),+ }
            }
        }

        impl<T: Numeric> DivAssign for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$comp /= rhs.$comp);+
            }
        }

        impl<T: Numeric> Div<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp / rhs),+ }
            }
        }

        impl<T: Numeric> DivAssign<T> for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: T) {
                $(self.$comp /= rhs);+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Signed> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        //--------------------------------------------------------------

        /// Component-wise ordering: `a < b` only holds when every component of `a` is smaller than the one in `b`.
        ///
        /// This is a partial order, so for mixed vectors all of `<`, `>`, `<=` and `>=` can be false,
        /// and `<=` does not imply `<` or `==`.
        impl<T: Numeric> PartialOrd for $name<T> {
            fn partial_cmp(&self, rhs: &Self) -> Option<core::cmp::Ordering> {
                if self == rhs {
                    Some(core::cmp::Ordering::Equal)
                } else if self.all_lt(*rhs) {
                    Some(core::cmp::Ordering::Less)
                } else if self.all_gt(*rhs) {
                    Some(core::cmp::Ordering::Greater)
                } else {
                    None
                }
            }

            #[inline]
            fn lt(&self, rhs: &Self) -> bool {
                self.all_lt(*rhs)
            }

            #[inline]
            fn le(&self, rhs: &Self) -> bool {
                self.all_le(*rhs)
            }

            #[inline]
            fn gt(&self, rhs: &Self) -> bool {
                self.all_gt(*rhs)
            }

            #[inline]
            fn ge(&self, rhs: &Self) -> bool {
                self.all_ge(*rhs)
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Numeric> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Numeric> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Numeric> FromStr for $name<T> {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                parse_tuple::<T, $elem_cnt>(s).map(Self::from_array)
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_vec!{ doc = "2D Vector"; Vec2, 2, (x, 0, "X"), (y, 1, "Y"); i32v2 => i32, f32v2 => f32, f64v2 => f64 }
generic_vec!{ doc = "3D Vector"; Vec3, 3, (x, 0, "X"), (y, 1, "Y"), (z, 2, "Z"); i32v3 => i32, f32v3 => f32, f64v3 => f64 }
generic_vec!{ doc = "4D Vector"; Vec4, 4, (x, 0, "X"), (y, 1, "Y"), (z, 2, "Z"), (w, 3, "W"); i32v4 => i32, f32v4 => f32, f64v4 => f64 }

macro_rules! impl_vec_premul {
    ($iden:ident, $($ty:ty)*) => {
        $(
            impl Mul<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs * self
                }
            }
        )*
    };
}
impl_vec_premul!{ Vec2, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
impl_vec_premul!{ Vec3, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
impl_vec_premul!{ Vec4, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
