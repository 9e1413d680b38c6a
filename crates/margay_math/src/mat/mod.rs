use crate::*;

use core::{
    fmt::Display,
    ops::*,
};

mod mat4;
pub use mat4::*;

mod mat3;
pub use mat3::*;

mod mat2;
pub use mat2::*;

macro_rules! matrix_pre_multiplication {
    {$name:ident, $m:literal, $n:literal, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

macro_rules! generic_matrix {
    {$docs:meta; $name:ident, $m:literal, $n:literal; $($field:literal),+} => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Real> {
            vals : [T; $m * $n]
        }

        impl<T: Real> $name<T> {
            /// Number of rows
            pub const ROWS: usize = $m;
            /// Number of columns
            pub const COLUMNS: usize = $n;

            /// Create a matrix from an array in row-major order
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }

            /// Create a matrix from a slice in row-major order, the slice needs to contain exactly as many values as the matrix has elements
            pub fn from_slice(vals: &[T]) -> Result<Self> {
                let vals: [T; $m * $n] = vals.try_into().map_err(|_| Error::InvalidArgument("slice length does not match the number of elements"))?;
                Ok(Self { vals })
            }

            /// Get the content of the matrix as an array in row-major order
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $m * $n] {
                self.vals
            }

            /// Get the content of the matrix as a slice in row-major order
            #[inline(always)]
            #[must_use]
            pub fn as_slice(&self) -> &[T] {
                &self.vals
            }

            /// Get the content of the matrix as a `Vec` in row-major order
            #[inline]
            #[must_use]
            pub fn to_vec(self) -> Vec<T> {
                self.vals.to_vec()
            }

            /// Get the identity matrix
            #[must_use]
            pub fn identity() -> Self {
                let mut res = Self::zero();
                for i in 0..$m {
                    res.vals[i * $n + i] = T::one();
                }
                res
            }

            /// Get the element at a flat, row-major `index`
            #[inline]
            pub fn get(self, index: usize) -> Result<T> {
                crate::error::check_index(index, $m * $n)?;
                Ok(self.vals[index])
            }

            /// Get the element at `row` and `column`
            #[inline]
            pub fn get_rc(self, row: usize, column: usize) -> Result<T> {
                crate::error::check_index(row, $m)?;
                crate::error::check_index(column, $n)?;
                Ok(self.vals[row * $n + column])
            }

            /// Get a mutable reference to the element at a flat, row-major `index`
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
                crate::error::check_index(index, $m * $n)?;
                Ok(&mut self.vals[index])
            }

            /// Set the element at a flat, row-major `index`
            #[inline]
            pub fn set(&mut self, index: usize, val: T) -> Result<()> {
                *self.get_mut(index)? = val;
                Ok(())
            }

            /// Set the element at `row` and `column`
            #[inline]
            pub fn set_rc(&mut self, row: usize, column: usize, val: T) -> Result<()> {
                crate::error::check_index(row, $m)?;
                crate::error::check_index(column, $n)?;
                self.vals[row * $n + column] = val;
                Ok(())
            }

            /// Calculate the trace
            #[inline]
            #[must_use]
            pub fn trace(self) -> T {
                (0..$m).fold(T::zero(), |acc, i| acc + self.vals[i * $n + i])
            }

            /// Transpose the matrix in place
            pub fn transpose(&mut self) {
                for row in 0..$m {
                    for column in (row + 1)..$n {
                        self.vals.swap(row * $n + column, column * $n + row);
                    }
                }
            }

            /// Get a transposed copy of the matrix
            #[inline]
            #[must_use]
            pub fn transposed(mut self) -> Self {
                self.transpose();
                self
            }

            /// Divide each element by a scalar, fails if `rhs` is exactly 0
            pub fn checked_div_scalar(self, rhs: T) -> Result<Self> {
                if rhs == T::zero() {
                    return Err(Error::DivideByZero);
                }
                Ok(self / rhs)
            }

            /// Add 2 matrices and write the result into `out`
            #[inline]
            pub fn add_into(self, rhs: Self, out: &mut Self) {
                *out = self + rhs;
            }

            /// Subtract 2 matrices and write the result into `out`
            #[inline]
            pub fn sub_into(self, rhs: Self, out: &mut Self) {
                *out = self - rhs;
            }

            /// Multiply 2 matrices and write the result into `out`
            #[inline]
            pub fn mul_into(self, rhs: Self, out: &mut Self) {
                *out = self * rhs;
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                assert!(index < $m * $n, "index {index} is out of range for {} elements", $m * $n);
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                assert!(index < $m * $n, "index {index} is out of range for {} elements", $m * $n);
                &mut self.vals[index]
            }
        }

        impl<T: Real> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, index: (usize, usize)) -> &Self::Output {
                assert!(index.0 < $m && index.1 < $n, "element ({}, {}) is out of range for a {}x{} matrix", index.0, index.1, $m, $n);
                &self.vals[index.0 * $n + index.1]
            }
        }

        impl<T: Real> IndexMut<(usize, usize)> for $name<T> {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
                assert!(index.0 < $m && index.1 < $n, "element ({}, {}) is out of range for a {}x{} matrix", index.0, index.1, $m, $n);
                &mut self.vals[index.0 * $n + index.1]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { vals: self.vals.map(|val| -val) }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Add for $name<T> {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for i in 0..($m * $n) {
                    self.vals[i] += rhs.vals[i];
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for i in 0..($m * $n) {
                    self.vals[i] -= rhs.vals[i];
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val * rhs) }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val *= rhs;
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val / rhs) }
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val /= rhs;
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $m * $n] }
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals.iter()).all(|(a, b)| a.is_close_to(*b, epsilon))
            }
        }

        impl<T: Real> From<[T; $m * $n]> for $name<T> {
            fn from(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }
        }

        impl<T: Real> Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("[")?;
                for row in 0..$m {
                    if row != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("[")?;
                    for column in 0..$n {
                        if column != 0 {
                            f.write_str(", ")?;
                        }
                        f.write_fmt(format_args!("{}", self.vals[row * $n + column]))?;
                    }
                    f.write_str("]")?;
                }
                f.write_str("]")
            }
        }

        //--------------------------------------------------------------

        #[cfg(feature = "serde")]
        impl<T: Real + serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                use serde::ser::SerializeStruct;
                const FIELDS: &[&str] = &[$($field),+];

                let mut state = serializer.serialize_struct(stringify!($name), $m * $n)?;
                for (&field, val) in FIELDS.iter().zip(self.vals.iter()) {
                    state.serialize_field(field, val)?;
                }
                state.end()
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, T: Real + serde::Deserialize<'de>> serde::Deserialize<'de> for $name<T> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                use serde::de::{self, MapAccess, SeqAccess, Visitor};
                const FIELDS: &[&str] = &[$($field),+];

                struct MatrixVisitor<T>(core::marker::PhantomData<T>);

                impl<'de, T: Real + serde::Deserialize<'de>> Visitor<'de> for MatrixVisitor<T> {
                    type Value = $name<T>;

                    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                        f.write_str(concat!("a ", stringify!($name), " with ", stringify!($m), "x", stringify!($n), " elements"))
                    }

                    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error> {
                        let mut vals = [T::zero(); $m * $n];
                        for (idx, val) in vals.iter_mut().enumerate() {
                            *val = seq.next_element()?.ok_or_else(|| <A::Error as de::Error>::invalid_length(idx, &self))?;
                        }
                        Ok($name { vals })
                    }

                    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> core::result::Result<Self::Value, A::Error> {
                        let mut found: [Option<T>; $m * $n] = [None; $m * $n];
                        while let Some(key) = map.next_key::<String>()? {
                            let idx = FIELDS.iter().position(|field| *field == key)
                                .ok_or_else(|| <A::Error as de::Error>::unknown_field(&key, FIELDS))?;
                            if found[idx].is_some() {
                                return Err(<A::Error as de::Error>::duplicate_field(FIELDS[idx]));
                            }
                            found[idx] = Some(map.next_value()?);
                        }

                        let mut vals = [T::zero(); $m * $n];
                        for (idx, val) in found.iter().enumerate() {
                            vals[idx] = val.ok_or_else(|| <A::Error as de::Error>::missing_field(FIELDS[idx]))?;
                        }
                        Ok($name { vals })
                    }
                }

                deserializer.deserialize_struct(stringify!($name), FIELDS, MatrixVisitor(core::marker::PhantomData))
            }
        }

        //--------------------------------------------------------------

        matrix_pre_multiplication!{$name, $m, $n, f32, f64}
    };
}

generic_matrix!{doc = "4x4 matrix (row-major order)"; Mat4, 4, 4;
    "M11", "M12", "M13", "M14",
    "M21", "M22", "M23", "M24",
    "M31", "M32", "M33", "M34",
    "M41", "M42", "M43", "M44"
}
generic_matrix!{doc = "3x3 matrix (row-major order)"; Mat3, 3, 3;
    "M11", "M12", "M13",
    "M21", "M22", "M23",
    "M31", "M32", "M33"
}
generic_matrix!{doc = "2x2 matrix (row-major order)"; Mat2, 2, 2;
    "M11", "M12",
    "M21", "M22"
}
