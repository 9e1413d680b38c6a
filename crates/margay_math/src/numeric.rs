use core::{
    fmt::{Debug, Display},
    ops::*,
    str::FromStr,
};
use crate::MathConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_identities {
    {@int $($ty:ty),*} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { 0 }
            }
            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { 1 }
            }
        )*
    };
    {@fp $($ty:ty),*} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { 0.0 }
            }
            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { 1.0 }
            }
        )*
    };
}
impl_identities!{ @int i8, i16, i32, i64, u8, u16, u32, u64 }
impl_identities!{ @fp f32, f64 }

/// Defines a type that is a partial implementation of a `Numeric`
pub trait NumericBase : Sized + Clone + Copy + One + Zero + PartialEq + PartialOrd + Debug + Display + FromStr +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign + RemAssign
{
    /// Default tolerance used by approximate comparisons.
    ///
    /// 4 times the machine epsilon for floating point types, 0 for integers.
    const EPSILON : Self;

    /// Get the minimum of 2 `Numeric`s
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 `Numeric`s
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute difference of 2 values
    fn abs_diff(self, rhs: Self) -> Self;
    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the square root of the value
    fn rsqrt(self) -> Self {
        self.sqrt().rcp()
    }
    /// Calculate the reciprocal of the value
    fn rcp(self) -> Self {
        Self::one() / self
    }

    /// Create a numeric from an `i32`
    fn from_i32(val: i32) -> Self;
    /// Create a numeric from a `usize`
    fn from_usize(val: usize) -> Self;
    /// Widen the value to an `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    {@signed $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            // Saturates when the difference does not fit in the signed type
            fn abs_diff(self, rhs: Self) -> Self {
                <$ty>::try_from(self.abs_diff(rhs)).unwrap_or(<$ty>::MAX)
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self < 0 { -1 } else if self > 0 { 1 } else { 0 }
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }

            fn from_usize(val: usize) -> Self {
                val as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
    {@unsigned $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                self.abs_diff(rhs)
            }

            fn abs(self) -> Self {
                self
            }

            fn sign(self) -> Self {
                if self == 0 { 0 } else { 1 }
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }

            fn from_usize(val: usize) -> Self {
                val as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 4.0 * <$ty>::EPSILON;

            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }

            fn from_usize(val: usize) -> Self {
                val as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_numeric!{ @signed i8 }
impl_numeric!{ @signed i16 }
impl_numeric!{ @signed i32 }
impl_numeric!{ @signed i64 }
impl_numeric!{ @unsigned u8 }
impl_numeric!{ @unsigned u16 }
impl_numeric!{ @unsigned u32 }
impl_numeric!{ @unsigned u64 }
impl_numeric!{ @fp f32 }
impl_numeric!{ @fp f64 }

/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : NumericBase;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another, using the default tolerance
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    // Exact equality first, so matching infinities compare as equal
                    self == rhs || <$ty as NumericBase>::abs_diff(self, rhs) <= epsilon
                }
            }
        )*
    };
}
impl_approx_eq!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    type Epsilon: NumericBase;

    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to 0, using the default tolerance
    fn is_zero(self) -> bool {
        self.is_close_to_zero(Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx_zero {
    {$($ty:ty),*} => {
        $(
            impl ApproxZero for $ty {
                type Epsilon = $ty;

                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    <$ty as NumericBase>::abs_diff(self, 0 as $ty) <= epsilon
                }
            }
        )*
    };
}
impl_approx_zero!{i8, i16, i32, i64, u8, u16, u32, u64, f32, f64}

/// Defines a type that is numeric
pub trait Numeric : NumericBase + ApproxEq<Epsilon = Self> + ApproxZero<Epsilon = Self> + MathConsts {
}

impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Arithmatic type representing a signed number
pub trait Signed : Numeric + Neg<Output = Self>
{}

impl Signed for i8 {}
impl Signed for i16 {}
impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for f32 {}
impl Signed for f64 {}

/// Arithmatic type representing a real number
pub trait Real : Signed {
    /// Get a ceil of the value
    fn ceil(self) -> Self;
    /// Get a floor of the value
    fn floor(self) -> Self;
    /// Round the value to the nearest integer
    fn round(self) -> Self;

    /// Get the fractional part of the value
    fn fract(self) -> Self;

    /// Calculate the sine of the value
    fn sin(self) -> Self;
    /// Calculate the cosine of the value
    fn cos(self) -> Self;
    /// Calculate the sine and cosine simultaniously (this may result in a faster calculation)
    fn sin_cos(self) -> (Self, Self);
    /// Calculate the tangent of the value
    fn tan(self) -> Self;
    /// Calculate the arcsine of the value
    fn asin(self) -> Self;
    /// Calculate the arccosine of the value
    fn acos(self) -> Self;
    /// Calculate the arctangent of the value
    fn atan(self) -> Self;
    /// Calculate the tangent of the value, from a given x and y coordinate
    fn atan2(y: Self, x: Self) -> Self;

    /// Calculate the hyperbolic sine of the value
    fn sinh(self) -> Self;
    /// Calculate the hyperbolic cosine of the value
    fn cosh(self) -> Self;

    /// Calculate `e^self`
    fn exp(self) -> Self;
    /// Calculate the natural logarithm of the value
    fn ln(self) -> Self;
    /// Raise the value to a real power
    fn powf(self, n: Self) -> Self;

    /// Check if the value is `NaN`
    fn is_nan(self) -> bool;
    /// Check if the sign bit is set, including for `-0.0`
    fn is_sign_negative(self) -> bool;

    /// Create a numeric from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a numeric from an f64
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            fn ceil(self) -> Self {
                self.ceil()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn fract(self) -> Self {
                self.fract()
            }

            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn sin_cos(self) -> (Self, Self) {
                self.sin_cos()
            }

            fn tan(self) -> Self {
                self.tan()
            }

            fn asin(self) -> Self {
                self.asin()
            }

            fn acos(self) -> Self {
                self.acos()
            }

            fn atan(self) -> Self {
                self.atan()
            }

            fn atan2(y: Self, x: Self) -> Self {
                <$ty>::atan2(y, x)
            }

            fn sinh(self) -> Self {
                self.sinh()
            }

            fn cosh(self) -> Self {
                self.cosh()
            }

            fn exp(self) -> Self {
                self.exp()
            }

            fn ln(self) -> Self {
                self.ln()
            }

            fn powf(self, n: Self) -> Self {
                self.powf(n)
            }

            fn is_nan(self) -> bool {
                self.is_nan()
            }

            fn is_sign_negative(self) -> bool {
                self.is_sign_negative()
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn default_tolerance() {
        assert_eq!(<f32 as NumericBase>::EPSILON, 4.76837158e-7);
        assert_eq!(<f64 as NumericBase>::EPSILON, 8.8817841970012523e-16);
        assert_eq!(<i32 as NumericBase>::EPSILON, 0);
    }

    #[test]
    fn approx_eq() {
        assert!(1f32.is_approx_eq(1f32 + 1e-7));
        assert!(!1f32.is_approx_eq(1.001f32));
        assert!(f64::INFINITY.is_approx_eq(f64::INFINITY));
        assert!(!f64::NAN.is_approx_eq(f64::NAN));
        assert!(3i32.is_approx_eq(3));
        assert!(!3u8.is_approx_eq(4));
        assert!(0.5f64.is_close_to(0.6, 0.2));
    }

    #[test]
    fn approx_zero() {
        assert!(1e-8f32.is_zero());
        assert!(!1e-3f32.is_zero());
        assert!(0i64.is_zero());
    }

    #[test]
    fn signed_int_extremes() {
        assert!(!(-100i8).is_approx_eq(100));
        assert!(!0i32.is_approx_eq(i32::MIN));
        assert!(!i32::MIN.is_zero());
        assert!(!i64::MAX.is_close_to(i64::MIN, 1));
        assert!(!scalar::approx_eq(-100i8, 100));
        assert_eq!(NumericBase::abs_diff(-100i8, 100), i8::MAX);
        assert_eq!(NumericBase::abs_diff(-3i16, 4), 7);
        assert!(!i32v3::new(i32::MIN, 0, 0).is_zero());
    }

    #[test]
    fn sign() {
        assert_eq!(NumericBase::sign(-3i32), -1);
        assert_eq!(NumericBase::sign(0i32), 0);
        assert_eq!(NumericBase::sign(7u16), 1);
        assert_eq!(NumericBase::sign(-0.5f32), -1.0);
        assert_eq!(NumericBase::sign(0f64), 0.0);
    }
}
