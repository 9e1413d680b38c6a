use core::{
    ops::*,
    fmt::Display,
    str::FromStr,
};
use crate::{*, parse::{parse_tuple, write_tuple}};

/// Complex number
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Real"))]
    pub re : T,
    #[cfg_attr(feature = "serde", serde(rename = "Imaginary"))]
    pub im : T,
}

impl<T: Real> Complex<T> {
    /// Create a new complex number
    #[inline]
    #[must_use]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Create a complex number with only a real part
    #[inline]
    #[must_use]
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// Get the imaginary unit
    #[inline]
    #[must_use]
    pub fn i() -> Self {
        Self { re: T::zero(), im: T::one() }
    }

    /// Create a complex number from its polar form
    #[inline]
    #[must_use]
    pub fn from_polar(modulus: T, arg: T) -> Self {
        let (sin, cos) = arg.sin_cos();
        Self { re: modulus * cos, im: modulus * sin }
    }

    /// Get the components as an array in `(re, im)` order
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; 2] {
        [self.re, self.im]
    }

    /// Calculate the squared modulus
    #[inline]
    #[must_use]
    pub fn modulus_sq(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Calculate the modulus
    #[inline]
    #[must_use]
    pub fn modulus(self) -> T {
        self.modulus_sq().sqrt()
    }

    /// Get the argument (angle to the positive real axis) in the range `[-pi, pi]`
    #[inline]
    #[must_use]
    pub fn arg(self) -> T {
        T::atan2(self.im, self.re)
    }

    /// Get the complex conjugate
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// Calculate `1 / self`, fails if the modulus is 0
    pub fn reciprocal(self) -> Result<Self> {
        let modulus_sq = self.modulus_sq();
        if modulus_sq == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.conjugate() / modulus_sq)
    }

    /// Normalize the complex number in place, fails if the modulus is 0
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Get a copy with a modulus of 1, fails if the modulus is 0
    pub fn normalized(self) -> Result<Self> {
        let modulus = self.modulus();
        if modulus == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self / modulus)
    }

    /// Calculate the principal square root
    #[must_use]
    pub fn sqrt(self) -> Self {
        let zero = T::zero();
        if self.re == zero && self.im == zero {
            return Self::zero();
        }

        // The sign of the imaginary part, including a signed zero, picks the side of the branch cut
        let negative_im = self.im.is_sign_negative();
        if self.im == zero {
            return if self.re > zero {
                Self::new(self.re.sqrt(), self.im)
            } else {
                let im = (-self.re).sqrt();
                Self::new(zero, if negative_im { -im } else { im })
            };
        }

        let half = T::from_f32(0.5);
        let modulus = self.modulus();
        let re = ((modulus + self.re) * half).sqrt();
        let im = ((modulus - self.re) * half).sqrt();
        Self::new(re, if negative_im { -im } else { im })
    }

    /// Calculate `e^self`
    #[must_use]
    pub fn exp(self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }

    /// Calculate the principal natural logarithm, the logarithm of 0 is `(-inf, 0)`
    #[must_use]
    pub fn ln(self) -> Self {
        let zero = T::zero();
        if self.re == zero && self.im == zero {
            return Self::new(-T::one() / zero, zero);
        }
        if self.im == zero && self.re > zero {
            return Self::from_real(self.re.ln());
        }
        Self::new(self.modulus().ln(), self.arg())
    }

    /// Raise the complex number to a real power
    #[must_use]
    pub fn powf(self, n: T) -> Self {
        if self.re == T::zero() && self.im == T::zero() {
            return Self::zero();
        }
        Self::from_polar(self.modulus().powf(n), self.arg() * n)
    }

    /// Calculate the sine
    #[must_use]
    pub fn sin(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self::new(sin * self.im.cosh(), cos * self.im.sinh())
    }

    /// Calculate the cosine
    #[must_use]
    pub fn cos(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self::new(cos * self.im.cosh(), -sin * self.im.sinh())
    }

    /// Calculate the tangent
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Divide by another complex number, fails if `rhs` has a modulus of 0
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.modulus_sq() == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self / rhs)
    }

    /// Divide by a scalar, fails if `rhs` is exactly 0
    pub fn checked_div_scalar(self, rhs: T) -> Result<Self> {
        if rhs == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self / rhs)
    }

    /// Add 2 complex numbers and write the result into `out`
    #[inline]
    pub fn add_into(self, rhs: Self, out: &mut Self) {
        *out = self + rhs;
    }

    /// Subtract 2 complex numbers and write the result into `out`
    #[inline]
    pub fn sub_into(self, rhs: Self, out: &mut Self) {
        *out = self - rhs;
    }

    /// Multiply 2 complex numbers and write the result into `out`
    #[inline]
    pub fn mul_into(self, rhs: Self, out: &mut Self) {
        *out = self * rhs;
    }

    /// Divide 2 complex numbers and write the result into `out`, fails if `rhs` has a modulus of 0
    #[inline]
    pub fn div_into(self, rhs: Self, out: &mut Self) -> Result<()> {
        *out = self.checked_div(rhs)?;
        Ok(())
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Zero for Complex<T> {
    fn zero() -> Self {
        Self { re: T::zero(), im: T::zero() }
    }
}

impl<T: Real> One for Complex<T> {
    fn one() -> Self {
        Self::from_real(T::one())
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { re: -self.re, im: -self.im }
    }
}

macro_rules! impl_complex_op {
    {$trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $op:tt} => {
        impl<T: Real> $trait<T> for Complex<T> {
            type Output = Self;

            fn $func(self, rhs: T) -> Self::Output {
                Self { re: self.re $op rhs, im: self.im $op rhs }
            }
        }

        impl<T: Real> $assign_trait for Complex<T> {
            fn $assign_func(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Real> $assign_trait<T> for Complex<T> {
            fn $assign_func(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}
impl_complex_op!{Add, add, AddAssign, add_assign, +}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}
impl_complex_op!{Sub, sub, SubAssign, sub_assign, -}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { re: self.re * rhs.re - self.im * rhs.im,
               im: self.re * rhs.im + self.im * rhs.re }
    }
}
impl_complex_op!{Mul, mul, MulAssign, mul_assign, *}

impl<T: Real> Div for Complex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.modulus_sq();
        Self { re: (self.re * rhs.re + self.im * rhs.im) / denom,
               im: (self.im * rhs.re - self.re * rhs.im) / denom }
    }
}
impl_complex_op!{Div, div, DivAssign, div_assign, /}

macro_rules! impl_complex_premul {
    {$($ty:ty),*} => {
        $(
            impl Mul<Complex<$ty>> for $ty {
                type Output = Complex<$ty>;

                fn mul(self, rhs: Complex<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}
impl_complex_premul!{f32, f64}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> ApproxEq for Complex<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.re.is_close_to(rhs.re, epsilon) && self.im.is_close_to(rhs.im, epsilon)
    }
}

impl<T: Real> ApproxZero for Complex<T> {
    type Epsilon = T;

    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.re.is_close_to_zero(epsilon) && self.im.is_close_to_zero(epsilon)
    }
}

impl<T: Real> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Real> From<[T; 2]> for Complex<T> {
    fn from(arr: [T; 2]) -> Self {
        Self { re: arr[0], im: arr[1] }
    }
}

impl<T: Real> Display for Complex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Real> FromStr for Complex<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 2>(s).map(Self::from)
    }
}

#[allow(non_camel_case_types)] pub type f32complex = Complex<f32>;
#[allow(non_camel_case_types)] pub type f64complex = Complex<f64>;
