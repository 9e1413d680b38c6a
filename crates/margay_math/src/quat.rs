use core::{
    ops::*,
    fmt::Display,
    str::FromStr,
};
use crate::{*, parse::{parse_tuple, write_tuple}};

/// Quaternion, `w` is the real part and `(x, y, z)` the imaginary part
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    pub w : T,
    #[cfg_attr(feature = "serde", serde(rename = "X"))]
    pub x : T,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y : T,
    #[cfg_attr(feature = "serde", serde(rename = "Z"))]
    pub z : T
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion
    #[inline]
    #[must_use]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Create a quaternion from an array in `(w, x, y, z)` order
    #[inline]
    #[must_use]
    pub fn from_array(arr: [T; 4]) -> Self {
        Self { w: arr[0], x: arr[1], y: arr[2], z: arr[3] }
    }

    /// Get the components as an array in `(w, x, y, z)` order
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Get the identity quaternion
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self { w: T::one(), x: T::zero(), y: T::zero(), z: T::zero() }
    }

    /// Create a quaternion from its real and imaginary part
    #[inline]
    #[must_use]
    pub fn from_real_and_imaginary(real: T, imaginary: Vec3<T>) -> Self {
        Self { w: real, x: imaginary.x, y: imaginary.y, z: imaginary.z }
    }

    /// Create a quaternion rotating `angle` radians around a normalized `axis`
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin, cos) = (angle / T::from_i32(2)).sin_cos();
        Self::from_real_and_imaginary(cos, axis * sin)
    }

    /// Get the real part
    #[inline]
    #[must_use]
    pub fn real(self) -> T {
        self.w
    }

    /// Get the imaginary part
    #[inline]
    #[must_use]
    pub fn imaginary(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Get the component at `index`, mapped to `(w, x, y, z)`
    pub fn component(self, index: usize) -> Result<T> {
        crate::error::check_index(index, 4)?;
        Ok(self[index])
    }

    /// Set the component at `index`, mapped to `(w, x, y, z)`
    pub fn set_component(&mut self, index: usize, val: T) -> Result<()> {
        crate::error::check_index(index, 4)?;
        self[index] = val;
        Ok(())
    }

    /// Calculate the squared norm
    #[inline]
    #[must_use]
    pub fn norm_sq(self) -> T {
        self.dot(self)
    }

    /// Calculate the norm
    #[inline]
    #[must_use]
    pub fn norm(self) -> T {
        self.norm_sq().sqrt()
    }

    /// Calculate the dot product of 2 quaternions
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { w: self.w, x: -self.x, y: -self.y, z: -self.z }
    }

    /// Normalize the quaternion in place, fails if the norm is 0
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Get a normalized copy of the quaternion, fails if the norm is 0
    pub fn normalized(self) -> Result<Self> {
        let norm = self.norm();
        if norm == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self / norm)
    }

    /// Check if the quaternion is normalized, using a given epsilon
    #[inline]
    #[must_use]
    pub fn is_close_to_normalized(self, epsilon: T) -> bool {
        self.norm_sq().is_close_to(T::one(), epsilon)
    }

    /// Check if the quaternion is normalized
    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.is_close_to_normalized(T::EPSILON)
    }

    /// Invert the quaternion in place, fails if the squared norm is 0
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Get the inverse of the quaternion (conjugate over the squared norm), fails if the squared norm is 0
    pub fn inverse(self) -> Result<Self> {
        let norm_sq = self.norm_sq();
        if norm_sq == T::zero() {
            return Err(Error::NotInvertible);
        }
        Ok(self.conjugate() / norm_sq)
    }

    /// Calculate the natural logarithm of the quaternion
    #[must_use]
    pub fn log(self) -> Self {
        let norm = self.norm();
        let img = self.imaginary();
        let img_len = img.len();

        // Near the real axis the imaginary direction is undefined
        if img_len.is_zero() {
            return Self::from_real_and_imaginary(norm.ln(), Vec3::zero());
        }

        let theta = (self.w / norm).clamp(-T::one(), T::one()).acos();
        Self::from_real_and_imaginary(norm.ln(), img * (theta / img_len))
    }

    /// Calculate the exponential of the quaternion
    #[must_use]
    pub fn exp(self) -> Self {
        let scale = self.w.exp();
        let img = self.imaginary();
        let theta = img.len();

        if theta.is_zero() {
            return Self::from_real_and_imaginary(scale, img * scale);
        }

        let (sin, cos) = theta.sin_cos();
        Self::from_real_and_imaginary(scale * cos, img * (scale * sin / theta))
    }

    /// Rotate a vector by a unit quaternion
    #[must_use]
    pub fn rotate(self, vec: Vec3<T>) -> Vec3<T> {
        let img = self.imaginary();
        let two = T::from_i32(2);
        let t = img.cross(vec) * two;
        vec + t * self.w + img.cross(t)
    }

    /// Spherical interpolation between 2 unit quaternions, following the shortest path
    #[must_use]
    pub fn slerp(self, other: Self, i: T) -> Self {
        let mut cos = self.dot(other);
        let mut other = other;
        if cos < T::zero() {
            cos = -cos;
            other = -other;
        }

        // Fall back to a linear interpolation when the quaternions are almost parallel
        if cos.is_close_to(T::one(), T::from_f32(1e-6)) {
            let res = self + (other - self) * i;
            return res.normalized().unwrap_or(res);
        }

        let theta = cos.acos();
        let sin = theta.sin();
        let a = ((T::one() - i) * theta).sin() / sin;
        let b = (i * theta).sin() / sin;
        self * a + other * b
    }

    /// Get the rotation matrix represented by the quaternion
    #[inline]
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        Mat4::create_rotation(self)
    }

    /// Divide by another quaternion (`self * rhs^-1`), fails if `rhs` has a norm of 0
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        match rhs.inverse() {
            Ok(inv) => Ok(self * inv),
            Err(_) => Err(Error::DivideByZero),
        }
    }

    /// Divide each component by a scalar, fails if `rhs` is exactly 0
    pub fn checked_div_scalar(self, rhs: T) -> Result<Self> {
        if rhs == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self / rhs)
    }

    /// Add 2 quaternions and write the result into `out`
    #[inline]
    pub fn add_into(self, rhs: Self, out: &mut Self) {
        *out = self + rhs;
    }

    /// Subtract 2 quaternions and write the result into `out`
    #[inline]
    pub fn sub_into(self, rhs: Self, out: &mut Self) {
        *out = self - rhs;
    }

    /// Multiply 2 quaternions and write the result into `out`
    #[inline]
    pub fn mul_into(self, rhs: Self, out: &mut Self) {
        *out = self * rhs;
    }

    /// Divide 2 quaternions and write the result into `out`, fails if `rhs` has a norm of 0
    #[inline]
    pub fn div_into(self, rhs: Self, out: &mut Self) -> Result<()> {
        *out = self.checked_div(rhs)?;
        Ok(())
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Index<usize> for Quat<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("index {index} is out of range for a quaternion")
        }
    }
}

impl<T: Real> IndexMut<usize> for Quat<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("index {index} is out of range for a quaternion")
        }
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { w: -self.w, x: -self.x, y: -self.y, z: -self.z }
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { w: self.w + rhs.w, x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<T: Real> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { w: self.w - rhs.w, x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<T: Real> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
               x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
               y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
               z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x }
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { w: self.w * rhs, x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl<T: Real> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self { w: self.w / rhs, x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

impl<T: Real> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Real> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> ApproxEq for Quat<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.w.is_close_to(rhs.w, epsilon) &&
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon)
    }
}

impl<T: Real> ApproxZero for Quat<T> {
    type Epsilon = T;

    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.w.is_close_to_zero(epsilon) &&
        self.x.is_close_to_zero(epsilon) &&
        self.y.is_close_to_zero(epsilon) &&
        self.z.is_close_to_zero(epsilon)
    }
}

impl<T: Real> From<[T; 4]> for Quat<T> {
    fn from(arr: [T; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: Real> Display for Quat<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Real> FromStr for Quat<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 4>(s).map(Self::from_array)
    }
}

#[allow(non_camel_case_types)] pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)] pub type f64quat = Quat<f64>;

#[cfg(test)]
mod tests {
    use crate::*;
    use core::f64::consts::FRAC_PI_2;

    fn random_quat(rng: &mut fastrand::Rng) -> f64quat {
        Quat::new(rng.f64() * 4.0 - 2.0, rng.f64() * 4.0 - 2.0, rng.f64() * 4.0 - 2.0, rng.f64() * 4.0 - 2.0)
    }

    #[test]
    fn components() {
        let mut quat = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(quat[0], 1.0);
        assert_eq!(quat[3], 4.0);
        assert_eq!(quat.component(1), Ok(2.0));
        assert_eq!(quat.component(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(quat.set_component(2, 7.0), Ok(()));
        assert_eq!(quat.y, 7.0);
        assert_eq!(quat.real(), 1.0);
        assert_eq!(quat.imaginary(), Vec3::new(2.0, 7.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let quat = f32quat::identity();
        let val = quat[4];
        assert_eq!(val, 0.0);
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::new(0.0f64, 1.0, 0.0, 0.0);
        let j = Quat::new(0.0f64, 0.0, 1.0, 0.0);
        let k = Quat::new(0.0f64, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -f64quat::identity());

        let a = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Quat::new(5.0f64, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Quat::new(-60.0, 12.0, 30.0, 24.0));

        let mut out = f64quat::identity();
        a.mul_into(b, &mut out);
        assert_eq!(out, a * b);
    }

    #[test]
    fn inverse() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..256 {
            let quat = random_quat(&mut rng);
            let inv = quat.inverse();
            assert!(inv.map(|inv| (quat * inv).is_close_to(Quat::identity(), 1e-12)).unwrap_or(false));
        }

        let mut quat = Quat::new(2.0f64, 0.0, 0.0, 0.0);
        assert_eq!(quat.invert(), Ok(()));
        assert_eq!(quat, Quat::new(0.5, 0.0, 0.0, 0.0));
        assert_eq!(Quat::new(0.0f64, 0.0, 0.0, 0.0).inverse(), Err(Error::NotInvertible));
    }

    #[test]
    fn normalize() {
        let mut quat = Quat::new(1.0f64, 1.0, 1.0, 1.0);
        assert_eq!(quat.normalize(), Ok(()));
        assert_eq!(quat, Quat::new(0.5, 0.5, 0.5, 0.5));
        assert!(quat.is_normalized());
        assert_eq!(Quat::new(0.0f64, 0.0, 0.0, 0.0).normalized(), Err(Error::DivideByZero));
    }

    #[test]
    fn division() {
        let a = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5f64, -1.0, 0.25, 2.0);
        let res = a.checked_div(b);
        assert!(res.map(|res| (res * b).is_close_to(a, 1e-12)).unwrap_or(false));
        assert_eq!(a.checked_div(Quat::new(0.0, 0.0, 0.0, 0.0)), Err(Error::DivideByZero));
        assert_eq!(a.checked_div_scalar(2.0), Ok(Quat::new(0.5, 1.0, 1.5, 2.0)));
        assert_eq!(a.checked_div_scalar(0.0), Err(Error::DivideByZero));
    }

    #[test]
    fn log_exp() {
        let quat = Quat::from_axis_angle(Vec3::new(0.0f64, 0.6, 0.8), 1.2);
        assert!(quat.log().exp().is_close_to(quat, 1e-12));

        let log = quat.log();
        assert!(log.w.is_close_to(0.0, 1e-12));
        assert!(log.imaginary().is_close_to(Vec3::new(0.0, 0.36, 0.48), 1e-12));

        assert_eq!(f64quat::identity().log(), Quat::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Quat::new(0.0f64, 0.0, 0.0, 0.0).exp(), f64quat::identity());
    }

    #[test]
    fn rotation() {
        let quat = Quat::from_axis_angle(Vec3::<f64>::unit_z(), FRAC_PI_2);
        assert!(quat.is_normalized());
        assert!(quat.rotate(Vec3::unit_x()).is_close_to(Vec3::unit_y(), 1e-12));
        assert!((quat * Vec3::unit_y()).is_close_to(-Vec3::unit_x(), 1e-12));

        let mat = quat.to_mat4();
        let vec = Vec3::new(1.0, 2.0, 3.0);
        assert!(mat.transform_point(vec).is_close_to(quat.rotate(vec), 1e-12));

        let half = f64quat::identity().slerp(quat, 0.5);
        assert!(half.is_close_to(Quat::from_axis_angle(Vec3::unit_z(), FRAC_PI_2 / 2.0), 1e-12));
    }

    #[test]
    fn text() {
        let quat = Quat::new(1.0f64, -0.5, 0.25, 3.0);
        assert_eq!(quat.to_string(), "(1, -0.5, 0.25, 3)");
        assert_eq!(quat.to_string().parse::<f64quat>(), Ok(quat));
        assert_eq!("(1, 2, 3)".parse::<f64quat>(), Err(Error::Parse(ParseErrorKind::ComponentCount { expected: 4, found: 3 })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let quat = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&quat).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"W":1.0,"X":2.0,"Y":3.0,"Z":4.0}"#));
        assert_eq!(serde_json::from_str::<f64quat>(r#"{"X":2.0,"Y":3.0,"Z":4.0,"W":1.0}"#).map_err(|err| err.to_string()), Ok(quat));
    }
}
