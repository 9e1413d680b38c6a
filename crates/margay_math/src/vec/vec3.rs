use core::{
    ops::*,
    fmt::Display,
};
use crate::*;

impl<T: Numeric> Vec3<T> {
    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Shrink a `Vec3` to a `Vec2`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Calculate the scalar triple product `self . (b x c)`
    #[inline]
    #[must_use]
    pub fn triple(self, b: Self, c: Self) -> T {
        self.dot(b.cross(c))
    }
}

impl<T: Real> Vec3<T> {
    /// Transform the vector by a matrix
    #[inline(always)]
    #[must_use]
    pub fn transform(self, mat: Mat3<T>) -> Self {
        mat.transform(self)
    }

    /// Reflect a vector on a 'surface' with a normal
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        debug_assert!(normal.is_close_to_normalized(T::from_f32(1e-4)));
        let two = T::one() + T::one();
        self - normal * (self.dot(normal) * two)
    }

    /// Get the angle in radians between 2 vectors, fails if either vector has a length of 0
    pub fn angle_between(self, other: Self) -> Result<T> {
        let len = self.len() * other.len();
        if len == T::zero() {
            return Err(Error::DivideByZero);
        }
        let cos = (self.dot(other) / len).clamp(-T::one(), T::one());
        Ok(cos.acos())
    }
}

impl<T: Real> Mul<Mat3<T>> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Mat3<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Numeric> Display for Vec3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

// Constants
impl<T: Signed> Vec3<T> {
    pub fn unit_x() -> Self { Self{ x: T::one() , y: T::zero(), z: T::zero() } }
    pub fn unit_y() -> Self { Self{ x: T::zero(), y: T::one() , z: T::zero() } }
    pub fn unit_z() -> Self { Self{ x: T::zero(), y: T::zero(), z: T::one()  } }
}
