use core::{
    ops::*,
    fmt::Display,
};
use crate::*;

impl<T: Numeric> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Calculate the perpendicular dot product (the z-component of the 3D cross product) of 2 vectors
    #[inline]
    #[must_use]
    pub fn perp_dot(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: Signed> Vec2<T> {
    /// Get a vector that's perpendicular to the vector, rotated clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular_cw(self) -> Self {
        Vec2 { x: self.y, y: -self.x }
    }

    /// Get a vector that's perpendicular to the vector, rotated counter-clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular_ccw(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }
}

impl<T: Real> Vec2<T> {
    /// Transform the vector by a matrix
    #[inline(always)]
    #[must_use]
    pub fn transform(self, mat: Mat2<T>) -> Self {
        mat.transform(self)
    }

    /// Rotate the vector by a given angle in radians
    #[must_use]
    pub fn rotate(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2 { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos }
    }

    /// Get the angle in radians the vector makes with the x-axis
    #[must_use]
    pub fn angle(self) -> T {
        if self.x.is_zero() && self.y.is_zero() {
            T::zero()
        } else {
            T::atan2(self.y, self.x)
        }
    }
}

impl<T: Real> Mul<Mat2<T>> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Mat2<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Numeric> Display for Vec2<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn create_convert() {
        let vec = Vec2::new(1, 2);
        assert_eq!(vec.x, 1);
        assert_eq!(vec.y, 2);

        let vec = Vec2::set(4);
        assert_eq!(vec, Vec2 { x: 4, y: 4 });

        let vec: Vec2<i32> = [5, 6].into();
        assert_eq!(vec, Vec2::new(5, 6));
        assert_eq!(vec.to_array(), [5, 6]);
        assert_eq!(vec.to_vec(), vec![5, 6]);
        assert_eq!(Vec2::from_slice(&[1.0f32, 2.0]), Ok(Vec2::new(1.0, 2.0)));
        assert!(matches!(Vec2::<f32>::from_slice(&[1.0]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn components() {
        let mut vec = Vec2::new(1.0f32, 2.0);
        assert_eq!(vec[0], 1.0);
        assert_eq!(vec.component(1), Ok(2.0));
        assert_eq!(vec.component(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));

        vec[0] = 3.0;
        assert_eq!(vec.set_component(1, 5.0), Ok(()));
        assert_eq!(vec, Vec2::new(3.0, 5.0));
        assert_eq!(vec.set_component(7, 5.0), Err(Error::IndexOutOfRange { index: 7, len: 2 }));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let vec = Vec2::new(1, 2);
        let val = vec[2];
        assert_eq!(val, 0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0f32, 2.0);
        let b = Vec2::new(3.0f32, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut out = Vec2::zero();
        a.add_into(b, &mut out);
        assert_eq!(out, Vec2::new(4.0, -2.0));
        a.sub_into(b, &mut out);
        assert_eq!(out, Vec2::new(-2.0, 6.0));
        a.mul_into(3.0, &mut out);
        assert_eq!(out, Vec2::new(3.0, 6.0));
        assert_eq!(a.div_into(0.0, &mut out), Err(Error::DivideByZero));
        assert_eq!(out, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn division() {
        let a = Vec2::new(1.0f64, 2.0);
        assert_eq!(a.checked_div_scalar(2.0), Ok(Vec2::new(0.5, 1.0)));
        assert_eq!(a.checked_div_scalar(0.0), Err(Error::DivideByZero));
        assert_eq!(a.checked_div(Vec2::new(2.0, 0.0)), Err(Error::DivideByZero));

        let inf = a / 0.0;
        assert!(inf.x.is_infinite() && inf.y.is_infinite());
    }

    #[test]
    fn products() {
        let a = Vec2::new(1.0f32, 2.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.perp_dot(b), -2.0);
        assert_eq!(b.perp_dot(a), 2.0);
        assert_eq!(a.perpendicular_ccw().dot(a), 0.0);
        assert_eq!(a.perpendicular_cw(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn length() {
        let mut vec = Vec2::new(3.0f32, 4.0);
        assert_eq!(vec.len_sq(), 25.0);
        assert_eq!(vec.len(), 5.0);
        assert_eq!(vec.dist(Vec2::zero()), 5.0);

        assert_eq!(vec.normalize(), Ok(()));
        assert!(vec.is_normalized());
        assert!(vec.is_approx_eq(Vec2::new(0.6, 0.8)));

        let mut zero = Vec2::<f32>::zero();
        assert_eq!(zero.normalize(), Err(Error::DivideByZero));
        assert_eq!(zero, Vec2::zero());
    }

    #[test]
    fn comparisons() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(2, 3);
        assert!(a.all_lt(b));
        assert!(a.all_le(a));
        assert!(!a.all_lt(Vec2::new(2, 2)));
        assert!(b.all_gt(a));
        assert!(b.all_ge(Vec2::new(2, 0)));
        assert_eq!(a.min(Vec2::new(0, 5)), Vec2::new(0, 2));
        assert_eq!(a.max(Vec2::new(0, 5)), Vec2::new(1, 5));
    }

    #[test]
    fn rotation() {
        let vec = Vec2::new(1.0f64, 0.0).rotate(core::f64::consts::FRAC_PI_2);
        assert!(vec.is_close_to(Vec2::new(0.0, 1.0), 1e-12));
        assert!(vec.angle().is_close_to(core::f64::consts::FRAC_PI_2, 1e-12));
        assert_eq!(Vec2::<f64>::zero().angle(), 0.0);
    }

    #[test]
    fn text() {
        let vec = Vec2::new(1.5f32, -2.0);
        assert_eq!(vec.to_string(), "(1.5, -2)");
        assert_eq!("(1.5, -2)".parse::<f32v2>(), Ok(vec));
        assert_eq!(vec.to_string().parse::<f32v2>(), Ok(vec));
        assert!(matches!("(1.5)".parse::<f32v2>(), Err(Error::Parse(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let vec = Vec2::new(1.5f64, -2.0);
        let json = serde_json::to_string(&vec).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"X":1.5,"Y":-2.0}"#));
        assert_eq!(serde_json::from_str::<f64v2>(r#"{"Y":-2.0,"X":1.5}"#).map_err(|err| err.to_string()), Ok(vec));
        assert!(serde_json::from_str::<f64v2>(r#"{"x":1.5,"y":-2.0}"#).is_err());
    }
}
