use core::{
    ops::*,
    fmt::Display,
};
use crate::*;

impl<T: Numeric> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Get the homogeneous point represented by the vector, fails if `w` is exactly 0
    pub fn to_point(self) -> Result<Vec3<T>> {
        if self.w == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.shrink() / self.w)
    }
}

impl<T: Real> Vec4<T> {
    /// Transform the vector by a matrix, treating it as a column vector (`mat * self`)
    #[inline(always)]
    #[must_use]
    pub fn transform(self, mat: Mat4<T>) -> Self {
        mat.transform(self)
    }
}

/// `vec * mat` applies the matrix to the vector as a column vector, so it is the same as `mat * vec`, not a row-vector product
impl<T: Real> Mul<Mat4<T>> for Vec4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Numeric> Display for Vec4<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn create_convert() {
        let vec = Vec4::new(1, 2, 3, 4);
        assert_eq!(vec.to_array(), [1, 2, 3, 4]);
        assert_eq!(vec.shrink(), Vec3::new(1, 2, 3));
        assert_eq!(Vec4::from_slice(&[1, 2, 3, 4]), Ok(vec));
        assert!(Vec4::<i32>::from_slice(&[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn components() {
        let mut vec = Vec4::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(vec[3], 4.0);
        assert_eq!(vec.set_component(3, 8.0), Ok(()));
        assert_eq!(vec.w, 8.0);
        assert_eq!(vec.component(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn length() {
        let vec = Vec4::new(1.0f32, 1.0, 1.0, 1.0);
        assert_eq!(vec.len(), 2.0);
        assert_eq!(vec.normalized(), Ok(Vec4::set(0.5)));
        assert_eq!(vec.dot(Vec4::new(1.0, 2.0, 3.0, 4.0)), 10.0);
    }

    #[test]
    fn matrix_product_is_column_vector() {
        let mat = Mat4::create_translation(Vec3::new(1.0f64, 2.0, 3.0));
        let point = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(point * mat, Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(point * mat, mat * point);
        // A row-vector product would have carried the translation into w
        assert_ne!(point * mat, Vec4::new(1.0, 1.0, 1.0, 7.0));
    }

    #[test]
    fn homogeneous() {
        assert_eq!(Vec4::new(2.0f32, 4.0, 6.0, 2.0).to_point(), Ok(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(Vec4::new(2.0f32, 4.0, 6.0, 0.0).to_point(), Err(Error::DivideByZero));
    }

    #[test]
    fn approx() {
        let a = Vec4::new(1.0f32, 2.0, 3.0, 4.0);
        let b = a + Vec4::set(1e-7);
        assert!(a.is_approx_eq(b));
        assert!(!a.is_approx_eq(Vec4::new(1.0, 2.0, 3.0, 4.1)));
        assert!(Vec4::set(1e-9f32).is_zero());
        assert!(!Vec4::new(0.0f32, 0.0, 0.0, 1.0).is_zero());
    }

    #[test]
    fn text() {
        let vec = Vec4::new(1.0f32, -0.5, 0.0, 2.25);
        assert_eq!(vec.to_string(), "(1, -0.5, 0, 2.25)");
        assert_eq!(vec.to_string().parse::<f32v4>(), Ok(vec));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let vec = Vec4::new(1.0f32, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&vec).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"X":1.0,"Y":2.0,"Z":3.0,"W":4.0}"#));
        assert_eq!(serde_json::from_str::<f32v4>(r#"{"W":4.0,"Z":3.0,"Y":2.0,"X":1.0}"#).map_err(|err| err.to_string()), Ok(vec));
    }
}
