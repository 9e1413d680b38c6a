use core::ops::*;
use crate::*;

impl<T: Real> Mat2<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self::from_array([m00, m01,
                          m10, m11])
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec2<T>, row1: Vec2<T>) -> Self {
        Self::from_array([row0.x, row0.y,
                          row1.x, row1.y])
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec2<T>, column1: Vec2<T>) -> Self {
        Self::from_array([column0.x, column1.x,
                          column0.y, column1.y])
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec2<T> {
        Vec2::new(self[(index, 0)], self[(index, 1)])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec2<T> {
        Vec2::new(self[(0, index)], self[(1, index)])
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec2<T> {
        Vec2 { x: self[0], y: self[3] }
    }

    /// Calculate the determinant
    #[inline]
    #[must_use]
    pub fn determinant(self) -> T {
        self[0] * self[3] - self[1] * self[2]
    }

    /// Calculate the adjoint (transposed cofactor matrix)
    #[must_use]
    pub fn adjoint(self) -> Self {
        Self::from_array([ self[3], -self[1],
                          -self[2],  self[0]])
    }

    /// Calculate the cofactor matrix
    #[must_use]
    pub fn cofactor(self) -> Self {
        Self::from_array([ self[3], -self[2],
                          -self[1],  self[0]])
    }

    /// Calculate the inverse, fails if the determinant is 0
    pub fn inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(Error::NotInvertible);
        }
        Ok(self.adjoint() / det)
    }

    /// Invert the matrix in place, fails if the determinant is 0
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Transform a `Vec2`
    #[inline]
    #[must_use]
    pub fn transform(self, vec: Vec2<T>) -> Vec2<T> {
        Vec2::new(self.row(0).dot(vec), self.row(1).dot(vec))
    }

    /// Create a 2d scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec2<T>) -> Self {
        let zero = T::zero();
        Self::from_array([scale.x, zero   ,
                          zero   , scale.y])
    }

    /// Create a 2d rotation matrix, rotating counter-clockwise by `angle` radians
    #[must_use]
    pub fn create_rotation(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_array([cos, -sin,
                          sin,  cos])
    }
}

impl<T: Real> Mul for Mat2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let row0 = self.row(0);
        let row1 = self.row(1);

        let column0 = rhs.column(0);
        let column1 = rhs.column(1);

        Self::from_array([row0.dot(column0), row0.dot(column1),
                          row1.dot(column0), row1.dot(column1)])
    }
}

impl<T: Real> MulAssign for Mat2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Vec2<T>> for Mat2<T> {
    type Output = Vec2<T>;

    fn mul(self, rhs: Vec2<T>) -> Self::Output {
        self.transform(rhs)
    }
}

#[allow(non_camel_case_types)] pub type f32m2 = Mat2<f32>;
#[allow(non_camel_case_types)] pub type f64m2 = Mat2<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn access() {
        let mut mat = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(mat[1], 2.0);
        assert_eq!(mat[(1, 0)], 3.0);
        assert_eq!(mat.get(3), Ok(4.0));
        assert_eq!(mat.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(mat.get_rc(0, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(mat.set_rc(1, 1, 8.0), Ok(()));
        assert_eq!(mat.row(1), Vec2::new(3.0, 8.0));
        assert_eq!(mat.column(0), Vec2::new(1.0, 3.0));
        assert_eq!(mat.to_array(), [1.0, 2.0, 3.0, 8.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let mat = f64m2::identity();
        let val = mat[(0, 2)];
        assert_eq!(val, 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Mat2::new(5.0f64, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Mat2::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Mat2::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Mat2::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, Mat2::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, Mat2::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a.checked_div_scalar(0.0), Err(Error::DivideByZero));
    }

    #[test]
    fn multiply() {
        let a = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Mat2::new(5.0f64, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Mat2::new(19.0, 22.0, 43.0, 50.0));
        assert_eq!(a * Mat2::identity(), a);

        let mut out = Mat2::zero();
        a.mul_into(b, &mut out);
        assert_eq!(out, Mat2::new(19.0, 22.0, 43.0, 50.0));

        let mut c = a;
        c *= b;
        assert_eq!(c, out);
    }

    #[test]
    fn determinant_trace_transpose() {
        let mut mat = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(mat.determinant(), -2.0);
        assert_eq!(mat.trace(), 5.0);

        mat.transpose();
        assert_eq!(mat, Mat2::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(mat.transposed(), Mat2::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn inverse() {
        let mat = Mat2::new(4.0f64, 7.0, 2.0, 6.0);
        let inv = mat.inverse();
        assert_eq!(inv, Ok(Mat2::new(0.6, -0.7, -0.2, 0.4)));
        assert!(inv.map(|inv| (mat * inv).is_close_to(Mat2::identity(), 1e-12)).unwrap_or(false));
        assert_eq!(Mat2::new(1.0f64, 2.0, 2.0, 4.0).inverse(), Err(Error::NotInvertible));
    }

    #[test]
    fn inverse_small_scale() {
        let mat = Mat2::new(1e-9f64, 0.0, 0.0, 1e-9);
        let inv = mat.inverse();
        assert!(inv.map(|inv| (mat * inv).is_close_to(Mat2::identity(), 1e-12)).unwrap_or(false));
        assert!(inv.map(|inv| inv.is_close_to(Mat2::new(1e9, 0.0, 0.0, 1e9), 1e-3)).unwrap_or(false));
    }

    #[test]
    fn transform() {
        let mat = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(mat.transform(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 7.0));
        assert_eq!(mat * Vec2::new(0.0, 1.0), Vec2::new(2.0, 4.0));

        let rot = Mat2::create_rotation(core::f64::consts::FRAC_PI_2);
        assert!(rot.transform(Vec2::new(1.0, 0.0)).is_close_to(Vec2::new(0.0, 1.0), 1e-12));
        assert_eq!(Mat2::create_scale(Vec2::new(2.0f64, 3.0)).transform(Vec2::set(1.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn display() {
        assert_eq!(Mat2::new(1.0f64, 2.5, -3.0, 4.0).to_string(), "[[1, 2.5], [-3, 4]]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let mat = Mat2::new(1.0f64, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&mat).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"M11":1.0,"M12":2.0,"M21":3.0,"M22":4.0}"#));

        let parsed = serde_json::from_str::<f64m2>(r#"{"M22":4.0,"M21":3.0,"M12":2.0,"M11":1.0}"#).map_err(|err| err.to_string());
        assert_eq!(parsed, Ok(mat));
        assert!(serde_json::from_str::<f64m2>(r#"{"M11":1.0,"M12":2.0,"M21":3.0}"#).is_err());
        assert_eq!(serde_json::from_str::<f64m2>("[1.0, 2.0, 3.0, 4.0]").map_err(|err| err.to_string()), Ok(mat));
    }
}
