use core::ops::*;
use crate::*;

impl<T: Real> Mat3<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self::from_array([m00, m01, m02,
                          m10, m11, m12,
                          m20, m21, m22])
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>) -> Self {
        Self::from_array([row0.x, row0.y, row0.z,
                          row1.x, row1.y, row1.z,
                          row2.x, row2.y, row2.z])
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec3<T>, column1: Vec3<T>, column2: Vec3<T>) -> Self {
        Self::from_array([column0.x, column1.x, column2.x,
                          column0.y, column1.y, column2.y,
                          column0.z, column1.z, column2.z])
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec3<T> {
        Vec3::new(self[(index, 0)], self[(index, 1)], self[(index, 2)])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec3<T> {
        Vec3::new(self[(0, index)], self[(1, index)], self[(2, index)])
    }

    /// Get the minor matrix for the given `row` and `column`
    pub fn minor(self, row: usize, column: usize) -> Result<Mat2<T>> {
        crate::error::check_index(row, 3)?;
        crate::error::check_index(column, 3)?;

        let mut vals = [T::zero(); 4];
        let mut idx = 0;
        for r in (0..3).filter(|r| *r != row) {
            for c in (0..3).filter(|c| *c != column) {
                vals[idx] = self[(r, c)];
                idx += 1;
            }
        }
        Ok(Mat2::from_array(vals))
    }

    /// Calculate the determinant
    #[must_use]
    pub fn determinant(self) -> T {
        self[0] * (self[4] * self[8] - self[7] * self[5]) - self[1] * (self[3] * self[8] - self[5] * self[6]) + self[2] * (self[3] * self[7] - self[4] * self[6])
    }

    /// Calculate the adjoint (transposed cofactor matrix)
    #[must_use]
    pub fn adjoint(self) -> Self {
        self.cofactor().transposed()
    }

    /// Calculate the cofactor matrix
    #[must_use]
    pub fn cofactor(self) -> Self {
        let tmp00 = self[4] * self[8] - self[5] * self[7]; //  det(m11, m12, m21, m22)
        let tmp01 = self[5] * self[6] - self[3] * self[8]; // -det(m10, m12, m20, m22)
        let tmp02 = self[3] * self[7] - self[4] * self[6]; //  det(m10, m11, m20, m21)

        let tmp10 = self[2] * self[7] - self[1] * self[8]; // -det(m01, m02, m21, m22)
        let tmp11 = self[0] * self[8] - self[2] * self[6]; //  det(m00, m02, m20, m22)
        let tmp12 = self[1] * self[6] - self[0] * self[7]; // -det(m00, m01, m20, m21)

        let tmp20 = self[1] * self[5] - self[2] * self[4]; //  det(m01, m02, m11, m12)
        let tmp21 = self[2] * self[3] - self[0] * self[5]; // -det(m00, m02, m10, m12)
        let tmp22 = self[0] * self[4] - self[1] * self[3]; //  det(m00, m01, m10, m11)

        Self::from_array([tmp00, tmp01, tmp02,
                          tmp10, tmp11, tmp12,
                          tmp20, tmp21, tmp22])
    }

    /// Calculate the inverse, fails if the determinant is 0
    pub fn inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(Error::NotInvertible);
        }
        Ok(self.adjoint() / det)
    }

    /// Transform a `Vec3`
    #[inline]
    #[must_use]
    pub fn transform(self, vec: Vec3<T>) -> Vec3<T> {
        Vec3::new(self.row(0).dot(vec), self.row(1).dot(vec), self.row(2).dot(vec))
    }

    /// Create a 3d scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();
        Self::from_array([scale.x, zero   , zero   ,
                          zero   , scale.y, zero   ,
                          zero   , zero   , scale.z])
    }
}

impl<T: Real> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let rows = [self.row(0), self.row(1), self.row(2)];
        let columns = [rhs.column(0), rhs.column(1), rhs.column(2)];

        let mut vals = [T::zero(); 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, column) in columns.iter().enumerate() {
                vals[r * 3 + c] = row.dot(*column);
            }
        }
        Self::from_array(vals)
    }
}

impl<T: Real> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.transform(rhs)
    }
}

#[allow(non_camel_case_types)] pub type f32m3 = Mat3<f32>;
#[allow(non_camel_case_types)] pub type f64m3 = Mat3<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    fn sample() -> f64m3 {
        Mat3::new(2.0, 0.0, 1.0,
                  1.0, 3.0, 2.0,
                  1.0, 1.0, 2.0)
    }

    #[test]
    fn minor() {
        let mat = sample();
        assert_eq!(mat.minor(0, 0), Ok(Mat2::new(3.0, 2.0, 1.0, 2.0)));
        assert_eq!(mat.minor(1, 2), Ok(Mat2::new(2.0, 0.0, 1.0, 1.0)));
        assert_eq!(mat.minor(3, 0), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn determinant() {
        assert_eq!(sample().determinant(), 6.0);
        assert_eq!(f64m3::identity().determinant(), 1.0);
        assert_eq!(f64m3::zero().determinant(), 0.0);
    }

    #[test]
    fn inverse() {
        let mat = sample();
        let inv = mat.inverse();
        assert!(inv.map(|inv| (mat * inv).is_close_to(Mat3::identity(), 1e-12)).unwrap_or(false));
        assert_eq!(f64m3::zero().inverse(), Err(Error::NotInvertible));
    }

    #[test]
    fn inverse_small_scale() {
        let mat = f64m3::identity() * 1e-6;
        let inv = mat.inverse();
        assert!(inv.map(|inv| (mat * inv).is_close_to(Mat3::identity(), 1e-12)).unwrap_or(false));
    }

    #[test]
    fn multiply_transform() {
        let mat = sample();
        assert_eq!(mat * f64m3::identity(), mat);
        assert_eq!(mat.transform(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 6.0, 4.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) * Mat3::create_scale(Vec3::set(2.0)), Vec3::new(2.0, 4.0, 6.0));
    }
}
