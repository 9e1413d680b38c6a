use core::ops::*;
use crate::*;

impl<T: Real> Mat4<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m03: T, m10: T, m11: T, m12: T, m13: T, m20: T, m21: T, m22: T, m23: T, m30: T, m31: T, m32: T, m33: T) -> Self {
        Self::from_array([m00, m01, m02, m03,
                          m10, m11, m12, m13,
                          m20, m21, m22, m23,
                          m30, m31, m32, m33])
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec4<T>, row1: Vec4<T>, row2: Vec4<T>, row3: Vec4<T>) -> Self {
        Self::from_array([row0.x, row0.y, row0.z, row0.w,
                          row1.x, row1.y, row1.z, row1.w,
                          row2.x, row2.y, row2.z, row2.w,
                          row3.x, row3.y, row3.z, row3.w])
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec4<T>, column1: Vec4<T>, column2: Vec4<T>, column3: Vec4<T>) -> Self {
        Self::from_array([column0.x, column1.x, column2.x, column3.x,
                          column0.y, column1.y, column2.y, column3.y,
                          column0.z, column1.z, column2.z, column3.z,
                          column0.w, column1.w, column2.w, column3.w])
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        Vec4::new(self[(index, 0)], self[(index, 1)], self[(index, 2)], self[(index, 3)])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        Vec4::new(self[(0, index)], self[(1, index)], self[(2, index)], self[(3, index)])
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec4<T> {
        Vec4 { x: self[0], y: self[5], z: self[10], w: self[15] }
    }

    /// Get the minor matrix for the given `row` and `column`
    pub fn minor(self, row: usize, column: usize) -> Result<Mat3<T>> {
        crate::error::check_index(row, 4)?;
        crate::error::check_index(column, 4)?;
        Ok(self.minor_unchecked(row, column))
    }

    fn minor_unchecked(self, row: usize, column: usize) -> Mat3<T> {
        let mut vals = [T::zero(); 9];
        let mut idx = 0;
        for r in (0..4).filter(|r| *r != row) {
            for c in (0..4).filter(|c| *c != column) {
                vals[idx] = self[(r, c)];
                idx += 1;
            }
        }
        Mat3::from_array(vals)
    }

    /// Calculate the determinant, expanding along the first row
    #[must_use]
    pub fn determinant(self) -> T {
        (0..4).fold(T::zero(), |acc, column| {
            let term = self[column] * self.minor_unchecked(0, column).determinant();
            if column % 2 == 0 { acc + term } else { acc - term }
        })
    }

    /// Calculate the adjoint (transposed cofactor matrix)
    #[must_use]
    pub fn adjoint(self) -> Self {
        self.cofactor().transposed()
    }

    /// Calculate the cofactor matrix
    #[must_use]
    pub fn cofactor(self) -> Self {
        let mut vals = [T::zero(); 16];
        for (idx, val) in vals.iter_mut().enumerate() {
            let (row, column) = (idx / 4, idx % 4);
            let det = self.minor_unchecked(row, column).determinant();
            *val = if (row + column) % 2 == 0 { det } else { -det };
        }
        Self::from_array(vals)
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

    /// Transform a `Vec4`
    #[inline]
    #[must_use]
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        Vec4::new(self.row(0).dot(vec), self.row(1).dot(vec), self.row(2).dot(vec), self.row(3).dot(vec))
    }

    /// Transform a `Vec3` as a direction (implicit w-coord with a value of 0)
    #[inline]
    #[must_use]
    pub fn transform_vector(self, vec: Vec3<T>) -> Vec3<T> {
        self.transform(vec.extend(T::zero())).shrink()
    }

    /// Transform a `Vec3` as a point (implicit w-coord with a value of 1), the resulting w-coord is dropped
    #[inline]
    #[must_use]
    pub fn transform_point(self, vec: Vec3<T>) -> Vec3<T> {
        self.transform(vec.extend(T::one())).shrink()
    }

    /// Create a 3d translation matrix
    #[must_use]
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();
        Self::from_array([one , zero, zero, trans.x,
                          zero, one , zero, trans.y,
                          zero, zero, one , trans.z,
                          zero, zero, zero, one    ])
    }

    /// Create a 3d scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();
        Self::from_array([scale.x, zero   , zero   , zero    ,
                          zero   , scale.y, zero   , zero    ,
                          zero   , zero   , scale.z, zero    ,
                          zero   , zero   , zero   , T::one()])
    }

    /// Create a 3d rotation matrix from a unit quaternion
    #[must_use]
    pub fn create_rotation(rot: Quat<T>) -> Self {
        let xx = rot.x * rot.x;
        let yy = rot.y * rot.y;
        let zz = rot.z * rot.z;

        let xw = rot.x * rot.w;
        let yw = rot.y * rot.w;
        let zw = rot.z * rot.w;

        let xy = rot.x * rot.y;
        let xz = rot.x * rot.z;
        let yz = rot.y * rot.z;

        let zero = T::zero();
        let one = T::one();
        let two = T::from_i32(2);

        Self::from_array([one - two * (yy + zz),       two * (xy - zw),       two * (xz + yw), zero,
                                two * (xy + zw), one - two * (xx + zz),       two * (yz - xw), zero,
                                two * (xz - yw),       two * (yz + xw), one - two * (xx + yy), zero,
                          zero                 , zero                 , zero                 , one ])
    }
}

impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let rows = [self.row(0), self.row(1), self.row(2), self.row(3)];
        let columns = [rhs.column(0), rhs.column(1), rhs.column(2), rhs.column(3)];

        let mut vals = [T::zero(); 16];
        for (r, row) in rows.iter().enumerate() {
            for (c, column) in columns.iter().enumerate() {
                vals[r * 4 + c] = row.dot(*column);
            }
        }
        Self::from_array(vals)
    }
}

impl<T: Real> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, rhs: Vec4<T>) -> Self::Output {
        self.transform(rhs)
    }
}

#[allow(non_camel_case_types)] pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)] pub type f64m4 = Mat4<f64>;
