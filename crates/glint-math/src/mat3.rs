//! 3x3 matrix type for pure rotations and other linear maps.
//!
//! [`Matrix3x3`] stores three [`Vector3`] rows. It is the rotation-only
//! subset of [`Matrix4x4`](crate::Matrix4x4): no translation, no
//! projection. Multiplication follows the column-vector convention
//! (`M * v` applies `M` to `v`).
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Matrix3x3, Vector3};
//!
//! let m = Matrix3x3::<f32>::IDENTITY;
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! assert_eq!(m * v, v);
//! assert_eq!(m.determinant(), 1.0);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, Result};
use crate::real::Real;
use crate::vec3::Vector3;

/// A 3x3 matrix with row-major storage.
///
/// `m[i]` is row `i`; `m.get(i, j)` is the element in row `i`, column `j`.
/// `Default` is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix3x3<R: Real> {
    rows: [Vector3<R>; 3],
}

impl<R: Real> Matrix3x3<R> {
    /// All-zero matrix.
    pub const ZERO: Self = Self {
        rows: [Vector3::ZERO; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z],
    };

    /// Creates a matrix from three rows.
    #[inline]
    pub const fn from_rows(r0: Vector3<R>, r1: Vector3<R>, r2: Vector3<R>) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a matrix from a row-major 3x3 array.
    #[inline]
    pub const fn from_rows_array(a: [[R; 3]; 3]) -> Self {
        Self::from_rows(
            Vector3::from_array(a[0]),
            Vector3::from_array(a[1]),
            Vector3::from_array(a[2]),
        )
    }

    /// Creates a matrix from the first 9 scalars of a row-major buffer.
    ///
    /// Returns [`MathError::BufferTooShort`] if the buffer holds fewer
    /// than 9 elements.
    #[inline]
    pub fn try_from_slice(s: &[R]) -> Result<Self> {
        if s.len() < 9 {
            return Err(MathError::buffer_too_short(9, s.len()));
        }
        Ok(Self::from_rows_array([
            [s[0], s[1], s[2]],
            [s[3], s[4], s[5]],
            [s[6], s[7], s[8]],
        ]))
    }

    /// Casts the elements to another scalar precision.
    #[inline]
    pub fn cast<S: Real>(self) -> Matrix3x3<S> {
        Matrix3x3::from_rows(self.rows[0].cast(), self.rows[1].cast(), self.rows[2].cast())
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3<R> {
        self.rows[i]
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector3<R> {
        Vector3::new(self.rows[0][i], self.rows[1][i], self.rows[2][i])
    }

    /// Returns the element at row `i`, column `j`, or `None` when either
    /// index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<R> {
        if i < 3 && j < 3 {
            Some(self.rows[i][j])
        } else {
            None
        }
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> R {
        let [r0, r1, r2] = self.rows;
        r0.x * (r1.y * r2.z - r1.z * r2.y) - r0.y * (r1.x * r2.z - r1.z * r2.x)
            + r0.z * (r1.x * r2.y - r1.y * r2.x)
    }

    /// Computes the inverse via the adjugate.
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let [r0, r1, r2] = self.rows;
        // Cofactor matrix, already transposed (adjugate rows).
        let a0 = Vector3::new(
            r1.y * r2.z - r1.z * r2.y,
            r0.z * r2.y - r0.y * r2.z,
            r0.y * r1.z - r0.z * r1.y,
        );
        let a1 = Vector3::new(
            r1.z * r2.x - r1.x * r2.z,
            r0.x * r2.z - r0.z * r2.x,
            r0.z * r1.x - r0.x * r1.z,
        );
        let a2 = Vector3::new(
            r1.x * r2.y - r1.y * r2.x,
            r0.y * r2.x - r0.x * r2.y,
            r0.x * r1.y - r0.y * r1.x,
        );
        let det = r0.x * a0.x + r0.y * a1.x + r0.z * a2.x;
        if det == R::ZERO {
            return Err(MathError::singular(f64::of(det)));
        }
        let inv = R::ONE / det;
        Ok(Self::from_rows(a0 * inv, a1 * inv, a2 * inv))
    }

    /// Returns true if the matrix equals its transpose (exact comparison).
    #[inline]
    pub fn is_symmetric(&self) -> bool {
        let [r0, r1, r2] = self.rows;
        r0.y == r1.x && r0.z == r2.x && r1.z == r2.y
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }

    /// Exports as a row-major flat array.
    #[inline]
    pub fn to_row_major_array(&self) -> [R; 9] {
        let [r0, r1, r2] = self.rows;
        [r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z]
    }

    /// Exports as a column-major flat array, for GPU APIs that expect
    /// column-major buffers.
    #[inline]
    pub fn to_col_major_array(&self) -> [R; 9] {
        self.transpose().to_row_major_array()
    }

    /// Borrows the elements as a contiguous row-major slice of 9 scalars.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        // SAFETY: `Matrix3x3` is `#[repr(C)]` holding `[Vector3<R>; 3]`,
        // and `Vector3` is `#[repr(C)]` with three `R` fields, so the
        // storage is 9 contiguous scalars starting at `rows[0].x`.
        unsafe { std::slice::from_raw_parts(&raw const self.rows[0].x, 9) }
    }

    /// Mutably borrows the elements as a contiguous row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        // SAFETY: same layout argument as `as_slice`.
        unsafe { std::slice::from_raw_parts_mut(&raw mut self.rows[0].x, 9) }
    }
}

impl<R: Real> Default for Matrix3x3<R> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Row access
impl<R: Real> Index<usize> for Matrix3x3<R> {
    type Output = Vector3<R>;

    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    fn index(&self, i: usize) -> &Vector3<R> {
        &self.rows[i]
    }
}

impl<R: Real> IndexMut<usize> for Matrix3x3<R> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector3<R> {
        &mut self.rows[i]
    }
}

// Mat3 + Mat3
impl<R: Real> Add for Matrix3x3<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

// Mat3 - Mat3
impl<R: Real> Sub for Matrix3x3<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
        )
    }
}

// -Mat3
impl<R: Real> Neg for Matrix3x3<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_rows(-self.rows[0], -self.rows[1], -self.rows[2])
    }
}

// Mat3 * scalar
impl<R: Real> Mul<R> for Matrix3x3<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::from_rows(self.rows[0] * rhs, self.rows[1] * rhs, self.rows[2] * rhs)
    }
}

// Mat3 / scalar
impl<R: Real> Div<R> for Matrix3x3<R> {
    type Output = Self;

    /// Division by zero is not checked; IEEE inf/NaN elements result.
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::from_rows(self.rows[0] / rhs, self.rows[1] / rhs, self.rows[2] / rhs)
    }
}

// Mat3 * Mat3 (row by column)
impl<R: Real> Mul for Matrix3x3<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let c = [rhs.col(0), rhs.col(1), rhs.col(2)];
        Self::from_rows(
            Vector3::new(self.rows[0].dot(c[0]), self.rows[0].dot(c[1]), self.rows[0].dot(c[2])),
            Vector3::new(self.rows[1].dot(c[0]), self.rows[1].dot(c[1]), self.rows[1].dot(c[2])),
            Vector3::new(self.rows[2].dot(c[0]), self.rows[2].dot(c[1]), self.rows[2].dot(c[2])),
        )
    }
}

// Mat3 * Vec3 (column-vector convention)
impl<R: Real> Mul<Vector3<R>> for Matrix3x3<R> {
    type Output = Vector3<R>;

    #[inline]
    fn mul(self, v: Vector3<R>) -> Vector3<R> {
        Vector3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }
}

impl<R: Real> AddAssign for Matrix3x3<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Real> SubAssign for Matrix3x3<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Real> MulAssign for Matrix3x3<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: Real> MulAssign<R> for Matrix3x3<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<R: Real> DivAssign<R> for Matrix3x3<R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}

// scalar * Mat3
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Matrix3x3<$t>> for $t {
            type Output = Matrix3x3<$t>;

            #[inline]
            fn mul(self, m: Matrix3x3<$t>) -> Matrix3x3<$t> {
                m * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<R: Real> fmt::Display for Matrix3x3<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}", self.rows[0])?;
        writeln!(f, " {}", self.rows[1])?;
        write!(f, " {}]", self.rows[2])
    }
}

impl<R: Real> From<[[R; 3]; 3]> for Matrix3x3<R> {
    #[inline]
    fn from(a: [[R; 3]; 3]) -> Self {
        Self::from_rows_array(a)
    }
}

// glam stores matrices column-major, so conversion transposes both ways.
impl From<glam::Mat3> for Matrix3x3<f32> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        let a = m.transpose().to_cols_array_2d();
        Self::from_rows_array(a)
    }
}

impl From<Matrix3x3<f32>> for glam::Mat3 {
    #[inline]
    fn from(m: Matrix3x3<f32>) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&m.to_col_major_array())
    }
}

impl From<glam::DMat3> for Matrix3x3<f64> {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        let a = m.transpose().to_cols_array_2d();
        Self::from_rows_array(a)
    }
}

impl From<Matrix3x3<f64>> for glam::DMat3 {
    #[inline]
    fn from(m: Matrix3x3<f64>) -> glam::DMat3 {
        glam::DMat3::from_cols_array(&m.to_col_major_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix3x3<f64> {
        Matrix3x3::from_rows_array([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]])
    }

    #[test]
    fn test_identity_default() {
        let m = Matrix3x3::<f32>::default();
        assert_eq!(m, Matrix3x3::IDENTITY);
        assert_eq!(m * Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_row_col_get() {
        let m = sample();
        assert_eq!(m.row(1), Vector3::new(0.0, 1.0, 4.0));
        assert_eq!(m.col(2), Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(m.get(2, 1), Some(6.0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_determinant() {
        // det of the sample matrix is 1 (classic invertible example).
        assert_eq!(sample().determinant(), 1.0);
        assert_eq!(Matrix3x3::<f64>::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        let prod = m * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert!((prod.get(i, j).unwrap() - expect).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let m = Matrix3x3::<f32>::ZERO;
        assert!(m.inverse().unwrap_err().is_singular());
    }

    #[test]
    fn test_mat_mul_vs_identity() {
        let m = sample();
        assert_eq!(m * Matrix3x3::IDENTITY, m);
        assert_eq!(Matrix3x3::IDENTITY * m, m);
    }

    #[test]
    fn test_is_symmetric() {
        let s = Matrix3x3::from_rows_array([[1.0f32, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 9.0]]);
        assert!(s.is_symmetric());
        assert!(!sample().is_symmetric());
    }

    #[test]
    fn test_flat_exports() {
        let m = sample();
        let row = m.to_row_major_array();
        let col = m.to_col_major_array();
        assert_eq!(row[1], 2.0);
        assert_eq!(col[1], 0.0);
        assert_eq!(m.as_slice(), &row);
    }

    #[test]
    fn test_glam_round_trip() {
        let m = sample();
        let g: glam::DMat3 = m.into();
        assert_eq!(Matrix3x3::from(g), m);
        // Column-major on the glam side.
        assert_eq!(g.col(0).y, 0.0);
    }

    #[test]
    fn test_scalar_ops() {
        let m = Matrix3x3::<f64>::IDENTITY * 2.0;
        assert_eq!(m.get(0, 0), Some(2.0));
        assert_eq!((2.0 * Matrix3x3::<f64>::IDENTITY), m);
        assert_eq!((m / 2.0), Matrix3x3::IDENTITY);
    }
}
