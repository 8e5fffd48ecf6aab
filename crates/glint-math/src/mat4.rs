//! 4x4 homogeneous transform matrix.
//!
//! [`Matrix4x4`] stores four [`Vector4`] rows, row-major, and applies to
//! column vectors (`M * v`). Translation therefore lives in the last
//! column, and composite transforms read right to left:
//! `projection * view * model`.
//!
//! Besides plain algebra the type carries the transform builders used by a
//! render loop: translation, scale, perspective and orthographic
//! projections, a right-handed view matrix, heading-pitch-roll Euler
//! rotations and axis-angle rotations.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Matrix4x4, Vector3, Vector4};
//!
//! let view = Matrix4x4::look_at(
//!     Vector3::new(0.0f32, 0.0, 5.0),
//!     Vector3::ZERO,
//!     Vector3::UNIT_Y,
//! );
//! // The look-at target sits 5 units down the camera's -z axis.
//! let target_in_view = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
//! assert!((target_in_view.z - -5.0).abs() < 1e-6);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, Result};
use crate::mat3::Matrix3x3;
use crate::real::Real;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// A 4x4 matrix with row-major storage and column-vector convention.
///
/// `m[i]` is row `i`. `Default` is the identity. Flat exports are offered
/// in both row-major and column-major order; GPU APIs that consume
/// column-major buffers want [`Matrix4x4::to_col_major_array`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix4x4<R: Real> {
    rows: [Vector4<R>; 4],
}

impl<R: Real> Matrix4x4<R> {
    /// All-zero matrix.
    pub const ZERO: Self = Self {
        rows: [Vector4::ZERO; 4],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [
            Vector4::new(R::ONE, R::ZERO, R::ZERO, R::ZERO),
            Vector4::new(R::ZERO, R::ONE, R::ZERO, R::ZERO),
            Vector4::new(R::ZERO, R::ZERO, R::ONE, R::ZERO),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        ],
    };

    /// Creates a matrix from four rows.
    #[inline]
    pub const fn from_rows(
        r0: Vector4<R>,
        r1: Vector4<R>,
        r2: Vector4<R>,
        r3: Vector4<R>,
    ) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Creates an affine matrix from three 3D rows.
    ///
    /// The rows get `w = 0` and the last row is `(0, 0, 0, 1)`: a linear
    /// map with no translation.
    #[inline]
    pub const fn from_rows_3(r0: Vector3<R>, r1: Vector3<R>, r2: Vector3<R>) -> Self {
        Self::from_rows(
            Vector4::from_vec3(r0, R::ZERO),
            Vector4::from_vec3(r1, R::ZERO),
            Vector4::from_vec3(r2, R::ZERO),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        )
    }

    /// Creates a matrix from a row-major 4x4 array.
    #[inline]
    pub const fn from_rows_array(a: [[R; 4]; 4]) -> Self {
        Self::from_rows(
            Vector4::from_array(a[0]),
            Vector4::from_array(a[1]),
            Vector4::from_array(a[2]),
            Vector4::from_array(a[3]),
        )
    }

    /// Creates a matrix from the first 16 scalars of a row-major buffer.
    ///
    /// Returns [`MathError::BufferTooShort`] if the buffer holds fewer
    /// than 16 elements.
    pub fn try_from_slice(s: &[R]) -> Result<Self> {
        if s.len() < 16 {
            return Err(MathError::buffer_too_short(16, s.len()));
        }
        Ok(Self::from_rows_array([
            [s[0], s[1], s[2], s[3]],
            [s[4], s[5], s[6], s[7]],
            [s[8], s[9], s[10], s[11]],
            [s[12], s[13], s[14], s[15]],
        ]))
    }

    /// Casts the elements to another scalar precision.
    #[inline]
    pub fn cast<S: Real>(self) -> Matrix4x4<S> {
        Matrix4x4::from_rows(
            self.rows[0].cast(),
            self.rows[1].cast(),
            self.rows[2].cast(),
            self.rows[3].cast(),
        )
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4<R> {
        self.rows[i]
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector4<R> {
        Vector4::new(self.rows[0][i], self.rows[1][i], self.rows[2][i], self.rows[3][i])
    }

    /// Returns the element at row `i`, column `j`, or `None` when either
    /// index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<R> {
        if i < 4 && j < 4 {
            Some(self.rows[i][j])
        } else {
            None
        }
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Computes the determinant.
    ///
    /// Uses paired 2x2 cofactors of the top and bottom halves, which is
    /// the full 4x4 Laplace expansion with shared subexpressions.
    pub fn determinant(&self) -> R {
        let m = &self.rows;

        let s0 = m[0].x * m[1].y - m[0].y * m[1].x;
        let s1 = m[0].x * m[1].z - m[0].z * m[1].x;
        let s2 = m[0].x * m[1].w - m[0].w * m[1].x;
        let s3 = m[0].y * m[1].z - m[0].z * m[1].y;
        let s4 = m[0].y * m[1].w - m[0].w * m[1].y;
        let s5 = m[0].z * m[1].w - m[0].w * m[1].z;

        let c5 = m[2].z * m[3].w - m[2].w * m[3].z;
        let c4 = m[2].y * m[3].w - m[2].w * m[3].y;
        let c3 = m[2].y * m[3].z - m[2].z * m[3].y;
        let c2 = m[2].x * m[3].w - m[2].w * m[3].x;
        let c1 = m[2].x * m[3].z - m[2].z * m[3].x;
        let c0 = m[2].x * m[3].y - m[2].y * m[3].x;

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Computes the inverse via the adjugate.
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let m = &self.rows;

        let s0 = m[0].x * m[1].y - m[0].y * m[1].x;
        let s1 = m[0].x * m[1].z - m[0].z * m[1].x;
        let s2 = m[0].x * m[1].w - m[0].w * m[1].x;
        let s3 = m[0].y * m[1].z - m[0].z * m[1].y;
        let s4 = m[0].y * m[1].w - m[0].w * m[1].y;
        let s5 = m[0].z * m[1].w - m[0].w * m[1].z;

        let c5 = m[2].z * m[3].w - m[2].w * m[3].z;
        let c4 = m[2].y * m[3].w - m[2].w * m[3].y;
        let c3 = m[2].y * m[3].z - m[2].z * m[3].y;
        let c2 = m[2].x * m[3].w - m[2].w * m[3].x;
        let c1 = m[2].x * m[3].z - m[2].z * m[3].x;
        let c0 = m[2].x * m[3].y - m[2].y * m[3].x;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det == R::ZERO {
            return Err(MathError::singular(f64::of(det)));
        }
        let inv = R::ONE / det;

        Ok(Self::from_rows_array([
            [
                (m[1].y * c5 - m[1].z * c4 + m[1].w * c3) * inv,
                (-m[0].y * c5 + m[0].z * c4 - m[0].w * c3) * inv,
                (m[3].y * s5 - m[3].z * s4 + m[3].w * s3) * inv,
                (-m[2].y * s5 + m[2].z * s4 - m[2].w * s3) * inv,
            ],
            [
                (-m[1].x * c5 + m[1].z * c2 - m[1].w * c1) * inv,
                (m[0].x * c5 - m[0].z * c2 + m[0].w * c1) * inv,
                (-m[3].x * s5 + m[3].z * s2 - m[3].w * s1) * inv,
                (m[2].x * s5 - m[2].z * s2 + m[2].w * s1) * inv,
            ],
            [
                (m[1].x * c4 - m[1].y * c2 + m[1].w * c0) * inv,
                (-m[0].x * c4 + m[0].y * c2 - m[0].w * c0) * inv,
                (m[3].x * s4 - m[3].y * s2 + m[3].w * s0) * inv,
                (-m[2].x * s4 + m[2].y * s2 - m[2].w * s0) * inv,
            ],
            [
                (-m[1].x * c3 + m[1].y * c1 - m[1].z * c0) * inv,
                (m[0].x * c3 - m[0].y * c1 + m[0].z * c0) * inv,
                (-m[3].x * s3 + m[3].y * s1 - m[3].z * s0) * inv,
                (m[2].x * s3 - m[2].y * s1 + m[2].z * s0) * inv,
            ],
        ]))
    }

    /// Returns true if the matrix equals its transpose (exact comparison).
    #[inline]
    pub fn is_symmetric(&self) -> bool {
        let m = &self.rows;
        m[0].y == m[1].x
            && m[0].z == m[2].x
            && m[0].w == m[3].x
            && m[1].z == m[2].y
            && m[1].w == m[3].y
            && m[2].w == m[3].z
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }

    /// Builds a translation matrix; the offset lands in the last column so
    /// `M * (p, 1)` adds it to the point.
    #[inline]
    pub fn from_translation(t: Vector3<R>) -> Self {
        Self::from_rows(
            Vector4::new(R::ONE, R::ZERO, R::ZERO, t.x),
            Vector4::new(R::ZERO, R::ONE, R::ZERO, t.y),
            Vector4::new(R::ZERO, R::ZERO, R::ONE, t.z),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        )
    }

    /// Builds a non-uniform scale matrix.
    #[inline]
    pub fn from_scale(s: Vector3<R>) -> Self {
        Self::from_rows(
            Vector4::new(s.x, R::ZERO, R::ZERO, R::ZERO),
            Vector4::new(R::ZERO, s.y, R::ZERO, R::ZERO),
            Vector4::new(R::ZERO, R::ZERO, s.z, R::ZERO),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        )
    }

    /// Builds a perspective projection.
    ///
    /// `fov_degrees` is passed through a tan/atan pair together with the
    /// aspect ratio before the scale factors are derived; for square
    /// viewports this collapses to the familiar cotangent form, and the
    /// FOV round-trips exactly. Kept for compatibility with existing
    /// content authored against this projection.
    pub fn perspective(fov_degrees: R, aspect: R, near: R, far: R) -> Self {
        let c = R::ONE / (fov_degrees.to_radians() * R::HALF).tan();
        let aspect_inv = R::ONE / aspect;
        let fovy = R::TWO * (aspect_inv / c).atan();
        let x_scale = R::ONE / (R::HALF * fovy).tan();
        let y_scale = x_scale / aspect_inv;

        Self::from_rows(
            Vector4::new(x_scale, R::ZERO, R::ZERO, R::ZERO),
            Vector4::new(R::ZERO, y_scale, R::ZERO, R::ZERO),
            Vector4::new(
                R::ZERO,
                R::ZERO,
                (far + near) / (near - far),
                (R::TWO * far * near) / (near - far),
            ),
            Vector4::new(R::ZERO, R::ZERO, -R::ONE, R::ZERO),
        )
    }

    /// Builds an orthographic projection for the given clip box.
    ///
    /// The depth scale is `+2 / (far - near)`: depth keeps its sign
    /// instead of being negated as in the OpenGL convention. Existing
    /// content depends on this orientation.
    pub fn orthographic(left: R, right: R, bottom: R, top: R, near: R, far: R) -> Self {
        Self::from_rows(
            Vector4::new(
                R::TWO / (right - left),
                R::ZERO,
                R::ZERO,
                -(right + left) / (right - left),
            ),
            Vector4::new(
                R::ZERO,
                R::TWO / (top - bottom),
                R::ZERO,
                -(top + bottom) / (top - bottom),
            ),
            Vector4::new(
                R::ZERO,
                R::ZERO,
                R::TWO / (far - near),
                -(far + near) / (far - near),
            ),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        )
    }

    /// Builds a right-handed view matrix looking from `eye` toward
    /// `target`.
    ///
    /// The camera axes form the upper 3x3 rows; the last column holds
    /// `-axis . eye`, so the eye maps to the origin.
    pub fn look_at(eye: Vector3<R>, target: Vector3<R>, up: Vector3<R>) -> Self {
        let z_axis = (eye - target).normalized();
        let x_axis = up.cross(z_axis).normalized();
        let y_axis = z_axis.cross(x_axis);

        Self::from_rows(
            Vector4::new(x_axis.x, x_axis.y, x_axis.z, -x_axis.dot(eye)),
            Vector4::new(y_axis.x, y_axis.y, y_axis.z, -y_axis.dot(eye)),
            Vector4::new(z_axis.x, z_axis.y, z_axis.z, -z_axis.dot(eye)),
            Vector4::new(R::ZERO, R::ZERO, R::ZERO, R::ONE),
        )
    }

    /// Builds a rotation from heading, pitch and roll in degrees.
    ///
    /// NASA airplane convention: heading about Y, pitch about X, roll
    /// about Z, composed as `Rz * Rx * Ry`.
    pub fn from_head_pitch_roll(head_degrees: R, pitch_degrees: R, roll_degrees: R) -> Self {
        let h = head_degrees.to_radians();
        let p = pitch_degrees.to_radians();
        let r = roll_degrees.to_radians();

        let (sin_h, cos_h) = h.sin_cos();
        let (sin_p, cos_p) = p.sin_cos();
        let (sin_r, cos_r) = r.sin_cos();

        Self::from_rows_3(
            Vector3::new(
                cos_r * cos_h - sin_r * sin_p * sin_h,
                sin_r * cos_h + cos_r * sin_p * sin_h,
                -cos_p * sin_h,
            ),
            Vector3::new(-sin_r * cos_p, cos_r * cos_p, sin_p),
            Vector3::new(
                cos_r * sin_h + sin_r * sin_p * cos_h,
                sin_r * sin_h - cos_r * sin_p * cos_h,
                cos_p * cos_h,
            ),
        )
    }

    /// Extracts `(heading, pitch, roll)` in degrees from a rotation
    /// matrix.
    ///
    /// At pitch = ±90° the decomposition is not unique; heading is
    /// reported as zero and the full turn goes into roll.
    pub fn to_head_pitch_roll(&self) -> (R, R, R) {
        let m = &self.rows;

        let sin_p = m[1].z.min(R::ONE).max(-R::ONE);
        let theta_x = sin_p.asin();
        let theta_y;
        let theta_z;

        if theta_x < R::HALF_PI {
            if theta_x > -R::HALF_PI {
                theta_z = (-m[1].x).atan2(m[1].y);
                theta_y = (-m[0].z).atan2(m[2].z);
            } else {
                // Gimbal lock looking straight down; heading folded into roll.
                theta_z = -(m[2].x.atan2(m[0].x));
                theta_y = R::ZERO;
            }
        } else {
            // Gimbal lock looking straight up.
            theta_z = m[2].x.atan2(m[0].x);
            theta_y = R::ZERO;
        }

        (theta_y.to_degrees(), theta_x.to_degrees(), theta_z.to_degrees())
    }

    /// Builds a rotation of `degrees` about `axis` (Rodrigues form).
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity. Matches the rotation produced by
    /// [`Quaternion::from_axis_angle`](crate::Quaternion::from_axis_angle).
    pub fn from_axis_angle(axis: Vector3<R>, degrees: R) -> Self {
        if axis.length_squared() <= R::EPS {
            return Self::IDENTITY;
        }
        let n = axis.normalized();
        let (s, c) = degrees.to_radians().sin_cos();
        let t = R::ONE - c;
        let (x, y, z) = (n.x, n.y, n.z);

        Self::from_rows_3(
            Vector3::new(t * x * x + c, t * x * y - s * z, t * x * z + s * y),
            Vector3::new(t * x * y + s * z, t * y * y + c, t * y * z - s * x),
            Vector3::new(t * x * z - s * y, t * y * z + s * x, t * z * z + c),
        )
    }

    /// Exports as a row-major flat array.
    pub fn to_row_major_array(&self) -> [R; 16] {
        let m = &self.rows;
        [
            m[0].x, m[0].y, m[0].z, m[0].w,
            m[1].x, m[1].y, m[1].z, m[1].w,
            m[2].x, m[2].y, m[2].z, m[2].w,
            m[3].x, m[3].y, m[3].z, m[3].w,
        ]
    }

    /// Exports as a column-major flat array, for GPU APIs that expect
    /// column-major buffers.
    #[inline]
    pub fn to_col_major_array(&self) -> [R; 16] {
        self.transpose().to_row_major_array()
    }

    /// Borrows the elements as a contiguous row-major slice of 16 scalars.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        // SAFETY: `Matrix4x4` is `#[repr(C)]` holding `[Vector4<R>; 4]`,
        // and `Vector4` is `#[repr(C)]` with four `R` fields, so the
        // storage is 16 contiguous scalars starting at `rows[0].x`.
        unsafe { std::slice::from_raw_parts(&raw const self.rows[0].x, 16) }
    }

    /// Mutably borrows the elements as a contiguous row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        // SAFETY: same layout argument as `as_slice`.
        unsafe { std::slice::from_raw_parts_mut(&raw mut self.rows[0].x, 16) }
    }
}

impl<R: Real> Default for Matrix4x4<R> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Row access
impl<R: Real> Index<usize> for Matrix4x4<R> {
    type Output = Vector4<R>;

    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    fn index(&self, i: usize) -> &Vector4<R> {
        &self.rows[i]
    }
}

impl<R: Real> IndexMut<usize> for Matrix4x4<R> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector4<R> {
        &mut self.rows[i]
    }
}

// Mat4 + Mat4
impl<R: Real> Add for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
            self.rows[3] + rhs.rows[3],
        )
    }
}

// Mat4 - Mat4
impl<R: Real> Sub for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
            self.rows[3] - rhs.rows[3],
        )
    }
}

// -Mat4
impl<R: Real> Neg for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_rows(-self.rows[0], -self.rows[1], -self.rows[2], -self.rows[3])
    }
}

// Mat4 + scalar (elementwise)
impl<R: Real> Add<R> for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        Self::from_rows(
            self.rows[0] + rhs,
            self.rows[1] + rhs,
            self.rows[2] + rhs,
            self.rows[3] + rhs,
        )
    }
}

// Mat4 - scalar (elementwise)
impl<R: Real> Sub<R> for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        Self::from_rows(
            self.rows[0] - rhs,
            self.rows[1] - rhs,
            self.rows[2] - rhs,
            self.rows[3] - rhs,
        )
    }
}

// Mat4 * scalar
impl<R: Real> Mul<R> for Matrix4x4<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::from_rows(
            self.rows[0] * rhs,
            self.rows[1] * rhs,
            self.rows[2] * rhs,
            self.rows[3] * rhs,
        )
    }
}

// Mat4 / scalar
impl<R: Real> Div<R> for Matrix4x4<R> {
    type Output = Self;

    /// Division by zero is not checked; IEEE inf/NaN elements result.
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::from_rows(
            self.rows[0] / rhs,
            self.rows[1] / rhs,
            self.rows[2] / rhs,
            self.rows[3] / rhs,
        )
    }
}

// Mat4 * Mat4 (row by column)
impl<R: Real> Mul for Matrix4x4<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let c = [rhs.col(0), rhs.col(1), rhs.col(2), rhs.col(3)];
        let row = |r: Vector4<R>| Vector4::new(r.dot(c[0]), r.dot(c[1]), r.dot(c[2]), r.dot(c[3]));
        Self::from_rows(
            row(self.rows[0]),
            row(self.rows[1]),
            row(self.rows[2]),
            row(self.rows[3]),
        )
    }
}

// Mat4 * Vec4 (full homogeneous transform)
impl<R: Real> Mul<Vector4<R>> for Matrix4x4<R> {
    type Output = Vector4<R>;

    #[inline]
    fn mul(self, v: Vector4<R>) -> Vector4<R> {
        Vector4::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
            self.rows[3].dot(v),
        )
    }
}

// Mat4 * Vec3 (direction: upper 3x3 block, translation dropped)
impl<R: Real> Mul<Vector3<R>> for Matrix4x4<R> {
    type Output = Vector3<R>;

    #[inline]
    fn mul(self, v: Vector3<R>) -> Vector3<R> {
        Vector3::new(
            self.rows[0].xyz().dot(v),
            self.rows[1].xyz().dot(v),
            self.rows[2].xyz().dot(v),
        )
    }
}

impl<R: Real> AddAssign for Matrix4x4<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Real> SubAssign for Matrix4x4<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Real> MulAssign for Matrix4x4<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: Real> MulAssign<R> for Matrix4x4<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<R: Real> DivAssign<R> for Matrix4x4<R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}

// scalar * Mat4
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Matrix4x4<$t>> for $t {
            type Output = Matrix4x4<$t>;

            #[inline]
            fn mul(self, m: Matrix4x4<$t>) -> Matrix4x4<$t> {
                m * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<R: Real> fmt::Display for Matrix4x4<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}", self.rows[0])?;
        writeln!(f, " {}", self.rows[1])?;
        writeln!(f, " {}", self.rows[2])?;
        write!(f, " {}]", self.rows[3])
    }
}

impl<R: Real> From<[[R; 4]; 4]> for Matrix4x4<R> {
    #[inline]
    fn from(a: [[R; 4]; 4]) -> Self {
        Self::from_rows_array(a)
    }
}

// Affine embedding: rotation block, zero translation.
impl<R: Real> From<Matrix3x3<R>> for Matrix4x4<R> {
    #[inline]
    fn from(m: Matrix3x3<R>) -> Self {
        Self::from_rows_3(m.row(0), m.row(1), m.row(2))
    }
}

// glam stores matrices column-major, so conversion transposes both ways.
impl From<glam::Mat4> for Matrix4x4<f32> {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_rows_array(m.transpose().to_cols_array_2d())
    }
}

impl From<Matrix4x4<f32>> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix4x4<f32>) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&m.to_col_major_array())
    }
}

impl From<glam::DMat4> for Matrix4x4<f64> {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Self::from_rows_array(m.transpose().to_cols_array_2d())
    }
}

impl From<Matrix4x4<f64>> for glam::DMat4 {
    #[inline]
    fn from(m: Matrix4x4<f64>) -> glam::DMat4 {
        glam::DMat4::from_cols_array(&m.to_col_major_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_near(a: Matrix4x4<f64>, b: Matrix4x4<f64>, tol: f64) {
        for i in 0..4 {
            for j in 0..4 {
                let (x, y) = (a.get(i, j).unwrap(), b.get(i, j).unwrap());
                assert!((x - y).abs() < tol, "({i},{j}): {x} vs {y}");
            }
        }
    }

    #[test]
    fn test_identity_default() {
        let m = Matrix4x4::<f32>::default();
        assert_eq!(m, Matrix4x4::IDENTITY);
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_translation_in_last_column() {
        let t = Matrix4x4::from_translation(Vector3::new(1.0f64, 2.0, 3.0));
        assert_eq!(t.get(0, 3), Some(1.0));
        assert_eq!(t.get(3, 0), Some(0.0));
        let p = t * Vector4::new(10.0, 10.0, 10.0, 1.0);
        assert_eq!(p, Vector4::new(11.0, 12.0, 13.0, 1.0));
        // Directions (w = 0) ignore translation.
        let d = t * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(d, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let s = Matrix4x4::from_scale(Vector3::new(2.0f32, 3.0, 4.0));
        assert_eq!(s * Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_direction_transform_drops_translation() {
        let t = Matrix4x4::from_translation(Vector3::new(5.0f64, 5.0, 5.0));
        assert_eq!(t * Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_determinant_identity_and_scale() {
        assert_eq!(Matrix4x4::<f64>::IDENTITY.determinant(), 1.0);
        let s = Matrix4x4::from_scale(Vector3::new(2.0f64, 3.0, 4.0));
        assert_eq!(s.determinant(), 24.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0f64, -2.0, 3.0))
            * Matrix4x4::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 37.0)
            * Matrix4x4::from_scale(Vector3::new(2.0, 2.0, 0.5));
        let inv = m.inverse().unwrap();
        assert_mat_near(m * inv, Matrix4x4::IDENTITY, 1e-12);
        assert_mat_near(inv * m, Matrix4x4::IDENTITY, 1e-12);
    }

    #[test]
    fn test_inverse_singular() {
        let err = Matrix4x4::<f32>::ZERO.inverse().unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_transpose_involution() {
        let m = Matrix4x4::from_rows_array([
            [1.0f64, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(0, 1), Some(5.0));
    }

    #[test]
    fn test_look_at_maps_eye_to_origin_depth() {
        let view = Matrix4x4::look_at(
            Vector3::new(0.0f64, 0.0, 5.0),
            Vector3::ZERO,
            Vector3::UNIT_Y,
        );
        // The target sits 5 units down the view -Z axis.
        let target = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((target.z - -5.0).abs() < 1e-12);
        // The eye maps to the origin.
        let eye = view * Vector4::new(0.0, 0.0, 5.0, 1.0);
        assert!(eye.xyz().length() < 1e-12);
    }

    #[test]
    fn test_orthographic_depth_sign() {
        let o = Matrix4x4::orthographic(-1.0f64, 1.0, -1.0, 1.0, -1.0, 1.0);
        // Symmetric unit box is identity except depth keeps its sign.
        assert_eq!(o.get(2, 2), Some(1.0));
        let p = o * Vector4::new(0.5, 0.5, 0.5, 1.0);
        assert!((p.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_perspective_square_viewport() {
        let p = Matrix4x4::perspective(90.0f64, 1.0, 1.0, 10.0);
        // cot(45 deg) = 1 on both axes for a square viewport.
        assert!((p.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
        assert!((p.get(1, 1).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(p.get(3, 2), Some(-1.0));
        // Near-plane points land at depth -1 after the w divide.
        let near = p * Vector4::new(0.0, 0.0, -1.0, 1.0);
        assert!((near.z / near.w - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_head_pitch_roll_round_trip() {
        let m = Matrix4x4::from_head_pitch_roll(30.0f64, 20.0, 10.0);
        let (h, p, r) = m.to_head_pitch_roll();
        assert!((h - 30.0).abs() < 1e-10);
        assert!((p - 20.0).abs() < 1e-10);
        assert!((r - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_head_pitch_roll_gimbal_lock() {
        let m = Matrix4x4::from_head_pitch_roll(25.0f64, 90.0, 5.0);
        let (h, p, _r) = m.to_head_pitch_roll();
        assert_eq!(h, 0.0);
        assert!((p - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_axis_angle_z_quarter_turn() {
        let m = Matrix4x4::from_axis_angle(Vector3::<f64>::UNIT_Z, 90.0);
        let v = m * Vector3::UNIT_X;
        assert!((v - Vector3::UNIT_Y).length() < 1e-12);
    }

    #[test]
    fn test_axis_angle_normalizes_axis() {
        let a = Matrix4x4::from_axis_angle(Vector3::new(0.0f64, 0.0, 10.0), 45.0);
        let b = Matrix4x4::from_axis_angle(Vector3::<f64>::UNIT_Z, 45.0);
        assert_mat_near(a, b, 1e-12);
    }

    #[test]
    fn test_axis_angle_zero_axis_is_identity() {
        let m = Matrix4x4::from_axis_angle(Vector3::<f32>::ZERO, 90.0);
        assert_eq!(m, Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_mat3_embedding() {
        let r3 = Matrix3x3::from_rows_array([[0.0f64, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let m: Matrix4x4<f64> = r3.into();
        assert_eq!(m.get(3, 3), Some(1.0));
        assert_eq!(m.get(0, 3), Some(0.0));
        assert_eq!(m * Vector3::UNIT_X, Vector3::UNIT_Y);
    }

    #[test]
    fn test_flat_exports_and_slice() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0f32, 2.0, 3.0));
        let row = m.to_row_major_array();
        let col = m.to_col_major_array();
        assert_eq!(row[3], 1.0);
        assert_eq!(col[12], 1.0);
        assert_eq!(m.as_slice().len(), 16);
        assert_eq!(m.as_slice()[3], 1.0);
    }

    #[test]
    fn test_glam_round_trip() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0f32, 2.0, 3.0));
        let g: glam::Mat4 = m.into();
        // glam keeps translation in its last column.
        assert_eq!(g.w_axis.x, 1.0);
        assert_eq!(Matrix4x4::from(g), m);
    }

    #[test]
    fn test_scalar_elementwise_ops() {
        let m = Matrix4x4::<f64>::ZERO + 1.0;
        assert_eq!(m.get(2, 1), Some(1.0));
        assert_eq!((m - 1.0), Matrix4x4::ZERO);
        assert_eq!((2.0 * Matrix4x4::<f64>::IDENTITY).get(0, 0), Some(2.0));
    }

    #[test]
    fn test_try_from_slice() {
        let buf: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Matrix4x4::try_from_slice(&buf).unwrap();
        assert_eq!(m.get(1, 2), Some(6.0));
        assert!(Matrix4x4::<f32>::try_from_slice(&buf[..10]).unwrap_err().is_buffer_error());
    }
}
