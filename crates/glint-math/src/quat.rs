//! Rotation quaternion.
//!
//! [`Quaternion`] stores the scalar part `w` and vector part `(x, y, z)`.
//! Unit length is expected for anything used as a rotation, but it is not
//! auto-maintained: raw arithmetic (`+` via scalar ops, `*` scaling) can
//! leave the unit sphere and callers re-normalize after accumulating.
//!
//! Rotations compose right to left: in `a * b`, `b` applies first.
//! `q` and `-q` encode the same rotation.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Quaternion, Vector3};
//!
//! let q = Quaternion::from_axis_angle(Vector3::<f32>::UNIT_Z, 90.0);
//! let v = q.rotate(Vector3::UNIT_X);
//! assert!((v - Vector3::UNIT_Y).length() < 1e-6);
//! ```

use std::fmt;
use std::ops::{Div, DivAssign, Index, Mul, MulAssign, Neg};

use crate::mat3::Matrix3x3;
use crate::mat4::Matrix4x4;
use crate::real::Real;
use crate::vec3::Vector3;

/// A quaternion with scalar part `w` and vector part `(x, y, z)`.
///
/// `Default` is the identity rotation `(1, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion<R: Real> {
    /// Scalar part.
    pub w: R,
    /// Vector part, x.
    pub x: R,
    /// Vector part, y.
    pub y: R,
    /// Vector part, z.
    pub z: R,
}

impl<R: Real> Quaternion<R> {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new(R::ONE, R::ZERO, R::ZERO, R::ZERO);

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(w: R, x: R, y: R, z: R) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a rotation of `degrees` about `axis`.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity.
    pub fn from_axis_angle(axis: Vector3<R>, degrees: R) -> Self {
        if axis.length_squared() <= R::EPS {
            return Self::IDENTITY;
        }
        let n = axis.normalized();
        let half = degrees.to_radians() * R::HALF;
        let (s, c) = half.sin_cos();
        Self::new(c, n.x * s, n.y * s, n.z * s)
    }

    /// Builds a rotation from heading, pitch and roll in degrees, matching
    /// [`Matrix4x4::from_head_pitch_roll`].
    pub fn from_head_pitch_roll(head_degrees: R, pitch_degrees: R, roll_degrees: R) -> Self {
        let m = Matrix4x4::from_head_pitch_roll(head_degrees, pitch_degrees, roll_degrees);
        Self::from_rotation_matrix(&m)
    }

    /// Extracts the rotation of the upper 3x3 block of a transform matrix.
    ///
    /// Trace-based Shepperd extraction, branching on the largest diagonal
    /// element for numeric stability, renormalized at the end. The block
    /// must be a pure rotation; scale or shear corrupt the result.
    pub fn from_rotation_matrix(m: &Matrix4x4<R>) -> Self {
        let four = R::TWO * R::TWO;
        let quarter = R::ONE / four;
        let (m00, m11, m22) = (m[0].x, m[1].y, m[2].z);
        let trace = m00 + m11 + m22;

        let q = if trace > R::ZERO {
            let s = (trace + R::ONE).sqrt() * R::TWO;
            Self::new(
                quarter * s,
                (m[2].y - m[1].z) / s,
                (m[0].z - m[2].x) / s,
                (m[1].x - m[0].y) / s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (R::ONE + m00 - m11 - m22).sqrt() * R::TWO;
            Self::new(
                (m[2].y - m[1].z) / s,
                quarter * s,
                (m[0].y + m[1].x) / s,
                (m[0].z + m[2].x) / s,
            )
        } else if m11 > m22 {
            let s = (R::ONE + m11 - m00 - m22).sqrt() * R::TWO;
            Self::new(
                (m[0].z - m[2].x) / s,
                (m[0].y + m[1].x) / s,
                quarter * s,
                (m[1].z + m[2].y) / s,
            )
        } else {
            let s = (R::ONE + m22 - m00 - m11).sqrt() * R::TWO;
            Self::new(
                (m[1].x - m[0].y) / s,
                (m[0].z + m[2].x) / s,
                (m[1].z + m[2].y) / s,
                quarter * s,
            )
        };
        q.normalized()
    }

    /// Extracts the rotation of a 3x3 rotation matrix.
    #[inline]
    pub fn from_mat3(m: &Matrix3x3<R>) -> Self {
        Self::from_rotation_matrix(&Matrix4x4::from(*m))
    }

    /// Builds the shortest-arc rotation taking direction `from` onto `to`.
    ///
    /// Both inputs are normalized internally. Anti-parallel inputs have no
    /// unique shortest arc; the result is a half turn about an arbitrary
    /// axis orthogonal to `from`.
    pub fn rotation_arc(from: Vector3<R>, to: Vector3<R>) -> Self {
        let u = from.normalized();
        let v = to.normalized();
        let d = u.dot(v);

        if d >= R::ONE - R::EPS {
            return Self::IDENTITY;
        }
        if d <= -(R::ONE - R::EPS) {
            // 180 degrees about any axis orthogonal to `u`.
            let mut axis = u.cross(Vector3::UNIT_X);
            if axis.length_squared() <= R::EPS {
                axis = u.cross(Vector3::UNIT_Y);
            }
            return Self::from_axis_angle(axis, R::of(180.0f64));
        }

        let s = ((R::ONE + d) * R::TWO).sqrt();
        let c = u.cross(v) / s;
        Self::new(s * R::HALF, c.x, c.y, c.z).normalized()
    }

    /// Casts the components to another scalar precision.
    #[inline]
    pub fn cast<S: Real>(self) -> Quaternion<S> {
        Quaternion::new(S::of(self.w), S::of(self.x), S::of(self.y), S::of(self.z))
    }

    /// Returns the conjugate `(w, -x, -y, -z)`.
    ///
    /// Equals the inverse for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> R {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of the four components.
    #[inline]
    pub fn length(self) -> R {
        self.dot(self).sqrt()
    }

    /// Squared length; this is the classical quaternion norm
    /// `w^2 + x^2 + y^2 + z^2` (no square root).
    #[inline]
    pub fn length_squared(self) -> R {
        self.dot(self)
    }

    /// Returns the quaternion scaled to unit length, falling back to the
    /// identity when the length is degenerate.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= R::EPS {
            return Self::IDENTITY;
        }
        self / len
    }

    /// Normalizes in place; see [`Quaternion::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the multiplicative inverse, `conjugate / length_squared`.
    ///
    /// A zero quaternion has no inverse; the identity is returned instead.
    #[inline]
    pub fn inverse(self) -> Self {
        let n = self.length_squared();
        if n <= R::EPS {
            return Self::IDENTITY;
        }
        self.conjugate() / n
    }

    /// Rotates a vector: the vector part of `q * (0, v) * conj(q)`.
    ///
    /// Assumes a unit quaternion; a non-unit `q` scales the result by its
    /// squared length.
    #[inline]
    pub fn rotate(self, v: Vector3<R>) -> Vector3<R> {
        let p = Self::new(R::ZERO, v.x, v.y, v.z);
        let r = self * p * self.conjugate();
        Vector3::new(r.x, r.y, r.z)
    }

    /// Converts to a 3x3 rotation matrix (doubled-product formula).
    pub fn to_mat3(self) -> Matrix3x3<R> {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let xx = x * x * R::TWO;
        let yy = y * y * R::TWO;
        let zz = z * z * R::TWO;
        let xy = x * y * R::TWO;
        let xz = x * z * R::TWO;
        let xw = x * w * R::TWO;
        let yz = y * z * R::TWO;
        let yw = y * w * R::TWO;
        let zw = z * w * R::TWO;

        Matrix3x3::from_rows(
            Vector3::new(R::ONE - yy - zz, xy - zw, xz + yw),
            Vector3::new(xy + zw, R::ONE - xx - zz, yz - xw),
            Vector3::new(xz - yw, yz + xw, R::ONE - xx - yy),
        )
    }

    /// Converts to a 4x4 rotation matrix with zero translation.
    #[inline]
    pub fn to_mat4(self) -> Matrix4x4<R> {
        Matrix4x4::from(self.to_mat3())
    }

    /// Converts to a row-major 16-scalar rotation matrix, ready for a
    /// uniform upload after transposition to column-major if the API
    /// wants it.
    #[inline]
    pub fn to_rotation_array(self) -> [R; 16] {
        self.to_mat4().to_row_major_array()
    }

    /// Extracts `(axis, degrees)`.
    ///
    /// Assumes a unit quaternion. Near the identity the axis is
    /// indeterminate; `(UNIT_X, 0)` is returned.
    pub fn to_axis_angle(self) -> (Vector3<R>, R) {
        let w = self.w.min(R::ONE).max(-R::ONE);
        let s = (R::ONE - w * w).sqrt();
        if s <= R::EPS {
            return (Vector3::UNIT_X, R::ZERO);
        }
        let angle = R::TWO * w.acos();
        (Vector3::new(self.x, self.y, self.z) / s, angle.to_degrees())
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<R: Real> Default for Quaternion<R> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Component access in (w, x, y, z) order.
impl<R: Real> Index<usize> for Quaternion<R> {
    type Output = R;

    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    fn index(&self, i: usize) -> &R {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quaternion index out of bounds: {}", i),
        }
    }
}

// Hamilton product; `rhs` applies first.
impl<R: Real> Mul for Quaternion<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<R: Real> MulAssign for Quaternion<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Quat * Vec3: rotation shorthand.
impl<R: Real> Mul<Vector3<R>> for Quaternion<R> {
    type Output = Vector3<R>;

    #[inline]
    fn mul(self, v: Vector3<R>) -> Vector3<R> {
        self.rotate(v)
    }
}

// -Quat: same rotation, opposite cover.
impl<R: Real> Neg for Quaternion<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Quat * scalar
impl<R: Real> Mul<R> for Quaternion<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Quat / scalar
impl<R: Real> Div<R> for Quaternion<R> {
    type Output = Self;

    /// Division by zero is not checked; IEEE inf/NaN components result.
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<R: Real> MulAssign<R> for Quaternion<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<R: Real> DivAssign<R> for Quaternion<R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}

// scalar * Quat
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            #[inline]
            fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                q * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<R: Real> fmt::Display for Quaternion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

impl From<glam::Quat> for Quaternion<f32> {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion<f32>> for glam::Quat {
    #[inline]
    fn from(q: Quaternion<f32>) -> glam::Quat {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::DQuat> for Quaternion<f64> {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion<f64>> for glam::DQuat {
    #[inline]
    fn from(q: Quaternion<f64>) -> glam::DQuat {
        glam::DQuat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_quat_near(a: Quaternion<f64>, b: Quaternion<f64>, tol: f64) {
        // Up to sign: q and -q are the same rotation.
        let flipped = if a.dot(b) < 0.0 { -b } else { b };
        assert!((a.w - flipped.w).abs() < tol, "{a} vs {b}");
        assert!((a.x - flipped.x).abs() < tol, "{a} vs {b}");
        assert!((a.y - flipped.y).abs() < tol, "{a} vs {b}");
        assert!((a.z - flipped.z).abs() < tol, "{a} vs {b}");
    }

    #[test]
    fn test_identity_default() {
        let q = Quaternion::<f32>::default();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_eq!(q.rotate(Vector3::UNIT_X), Vector3::UNIT_X);
    }

    #[test]
    fn test_axis_angle_quarter_turn() {
        let q = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Z, 90.0);
        let v = q.rotate(Vector3::UNIT_X);
        assert!((v - Vector3::UNIT_Y).length() < 1e-12);
        // Operator sugar is the same rotation.
        assert!((q * Vector3::UNIT_X - v).length() < 1e-15);
    }

    #[test]
    fn test_axis_angle_normalizes_and_zero_axis() {
        let a = Quaternion::from_axis_angle(Vector3::new(0.0f64, 0.0, 9.0), 30.0);
        let b = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Z, 30.0);
        assert_quat_near(a, b, 1e-15);
        assert_eq!(
            Quaternion::from_axis_angle(Vector3::<f32>::ZERO, 30.0),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn test_hamilton_product_composes_right_to_left() {
        let yaw = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Y, 90.0);
        let roll = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Z, 90.0);
        // roll first, then yaw.
        let q = yaw * roll;
        let v = q.rotate(Vector3::UNIT_X);
        let step = yaw.rotate(roll.rotate(Vector3::UNIT_X));
        assert!((v - step).length() < 1e-12);
    }

    #[test]
    fn test_product_not_commutative() {
        let a = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_X, 90.0);
        let b = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Y, 90.0);
        let ab = a * b;
        let ba = b * a;
        assert!((ab.dot(ba)).abs() < 1.0 - 1e-6);
    }

    #[test]
    fn test_inverse_cancels() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0f64, 2.0, 3.0), 72.0);
        let p = q * q.inverse();
        assert_quat_near(p, Quaternion::IDENTITY, 1e-12);
    }

    #[test]
    fn test_inverse_of_zero_is_identity() {
        let z = Quaternion::new(0.0f32, 0.0, 0.0, 0.0);
        assert_eq!(z.inverse(), Quaternion::IDENTITY);
        assert_eq!(z.normalized(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_norm_naming() {
        let q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(q.length_squared(), 30.0);
        assert!((q.length() - 30.0f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_matrix_round_trip() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0f64, -1.0, 0.5), 63.0);
        let back = Quaternion::from_rotation_matrix(&q.to_mat4());
        assert_quat_near(back, q, 1e-12);
    }

    #[test]
    fn test_matrix_round_trip_large_angle_branches() {
        // Angles past 120 degrees push the trace negative and exercise the
        // per-diagonal branches.
        for axis in [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z] {
            let q = Quaternion::from_axis_angle(axis, 175.0f64);
            let back = Quaternion::from_rotation_matrix(&q.to_mat4());
            assert_quat_near(back, q, 1e-12);
        }
    }

    #[test]
    fn test_matrix_agrees_with_rotate() {
        let q = Quaternion::from_axis_angle(Vector3::new(2.0f64, 1.0, 5.0), 40.0);
        let m = q.to_mat3();
        let v = Vector3::new(0.3, -0.7, 1.1);
        assert!((m * v - q.rotate(v)).length() < 1e-12);
    }

    #[test]
    fn test_head_pitch_roll_matches_matrix() {
        let q = Quaternion::from_head_pitch_roll(30.0f64, 20.0, 10.0);
        let m = Matrix4x4::from_head_pitch_roll(30.0, 20.0, 10.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!((q.rotate(v) - m * v).length() < 1e-12);
    }

    #[test]
    fn test_to_axis_angle() {
        let q = Quaternion::from_axis_angle(Vector3::<f64>::UNIT_Y, 50.0);
        let (axis, degrees) = q.to_axis_angle();
        assert!((axis - Vector3::UNIT_Y).length() < 1e-12);
        assert!((degrees - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_to_axis_angle_identity_fallback() {
        let (axis, degrees) = Quaternion::<f32>::IDENTITY.to_axis_angle();
        assert_eq!(axis, Vector3::UNIT_X);
        assert_eq!(degrees, 0.0);
    }

    #[test]
    fn test_rotation_arc() {
        let q = Quaternion::rotation_arc(Vector3::<f64>::UNIT_X, Vector3::UNIT_Y);
        let v = q.rotate(Vector3::UNIT_X);
        assert!((v - Vector3::UNIT_Y).length() < 1e-12);
        // Parallel input is the identity.
        let p = Quaternion::rotation_arc(Vector3::<f64>::UNIT_X, Vector3::UNIT_X * 7.0);
        assert_quat_near(p, Quaternion::IDENTITY, 1e-12);
    }

    #[test]
    fn test_rotation_arc_anti_parallel() {
        let q = Quaternion::rotation_arc(Vector3::<f64>::UNIT_X, -Vector3::UNIT_X);
        let v = q.rotate(Vector3::UNIT_X);
        assert!((v - -Vector3::UNIT_X).length() < 1e-6);
        assert!((q.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_index_order() {
        let q = Quaternion::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[1], 2.0);
        assert_eq!(q[3], 4.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let q = Quaternion::<f32>::IDENTITY;
        let _ = q[4];
    }

    #[test]
    fn test_rotation_array_export() {
        let q = Quaternion::from_axis_angle(Vector3::<f32>::UNIT_Z, 90.0);
        let a = q.to_rotation_array();
        assert!((a[1] - -1.0).abs() < 1e-6); // row 0, col 1
        assert!((a[4] - 1.0).abs() < 1e-6); // row 1, col 0
        assert_eq!(a[15], 1.0);
    }

    #[test]
    fn test_glam_round_trip() {
        let q = Quaternion::from_axis_angle(Vector3::<f32>::UNIT_Y, 45.0);
        let g: glam::Quat = q.into();
        let back = Quaternion::from(g);
        assert!((back.w - q.w).abs() < 1e-6);
        assert!((back.y - q.y).abs() < 1e-6);
    }
}
