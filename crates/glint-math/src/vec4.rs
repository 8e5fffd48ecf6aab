//! Homogeneous 4D vector type.
//!
//! [`Vector4`] carries the homogeneous `w` coordinate that lets 4x4
//! matrices express affine transforms: `w = 1` for points, `w = 0` for
//! directions. The default value is `(0, 0, 0, 1)` — the homogeneous
//! origin — unlike [`Vector3`](crate::Vector3), whose default is all-zero.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Vector3, Vector4};
//!
//! let point: Vector4<f32> = Vector3::new(1.0, 2.0, 3.0).into();
//! assert_eq!(point.w, 1.0);
//!
//! let dir = Vector4::from_vec3(Vector3::new(0.0f32, 0.0, 1.0), 0.0);
//! assert_eq!(dir.w, 0.0);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, Result};
use crate::real::Real;
use crate::vec3::Vector3;

/// A 4-component homogeneous vector.
///
/// Same value-type contract as [`Vector3`]: no enforced invariants, exact
/// equality. Matrix rows and transformed points both live here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector4<R: Real> {
    /// X component.
    pub x: R,
    /// Y component.
    pub y: R,
    /// Z component.
    pub z: R,
    /// Homogeneous component: 1 for points, 0 for directions.
    pub w: R,
}

impl<R: Real> Vector4<R> {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(R::ZERO, R::ZERO, R::ZERO, R::ZERO);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(R::ONE, R::ONE, R::ONE, R::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: R, y: R, z: R, w: R) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [R; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Creates from the first 4 scalars of a buffer.
    ///
    /// Returns [`MathError::BufferTooShort`] if the buffer holds fewer
    /// than 4 elements.
    #[inline]
    pub fn try_from_slice(s: &[R]) -> Result<Self> {
        if s.len() < 4 {
            return Err(MathError::buffer_too_short(4, s.len()));
        }
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }

    /// Creates from a [`Vector3`] and an explicit `w`.
    #[inline]
    pub const fn from_vec3(v: Vector3<R>, w: R) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [R; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops the homogeneous component.
    #[inline]
    pub const fn xyz(self) -> Vector3<R> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Casts the components to another scalar precision.
    #[inline]
    pub fn cast<S: Real>(self) -> Vector4<S> {
        Vector4::new(S::of(self.x), S::of(self.y), S::of(self.z), S::of(self.w))
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> R {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> R {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> R {
        self.dot(self)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// Zero length is a precondition violation: debug builds assert,
    /// release builds return the vector unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        debug_assert!(len > R::ZERO, "normalizing a zero-length Vector4");
        if len > R::ZERO { self / len } else { self }
    }

    /// Normalizes the vector in place. See [`Vector4::normalized`] for the
    /// zero-length behavior.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Borrows the components as a contiguous slice of 4 scalars.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        // SAFETY: `Vector4` is `#[repr(C)]` with exactly four `R` fields,
        // so `x` is the first of 4 contiguous scalars.
        unsafe { std::slice::from_raw_parts(&raw const self.x, 4) }
    }

    /// Mutably borrows the components as a contiguous slice of 4 scalars.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        // SAFETY: same layout argument as `as_slice`.
        unsafe { std::slice::from_raw_parts_mut(&raw mut self.x, 4) }
    }
}

// Homogeneous-point convention: the default is the origin with w = 1.
impl<R: Real> Default for Vector4<R> {
    #[inline]
    fn default() -> Self {
        Self::new(R::ZERO, R::ZERO, R::ZERO, R::ONE)
    }
}

// Indexing
impl<R: Real> Index<usize> for Vector4<R> {
    type Output = R;

    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    fn index(&self, i: usize) -> &R {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

impl<R: Real> IndexMut<usize> for Vector4<R> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut R {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

// Vector4 + Vector4
impl<R: Real> Add for Vector4<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

// Vector4 - Vector4
impl<R: Real> Sub for Vector4<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

// -Vector4
impl<R: Real> Neg for Vector4<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Vector4 + scalar
impl<R: Real> Add<R> for Vector4<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs, self.w + rhs)
    }
}

// Vector4 - scalar
impl<R: Real> Sub<R> for Vector4<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs, self.w - rhs)
    }
}

// Vector4 * scalar
impl<R: Real> Mul<R> for Vector4<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// Vector4 / scalar
impl<R: Real> Div<R> for Vector4<R> {
    type Output = Self;

    /// Division by zero is not checked; IEEE inf/NaN components result.
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

// Vector4 / Vector4 (component-wise)
impl<R: Real> Div for Vector4<R> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.x / rhs.x,
            self.y / rhs.y,
            self.z / rhs.z,
            self.w / rhs.w,
        )
    }
}

impl<R: Real> AddAssign for Vector4<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl<R: Real> SubAssign for Vector4<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl<R: Real> AddAssign<R> for Vector4<R> {
    #[inline]
    fn add_assign(&mut self, rhs: R) {
        self.x += rhs;
        self.y += rhs;
        self.z += rhs;
        self.w += rhs;
    }
}

impl<R: Real> SubAssign<R> for Vector4<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: R) {
        self.x -= rhs;
        self.y -= rhs;
        self.z -= rhs;
        self.w -= rhs;
    }
}

impl<R: Real> MulAssign<R> for Vector4<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl<R: Real> DivAssign<R> for Vector4<R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
        self.w /= rhs;
    }
}

impl<R: Real> DivAssign for Vector4<R> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
        self.w /= rhs.w;
    }
}

// scalar <op> Vector4
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Vector4<$t>> for $t {
            type Output = Vector4<$t>;

            #[inline]
            fn add(self, v: Vector4<$t>) -> Vector4<$t> {
                v + self
            }
        }

        impl Sub<Vector4<$t>> for $t {
            type Output = Vector4<$t>;

            #[inline]
            fn sub(self, v: Vector4<$t>) -> Vector4<$t> {
                Vector4::new(self - v.x, self - v.y, self - v.z, self - v.w)
            }
        }

        impl Mul<Vector4<$t>> for $t {
            type Output = Vector4<$t>;

            #[inline]
            fn mul(self, v: Vector4<$t>) -> Vector4<$t> {
                v * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<R: Real> fmt::Display for Vector4<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// Point promotion: w = 1.
impl<R: Real> From<Vector3<R>> for Vector4<R> {
    #[inline]
    fn from(v: Vector3<R>) -> Self {
        Self::from_vec3(v, R::ONE)
    }
}

impl<R: Real> From<[R; 4]> for Vector4<R> {
    #[inline]
    fn from(a: [R; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<R: Real> From<Vector4<R>> for [R; 4] {
    #[inline]
    fn from(v: Vector4<R>) -> [R; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vector4<f32> {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<f32>> for glam::Vec4 {
    #[inline]
    fn from(v: Vector4<f32>) -> glam::Vec4 {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::DVec4> for Vector4<f64> {
    #[inline]
    fn from(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<f64>> for glam::DVec4 {
    #[inline]
    fn from(v: Vector4<f64>) -> glam::DVec4 {
        glam::DVec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_homogeneous_origin() {
        let v = Vector4::<f32>::default();
        assert_eq!(v, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_vec3_implies_point() {
        let p: Vector4<f64> = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(p.w, 1.0);
        assert_eq!(p.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0f32, 1.0, 1.0, 1.0);
        let b = Vector4::new(2.0f32, 2.0, 2.0, 4.0);
        assert_eq!(a.dot(b), 10.0);
    }

    #[test]
    fn test_scalar_ops_both_sides() {
        let v = Vector4::new(1.0f32, 1.0, 1.0, 0.0);
        assert_eq!(v + 4.0, Vector4::new(5.0, 5.0, 5.0, 4.0));
        assert_eq!(9.0 - (-v), Vector4::new(10.0, 10.0, 10.0, 9.0));
        assert_eq!((-v) * 3.0, Vector4::new(-3.0, -3.0, -3.0, 0.0));
        assert_eq!(3.0 * v, Vector4::new(3.0, 3.0, 3.0, 0.0));
    }

    #[test]
    fn test_componentwise_div_assign() {
        let mut v = Vector4::new(2.0f64, 2.0, 2.0, 4.0);
        v /= Vector4::new(1.0, 1.0, 1.0, 2.0);
        assert_eq!(v, Vector4::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn test_normalized() {
        let v = Vector4::new(0.0f32, 0.0, 3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_try_from_slice_short() {
        let buf = [1.0f32, 2.0, 3.0];
        let err = Vector4::<f32>::try_from_slice(&buf).unwrap_err();
        assert!(err.is_buffer_error());
    }

    #[test]
    fn test_as_slice_view() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_glam_interop() {
        let v = Vector4::new(1.0f64, 2.0, 3.0, 4.0);
        let g: glam::DVec4 = v.into();
        assert_eq!(Vector4::from(g), v);
    }
}
