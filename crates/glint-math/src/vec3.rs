//! 3D vector type.
//!
//! [`Vector3`] is the workhorse of the crate: positions, directions and
//! rotation axes are all `Vector3`s. It supports the full affine operator
//! surface (scalar ops on both sides, component-wise ops, dot and cross
//! products) plus normalization and flat-buffer views for GPU interop.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::Vector3;
//!
//! let u = Vector3::new(1.0f32, 0.0, 0.0);
//! let v = Vector3::new(0.0f32, 1.0, 0.0);
//! assert_eq!(u.cross(v), Vector3::UNIT_Z);
//! assert_eq!(u.dot(v), 0.0);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, Result};
use crate::real::Real;

/// A 3-component vector.
///
/// Plain value type: components may hold any finite or non-finite value,
/// and no invariant is enforced. Equality is exact floating-point
/// comparison with no epsilon.
///
/// # Example
///
/// ```rust
/// use glint_math::Vector3;
///
/// let v = Vector3::new(3.0f32, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3<R: Real> {
    /// X component.
    pub x: R,
    /// Y component.
    pub y: R,
    /// Z component.
    pub z: R,
}

impl<R: Real> Vector3<R> {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(R::ZERO, R::ZERO, R::ZERO);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(R::ONE, R::ONE, R::ONE);

    /// Unit X vector (1, 0, 0).
    pub const UNIT_X: Self = Self::new(R::ONE, R::ZERO, R::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const UNIT_Y: Self = Self::new(R::ZERO, R::ONE, R::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const UNIT_Z: Self = Self::new(R::ZERO, R::ZERO, R::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: R, y: R, z: R) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: R) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [R; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Creates from the first 3 scalars of a buffer.
    ///
    /// Returns [`MathError::BufferTooShort`] if the buffer holds fewer
    /// than 3 elements; extra elements are ignored.
    #[inline]
    pub fn try_from_slice(s: &[R]) -> Result<Self> {
        if s.len() < 3 {
            return Err(MathError::buffer_too_short(3, s.len()));
        }
        Ok(Self::new(s[0], s[1], s[2]))
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [R; 3] {
        [self.x, self.y, self.z]
    }

    /// Casts the components to another scalar precision.
    ///
    /// Plain float conversion with no range checking.
    #[inline]
    pub fn cast<S: Real>(self) -> Vector3<S> {
        Vector3::new(S::of(self.x), S::of(self.y), S::of(self.z))
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> R {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// Anti-commutative: `u.cross(v) == -(v.cross(u))`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    /// A vector of length zero (or with NaN components) is returned
    /// **unchanged** — callers that can encounter the degenerate case must
    /// check `length_squared` themselves. This no-op fallback is kept so
    /// that accumulated-rotation code never sees a normalize blow up
    /// mid-frame.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > R::ZERO { self / len } else { self }
    }

    /// Normalizes the vector in place. See [`Vector3::normalized`] for the
    /// zero-length behavior.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: R) -> Self {
        self + (other - self) * t
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Borrows the components as a contiguous slice of 3 scalars.
    ///
    /// Replacement for an implicit pointer conversion: the view lives only
    /// as long as the vector it borrows from.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        // SAFETY: `Vector3` is `#[repr(C)]` with exactly three `R` fields,
        // so `x` is the first of 3 contiguous scalars.
        unsafe { std::slice::from_raw_parts(&raw const self.x, 3) }
    }

    /// Mutably borrows the components as a contiguous slice of 3 scalars.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        // SAFETY: same layout argument as `as_slice`.
        unsafe { std::slice::from_raw_parts_mut(&raw mut self.x, 3) }
    }
}

// Indexing
impl<R: Real> Index<usize> for Vector3<R> {
    type Output = R;

    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    fn index(&self, i: usize) -> &R {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl<R: Real> IndexMut<usize> for Vector3<R> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut R {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

// Vector3 + Vector3
impl<R: Real> Add for Vector3<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vector3 - Vector3
impl<R: Real> Sub for Vector3<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// -Vector3
impl<R: Real> Neg for Vector3<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vector3 + scalar
impl<R: Real> Add<R> for Vector3<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

// Vector3 - scalar
impl<R: Real> Sub<R> for Vector3<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

// Vector3 * scalar
impl<R: Real> Mul<R> for Vector3<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Vector3 / scalar
impl<R: Real> Div<R> for Vector3<R> {
    type Output = Self;

    /// Division by zero is not checked; IEEE inf/NaN components result.
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// Vector3 / Vector3 (component-wise)
impl<R: Real> Div for Vector3<R> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<R: Real> AddAssign for Vector3<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<R: Real> SubAssign for Vector3<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<R: Real> AddAssign<R> for Vector3<R> {
    #[inline]
    fn add_assign(&mut self, rhs: R) {
        self.x += rhs;
        self.y += rhs;
        self.z += rhs;
    }
}

impl<R: Real> SubAssign<R> for Vector3<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: R) {
        self.x -= rhs;
        self.y -= rhs;
        self.z -= rhs;
    }
}

impl<R: Real> MulAssign<R> for Vector3<R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<R: Real> DivAssign<R> for Vector3<R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<R: Real> DivAssign for Vector3<R> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
    }
}

// scalar <op> Vector3 (left-hand scalar needs concrete impls)
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn add(self, v: Vector3<$t>) -> Vector3<$t> {
                v + self
            }
        }

        impl Sub<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn sub(self, v: Vector3<$t>) -> Vector3<$t> {
                Vector3::new(self - v.x, self - v.y, self - v.z)
            }
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                v * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<R: Real> fmt::Display for Vector3<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<R: Real> From<[R; 3]> for Vector3<R> {
    #[inline]
    fn from(a: [R; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<R: Real> From<Vector3<R>> for [R; 3] {
    #[inline]
    fn from(v: Vector3<R>) -> [R; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vector3<f32> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3<f32>) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::DVec3> for Vector3<f64> {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for glam::DVec3 {
    #[inline]
    fn from(v: Vector3<f64>) -> glam::DVec3 {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}
