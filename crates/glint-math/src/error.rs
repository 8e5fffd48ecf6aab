//! Error types for glint-math operations.
//!
//! The math types are plain values and most operations are total, so the
//! error surface is small: it covers the two failure modes that would
//! otherwise corrupt results silently — inverting a singular matrix and
//! constructing a type from an undersized scalar buffer.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Matrix4x4, MathError};
//!
//! let singular = Matrix4x4::<f32>::from_rows_array([[0.0; 4]; 4]);
//! match singular.inverse() {
//!     Err(MathError::SingularMatrix { .. }) => {}
//!     other => panic!("expected singular-matrix error, got {other:?}"),
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors that can occur during linear-algebra operations.
///
/// Degenerate numeric inputs that have a documented value-level fallback
/// (zero-length normalize, division by zero) do **not** produce a
/// [`MathError`]; see the individual operations for their fallback
/// behavior.
#[derive(Debug, Error)]
pub enum MathError {
    /// The matrix has zero determinant and cannot be inverted.
    ///
    /// Returned by `Matrix3x3::inverse` and `Matrix4x4::inverse`. The
    /// determinant is reported in `f64` regardless of the scalar type.
    #[error("matrix is singular (determinant {determinant}), cannot invert")]
    SingularMatrix {
        /// Determinant of the offending matrix.
        determinant: f64,
    },

    /// A scalar buffer was too short for the requested construction.
    ///
    /// Returned by the `try_from_slice` constructors, which need at least
    /// 3 (`Vector3`), 4 (`Vector4`), 9 (`Matrix3x3`) or 16 (`Matrix4x4`)
    /// elements.
    #[error("buffer too short: expected at least {expected} scalars, got {got}")]
    BufferTooShort {
        /// Minimum number of scalars required.
        expected: usize,
        /// Number of scalars provided.
        got: usize,
    },
}

impl MathError {
    /// Creates a [`MathError::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f64) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates a [`MathError::BufferTooShort`] error.
    #[inline]
    pub fn buffer_too_short(expected: usize, got: usize) -> Self {
        Self::BufferTooShort { expected, got }
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` if this is a buffer-size error.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(self, Self::BufferTooShort { .. })
    }
}
