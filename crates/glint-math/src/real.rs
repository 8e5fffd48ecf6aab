//! Generic floating-point scalar for the math types.
//!
//! Every vector, matrix and quaternion in this crate is parameterized over
//! [`Real`], implemented for `f32` and `f64`. Single precision is what gets
//! uploaded to the GPU; double precision is used by tooling that accumulates
//! transforms over many frames.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Real, Vector3};
//!
//! let v32 = Vector3::<f32>::new(1.0, 2.0, 3.0);
//! let v64: Vector3<f64> = v32.cast();
//! assert_eq!(v64.x, 1.0);
//!
//! // Cross-precision scalar cast
//! let h: f32 = f32::of(0.5f64);
//! assert_eq!(h, 0.5);
//! ```
//!
//! # Dependencies
//!
//! - [`num_traits`] - `Float`/`NumCast` bounds

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, NumCast};

/// Floating-point scalar usable as the component type of the math types.
///
/// Extends [`num_traits::Float`] with the constants the geometry code needs
/// in `const` contexts, and a cross-precision cast. Implemented for `f32`
/// and `f64`; the types are fixed at 3 and 4 components, not generic over
/// dimension, so no further numeric abstraction is required.
pub trait Real:
    Float
    + NumCast
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Two.
    const TWO: Self;
    /// One half.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// π / 2, the gimbal-lock pitch in radians.
    const HALF_PI: Self;
    /// Degenerate-input threshold for normalization and near-parallel
    /// checks. Inputs with magnitude at or below this are treated as zero.
    const EPS: Self;

    /// Casts a scalar of any [`Real`] precision into this one.
    ///
    /// Plain widening/truncating float conversion with no range checking;
    /// a value that cannot be represented becomes NaN.
    #[inline]
    fn of<S: Real>(v: S) -> Self {
        num_traits::cast(v).unwrap_or_else(Self::nan)
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = std::f32::consts::PI;
    const HALF_PI: Self = std::f32::consts::FRAC_PI_2;
    const EPS: Self = 1e-6;
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = std::f64::consts::PI;
    const HALF_PI: Self = std::f64::consts::FRAC_PI_2;
    const EPS: Self = 1e-10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consts() {
        assert_eq!(f32::ZERO + f32::ONE, 1.0);
        assert_eq!(f64::HALF * f64::TWO, 1.0);
        assert!((f32::HALF_PI * 2.0 - f32::PI).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cross_precision_cast() {
        let narrow: f32 = f32::of(1.25f64);
        assert_eq!(narrow, 1.25);
        let wide: f64 = f64::of(1.25f32);
        assert_eq!(wide, 1.25);
    }

    #[test]
    fn test_cast_preserves_nan() {
        let v: f64 = f64::of(f32::NAN);
        assert!(v.is_nan());
    }

    #[test]
    fn test_degrees_radians() {
        // Float supplies to_radians/to_degrees; the geometry code leans on
        // them for every degree-based API.
        assert!((180.0f32.to_radians() - f32::PI).abs() < 1e-6);
        assert!((f64::PI.to_degrees() - 180.0).abs() < 1e-12);
    }
}
