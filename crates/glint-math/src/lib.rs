//! # glint-math
//!
//! Linear algebra for real-time graphics.
//!
//! This crate provides the value types a render loop passes around every
//! frame:
//!
//! - [`Vector3`] / [`Vector4`] - 3D and homogeneous 4D vectors
//! - [`Matrix3x3`] / [`Matrix4x4`] - rotation blocks and full transforms
//! - [`Quaternion`] - rotations, with conversions between all
//!   representations (matrix, axis-angle, heading-pitch-roll Euler)
//! - Transform builders: translation, scale, perspective, orthographic,
//!   view matrix
//!
//! # Design
//!
//! All types are generic over [`Real`] (`f32` or `f64`), `#[repr(C)]`,
//! plain `Copy` values with exact `PartialEq`. Matrices use **row-major**
//! storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! so translation lives in the last column and composite transforms read
//! right to left (`projection * view * model`). GPU APIs that consume
//! column-major buffers use the `to_col_major_array` exports.
//!
//! # Usage
//!
//! ```rust
//! use glint_math::{Matrix4x4, Quaternion, Vector3};
//!
//! let model = Matrix4x4::from_translation(Vector3::new(0.0f32, 1.0, 0.0))
//!     * Quaternion::from_axis_angle(Vector3::UNIT_Y, 45.0).to_mat4();
//! let view = Matrix4x4::look_at(
//!     Vector3::new(0.0, 2.0, 5.0),
//!     Vector3::ZERO,
//!     Vector3::UNIT_Y,
//! );
//! let proj = Matrix4x4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let mvp = proj * view * model;
//! let uniform: [f32; 16] = mvp.to_col_major_array();
//! # let _ = uniform;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Fast SIMD-accelerated math, used for interop
//! - [`num_traits`] - Generic float scalar bounds
//! - [`thiserror`] - Typed errors for singular matrices and short buffers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod mat3;
mod mat4;
mod quat;
mod real;
mod vec3;
mod vec4;

pub use error::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use real::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DMat4, DQuat, DVec3, DVec4, Mat3, Mat4, Quat, Vec3, Vec4};
}
