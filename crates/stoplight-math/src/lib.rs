//! # stoplight-math
//!
//! Math primitives for color space transforms.
//!
//! This crate provides the two types the LUT pipeline computes with:
//!
//! - [`Mat3`] - 3x3 matrices for RGB->XYZ and gamut-to-gamut transforms
//! - [`Vec3`] - RGB/XYZ triplets
//!
//! # Convention
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use stoplight_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `stoplight-primaries` - RGB/XYZ matrix generation
//! - `stoplight-engine` - per-sample gamut conversion and luminance

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;
