//! # stoplight-lut
//!
//! 3D LUT container and `.cube` interchange format support.
//!
//! The generator's output artifact is a [`Lut3D`]: a cubic lattice of RGB
//! output triples, serialized as an Adobe/Resolve `.cube` text file that
//! grading tools and on-set monitors consume directly.
//!
//! # Usage
//!
//! ```rust
//! use stoplight_lut::{Lut3D, cube};
//!
//! let lut = Lut3D::identity(17);
//! let text = cube::render_3d(&lut);
//! assert!(text.contains("LUT_3D_SIZE 17"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `stoplight-engine` - grid sampling fills a `Lut3D`, then writes it

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut3d;
pub mod cube;

pub use error::{LutError, LutResult};
pub use lut3d::Lut3D;
