//! # stoplight-engine
//!
//! False-color exposure LUT generation.
//!
//! The engine turns a camera's log/gamut profile plus a user band
//! configuration into a sampled 3D LUT that paints exposure stops (or IRE
//! levels) in solid colors for on-set monitoring, and everything else in
//! the converted display image.
//!
//! # Pipeline
//!
//! Data flows one direction; each stage is a pure function of the
//! immutable [`RenderConfig`] and the sample's input code:
//!
//! ```text
//! raw log RGB -> linear scene RGB -> luminance -> stops / IRE
//!     -> band color decision -> (unmatched: gamut + transfer conversion)
//!     -> post-processing -> written grid cell
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use stoplight_engine::{profile, Pipeline, RenderConfig};
//!
//! # fn main() -> Result<(), stoplight_engine::EngineError> {
//! profile::validate_registry()?;
//!
//! let config = RenderConfig::from_file("setup.json")?;
//! let pipeline = Pipeline::new(&config)?;
//! pipeline.generate("SLog3_Rec709.cube")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Dependencies
//!
//! - [`stoplight-math`], [`stoplight-primaries`], [`stoplight-transfer`],
//!   [`stoplight-lut`] - the numeric stages
//! - [`serde`] / [`serde_json`] - config file round-trip
//! - [`rayon`] - parallel grid sampling
//! - [`thiserror`] - error types
//!
//! # Used By
//!
//! - `stoplight-cli` - the `stoplight` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bands;
pub mod config;
pub mod display;
pub mod error;
pub mod exposure;
pub mod presets;
pub mod profile;
pub mod render;

pub use config::{BandSpec, ColorSpec, CubeSize, RenderConfig};
pub use error::{EngineError, EngineResult};
pub use exposure::BandDomain;
pub use profile::{CameraProfile, TargetProfile};
pub use render::Pipeline;
