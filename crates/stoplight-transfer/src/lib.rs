//! # stoplight-transfer
//!
//! Transfer functions (camera log curves and display OETFs) for exposure
//! LUT generation.
//!
//! Transfer functions convert between linear scene light and encoded code
//! values. Every curve here is implemented natively from the manufacturer
//! or ITU specification; no external color-science library is involved.
//!
//! # Terminology
//!
//! - **Log decode**: Encoded camera code -> linear scene light
//! - **Log encode**: Linear scene light -> encoded camera code
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> display code
//!
//! # Supported Curves
//!
//! | Function | Use Case | Referred |
//! |----------|----------|----------|
//! | [`s_log3`] | Sony cameras | Scene |
//! | [`v_log`] | Panasonic VariCam / Lumix | Scene |
//! | [`canon_log3`] | Canon Cinema EOS | Scene |
//! | [`log_c3`] | ARRI LogC3 (ALEXA, EI 800) | Scene |
//! | [`log3g10`] | RED cameras (REDLog3G10) | Scene |
//! | [`rec709`] | HDTV broadcast monitors | Display |
//! | [`rec2020`] | UHDTV monitors | Display |
//!
//! # Adapters
//!
//! [`LogCurve`] and [`DisplayCurve`] wrap the module functions behind
//! closed enums so the rest of the pipeline dispatches on a fixed set of
//! variants instead of matching strings at sample time.
//!
//! ```rust
//! use stoplight_transfer::LogCurve;
//!
//! let linear = LogCurve::SLog3.decode(0.41);
//! assert!((linear - 0.18).abs() < 0.02);
//! ```
//!
//! # Used By
//!
//! - `stoplight-engine` - per-sample decode/encode in the LUT pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canon_log3;
pub mod log3g10;
pub mod log_c3;
pub mod rec2020;
pub mod rec709;
pub mod s_log3;
pub mod v_log;

mod curve;

pub use curve::{DisplayCurve, LogCurve, TransferKind};
