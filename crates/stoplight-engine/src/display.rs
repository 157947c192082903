//! Display-space conversion and post-processing.
//!
//! Samples no band recolored still have to look right on the monitor:
//! linear camera RGB is moved to the target gamut with a matrix
//! precomputed at configuration time, then encoded with the target's
//! transfer curve. Nothing is clamped here; range handling is a
//! post-processing decision applied to the finished cell.

use stoplight_math::{Mat3, Vec3};
use stoplight_primaries::{rgb_to_rgb_matrix, Gamut};
use stoplight_transfer::DisplayCurve;

/// Broadcast legal range, as fractions of full range (10-bit 64..940).
pub const LEGAL_MIN: f32 = 64.0 / 1023.0;
/// Upper edge of the broadcast legal range.
pub const LEGAL_MAX: f32 = 940.0 / 1023.0;

/// Precomputed camera-to-display conversion for one run.
#[derive(Debug, Clone, Copy)]
pub struct DisplayTransform {
    /// Camera gamut to target gamut, computed once per (camera, target) pair.
    pub to_target: Mat3,
    /// Target transfer curve.
    pub curve: DisplayCurve,
}

impl DisplayTransform {
    /// Builds the transform for a camera/target gamut pair.
    pub fn new(camera_gamut: Gamut, target_gamut: Gamut, curve: DisplayCurve) -> Self {
        Self {
            to_target: rgb_to_rgb_matrix(camera_gamut.primaries(), target_gamut.primaries()),
            curve,
        }
    }

    /// Converts linear camera-gamut RGB to encoded display-space RGB.
    ///
    /// Matrix first, then the transfer curve component-wise. Out-of-range
    /// values pass through unclamped.
    #[inline]
    pub fn convert(&self, linear_camera: Vec3) -> [f32; 3] {
        let linear_target = self.to_target * linear_camera;
        self.curve.encode_rgb(linear_target.to_array())
    }

    /// Neutral gray at the given scene luminance, encoded for the target.
    ///
    /// Used by the monochrome pass: keeps the sample's tonal level while
    /// discarding its chroma.
    #[inline]
    pub fn neutral(&self, y: f32) -> [f32; 3] {
        let code = self.curve.encode(y);
        [code, code, code]
    }
}

/// Remaps a full-range value into the broadcast legal range.
///
/// Applied uniformly to every channel of every cell as the final step;
/// headroom above [`LEGAL_MAX`] and footroom below [`LEGAL_MIN`] stay
/// reserved for sync and super-white/black excursions.
#[inline]
pub fn scale_to_legal(value: f32) -> f32 {
    LEGAL_MIN + value * (LEGAL_MAX - LEGAL_MIN)
}
