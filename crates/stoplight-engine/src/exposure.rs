//! Exposure and signal-level mapping.
//!
//! Converts a sample's scene luminance into the scalar the band resolver
//! compares against. Two domains are supported, selected once per run:
//!
//! - **Stops**: photographic stops from middle grey, `log2(Y / 0.18)`
//! - **IRE**: the target-encoded signal level as a 0-100 percentage
//!
//! The resolver is domain-agnostic; it only ever sees the scalar produced
//! here.

use serde::{Deserialize, Serialize};
use stoplight_transfer::DisplayCurve;

/// Reference middle grey reflectance.
pub const MIDDLE_GREY: f32 = 0.18;

/// Which quantity the user's bands are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandDomain {
    /// Stops from middle grey (scene exposure).
    #[default]
    Stops,
    /// IRE percentage of the display signal (0-100).
    Ire,
}

impl BandDomain {
    /// Unit suffix used in the LUT comment header.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Stops => "stops",
            Self::Ire => "IRE",
        }
    }
}

/// Stops from middle grey for a scene luminance.
///
/// `y <= 0` maps to negative infinity, which the sampler routes to the
/// black-clip path; it is valid input, never an error or a NaN.
///
/// # Example
///
/// ```rust
/// use stoplight_engine::exposure::stops_from_luminance;
///
/// assert!((stops_from_luminance(0.36) - 1.0).abs() < 1e-6);
/// assert!((stops_from_luminance(0.09) + 1.0).abs() < 1e-6);
/// assert_eq!(stops_from_luminance(0.0), f32::NEG_INFINITY);
/// ```
#[inline]
pub fn stops_from_luminance(y: f32) -> f32 {
    if y <= 0.0 {
        f32::NEG_INFINITY
    } else {
        (y / MIDDLE_GREY).log2()
    }
}

/// IRE level for a scene luminance under the given target curve.
///
/// The luminance is pushed through the same transfer the display output
/// uses, then expressed as a percentage of the full code range. Middle
/// grey lands near 42 IRE on Rec.709.
#[inline]
pub fn ire_from_luminance(y: f32, curve: DisplayCurve) -> f32 {
    curve.encode(y) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_reference_points() {
        use approx::assert_relative_eq;

        assert_eq!(stops_from_luminance(MIDDLE_GREY), 0.0);
        assert_relative_eq!(stops_from_luminance(0.36), 1.0, epsilon = 1e-6);
        assert_relative_eq!(stops_from_luminance(0.045), -2.0, epsilon = 1e-6);
    }

    #[test]
    fn non_positive_luminance_is_negative_infinity() {
        assert_eq!(stops_from_luminance(0.0), f32::NEG_INFINITY);
        assert_eq!(stops_from_luminance(-0.25), f32::NEG_INFINITY);
        // Never NaN
        assert!(!stops_from_luminance(0.0).is_nan());
    }

    #[test]
    fn middle_grey_lands_near_42_ire_on_rec709() {
        let ire = ire_from_luminance(MIDDLE_GREY, DisplayCurve::Rec709);
        assert!((ire - 42.0).abs() < 2.0, "ire={ire}");
    }

    #[test]
    fn domain_default_is_stops() {
        assert_eq!(BandDomain::default(), BandDomain::Stops);
    }
}
