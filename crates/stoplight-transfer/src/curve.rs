//! Closed transfer-curve adapters.
//!
//! The LUT pipeline never dispatches on curve name strings at sample time.
//! Profile identifiers are resolved once, at registry load, into these
//! enums; every later decode/encode is a match over a closed set, so an
//! unknown curve is unrepresentable past the configuration boundary.

use crate::{canon_log3, log3g10, log_c3, rec2020, rec709, s_log3, v_log};

/// Camera log curve, as a decode/encode pair.
///
/// # Example
///
/// ```rust
/// use stoplight_transfer::LogCurve;
///
/// let linear = LogCurve::SLog3.decode(0.41);
/// let code = LogCurve::SLog3.encode(linear);
/// assert!((code - 0.41).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCurve {
    /// Sony S-Log3
    SLog3,
    /// Panasonic V-Log
    VLog,
    /// Canon Log 3
    CanonLog3,
    /// ARRI LogC3 (EI 800)
    LogC3,
    /// RED Log3G10
    Log3G10,
}

impl LogCurve {
    /// All supported camera log curves.
    pub const ALL: [Self; 5] = [
        Self::SLog3,
        Self::VLog,
        Self::CanonLog3,
        Self::LogC3,
        Self::Log3G10,
    ];

    /// Curve name as it appears in profile listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SLog3 => "S-Log3",
            Self::VLog => "V-Log",
            Self::CanonLog3 => "Canon Log 3",
            Self::LogC3 => "ARRI LogC3",
            Self::Log3G10 => "Log3G10",
        }
    }

    /// Decodes an encoded code value to linear scene light.
    #[inline]
    pub fn decode(self, code: f32) -> f32 {
        match self {
            Self::SLog3 => s_log3::decode(code),
            Self::VLog => v_log::decode(code),
            Self::CanonLog3 => canon_log3::decode(code),
            Self::LogC3 => log_c3::decode(code),
            Self::Log3G10 => log3g10::decode(code),
        }
    }

    /// Encodes linear scene light to a code value.
    #[inline]
    pub fn encode(self, linear: f32) -> f32 {
        match self {
            Self::SLog3 => s_log3::encode(linear),
            Self::VLog => v_log::encode(linear),
            Self::CanonLog3 => canon_log3::encode(linear),
            Self::LogC3 => log_c3::encode(linear),
            Self::Log3G10 => log3g10::encode(linear),
        }
    }

    /// Decodes an RGB triplet component-wise.
    #[inline]
    pub fn decode_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        [self.decode(rgb[0]), self.decode(rgb[1]), self.decode(rgb[2])]
    }
}

/// Whether a display curve is an OETF or a log encode.
///
/// Both are applied the same way (component-wise on linear RGB); the tag
/// exists because monitor pipelines care about the distinction and it is
/// reported in the LUT comment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Standard display OETF (Rec.709, Rec.2020)
    Oetf,
    /// Camera-style log encode, for log-capable monitors
    Log,
}

impl TransferKind {
    /// Uppercase tag used in the LUT comment header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oetf => "OETF",
            Self::Log => "LOG",
        }
    }
}

/// Target display curve, as an encode/decode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCurve {
    /// ITU-R BT.709 OETF
    Rec709,
    /// ITU-R BT.2020 OETF
    Rec2020,
    /// S-Log3 encode, for log-capable on-set monitors
    SLog3,
}

impl DisplayCurve {
    /// All supported display curves.
    pub const ALL: [Self; 3] = [Self::Rec709, Self::Rec2020, Self::SLog3];

    /// Curve name as it appears in profile listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rec709 => "ITU-R BT.709",
            Self::Rec2020 => "ITU-R BT.2020",
            Self::SLog3 => "S-Log3",
        }
    }

    /// OETF vs log-encode tag for this curve.
    pub const fn kind(self) -> TransferKind {
        match self {
            Self::Rec709 | Self::Rec2020 => TransferKind::Oetf,
            Self::SLog3 => TransferKind::Log,
        }
    }

    /// Encodes linear light to the display code value.
    #[inline]
    pub fn encode(self, linear: f32) -> f32 {
        match self {
            Self::Rec709 => rec709::oetf(linear),
            Self::Rec2020 => rec2020::oetf(linear),
            Self::SLog3 => s_log3::encode(linear),
        }
    }

    /// Decodes a display code value back to linear light.
    #[inline]
    pub fn decode(self, code: f32) -> f32 {
        match self {
            Self::Rec709 => rec709::oetf_inverse(code),
            Self::Rec2020 => rec2020::oetf_inverse(code),
            Self::SLog3 => s_log3::decode(code),
        }
    }

    /// Encodes an RGB triplet component-wise.
    #[inline]
    pub fn encode_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        [self.encode(rgb[0]), self.encode(rgb[1]), self.encode(rgb[2])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Round-trip tolerance required of every supported curve.
    const TOL: f32 = 1e-4;

    #[test]
    fn log_curves_roundtrip_over_code_range() {
        for curve in LogCurve::ALL {
            for i in 0..=1000 {
                let code = i as f32 / 1000.0;
                let back = curve.encode(curve.decode(code));
                assert!(
                    (code - back).abs() < TOL,
                    "{}: code={}, back={}",
                    curve.name(),
                    code,
                    back
                );
            }
        }
    }

    #[test]
    fn display_curves_roundtrip_over_code_range() {
        for curve in DisplayCurve::ALL {
            for i in 0..=1000 {
                let code = i as f32 / 1000.0;
                let back = curve.encode(curve.decode(code));
                assert!(
                    (code - back).abs() < TOL,
                    "{}: code={}, back={}",
                    curve.name(),
                    code,
                    back
                );
            }
        }
    }

    #[test]
    fn kinds_are_tagged() {
        assert_eq!(DisplayCurve::Rec709.kind(), TransferKind::Oetf);
        assert_eq!(DisplayCurve::Rec2020.kind(), TransferKind::Oetf);
        assert_eq!(DisplayCurve::SLog3.kind(), TransferKind::Log);
    }

    #[test]
    fn decode_rgb_is_componentwise() {
        let rgb = LogCurve::SLog3.decode_rgb([0.2, 0.41, 0.8]);
        assert_eq!(rgb[1], LogCurve::SLog3.decode(0.41));
    }
}
