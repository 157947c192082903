//! Static camera and target profile registry.
//!
//! Profiles bundle a gamut, a transfer curve, and the sensor's physical
//! clip points. They are plain static records: loaded once, never mutated,
//! and referenced by every downstream stage of a run.
//!
//! Clip stops and log floor/ceiling are hardware properties of each
//! sensor. No transfer-function math can derive where a specific camera
//! clips; the values here come from manufacturer documentation.

use crate::error::{EngineError, EngineResult};
use stoplight_primaries::Gamut;
use stoplight_transfer::{DisplayCurve, LogCurve, TransferKind};

/// A camera's log/gamut profile.
///
/// Invariants (enforced by [`validate_registry`]):
/// - `black_clip_stops < 0 < white_clip_stops`
/// - `0 <= log_floor < log_ceiling <= 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraProfile {
    /// Registry identifier, e.g. "Sony S-Log3".
    pub name: &'static str,
    /// Native camera gamut.
    pub gamut: Gamut,
    /// Log transfer curve.
    pub log: LogCurve,
    /// Stops above middle grey at which the sensor saturates.
    pub white_clip_stops: f32,
    /// Stops below middle grey at which response falls into the noise floor.
    pub black_clip_stops: f32,
    /// Normalized code value of digital black.
    pub log_floor: f32,
    /// Normalized code value of the digital ceiling.
    pub log_ceiling: f32,
}

/// A display (or log monitor) output profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetProfile {
    /// Registry identifier, e.g. "Rec.709".
    pub name: &'static str,
    /// Target display gamut.
    pub gamut: Gamut,
    /// Transfer curve applied after the gamut transform.
    pub transfer: DisplayCurve,
}

impl TargetProfile {
    /// OETF vs log-encode tag of the target curve.
    pub const fn kind(&self) -> TransferKind {
        self.transfer.kind()
    }
}

/// Supported camera profiles.
pub static CAMERA_PROFILES: &[CameraProfile] = &[
    CameraProfile {
        name: "Sony S-Log3",
        gamut: Gamut::SGamut3Cine,
        log: LogCurve::SLog3,
        white_clip_stops: 6.0,
        black_clip_stops: -9.0,
        log_ceiling: 0.94,  // ~94 IRE, S-Log3 hard digital ceiling
        log_floor: 0.035,   // ~3.5 IRE, S-Log3 noise floor / digital black
    },
    CameraProfile {
        name: "Panasonic V-Log",
        gamut: Gamut::VGamut,
        log: LogCurve::VLog,
        white_clip_stops: 6.5,
        black_clip_stops: -8.0,
        log_ceiling: 0.8906, // VariCam 35 clip = 10-bit code 911 / 1023
        log_floor: 0.1251,   // 0% reflectance = 10-bit code 128 / 1023
    },
    CameraProfile {
        name: "Canon Log 3",
        gamut: Gamut::CinemaGamut,
        log: LogCurve::CanonLog3,
        white_clip_stops: 7.0,
        black_clip_stops: -7.5,
        log_ceiling: 0.90,
        log_floor: 0.04,
    },
    CameraProfile {
        name: "ARRI LogC3",
        gamut: Gamut::ArriWideGamut3,
        log: LogCurve::LogC3,
        white_clip_stops: 7.5,
        black_clip_stops: -7.0,
        log_ceiling: 0.91, // LogC3 hard ceiling at EI 800
        log_floor: 0.03,
    },
    CameraProfile {
        name: "RED Log3G10",
        gamut: Gamut::RedWideGamut,
        log: LogCurve::Log3G10,
        white_clip_stops: 10.0,
        black_clip_stops: -8.0,
        log_ceiling: 1.0, // Log3G10 uses the full code range
        log_floor: 0.0,   // no raised digital black
    },
];

/// Supported target profiles.
pub static TARGET_PROFILES: &[TargetProfile] = &[
    TargetProfile {
        name: "Rec.709",
        gamut: Gamut::Rec709,
        transfer: DisplayCurve::Rec709,
    },
    TargetProfile {
        name: "Rec.2020",
        gamut: Gamut::Rec2020,
        transfer: DisplayCurve::Rec2020,
    },
    // For log-capable on-set monitors that apply their own display curve.
    TargetProfile {
        name: "S-Log3 Monitor",
        gamut: Gamut::SGamut3Cine,
        transfer: DisplayCurve::SLog3,
    },
];

/// Looks up a camera profile by registry identifier.
pub fn camera(name: &str) -> EngineResult<&'static CameraProfile> {
    CAMERA_PROFILES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| EngineError::UnknownCamera(name.to_string()))
}

/// Looks up a target profile by registry identifier.
pub fn target(name: &str) -> EngineResult<&'static TargetProfile> {
    TARGET_PROFILES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| EngineError::UnknownTarget(name.to_string()))
}

/// Validates every registry profile once, before any generation.
///
/// Checks the record invariants and probes each transfer curve for
/// round-trip sanity. The numeric pipeline runs only after this passes, so
/// downstream stages trust the registry unconditionally.
pub fn validate_registry() -> EngineResult<()> {
    for p in CAMERA_PROFILES {
        if !(p.black_clip_stops < 0.0 && 0.0 < p.white_clip_stops) {
            return Err(EngineError::InvalidProfile {
                name: p.name,
                reason: format!(
                    "clip stops must straddle middle grey, got black={} white={}",
                    p.black_clip_stops, p.white_clip_stops
                ),
            });
        }
        if !(0.0..=1.0).contains(&p.log_floor)
            || !(0.0..=1.0).contains(&p.log_ceiling)
            || p.log_floor >= p.log_ceiling
        {
            return Err(EngineError::InvalidProfile {
                name: p.name,
                reason: format!(
                    "log floor/ceiling must satisfy 0 <= floor < ceiling <= 1, got {}..{}",
                    p.log_floor, p.log_ceiling
                ),
            });
        }
        probe_roundtrip(p.name, |x| p.log.encode(p.log.decode(x)))?;
    }

    for t in TARGET_PROFILES {
        probe_roundtrip(t.name, |x| t.transfer.encode(t.transfer.decode(x)))?;
    }

    Ok(())
}

// Spot-checks encode(decode(x)) == x across the code range.
fn probe_roundtrip(name: &'static str, roundtrip: impl Fn(f32) -> f32) -> EngineResult<()> {
    for i in 0..=20 {
        let code = i as f32 / 20.0;
        let back = roundtrip(code);
        if (code - back).abs() >= 1e-4 {
            return Err(EngineError::InvalidProfile {
                name,
                reason: format!("transfer round-trip drift at code {code}: got {back}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_passes_integrity_check() {
        validate_registry().expect("shipped registry must validate");
    }

    #[test]
    fn all_cameras_have_valid_clip_invariants() {
        for p in CAMERA_PROFILES {
            assert!(p.black_clip_stops < 0.0, "{}", p.name);
            assert!(p.white_clip_stops > 0.0, "{}", p.name);
            assert!(p.log_floor < p.log_ceiling, "{}", p.name);
            assert!((0.0..=1.0).contains(&p.log_floor), "{}", p.name);
            assert!((0.0..=1.0).contains(&p.log_ceiling), "{}", p.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let p = camera("Sony S-Log3").unwrap();
        assert_eq!(p.log, LogCurve::SLog3);

        let t = target("Rec.709").unwrap();
        assert_eq!(t.transfer, DisplayCurve::Rec709);
    }

    #[test]
    fn unknown_names_are_config_errors() {
        let err = camera("GoPro Flat").unwrap_err();
        assert!(err.to_string().contains("GoPro Flat"));

        assert!(target("Rec.601").is_err());
    }

    #[test]
    fn log_monitor_target_is_tagged_log() {
        let t = target("S-Log3 Monitor").unwrap();
        assert_eq!(t.kind(), TransferKind::Log);
    }
}
