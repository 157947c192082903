//! Canon Log 3 transfer function.
//!
//! Canon Log 3 is used by Cinema EOS cameras. The curve has a linear
//! segment straddling black between two log segments.
//!
//! # Range
//!
//! - Encoded: [0, 1] (signal range)
//! - Linear: Scene-referred (negative values via the negative log segment)
//!
//! # Reference
//!
//! Canon Cinema EOS whitepaper; OCIO CanonCameras builtins

const CUT_LOW: f64 = 0.097465473;
const CUT_HIGH: f64 = 0.15277891;

// Log segments
const LOG_OFFSET_NEG: f64 = 0.12783901;
const LOG_OFFSET_POS: f64 = 0.12240537;
const LOG_SLOPE: f64 = 0.36726845;
const LIN_SCALE: f64 = 14.98325;

// Linear segment
const LIN_SLOPE: f64 = 1.9754798;
const LIN_OFFSET: f64 = 0.12512219;

// Normalization factor applied after the curve
const NORM: f64 = 0.9;

/// Canon Log 3 encode: Linear to Canon Log 3.
///
/// Internally computed in f64; the three-segment curve loses precision
/// in f32 near the segment boundaries.
///
/// # Example
///
/// ```rust
/// use stoplight_transfer::canon_log3::encode;
///
/// let log = encode(0.18);
/// assert!(log > 0.3 && log < 0.6);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64 / NORM;

    // Break points in linear domain
    if x < -0.014 {
        (LOG_OFFSET_NEG - LOG_SLOPE * (-x * LIN_SCALE + 1.0).log10()) as f32
    } else if x <= 0.014 {
        (x * LIN_SLOPE + LIN_OFFSET) as f32
    } else {
        (LOG_OFFSET_POS + LOG_SLOPE * (x * LIN_SCALE + 1.0).log10()) as f32
    }
}

/// Canon Log 3 decode: Canon Log 3 to linear.
///
/// # Example
///
/// ```rust
/// use stoplight_transfer::canon_log3::{decode, encode};
///
/// let linear = decode(encode(0.18));
/// assert!((linear - 0.18).abs() < 1e-4);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;

    let out = if y < CUT_LOW {
        -(10.0_f64.powf((LOG_OFFSET_NEG - y) / LOG_SLOPE) - 1.0) / LIN_SCALE
    } else if y <= CUT_HIGH {
        (y - LIN_OFFSET) / LIN_SLOPE
    } else {
        (10.0_f64.powf((y - LOG_OFFSET_POS) / LOG_SLOPE) - 1.0) / LIN_SCALE
    };

    (out * NORM) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let test_values = [0.0, 0.001, 0.01, 0.012, 0.18, 0.5, 1.0, -0.01];
        for &l in &test_values {
            let encoded = encode(l);
            let decoded = decode(encoded);
            assert!(
                (l - decoded).abs() < 1e-5,
                "l={}, encoded={}, decoded={}",
                l,
                encoded,
                decoded
            );
        }
    }

    #[test]
    fn test_zero_in_linear_segment() {
        // Linear 0 lands on the linear segment at the code offset
        let encoded = encode(0.0);
        assert!((encoded as f64 - LIN_OFFSET).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = encode(-0.1);
        for i in 1..100 {
            let lin = -0.1 + 0.012 * i as f32;
            let enc = encode(lin);
            assert!(enc > prev, "not monotonic at lin={lin}");
            prev = enc;
        }
    }

    #[test]
    fn test_continuity_at_breakpoints() {
        let eps = 1e-6_f32;
        let lo = decode(CUT_LOW as f32);
        let lo_below = decode(CUT_LOW as f32 - eps);
        assert!((lo - lo_below).abs() < 1e-4);

        let hi = decode(CUT_HIGH as f32);
        let hi_above = decode(CUT_HIGH as f32 + eps);
        assert!((hi - hi_above).abs() < 1e-4);
    }
}
