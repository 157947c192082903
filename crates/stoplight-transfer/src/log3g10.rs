//! RED Log3G10 transfer function.
//!
//! Log3G10 is RED's modern log encoding. 18% gray maps to 1/3 of the code
//! range and the curve reaches 10 stops above it at code 1.0. Negative
//! linear values are handled by a linear extension below the break point.
//!
//! # Range
//!
//! - Encoded: [0, 1] (signal range, no raised black)
//! - Linear: Scene-referred
//!
//! # Reference
//!
//! RED Digital Cinema - Technical White Papers; OCIO RedCameras builtins

const LIN_SIDE_SLOPE: f64 = 155.975327;
const LIN_SIDE_OFFSET: f64 = 0.01 * LIN_SIDE_SLOPE + 1.0;
const LOG_SIDE_SLOPE: f64 = 0.224282;
const LIN_SIDE_BREAK: f64 = -0.01;

// Curve value and slope at the break point, for the linear extension.
fn break_params() -> (f64, f64) {
    let break_lin = LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET;
    let log_at_break = LOG_SIDE_SLOPE * break_lin.log10();
    let slope_at_break = LOG_SIDE_SLOPE * LIN_SIDE_SLOPE / (break_lin * std::f64::consts::LN_10);
    (log_at_break, slope_at_break)
}

/// Log3G10 encode: Linear to Log3G10.
///
/// # Example
///
/// ```rust
/// use stoplight_transfer::log3g10::encode;
///
/// let log = encode(0.18);
/// assert!(log > 0.3 && log < 0.5);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64;

    if x >= LIN_SIDE_BREAK {
        let lin_val = LIN_SIDE_SLOPE * x + LIN_SIDE_OFFSET;
        (LOG_SIDE_SLOPE * lin_val.log10()) as f32
    } else {
        let (log_at_break, slope_at_break) = break_params();
        (log_at_break + slope_at_break * (x - LIN_SIDE_BREAK)) as f32
    }
}

/// Log3G10 decode: Log3G10 to linear.
///
/// # Example
///
/// ```rust
/// use stoplight_transfer::log3g10::decode;
///
/// let linear = decode(0.4);
/// assert!(linear > 0.0 && linear < 1.0);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;
    let (log_at_break, slope_at_break) = break_params();

    if y >= log_at_break {
        let lin_val = 10.0_f64.powf(y / LOG_SIDE_SLOPE);
        ((lin_val - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE) as f32
    } else {
        (LIN_SIDE_BREAK + (y - log_at_break) / slope_at_break) as f32
    }
}
