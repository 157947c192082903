//! Rec.2020 (BT.2020) transfer function.
//!
//! The BT.2020 OETF has the same shape as BT.709 but the standard states
//! the segment constants to higher precision (the 12-bit variants). Using
//! them keeps the curve exactly continuous at the knee.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.2020-2

const ALPHA: f32 = 1.09929682680944;
const BETA: f32 = 0.018053968510807;

/// Rec.2020 OETF: Encodes linear to Rec.2020.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < BETA {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    }
}

/// Rec.2020 inverse OETF: Decodes Rec.2020 to linear.
#[inline]
pub fn oetf_inverse(v: f32) -> f32 {
    if v < 4.5 * BETA {
        v / 4.5
    } else {
        ((v + (ALPHA - 1.0)) / ALPHA).powf(1.0 / 0.45)
    }
}
