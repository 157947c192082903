//! # stoplight-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation for the
//! camera and display gamuts the LUT generator supports.
//!
//! # What are Color Primaries?
//!
//! Color primaries define the gamut (range of colors) a camera or display
//! can represent. Each primary is specified as CIE xy chromaticity
//! coordinates; together with the white point they determine the 3x3
//! RGB-to-XYZ matrix, whose middle row is the gamut's luminance weighting.
//!
//! That luminance row is what makes exposure banding physically correct on
//! wide-gamut cameras: a fixed BT.709 weighting would misreport luminance
//! for anything shot in S-Gamut3.Cine or REDWideGamutRGB.
//!
//! # Included Gamuts
//!
//! | Gamut | Kind | White |
//! |-------|------|-------|
//! | Rec.709 / sRGB | Display | D65 |
//! | Rec.2020 | Display | D65 |
//! | S-Gamut3.Cine | Camera (Sony) | D65 |
//! | V-Gamut | Camera (Panasonic) | D65 |
//! | Cinema Gamut | Camera (Canon) | D65 |
//! | ARRI Wide Gamut 3 | Camera (ARRI) | D65 |
//! | REDWideGamutRGB | Camera (RED) | D65 |
//!
//! # Usage
//!
//! ```rust
//! use stoplight_primaries::{Gamut, rgb_to_xyz_matrix};
//! use stoplight_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(Gamut::Rec709.primaries());
//!
//! // The Y row weights RGB into luminance
//! let luma_row = m.row(1);
//! let y = luma_row.dot(Vec3::new(0.18, 0.18, 0.18));
//! assert!((y - 0.18).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`stoplight-math`] - Matrix operations
//!
//! # Used By
//!
//! - `stoplight-engine` - luminance and camera-to-target conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use stoplight_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a gamut by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Gamut name
    pub name: &'static str,
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

// ============================================================================
// Display Gamut Primaries
// ============================================================================

/// Rec.709 / sRGB primaries (D65 white point).
pub const REC709: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "ITU-R BT.709",
};

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "ITU-R BT.2020",
};

// ============================================================================
// Camera Gamut Primaries
// ============================================================================

/// Sony S-Gamut3.Cine primaries.
///
/// The "Cine" variant trades a little of S-Gamut3's coverage for easier
/// grading toward DCI-P3.
pub const S_GAMUT3_CINE: Primaries = Primaries {
    r: (0.7660, 0.2750),
    g: (0.2250, 0.8000),
    b: (0.0890, -0.0870),
    w: D65_XY,
    name: "S-Gamut3.Cine",
};

/// Panasonic V-Gamut primaries.
pub const V_GAMUT: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1650, 0.8400),
    b: (0.1000, -0.0300),
    w: D65_XY,
    name: "V-Gamut",
};

/// Canon Cinema Gamut primaries.
pub const CINEMA_GAMUT: Primaries = Primaries {
    r: (0.7400, 0.2700),
    g: (0.1700, 1.1400),
    b: (0.0800, -0.1000),
    w: D65_XY,
    name: "Cinema Gamut",
};

/// ARRI Wide Gamut 3 primaries.
pub const ARRI_WIDE_GAMUT_3: Primaries = Primaries {
    r: (0.6840, 0.3130),
    g: (0.2210, 0.8480),
    b: (0.0861, -0.1020),
    w: D65_XY,
    name: "ARRI Wide Gamut 3",
};

/// REDWideGamutRGB primaries.
pub const RED_WIDE_GAMUT: Primaries = Primaries {
    r: (0.780308, 0.304253),
    g: (0.121595, 1.493994),
    b: (0.095612, -0.084589),
    w: D65_XY,
    name: "REDWideGamutRGB",
};

// ============================================================================
// Gamut identifiers
// ============================================================================

/// Closed set of supported gamuts.
///
/// Profile records reference gamuts through this enum, resolved once from
/// validated identifiers; downstream code never matches on gamut name
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gamut {
    /// ITU-R BT.709 / sRGB
    Rec709,
    /// ITU-R BT.2020
    Rec2020,
    /// Sony S-Gamut3.Cine
    SGamut3Cine,
    /// Panasonic V-Gamut
    VGamut,
    /// Canon Cinema Gamut
    CinemaGamut,
    /// ARRI Wide Gamut 3
    ArriWideGamut3,
    /// REDWideGamutRGB
    RedWideGamut,
}

impl Gamut {
    /// All supported gamuts.
    pub const ALL: [Self; 7] = [
        Self::Rec709,
        Self::Rec2020,
        Self::SGamut3Cine,
        Self::VGamut,
        Self::CinemaGamut,
        Self::ArriWideGamut3,
        Self::RedWideGamut,
    ];

    /// The chromaticity record for this gamut.
    pub const fn primaries(self) -> &'static Primaries {
        match self {
            Self::Rec709 => &REC709,
            Self::Rec2020 => &REC2020,
            Self::SGamut3Cine => &S_GAMUT3_CINE,
            Self::VGamut => &V_GAMUT,
            Self::CinemaGamut => &CINEMA_GAMUT,
            Self::ArriWideGamut3 => &ARRI_WIDE_GAMUT_3,
            Self::RedWideGamut => &RED_WIDE_GAMUT,
        }
    }

    /// Gamut name as it appears in profile listings.
    pub const fn name(self) -> &'static str {
        self.primaries().name
    }
}

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Standard derivation:
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-primary scaling so white (1,1,1) maps to the white point
/// 3. Scale the primary columns by those factors
///
/// # Example
///
/// ```rust
/// use stoplight_primaries::{REC709, rgb_to_xyz_matrix};
/// use stoplight_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&REC709);
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Build matrix from primaries as columns
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve for scaling factors: M * S = W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Computes a matrix to convert from one RGB gamut to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. All
/// supported gamuts share the D65 white point, so no chromatic adaptation
/// step is needed.
///
/// # Example
///
/// ```rust
/// use stoplight_primaries::{S_GAMUT3_CINE, REC709, rgb_to_rgb_matrix};
///
/// let sgamut_to_709 = rgb_to_rgb_matrix(&S_GAMUT3_CINE, &REC709);
/// ```
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    let src_to_xyz = rgb_to_xyz_matrix(src);
    let xyz_to_dst = xyz_to_rgb_matrix(dst);
    xyz_to_dst * src_to_xyz
}

/// Luminance weighting row for a gamut.
///
/// Row 1 (the Y row) of the gamut's RGB-to-XYZ matrix. Dotting linear RGB
/// with this row yields scene luminance; the result may be negative or
/// exceed 1.0 for out-of-gamut or superwhite values and is deliberately
/// not clamped.
///
/// # Example
///
/// ```rust
/// use stoplight_primaries::{Gamut, luminance_row};
/// use stoplight_math::Vec3;
///
/// let row = luminance_row(Gamut::Rec709);
/// assert!((row.x - 0.2126).abs() < 0.001);
/// ```
pub fn luminance_row(gamut: Gamut) -> Vec3 {
    rgb_to_xyz_matrix(gamut.primaries()).row(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rec709_matrix() {
        let m = rgb_to_xyz_matrix(&REC709);

        // Check against known values
        assert!((m.m[0][0] - 0.4124564).abs() < 0.001);
        assert!((m.m[1][0] - 0.2126729).abs() < 0.001);
    }

    #[test]
    fn test_white_point() {
        let m = rgb_to_xyz_matrix(&REC709);
        let white = m * Vec3::ONE;

        // Y should be 1.0
        assert!((white.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_roundtrip() {
        use approx::assert_relative_eq;

        let to_xyz = rgb_to_xyz_matrix(&REC709);
        let to_rgb = xyz_to_rgb_matrix(&REC709);

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let xyz = to_xyz * rgb;
        let back = to_rgb * xyz;

        assert_relative_eq!(rgb.x, back.x, epsilon = 1e-3);
        assert_relative_eq!(rgb.y, back.y, epsilon = 1e-3);
        assert_relative_eq!(rgb.z, back.z, epsilon = 1e-3);
    }

    #[test]
    fn test_same_gamut_is_identity() {
        let m = rgb_to_rgb_matrix(&V_GAMUT, &V_GAMUT);

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 0.001);
            }
        }
    }

    #[test]
    fn test_all_gamuts_have_valid_white() {
        for gamut in Gamut::ALL {
            let m = rgb_to_xyz_matrix(gamut.primaries());
            let white = m * Vec3::ONE;
            assert!(
                white.y > 0.9 && white.y < 1.1,
                "{} white Y = {}",
                gamut.name(),
                white.y
            );
        }
    }

    #[test]
    fn test_luminance_rows_sum_to_one() {
        // The Y row weights must sum to 1 so neutral gray keeps its level
        for gamut in Gamut::ALL {
            let row = luminance_row(gamut);
            let sum = row.x + row.y + row.z;
            assert!((sum - 1.0).abs() < 0.001, "{} sum = {}", gamut.name(), sum);
        }
    }

    #[test]
    fn test_neutral_preserved_across_gamuts() {
        // A neutral value converts to the same neutral in any target gamut
        let m = rgb_to_rgb_matrix(&S_GAMUT3_CINE, &REC709);
        let gray = m * Vec3::splat(0.18);
        assert!((gray.x - 0.18).abs() < 1e-3);
        assert!((gray.y - 0.18).abs() < 1e-3);
        assert!((gray.z - 0.18).abs() < 1e-3);
    }
}
