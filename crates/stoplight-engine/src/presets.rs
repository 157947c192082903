//! Curated presets for front-ends.
//!
//! Two data tables live here:
//!
//! 1. Width presets: named band half-widths with plain-English notes on
//!    how much of a typical image ends up painted.
//! 2. Value-to-color suggestions following the industry false-color
//!    convention: deep blue (crushed) through green (middle grey) to red
//!    (near clip).
//!
//! These supply data for prompts and UIs; nothing in the numeric pipeline
//! reads them, and a user can always override the suggestion.

use crate::exposure::BandDomain;

/// A named band half-width with a coverage description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPreset {
    /// Menu label.
    pub label: &'static str,
    /// Half-width passed to the engine, in the domain's unit.
    pub width: f32,
    /// What the image will look like at this width.
    pub description: &'static str,
}

/// Width presets for the stops domain.
pub const STOP_WIDTH_PRESETS: &[WidthPreset] = &[
    WidthPreset {
        label: "Razor   +/-0.05 stops",
        width: 0.05,
        description: "Hair-thin lines; the image stays almost completely clean.",
    },
    WidthPreset {
        label: "Thin    +/-0.10 stops",
        width: 0.10,
        description: "Very subtle bands; exposure structure clearly visible.",
    },
    WidthPreset {
        label: "Narrow  +/-0.20 stops",
        width: 0.20,
        description: "Visible but restrained; the image stays usable.",
    },
    WidthPreset {
        label: "Standard +/-0.30 stops",
        width: 0.30,
        description: "Default; clear false color for dedicated monitoring.",
    },
    WidthPreset {
        label: "Wide    +/-0.50 stops",
        width: 0.50,
        description: "Broad bands for quick on-set checks of the full map.",
    },
];

/// Width presets for the IRE domain.
///
/// IRE widths are absolute signal percentages, not logarithmic stops;
/// +/-5 IRE around 42 covers roughly the same range as +/-0.3 stops
/// around middle grey.
pub const IRE_WIDTH_PRESETS: &[WidthPreset] = &[
    WidthPreset {
        label: "Razor    +/-1 IRE",
        width: 1.0,
        description: "Hair-thin lines; only the exact target level shows color.",
    },
    WidthPreset {
        label: "Thin     +/-2 IRE",
        width: 2.0,
        description: "Very subtle bands for precision monitoring.",
    },
    WidthPreset {
        label: "Narrow   +/-3 IRE",
        width: 3.0,
        description: "Visible but restrained; good for checking specific levels.",
    },
    WidthPreset {
        label: "Standard +/-5 IRE",
        width: 5.0,
        description: "Default; clear bands over a comfortable range.",
    },
    WidthPreset {
        label: "Wide     +/-8 IRE",
        width: 8.0,
        description: "Broad bands for quick on-set checks.",
    },
];

/// Width presets for a banding domain.
pub const fn width_presets(domain: BandDomain) -> &'static [WidthPreset] {
    match domain {
        BandDomain::Stops => STOP_WIDTH_PRESETS,
        BandDomain::Ire => IRE_WIDTH_PRESETS,
    }
}

// Suggestion thresholds: (upper bound, name, hex). Checked in order,
// first match wins; values above the last threshold fall back to red.
type Suggestion = (f32, &'static str, &'static str);

// Stop values relative to middle grey = 0.0.
const STOP_SUGGESTIONS: &[Suggestion] = &[
    (-3.0, "violet", "#5b21b6"), // deep underexposure
    (-2.0, "blue", "#2563eb"),   // underexposed
    (-1.0, "sky", "#38bdf8"),    // slightly under
    (-0.3, "teal", "#2dd4bf"),   // just under middle grey
    (0.3, "green", "#22c55e"),   // middle grey zone
    (1.0, "lime", "#a3e635"),    // slightly over
    (2.0, "yellow", "#facc15"),  // bright
    (3.0, "orange", "#f97316"),  // very bright
];

// IRE thresholds; middle grey lands at ~42 IRE on Rec.709.
const IRE_SUGGESTIONS: &[Suggestion] = &[
    (10.0, "violet", "#5b21b6"), // near black
    (25.0, "blue", "#2563eb"),   // deep shadows
    (35.0, "sky", "#38bdf8"),    // shadows
    (38.0, "teal", "#2dd4bf"),   // just under middle grey
    (46.0, "green", "#22c55e"),  // middle grey zone
    (55.0, "lime", "#a3e635"),   // slightly bright
    (65.0, "yellow", "#facc15"), // skin tones / bright
    (80.0, "orange", "#f97316"), // highlights
];

const FALLBACK: (&str, &str) = ("red", "#dc2626"); // near clipping

/// Suggests `(name, hex)` for a band value in the given domain.
///
/// # Example
///
/// ```rust
/// use stoplight_engine::exposure::BandDomain;
/// use stoplight_engine::presets::suggest_color;
///
/// let (name, hex) = suggest_color(0.0, BandDomain::Stops);
/// assert_eq!(name, "green");
/// assert_eq!(hex, "#22c55e");
/// ```
pub fn suggest_color(value: f32, domain: BandDomain) -> (&'static str, &'static str) {
    let table = match domain {
        BandDomain::Stops => STOP_SUGGESTIONS,
        BandDomain::Ire => IRE_SUGGESTIONS,
    };
    for &(threshold, name, hex) in table {
        if value <= threshold {
            return (name, hex);
        }
    }
    FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_hex;

    #[test]
    fn middle_grey_suggests_green() {
        assert_eq!(suggest_color(0.0, BandDomain::Stops).0, "green");
        assert_eq!(suggest_color(42.0, BandDomain::Ire).0, "green");
    }

    #[test]
    fn extremes_walk_blue_to_red() {
        assert_eq!(suggest_color(-5.0, BandDomain::Stops).0, "violet");
        assert_eq!(suggest_color(4.0, BandDomain::Stops).0, "red");
        assert_eq!(suggest_color(95.0, BandDomain::Ire).0, "red");
    }

    #[test]
    fn suggestion_hexes_parse() {
        for &(_, _, hex) in STOP_SUGGESTIONS.iter().chain(IRE_SUGGESTIONS) {
            parse_hex(hex).unwrap();
        }
        parse_hex(FALLBACK.1).unwrap();
    }

    #[test]
    fn preset_widths_are_positive_and_ascending() {
        for presets in [STOP_WIDTH_PRESETS, IRE_WIDTH_PRESETS] {
            let mut prev = 0.0;
            for p in presets {
                assert!(p.width > prev, "{}", p.label);
                prev = p.width;
            }
        }
    }
}
