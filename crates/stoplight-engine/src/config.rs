//! Render configuration.
//!
//! [`RenderConfig`] mirrors the JSON configuration file one-to-one, so a
//! saved setup regenerates without an interactive session. It is read-only
//! for the duration of a run; the pipeline resolves it once into its own
//! working form and never touches shared state afterwards.

use crate::error::{EngineError, EngineResult};
use crate::exposure::BandDomain;
use crate::profile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported cube resolutions.
///
/// `.cube` consumers expect one of the conventional lattice sizes; any
/// other value in a config file is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CubeSize {
    /// 17 points per axis (4913 entries)
    Size17,
    /// 33 points per axis (35937 entries)
    Size33,
    /// 65 points per axis (274625 entries)
    Size65,
}

impl CubeSize {
    /// Lattice points per axis.
    pub const fn points(self) -> usize {
        match self {
            Self::Size17 => 17,
            Self::Size33 => 33,
            Self::Size65 => 65,
        }
    }
}

impl TryFrom<u32> for CubeSize {
    type Error = String;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            17 => Ok(Self::Size17),
            33 => Ok(Self::Size33),
            65 => Ok(Self::Size65),
            other => Err(format!("cube_size must be 17, 33, or 65, got {other}")),
        }
    }
}

impl From<CubeSize> for u32 {
    fn from(s: CubeSize) -> u32 {
        s.points() as u32
    }
}

/// A band or clip color as written in the config file.
///
/// Either an sRGB hex string (`"#22c55e"`) or a literal display-referred
/// triple (`[0.13, 0.77, 0.37]`). Both resolve to the fixed RGB written
/// verbatim into matching LUT cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RRGGBB` hex string
    Hex(String),
    /// Literal RGB triple in [0, 1]
    Rgb([f32; 3]),
}

impl ColorSpec {
    /// Resolves to an RGB triple.
    pub fn resolve(&self) -> EngineResult<[f32; 3]> {
        match self {
            Self::Hex(s) => parse_hex(s),
            Self::Rgb(rgb) => Ok(*rgb),
        }
    }

    /// Human-readable form for the LUT comment header.
    pub fn label(&self) -> String {
        match self {
            Self::Hex(s) => s.clone(),
            Self::Rgb([r, g, b]) => format!("[{r:.3}, {g:.3}, {b:.3}]"),
        }
    }
}

/// Converts `#RRGGBB` to an RGB triple of 0-1 floats.
pub fn parse_hex(hex: &str) -> EngineResult<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColor(hex.to_string()));
    }

    let channel = |i: usize| -> f32 {
        // Validated above, cannot fail
        u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0) as f32 / 255.0
    };
    Ok([channel(0), channel(2), channel(4)])
}

/// One false-color band as configured by the user.
///
/// `value` and `width` share the unit of the active [`BandDomain`]:
/// stops from middle grey, or IRE. `width` is the symmetric half-width of
/// the interval painted in `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    /// Band center.
    pub value: f32,
    /// Color painted over matching samples.
    pub color: ColorSpec,
    /// Symmetric half-width, in the same unit as `value`.
    pub width: f32,
}

/// Complete configuration for one generation run.
///
/// Field names match the JSON config file. Ordering of `bands` is
/// significant: it is the declaration order used to break resolver ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Camera profile identifier (see `stoplight profiles`).
    pub camera: String,
    /// Target profile identifier.
    pub target: String,
    /// Cube resolution.
    pub cube_size: CubeSize,
    /// Banding domain: scene stops or display IRE.
    #[serde(default)]
    pub domain: BandDomain,
    /// Ordered false-color bands.
    #[serde(default)]
    pub bands: Vec<BandSpec>,
    /// Crushed-black indicator color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_clip: Option<ColorSpec>,
    /// Blown-white indicator color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_clip: Option<ColorSpec>,
    /// Desaturate samples no band matched.
    #[serde(default)]
    pub monochrome: bool,
    /// Rescale final output into the broadcast legal range.
    #[serde(default)]
    pub legal_range: bool,
    /// TITLE line for the `.cube` header; defaults to "<camera> to <target>".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RenderConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| EngineError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        // Serializing a validated config cannot fail
        let mut text = serde_json::to_string_pretty(self).unwrap_or_default();
        text.push('\n');
        std::fs::write(path, text).map_err(|source| EngineError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks field-level invariants and that profile identifiers resolve.
    pub fn validate(&self) -> EngineResult<()> {
        profile::camera(&self.camera)?;
        profile::target(&self.target)?;

        for band in &self.bands {
            if !(band.width > 0.0) {
                return Err(EngineError::InvalidConfig {
                    field: "bands",
                    reason: format!(
                        "band at {} has non-positive width {}",
                        band.value, band.width
                    ),
                });
            }
            if !band.value.is_finite() || !band.width.is_finite() {
                return Err(EngineError::InvalidConfig {
                    field: "bands",
                    reason: format!("band at {} has non-finite value or width", band.value),
                });
            }
            band.color.resolve()?;
        }
        if let Some(c) = &self.black_clip {
            c.resolve()?;
        }
        if let Some(c) = &self.white_clip {
            c.resolve()?;
        }
        Ok(())
    }

    /// Default TITLE when the config does not carry one.
    pub fn default_title(&self) -> String {
        format!("{} to {} False Color", self.camera, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r##"{
            "camera": "Sony S-Log3",
            "target": "Rec.709",
            "cube_size": 33,
            "bands": [
                { "value": 0.0, "color": "#22c55e", "width": 0.3 }
            ]
        }"##
    }

    #[test]
    fn parses_minimal_config() {
        let config: RenderConfig = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(config.cube_size.points(), 33);
        assert_eq!(config.domain, BandDomain::Stops);
        assert!(!config.monochrome);
        assert!(config.black_clip.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn rejects_odd_cube_size() {
        let json = minimal_json().replace("33", "32");
        let err = serde_json::from_str::<RenderConfig>(&json);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_zero_width_band() {
        let mut config: RenderConfig = serde_json::from_str(minimal_json()).unwrap();
        config.bands[0].width = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_camera() {
        let mut config: RenderConfig = serde_json::from_str(minimal_json()).unwrap();
        config.camera = "Betamax".into();
        assert!(matches!(
            config.validate(),
            Err(EngineError::UnknownCamera(_))
        ));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#ff0000").unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(parse_hex("00ff00").unwrap(), [0.0, 1.0, 0.0]);

        let mid = parse_hex("#808080").unwrap();
        assert!((mid[0] - 128.0 / 255.0).abs() < 1e-6);

        assert!(parse_hex("#f00").is_err());
        assert!(parse_hex("#gg0000").is_err());
    }

    #[test]
    fn color_spec_accepts_triple() {
        let json = r#"[0.5, 0.25, 1.0]"#;
        let spec: ColorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.resolve().unwrap(), [0.5, 0.25, 1.0]);
    }

    #[test]
    fn config_json_roundtrip() {
        let config: RenderConfig = serde_json::from_str(minimal_json()).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.json");

        let config: RenderConfig = serde_json::from_str(minimal_json()).unwrap();
        config.save(&path).unwrap();
        let loaded = RenderConfig::from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RenderConfig::from_file("/nonexistent/setup.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/setup.json"));
    }
}
