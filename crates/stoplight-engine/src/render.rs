//! The generation pipeline: grid sampling and cube assembly.
//!
//! [`Pipeline::new`] resolves a validated [`RenderConfig`] into a fixed,
//! immutable plan: profile references, the precomputed gamut matrix, the
//! luminance row, resolved band colors. From then on every lattice sample
//! is a pure function of its input code, so the grid loop parallelizes
//! freely and two runs from the same config produce identical bytes.
//!
//! Per-sample stage order:
//!
//! 1. raw log code -> linear camera RGB (log decode)
//! 2. linear RGB -> scene luminance (gamut luminance row)
//! 3. luminance -> stops or IRE (banding domain)
//! 4. clip state + band resolution -> color decision
//! 5. unmatched samples -> gamut/transfer conversion (or monochrome gray)
//! 6. clamp, then optional legal-range rescale

use crate::bands::{self, Band, ClipColors, ClipState};
use crate::config::RenderConfig;
use crate::display::{scale_to_legal, DisplayTransform};
use crate::error::EngineResult;
use crate::exposure::{ire_from_luminance, stops_from_luminance, BandDomain};
use crate::profile::{self, CameraProfile, TargetProfile};
use rayon::prelude::*;
use std::path::Path;
use stoplight_lut::{cube, Lut3D};
use stoplight_math::Vec3;
use stoplight_primaries::luminance_row;

/// A fully resolved generation plan.
///
/// Built once per run; read-only afterwards. Owns the resolved bands and
/// clip colors, borrows the static profiles.
#[derive(Debug, Clone)]
pub struct Pipeline {
    camera: &'static CameraProfile,
    target: &'static TargetProfile,
    luma_row: Vec3,
    display: DisplayTransform,
    domain: BandDomain,
    bands: Vec<Band>,
    clip: ClipColors,
    monochrome: bool,
    legal_range: bool,
    size: usize,
    title: String,
    comments: Vec<String>,
}

impl Pipeline {
    /// Resolves a configuration into a pipeline.
    ///
    /// Validates the config, looks up profiles, resolves colors, and
    /// precomputes the camera-to-target matrix.
    pub fn new(config: &RenderConfig) -> EngineResult<Self> {
        config.validate()?;

        let camera = profile::camera(&config.camera)?;
        let target = profile::target(&config.target)?;

        let bands = config
            .bands
            .iter()
            .map(|spec| {
                Ok(Band {
                    value: spec.value,
                    color: spec.color.resolve()?,
                    width: spec.width,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let clip = ClipColors {
            black: config
                .black_clip
                .as_ref()
                .map(|c| c.resolve())
                .transpose()?,
            white: config
                .white_clip
                .as_ref()
                .map(|c| c.resolve())
                .transpose()?,
        };

        Ok(Self {
            camera,
            target,
            luma_row: luminance_row(camera.gamut),
            display: DisplayTransform::new(camera.gamut, target.gamut, target.transfer),
            domain: config.domain,
            bands,
            clip,
            monochrome: config.monochrome,
            legal_range: config.legal_range,
            size: config.cube_size.points(),
            title: config
                .title
                .clone()
                .unwrap_or_else(|| config.default_title()),
            comments: build_comments(config, camera, target),
        })
    }

    /// Cube resolution for this run.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Classifies a raw log code triple against the sensor's usable range.
    ///
    /// Black when every channel sits at or below the log floor; white when
    /// any channel reaches the ceiling. This is a property of the input
    /// sample, independent of the banding domain.
    fn clip_state(&self, code: Vec3) -> ClipState {
        if code.max_component() <= self.camera.log_floor {
            ClipState::Black
        } else if code.max_component() >= self.camera.log_ceiling {
            ClipState::White
        } else {
            ClipState::None
        }
    }

    /// Runs one lattice point through the full pipeline.
    pub fn sample(&self, code: Vec3) -> [f32; 3] {
        let linear = Vec3::from_array(self.camera.log.decode_rgb(code.to_array()));
        let y = self.luma_row.dot(linear);

        let value = match self.domain {
            BandDomain::Stops => stops_from_luminance(y),
            BandDomain::Ire => ire_from_luminance(y, self.display.curve),
        };

        let mut clip = self.clip_state(code);
        // Non-positive luminance decodes to -inf stops: below every band,
        // at or under the black clip by definition.
        if clip == ClipState::None && value == f32::NEG_INFINITY {
            clip = ClipState::Black;
        }

        let out = match bands::resolve(value, clip, &self.bands, &self.clip) {
            Some(color) => color,
            None if self.monochrome => self.display.neutral(y),
            None => self.display.convert(linear),
        };

        let out = Vec3::from_array(out).clamp01();
        let out = if self.legal_range {
            out.map(scale_to_legal)
        } else {
            out
        };
        out.to_array()
    }

    /// Samples the full lattice and assembles the LUT.
    ///
    /// Enumeration follows the `.cube` convention: red fastest, then
    /// green, then blue. Samples are independent, so the loop fans out
    /// across the rayon pool; ordered collection restores file order.
    pub fn render(&self) -> EngineResult<Lut3D> {
        let n = self.size;
        let step = 1.0 / (n - 1) as f32;

        let data: Vec<[f32; 3]> = (0..n * n * n)
            .into_par_iter()
            .map(|i| {
                let r = i % n;
                let g = (i / n) % n;
                let b = i / (n * n);
                self.sample(Vec3::new(
                    r as f32 * step,
                    g as f32 * step,
                    b as f32 * step,
                ))
            })
            .collect();

        Ok(Lut3D::from_data(data, n)?
            .with_title(self.title.clone())
            .with_comments(self.comments.clone()))
    }

    /// Renders and writes the `.cube` file in one step.
    ///
    /// The write happens once, from a complete in-memory buffer; a failed
    /// run leaves nothing partial behind.
    pub fn generate<P: AsRef<Path>>(&self, path: P) -> EngineResult<Lut3D> {
        let lut = self.render()?;
        cube::write_3d(path, &lut)?;
        Ok(lut)
    }
}

// Deterministic comment header: a pure function of the configuration, so
// regenerating from a saved config reproduces the file byte for byte.
fn build_comments(
    config: &RenderConfig,
    camera: &CameraProfile,
    target: &TargetProfile,
) -> Vec<String> {
    let unit = config.domain.unit();
    let mut comments = vec![
        "Generated by stoplight".to_string(),
        format!("Cube size   : {}", config.cube_size.points()),
        String::new(),
        format!("Source      : {}", camera.name),
        format!("  Gamut     : {}", camera.gamut.name()),
        format!("  Log       : {}", camera.log.name()),
        format!(
            "  Black clip: {:+.1} stops from middle grey",
            camera.black_clip_stops
        ),
        format!(
            "  White clip: {:+.1} stops from middle grey",
            camera.white_clip_stops
        ),
        String::new(),
        format!("Target      : {}", target.name),
        format!("  Gamut     : {}", target.gamut.name()),
        format!(
            "  Transfer  : {} ({})",
            target.transfer.name(),
            target.kind().label()
        ),
        String::new(),
    ];

    if config.bands.is_empty() {
        comments.push("False Color Bands: none".to_string());
    } else {
        comments.push("False Color Bands:".to_string());
        let mut sorted = config.bands.clone();
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
        for band in &sorted {
            comments.push(format!(
                "  {:+.1} {}  +/-{:.2}  {}",
                band.value,
                unit,
                band.width,
                band.color.label()
            ));
        }
    }
    comments.push(String::new());

    let mut clip_lines = Vec::new();
    if let Some(c) = &config.black_clip {
        clip_lines.push(format!("  Crushed blacks  {}", c.label()));
    }
    if let Some(c) = &config.white_clip {
        clip_lines.push(format!("  Clipped whites  {}", c.label()));
    }
    if clip_lines.is_empty() {
        comments.push("Clipping Indicators: none".to_string());
    } else {
        comments.push("Clipping Indicators:".to_string());
        comments.extend(clip_lines);
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BandSpec, ColorSpec, CubeSize};
    use crate::exposure::MIDDLE_GREY;
    use stoplight_transfer::LogCurve;

    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    fn base_config() -> RenderConfig {
        RenderConfig {
            camera: "Sony S-Log3".into(),
            target: "Rec.709".into(),
            cube_size: CubeSize::Size17,
            domain: BandDomain::Stops,
            bands: Vec::new(),
            black_clip: None,
            white_clip: None,
            monochrome: false,
            legal_range: false,
            title: None,
        }
    }

    // Stops of the neutral code (c, c, c) under S-Log3
    fn stops_of_code(code: f32) -> f32 {
        let y = LogCurve::SLog3.decode(code);
        stops_from_luminance(y)
    }

    #[test]
    fn center_sample_hits_band_centered_on_it() {
        let mut config = base_config();
        config.bands.push(BandSpec {
            value: stops_of_code(0.5),
            color: ColorSpec::Rgb(GREEN),
            width: 0.3,
        });

        let pipeline = Pipeline::new(&config).unwrap();
        assert_eq!(pipeline.sample(Vec3::splat(0.5)), GREEN);
    }

    #[test]
    fn unmatched_sample_converts_to_display() {
        let config = base_config();
        let pipeline = Pipeline::new(&config).unwrap();

        let out = pipeline.sample(Vec3::splat(0.5));
        // Neutral input stays neutral through gamut conversion + OETF
        assert!((out[0] - out[1]).abs() < 1e-3);
        assert!((out[1] - out[2]).abs() < 1e-3);
        assert!(out[0] > 0.0 && out[0] < 1.0);
    }

    #[test]
    fn ceiling_code_takes_white_clip_over_bands() {
        let mut config = base_config();
        // Band wide enough to cover the top of the range
        config.bands.push(BandSpec {
            value: stops_of_code(0.95),
            color: ColorSpec::Rgb(GREEN),
            width: 5.0,
        });
        config.white_clip = Some(ColorSpec::Hex("#ff0000".into()));

        let pipeline = Pipeline::new(&config).unwrap();
        // S-Log3 ceiling is 0.94; a code at the ceiling must clip
        let out = pipeline.sample(Vec3::splat(0.94));
        assert_eq!(out, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn floor_code_takes_black_clip() {
        let mut config = base_config();
        config.black_clip = Some(ColorSpec::Hex("#ff00ff".into()));

        let pipeline = Pipeline::new(&config).unwrap();
        let out = pipeline.sample(Vec3::splat(0.0));
        assert_eq!(out, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn mixed_code_clips_white_when_any_channel_at_ceiling() {
        let mut config = base_config();
        config.white_clip = Some(ColorSpec::Rgb([1.0, 0.0, 0.0]));

        let pipeline = Pipeline::new(&config).unwrap();
        let out = pipeline.sample(Vec3::new(0.95, 0.5, 0.5));
        assert_eq!(out, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn monochrome_desaturates_unmatched() {
        let mut config = base_config();
        config.monochrome = true;

        let pipeline = Pipeline::new(&config).unwrap();
        // A colorful mid-range code, no bands configured
        let out = pipeline.sample(Vec3::new(0.55, 0.45, 0.4));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn legal_range_bounds_every_cell() {
        let mut config = base_config();
        config.legal_range = true;
        config.bands.push(BandSpec {
            value: 0.0,
            color: ColorSpec::Rgb([0.0, 1.0, 0.0]),
            width: 0.3,
        });

        let pipeline = Pipeline::new(&config).unwrap();
        let lut = pipeline.render().unwrap();
        for cell in &lut.data {
            for &c in cell {
                assert!(c >= crate::display::LEGAL_MIN - 1e-6);
                assert!(c <= crate::display::LEGAL_MAX + 1e-6);
            }
        }
    }

    #[test]
    fn ire_domain_bands_display_level() {
        let mut config = base_config();
        config.domain = BandDomain::Ire;
        // Middle grey sits near 42 IRE on Rec.709
        config.bands.push(BandSpec {
            value: 42.0,
            color: ColorSpec::Rgb(GREEN),
            width: 5.0,
        });

        let pipeline = Pipeline::new(&config).unwrap();
        let grey_code = LogCurve::SLog3.encode(MIDDLE_GREY);
        assert_eq!(pipeline.sample(Vec3::splat(grey_code)), GREEN);
    }

    #[test]
    fn render_matches_cube_layout() {
        let config = base_config();
        let pipeline = Pipeline::new(&config).unwrap();
        let lut = pipeline.render().unwrap();

        assert_eq!(lut.size, 17);
        assert_eq!(lut.entry_count(), 17 * 17 * 17);
        // Spot-check red-fastest ordering against a direct sample
        let direct = pipeline.sample(Vec3::new(1.0 / 16.0, 0.0, 0.0));
        assert_eq!(lut.data[1], direct);
    }

    #[test]
    fn render_is_deterministic() {
        let mut config = base_config();
        config.bands.push(BandSpec {
            value: 0.0,
            color: ColorSpec::Hex("#22c55e".into()),
            width: 0.3,
        });
        let pipeline = Pipeline::new(&config).unwrap();

        let a = pipeline.render().unwrap();
        let b = pipeline.render().unwrap();
        assert_eq!(a.data, b.data);
        assert_eq!(a.comments, b.comments);
    }

    #[test]
    fn comment_header_lists_bands_sorted() {
        let mut config = base_config();
        for value in [2.0, -1.0, 0.0] {
            config.bands.push(BandSpec {
                value,
                color: ColorSpec::Hex("#ffffff".into()),
                width: 0.3,
            });
        }
        let pipeline = Pipeline::new(&config).unwrap();

        let band_lines: Vec<&String> = pipeline
            .comments
            .iter()
            .filter(|l| l.contains("stops  +/-"))
            .collect();
        assert_eq!(band_lines.len(), 3);
        assert!(band_lines[0].contains("-1.0"));
        assert!(band_lines[2].contains("+2.0"));
    }
}
