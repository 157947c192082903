//! Terminal exposure preview.
//!
//! Renders a horizontal bar spanning the camera's exposure range (or
//! 0-100 IRE), painting each position with the band or clip color the
//! resolver would pick. Rendering only; no LUT math runs here.

use crate::commands::swatch;
use crate::PreviewArgs;
use anyhow::Result;
use stoplight_engine::bands::{resolve, Band, ClipColors, ClipState};
use stoplight_engine::{profile, BandDomain, RenderConfig};

const BAR_WIDTH: usize = 64;
// Dark gray for positions no band claims
const UNASSIGNED: [f32; 3] = [0.25, 0.25, 0.27];

pub fn run(args: PreviewArgs) -> Result<()> {
    let config = RenderConfig::from_file(&args.config)?;
    let camera = profile::camera(&config.camera)?;

    let (lo, hi) = match config.domain {
        BandDomain::Stops => (camera.black_clip_stops, camera.white_clip_stops),
        BandDomain::Ire => (0.0, 100.0),
    };

    let bands: Vec<Band> = config
        .bands
        .iter()
        .map(|spec| {
            Ok(Band {
                value: spec.value,
                color: spec.color.resolve()?,
                width: spec.width,
            })
        })
        .collect::<Result<_, stoplight_engine::EngineError>>()?;

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

    println!();
    println!(
        "Exposure preview  {:+.1} {unit} .. {:+.1} {unit}   [{}]",
        lo,
        hi,
        camera.name,
        unit = config.domain.unit()
    );

    // Bar: endpoints show the clip colors, interior positions the resolver's pick
    let mut bar = String::new();
    for pos in 0..BAR_WIDTH {
        let value = lo + (pos as f32 / (BAR_WIDTH - 1) as f32) * (hi - lo);
        let clip_state = if pos == 0 {
            ClipState::Black
        } else if pos == BAR_WIDTH - 1 {
            ClipState::White
        } else {
            ClipState::None
        };
        let color = resolve(value, clip_state, &bands, &clip).unwrap_or(UNASSIGNED);
        let (r, g, b) = crate::commands::to_u8_rgb(color);
        bar.push_str(&format!("\x1b[38;2;{r};{g};{b}m\u{2588}"));
    }
    bar.push_str("\x1b[0m");
    println!("{bar}");
    println!();

    // Legend
    if let Some(color) = clip.black {
        println!("{}  crushed blacks", swatch(color));
    }
    let mut sorted = bands.clone();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
    for band in &sorted {
        println!(
            "{}  {:+.1} {}  +/-{:.2}",
            swatch(band.color),
            band.value,
            config.domain.unit(),
            band.width
        );
    }
    if let Some(color) = clip.white {
        println!("{}  clipped whites", swatch(color));
    }
    println!();

    Ok(())
}
