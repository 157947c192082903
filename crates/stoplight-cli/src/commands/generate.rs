//! LUT generation command.

use crate::GenerateArgs;
use anyhow::{Context, Result};
use std::path::PathBuf;
use stoplight_engine::{profile, Pipeline, RenderConfig};
#[allow(unused_imports)]
use tracing::{debug, info};

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    // One-time integrity check; the pipeline trusts the registry after this
    profile::validate_registry().context("profile registry failed integrity check")?;

    let config = RenderConfig::from_file(&args.config)?;
    let output = args.output.unwrap_or_else(|| default_output(&config));

    if verbose {
        println!("Config:   {}", args.config.display());
        println!("Profile:  {}  ->  {}", config.camera, config.target);
        println!("Cube:     {}", config.cube_size.points());
        println!("Bands:    {}", config.bands.len());
        println!("Output:   {}", output.display());
    }

    debug!(config = %args.config.display(), "starting generation");
    let pipeline = Pipeline::new(&config)?;
    let lut = pipeline.generate(&output)?;
    info!(entries = lut.entry_count(), "generation finished");

    println!("Wrote {}", output.display());
    Ok(())
}

// "Sony S-Log3" + "Rec.709" -> SonyS-Log3_Rec709.cube
fn default_output(config: &RenderConfig) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}.cube",
        config.camera.replace(' ', ""),
        config.target.replace(' ', "").replace('.', "")
    ))
}
