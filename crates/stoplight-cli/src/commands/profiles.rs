//! Profile listing command.

use crate::ProfilesArgs;
use anyhow::Result;
use stoplight_engine::profile::{CAMERA_PROFILES, TARGET_PROFILES};

pub fn run(args: ProfilesArgs) -> Result<()> {
    if args.json {
        let cameras: Vec<_> = CAMERA_PROFILES
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "gamut": p.gamut.name(),
                    "log": p.log.name(),
                    "white_clip_stops": p.white_clip_stops,
                    "black_clip_stops": p.black_clip_stops,
                    "log_floor": p.log_floor,
                    "log_ceiling": p.log_ceiling,
                })
            })
            .collect();
        let targets: Vec<_> = TARGET_PROFILES
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "gamut": t.gamut.name(),
                    "transfer": t.transfer.name(),
                    "kind": t.kind().label(),
                })
            })
            .collect();
        let doc = serde_json::json!({ "cameras": cameras, "targets": targets });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Camera profiles:");
    for p in CAMERA_PROFILES {
        println!(
            "  {:<18} {:<20} {:<12} {:+.1}..{:+.1} stops",
            p.name,
            p.gamut.name(),
            p.log.name(),
            p.black_clip_stops,
            p.white_clip_stops
        );
    }

    println!();
    println!("Target profiles:");
    for t in TARGET_PROFILES {
        println!(
            "  {:<18} {:<20} {} ({})",
            t.name,
            t.gamut.name(),
            t.transfer.name(),
            t.kind().label()
        );
    }

    Ok(())
}
