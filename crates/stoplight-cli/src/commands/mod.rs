//! Subcommand implementations.

pub mod generate;
pub mod preview;
pub mod profiles;

/// Converts a resolved 0-1 RGB triple to 8-bit for ANSI output.
pub fn to_u8_rgb(rgb: [f32; 3]) -> (u8, u8, u8) {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    (q(rgb[0]), q(rgb[1]), q(rgb[2]))
}

/// Two-cell true-color swatch for terminal legends.
pub fn swatch(rgb: [f32; 3]) -> String {
    let (r, g, b) = to_u8_rgb(rgb);
    format!("\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}\x1b[0m")
}
