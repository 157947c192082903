//! Adobe/Resolve `.cube` LUT format support.
//!
//! The `.cube` format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and on-set monitors.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data lines enumerate the cube with **red varying fastest**, then green,
//! then blue. That ordering is part of the format contract; players index
//! the table assuming it.
//!
//! # Writing
//!
//! [`write_3d`] renders the whole file into memory first and performs a
//! single write call, so a failed write never leaves a truncated table on
//! disk.

use crate::{Lut3D, LutError, LutResult};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Renders a 3D LUT as `.cube` file text.
///
/// # Example
///
/// ```rust
/// use stoplight_lut::{Lut3D, cube};
///
/// let text = cube::render_3d(&Lut3D::identity(2));
/// assert!(text.starts_with("LUT_3D_SIZE 2"));
/// ```
pub fn render_3d(lut: &Lut3D) -> String {
    // Header lines plus size^3 data lines of ~30 bytes each
    let mut out = String::with_capacity(lut.entry_count() * 30 + 512);

    for comment in &lut.comments {
        if comment.is_empty() {
            out.push_str("#\n");
        } else {
            let _ = writeln!(out, "# {}", comment);
        }
    }
    if let Some(title) = &lut.title {
        let _ = writeln!(out, "TITLE \"{}\"", title);
    }
    let _ = writeln!(out, "LUT_3D_SIZE {}", lut.size);

    let min = lut.domain_min;
    let max = lut.domain_max;
    let _ = writeln!(out, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2]);
    let _ = writeln!(out, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2]);
    out.push('\n');

    // Data - memory order is already red-fastest, the file convention
    for rgb in &lut.data {
        let _ = writeln!(out, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2]);
    }

    out
}

/// Writes a 3D LUT to a `.cube` file.
///
/// The file content is rendered in memory and written with one call;
/// failures carry the attempted path and leave no partial file behind.
///
/// # Example
///
/// ```rust,ignore
/// let lut = Lut3D::identity(33);
/// cube::write_3d("identity.cube", &lut)?;
/// ```
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let text = render_3d(lut);
    std::fs::write(path.as_ref(), text).map_err(|source| LutError::Write {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Reads a 3D LUT from a `.cube` file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut domain_min = [0.0_f32; 3];
    let mut domain_max = [1.0_f32; 3];
    let mut data: Vec<[f32; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            domain_min = parse_domain(line)?;
        } else if line.starts_with("DOMAIN_MAX") {
            domain_max = parse_domain(line)?;
        } else {
            data.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    let expected = size * size * size;
    if data.len() != expected {
        return Err(LutError::ParseError(format!(
            "expected {} values, found {}",
            expected,
            data.len()
        )));
    }

    // File order is red-fastest, which is also our memory order
    let mut lut = Lut3D::from_data(data, size)?;
    lut.domain_min = domain_min;
    lut.domain_max = domain_max;
    lut.title = title;
    Ok(lut)
}

// Helper functions

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError("invalid size line".into()));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::ParseError("invalid size value".into()))
}

fn parse_domain(line: &str) -> LutResult<[f32; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(LutError::ParseError("invalid domain line".into()));
    }
    Ok([
        parts[1]
            .parse()
            .map_err(|_| LutError::ParseError("invalid domain R".into()))?,
        parts[2]
            .parse()
            .map_err(|_| LutError::ParseError("invalid domain G".into()))?,
        parts[3]
            .parse()
            .map_err(|_| LutError::ParseError("invalid domain B".into()))?,
    ])
}

fn parse_rgb(line: &str) -> LutResult<[f32; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(LutError::ParseError(format!("invalid RGB line: {}", line)));
    }
    Ok([
        parts[0]
            .parse()
            .map_err(|_| LutError::ParseError("invalid R value".into()))?,
        parts[1]
            .parse()
            .map_err(|_| LutError::ParseError("invalid G value".into()))?,
        parts[2]
            .parse()
            .map_err(|_| LutError::ParseError("invalid B value".into()))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_3d_cube() {
        let text = r#"
# Test LUT
TITLE "Test Assist"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let lut = parse_3d(Cursor::new(text)).expect("parse failed");

        assert_eq!(lut.size, 2);
        assert_eq!(lut.title.as_deref(), Some("Test Assist"));
        // Red fastest: second data line is the red corner
        assert_eq!(lut.entry(1, 0, 0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn parse_rejects_wrong_count() {
        let text = "LUT_3D_SIZE 2\n0.0 0.0 0.0\n";
        assert!(parse_3d(Cursor::new(text)).is_err());
    }

    #[test]
    fn render_header_shape() {
        let lut = Lut3D::identity(2)
            .with_title("Identity")
            .with_comments(vec!["a comment".into(), String::new()]);
        let text = render_3d(&lut);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("# a comment"));
        assert_eq!(lines.next(), Some("#"));
        assert_eq!(lines.next(), Some("TITLE \"Identity\""));
        assert_eq!(lines.next(), Some("LUT_3D_SIZE 2"));
        assert_eq!(lines.next(), Some("DOMAIN_MIN 0 0 0"));
        assert_eq!(lines.next(), Some("DOMAIN_MAX 1 1 1"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("0.000000 0.000000 0.000000"));
    }

    #[test]
    fn render_is_deterministic() {
        let lut = Lut3D::identity(4).with_title("Same");
        assert_eq!(render_3d(&lut), render_3d(&lut));
    }

    #[test]
    fn roundtrip_3d() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_roundtrip.cube");

        let lut = Lut3D::identity(4).with_title("Roundtrip");
        write_3d(&path, &lut).expect("write failed");
        let loaded = read_3d(&path).expect("read failed");

        assert_eq!(loaded.size, 4);
        assert_eq!(loaded.title.as_deref(), Some("Roundtrip"));
        for (a, b) in lut.data.iter().zip(loaded.data.iter()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn write_missing_dir_reports_path() {
        let lut = Lut3D::identity(2);
        let err = write_3d("/nonexistent-dir/out.cube", &lut).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/out.cube"));
    }
}
