//! CSV output formatting
//!
//! One `index,value` row per sample. Values are written with Rust's default
//! f64 formatting, which round-trips exactly.

use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write samples as CSV rows to any writer
pub fn write_csv<W: Write>(writer: &mut W, samples: &[f64]) -> Result<()> {
    writeln!(writer, "index,value")?;
    for (index, value) in samples.iter().enumerate() {
        writeln!(writer, "{},{}", index, value)?;
    }
    Ok(())
}

/// Write samples as a CSV file at `path`
pub fn write_csv_file(path: &Path, samples: &[f64]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, samples)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_format() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[0.5, 1.25]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "index,value\n0,0.5\n1,1.25\n");
    }

    #[test]
    fn test_csv_empty_samples() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "index,value\n");
    }

    #[test]
    fn test_csv_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        write_csv_file(&path, &[0.1, 0.2, 0.3]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "index,value");
        assert!(lines[1].starts_with("0,0.1"));
    }
}
