//! JSON output formatting
//!
//! Serializes a full report: the request that produced the samples, summary
//! statistics, and the sample sequence itself. The config echo makes a
//! report self-describing, so a result file can be reproduced from its own
//! contents.

use crate::config::Config;
use crate::stats::Summary;
use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Self-describing generation report
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// The request that produced these samples
    pub config: &'a Config,
    /// Summary statistics over the samples
    pub summary: Summary,
    /// The sample sequence
    pub samples: &'a [f64],
}

impl<'a> Report<'a> {
    /// Assemble a report for a completed generation request
    pub fn new(config: &'a Config, samples: &'a [f64]) -> Self {
        Self {
            config,
            summary: Summary::from_samples(samples),
            samples,
        }
    }
}

/// Write a pretty-printed JSON report to any writer
pub fn write_json<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a pretty-printed JSON report to a file at `path`
pub fn write_json_file(path: &Path, report: &Report<'_>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputConfig};
    use crate::generator::GeneratorKind;
    use crate::transform::DistributionType;

    fn sample_config() -> Config {
        Config {
            generator: GeneratorKind::XorShift,
            distribution: Some(DistributionType::Exponential { lambda: 2.0 }),
            count: 3,
            seed: 42,
            aux_seed: 7,
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_json_report_contains_sections() {
        let config = sample_config();
        let samples = vec![0.5, 1.5, 2.5];
        let report = Report::new(&config, &samples);

        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"config\""));
        assert!(text.contains("\"summary\""));
        assert!(text.contains("\"samples\""));
        assert!(text.contains("\"seed\": 42"));
        assert!(text.contains("\"Exponential\""));
    }

    #[test]
    fn test_json_summary_values() {
        let config = sample_config();
        let samples = vec![1.0, 3.0];
        let report = Report::new(&config, &samples);
        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.mean, 2.0);
    }

    #[test]
    fn test_json_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = sample_config();
        let samples = vec![0.25];
        write_json_file(&path, &Report::new(&config, &samples)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["samples"][0], 0.25);
        assert_eq!(parsed["config"]["count"], 3);
    }
}
