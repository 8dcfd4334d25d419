//! Configuration module
//!
//! Handles CLI argument parsing, conversion into typed generation requests,
//! and validation.

pub mod cli;
pub mod cli_convert;
pub mod validator;

use crate::generator::GeneratorKind;
use crate::transform::DistributionType;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console table, summary, and histogram
    Text,
    /// index,value rows
    Csv,
    /// Full report with config echo, summary, and samples
    Json,
}

/// Complete generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generator algorithm and its constants
    pub generator: GeneratorKind,
    /// Target distribution; None outputs the raw uniform deviates
    pub distribution: Option<DistributionType>,
    /// Number of samples to produce
    pub count: usize,
    /// Generator seed
    pub seed: u64,
    /// Seed of the auxiliary entropy source used by some transforms
    pub aux_seed: u64,
    /// Output rendering options
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Destination file; None writes to stdout
    pub path: Option<PathBuf>,
    /// How many samples the text table previews
    pub limit: usize,
    /// Number of histogram buckets in text output
    pub bins: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            path: None,
            limit: 20,
            bins: 20,
        }
    }
}
