//! CLI argument parsing using clap

use crate::config::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generator algorithm choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorChoice {
    /// Reference MT19937
    MersenneTwister,
    /// 32-bit xorshift (13/17/5)
    Xorshift,
    /// PCG-XSH-RR
    Pcg,
    /// Simplified WELL stand-in
    Well,
    /// Mixed linear congruential
    Lcg,
    /// Multiplicative congruential
    Mcg,
    /// 32-bit Tausworthe/LFSR
    Tausworthe,
    /// Von Neumann middle-square
    MiddleSquare,
    /// Middle-square with Weyl sequence
    MiddleSquareWeyl,
}

/// Target distribution choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionChoice {
    Uniform,
    Normal,
    Exponential,
    Poisson,
    Binomial,
    Gamma,
    Beta,
    ChiSquared,
    StudentT,
    FisherF,
    Geometric,
    NegativeBinomial,
}

/// randlab - pseudo-random generation and distribution workbench
#[derive(Parser, Debug)]
#[command(name = "randlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Generator algorithm
    #[arg(short = 'g', long, value_enum, default_value = "pcg")]
    pub generator: GeneratorChoice,

    /// Number of samples to produce
    #[arg(short = 'n', long, default_value = "1000")]
    pub count: usize,

    /// Generator seed
    #[arg(short = 's', long, default_value = "123456789")]
    pub seed: u64,

    /// Seed for the auxiliary entropy source (derived from --seed when omitted)
    #[arg(long)]
    pub aux_seed: Option<u64>,

    /// Target distribution; omit to output raw uniform deviates
    #[arg(short = 'd', long, value_enum)]
    pub distribution: Option<DistributionChoice>,

    // === Generator Constants ===
    /// PCG state multiplier
    #[arg(long)]
    pub mult: Option<u64>,

    /// PCG state increment
    #[arg(long)]
    pub inc: Option<u64>,

    /// LCG multiplier a
    #[arg(long)]
    pub lcg_a: Option<u64>,

    /// LCG increment c
    #[arg(long)]
    pub lcg_c: Option<u64>,

    /// LCG modulus m
    #[arg(long)]
    pub lcg_m: Option<u64>,

    /// MCG multiplier a
    #[arg(long)]
    pub mcg_a: Option<u64>,

    /// MCG modulus m
    #[arg(long)]
    pub mcg_m: Option<u64>,

    /// Weyl sequence increment for middle-square-weyl
    #[arg(long)]
    pub weyl_increment: Option<u64>,

    // === Distribution Parameters ===
    /// Uniform lower bound a
    #[arg(long, default_value = "0.0")]
    pub a: f64,

    /// Uniform upper bound b
    #[arg(long, default_value = "1.0")]
    pub b: f64,

    /// Normal mean
    #[arg(long, default_value = "0.0")]
    pub mean: f64,

    /// Normal standard deviation
    #[arg(long, default_value = "1.0")]
    pub std_dev: f64,

    /// Rate parameter for exponential/poisson
    #[arg(long, default_value = "1.0")]
    pub lambda: f64,

    /// Trial count for binomial (or successes for negative-binomial)
    #[arg(long, default_value = "10")]
    pub trials: u64,

    /// Success probability for binomial/geometric/negative-binomial
    #[arg(long, default_value = "0.5")]
    pub prob: f64,

    /// Gamma shape
    #[arg(long, default_value = "1.0")]
    pub shape: f64,

    /// Gamma scale
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Beta alpha
    #[arg(long, default_value = "2.0")]
    pub alpha: f64,

    /// Beta beta
    #[arg(long, default_value = "2.0")]
    pub beta: f64,

    /// Degrees of freedom for chi-squared/t-student
    #[arg(long, default_value = "1.0")]
    pub df: f64,

    /// Numerator degrees of freedom for F
    #[arg(long, default_value = "1.0")]
    pub dfn: f64,

    /// Denominator degrees of freedom for F
    #[arg(long, default_value = "1.0")]
    pub dfd: f64,

    // === Output Options ===
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (stdout when omitted)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// How many samples the text table previews
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Number of histogram buckets in text output
    #[arg(long, default_value = "20")]
    pub bins: usize,
}

impl Cli {
    /// Parse CLI arguments from the process environment
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
