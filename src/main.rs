//! randlab CLI entry point

use anyhow::{Context, Result};
use randlab::config::{cli::Cli, cli_convert, validator, Config, OutputFormat};
use randlab::output::{csv, json, text};
use randlab::transform::AuxEntropy;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli_convert::build_config(&cli);
    validator::validate_config(&config).context("Configuration validation failed")?;

    let samples = run(&config)?;
    render(&config, &samples)
}

/// Execute a generation request: uniforms first, then the optional transform
fn run(config: &Config) -> Result<Vec<f64>> {
    let uniforms = randlab::generate_uniform(&config.generator, config.count, config.seed)
        .context("Uniform generation failed")?;

    match &config.distribution {
        Some(distribution) => {
            let mut aux = AuxEntropy::with_seed(config.aux_seed);
            let samples = distribution
                .transform(&uniforms, &mut aux)
                .context("Distribution transform failed")?;
            Ok(samples)
        }
        None => Ok(uniforms),
    }
}

/// Render samples in the requested format, to a file or stdout
fn render(config: &Config, samples: &[f64]) -> Result<()> {
    match config.output.format {
        OutputFormat::Text => {
            println!("randlab v{}", env!("CARGO_PKG_VERSION"));
            println!();
            text::print_results(config, samples);
        }
        OutputFormat::Csv => match &config.output.path {
            Some(path) => {
                csv::write_csv_file(path, samples)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Wrote {} samples to {}", samples.len(), path.display());
            }
            None => csv::write_csv(&mut std::io::stdout().lock(), samples)?,
        },
        OutputFormat::Json => {
            let report = json::Report::new(config, samples);
            match &config.output.path {
                Some(path) => {
                    json::write_json_file(path, &report)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Wrote report to {}", path.display());
                }
                None => json::write_json(&mut std::io::stdout().lock(), &report)?,
            }
        }
    }
    Ok(())
}
