//! Configuration validation

use super::Config;
use crate::transform::DistributionType;
use anyhow::Result;

/// Caller-side cap on the sample count, bounding worst-case latency
pub const MAX_COUNT: usize = 10_000_000;

/// Cap on per-element iteration counts (Binomial trials, NegativeBinomial
/// successes), which multiply the per-sample work
pub const MAX_ITERATIONS: u64 = 1_000_000;

/// Validate a complete generation request
///
/// Algorithm constants and distribution parameters are checked through their
/// own typed validators; the caller-side count cap and output options are
/// checked here.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.count > MAX_COUNT {
        anyhow::bail!(
            "count must be at most {}, got {}",
            MAX_COUNT,
            config.count
        );
    }

    config.generator.validate()?;

    if let Some(distribution) = &config.distribution {
        distribution.validate()?;
        match *distribution {
            DistributionType::Binomial { trials, .. } if trials > MAX_ITERATIONS => {
                anyhow::bail!("trials must be at most {}, got {}", MAX_ITERATIONS, trials);
            }
            DistributionType::NegativeBinomial { successes, .. }
                if successes > MAX_ITERATIONS =>
            {
                anyhow::bail!(
                    "successes must be at most {}, got {}",
                    MAX_ITERATIONS,
                    successes
                );
            }
            _ => {}
        }
    }

    if config.output.bins == 0 {
        anyhow::bail!("bins must be at least 1");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, OutputFormat};
    use crate::generator::GeneratorKind;
    use crate::transform::DistributionType;

    fn base_config() -> Config {
        Config {
            generator: GeneratorKind::default(),
            distribution: None,
            count: 1000,
            seed: 1,
            aux_seed: 2,
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_count_cap_enforced() {
        let mut config = base_config();
        config.count = MAX_COUNT + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_generator_constants_checked() {
        let mut config = base_config();
        config.generator = GeneratorKind::Lcg { a: 1, c: 0, m: 0 };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_distribution_parameters_checked() {
        let mut config = base_config();
        config.distribution = Some(DistributionType::Geometric { p: 0.0 });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_trials_cap_enforced() {
        let mut config = base_config();
        config.distribution = Some(DistributionType::Binomial {
            trials: MAX_ITERATIONS + 1,
            p: 0.5,
        });
        assert!(validate_config(&config).is_err());
        config.distribution = Some(DistributionType::Binomial {
            trials: MAX_ITERATIONS,
            p: 0.5,
        });
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_successes_cap_enforced() {
        let mut config = base_config();
        config.distribution = Some(DistributionType::NegativeBinomial {
            successes: MAX_ITERATIONS + 1,
            p: 0.5,
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_bins_rejected() {
        let mut config = base_config();
        config.output = OutputConfig {
            format: OutputFormat::Text,
            path: None,
            limit: 10,
            bins: 0,
        };
        assert!(validate_config(&config).is_err());
    }
}
