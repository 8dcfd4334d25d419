//! CLI to Config conversion

use crate::config::cli::{Cli, DistributionChoice, GeneratorChoice};
use crate::config::{Config, OutputConfig};
use crate::generator::{congruential, middle_square, pcg, GeneratorKind};
use crate::transform::DistributionType;

/// Gamma constant from splitmix64, used to decorrelate the derived aux seed
/// from the primary seed while keeping runs reproducible
const AUX_SEED_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derive the auxiliary entropy seed when the caller does not supply one
pub fn derive_aux_seed(seed: u64) -> u64 {
    seed ^ AUX_SEED_GAMMA
}

/// Build a typed configuration from parsed CLI arguments
///
/// Attaches algorithm constants and distribution parameters to the matching
/// enum variants, falling back to each algorithm's documented defaults.
pub fn build_config(cli: &Cli) -> Config {
    let generator = match cli.generator {
        GeneratorChoice::MersenneTwister => GeneratorKind::MersenneTwister,
        GeneratorChoice::Xorshift => GeneratorKind::XorShift,
        GeneratorChoice::Pcg => GeneratorKind::Pcg {
            mult: cli.mult.unwrap_or(pcg::DEFAULT_MULTIPLIER),
            inc: cli.inc.unwrap_or(pcg::DEFAULT_INCREMENT),
        },
        GeneratorChoice::Well => GeneratorKind::Well,
        GeneratorChoice::Lcg => GeneratorKind::Lcg {
            a: cli.lcg_a.unwrap_or(congruential::LCG_MULTIPLIER),
            c: cli.lcg_c.unwrap_or(congruential::LCG_INCREMENT),
            m: cli.lcg_m.unwrap_or(congruential::LCG_MODULUS),
        },
        GeneratorChoice::Mcg => GeneratorKind::Mcg {
            a: cli.mcg_a.unwrap_or(congruential::MCG_MULTIPLIER),
            m: cli.mcg_m.unwrap_or(congruential::MCG_MODULUS),
        },
        GeneratorChoice::Tausworthe => GeneratorKind::Tausworthe,
        GeneratorChoice::MiddleSquare => GeneratorKind::MiddleSquare,
        GeneratorChoice::MiddleSquareWeyl => GeneratorKind::MiddleSquareWeyl {
            increment: cli.weyl_increment.unwrap_or(middle_square::DEFAULT_INCREMENT),
        },
    };

    let distribution = cli.distribution.map(|choice| match choice {
        DistributionChoice::Uniform => DistributionType::Uniform { a: cli.a, b: cli.b },
        DistributionChoice::Normal => DistributionType::Normal {
            mean: cli.mean,
            std_dev: cli.std_dev,
        },
        DistributionChoice::Exponential => DistributionType::Exponential { lambda: cli.lambda },
        DistributionChoice::Poisson => DistributionType::Poisson { lambda: cli.lambda },
        DistributionChoice::Binomial => DistributionType::Binomial {
            trials: cli.trials,
            p: cli.prob,
        },
        DistributionChoice::Gamma => DistributionType::Gamma {
            shape: cli.shape,
            scale: cli.scale,
        },
        DistributionChoice::Beta => DistributionType::Beta {
            alpha: cli.alpha,
            beta: cli.beta,
        },
        DistributionChoice::ChiSquared => DistributionType::ChiSquared { df: cli.df },
        DistributionChoice::StudentT => DistributionType::StudentT { df: cli.df },
        DistributionChoice::FisherF => DistributionType::FisherF {
            dfn: cli.dfn,
            dfd: cli.dfd,
        },
        DistributionChoice::Geometric => DistributionType::Geometric { p: cli.prob },
        DistributionChoice::NegativeBinomial => DistributionType::NegativeBinomial {
            successes: cli.trials,
            p: cli.prob,
        },
    });

    Config {
        generator,
        distribution,
        count: cli.count,
        seed: cli.seed,
        aux_seed: cli.aux_seed.unwrap_or_else(|| derive_aux_seed(cli.seed)),
        output: OutputConfig {
            format: cli.format,
            path: cli.output.clone(),
            limit: cli.limit,
            bins: cli.bins,
        },
    }
}
