//! Human-readable text output

use crate::config::Config;
use crate::stats::{Histogram, Summary};

/// Width of the longest histogram bar in characters
const BAR_WIDTH: usize = 40;

/// Print generation results to the console
///
/// Displays the request parameters, a preview of the first samples, summary
/// statistics, and an ASCII histogram.
pub fn print_results(config: &Config, samples: &[f64]) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                 GENERATION RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Generator:    {}", config.generator);
    match &config.distribution {
        Some(distribution) => println!("Distribution: {}", distribution),
        None => println!("Distribution: none (raw uniform deviates)"),
    }
    println!("Seed:         {}", config.seed);
    println!("Aux seed:     {}", config.aux_seed);
    println!("Requested:    {}", config.count);
    println!("Produced:     {}", samples.len());
    println!();

    if samples.is_empty() {
        println!("(no samples)");
        return;
    }

    print_preview(samples, config.output.limit);
    print_summary(&Summary::from_samples(samples));
    print_histogram(samples, config.output.bins);
}

fn print_preview(samples: &[f64], limit: usize) {
    let shown = limit.min(samples.len());
    if shown == 0 {
        return;
    }
    println!("First {} samples:", shown);
    for (i, value) in samples.iter().take(shown).enumerate() {
        print!("  [{:>5}] {:>14.8}", i, value);
        if (i + 1) % 4 == 0 {
            println!();
        }
    }
    if shown % 4 != 0 {
        println!();
    }
    println!();
}

fn print_summary(summary: &Summary) {
    println!("Summary:");
    println!("  Count:   {}", summary.count);
    println!("  Mean:    {:.6}", summary.mean);
    println!("  Std dev: {:.6}", summary.std_dev);
    println!("  Min:     {:.6}", summary.min);
    println!("  Max:     {:.6}", summary.max);
    println!();
}

fn print_histogram(samples: &[f64], bins: usize) {
    let histogram = match Histogram::from_samples(samples, bins) {
        Some(h) => h,
        None => return,
    };
    let max_count = histogram.max_count().max(1);

    println!("Histogram:");
    for (i, &count) in histogram.buckets().iter().enumerate() {
        let bar_len = (count as usize * BAR_WIDTH) / max_count as usize;
        println!(
            "  [{:>12.4}, {:>12.4})  {:>7}  {}",
            histogram.bucket_low(i),
            histogram.bucket_high(i),
            count,
            "#".repeat(bar_len)
        );
    }
}
