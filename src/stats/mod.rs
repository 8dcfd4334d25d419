//! Sample statistics
//!
//! Summary statistics and a fixed-bin linear histogram over the sample
//! range, used by the text renderer and the JSON report. Small and
//! allocation-light: one pass for the summary, two passes for the histogram.

use serde::{Deserialize, Serialize};

/// Summary statistics for a sample sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Compute summary statistics; an empty input yields all-zero fields
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self { count: 0, mean: 0.0, std_dev: 0.0, min: 0.0, max: 0.0 };
        }
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / count as f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in samples {
            min = min.min(v);
            max = max.max(v);
        }
        Self { count, mean, std_dev: variance.sqrt(), min, max }
    }
}

/// Linear-bucket histogram over [min, max]
#[derive(Debug, Clone)]
pub struct Histogram {
    buckets: Vec<u64>,
    min: f64,
    bucket_width: f64,
}

impl Histogram {
    /// Build a histogram with `num_buckets` equal-width buckets
    ///
    /// Returns None for an empty sample set or zero buckets. A degenerate
    /// range (all samples equal) collapses into the first bucket.
    pub fn from_samples(samples: &[f64], num_buckets: usize) -> Option<Self> {
        if samples.is_empty() || num_buckets == 0 {
            return None;
        }
        let summary = Summary::from_samples(samples);
        let span = summary.max - summary.min;
        let bucket_width = if span > 0.0 { span / num_buckets as f64 } else { 1.0 };
        let mut buckets = vec![0u64; num_buckets];
        for &v in samples {
            let mut index = ((v - summary.min) / bucket_width) as usize;
            if index >= num_buckets {
                index = num_buckets - 1;
            }
            buckets[index] += 1;
        }
        Some(Self { buckets, min: summary.min, bucket_width })
    }

    /// Bucket counts, lowest range first
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Inclusive lower edge of bucket `index`
    pub fn bucket_low(&self, index: usize) -> f64 {
        self.min + index as f64 * self.bucket_width
    }

    /// Exclusive upper edge of bucket `index`
    pub fn bucket_high(&self, index: usize) -> f64 {
        self.bucket_low(index) + self.bucket_width
    }

    /// Largest bucket count, used to scale rendered bars
    pub fn max_count(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_known_values() {
        let summary = Summary::from_samples(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        // population variance of 1,2,3,4 is 1.25
        assert!((summary.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::from_samples(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, 0.0);
    }

    #[test]
    fn test_histogram_counts() {
        let samples = [0.0, 0.1, 0.2, 0.9, 1.0];
        let hist = Histogram::from_samples(&samples, 2).unwrap();
        assert_eq!(hist.buckets(), &[3, 2]);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bucket() {
        let samples = [0.0, 0.5, 1.0];
        let hist = Histogram::from_samples(&samples, 4).unwrap();
        assert_eq!(hist.buckets().iter().sum::<u64>(), 3);
        assert_eq!(hist.buckets()[3], 1);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let samples = [5.0; 10];
        let hist = Histogram::from_samples(&samples, 8).unwrap();
        assert_eq!(hist.buckets()[0], 10);
    }

    #[test]
    fn test_histogram_empty_or_zero_buckets() {
        assert!(Histogram::from_samples(&[], 10).is_none());
        assert!(Histogram::from_samples(&[1.0], 0).is_none());
    }
}
