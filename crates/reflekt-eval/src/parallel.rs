// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Parallel batch evaluation using Rayon

use crate::metric::ResponseMetrics;
use rayon::prelude::*;
use serde::Serialize;

/// Metrics for a batch of responses plus their averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Per-response metrics, in input order.
    pub metrics: Vec<ResponseMetrics>,
    /// Mean length in characters.
    pub mean_length: f64,
    /// Mean complexity score.
    pub mean_complexity: f64,
}

/// Batch evaluator running on a dedicated Rayon pool
#[derive(Debug, Clone, Default)]
pub struct ParallelEvaluator {
    num_threads: Option<usize>,
}

impl ParallelEvaluator {
    /// Create an evaluator using Rayon's default thread count
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Evaluate a batch of responses
    pub fn evaluate<S: AsRef<str> + Sync>(&self, responses: &[S]) -> anyhow::Result<BatchReport> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.num_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        let (metrics, length_sum, complexity_sum) = pool.install(|| {
            let metrics: Vec<ResponseMetrics> = responses
                .par_iter()
                .map(|r| ResponseMetrics::calculate(r.as_ref()))
                .collect();
            let (length_sum, complexity_sum) = metrics
                .par_iter()
                .map(|m| (m.length as f64, m.complexity_score))
                .reduce(|| (0.0, 0.0), |(l1, c1), (l2, c2)| (l1 + l2, c1 + c2));
            (metrics, length_sum, complexity_sum)
        });

        let n = metrics.len();
        let (mean_length, mean_complexity) = if n == 0 {
            (0.0, 0.0)
        } else {
            (length_sum / n as f64, complexity_sum / n as f64)
        };

        Ok(BatchReport {
            metrics,
            mean_length,
            mean_complexity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let report = ParallelEvaluator::new().evaluate::<&str>(&[]).unwrap();
        assert!(report.metrics.is_empty());
        assert_eq!(report.mean_length, 0.0);
    }

    #[test]
    fn test_means() {
        let report = ParallelEvaluator::new()
            .with_threads(2)
            .evaluate(&["abcd", "ab"])
            .unwrap();
        assert_eq!(report.metrics.len(), 2);
        assert!((report.mean_length - 3.0).abs() < f64::EPSILON);
        assert_eq!(report.mean_complexity, 0.0);
    }
}
