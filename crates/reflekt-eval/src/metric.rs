// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Surface metrics for a response.

use rayon::prelude::*;
use reflekt::ReflectionTrace;
use serde::Serialize;

/// Words longer than this many characters count as complex.
const COMPLEX_WORD_LEN: usize = 6;

/// Basic text metrics of one response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResponseMetrics {
    /// Length in characters.
    pub length: usize,
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Number of `.`, `!` and `?` characters.
    pub sentence_count: usize,
    /// Share of words longer than six characters, 0 when there are no words.
    pub complexity_score: f64,
}

impl ResponseMetrics {
    /// Compute metrics for a response. Empty input yields all zeros.
    pub fn calculate(response: &str) -> Self {
        if response.is_empty() {
            return Self::default();
        }

        let mut word_count = 0usize;
        let mut complex = 0usize;
        for word in response.split_whitespace() {
            word_count += 1;
            if word.chars().count() > COMPLEX_WORD_LEN {
                complex += 1;
            }
        }

        let complexity_score = if word_count == 0 {
            0.0
        } else {
            complex as f64 / word_count as f64
        };

        Self {
            length: response.chars().count(),
            word_count,
            sentence_count: response.chars().filter(|c| matches!(c, '.' | '!' | '?')).count(),
            complexity_score,
        }
    }
}

/// Compute metrics for a response.
pub fn calculate(response: &str) -> ResponseMetrics {
    ResponseMetrics::calculate(response)
}

/// Compute metrics for many responses in parallel, preserving order.
pub fn calculate_batch<S: AsRef<str> + Sync>(responses: &[S]) -> Vec<ResponseMetrics> {
    responses
        .par_iter()
        .map(|r| ResponseMetrics::calculate(r.as_ref()))
        .collect()
}

/// Metrics for every response in a trace, seed first.
pub fn trace_metrics(trace: &ReflectionTrace) -> Vec<ResponseMetrics> {
    trace
        .entries()
        .par_iter()
        .map(|entry| ResponseMetrics::calculate(&entry.response))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate(""), ResponseMetrics::default());
    }

    #[test]
    fn test_whitespace_only() {
        let m = calculate("   ");
        assert_eq!(m.length, 3);
        assert_eq!(m.word_count, 0);
        assert_eq!(m.complexity_score, 0.0);
    }

    #[test]
    fn test_counts() {
        let m = calculate("Refactor carefully. Why? Because!");
        assert_eq!(m.length, 33);
        assert_eq!(m.word_count, 4);
        assert_eq!(m.sentence_count, 3);
        // Punctuation counts toward word length.
        assert!((m.complexity_score - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = ["a", "bb bb", "", "ccc. ddd."];
        let batch = calculate_batch(&inputs);
        let serial: Vec<_> = inputs.iter().map(|s| calculate(s)).collect();
        assert_eq!(batch, serial);
    }
}
