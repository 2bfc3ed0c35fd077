// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Integration tests for metrics and trace analysis

use proptest::prelude::*;
use reflekt::prelude::*;
use reflekt_eval::*;

#[test]
fn test_trace_metrics_follow_trace() {
    let opts = GenerationOptions::new()
        .style(Style::Technical)
        .mode(CritiqueMode::Critical)
        .max_iter(3);
    let result = ReflectiveAgent::with_seed(12).run("How do I optimize a recursive algorithm?", &opts);

    let metrics = trace_metrics(&result.trace);
    assert_eq!(metrics.len(), result.trace.len());
    for (m, entry) in metrics.iter().zip(result.trace.iter()) {
        assert_eq!(m.length, entry.response.chars().count());
        assert!(m.complexity_score >= 0.0 && m.complexity_score <= 1.0);
    }

    let analysis = TraceAnalysis::from_trace(&result.trace).unwrap();
    let lengths: Vec<usize> = metrics.iter().map(|m| m.length).collect();
    assert_eq!(analysis.length_progression, lengths);
}

#[test]
fn test_quality_trend_matches_counts() {
    let opts = GenerationOptions::new().mode(CritiqueMode::Critical).max_iter(3);
    let result = ReflectiveAgent::with_seed(2).run("", &opts);
    let analysis = TraceAnalysis::from_trace(&result.trace).unwrap();

    if let (Some(first), Some(last)) = (
        analysis.critique_counts.first(),
        analysis.critique_counts.last(),
    ) {
        let expected = if last < first {
            QualityTrend::Improved
        } else {
            QualityTrend::Maintained
        };
        assert_eq!(analysis.quality, Some(expected));
    }
}

#[test]
fn test_metrics_serialize() {
    let json = serde_json::to_value(calculate("One two three.")).unwrap();
    assert_eq!(json["length"], 14);
    assert_eq!(json["word_count"], 3);
    assert_eq!(json["sentence_count"], 1);
}

#[test]
fn test_parallel_evaluator_matches_batch() {
    let responses = vec![
        "Consider caching. It helps.".to_string(),
        String::new(),
        "Profile first, then optimize the hot path.".to_string(),
    ];
    let report = ParallelEvaluator::new().evaluate(&responses).unwrap();
    assert_eq!(report.metrics, calculate_batch(&responses));
}

proptest! {
    /// Metrics never panic and stay in range.
    #[test]
    fn metrics_bounded(text in "\\PC{0,500}") {
        let m = calculate(&text);
        prop_assert!(m.complexity_score >= 0.0 && m.complexity_score <= 1.0);
        prop_assert!(m.word_count <= m.length);
        prop_assert_eq!(m.length, text.chars().count());
    }
}
