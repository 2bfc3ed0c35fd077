// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Summary statistics over a reflection trace.

use reflekt::ReflectionTrace;
use serde::Serialize;
use std::fmt;

/// Whether critique pressure went down over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTrend {
    /// The last refinement had fewer critiques than the first.
    Improved,
    /// Otherwise.
    Maintained,
}

impl fmt::Display for QualityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improved => write!(f, "Yes"),
            Self::Maintained => write!(f, "Maintained"),
        }
    }
}

/// Analysis of one reflection trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceAnalysis {
    /// Number of trace entries, seed included.
    pub total_iterations: usize,
    /// Response length (characters) per entry.
    pub length_progression: Vec<usize>,
    /// `(last - first) / entries`, in characters.
    pub average_improvement: f64,
    /// Critique counts of the refined entries.
    pub critique_counts: Vec<usize>,
    /// Trend of critique counts; `None` when nothing was refined.
    pub quality: Option<QualityTrend>,
}

impl TraceAnalysis {
    /// Analyze a trace. Returns `None` for an empty trace.
    pub fn from_trace(trace: &ReflectionTrace) -> Option<Self> {
        if trace.is_empty() {
            return None;
        }

        let length_progression = trace.response_lengths();
        let first = *length_progression.first()? as f64;
        let last = *length_progression.last()? as f64;
        let average_improvement = (last - first) / length_progression.len() as f64;

        let critique_counts = trace.critique_counts();
        let quality = match (critique_counts.first(), critique_counts.last()) {
            (Some(first), Some(last)) if last < first => Some(QualityTrend::Improved),
            (Some(_), Some(_)) => Some(QualityTrend::Maintained),
            _ => None,
        };

        Some(Self {
            total_iterations: trace.len(),
            length_progression,
            average_improvement,
            critique_counts,
            quality,
        })
    }
}

impl fmt::Display for TraceAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reflection Analysis:")?;
        writeln!(f, "• Total iterations: {}", self.total_iterations)?;
        writeln!(f, "• Response length progression: {:?}", self.length_progression)?;
        write!(
            f,
            "• Average improvement per iteration: {:.1} characters",
            self.average_improvement
        )?;
        if let Some(quality) = self.quality {
            writeln!(f)?;
            writeln!(f, "• Critique counts: {:?}", self.critique_counts)?;
            write!(f, "• Quality improved: {}", quality)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflekt::prelude::*;

    #[test]
    fn test_empty_trace_is_none() {
        assert!(TraceAnalysis::from_trace(&ReflectionTrace::default()).is_none());
    }

    #[test]
    fn test_seed_only() {
        let trace = ReflectionTrace::seeded("seed text");
        let analysis = TraceAnalysis::from_trace(&trace).unwrap();
        assert_eq!(analysis.total_iterations, 1);
        assert_eq!(analysis.length_progression, vec![9]);
        assert_eq!(analysis.average_improvement, 0.0);
        assert!(analysis.critique_counts.is_empty());
        assert_eq!(analysis.quality, None);
        assert!(!analysis.to_string().contains("Quality improved"));
    }

    #[test]
    fn test_refined_run() {
        let opts = GenerationOptions::new().max_iter(2);
        let result = ReflectiveAgent::with_seed(1).run("short", &opts);
        let analysis = TraceAnalysis::from_trace(&result.trace).unwrap();

        assert_eq!(analysis.total_iterations, result.trace.len());
        assert_eq!(analysis.critique_counts.len(), result.refinements());
        let rendered = analysis.to_string();
        assert!(rendered.starts_with("Reflection Analysis:"));
        assert!(rendered.contains("• Total iterations: "));
    }
}
