// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Reflection with pluggable generation strategies and evaluators.
//!
//! [`AdvancedAgent`] keeps the loop of [`crate::reflect`] but swaps the two
//! ends: the seed comes from a strategy function selected by [`Style`] and
//! every round is judged by an evaluator selected by [`CritiqueMode`]. Both
//! are plain function tables.
//!
//! | Style        | Strategy                                         |
//! |--------------|--------------------------------------------------|
//! | `Technical`  | technical response + problem-specific detail     |
//! | `Creative`   | creative response + problem-specific insight     |
//! | `Systematic` | systematic response + five-phase framework       |
//! | `Balanced`   | plain balanced response                          |
//!
//! The run stops when the evaluator returns nothing or when the sentinel
//! appears anywhere in its output.

use crate::critique::{critique, CritiqueKind, CritiqueMode, Critiques, MIN_LENGTH};
use crate::options::GenerationOptions;
use crate::reflect::{run_loop, Reflect};
use crate::synthesize::{ResponseSynthesizer, Style};
use crate::trace::{Reflection, ReflectionEvent, ReflectionTrace};
use std::collections::HashSet;

/// Seed generator for one strategy.
pub type StrategyFn = fn(&mut ResponseSynthesizer, &str) -> String;

/// Critique function for one evaluation mode.
pub type EvaluatorFn = fn(&str) -> Critiques;

const SYSTEMATIC_FRAMEWORK: &str = "
        **Phase 1: Analysis** - Requirements gathering, constraint identification, stakeholder needs
        **Phase 2: Design** - Architecture planning, component specification, interface definition
        **Phase 3: Implementation** - Incremental development, continuous testing, code review
        **Phase 4: Validation** - Performance testing, user acceptance, deployment verification
        **Phase 5: Maintenance** - Monitoring, optimization, iterative improvement";

/// Options used by [`AdvancedAgent::solve`].
pub const ADVANCED_DEFAULTS: GenerationOptions = GenerationOptions {
    style: Style::Technical,
    max_iterations: 3,
    critique_mode: CritiqueMode::Critical,
};

/// Strategy for a style.
pub fn strategy(style: Style) -> StrategyFn {
    match style {
        Style::Technical => technical_generate,
        Style::Creative => creative_generate,
        Style::Systematic => systematic_generate,
        Style::Balanced => balanced_generate,
    }
}

/// Evaluator for a mode.
pub fn evaluator(mode: CritiqueMode) -> EvaluatorFn {
    match mode {
        CritiqueMode::Critical => critical_evaluate,
        CritiqueMode::Constructive => constructive_evaluate,
        CritiqueMode::Comprehensive => comprehensive_evaluate,
    }
}

fn mentions_any(problem_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|w| problem_lower.contains(w))
}

fn technical_generate(synth: &mut ResponseSynthesizer, problem: &str) -> String {
    let base = synth.generate(problem, Style::Technical);
    let lower = problem.to_lowercase();

    let detail = if mentions_any(&lower, &["recursive", "algorithm", "complexity"]) {
        " Implementation Details: Consider stack overflow protection, tail recursion optimization, and iterative alternatives. Profile memory usage and CPU cycles."
    } else if mentions_any(&lower, &["machine learning", "model", "neural"]) {
        " Technical Specifics: Analyze gradient flow, implement proper weight initialization, consider batch normalization, and optimize computational graphs."
    } else if mentions_any(&lower, &["system", "database", "distributed"]) {
        " System Architecture: Design for ACID properties, implement connection pooling, consider sharding strategies, and plan for eventual consistency."
    } else {
        " Technical Implementation: Focus on code efficiency, memory management, error handling, and performance profiling."
    };

    base + detail
}

fn creative_generate(synth: &mut ResponseSynthesizer, problem: &str) -> String {
    let base = synth.generate(problem, Style::Creative);
    let lower = problem.to_lowercase();

    let insight = if mentions_any(&lower, &["algorithm", "optimization"]) {
        " Innovation Opportunity: Consider bio-inspired algorithms, quantum computing approaches, or machine learning-assisted optimization."
    } else if mentions_any(&lower, &["machine learning", "ai"]) {
        " Creative ML: Explore meta-learning, few-shot learning, or novel attention mechanisms from different domains."
    } else if mentions_any(&lower, &["system", "architecture"]) {
        " Architectural Innovation: Consider event sourcing, CQRS patterns, or blockchain-inspired distributed consensus mechanisms."
    } else {
        " Creative Thinking: Draw inspiration from nature, other industries, or emerging technologies."
    };

    base + insight
}

fn systematic_generate(synth: &mut ResponseSynthesizer, problem: &str) -> String {
    synth.generate(problem, Style::Systematic) + SYSTEMATIC_FRAMEWORK
}

fn balanced_generate(synth: &mut ResponseSynthesizer, problem: &str) -> String {
    synth.generate(problem, Style::Balanced)
}

fn critical_evaluate(response: &str) -> Critiques {
    let mut critiques = critique(response, CritiqueMode::Critical);
    if response.chars().count() < MIN_LENGTH {
        critiques.push(CritiqueKind::LacksComprehensiveAnalysis);
    }
    if response.contains('?') {
        critiques.push(CritiqueKind::QuestionsInsteadOfGuidance);
    }
    critiques
}

fn constructive_evaluate(response: &str) -> Critiques {
    critique(response, CritiqueMode::Constructive)
}

/// Union of critical and constructive critiques.
///
/// Deduplicated through a hash set, so the order is unspecified.
fn comprehensive_evaluate(response: &str) -> Critiques {
    let unique: HashSet<CritiqueKind> = critical_evaluate(response)
        .into_iter()
        .chain(constructive_evaluate(response))
        .collect();
    unique.into_iter().collect()
}

fn is_finished(critiques: &Critiques) -> bool {
    critiques.is_empty() || critiques.contains(CritiqueKind::MeetsStandards)
}

/// Reflective agent with strategy and evaluator tables.
///
/// Through [`Reflect`], `options.style` picks the strategy and
/// `options.critique_mode` picks the evaluator.
#[derive(Debug, Clone, Default)]
pub struct AdvancedAgent {
    synthesizer: ResponseSynthesizer,
    trace: ReflectionTrace,
}

impl AdvancedAgent {
    /// Create an agent seeded from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an agent with a deterministic response draw.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            synthesizer: ResponseSynthesizer::with_seed(seed),
            trace: ReflectionTrace::default(),
        }
    }

    /// Solve with the default technical strategy, critical evaluation and
    /// three iterations.
    pub fn solve(&mut self, problem: &str) -> Reflection {
        self.run(problem, &ADVANCED_DEFAULTS)
    }
}

impl Reflect for AdvancedAgent {
    fn run_observed(
        &mut self,
        problem: &str,
        options: &GenerationOptions,
        observer: &mut dyn FnMut(&ReflectionEvent<'_>),
    ) -> Reflection {
        observer(&ReflectionEvent::Started {
            problem,
            style: options.style,
            mode: options.critique_mode,
        });

        let seed = strategy(options.style)(&mut self.synthesizer, problem);
        let reflection = run_loop(
            seed,
            options.max_iterations,
            evaluator(options.critique_mode),
            is_finished,
            observer,
        );

        self.trace = reflection.trace.clone();
        reflection
    }

    fn trace(&self) -> &ReflectionTrace {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_detail_by_keyword() {
        let mut synth = ResponseSynthesizer::with_seed(1);
        let response = strategy(Style::Technical)(&mut synth, "Optimize a recursive function");
        assert!(response.starts_with("Technical Analysis: "));
        assert!(response.contains(" Implementation Details: Consider stack overflow protection"));

        let response = strategy(Style::Technical)(&mut synth, "tune my neural network");
        assert!(response.contains(" Technical Specifics: "));

        let response = strategy(Style::Technical)(&mut synth, "pick a database");
        assert!(response.contains(" System Architecture: "));

        let response = strategy(Style::Technical)(&mut synth, "hello");
        assert!(response.ends_with("and performance profiling."));
    }

    #[test]
    fn test_creative_insight_by_keyword() {
        let mut synth = ResponseSynthesizer::with_seed(1);
        let response = strategy(Style::Creative)(&mut synth, "code optimization ideas");
        assert!(response.contains(" Innovation Opportunity: "));

        let response = strategy(Style::Creative)(&mut synth, "an ai assistant");
        assert!(response.contains(" Creative ML: "));

        let response = strategy(Style::Creative)(&mut synth, "new architecture");
        assert!(response.contains(" Architectural Innovation: "));

        let response = strategy(Style::Creative)(&mut synth, "xyz");
        assert!(response.ends_with("or emerging technologies."));
    }

    #[test]
    fn test_systematic_appends_framework() {
        let mut synth = ResponseSynthesizer::with_seed(1);
        let response = strategy(Style::Systematic)(&mut synth, "plan a migration");
        assert!(response.starts_with("Systematic Methodology:\n"));
        assert!(response.ends_with("**Phase 5: Maintenance** - Monitoring, optimization, iterative improvement"));
        assert!(response.contains("\n        **Phase 1: Analysis**"));
    }

    #[test]
    fn test_balanced_is_plain_generation() {
        let mut a = ResponseSynthesizer::with_seed(4);
        let mut b = ResponseSynthesizer::with_seed(4);
        assert_eq!(
            strategy(Style::Balanced)(&mut a, "learn rust"),
            b.generate("learn rust", Style::Balanced)
        );
    }

    #[test]
    fn test_critical_extras() {
        let critiques = critical_evaluate("Why?");
        assert!(critiques.contains(CritiqueKind::LacksComprehensiveAnalysis));
        assert!(critiques.contains(CritiqueKind::QuestionsInsteadOfGuidance));
        assert_eq!(critiques.first(), Some(CritiqueKind::NeedsDepth));
    }

    #[test]
    fn test_comprehensive_is_deduplicated_union() {
        let response = "short";
        let union = comprehensive_evaluate(response);

        let mut expected: HashSet<CritiqueKind> = critical_evaluate(response).into_iter().collect();
        expected.extend(constructive_evaluate(response));

        let got: HashSet<CritiqueKind> = union.iter().copied().collect();
        assert_eq!(got, expected);
        assert_eq!(union.len(), expected.len());
    }

    #[test]
    fn test_finished_on_sentinel_anywhere() {
        let mut critiques = Critiques::new();
        assert!(is_finished(&critiques));
        critiques.push(CritiqueKind::QuestionsInsteadOfGuidance);
        assert!(!is_finished(&critiques));
        critiques.push(CritiqueKind::MeetsStandards);
        assert!(is_finished(&critiques));
    }

    #[test]
    fn test_solve_uses_defaults() {
        let mut agent = AdvancedAgent::with_seed(2);
        let result = agent.solve("How do I optimize a recursive algorithm?");
        assert!(result.trace.len() <= 4);
        assert!(result.trace.first().unwrap().response.starts_with("Technical Analysis: "));
        assert_eq!(agent.trace(), &result.trace);
    }

    #[test]
    fn test_zero_iterations() {
        let mut agent = AdvancedAgent::with_seed(2);
        let result = agent.run("anything", &ADVANCED_DEFAULTS.max_iter(0));
        assert_eq!(result.trace.len(), 1);
        assert!(result.trace.first().unwrap().critiques.is_empty());
    }
}
