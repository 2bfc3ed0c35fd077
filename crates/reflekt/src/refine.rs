// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Deterministic refinement transform.
//!
//! Each [`CritiqueKind`] maps to one fixed textual change, mostly an appended
//! paragraph. Critiques are applied in order and compound: each transform sees
//! the text produced by the previous one.
//!
//! # Examples
//!
//! ```
//! use reflekt::critique::CritiqueKind;
//! use reflekt::refine::refine;
//!
//! let refined = refine("Use a cache.", &[CritiqueKind::MissingMethodology]);
//! assert!(refined.starts_with("Methodology: Use a cache."));
//! ```

use crate::critique::CritiqueKind;

const DEPTH_ADDENDUM: &str = " This approach should be implemented with careful consideration of edge cases, error handling, and performance implications in production environments.";
const POINTS_ADDENDUM: &str =
    " Additionally, consider documentation, code review processes, and maintenance strategies.";
const COMPLEXITY_ADDENDUM: &str = " Performance Analysis: Evaluate time complexity (worst, average, best case) and space complexity. Consider optimization opportunities and scalability limits.";
const ML_ADDENDUM: &str = " ML Best Practices: Implement proper train/validation/test splits, use cross-validation, monitor for data drift, and establish baseline metrics.";
const SYSTEMS_ADDENDUM: &str = " System Design: Plan for horizontal scaling, implement health checks, design for failure resilience, and establish monitoring/alerting.";
const TRADE_OFFS_ADDENDUM: &str = " Trade-offs: Consider performance vs. complexity, development time vs. optimization, and cost vs. reliability implications.";
const CHALLENGES_ADDENDUM: &str = " Challenges: Be aware of implementation complexity, resource requirements, and potential failure modes.";
const EXAMPLE_ADDENDUM: &str = " Example: In practice, this might involve specific tools like profilers for performance optimization or A/B testing for feature validation.";
const BEST_PRACTICES_ADDENDUM: &str = " Best Practices: Follow industry standards, use established patterns, and leverage proven frameworks when possible.";
const QA_ADDENDUM: &str = " Quality Assurance: Implement comprehensive testing (unit, integration, end-to-end), code reviews, and continuous integration practices.";

/// Number of `.`-separated fragments kept when trimming a verbose response.
const CONCISE_FRAGMENTS: usize = 3;

/// Apply every critique, in order, to a response.
///
/// An empty critique list returns the response unchanged.
pub fn refine(response: &str, critiques: &[CritiqueKind]) -> String {
    critiques
        .iter()
        .fold(response.to_string(), |text, kind| apply(text, *kind))
}

/// Refine from free-form critique messages.
///
/// Each message is classified with [`CritiqueKind::from_message`]; messages
/// that match no trigger are ignored.
pub fn refine_messages<S: AsRef<str>>(response: &str, messages: &[S]) -> String {
    let kinds: Vec<CritiqueKind> = messages
        .iter()
        .filter_map(|m| CritiqueKind::from_message(m.as_ref()))
        .collect();
    refine(response, &kinds)
}

/// Apply a single critique transform.
pub fn apply(mut text: String, kind: CritiqueKind) -> String {
    match kind {
        // The expand critique shares the depth trigger, so it gets the same text.
        CritiqueKind::NeedsDepth | CritiqueKind::ExpandExplanations => {
            text.push_str(DEPTH_ADDENDUM)
        }
        CritiqueKind::TooVerbose => return make_concise(text),
        CritiqueKind::MissingMethodology => {
            return format!(
                "Methodology: {} This systematic approach ensures comprehensive problem-solving.",
                text
            )
        }
        CritiqueKind::NeedsMultiplePoints => text.push_str(POINTS_ADDENDUM),
        CritiqueKind::ComplexityAnalysis => text.push_str(COMPLEXITY_ADDENDUM),
        CritiqueKind::ModelValidation => text.push_str(ML_ADDENDUM),
        CritiqueKind::ScalabilityReliability => text.push_str(SYSTEMS_ADDENDUM),
        CritiqueKind::TradeOffs => text.push_str(TRADE_OFFS_ADDENDUM),
        CritiqueKind::PotentialChallenges => text.push_str(CHALLENGES_ADDENDUM),
        CritiqueKind::ConcreteExamples => text.push_str(EXAMPLE_ADDENDUM),
        CritiqueKind::BestPractices => text.push_str(BEST_PRACTICES_ADDENDUM),
        CritiqueKind::TestingQuality => text.push_str(QA_ADDENDUM),
        CritiqueKind::LacksComprehensiveAnalysis
        | CritiqueKind::QuestionsInsteadOfGuidance
        | CritiqueKind::MeetsStandards => {}
    }
    text
}

/// Keep the first three `.`-separated fragments.
///
/// Fragments are rejoined with `". "` and a trailing period; text with three
/// or fewer fragments is returned as is.
fn make_concise(text: String) -> String {
    let fragments: Vec<&str> = text.split('.').collect();
    if fragments.len() > CONCISE_FRAGMENTS {
        format!("{}.", fragments[..CONCISE_FRAGMENTS].join(". "))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_critiques_is_identity() {
        assert_eq!(refine("anything at all", &[]), "anything at all");
    }

    #[test]
    fn test_depth_appends() {
        let refined = refine("Base.", &[CritiqueKind::NeedsDepth]);
        assert_eq!(refined, format!("Base.{}", DEPTH_ADDENDUM));
    }

    #[test]
    fn test_expand_uses_depth_text() {
        assert_eq!(
            refine("Base.", &[CritiqueKind::ExpandExplanations]),
            refine("Base.", &[CritiqueKind::NeedsDepth])
        );
    }

    #[test]
    fn test_methodology_wraps() {
        let refined = refine("Base.", &[CritiqueKind::MissingMethodology]);
        assert_eq!(
            refined,
            "Methodology: Base. This systematic approach ensures comprehensive problem-solving."
        );
    }

    #[test]
    fn test_verbose_truncates_to_three_fragments() {
        let refined = refine("One. Two. Three. Four. Five.", &[CritiqueKind::TooVerbose]);
        assert_eq!(refined, "One.  Two.  Three.");
    }

    #[test]
    fn test_verbose_short_text_unchanged() {
        assert_eq!(refine("One. Two", &[CritiqueKind::TooVerbose]), "One. Two");
    }

    #[test]
    fn test_transforms_compound_in_order() {
        let refined = refine(
            "Base",
            &[CritiqueKind::NeedsDepth, CritiqueKind::MissingMethodology],
        );
        assert!(refined.starts_with("Methodology: Base This approach"));
        assert!(refined.ends_with("comprehensive problem-solving."));

        let reversed = refine(
            "Base",
            &[CritiqueKind::MissingMethodology, CritiqueKind::NeedsDepth],
        );
        assert!(reversed.ends_with("in production environments."));
        assert_ne!(refined, reversed);
    }

    #[test]
    fn test_no_op_kinds() {
        for kind in [
            CritiqueKind::LacksComprehensiveAnalysis,
            CritiqueKind::QuestionsInsteadOfGuidance,
            CritiqueKind::MeetsStandards,
        ] {
            assert_eq!(refine("Base.", &[kind]), "Base.");
        }
    }

    #[test]
    fn test_refine_messages_ignores_unknown() {
        let refined = refine_messages(
            "Base.",
            &["something unrelated", "Should mention testing or quality assurance aspects"],
        );
        assert_eq!(refined, format!("Base.{}", QA_ADDENDUM));
    }

    #[test]
    fn test_every_catalog_critique_changes_text() {
        let base = "Alpha. Beta. Gamma. Delta. Epsilon.";
        for kind in CritiqueKind::ALL {
            let refined = refine(base, &[kind]);
            match kind {
                CritiqueKind::LacksComprehensiveAnalysis
                | CritiqueKind::QuestionsInsteadOfGuidance
                | CritiqueKind::MeetsStandards => assert_eq!(refined, base),
                _ => assert_ne!(refined, base, "{:?} left text unchanged", kind),
            }
        }
    }
}
