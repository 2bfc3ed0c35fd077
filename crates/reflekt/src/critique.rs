// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Heuristic critique of candidate responses.
//!
//! [`critique`] runs a fixed battery of independent textual checks and emits
//! one [`CritiqueKind`] per check that fires, in a fixed order. When nothing
//! fires the result is the single sentinel [`CritiqueKind::MeetsStandards`],
//! which the reflection loop treats as its stop signal.
//!
//! # Examples
//!
//! ```
//! use reflekt::critique::{critique, CritiqueKind, CritiqueMode};
//!
//! let critiques = critique("short", CritiqueMode::Constructive);
//! assert_eq!(critiques.first(), Some(CritiqueKind::NeedsDepth));
//! assert!(!critiques.is_satisfactory());
//! ```

use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Words that signal an actionable methodology.
const METHODOLOGY_WORDS: &[&str] = &[
    "step",
    "approach",
    "consider",
    "implement",
    "strategy",
    "method",
];

const ALGORITHM_TERMS: &[&str] = &["algorithm", "complexity", "optimization"];
const COMPLEXITY_VOCABULARY: &[&str] = &["o(", "time", "space", "performance", "complexity"];

const ML_TERMS: &[&str] = &["machine learning", "model", "training"];
const ML_VOCABULARY: &[&str] = &["data", "validation", "overfitting", "accuracy", "metrics"];

const SYSTEM_TERMS: &[&str] = &["system", "scalable", "distributed"];
const SYSTEM_VOCABULARY: &[&str] = &["scalability", "performance", "monitoring", "availability"];

const RISK_WORDS: &[&str] = &["risk", "challenge", "limitation", "constraint", "drawback"];
const QUALITY_WORDS: &[&str] = &["testing", "validation", "verification", "quality"];

/// Minimum length (in characters) before a response is deep enough.
pub const MIN_LENGTH: usize = 100;
/// Maximum length (in characters) before a response is too verbose.
pub const MAX_LENGTH: usize = 500;

/// A single diagnostic produced by [`critique`].
///
/// Each variant renders to a fixed message (see [`CritiqueKind::message`]) and
/// maps to a fixed transform in [`crate::refine::refine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CritiqueKind {
    /// Shorter than [`MIN_LENGTH`].
    NeedsDepth,
    /// Longer than [`MAX_LENGTH`].
    TooVerbose,
    /// No methodology vocabulary.
    MissingMethodology,
    /// Fewer than two periods.
    NeedsMultiplePoints,
    /// Talks about algorithms without complexity vocabulary.
    ComplexityAnalysis,
    /// Talks about ML without data/validation vocabulary.
    ModelValidation,
    /// Talks about systems without scalability vocabulary.
    ScalabilityReliability,
    /// Critical mode: no trade-off discussion.
    TradeOffs,
    /// Critical mode: no risks or limitations.
    PotentialChallenges,
    /// Critical mode: no concrete example.
    ConcreteExamples,
    /// Constructive mode: no best practices.
    BestPractices,
    /// Constructive mode: fewer than three substantial sentences.
    ExpandExplanations,
    /// Constructive mode: no testing or QA mention.
    TestingQuality,
    /// Advanced critical evaluation: response too short for a full analysis.
    LacksComprehensiveAnalysis,
    /// Advanced critical evaluation: response asks questions.
    QuestionsInsteadOfGuidance,
    /// Sentinel: no issues found.
    MeetsStandards,
}

impl CritiqueKind {
    /// Every kind, in check emission order.
    pub const ALL: [CritiqueKind; 16] = [
        Self::NeedsDepth,
        Self::TooVerbose,
        Self::MissingMethodology,
        Self::NeedsMultiplePoints,
        Self::ComplexityAnalysis,
        Self::ModelValidation,
        Self::ScalabilityReliability,
        Self::TradeOffs,
        Self::PotentialChallenges,
        Self::ConcreteExamples,
        Self::BestPractices,
        Self::ExpandExplanations,
        Self::TestingQuality,
        Self::LacksComprehensiveAnalysis,
        Self::QuestionsInsteadOfGuidance,
        Self::MeetsStandards,
    ];

    /// Human-readable critique text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NeedsDepth => "Response needs more depth and detailed explanation",
            Self::TooVerbose => "Response might be too verbose - consider making it more concise",
            Self::MissingMethodology => "Missing clear methodology or actionable approach",
            Self::NeedsMultiplePoints => "Should include multiple points or considerations",
            Self::ComplexityAnalysis => "Algorithm discussions should address complexity analysis",
            Self::ModelValidation => "ML discussions should address data quality and model validation",
            Self::ScalabilityReliability => "System design should consider scalability and reliability",
            Self::TradeOffs => "Should explicitly discuss trade-offs and limitations",
            Self::PotentialChallenges => "Should acknowledge potential challenges or limitations",
            Self::ConcreteExamples => "Could strengthen with concrete examples or use cases",
            Self::BestPractices => "Could include industry best practices or recommendations",
            Self::ExpandExplanations => "Could expand with more detailed explanations",
            Self::TestingQuality => "Should mention testing or quality assurance aspects",
            Self::LacksComprehensiveAnalysis => "Response lacks comprehensive analysis",
            Self::QuestionsInsteadOfGuidance => {
                "Should provide definitive guidance rather than questions"
            }
            Self::MeetsStandards => "Response meets quality standards",
        }
    }

    /// Classify free-form critique text by the refine stage's triggers.
    ///
    /// Matching is case-insensitive substring containment, checked in a fixed
    /// precedence order; the first trigger found wins. Text that matches no
    /// refine trigger returns `None`, except for the sentinel message.
    pub fn from_message(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        let kind = if lower.contains("needs more depth") || lower.contains("detailed explanation") {
            Self::NeedsDepth
        } else if lower.contains("too verbose") {
            Self::TooVerbose
        } else if lower.contains("missing clear methodology") {
            Self::MissingMethodology
        } else if lower.contains("multiple points") {
            Self::NeedsMultiplePoints
        } else if lower.contains("complexity analysis") {
            Self::ComplexityAnalysis
        } else if lower.contains("model validation") {
            Self::ModelValidation
        } else if lower.contains("scalability and reliability") {
            Self::ScalabilityReliability
        } else if lower.contains("trade-offs and limitations") {
            Self::TradeOffs
        } else if lower.contains("potential challenges") {
            Self::PotentialChallenges
        } else if lower.contains("concrete examples") {
            Self::ConcreteExamples
        } else if lower.contains("best practices") {
            Self::BestPractices
        } else if lower.contains("more detailed explanations") {
            Self::ExpandExplanations
        } else if lower.contains("testing or quality assurance") {
            Self::TestingQuality
        } else if lower.contains("meets quality standards") {
            Self::MeetsStandards
        } else {
            return None;
        };
        Some(kind)
    }

    /// Whether this is the "no issues" sentinel.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::MeetsStandards)
    }
}

impl fmt::Display for CritiqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for CritiqueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Evaluation mode selecting extra checks beyond the base battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CritiqueMode {
    /// Adds trade-off, risk and example checks.
    Critical,
    /// Adds best-practice, detail and testing checks.
    #[default]
    Constructive,
    /// Base checks only.
    Comprehensive,
}

impl CritiqueMode {
    /// Parse an exact mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "critical" => Some(Self::Critical),
            "constructive" => Some(Self::Constructive),
            "comprehensive" => Some(Self::Comprehensive),
            _ => None,
        }
    }

    /// Canonical mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Constructive => "constructive",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// Unknown names get the base checks only.
impl From<&str> for CritiqueMode {
    fn from(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::Comprehensive)
    }
}

impl From<String> for CritiqueMode {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for CritiqueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of critiques, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Critiques(SmallVec<[CritiqueKind; 8]>);

impl Critiques {
    /// Empty list.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The single-element sentinel list.
    pub fn satisfied() -> Self {
        let mut list = Self::new();
        list.push(CritiqueKind::MeetsStandards);
        list
    }

    /// Append a critique.
    #[inline]
    pub fn push(&mut self, kind: CritiqueKind) {
        self.0.push(kind);
    }

    /// Exactly `[MeetsStandards]`.
    pub fn is_satisfactory(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_sentinel()
    }

    /// Whether the list contains a given kind.
    pub fn contains(&self, kind: CritiqueKind) -> bool {
        self.0.contains(&kind)
    }

    /// First critique, if any.
    pub fn first(&self) -> Option<CritiqueKind> {
        self.0.first().copied()
    }

    /// Number of critiques.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate critiques in order.
    pub fn iter(&self) -> impl Iterator<Item = &CritiqueKind> {
        self.0.iter()
    }

    /// Critique kinds as a slice.
    pub fn as_slice(&self) -> &[CritiqueKind] {
        &self.0
    }

    /// Rendered messages in order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(CritiqueKind::message).collect()
    }

    /// Concatenate another list, keeping order and duplicates.
    pub fn extend(&mut self, other: impl IntoIterator<Item = CritiqueKind>) {
        self.0.extend(other);
    }
}

impl FromIterator<CritiqueKind> for Critiques {
    fn from_iter<I: IntoIterator<Item = CritiqueKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Critiques {
    type Item = CritiqueKind;
    type IntoIter = smallvec::IntoIter<[CritiqueKind; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Critiques {
    type Item = &'a CritiqueKind;
    type IntoIter = std::slice::Iter<'a, CritiqueKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Critiques {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.message())?;
        }
        Ok(())
    }
}

#[inline]
fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Sentences longer than 20 characters after splitting on `.` and trimming.
fn substantial_sentences(response: &str) -> usize {
    response
        .split('.')
        .filter(|s| s.trim().chars().count() > 20)
        .count()
}

/// Critique a response.
///
/// Checks run in a fixed order and each emits at most one critique:
/// length, verbosity, methodology, multiple points, then the algorithm, ML and
/// systems topic checks, then the mode-specific extras. Returns the sentinel
/// list when nothing fires.
pub fn critique(response: &str, mode: CritiqueMode) -> Critiques {
    let mut critiques = Critiques::new();
    let lower = response.to_lowercase();
    let length = response.chars().count();

    if length < MIN_LENGTH {
        critiques.push(CritiqueKind::NeedsDepth);
    }

    if length > MAX_LENGTH {
        critiques.push(CritiqueKind::TooVerbose);
    }

    if !contains_any(&lower, METHODOLOGY_WORDS) {
        critiques.push(CritiqueKind::MissingMethodology);
    }

    if response.matches('.').count() < 2 {
        critiques.push(CritiqueKind::NeedsMultiplePoints);
    }

    if contains_any(&lower, ALGORITHM_TERMS) && !contains_any(&lower, COMPLEXITY_VOCABULARY) {
        critiques.push(CritiqueKind::ComplexityAnalysis);
    }

    if contains_any(&lower, ML_TERMS) && !contains_any(&lower, ML_VOCABULARY) {
        critiques.push(CritiqueKind::ModelValidation);
    }

    if contains_any(&lower, SYSTEM_TERMS) && !contains_any(&lower, SYSTEM_VOCABULARY) {
        critiques.push(CritiqueKind::ScalabilityReliability);
    }

    match mode {
        CritiqueMode::Critical => {
            if !lower.contains("trade-off") && !lower.contains("tradeoff") {
                critiques.push(CritiqueKind::TradeOffs);
            }
            if !contains_any(&lower, RISK_WORDS) {
                critiques.push(CritiqueKind::PotentialChallenges);
            }
            if !lower.contains("example") && !lower.contains("e.g.") {
                critiques.push(CritiqueKind::ConcreteExamples);
            }
        }
        CritiqueMode::Constructive => {
            if !lower.contains("best practice") && !lower.contains("recommended") {
                critiques.push(CritiqueKind::BestPractices);
            }
            if substantial_sentences(response) < 3 {
                critiques.push(CritiqueKind::ExpandExplanations);
            }
            if !contains_any(&lower, QUALITY_WORDS) {
                critiques.push(CritiqueKind::TestingQuality);
            }
        }
        CritiqueMode::Comprehensive => {}
    }

    if critiques.is_empty() {
        Critiques::satisfied()
    } else {
        critiques
    }
}
