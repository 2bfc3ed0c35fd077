// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Canned response synthesis.
//!
//! [`ResponseSynthesizer`] classifies a prompt against the
//! [`KnowledgeBase`], draws one of the matched domain's responses uniformly at
//! random and wraps it according to a [`Style`]. The only source of
//! nondeterminism is the response draw, which is seedable.
//!
//! # Examples
//!
//! ```
//! use reflekt::synthesize::{ResponseSynthesizer, Style};
//!
//! let mut synth = ResponseSynthesizer::with_seed(7);
//! let response = synth.generate("How do I optimize a recursive algorithm?", Style::Technical);
//! assert!(response.starts_with("Technical Analysis: "));
//! ```

use crate::knowledge::{Classification, Domain, KnowledgeBase};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response used when no domain keyword matched.
pub const FALLBACK_RESPONSE: &str = "Analyze the problem systematically by breaking it into smaller components, researching existing solutions, and implementing a well-tested approach.";

const BALANCED_CLOSING: &str =
    " Consider both immediate implementation needs and long-term maintainability.";

/// Generation style applied on top of the base response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Style {
    /// "Technical Analysis:" prefix plus an implementation-focused clause.
    Technical,
    /// "Creative Approach:" prefix plus an innovation clause.
    Creative,
    /// Four-step numbered methodology embedding the base response.
    Systematic,
    /// "Balanced Solution:" prefix plus a maintainability clause.
    #[default]
    Balanced,
}

impl Style {
    /// Parse an exact style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "technical" => Some(Self::Technical),
            "creative" => Some(Self::Creative),
            "systematic" => Some(Self::Systematic),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }

    /// Canonical style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Creative => "creative",
            Self::Systematic => "systematic",
            Self::Balanced => "balanced",
        }
    }

    /// Apply this style to a base response for the given domain.
    pub fn apply(&self, base: &str, domain: Domain) -> String {
        match self {
            Self::Technical => {
                format!("Technical Analysis: {}{}", base, technical_clause(domain))
            }
            Self::Creative => format!("Creative Approach: {}{}", base, creative_clause(domain)),
            Self::Systematic => {
                let steps = [
                    "1) Problem Analysis: Break down requirements and constraints".to_string(),
                    format!("2) Solution Design: {}", base),
                    "3) Implementation: Build incrementally with continuous testing".to_string(),
                    "4) Validation: Verify correctness and performance against requirements"
                        .to_string(),
                ];
                format!("Systematic Methodology:\n{}", steps.join("\n"))
            }
            Self::Balanced => format!("Balanced Solution: {}{}", base, BALANCED_CLOSING),
        }
    }
}

/// Unknown names fall back to balanced.
impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn technical_clause(domain: Domain) -> &'static str {
    match domain {
        Domain::Algorithms => " Focus on computational complexity analysis, memory usage patterns, and implementation-specific optimizations like cache locality and branch prediction.",
        Domain::MachineLearning => " Dive into mathematical foundations, gradient computations, loss function analysis, and hyperparameter optimization strategies.",
        Domain::Systems => " Consider low-level implementation details, system calls, memory management, and hardware-specific optimizations.",
        _ => " Examine implementation details, performance characteristics, and technical constraints thoroughly.",
    }
}

fn creative_clause(domain: Domain) -> &'static str {
    match domain {
        Domain::Algorithms => " Think beyond standard approaches - consider unconventional data structures, hybrid algorithms, or bio-inspired computing methods.",
        Domain::MachineLearning => " Explore novel architectures, transfer learning from unexpected domains, or ensemble methods combining different paradigms.",
        Domain::Systems => " Consider unconventional architectures, event-driven designs, or innovative caching patterns from other industries.",
        _ => " Challenge conventional wisdom and explore innovative approaches from adjacent fields or emerging technologies.",
    }
}

/// Keyword-matching response generator.
///
/// Holds a read-only [`KnowledgeBase`] and the PRNG used to pick a response
/// within the matched domain.
#[derive(Debug, Clone)]
pub struct ResponseSynthesizer {
    knowledge: KnowledgeBase,
    rng: StdRng,
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSynthesizer {
    /// Create a synthesizer over the built-in knowledge base, seeded from entropy.
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a synthesizer with a fixed seed for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the knowledge base.
    pub fn with_knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// The knowledge base in use.
    #[inline]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Generate a styled response for a prompt.
    pub fn generate(&mut self, prompt: &str, style: Style) -> String {
        self.generate_classified(prompt, style).0
    }

    /// Generate a styled response and return the classification used.
    pub fn generate_classified(&mut self, prompt: &str, style: Style) -> (String, Classification) {
        let class = self.knowledge.classify(prompt);

        let base = if class.is_matched() {
            self.knowledge
                .get(class.domain)
                .and_then(|entry| entry.responses.choose(&mut self.rng).copied())
                .unwrap_or(FALLBACK_RESPONSE)
        } else {
            FALLBACK_RESPONSE
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            domain = %class.domain,
            score = class.score,
            style = %style,
            "classified prompt"
        );

        (style.apply(base, class.domain), class)
    }
}
