// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # Reflekt - Self-Reflecting Response Agent
//!
//! Deterministic, offline simulation of the generate, critique, refine
//! pattern. A keyword-scored knowledge base produces a canned answer, a fixed
//! battery of heuristics critiques it, and a table of textual transforms
//! refines it until the critique comes back clean or the iteration budget is
//! spent.
//!
//! ## Architecture
//!
//! - **Knowledge**: static domain table with keyword and priority scoring
//! - **Synthesis**: style-wrapped responses with a seedable draw
//! - **Critique**: tagged [`CritiqueKind`] values instead of free-form strings
//! - **Refinement**: one fixed transform per critique kind, applied in order
//! - **Agents**: [`ReflectiveAgent`] and [`AdvancedAgent`] behind the [`Reflect`] trait
//!
//! ## Quick Start
//!
//! ```
//! use reflekt::prelude::*;
//!
//! let mut agent = ReflectiveAgent::with_seed(42);
//! let opts = GenerationOptions::new()
//!     .style(Style::Technical)
//!     .mode(CritiqueMode::Constructive)
//!     .max_iter(2);
//!
//! let result = agent.run("How do I optimize a recursive algorithm?", &opts);
//! assert!(result.trace.len() <= 3);
//! assert_eq!(agent.trace(), &result.trace);
//! ```

#![warn(missing_docs)]

pub mod advanced;
pub mod critique;
pub mod error;
pub mod knowledge;
pub mod options;
pub mod refine;
pub mod reflect;
pub mod synthesize;
pub mod trace;

pub use advanced::AdvancedAgent;
pub use critique::{critique, CritiqueKind, CritiqueMode, Critiques};
pub use error::{Error, Result};
pub use knowledge::{Classification, Domain, KnowledgeBase};
pub use options::GenerationOptions;
pub use refine::refine;
pub use reflect::{quick_reflect, Reflect, ReflectiveAgent};
pub use synthesize::{ResponseSynthesizer, Style};
pub use trace::{Reflection, ReflectionEvent, ReflectionTrace, StopReason, TraceEntry};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::advanced::AdvancedAgent;
    pub use crate::critique::{critique, CritiqueKind, CritiqueMode, Critiques};
    pub use crate::error::{Error, Result};
    pub use crate::knowledge::{Domain, KnowledgeBase};
    pub use crate::options::GenerationOptions;
    pub use crate::refine::refine;
    pub use crate::reflect::{quick_reflect, Reflect, ReflectiveAgent};
    pub use crate::synthesize::{ResponseSynthesizer, Style};
    pub use crate::trace::{Reflection, ReflectionEvent, ReflectionTrace, StopReason};
}
