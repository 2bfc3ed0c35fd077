// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Result types for the reflection loop.
//!
//! A run produces a [`Reflection`]: the final response, the ordered
//! [`ReflectionTrace`] of every (response, critiques) pair, and the reason the
//! loop stopped. Progress is reported through [`ReflectionEvent`]s.

use crate::critique::{CritiqueMode, Critiques};
use crate::synthesize::Style;
use serde::Serialize;
use std::fmt;

/// Reason why the reflection loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Critique returned the "meets quality standards" sentinel.
    Satisfied,
    /// Iteration budget exhausted (including a budget of zero).
    #[default]
    MaxIterations,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Satisfied => write!(f, "satisfied"),
            Self::MaxIterations => write!(f, "max iterations"),
        }
    }
}

/// One step of a reflection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    /// Iteration number; 0 is the seed response.
    pub iteration: u32,
    /// Response after this iteration's refinement.
    pub response: String,
    /// Critiques that produced this response (empty for the seed).
    pub critiques: Critiques,
}

impl TraceEntry {
    /// The seed entry of a run.
    pub fn seed(response: impl Into<String>) -> Self {
        Self {
            iteration: 0,
            response: response.into(),
            critiques: Critiques::new(),
        }
    }
}

/// Ordered history of one reflection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReflectionTrace(Vec<TraceEntry>);

impl ReflectionTrace {
    /// Start a trace from the seed response.
    pub fn seeded(response: impl Into<String>) -> Self {
        Self(vec![TraceEntry::seed(response)])
    }

    pub(crate) fn push(&mut self, entry: TraceEntry) {
        self.0.push(entry);
    }

    /// Entries in order.
    #[inline]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.0
    }

    /// Number of entries (seed included).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no run has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.0.iter()
    }

    /// The seed entry.
    pub fn first(&self) -> Option<&TraceEntry> {
        self.0.first()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&TraceEntry> {
        self.0.last()
    }

    /// Character length of each response, in order.
    pub fn response_lengths(&self) -> Vec<usize> {
        self.0.iter().map(|e| e.response.chars().count()).collect()
    }

    /// Number of critiques per refined entry (the seed is skipped).
    pub fn critique_counts(&self) -> Vec<usize> {
        self.0
            .iter()
            .filter(|e| !e.critiques.is_empty())
            .map(|e| e.critiques.len())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ReflectionTrace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The outcome of a reflection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reflection {
    /// Final response.
    pub response: String,
    /// Full trace, seed first.
    pub trace: ReflectionTrace,
    /// Why the loop stopped.
    pub stop_reason: StopReason,
}

impl Reflection {
    /// Number of refinements applied.
    pub fn refinements(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Whether the loop ended on a clean critique.
    pub fn is_satisfied(&self) -> bool {
        self.stop_reason == StopReason::Satisfied
    }
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reflection {{")?;
        writeln!(f, "  entries: {}", self.trace.len())?;
        writeln!(f, "  stop_reason: {}", self.stop_reason)?;
        writeln!(f, "  response: {}", preview(&self.response, 50))?;
        write!(f, "}}")
    }
}

/// Progress notification emitted while a run executes.
///
/// Observers see the same values the loop works with; they cannot change
/// them.
#[derive(Debug, Clone, Copy)]
pub enum ReflectionEvent<'a> {
    /// A run started.
    Started {
        /// Problem text.
        problem: &'a str,
        /// Generation style (the strategy, for the advanced agent).
        style: Style,
        /// Critique mode.
        mode: CritiqueMode,
    },
    /// An iteration is about to critique the current response.
    Iteration {
        /// 1-based iteration number.
        number: u32,
        /// Response being critiqued.
        response: &'a str,
    },
    /// Critique finished.
    Critiqued {
        /// 1-based iteration number.
        number: u32,
        /// The critiques found.
        critiques: &'a Critiques,
    },
    /// Critique was clean; the loop stops.
    Satisfied {
        /// 1-based iteration number.
        number: u32,
    },
    /// The response was refined.
    Refined {
        /// 1-based iteration number.
        number: u32,
        /// The refined response.
        response: &'a str,
    },
    /// The run finished.
    Finished {
        /// Final response.
        response: &'a str,
        /// Number of trace entries.
        entries: usize,
        /// Why the loop stopped.
        stop_reason: StopReason,
    },
}

/// First `max` characters of `text`.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
