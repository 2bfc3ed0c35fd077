// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Evaluation utilities for Reflekt
//!
//! Provides response metrics with Rayon parallelism and analysis of
//! reflection traces. Nothing here feeds back into the reflection loop.

pub mod analysis;
pub mod metric;
pub mod parallel;

pub use analysis::{QualityTrend, TraceAnalysis};
pub use metric::{calculate, calculate_batch, trace_metrics, ResponseMetrics};
pub use parallel::{BatchReport, ParallelEvaluator};
