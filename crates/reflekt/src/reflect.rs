// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The generate, critique, refine loop.
//!
//! A run seeds a response from the synthesizer, then repeatedly critiques and
//! refines it until the critique is clean or the iteration budget runs out.
//! Every run builds a fresh [`ReflectionTrace`]; the agent keeps a copy of the
//! most recent one for [`Reflect::trace`].
//!
//! # Examples
//!
//! ```
//! use reflekt::options::GenerationOptions;
//! use reflekt::reflect::{Reflect, ReflectiveAgent};
//! use reflekt::synthesize::Style;
//!
//! let mut agent = ReflectiveAgent::with_seed(1);
//! let opts = GenerationOptions::new().style(Style::Technical).max_iter(2);
//! let result = agent.run("How do I optimize a recursive algorithm?", &opts);
//!
//! assert!(result.response.starts_with("Technical Analysis: "));
//! assert!(result.trace.len() <= 3);
//! ```

use crate::critique::{critique, Critiques};
use crate::options::GenerationOptions;
use crate::refine::refine;
use crate::synthesize::{ResponseSynthesizer, Style};
use crate::trace::{Reflection, ReflectionEvent, ReflectionTrace, StopReason, TraceEntry};

/// An agent that can run the reflection loop.
pub trait Reflect {
    /// Run the loop, reporting progress to `observer`.
    ///
    /// The observer only sees events; the returned [`Reflection`] is the same
    /// whether or not anything is listening.
    fn run_observed(
        &mut self,
        problem: &str,
        options: &GenerationOptions,
        observer: &mut dyn FnMut(&ReflectionEvent<'_>),
    ) -> Reflection;

    /// Run the loop without observation.
    fn run(&mut self, problem: &str, options: &GenerationOptions) -> Reflection {
        self.run_observed(problem, options, &mut |_| {})
    }

    /// Trace of the most recent run; empty before the first run.
    fn trace(&self) -> &ReflectionTrace;
}

/// The basic reflective agent.
///
/// Seeds with the requested [`Style`], critiques with the requested mode and
/// stops only when the critique is exactly the "meets quality standards"
/// sentinel.
#[derive(Debug, Clone, Default)]
pub struct ReflectiveAgent {
    synthesizer: ResponseSynthesizer,
    trace: ReflectionTrace,
}

impl ReflectiveAgent {
    /// Create an agent seeded from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an agent with a deterministic response draw.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_synthesizer(ResponseSynthesizer::with_seed(seed))
    }

    /// Create an agent over a configured synthesizer.
    pub fn with_synthesizer(synthesizer: ResponseSynthesizer) -> Self {
        Self {
            synthesizer,
            trace: ReflectionTrace::default(),
        }
    }

    /// The underlying synthesizer.
    pub fn synthesizer(&mut self) -> &mut ResponseSynthesizer {
        &mut self.synthesizer
    }
}

impl Reflect for ReflectiveAgent {
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

        let seed = self.synthesizer.generate(problem, options.style);
        let mode = options.critique_mode;
        let reflection = run_loop(
            seed,
            options.max_iterations,
            |response| critique(response, mode),
            Critiques::is_satisfactory,
            observer,
        );

        self.trace = reflection.trace.clone();
        reflection
    }

    fn trace(&self) -> &ReflectionTrace {
        &self.trace
    }
}

/// Shared loop body.
///
/// `evaluate` produces the critiques for the current response and `is_done`
/// decides whether they end the run. The seed is entry 0 and each refinement
/// appends one entry, so the trace never exceeds `max_iterations + 1` entries.
pub(crate) fn run_loop<E, D>(
    seed: String,
    max_iterations: u32,
    evaluate: E,
    is_done: D,
    observer: &mut dyn FnMut(&ReflectionEvent<'_>),
) -> Reflection
where
    E: Fn(&str) -> Critiques,
    D: Fn(&Critiques) -> bool,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("reflect", max_iterations).entered();

    let mut response = seed;
    let mut trace = ReflectionTrace::seeded(response.clone());
    let mut stop_reason = StopReason::MaxIterations;

    for i in 0..max_iterations {
        let number = i + 1;
        observer(&ReflectionEvent::Iteration {
            number,
            response: &response,
        });

        let critiques = evaluate(&response);
        observer(&ReflectionEvent::Critiqued {
            number,
            critiques: &critiques,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(iteration = number, critiques = critiques.len(), "critiqued");

        if is_done(&critiques) {
            stop_reason = StopReason::Satisfied;
            observer(&ReflectionEvent::Satisfied { number });
            break;
        }

        response = refine(&response, critiques.as_slice());
        observer(&ReflectionEvent::Refined {
            number,
            response: &response,
        });

        trace.push(TraceEntry {
            iteration: number,
            response: response.clone(),
            critiques,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        entries = trace.len(),
        stop_reason = %stop_reason,
        "reflection finished"
    );

    observer(&ReflectionEvent::Finished {
        response: &response,
        entries: trace.len(),
        stop_reason,
    });

    Reflection {
        response,
        trace,
        stop_reason,
    }
}

/// One-shot reflection in constructive mode.
pub fn quick_reflect(problem: &str, style: Style, iterations: u32) -> String {
    let options = GenerationOptions::new().style(style).max_iter(iterations);
    ReflectiveAgent::new().run(problem, &options).response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::{CritiqueKind, CritiqueMode};

    #[test]
    fn test_zero_iterations_returns_seed() {
        let mut agent = ReflectiveAgent::with_seed(1);
        let opts = GenerationOptions::new().max_iter(0);
        let result = agent.run("anything", &opts);

        assert_eq!(result.trace.len(), 1);
        let seed = result.trace.first().unwrap();
        assert_eq!(seed.iteration, 0);
        assert!(seed.critiques.is_empty());
        assert_eq!(seed.response, result.response);
        assert_eq!(result.stop_reason, StopReason::MaxIterations);
    }

    #[test]
    fn test_trace_empty_before_first_run() {
        let agent = ReflectiveAgent::with_seed(1);
        assert!(agent.trace().is_empty());
    }

    #[test]
    fn test_trace_rebuilt_each_run() {
        let mut agent = ReflectiveAgent::with_seed(1);
        agent.run("sorting", &GenerationOptions::new().max_iter(3));
        let result = agent.run("sorting", &GenerationOptions::new().max_iter(0));
        assert_eq!(agent.trace().len(), 1);
        assert_eq!(agent.trace(), &result.trace);
    }

    #[test]
    fn test_iterations_numbered_in_order() {
        let mut agent = ReflectiveAgent::with_seed(5);
        let result = agent.run("debug my code", &GenerationOptions::new().max_iter(4));
        for (i, entry) in result.trace.iter().enumerate() {
            assert_eq!(entry.iteration as usize, i);
        }
        assert!(result.trace.len() <= 5);
    }

    #[test]
    fn test_loop_stops_on_done() {
        let result = run_loop(
            "seed".to_string(),
            10,
            |_| Critiques::satisfied(),
            Critiques::is_satisfactory,
            &mut |_| {},
        );
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.response, "seed");
        assert!(result.is_satisfied());
    }

    #[test]
    fn test_loop_refines_with_critiques() {
        let result = run_loop(
            "seed".to_string(),
            2,
            |_| [CritiqueKind::MissingMethodology].into_iter().collect(),
            Critiques::is_satisfactory,
            &mut |_| {},
        );
        assert_eq!(result.trace.len(), 3);
        assert!(result.response.starts_with("Methodology: Methodology: seed"));
        assert_eq!(result.stop_reason, StopReason::MaxIterations);
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let opts = GenerationOptions::new()
            .style(Style::Creative)
            .mode(CritiqueMode::Critical);

        let quiet = ReflectiveAgent::with_seed(11).run("design a scalable system", &opts);

        let mut events = Vec::new();
        let observed = ReflectiveAgent::with_seed(11).run_observed(
            "design a scalable system",
            &opts,
            &mut |event| events.push(format!("{:?}", event)),
        );

        assert_eq!(quiet, observed);
        assert!(events.first().unwrap().starts_with("Started"));
        assert!(events.last().unwrap().starts_with("Finished"));
    }

    #[test]
    fn test_quick_reflect_bounded() {
        let response = quick_reflect("How do I optimize a recursive algorithm?", Style::Technical, 2);
        assert!(response.contains("Technical Analysis: "));
    }
}
