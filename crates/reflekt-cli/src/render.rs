// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Console rendering of reflection progress and reports.

use console::style;
use reflekt::trace::preview;
use reflekt::{Critiques, ReflectionEvent};
use reflekt_eval::{ResponseMetrics, TraceAnalysis};

const RULE_WIDTH: usize = 60;
const PREVIEW_CHARS: usize = 100;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Prints loop events as human-readable progress lines.
pub struct ConsoleObserver {
    quiet: bool,
}

impl ConsoleObserver {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn observe(&self, event: &ReflectionEvent<'_>) {
        if self.quiet {
            return;
        }

        match *event {
            ReflectionEvent::Started {
                problem,
                style: gen_style,
                mode,
            } => {
                println!("{} {}", style("Problem:").bold(), problem);
                println!(
                    "{}",
                    style(format!("Style: {} | Critique: {}", gen_style, mode)).dim()
                );
                println!("{}", rule());
            }
            ReflectionEvent::Iteration { number, response } => {
                println!();
                println!("{}", style(format!("Iteration {}", number)).cyan().bold());
                println!("{} {}...", style("Current response:").dim(), preview(response, PREVIEW_CHARS));
            }
            ReflectionEvent::Critiqued { critiques, .. } => {
                println!("{} {}", style("Critiques:").yellow(), critiques);
            }
            ReflectionEvent::Satisfied { .. } => {
                println!("{}", style("Response satisfactory!").green().bold());
            }
            ReflectionEvent::Refined { response, .. } => {
                println!("{} {}...", style("Refined:").dim(), preview(response, PREVIEW_CHARS));
            }
            ReflectionEvent::Finished {
                response, entries, ..
            } => {
                println!();
                println!(
                    "{}",
                    style(format!("Final response after {} iterations:", entries)).bold()
                );
                println!("{}", style("COMPLETE FINAL RESULT:").cyan());
                println!("{}", response);
                println!("{}", rule());
            }
        }
    }
}

/// Print a trace analysis, or a notice when there is nothing to analyze.
pub fn print_analysis(analysis: Option<&TraceAnalysis>) {
    match analysis {
        Some(analysis) => {
            println!();
            println!("{}", analysis);
        }
        None => println!("{}", style("No reflection trace available.").dim()),
    }
}

/// Print a critique list, one message per line.
pub fn print_critiques(critiques: &Critiques) {
    if critiques.is_satisfactory() {
        println!("{}", style(critiques).green());
        return;
    }
    for (i, kind) in critiques.iter().enumerate() {
        println!("{} {}", style(format!("{:>2}.", i + 1)).dim(), kind);
    }
}

/// Print metrics for one response.
pub fn print_metrics(label: &str, metrics: &ResponseMetrics) {
    println!("{}", style(label).bold());
    println!("  length:      {}", metrics.length);
    println!("  words:       {}", metrics.word_count);
    println!("  sentences:   {}", metrics.sentence_count);
    println!("  complexity:  {:.3}", metrics.complexity_score);
}
