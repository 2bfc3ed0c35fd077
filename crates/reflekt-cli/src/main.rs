// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Reflekt CLI tool

mod render;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use reflekt::advanced::ADVANCED_DEFAULTS;
use reflekt::prelude::*;
use reflekt_eval::{ParallelEvaluator, TraceAnalysis};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::render::ConsoleObserver;

#[derive(Parser)]
#[command(name = "reflekt")]
#[command(about = "Self-reflecting response agent", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by the reflection commands.
#[derive(Args)]
struct RunArgs {
    /// Problem to solve
    problem: String,

    /// Maximum refinement iterations
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Options file (.yaml, .yml or .json); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible response selection
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Print an analysis of the trace after the run
    #[arg(short, long)]
    analysis: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the basic reflection loop
    Reflect {
        #[command(flatten)]
        run: RunArgs,

        /// Generation style: technical, creative, systematic or balanced
        #[arg(short, long)]
        style: Option<String>,

        /// Critique mode: critical, constructive or comprehensive
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Run the advanced agent with a generation strategy and evaluation mode
    Advanced {
        #[command(flatten)]
        run: RunArgs,

        /// Generation strategy: technical, creative or systematic
        #[arg(short, long)]
        strategy: Option<String>,

        /// Evaluation mode: critical, constructive or comprehensive
        #[arg(short, long)]
        evaluation: Option<String>,
    },

    /// Generate a single response without reflection
    Generate {
        /// Prompt to answer
        prompt: String,

        /// Generation style
        #[arg(short, long, default_value = "balanced")]
        style: String,

        /// Seed for reproducible response selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print the response and classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Critique a response
    Critique {
        /// Response text
        response: String,

        /// Critique mode
        #[arg(short, long, default_value = "constructive")]
        mode: String,

        /// Print critiques as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute text metrics for one or more responses
    Metrics {
        /// Response texts
        #[arg(required = true)]
        responses: Vec<String>,

        /// Number of parallel threads
        #[arg(short, long)]
        parallel: Option<usize>,

        /// Print metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "reflekt=debug,reflekt_cli=debug"
        } else {
            "reflekt=warn,reflekt_cli=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Base options from the config file, or `fallback` when none is given.
fn base_options(
    config: Option<&PathBuf>,
    fallback: GenerationOptions,
) -> anyhow::Result<GenerationOptions> {
    match config {
        Some(path) => GenerationOptions::load(path)
            .with_context(|| format!("failed to load options from {}", path.display())),
        None => Ok(fallback),
    }
}

fn run_agent<A: Reflect>(
    agent: &mut A,
    run: &RunArgs,
    options: &GenerationOptions,
) -> anyhow::Result<()> {
    tracing::debug!(?options, seed = ?run.seed, "resolved options");

    let observer = ConsoleObserver::new(run.quiet || run.json);
    let reflection =
        agent.run_observed(&run.problem, options, &mut |event| observer.observe(event));

    if run.json {
        println!("{}", serde_json::to_string_pretty(&reflection)?);
        return Ok(());
    }

    if run.quiet {
        println!("{}", reflection.response);
    }

    if run.analysis {
        render::print_analysis(TraceAnalysis::from_trace(agent.trace()).as_ref());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Reflect { run, style, mode } => {
            let mut options = base_options(run.config.as_ref(), GenerationOptions::default())?;
            if let Some(style) = style {
                options.style = Style::from(style.as_str());
            }
            if let Some(mode) = mode {
                options.critique_mode = CritiqueMode::from(mode.as_str());
            }
            if let Some(n) = run.iterations {
                options.max_iterations = n;
            }

            let mut agent = match run.seed {
                Some(seed) => ReflectiveAgent::with_seed(seed),
                None => ReflectiveAgent::new(),
            };
            run_agent(&mut agent, &run, &options)?;
        }
        Commands::Advanced {
            run,
            strategy,
            evaluation,
        } => {
            let mut options = base_options(run.config.as_ref(), ADVANCED_DEFAULTS)?;
            if let Some(strategy) = strategy {
                options.style = Style::from(strategy.as_str());
            }
            if let Some(evaluation) = evaluation {
                options.critique_mode = CritiqueMode::from_name(&evaluation).unwrap_or_default();
            }
            if let Some(n) = run.iterations {
                options.max_iterations = n;
            }

            let mut agent = match run.seed {
                Some(seed) => AdvancedAgent::with_seed(seed),
                None => AdvancedAgent::new(),
            };
            run_agent(&mut agent, &run, &options)?;
        }
        Commands::Generate {
            prompt,
            style,
            seed,
            json,
        } => {
            let mut synth = match seed {
                Some(seed) => ResponseSynthesizer::with_seed(seed),
                None => ResponseSynthesizer::new(),
            };
            let (response, class) = synth.generate_classified(&prompt, Style::from(style.as_str()));

            if json {
                let value = serde_json::json!({
                    "response": response,
                    "classification": class,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                tracing::info!(domain = %class.domain, score = class.score, "classified");
                println!("{}", response);
            }
        }
        Commands::Critique {
            response,
            mode,
            json,
        } => {
            let critiques = critique(&response, CritiqueMode::from(mode.as_str()));
            if json {
                println!("{}", serde_json::to_string_pretty(&critiques)?);
            } else {
                render::print_critiques(&critiques);
            }
        }
        Commands::Metrics {
            responses,
            parallel,
            json,
        } => {
            let mut evaluator = ParallelEvaluator::new();
            if let Some(threads) = parallel {
                evaluator = evaluator.with_threads(threads);
            }
            let report = evaluator
                .evaluate(&responses)
                .context("failed to evaluate responses")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if let [single] = report.metrics.as_slice() {
                render::print_metrics("Metrics", single);
            } else {
                for (i, metrics) in report.metrics.iter().enumerate() {
                    render::print_metrics(&format!("Response {}", i + 1), metrics);
                }
                println!(
                    "mean length: {:.1}, mean complexity: {:.3}",
                    report.mean_length, report.mean_complexity
                );
            }
        }
    }

    Ok(())
}
