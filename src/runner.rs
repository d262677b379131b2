//! Batch driver: read every case, solve it, write one output line per case.

use std::io::{Read, Write};

use log::{info, warn};
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::DirectedGraph;
use crate::io::{self, GraphCase, Weight};
use crate::{Error, Result};

/// What to print for each solved case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The path vertices, or `no path from {start} to {end}`
    Path,
    /// `yes` if the end vertex is reachable, `no` otherwise
    Reachability,
    /// One JSON object per case
    Json,
}

/// What to do with a case that fails to load or solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the run and return the error
    Abort,
    /// Log the error and continue with the next case
    Skip,
}

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: OutputMode,
    pub on_error: ErrorPolicy,
    /// Solve cases on the rayon thread pool; output order is unchanged
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            mode: OutputMode::Path,
            on_error: ErrorPolicy::Abort,
            parallel: false,
        }
    }
}

impl RunConfig {
    /// Builds a configuration from command line arguments (program name excluded).
    ///
    /// Recognized: `--mode path|reach|json`, `--skip-invalid`, `--parallel`.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let mode = args
                        .next()
                        .ok_or_else(|| Error::Parse("--mode needs a value".to_string()))?;
                    config.mode = match mode.as_str() {
                        "path" => OutputMode::Path,
                        "reach" => OutputMode::Reachability,
                        "json" => OutputMode::Json,
                        other => return Err(Error::Parse(format!("unknown mode {:?}", other))),
                    };
                }
                "--skip-invalid" => config.on_error = ErrorPolicy::Skip,
                "--parallel" => config.parallel = true,
                other => return Err(Error::Parse(format!("unknown argument {:?}", other))),
            }
        }

        Ok(config)
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub solved: usize,
    pub skipped: usize,
}

/// Solves one case and renders it according to `mode`
pub fn solve_case(case: &GraphCase, mode: OutputMode) -> Result<String> {
    let dijkstra: &dyn ShortestPathAlgorithm<Weight, DirectedGraph<Weight>> = &Dijkstra::new();
    match mode {
        OutputMode::Reachability => {
            let reachable = dijkstra.is_reachable(&case.graph, case.start, case.end)?;
            Ok(io::render_reachability(reachable).to_string())
        }
        OutputMode::Path => {
            let result = dijkstra.shortest_path(&case.graph, case.start, case.end)?;
            Ok(io::render_path(&result))
        }
        OutputMode::Json => {
            let result = dijkstra.shortest_path(&case.graph, case.start, case.end)?;
            io::render_json(&result)
        }
    }
}

/// Reads all of `input`, solves every case and writes one line per case to `output`
pub fn run<R, W>(config: &RunConfig, mut input: R, mut output: W) -> Result<RunSummary>
where
    R: Read,
    W: Write,
{
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let cases = io::read_cases(&text);
    info!("Read {} cases", cases.len());

    let mode = config.mode;
    let solve = move |case: Result<GraphCase>| case.and_then(|case| solve_case(&case, mode));

    let rendered: Vec<Result<String>> = if config.parallel {
        cases.into_par_iter().map(solve).collect()
    } else {
        cases.into_iter().map(solve).collect()
    };

    let mut summary = RunSummary::default();
    for (index, line) in rendered.into_iter().enumerate() {
        match line {
            Ok(line) => {
                writeln!(output, "{}", line)?;
                summary.solved += 1;
            }
            Err(e) => match config.on_error {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    warn!("Skipping case {}: {}", index + 1, e);
                    summary.skipped += 1;
                }
            },
        }
    }

    output.flush()?;
    info!("Solved {} cases, skipped {}", summary.solved, summary.skipped);
    Ok(summary)
}
