//! Batch execution of rovers and reporting of their outcomes.

use crate::error::RoverResult;
use crate::interpreter::RoverInterpreter;
use crate::plateau::Plateau;
use crate::rover::{RoverSpec, RoverState};

/// The result of running one rover from a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverOutcome {
    /// 1-based position of the rover in the input list.
    pub index: usize,
    pub result: RoverResult<RoverState>,
}

impl RoverOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Receives progress of a batch run.
///
/// This is the only place a run becomes observable; the interpreter itself
/// never prints.
pub trait ReportSink {
    fn rover_started(&mut self, index: usize, spec: &RoverSpec);
    fn rover_finished(&mut self, outcome: &RoverOutcome);
}

/// Writes human-readable progress lines. Failures go to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn format_started(index: usize) -> String {
        format!("Starting Rover {index}...")
    }

    /// The result line for `outcome`: `x y D` on success, the error otherwise.
    pub fn format_finished(outcome: &RoverOutcome) -> String {
        match &outcome.result {
            Ok(state) => format!("Rover {} final position: {state}", outcome.index),
            Err(err) => format!(
                "Rover {} encountered an error and could not complete its instructions: {err}",
                outcome.index
            ),
        }
    }
}

impl ReportSink for ConsoleSink {
    fn rover_started(&mut self, index: usize, _spec: &RoverSpec) {
        println!("{}", Self::format_started(index));
    }

    fn rover_finished(&mut self, outcome: &RoverOutcome) {
        let line = Self::format_finished(outcome);
        if outcome.is_success() {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Counts of succeeded and failed rovers in a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[RoverOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut acc, outcome| {
            if outcome.is_success() {
                acc.succeeded += 1;
            } else {
                acc.failed += 1;
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Runs every rover in `specs` in input order and reports each to `sink`.
///
/// Rovers are independent: a failing rover is reported and the batch moves on.
/// The returned outcomes are in input order, one per spec.
pub fn run_all(
    interpreter: &RoverInterpreter,
    specs: &[RoverSpec],
    plateau: &Plateau,
    sink: &mut dyn ReportSink,
) -> Vec<RoverOutcome> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let index = i + 1;
            sink.rover_started(index, spec);
            log::debug!(
                "rover {index}: start {} with {} instruction(s)",
                spec.start,
                spec.instructions.chars().count()
            );

            let outcome = RoverOutcome {
                index,
                result: interpreter.run(spec.start, &spec.instructions, plateau),
            };
            sink.rover_finished(&outcome);
            outcome
        })
        .collect()
}
