//! Interpreter that drives a single rover through its instruction string.
//!
//! The entry point is [`RoverInterpreter`]. Configure it with a [`RoverConfig`],
//! register symbol-to-instruction mappings via [`RoverInterpreter::set_op`] or
//! [`RoverInterpreter::populate_standard_symbols`], then call
//! [`RoverInterpreter::run`] with a starting pose and a [`Plateau`].

use crate::error::{RoverError, RoverResult};
use crate::plateau::Plateau;
use crate::rover::{Instruction, RoverState};
use std::collections::HashMap;

/// Configuration for instruction interpretation.
#[derive(Clone, Debug, Default)]
pub struct RoverConfig {
    /// Retry a failed symbol lookup with the character's uppercase form, so
    /// `lmr` is read the same as `LMR`. Default: `false`.
    pub case_insensitive: bool,
}

/// Interprets instruction strings against a plateau.
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    op_map: HashMap<char, Instruction>,
    config: RoverConfig,
}

impl Default for RoverInterpreter {
    /// An interpreter with the default config and the standard `L`/`R`/`M` symbols.
    fn default() -> Self {
        let mut interpreter = Self::new(RoverConfig::default());
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl RoverInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// With an empty map every character is rejected; register symbols with
    /// [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) first.
    pub fn new(config: RoverConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, Instruction>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns an [`Instruction`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: Instruction) {
        self.op_map.insert(symbol, op);
    }

    /// Registers `L`, `R` and `M`.
    pub fn populate_standard_symbols(&mut self) {
        for op in Instruction::STANDARD {
            self.set_op(op.symbol(), op);
        }
    }

    /// Classifies one character. `None` means the symbol is not recognized.
    pub fn decode(&self, symbol: char) -> Option<Instruction> {
        if let Some(op) = self.op_map.get(&symbol) {
            return Some(*op);
        }
        if !self.config.case_insensitive {
            return None;
        }
        // Only fold when the uppercase form is a single character.
        let mut upper = symbol.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => self.op_map.get(&u).copied(),
            _ => None,
        }
    }

    /// Runs `instructions` from `start` and returns the final pose.
    ///
    /// Fails fast: the starting pose is checked against `plateau` before any
    /// symbol is read, and the first unrecognized symbol or out-of-bounds move
    /// ends the run. An empty instruction string returns `start` unchanged.
    pub fn run(
        &self,
        start: RoverState,
        instructions: &str,
        plateau: &Plateau,
    ) -> RoverResult<RoverState> {
        self.walk(start, instructions, plateau, |_| {})
    }

    /// Like [`run`](Self::run), but returns every pose the rover passed through:
    /// `start` first, then one entry per applied instruction.
    pub fn run_traced(
        &self,
        start: RoverState,
        instructions: &str,
        plateau: &Plateau,
    ) -> RoverResult<Vec<RoverState>> {
        let mut trace = vec![start];
        self.walk(start, instructions, plateau, |state| trace.push(state))?;
        Ok(trace)
    }

    fn walk(
        &self,
        start: RoverState,
        instructions: &str,
        plateau: &Plateau,
        mut on_step: impl FnMut(RoverState),
    ) -> RoverResult<RoverState> {
        if !plateau.contains(start.position) {
            let err = RoverError::OutOfBoundsStart(start.position);
            log::warn!("{err}");
            return Err(err);
        }

        let mut state = start;
        for symbol in instructions.chars() {
            let Some(op) = self.decode(symbol) else {
                let err = RoverError::InvalidInstruction(symbol);
                log::warn!("{err}");
                return Err(err);
            };

            state = state.apply(op, plateau).inspect_err(|err| log::warn!("{err}"))?;
            log::trace!("{symbol} -> {state}");
            on_step(state);
        }

        Ok(state)
    }
}
