//! Rover pose and the instruction alphabet that transforms it.

use crate::error::{MissionError, RoverError, RoverResult};
use crate::plateau::{Plateau, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass heading of a rover.
///
/// Serialized as its single-letter form (`"N"`, `"E"`, `"S"`, `"W"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Headings in clockwise order. A right turn advances one slot, a left turn
    /// goes back one, both wrapping.
    pub const CYCLE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn cycle_index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Returns the heading after a quarter turn.
    pub fn rotate(self, turn: Turn) -> Self {
        let len = Self::CYCLE.len();
        let idx = match turn {
            Turn::Left => (self.cycle_index() + len - 1) % len,
            Turn::Right => (self.cycle_index() + 1) % len,
        };
        Self::CYCLE[idx]
    }

    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MissionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            other => Err(MissionError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> Self {
        direction.letter()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A quarter turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

/// A single recognized rover command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Turn 90 degrees anticlockwise (`L`).
    Left,
    /// Turn 90 degrees clockwise (`R`).
    Right,
    /// Step one cell forward (`M`).
    Move,
}

impl Instruction {
    /// Every instruction, in the order the standard symbols are registered.
    pub const STANDARD: [Instruction; 3] =
        [Instruction::Left, Instruction::Right, Instruction::Move];

    /// The conventional symbol for this instruction.
    pub fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Move => 'M',
        }
    }
}

/// A rover's pose: where it is and which way it faces.
///
/// Every transformation returns a new value; a state is never edited in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: Position,
    pub direction: Direction,
}

impl RoverState {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            position: Position::new(x, y),
            direction,
        }
    }

    /// Same position, heading rotated by `turn`.
    pub fn turned(self, turn: Turn) -> Self {
        Self {
            direction: self.direction.rotate(turn),
            ..self
        }
    }

    /// Same heading, position advanced one clamped step on `plateau`.
    pub fn moved(self, plateau: &Plateau) -> Self {
        Self {
            position: plateau.step(self.position, self.direction),
            ..self
        }
    }

    /// Applies one instruction and re-checks the bounds invariant.
    ///
    /// Clamping keeps an in-bounds rover in bounds, but the check runs after
    /// every move regardless and reports [`RoverError::OutOfBoundsMove`].
    pub fn apply(self, instruction: Instruction, plateau: &Plateau) -> RoverResult<Self> {
        match instruction {
            Instruction::Left => Ok(self.turned(Turn::Left)),
            Instruction::Right => Ok(self.turned(Turn::Right)),
            Instruction::Move => {
                let next = self.moved(plateau);
                if plateau.contains(next.position) {
                    Ok(next)
                } else {
                    Err(RoverError::OutOfBoundsMove(next.position))
                }
            }
        }
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.direction
        )
    }
}

/// One entry of a mission: a starting pose and the raw instruction string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverSpec {
    pub start: RoverState,
    pub instructions: String,
}

impl RoverSpec {
    pub fn new(start: RoverState, instructions: impl Into<String>) -> Self {
        Self {
            start,
            instructions: instructions.into(),
        }
    }
}
