//! Plateau bounds and clamped movement on the grid.

use crate::error::MissionError;
use crate::rover::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid coordinate `(x, y)`.
///
/// Signed so that a starting pose left of or below the origin can be represented
/// (and rejected) instead of failing to parse.
pub type Position = IVec2;

/// The rectangular grid all rovers move on.
///
/// Covers `[0, max_x] × [0, max_y]` inclusive. Bounds are validated once at
/// construction and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlateauBounds", into = "PlateauBounds")]
pub struct Plateau {
    max: IVec2,
}

/// Wire form of a [`Plateau`], checked by [`Plateau::new`] on the way in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct PlateauBounds {
    max_x: i32,
    max_y: i32,
}

impl Plateau {
    /// Creates a plateau with inclusive upper bounds `(max_x, max_y)`.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, MissionError> {
        if max_x < 0 || max_y < 0 {
            return Err(MissionError::NegativePlateau { max_x, max_y });
        }
        Ok(Self {
            max: IVec2::new(max_x, max_y),
        })
    }

    /// Builds a plateau from bounds already known to be non-negative.
    pub(crate) const fn from_bounds_unchecked(max_x: i32, max_y: i32) -> Self {
        Self {
            max: IVec2::new(max_x, max_y),
        }
    }

    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    /// Returns `true` iff `position` lies inside the plateau, edges included.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x <= self.max.x && position.y >= 0 && position.y <= self.max.y
    }

    /// Advances `position` one cell towards `direction`.
    ///
    /// Only the axis of travel changes, and it is clamped to the plateau edge:
    /// a step that would leave the grid leaves the rover where it is. The other
    /// axis is passed through untouched, so an out-of-bounds input can still
    /// produce an out-of-bounds output.
    pub fn step(&self, position: Position, direction: Direction) -> Position {
        let IVec2 { x, y } = position;
        match direction {
            Direction::North => IVec2::new(x, y.saturating_add(1).min(self.max.y)),
            Direction::East => IVec2::new(x.saturating_add(1).min(self.max.x), y),
            Direction::South => IVec2::new(x, y.saturating_sub(1).max(0)),
            Direction::West => IVec2::new(x.saturating_sub(1).max(0), y),
        }
    }
}

impl TryFrom<PlateauBounds> for Plateau {
    type Error = MissionError;

    fn try_from(bounds: PlateauBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.max_x, bounds.max_y)
    }
}

impl From<Plateau> for PlateauBounds {
    fn from(plateau: Plateau) -> Self {
        Self {
            max_x: plateau.max.x,
            max_y: plateau.max.y,
        }
    }
}
