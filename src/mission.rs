//! Mission input: the plateau and the ordered list of rovers to run on it.

use crate::error::MissionError;
use crate::plateau::Plateau;
use crate::rover::{Direction, RoverSpec, RoverState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed for one batch run.
///
/// JSON form:
///
/// ```json
/// {
///   "plateau": { "max_x": 10, "max_y": 15 },
///   "rovers": [
///     { "start": { "position": [1, 2], "direction": "N" }, "instructions": "LMLMLMLMM" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub plateau: Plateau,
    #[serde(default)]
    pub rovers: Vec<RoverSpec>,
}

impl Mission {
    pub fn new(plateau: Plateau, rovers: Vec<RoverSpec>) -> Self {
        Self { plateau, rovers }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MissionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MissionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The built-in batch used when no mission file is given.
    ///
    /// The third rover carries a deliberately invalid `V` to exercise the
    /// failure path.
    pub fn sample() -> Self {
        Self::new(
            Plateau::from_bounds_unchecked(10, 15),
            vec![
                RoverSpec::new(RoverState::new(1, 2, Direction::North), "LMLMLMLMM"),
                RoverSpec::new(RoverState::new(3, 3, Direction::West), "MMRMMRMRRM"),
                RoverSpec::new(RoverState::new(4, 6, Direction::South), "LLMMMRRLV"),
            ],
        )
    }
}
