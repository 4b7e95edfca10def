#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod session;
mod tile;
mod types;

/// Grid size and mine count for one game.
///
/// Always valid once built: the grid is at least 1x1 and the mines fit on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    size: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines > mult(size, size) {
            return Err(GameError::InvalidConfiguration {
                size: size.into(),
                mines: mines.into(),
            });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Builds a config from signed values handed over by an outer layer.
    pub fn from_raw(size: i64, mines: i64) -> Result<Self> {
        let invalid = GameError::InvalidConfiguration { size, mines };
        let size = Coord::try_from(size).map_err(|_| invalid)?;
        let mines = CellCount::try_from(mines).map_err(|_| invalid)?;
        Self::new(size, mines)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(9, 10)
    }
}

#[derive(Deserialize)]
struct RawBoardConfig {
    size: i64,
    mines: i64,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::from_raw(raw.size, raw.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a reveal request on a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Tile was safe and is now revealed, carrying its nearby mine count.
    Cleared(u8),
    /// Tile holds a mine.
    Exploded,
    /// Nothing to reveal: already revealed, flagged, or outside the grid.
    Ignored,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Cleared(_) => true,
            Exploded => true,
            Ignored => false,
        }
    }
}
