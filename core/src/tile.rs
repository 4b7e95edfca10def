use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a tile, independent of whether it holds a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Revealed(u8),
    Flagged,
}

impl TileState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    coords: Coord2,
    is_mine: bool,
    state: TileState,
}

impl Tile {
    pub fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            state: TileState::Hidden,
        }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub(crate) fn arm(&mut self) {
        self.is_mine = true;
    }

    /// Counts mines among the up-to-8 surrounding tiles, skipping positions the board has no tile for.
    pub fn count_nearby_mines(&self, board: &Board) -> u8 {
        let mut count = 0;
        for coords in NeighborIter::new(self.coords) {
            if board.tile_at(coords).is_some_and(Tile::is_mine) {
                count += 1;
            }
        }
        count
    }

    /// Reveals the tile given its precomputed nearby mine count.
    ///
    /// Mines stay hidden so every reveal on one keeps reporting the hit.
    pub(crate) fn reveal(&mut self, nearby_mines: u8) -> RevealOutcome {
        match (self.state, self.is_mine) {
            (TileState::Hidden, true) => RevealOutcome::Exploded,
            (TileState::Hidden, false) => {
                self.state = TileState::Revealed(nearby_mines);
                RevealOutcome::Cleared(nearby_mines)
            }
            (TileState::Revealed(_) | TileState::Flagged, _) => RevealOutcome::Ignored,
        }
    }

    pub(crate) fn toggle_flag(&mut self) -> MarkOutcome {
        use MarkOutcome::*;
        use TileState::*;

        match self.state {
            Hidden => {
                self.state = Flagged;
                Changed
            }
            Flagged => {
                self.state = Hidden;
                Changed
            }
            Revealed(_) => NoChange,
        }
    }
}
