use crate::*;

/// Kind of pointer gesture the presentation layer resolved onto a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Primary click, reveals.
    Primary,
    /// Secondary click, toggles a flag.
    Secondary,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
        }
    }
}

/// One game session: the board currently being played and the config it was built from.
///
/// Owned by whoever drives the game and handed by reference to the input and rendering layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    config: BoardConfig,
    board: Board,
}

impl Session {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            board: Board::with_seed(config, seed),
        }
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            config: board.config(),
            board,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn click(&mut self, coords: Coord2, gesture: Gesture) -> ClickOutcome {
        log::trace!("Tile clicked: {:?} ({:?})", coords, gesture);
        match gesture {
            Gesture::Primary => ClickOutcome::Reveal(self.board.reveal(coords)),
            Gesture::Secondary => ClickOutcome::Mark(self.board.toggle_flag(coords)),
        }
    }

    /// Resolves signed grid coordinates first, clicks outside the grid change nothing.
    pub fn click_at(&mut self, x: i64, y: i64, gesture: Gesture) -> Option<ClickOutcome> {
        let coords = self.board.locate(x, y)?;
        Some(self.click(coords, gesture))
    }

    /// Throws the current board away and builds a fresh one with the same config.
    pub fn restart(&mut self, seed: u64) {
        log::debug!("Restarting session");
        self.board = Board::with_seed(self.config, seed);
    }
}
