use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides which tiles of a board hold mines.
///
/// Implementations must return exactly `config.mines()` distinct in-range coordinates.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> Vec<Coord2>;
}

/// Maps a row-major tile index back to `(x, y)` on a square grid of `size`.
pub(crate) fn index_to_coords(index: usize, size: Coord) -> Coord2 {
    let size = usize::from(size);
    ((index / size) as Coord, (index % size) as Coord)
}
