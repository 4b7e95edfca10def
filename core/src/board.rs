use alloc::vec::Vec;
use ndarray::Array2;

use crate::types::nd_index;
use crate::*;

/// Square grid of tiles with mines assigned once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    tiles: Array2<Tile>,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Builds a board from any mine generator.
    ///
    /// Fails unless the generator armed exactly `config.mines()` distinct in-range tiles.
    pub fn new(config: BoardConfig, generator: impl MineGenerator) -> Result<Self> {
        let (tiles, armed) = Self::arm_tiles(config, generator.generate(config));
        if armed != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                armed,
                config.mines()
            );
            return Err(GameError::InvalidConfiguration {
                size: config.size().into(),
                mines: config.mines().into(),
            });
        }
        Ok(Self::from_tiles(config, tiles))
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        let mine_coords = RandomMineGenerator::new(seed).generate(config);
        let (tiles, armed) = Self::arm_tiles(config, mine_coords);
        debug_assert_eq!(armed, config.mines());
        Self::from_tiles(config, tiles)
    }

    #[cfg(feature = "std")]
    pub fn with_entropy(config: BoardConfig) -> Self {
        use rand::Rng;

        Self::with_seed(config, rand::rng().random())
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let generator = FixedMineGenerator::new(mine_coords);
        generator.validate(size)?;
        let mines = CellCount::try_from(generator.mine_count()).map_err(|_| {
            GameError::InvalidConfiguration {
                size: size.into(),
                mines: generator.mine_count() as i64,
            }
        })?;
        let config = BoardConfig::new(size, mines)?;
        Self::new(config, generator)
    }

    /// Lays out hidden tiles and arms the given coordinates, skipping repeats and positions off the grid.
    fn arm_tiles(
        config: BoardConfig,
        mine_coords: impl IntoIterator<Item = Coord2>,
    ) -> (Array2<Tile>, CellCount) {
        let size = usize::from(config.size());
        let mut tiles = Array2::from_shape_fn((size, size), |(x, y)| {
            Tile::new((x as Coord, y as Coord))
        });

        let mut armed: CellCount = 0;
        for coords in mine_coords {
            match tiles.get_mut(nd_index(coords)) {
                Some(tile) if !tile.is_mine() => {
                    tile.arm();
                    armed += 1;
                }
                Some(_) => log::warn!("Mine placed twice at {:?}", coords),
                None => log::warn!("Mine placed outside the grid at {:?}", coords),
            }
        }
        (tiles, armed)
    }

    fn from_tiles(config: BoardConfig, tiles: Array2<Tile>) -> Self {
        log::debug!(
            "Board ready: {}x{} with {} mines",
            config.size(),
            config.size(),
            config.mines()
        );

        Self {
            config,
            tiles,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Looks up a tile, `None` for anything outside the grid.
    pub fn tile_at(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(nd_index(coords))
    }

    /// Converts signed grid coordinates into in-range board coordinates.
    pub fn locate(&self, x: i64, y: i64) -> Option<Coord2> {
        let size = i64::from(self.size());
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some((x as Coord, y as Coord))
        } else {
            None
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.tiles
            .iter()
            .filter(|tile| tile.is_mine())
            .map(Tile::coords)
            .collect()
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        log::trace!("Reveal requested at {:?}", coords);

        let Some(tile) = self.tile_at(coords) else {
            return RevealOutcome::Ignored;
        };
        let nearby_mines = tile.count_nearby_mines(self);

        let outcome = self.tiles[nd_index(coords)].reveal(nearby_mines);
        if let RevealOutcome::Cleared(_) = outcome {
            self.revealed_count += 1;
        }
        outcome
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        log::trace!("Flag toggle requested at {:?}", coords);

        let Some(tile) = self.tiles.get_mut(nd_index(coords)) else {
            return MarkOutcome::NoChange;
        };

        let outcome = tile.toggle_flag();
        if outcome.has_update() {
            match tile.state() {
                TileState::Flagged => self.flagged_count += 1,
                _ => self.flagged_count -= 1,
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_at_matches_coordinates() {
        let board = Board::with_seed(BoardConfig::default(), 11);

        for x in 0..9 {
            for y in 0..9 {
                assert_eq!(board.tile_at((x, y)).unwrap().coords(), (x, y));
            }
        }
    }

    #[test]
    fn tile_at_out_of_range_is_none() {
        let board = Board::with_seed(BoardConfig::new(3, 1).unwrap(), 0);

        assert!(board.tile_at((3, 0)).is_none());
        assert!(board.tile_at((0, 3)).is_none());
        assert!(board.tile_at((Coord::MAX, Coord::MAX)).is_none());
    }

    #[test]
    fn locate_rejects_negative_and_oversized() {
        let board = Board::with_seed(BoardConfig::new(4, 0).unwrap(), 0);

        assert_eq!(board.locate(3, 0), Some((3, 0)));
        assert_eq!(board.locate(-1, 0), None);
        assert_eq!(board.locate(0, 4), None);
        assert_eq!(board.locate(i64::MIN, i64::MAX), None);
    }

    #[test]
    fn setup_leaves_every_tile_hidden() {
        let board = Board::with_seed(BoardConfig::new(9, 10).unwrap(), 5);

        assert_eq!(board.tiles().filter(|tile| tile.is_mine()).count(), 10);
        assert!(board.tiles().all(|tile| tile.state().is_hidden()));
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn reveal_counts_neighbors() {
        let mut board = Board::from_mine_coords(3, &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.reveal((1, 1)), RevealOutcome::Cleared(2));
        assert_eq!(board.reveal((2, 0)), RevealOutcome::Cleared(0));
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Exploded);
        assert_eq!(board.revealed_count(), 2);
    }

    #[test]
    fn reveal_twice_is_noop() {
        let mut board = Board::from_mine_coords(3, &[(0, 0)]).unwrap();

        assert_eq!(board.reveal((1, 0)), RevealOutcome::Cleared(1));
        assert_eq!(board.reveal((1, 0)), RevealOutcome::Ignored);
        assert_eq!(board.tile_at((1, 0)).unwrap().state(), TileState::Revealed(1));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn reveal_outside_grid_is_ignored() {
        let mut board = Board::with_seed(BoardConfig::new(3, 0).unwrap(), 0);

        assert_eq!(board.reveal((3, 3)), RevealOutcome::Ignored);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn flags_are_counted_and_block_reveal() {
        let mut board = Board::from_mine_coords(2, &[(1, 1)]).unwrap();

        assert_eq!(board.toggle_flag((1, 1)), MarkOutcome::Changed);
        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.flagged_count(), 2);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Ignored);

        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.flagged_count(), 1);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Cleared(1));
        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(board.toggle_flag((5, 5)), MarkOutcome::NoChange);
        assert_eq!(board.flagged_count(), 1);
    }

    #[test]
    fn new_rejects_generator_with_too_few_mines() {
        let config = BoardConfig::new(3, 5).unwrap();

        assert_eq!(
            Board::new(config, FixedMineGenerator::new(&[(0, 0)])),
            Err(GameError::InvalidConfiguration { size: 3, mines: 5 })
        );
    }

    #[test]
    fn new_rejects_generator_with_stray_mines() {
        let config = BoardConfig::new(3, 2).unwrap();

        assert!(Board::new(config, FixedMineGenerator::new(&[(0, 0), (3, 0)])).is_err());
    }

    #[test]
    fn new_accepts_exact_layout() {
        let config = BoardConfig::new(3, 2).unwrap();
        let board = Board::new(config, FixedMineGenerator::new(&[(0, 0), (2, 1)])).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.mine_coords(), [(0, 0), (2, 1)]);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_range() {
        assert_eq!(
            Board::from_mine_coords(2, &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }
}
