use super::*;

/// Places mines at a predetermined list of coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMineGenerator {
    /// Duplicate coordinates collapse into one mine.
    pub fn new(mine_coords: &[Coord2]) -> Self {
        let mut mine_coords = mine_coords.to_vec();
        mine_coords.sort_unstable();
        mine_coords.dedup();
        Self { mine_coords }
    }

    pub fn mine_count(&self) -> usize {
        self.mine_coords.len()
    }

    pub fn validate(&self, size: Coord) -> Result<()> {
        if self
            .mine_coords
            .iter()
            .all(|&(x, y)| x < size && y < size)
        {
            Ok(())
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: BoardConfig) -> Vec<Coord2> {
        if self.mine_coords.len() != usize::from(config.mines()) {
            log::warn!(
                "Fixed layout has {} mines but config requests {}",
                self.mine_coords.len(),
                config.mines()
            );
        }
        self.mine_coords
    }
}
