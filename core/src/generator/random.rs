use super::*;

/// Uniform placement: every set of `mines` distinct tiles is equally likely for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let size = config.size();
        let total_tiles = usize::from(config.total_tiles());
        let mines = usize::from(config.mines());

        // optimize for full boards
        if mines >= total_tiles {
            log::debug!("Minefield full, placing all {} mines", total_tiles);
            return (0..total_tiles)
                .map(|index| index_to_coords(index, size))
                .collect();
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        rand::seq::index::sample(&mut rng, total_tiles, mines)
            .into_iter()
            .map(|index| index_to_coords(index, size))
            .collect()
    }
}
