use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement: every set of `mines` distinct cells is equally likely.
///
/// The rng is kept between calls, so each generated layout is a fresh draw.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &BoardConfig) -> Result<MineLayout> {
        // a board needs at least one safe cell, so full boards are refused
        let config = config.validate()?;

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut free_cells = config.total_cells();

        for _ in 0..config.mines {
            // rank among the cells that are still free
            let mut place = self.rng.random_range(0..free_cells);
            for cell in mine_mask.iter_mut().filter(|cell| !**cell) {
                if place == 0 {
                    *cell = true;
                    break;
                }
                place -= 1;
            }
            free_cells -= 1;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::trace!("placed {} mines", layout.mine_count());
        Ok(layout)
    }
}
