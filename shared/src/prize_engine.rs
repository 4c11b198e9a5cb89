use rand::Rng;

use crate::prize_catalog::{Prize, PrizeCatalog};

/// Resolves a spin to exactly one prize using cumulative-weight sampling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrizeEngine {
    catalog: PrizeCatalog,
}

impl PrizeEngine {
    pub fn new(catalog: PrizeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    pub fn select_winner(&self) -> &Prize {
        let mut rng = rand::thread_rng();
        self.select_winner_with(&mut rng).1
    }

    pub fn select_winner_with<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, &Prize) {
        let draw: f64 = rng.gen();
        self.winner_for_draw(draw)
    }

    /// Walks the catalog in order and returns the first entry whose running
    /// weight total reaches `draw`. Falls back to the last entry if rounding
    /// leaves the total short of the draw.
    pub fn winner_for_draw(&self, draw: f64) -> (usize, &Prize) {
        let draw = if draw.is_nan() { 0.0 } else { draw.clamp(0.0, 1.0) };

        let mut cumulative = 0.0;
        for (index, prize) in self.catalog.prizes().iter().enumerate() {
            cumulative += prize.weight;
            if draw <= cumulative {
                return (index, prize);
            }
        }

        log::debug!("Draw {} exceeded cumulative weight {}, using last prize", draw, cumulative);
        (self.catalog.len() - 1, self.catalog.last())
    }
}
