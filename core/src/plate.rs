use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::TerrainGrid;

const DIRECTION_STEPS: [i32; 3] = [-1, 0, 1];

// A rigid cluster of grid cells that moves together.
// `blocks` may hold off-grid coordinates; every grid access is bounds-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub id: usize,
    pub blocks: BTreeSet<(i32, i32)>,
    pub direction: (i32, i32), // each component in {-1, 0, 1}
    pub speed: i32,
    pub color: [u8; 3],
}

impl Plate {
    pub fn new(id: usize, x: i32, y: i32, direction: (i32, i32), speed: i32, color: [u8; 3]) -> Self {
        Self {
            id,
            blocks: BTreeSet::from([(x, y)]),
            direction,
            speed,
            color,
        }
    }

    // Random direction in {-1,0,1}^2 (may be (0, 0)) and a color with every channel in [50, 255]
    pub fn random<R: Rng + ?Sized>(id: usize, x: i32, y: i32, speed: i32, rng: &mut R) -> Self {
        let color = [
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
        ];
        let dx = *DIRECTION_STEPS.choose(rng).unwrap_or(&0);
        let dy = *DIRECTION_STEPS.choose(rng).unwrap_or(&0);
        Self::new(id, x, y, (dx, dy), speed, color)
    }

    // Terrain marker written for this plate
    #[inline]
    pub fn marker(&self) -> u32 {
        self.id as u32 + 1
    }

    pub fn add_block(&mut self, x: i32, y: i32) {
        self.blocks.insert((x, y));
    }

    /// Shift every block by `direction * speed`. Blocks may leave the grid; coordinates saturate at the `i32` limits.
    pub fn translate(&mut self) {
        let dx = self.direction.0.saturating_mul(self.speed);
        let dy = self.direction.1.saturating_mul(self.speed);
        self.blocks = self
            .blocks
            .iter()
            .map(|&(x, y)| (x.saturating_add(dx), y.saturating_add(dy)))
            .collect();
    }

    /// Stamp this plate's marker on every in-bounds block, overwriting whatever
    /// was there. When plates overlap the last one stamped wins.
    pub fn handle_collision(&self, terrain: &mut TerrainGrid) {
        for &(x, y) in &self.blocks {
            terrain.set(x, y, self.marker());
        }
    }

    /// For every in-bounds block owned by a different plate, raise mountains there.
    ///
    /// Ownership is read from `owners` when given, otherwise from `terrain`
    /// itself, in which case mountains raised earlier in this call are visible
    /// to later blocks. Markers that don't name one of the `plate_count`
    /// plates are ignored.
    pub fn interact_with_plates(
        &self,
        terrain: &mut TerrainGrid,
        owners: Option<&TerrainGrid>,
        plate_count: usize,
    ) -> usize {
        let mut raised = 0;
        for &(x, y) in &self.blocks {
            let marker = match owners {
                Some(snapshot) => snapshot.get(x, y),
                None => terrain.get(x, y),
            };
            let Some(owner) = marker.and_then(|m| m.checked_sub(1)) else {
                continue;
            };
            let owner = owner as usize;
            if owner != self.id && owner < plate_count {
                terrain.create_mountains(x, y);
                raised += 1;
            }
        }
        raised
    }
}

// One single-cell plate per id at a uniformly random cell
pub fn initialize_plates<R: Rng + ?Sized>(
    count: usize,
    width: usize,
    height: usize,
    speed: i32,
    rng: &mut R,
) -> Vec<Plate> {
    (0..count)
        .map(|id| {
            let x = rng.gen_range(0..width) as i32;
            let y = rng.gen_range(0..height) as i32;
            Plate::random(id, x, y, speed, rng)
        })
        .collect()
}
