use std::fmt;

use rand::Rng;

pub const MIN_MAGNITUDE: u32 = 4;
pub const MAX_MAGNITUDE: u32 = 9;
// Half-width of the damaged block (7x7)
pub const QUAKE_RADIUS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Earthquake {
    pub x: i32,
    pub y: i32,
    pub magnitude: u32,
}

impl fmt::Display for Earthquake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Earthquake at ({}, {}) with magnitude {}",
            self.x, self.y, self.magnitude
        )
    }
}

// One Bernoulli trial: with `probability`, pick a uniformly random cell and
// a magnitude in MIN_MAGNITUDE..=MAX_MAGNITUDE. Trials are independent per call.
pub fn roll_earthquake<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    probability: f64,
    rng: &mut R,
) -> Option<Earthquake> {
    if width == 0 || height == 0 || !rng.gen_bool(probability.clamp(0.0, 1.0)) {
        return None;
    }
    Some(Earthquake {
        x: rng.gen_range(0..width) as i32,
        y: rng.gen_range(0..height) as i32,
        magnitude: rng.gen_range(MIN_MAGNITUDE..=MAX_MAGNITUDE),
    })
}
