use thiserror::Error;

use crate::heights::NoiseKind;

// Window and grid geometry shared by both front ends
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const BLOCK_SIZE: u32 = 10;
pub const ISLAND_BLOCK_SIZE: u32 = 4;

pub const PLATES_FPS: u32 = 10;
pub const ISLANDS_FPS: u32 = 60;

// Palette (RGB)
pub const WATER_COLOR: [u8; 3] = [0, 0, 255];
pub const MOUNTAIN_COLOR: [u8; 3] = [139, 69, 19];
pub const BUTTON_COLOR: [u8; 3] = [0, 255, 0];
pub const BUTTON_HOVER_COLOR: [u8; 3] = [0, 200, 0];
pub const TEXT_COLOR: [u8; 3] = [255, 255, 255];

// Ranges the tunable buttons draw from
pub const PLATE_SPEED_RANGE: std::ops::RangeInclusive<i32> = 1..=5;
pub const EARTHQUAKE_PROBABILITY_RANGE: std::ops::Range<f64> = 0.01..0.1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },
    #[error("at least one plate is required")]
    NoPlates,
    #[error("plate speed must be within 1..=5 (got {0})")]
    SpeedOutOfRange(i32),
    #[error("plate at index {index} has id {id}")]
    PlateIdMismatch { index: usize, id: usize },
    #[error("earthquake probability must be within [0, 1] (got {0})")]
    ProbabilityOutOfRange(f64),
    #[error("scale must be a positive finite number (got {0})")]
    InvalidScale(f64),
}

/// How the interaction pass reads plate ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Read the live terrain, including mountains raised earlier in the same pass.
    #[default]
    Sequential,
    /// Read ownership from a copy taken right after every plate has been stamped.
    Snapshot,
}

/// Tunables for the plate simulation. The two buttons mutate
/// `plate_speed` and `earthquake_probability` at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub plate_count: usize,
    pub plate_speed: i32,
    pub earthquake_probability: f64,
    pub interaction: InteractionMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: (WINDOW_WIDTH / BLOCK_SIZE) as usize,
            height: (WINDOW_HEIGHT / BLOCK_SIZE) as usize,
            plate_count: 5,
            plate_speed: 1,
            earthquake_probability: 0.02,
            interaction: InteractionMode::Sequential,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.plate_count == 0 {
            return Err(ConfigError::NoPlates);
        }
        check_speed(self.plate_speed)?;
        check_probability(self.earthquake_probability)
    }
}

pub(crate) fn check_speed(speed: i32) -> Result<(), ConfigError> {
    if PLATE_SPEED_RANGE.contains(&speed) {
        Ok(())
    } else {
        Err(ConfigError::SpeedOutOfRange(speed))
    }
}

pub(crate) fn check_probability(p: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange(p))
    }
}

/// Parameters for the island height pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandConfig {
    pub width: usize,
    pub height: usize,
    // sampling coordinates are (x / scale, y / scale)
    pub scale: f64,
    pub noise: NoiseKind,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            width: (WINDOW_WIDTH / ISLAND_BLOCK_SIZE) as usize,
            height: (WINDOW_HEIGHT / ISLAND_BLOCK_SIZE) as usize,
            scale: 100.0,
            noise: NoiseKind::Uniform,
        }
    }
}

impl IslandConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }
}
