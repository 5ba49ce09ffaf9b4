// core holds the plate simulation and the island height pass; no windowing here
pub mod button;
pub mod config;
pub mod earthquake;
pub mod grid;
pub mod heights;
pub mod perlin2;
pub mod plate;
pub mod render;
pub mod sim;

pub use config::{ConfigError, IslandConfig, SimConfig};
pub use earthquake::Earthquake;
pub use grid::{HeightMap2D, TerrainGrid};
pub use heights::{HeightSampler, NoiseKind};
pub use perlin2::Perlin2D;
pub use plate::Plate;
pub use sim::{SimStats, Simulation, TickReport};

// Noise that can be sampled at any 2D point
pub trait NoiseGenerator {
    fn get2(&self, x: f64, y: f64) -> f64;
}
