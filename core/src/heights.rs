use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::NoiseGenerator;
use crate::config::{ConfigError, IslandConfig};
use crate::grid::HeightMap2D;
use crate::perlin2::Perlin2D;

const PERLIN_OCTAVES: usize = 4;
const PERLIN_PERSISTENCE: f64 = 0.5;

/// Source of per-cell island heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseKind {
    /// Independent uniform sample per call. Position, center and scale are
    /// ignored, so neighbouring cells are uncorrelated and every run differs.
    #[default]
    Uniform,
    /// Coherent gradient noise at `(x / scale, y / scale)`, faded out with
    /// distance from the island center.
    Perlin,
}

pub struct HeightSampler {
    config: IslandConfig,
    rng: StdRng,
    perlin: Perlin2D,
}

impl HeightSampler {
    pub fn new(config: IslandConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: IslandConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: IslandConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let perlin = Perlin2D::new(rng.r#gen(), PERLIN_OCTAVES, PERLIN_PERSISTENCE);
        Ok(Self {
            config,
            rng,
            perlin,
        })
    }

    // Left and right island centers, in cell coordinates
    pub fn centers(&self) -> [(f64, f64); 2] {
        let w = self.config.width as f64;
        let cy = self.config.height as f64 / 2.0;
        [(w / 4.0, cy), (w * 3.0 / 4.0, cy)]
    }

    /// Height contribution of one island at (x, y). Not clamped.
    pub fn sample(&mut self, x: usize, y: usize, center: (f64, f64)) -> f32 {
        match self.config.noise {
            NoiseKind::Uniform => self.rng.r#gen::<f32>(),
            NoiseKind::Perlin => {
                let scale = self.config.scale;
                let n = self.perlin.get2(x as f64 / scale, y as f64 / scale);
                let (dx, dy) = (x as f64 - center.0, y as f64 - center.1);
                // Islands fade to nothing a quarter of the grid width from their center
                let radius = (self.config.width as f64 / 4.0).max(1.0);
                let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / radius).max(0.0);
                (((n + 1.0) * 0.5) * falloff) as f32
            }
        }
    }

    /// Max of the two island samples per cell, clamped to [0, 1].
    pub fn generate(&mut self) -> HeightMap2D {
        let [left, right] = self.centers();
        let (w, h) = (self.config.width, self.config.height);
        debug!("sampling {w}x{h} heights ({:?} noise)", self.config.noise);

        let mut map = vec![vec![0.0f32; w]; h];
        for (y, row) in map.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let a = self.sample(x, y, left);
                let b = self.sample(x, y, right);
                *cell = a.max(b).clamp(0.0, 1.0);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: usize, height: usize, noise: NoiseKind) -> IslandConfig {
        IslandConfig {
            width,
            height,
            scale: 20.0,
            noise,
        }
    }

    #[test]
    fn heights_within_unit_interval() {
        for &(w, h) in &[(1, 1), (3, 17), (64, 48), (200, 150)] {
            for noise in [NoiseKind::Uniform, NoiseKind::Perlin] {
                let map = HeightSampler::with_seed(config(w, h, noise), 42)
                    .unwrap()
                    .generate();
                assert_eq!(map.len(), h);
                assert!(map.iter().all(|row| row.len() == w));
                assert!(map.iter().flatten().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }

    #[test]
    fn uniform_ignores_position_and_scale() {
        let mut a = HeightSampler::with_seed(config(10, 10, NoiseKind::Uniform), 8).unwrap();
        let mut cfg = config(10, 10, NoiseKind::Uniform);
        cfg.scale = 5000.0;
        let mut b = HeightSampler::with_seed(cfg, 8).unwrap();
        // same RNG stream, wildly different arguments
        assert_eq!(a.sample(0, 0, (0.0, 0.0)), b.sample(9, 3, (7.0, 1.0)));
    }

    #[test]
    fn perlin_is_flat_far_from_islands() {
        let mut s = HeightSampler::with_seed(config(40, 20, NoiseKind::Perlin), 3).unwrap();
        let [left, _] = s.centers();
        assert_eq!(s.sample(39, 0, left), 0.0);
    }

    #[test]
    fn perlin_is_repeatable() {
        let a = HeightSampler::with_seed(config(30, 20, NoiseKind::Perlin), 17)
            .unwrap()
            .generate();
        let b = HeightSampler::with_seed(config(30, 20, NoiseKind::Perlin), 17)
            .unwrap()
            .generate();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_scale() {
        let mut cfg = config(4, 4, NoiseKind::Uniform);
        cfg.scale = 0.0;
        assert_eq!(
            HeightSampler::new(cfg).err(),
            Some(ConfigError::InvalidScale(0.0))
        );
    }
}
