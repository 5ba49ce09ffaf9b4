use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    ConfigError, EARTHQUAKE_PROBABILITY_RANGE, InteractionMode, PLATE_SPEED_RANGE, SimConfig,
    check_probability, check_speed,
};
use crate::earthquake::{Earthquake, roll_earthquake};
use crate::grid::TerrainGrid;
use crate::plate::{Plate, initialize_plates};

/// What happened during one [`Simulation::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub earthquake: Option<Earthquake>,
    // blocks that found a foreign owner during the interaction pass
    pub mountain_events: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimStats {
    pub plate_speed: i32,
    pub earthquake_probability: f64,
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plate speed: {}, Earthquake probability: {}",
            self.plate_speed, self.earthquake_probability
        )
    }
}

pub struct Simulation {
    config: SimConfig,
    terrain: TerrainGrid,
    plates: Vec<Plate>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let terrain = TerrainGrid::new(config.width, config.height);
        let plates = initialize_plates(
            config.plate_count,
            config.width,
            config.height,
            config.plate_speed,
            &mut rng,
        );
        Ok(Self {
            config,
            terrain,
            plates,
            rng,
        })
    }

    /// Build a simulation around hand-placed plates.
    pub fn from_parts(
        config: SimConfig,
        plates: Vec<Plate>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        for (index, plate) in plates.iter().enumerate() {
            if plate.id != index {
                return Err(ConfigError::PlateIdMismatch {
                    index,
                    id: plate.id,
                });
            }
            check_speed(plate.speed)?;
        }
        Ok(Self {
            terrain: TerrainGrid::new(config.width, config.height),
            config,
            plates,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut TerrainGrid {
        &mut self.terrain
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    // Advance one frame: move all -> stamp all -> interact all -> earthquake roll
    pub fn tick(&mut self) -> TickReport {
        for plate in &mut self.plates {
            plate.translate();
        }

        for plate in &self.plates {
            plate.handle_collision(&mut self.terrain);
        }

        let snapshot = match self.config.interaction {
            InteractionMode::Sequential => None,
            InteractionMode::Snapshot => Some(self.terrain.clone()),
        };
        let plate_count = self.plates.len();
        let mut mountain_events = 0;
        for plate in &self.plates {
            mountain_events +=
                plate.interact_with_plates(&mut self.terrain, snapshot.as_ref(), plate_count);
        }

        let earthquake = roll_earthquake(
            self.terrain.width(),
            self.terrain.height(),
            self.config.earthquake_probability,
            &mut self.rng,
        );
        if let Some(quake) = &earthquake {
            debug!("{quake}");
            self.terrain.apply_earthquake(quake);
        }

        TickReport {
            earthquake,
            mountain_events,
        }
    }

    pub fn stats(&self) -> SimStats {
        SimStats {
            plate_speed: self.config.plate_speed,
            earthquake_probability: self.config.earthquake_probability,
        }
    }

    /// Set the speed of every plate, including ones already moving.
    pub fn set_plate_speed(&mut self, speed: i32) -> Result<(), ConfigError> {
        check_speed(speed)?;
        self.config.plate_speed = speed;
        for plate in &mut self.plates {
            plate.speed = speed;
        }
        debug!("plate speed set to {speed}");
        Ok(())
    }

    pub fn set_earthquake_probability(&mut self, probability: f64) -> Result<(), ConfigError> {
        check_probability(probability)?;
        self.config.earthquake_probability = probability;
        debug!("earthquake probability set to {probability}");
        Ok(())
    }

    pub fn randomize_plate_speed(&mut self) -> i32 {
        let speed = self.rng.gen_range(PLATE_SPEED_RANGE);
        self.config.plate_speed = speed;
        for plate in &mut self.plates {
            plate.speed = speed;
        }
        debug!("plate speed randomized to {speed}");
        speed
    }

    pub fn randomize_earthquake_probability(&mut self) -> f64 {
        let probability = self.rng.gen_range(EARTHQUAKE_PROBABILITY_RANGE);
        self.config.earthquake_probability = probability;
        debug!("earthquake probability randomized to {probability}");
        probability
    }
}
