//! Farm grid that owns every crop
//!
//! Each cell holds `Option<Crop>`: `None` is untilled soil. Tool operations
//! return `Ok(false)` when the cell is not in the right state and only fail
//! with an error when the coordinate is outside the grid.

use log::debug;

use super::clock::{Clock, SystemClock};
use super::config::FarmConfig;
use super::crop::Crop;
use super::error::FarmError;
use super::types::{CellPos, CropStage, Species};

/// Fixed-size grid of crops plus the clock that times their growth
#[derive(Debug, Clone)]
pub struct Farm<C: Clock = SystemClock> {
    width: usize,
    height: usize,
    /// Row-major, `y * width + x`
    grid: Vec<Option<Crop>>,
    clock: C,
    default_species: Species,
    growth_duration: f64,
    intermediate_stages: Vec<CropStage>,
}

impl Farm<SystemClock> {
    pub fn new(config: &FarmConfig) -> Result<Self, FarmError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Farm<C> {
    /// Build an empty farm timed by `clock`. The config is validated first.
    pub fn with_clock(config: &FarmConfig, clock: C) -> Result<Self, FarmError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            grid: vec![None; config.width * config.height],
            clock,
            default_species: Species::default(),
            growth_duration: config.growth_duration,
            intermediate_stages: config.intermediate_stages.clone(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current clock reading in seconds
    pub fn now(&self) -> f64 {
        self.clock.now_secs()
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: CellPos) -> Result<usize, FarmError> {
        if !self.contains(pos) {
            return Err(FarmError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y * self.width + pos.x)
    }

    fn slot_mut(&mut self, pos: CellPos) -> Result<&mut Option<Crop>, FarmError> {
        let index = self.index(pos)?;
        Ok(&mut self.grid[index])
    }

    /// The crop occupying a cell, if any
    pub fn cell(&self, pos: CellPos) -> Result<Option<&Crop>, FarmError> {
        let index = self.index(pos)?;
        Ok(self.grid[index].as_ref())
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Option<&Crop>)> + '_ {
        self.grid.iter().enumerate().map(move |(index, slot)| {
            (
                CellPos::new(index % self.width, index / self.width),
                slot.as_ref(),
            )
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of crops in each stage, in lifecycle order. Empty soil is not counted.
    pub fn stage_counts(&self) -> Vec<(CropStage, usize)> {
        CropStage::ALL
            .iter()
            .map(|stage| {
                let count = self
                    .grid
                    .iter()
                    .flatten()
                    .filter(|crop| crop.stage() == *stage)
                    .count();
                (*stage, count)
            })
            .collect()
    }

    /// Create a fertilized crop on empty soil.
    /// Returns `false` without touching the cell if it is already occupied.
    pub fn fertilize_soil(&mut self, pos: CellPos) -> Result<bool, FarmError> {
        let species = self.default_species;
        let growth_duration = self.growth_duration;
        let stages = self.intermediate_stages.clone();

        let slot = self.slot_mut(pos)?;
        if slot.is_some() {
            return Ok(false);
        }

        let mut crop = Crop::new(species, growth_duration, stages);
        let fertilized = crop.fertilize();
        *slot = Some(crop);
        debug!("Fertilized soil at {}", pos);
        Ok(fertilized)
    }

    /// Plant seeds of `species` on a fertilized cell
    pub fn plant_crop(&mut self, pos: CellPos, species: Species) -> Result<bool, FarmError> {
        let now = self.now();
        let Some(crop) = self.slot_mut(pos)?.as_mut() else {
            return Ok(false);
        };
        if crop.stage() != CropStage::Fertilized {
            return Ok(false);
        }

        crop.set_species(species);
        let planted = crop.plant(now);
        debug!("Planted {} at {} (t={:.2}s)", species.name(), pos, now);
        Ok(planted)
    }

    /// Water the crop in a cell. Fails unless the crop has just been planted.
    pub fn water_crop(&mut self, pos: CellPos) -> Result<bool, FarmError> {
        let Some(crop) = self.slot_mut(pos)?.as_mut() else {
            return Ok(false);
        };
        let watered = crop.water();
        if watered {
            debug!("Watered crop at {}", pos);
        }
        Ok(watered)
    }

    /// Advance growth of every crop once, reading the clock a single time.
    /// Returns the number of crops whose stage changed.
    pub fn advance_all_growth(&mut self) -> usize {
        let now = self.now();
        let width = self.width;
        let mut changed = 0;

        for (index, slot) in self.grid.iter_mut().enumerate() {
            if let Some(crop) = slot {
                if crop.advance_growth(now) {
                    changed += 1;
                    debug!(
                        "Crop at {} grew to {}",
                        CellPos::new(index % width, index / width),
                        crop.stage()
                    );
                }
            }
        }

        changed
    }

    /// Harvest a ripe crop, leaving the cell as untilled soil
    pub fn harvest_crop(&mut self, pos: CellPos) -> Result<bool, FarmError> {
        let slot = self.slot_mut(pos)?;
        let harvested = match slot.as_mut() {
            Some(crop) if crop.is_ready() => crop.harvest(),
            _ => false,
        };
        if harvested {
            *slot = None;
        }
        Ok(harvested)
    }
}
