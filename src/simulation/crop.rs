//! Crop lifecycle state machine
//!
//! A crop walks `Empty -> Fertilized -> Planted -> Watered`, then through its
//! intermediate growth stages to `Harvested`, and back to `Empty` when it is
//! harvested. Every transition reports success as a `bool`; a failed
//! transition leaves the crop untouched.

use super::types::{CropStage, Species};

/// Cultivation state of a single grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    species: Species,
    growth_duration: f64,
    stage: CropStage,
    planted_at: Option<f64>,
    /// Growth ticks observed since the last `plant`
    age: u32,
    intermediate_stages: Vec<CropStage>,
}

impl Crop {
    /// Create an `Empty` crop.
    ///
    /// `growth_duration` gates every growth step. `intermediate_stages` lists
    /// the stages between `Watered` and `Harvested`; pass an empty list for a
    /// crop that ripens straight from `Watered`. Only `Sprout` and `Grown` are
    /// valid intermediate stages, each listed at most once.
    pub fn new(species: Species, growth_duration: f64, intermediate_stages: Vec<CropStage>) -> Self {
        debug_assert!(
            intermediate_stages
                .iter()
                .enumerate()
                .all(|(index, stage)| matches!(stage, CropStage::Sprout | CropStage::Grown)
                    && !intermediate_stages[..index].contains(stage)),
            "invalid intermediate stages {intermediate_stages:?}"
        );
        Self {
            species,
            growth_duration,
            stage: CropStage::Empty,
            planted_at: None,
            age: 0,
            intermediate_stages,
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn stage(&self) -> CropStage {
        self.stage
    }

    pub fn growth_duration(&self) -> f64 {
        self.growth_duration
    }

    pub fn planted_at(&self) -> Option<f64> {
        self.planted_at
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn intermediate_stages(&self) -> &[CropStage] {
        &self.intermediate_stages
    }

    pub(crate) fn set_species(&mut self, species: Species) {
        self.species = species;
    }

    /// Whether `advance_growth` has any effect in the current stage
    pub fn is_growing(&self) -> bool {
        self.stage == CropStage::Watered || self.intermediate_stages.contains(&self.stage)
    }

    pub fn is_ready(&self) -> bool {
        self.stage == CropStage::Harvested
    }

    /// Empty -> Fertilized
    pub fn fertilize(&mut self) -> bool {
        if self.stage != CropStage::Empty {
            return false;
        }
        self.stage = CropStage::Fertilized;
        true
    }

    /// Fertilized -> Planted. Starts growth timing at `now`.
    pub fn plant(&mut self, now: f64) -> bool {
        if self.stage != CropStage::Fertilized {
            return false;
        }
        self.stage = CropStage::Planted;
        self.age = 0;
        self.planted_at = Some(now);
        true
    }

    /// Planted -> Watered. Timing stays anchored to the planting time.
    pub fn water(&mut self) -> bool {
        if self.stage != CropStage::Planted {
            return false;
        }
        self.stage = CropStage::Watered;
        true
    }

    /// Advance one growth step if the growth duration has elapsed.
    ///
    /// The same duration gates every step, so once it has passed each call
    /// moves the crop one stage further until it reaches `Harvested`.
    /// Returns `true` when the stage changed.
    pub fn advance_growth(&mut self, now: f64) -> bool {
        if !self.is_growing() {
            return false;
        }
        self.age = self.age.saturating_add(1);

        if self.elapsed(now) < self.growth_duration {
            return false;
        }

        let next_index = match self.stage {
            CropStage::Watered => 0,
            stage => match self.intermediate_stages.iter().position(|s| *s == stage) {
                Some(index) => index + 1,
                None => return false,
            },
        };

        self.stage = self
            .intermediate_stages
            .get(next_index)
            .copied()
            .unwrap_or(CropStage::Harvested);
        true
    }

    /// Harvested -> Empty, dropping the planting history
    pub fn harvest(&mut self) -> bool {
        if self.stage != CropStage::Harvested {
            return false;
        }
        self.stage = CropStage::Empty;
        self.planted_at = None;
        self.age = 0;
        true
    }

    /// Seconds since planting, or 0 if not planted
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.planted_at {
            Some(planted_at) => (now - planted_at).max(0.0),
            None => 0.0,
        }
    }

    /// Growth progress as `elapsed / growth_duration`, clamped to `[0, 1]`
    pub fn progress(&self, now: f64) -> f32 {
        if self.growth_duration <= 0.0 {
            return if self.planted_at.is_some() { 1.0 } else { 0.0 };
        }
        (self.elapsed(now) / self.growth_duration).clamp(0.0, 1.0) as f32
    }
}
