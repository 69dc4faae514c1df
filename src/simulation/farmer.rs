//! Autoplay farmer used to drive the headless simulation
//!
//! Each tick the farmer may pick a random cell and use whichever tool that
//! cell needs next. Crops that are still growing are left alone.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::clock::Clock;
use super::error::FarmError;
use super::types::{CellPos, CropStage, Species, Tool};
use super::world::{FarmWorld, ToolOutcome};

/// Random farmer that works the grid on behalf of a player
pub struct AutoFarmer {
    /// Chance of acting on any given tick, in `[0, 1]`
    actions_per_tick: f64,
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl AutoFarmer {
    /// Create a farmer using the thread RNG.
    /// `actions_per_tick` is clamped to `[0, 1]` and must not be NaN.
    pub fn new(actions_per_tick: f64) -> Result<Self, FarmError> {
        Ok(Self {
            actions_per_tick: Self::chance(actions_per_tick)?,
            rng: None,
        })
    }

    /// Create a farmer with a seeded RNG for reproducible simulations
    pub fn new_with_seed(actions_per_tick: f64, seed: u64) -> Result<Self, FarmError> {
        Ok(Self {
            actions_per_tick: Self::chance(actions_per_tick)?,
            rng: Some(StdRng::seed_from_u64(seed)),
        })
    }

    fn chance(actions_per_tick: f64) -> Result<f64, FarmError> {
        if actions_per_tick.is_nan() {
            return Err(FarmError::InvalidConfig {
                reason: "actions per tick must be a number".to_owned(),
            });
        }
        Ok(actions_per_tick.clamp(0.0, 1.0))
    }

    fn random_bool(&mut self, p: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(p),
            None => rand::rng().random_bool(p),
        }
    }

    fn random_index(&mut self, len: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..len),
            None => rand::rng().random_range(0..len),
        }
    }

    /// Tool a cell needs next, `None` while its crop is growing
    pub fn tool_for(stage: Option<CropStage>) -> Option<Tool> {
        match stage {
            None | Some(CropStage::Empty) => Some(Tool::Fertilizer),
            Some(CropStage::Fertilized) => Some(Tool::Seed(Species::Wheat)),
            Some(CropStage::Planted) => Some(Tool::WaterCan),
            Some(CropStage::Harvested) => Some(Tool::Harvest),
            Some(CropStage::Watered | CropStage::Sprout | CropStage::Grown) => None,
        }
    }

    /// Possibly act on one random cell
    pub fn act<C: Clock>(
        &mut self,
        world: &mut FarmWorld<C>,
    ) -> Result<Option<ToolOutcome>, FarmError> {
        if !self.random_bool(self.actions_per_tick) {
            return Ok(None);
        }

        let x = self.random_index(world.farm.width());
        let y = self.random_index(world.farm.height());
        let cell = CellPos::new(x, y);

        let Some(tool) = Self::tool_for(world.stage_at(cell)?) else {
            return Ok(None);
        };
        world.select_tool(tool);
        world.apply_selected_tool(cell).map(Some)
    }
}
