//! Farm configuration
//!
//! Defaults come from the constants below; the binary overrides them from
//! command-line flags.

use super::error::FarmError;
use super::types::{CropStage, DEFAULT_GROWTH_STAGES};

/// Grid width in cells
pub const GRID_WIDTH: usize = 10;
/// Grid height in cells
pub const GRID_HEIGHT: usize = 8;
/// Cell edge length in pixels
pub const CELL_SIZE: u32 = 60;
/// Seconds that gate each growth step
pub const GROWTH_DURATION: f64 = 10.0;
/// Money the player starts with
pub const STARTING_MONEY: i64 = 100;
/// Money credited for each harvested crop
pub const HARVEST_REWARD: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct FarmConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub growth_duration: f64,
    pub starting_money: i64,
    pub harvest_reward: i64,
    /// Stages between `Watered` and `Harvested`
    pub intermediate_stages: Vec<CropStage>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            growth_duration: GROWTH_DURATION,
            starting_money: STARTING_MONEY,
            harvest_reward: HARVEST_REWARD,
            intermediate_stages: DEFAULT_GROWTH_STAGES.to_vec(),
        }
    }
}

impl FarmConfig {
    /// Check that the configuration describes a usable farm
    pub fn validate(&self) -> Result<(), FarmError> {
        if self.width == 0 || self.height == 0 {
            return Err(FarmError::InvalidConfig {
                reason: format!("grid must be at least 1x1, got {}x{}", self.width, self.height),
            });
        }
        if self.cell_size == 0 {
            return Err(FarmError::InvalidConfig {
                reason: "cell size must be at least 1 pixel".to_owned(),
            });
        }
        if !self.growth_duration.is_finite() || self.growth_duration <= 0.0 {
            return Err(FarmError::InvalidConfig {
                reason: format!(
                    "growth duration must be a positive number of seconds, got {}",
                    self.growth_duration
                ),
            });
        }
        for (index, stage) in self.intermediate_stages.iter().enumerate() {
            if !matches!(stage, CropStage::Sprout | CropStage::Grown) {
                return Err(FarmError::InvalidConfig {
                    reason: format!("{stage} cannot be used as a growth stage"),
                });
            }
            if self.intermediate_stages[..index].contains(stage) {
                return Err(FarmError::InvalidConfig {
                    reason: format!("growth stage {stage} is listed twice"),
                });
            }
        }
        Ok(())
    }
}
