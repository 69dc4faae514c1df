//! Main simulation world that ties everything together
//!
//! `FarmWorld` is what the frame loop owns: the farm grid, the money balance,
//! the screen layout and the currently selected tool. It translates player
//! actions into farm operations and applies the harvest reward.

use log::{debug, info};

use super::clock::{Clock, SystemClock};
use super::config::FarmConfig;
use super::error::FarmError;
use super::farm::Farm;
use super::game_state::GameState;
use super::layout::{stage_glyph, GridLayout};
use super::types::{CellPos, CropStage, SoundCue, Tool};

/// Result of applying a tool to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutcome {
    pub tool: Tool,
    pub cell: CellPos,
    pub success: bool,
    /// Sound to play. Only set when the action succeeded, so a rejected
    /// fertilize or water stays silent instead of playing its sound anyway.
    pub cue: Option<SoundCue>,
}

/// What a click on the screen did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Click landed on a sidebar icon
    ToolSelected(Tool),
    /// Click landed on the grid and the selected tool was applied
    Applied(ToolOutcome),
    /// Click landed somewhere inert
    Ignored,
}

/// The main simulation world
pub struct FarmWorld<C: Clock = SystemClock> {
    /// Grid of crops
    pub farm: Farm<C>,

    /// Money and statistics
    pub game_state: GameState,

    /// Pixel geometry of the screen
    pub layout: GridLayout,

    selected_tool: Tool,
    harvest_reward: i64,

    /// Growth ticks run so far
    pub ticks: u64,
}

impl FarmWorld<SystemClock> {
    /// Create a world timed by the wall clock
    pub fn new(config: &FarmConfig) -> Result<Self, FarmError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> FarmWorld<C> {
    /// Create a world timed by the given clock. Fails if the config is invalid.
    pub fn with_clock(config: &FarmConfig, clock: C) -> Result<Self, FarmError> {
        Ok(Self {
            farm: Farm::with_clock(config, clock)?,
            game_state: GameState::new(config.starting_money),
            layout: GridLayout::new(config),
            selected_tool: Tool::default(),
            harvest_reward: config.harvest_reward,
            ticks: 0,
        })
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.selected_tool != tool {
            debug!("Selected tool {}", tool);
        }
        self.selected_tool = tool;
    }

    pub fn harvest_reward(&self) -> i64 {
        self.harvest_reward
    }

    /// Apply a tool to a cell and settle the consequences
    pub fn apply_tool(&mut self, tool: Tool, cell: CellPos) -> Result<ToolOutcome, FarmError> {
        let (success, cue) = match tool {
            Tool::Fertilizer => (self.farm.fertilize_soil(cell)?, Some(SoundCue::Fertilize)),
            Tool::WaterCan => (self.farm.water_crop(cell)?, Some(SoundCue::Water)),
            Tool::Seed(species) => (self.farm.plant_crop(cell, species)?, None),
            Tool::Harvest => (self.farm.harvest_crop(cell)?, Some(SoundCue::Harvest)),
        };

        self.game_state.record_action(success);
        if success && tool == Tool::Harvest {
            self.game_state.complete_harvest(self.harvest_reward);
            info!(
                "Harvested crop at {} (+${}, balance ${})",
                cell, self.harvest_reward, self.game_state.money
            );
        } else if !success {
            debug!("{} had no effect at {}", tool, cell);
        }

        Ok(ToolOutcome {
            tool,
            cell,
            success,
            cue: if success { cue } else { None },
        })
    }

    /// Apply the currently selected tool to a cell
    pub fn apply_selected_tool(&mut self, cell: CellPos) -> Result<ToolOutcome, FarmError> {
        self.apply_tool(self.selected_tool, cell)
    }

    /// Handle a click at a screen pixel
    pub fn click(&mut self, px: f32, py: f32) -> Result<ClickResult, FarmError> {
        if let Some(tool) = self.layout.tool_at(px, py) {
            self.select_tool(tool);
            return Ok(ClickResult::ToolSelected(tool));
        }
        match self.layout.cell_at(px, py) {
            Some(cell) => Ok(ClickResult::Applied(self.apply_selected_tool(cell)?)),
            None => Ok(ClickResult::Ignored),
        }
    }

    /// Main simulation tick: advance growth of every crop once.
    /// Returns the number of crops that changed stage.
    pub fn tick(&mut self) -> usize {
        self.ticks += 1;
        self.farm.advance_all_growth()
    }

    /// Stage of the crop in a cell, `None` for untilled soil
    pub fn stage_at(&self, cell: CellPos) -> Result<Option<CropStage>, FarmError> {
        Ok(self.farm.cell(cell)?.map(|crop| crop.stage()))
    }

    /// Growth progress for cells whose crop is watered and waiting to sprout
    pub fn progress_at(&self, cell: CellPos) -> Result<Option<f32>, FarmError> {
        let now = self.farm.now();
        Ok(self
            .farm
            .cell(cell)?
            .filter(|crop| crop.stage() == CropStage::Watered)
            .map(|crop| crop.progress(now)))
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Farm Simulation Summary ===");
        println!("Time: {:.2}s, Ticks: {}", self.farm.now(), self.ticks);
        println!(
            "Grid: {}x{}, Occupied cells: {}",
            self.farm.width(),
            self.farm.height(),
            self.farm.occupied_count()
        );
        println!("Selected tool: {}", self.selected_tool);
        println!("{}", self.game_state.summary());

        println!("--- Crops ---");
        for (stage, count) in self.farm.stage_counts() {
            if count > 0 {
                println!("  {}: {}", stage, count);
            }
        }
    }

    /// Draw the grid in the terminal, one character per cell
    pub fn draw_map(&self) {
        let mut row = String::with_capacity(self.farm.width());
        for (cell, crop) in self.farm.cells() {
            row.push(stage_glyph(crop.map(|c| c.stage())));
            if cell.x + 1 == self.farm.width() {
                println!("  {}", row);
                row.clear();
            }
        }
        println!("  Legend: . soil, f fertilized, p planted, w watered, s sprout, G grown, H ready");
    }
}
