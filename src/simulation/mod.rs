//! Standalone farm simulation module
//!
//! This module contains all the core farming logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod clock;
mod config;
mod crop;
mod error;
mod farm;
mod farmer;
mod game_state;
mod layout;
mod types;
mod world;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    FarmConfig, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, GROWTH_DURATION, HARVEST_REWARD,
    STARTING_MONEY,
};
pub use crop::Crop;
pub use error::FarmError;
pub use farm::Farm;
pub use farmer::AutoFarmer;
pub use game_state::GameState;
pub use layout::{
    stage_color, stage_glyph, GridLayout, BACKGROUND_COLOR, INFO_PANEL_HEIGHT, SIDEBAR_WIDTH,
    TOOL_ICON_SIZE,
};
pub use types::{CellPos, CropStage, SoundCue, Species, Tool, DEFAULT_GROWTH_STAGES};
pub use world::{ClickResult, FarmWorld, ToolOutcome};
