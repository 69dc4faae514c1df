//! Core types for the farm simulation
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;

/// Address of one cell in the farm grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub x: usize,
    pub y: usize,
}

impl CellPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Crop species. Informational only, every species grows on the same timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Species {
    #[default]
    Wheat,
}

impl Species {
    pub fn name(&self) -> &'static str {
        match self {
            Species::Wheat => "wheat",
        }
    }
}

/// Lifecycle stage of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CropStage {
    #[default]
    Empty,
    Fertilized,
    Planted,
    Watered,
    Sprout,
    Grown,
    Harvested,
}

impl CropStage {
    /// Every stage in lifecycle order
    pub const ALL: [CropStage; 7] = [
        CropStage::Empty,
        CropStage::Fertilized,
        CropStage::Planted,
        CropStage::Watered,
        CropStage::Sprout,
        CropStage::Grown,
        CropStage::Harvested,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CropStage::Empty => "empty",
            CropStage::Fertilized => "fertilized",
            CropStage::Planted => "planted",
            CropStage::Watered => "watered",
            CropStage::Sprout => "sprout",
            CropStage::Grown => "grown",
            CropStage::Harvested => "harvested",
        }
    }
}

impl fmt::Display for CropStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intermediate growth stages of the five-stage lifecycle
pub const DEFAULT_GROWTH_STAGES: [CropStage; 2] = [CropStage::Sprout, CropStage::Grown];

/// Player tool applied to a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Fertilizer,
    WaterCan,
    Seed(Species),
    Harvest,
}

impl Tool {
    /// Tools in sidebar order
    pub const SIDEBAR: [Tool; 4] = [
        Tool::Fertilizer,
        Tool::WaterCan,
        Tool::Seed(Species::Wheat),
        Tool::Harvest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Fertilizer => "fertilizer",
            Tool::WaterCan => "water_can",
            Tool::Seed(species) => species.name(),
            Tool::Harvest => "harvest",
        }
    }

    /// Short help line shown in the info panel
    pub fn description(&self) -> &'static str {
        match self {
            Tool::Fertilizer => "Fertilizer: prepares empty soil for planting",
            Tool::WaterCan => "Water can: waters a planted seed so it starts growing",
            Tool::Seed(_) => "Wheat seeds: plant on fertilized soil",
            Tool::Harvest => "Harvest: collect a ripe crop and sell it",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Audio cue requested by a successful tool action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Fertilize,
    Water,
    Harvest,
}

impl SoundCue {
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundCue::Fertilize => "sounds/fertilize.ogg",
            SoundCue::Water => "sounds/watering.ogg",
            SoundCue::Harvest => "sounds/harvest.ogg",
        }
    }
}
