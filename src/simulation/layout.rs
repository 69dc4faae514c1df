//! Screen geometry shared by the renderer and input handling
//!
//! The screen is a tool sidebar on the left, the farm grid to its right and
//! an info panel along the bottom. All coordinates are pixels with the origin
//! at the top-left corner.

use super::config::FarmConfig;
use super::types::{CellPos, CropStage, Tool};

/// Width of the tool sidebar
pub const SIDEBAR_WIDTH: f32 = 120.0;
/// Height of the info panel below the grid
pub const INFO_PANEL_HEIGHT: f32 = 100.0;
/// Left edge of every tool icon
pub const TOOL_ICON_LEFT: f32 = 20.0;
/// Top edge of the first tool icon
pub const TOOL_ICON_TOP: f32 = 20.0;
/// Edge length of a tool icon
pub const TOOL_ICON_SIZE: f32 = 40.0;
/// Vertical distance between consecutive tool icons
pub const TOOL_ICON_SPACING: f32 = 60.0;

/// Background colour behind the grid
pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.6, 0.0];

/// Pixel layout of the farm screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
}

impl GridLayout {
    pub fn new(config: &FarmConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size as f32,
        }
    }

    /// Pixel position of the grid's top-left corner
    pub fn grid_origin(&self) -> (f32, f32) {
        (SIDEBAR_WIDTH, 0.0)
    }

    /// Height of the grid area in pixels
    pub fn grid_pixel_height(&self) -> f32 {
        self.height as f32 * self.cell_size
    }

    /// Window size that fits the sidebar, grid and info panel
    pub fn screen_size(&self) -> (f32, f32) {
        (
            SIDEBAR_WIDTH + self.width as f32 * self.cell_size,
            self.grid_pixel_height() + INFO_PANEL_HEIGHT,
        )
    }

    /// Top-left corner and edge length of a cell
    pub fn cell_rect(&self, pos: CellPos) -> (f32, f32, f32) {
        let (origin_x, origin_y) = self.grid_origin();
        (
            origin_x + pos.x as f32 * self.cell_size,
            origin_y + pos.y as f32 * self.cell_size,
            self.cell_size,
        )
    }

    /// Top-left corner of a sidebar tool icon
    pub fn tool_icon_origin(&self, slot: usize) -> (f32, f32) {
        (TOOL_ICON_LEFT, TOOL_ICON_TOP + slot as f32 * TOOL_ICON_SPACING)
    }

    /// Tool whose sidebar icon row covers the pixel
    pub fn tool_at(&self, px: f32, py: f32) -> Option<Tool> {
        if !(0.0..SIDEBAR_WIDTH).contains(&px) {
            return None;
        }
        Tool::SIDEBAR.iter().enumerate().find_map(|(slot, tool)| {
            let (_, top) = self.tool_icon_origin(slot);
            (top..=top + TOOL_ICON_SIZE).contains(&py).then_some(*tool)
        })
    }

    /// Grid cell under a pixel.
    ///
    /// Pixels over the sidebar or the info panel map to no cell. Anything else
    /// is divided by the cell size and clamped onto the grid.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<CellPos> {
        let (origin_x, origin_y) = self.grid_origin();
        if px < origin_x || py < origin_y || py >= origin_y + self.grid_pixel_height() {
            return None;
        }

        let column = ((px - origin_x) / self.cell_size) as usize;
        let row = ((py - origin_y) / self.cell_size) as usize;
        Some(CellPos::new(
            column.min(self.width.saturating_sub(1)),
            row.min(self.height.saturating_sub(1)),
        ))
    }
}

/// Fill colour for a cell, `None` being untilled soil
pub fn stage_color(stage: Option<CropStage>) -> [f32; 3] {
    match stage {
        None | Some(CropStage::Empty) => [0.55, 0.35, 0.2],
        Some(CropStage::Fertilized) => [0.4, 0.26, 0.13],
        Some(CropStage::Planted) => [0.6, 0.5, 0.3],
        Some(CropStage::Watered) => [0.3, 0.3, 0.7],
        Some(CropStage::Sprout) => [0.5, 0.8, 0.3],
        Some(CropStage::Grown) => [0.2, 0.6, 0.1],
        Some(CropStage::Harvested) => [0.95, 0.8, 0.2],
    }
}

/// Single character used for a cell on the terminal map
pub fn stage_glyph(stage: Option<CropStage>) -> char {
    match stage {
        None | Some(CropStage::Empty) => '.',
        Some(CropStage::Fertilized) => 'f',
        Some(CropStage::Planted) => 'p',
        Some(CropStage::Watered) => 'w',
        Some(CropStage::Sprout) => 's',
        Some(CropStage::Grown) => 'G',
        Some(CropStage::Harvested) => 'H',
    }
}
