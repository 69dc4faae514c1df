//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{CellPos, FarmWorld, SoundCue, Tool};

/// Resource wrapper for the simulation world. Inserted by the binary before
/// `FarmSimUIPlugin` is added.
#[derive(Resource)]
pub struct FarmWorldResource(pub FarmWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Links a UI node to a grid cell
#[derive(Component)]
pub struct CellLink(pub CellPos);

/// Growth progress bar drawn inside a cell
#[derive(Component)]
pub struct ProgressBar(pub CellPos);

/// Stage label drawn inside a cell
#[derive(Component)]
pub struct CellLabel(pub CellPos);

/// Sidebar icon for a tool
#[derive(Component)]
pub struct ToolIcon(pub Tool);

/// Text elements of the info panel
#[derive(Component)]
pub enum InfoText {
    SelectedTool,
    Money,
    ToolInfo,
}

/// Tool picked up from the grid on mouse press, applied on release
#[derive(Resource, Default)]
pub struct DragState {
    pub tool: Option<Tool>,
}

/// Request to play a sound cue
#[derive(Message, Debug, Clone, Copy)]
pub struct SoundCueMessage(pub SoundCue);

/// Convert a simulation colour to a Bevy colour
pub fn to_color(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}
