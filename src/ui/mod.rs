//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization and input - all farming logic is
//! in the `simulation` module. The UI reads state from `FarmWorld` and renders
//! it as 2D UI nodes.

mod audio;
mod components;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{FarmWorldResource, SoundCueMessage};

use audio::{play_sound_cues, SoundCooldown};
use components::{to_color, DragState};
use input::{handle_input, handle_pointer, handle_tool_keyboard, toggle_fullscreen};
use spawner::{spawn_farm_grid, spawn_info_panel, spawn_sidebar};
use sync::{sync_cells, sync_progress_bars, tick_farm, update_info_text, update_tool_icons};
use world::setup_world;
use crate::simulation::BACKGROUND_COLOR;

/// Plugin to register all UI systems
///
/// Each frame handles input first, then advances crop growth, then syncs
/// the visuals, so the screen always shows the state after this frame's tick.
/// The app must already hold a `FarmWorldResource`.
pub struct FarmSimUIPlugin;

impl Plugin for FarmSimUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .init_resource::<SoundCooldown>()
            .insert_resource(ClearColor(to_color(BACKGROUND_COLOR)))
            .add_message::<SoundCueMessage>()
            .add_systems(
                Startup,
                (setup_world, spawn_farm_grid, spawn_sidebar, spawn_info_panel),
            )
            .add_systems(
                Update,
                (
                    (
                        handle_input,
                        toggle_fullscreen,
                        handle_tool_keyboard,
                        handle_pointer,
                    ),
                    tick_farm,
                    (
                        sync_cells,
                        sync_progress_bars,
                        update_info_text,
                        update_tool_icons,
                        play_sound_cues,
                    ),
                )
                    .chain(),
            );
    }
}
