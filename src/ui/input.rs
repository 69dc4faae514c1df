//! Input handling systems

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

use super::components::{DragState, FarmWorldResource, SoundCueMessage};
use crate::simulation::Tool;

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Toggle between windowed and borderless fullscreen on F
pub fn toggle_fullscreen(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    window.mode = match window.mode {
        WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        _ => WindowMode::Windowed,
    };
}

/// Keyboard shortcuts for the sidebar tools
pub fn handle_tool_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut farm_world: ResMut<FarmWorldResource>,
) {
    let keys = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];
    for (key, tool) in keys.iter().zip(Tool::SIDEBAR) {
        if keyboard.just_pressed(*key) {
            farm_world.0.select_tool(tool);
        }
    }
}

/// Select tools from the sidebar and drag them onto grid cells.
///
/// Pressing over the grid picks up the selected tool; releasing applies it to
/// the cell under the cursor.
pub fn handle_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<DragState>,
    mut farm_world: ResMut<FarmWorldResource>,
    mut cues: MessageWriter<SoundCueMessage>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        if mouse.just_released(MouseButton::Left) {
            drag.tool = None;
        }
        return;
    };
    let world = &mut farm_world.0;

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(tool) = world.layout.tool_at(cursor.x, cursor.y) {
            world.select_tool(tool);
        } else if world.layout.cell_at(cursor.x, cursor.y).is_some() {
            drag.tool = Some(world.selected_tool());
        }
    }

    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let Some(tool) = drag.tool.take() else {
        return;
    };
    let Some(cell) = world.layout.cell_at(cursor.x, cursor.y) else {
        bevy::log::warn!("Dropped {} outside the farm grid", tool);
        return;
    };

    match world.apply_tool(tool, cell) {
        Ok(outcome) => {
            if let Some(cue) = outcome.cue {
                cues.write(SoundCueMessage(cue));
            }
        }
        Err(e) => {
            bevy::log::warn!("Failed to apply {}: {}", tool, e);
        }
    }
}
