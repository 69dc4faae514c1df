//! Systems for spawning the farm screen from simulation state

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{
    to_color, CellLabel, CellLink, FarmWorldResource, InfoText, ProgressBar, ToolIcon,
};
use crate::simulation::{
    stage_color, CellPos, Tool, INFO_PANEL_HEIGHT, SIDEBAR_WIDTH, TOOL_ICON_SIZE,
};

const SIDEBAR_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);
const PROGRESS_COLOR: Color = Color::srgb(0.2, 0.9, 0.2);

/// System to create one node per grid cell
pub fn spawn_farm_grid(mut commands: Commands, farm_world: Res<FarmWorldResource>) {
    let world = &farm_world.0;

    for (pos, crop) in world.farm.cells() {
        let (left, top, size) = world.layout.cell_rect(pos);
        let color = stage_color(crop.map(|c| c.stage()));

        commands
            .spawn((
                CellLink(pos),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(left + 1.0),
                    top: Val::Px(top + 1.0),
                    width: Val::Px(size - 2.0),
                    height: Val::Px(size - 2.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(to_color(color)),
            ))
            .with_children(|cell| spawn_cell_overlays(cell, pos));
    }
}

fn spawn_cell_overlays(cell: &mut ChildSpawnerCommands, pos: CellPos) {
    cell.spawn((
        CellLabel(pos),
        Text::new(""),
        TextFont {
            font_size: 11.0,
            ..default()
        },
        TextColor(Color::BLACK),
    ));

    cell.spawn((
        ProgressBar(pos),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(4.0),
            bottom: Val::Px(4.0),
            width: Val::Px(0.0),
            height: Val::Px(6.0),
            ..default()
        },
        BackgroundColor(PROGRESS_COLOR),
        Visibility::Hidden,
    ));
}

/// System to create the tool sidebar
pub fn spawn_sidebar(mut commands: Commands, farm_world: Res<FarmWorldResource>) {
    let layout = farm_world.0.layout;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(SIDEBAR_WIDTH),
                height: Val::Px(layout.grid_pixel_height()),
                ..default()
            },
            BackgroundColor(SIDEBAR_COLOR),
        ))
        .with_children(|sidebar| {
            for (slot, tool) in Tool::SIDEBAR.iter().enumerate() {
                let (left, top) = layout.tool_icon_origin(slot);
                spawn_tool_icon(sidebar, *tool, slot, left, top);
            }
        });
}

fn spawn_tool_icon(
    parent: &mut ChildSpawnerCommands,
    tool: Tool,
    slot: usize,
    left: f32,
    top: f32,
) {
    parent
        .spawn((
            ToolIcon(tool),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                width: Val::Px(SIDEBAR_WIDTH - 2.0 * left),
                height: Val::Px(TOOL_ICON_SIZE),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderColor::all(Color::WHITE),
            BackgroundColor(tool_color(tool)),
        ))
        .with_children(|icon| {
            icon.spawn((
                Text::new(format!("{} [{}]", tool_label(tool), slot + 1)),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// System to create the info panel below the grid
pub fn spawn_info_panel(mut commands: Commands, farm_world: Res<FarmWorldResource>) {
    let top = farm_world.0.layout.grid_pixel_height();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(top),
                width: Val::Percent(100.0),
                height: Val::Px(INFO_PANEL_HEIGHT),
                padding: UiRect {
                    left: Val::Px(SIDEBAR_WIDTH + 20.0),
                    top: Val::Px(10.0),
                    ..default()
                },
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(Color::WHITE),
        ))
        .with_children(|panel| {
            spawn_info_text(panel, InfoText::SelectedTool, 18.0);
            spawn_info_text(panel, InfoText::Money, 18.0);
            spawn_info_text(panel, InfoText::ToolInfo, 14.0);
        });
}

fn spawn_info_text(parent: &mut ChildSpawnerCommands, kind: InfoText, font_size: f32) {
    parent.spawn((
        kind,
        Text::new(""),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::BLACK),
    ));
}

/// Short sidebar label for a tool
pub fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Fertilizer => "Fertilize",
        Tool::WaterCan => "Water",
        Tool::Seed(_) => "Wheat",
        Tool::Harvest => "Harvest",
    }
}

/// Base colour of a tool's sidebar icon
pub fn tool_color(tool: Tool) -> Color {
    match tool {
        Tool::Fertilizer => Color::srgb(0.45, 0.3, 0.15),
        Tool::WaterCan => Color::srgb(0.2, 0.4, 0.8),
        Tool::Seed(_) => Color::srgb(0.7, 0.6, 0.2),
        Tool::Harvest => Color::srgb(0.6, 0.2, 0.2),
    }
}
