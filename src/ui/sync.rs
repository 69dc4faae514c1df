//! Systems for syncing UI nodes with simulation state

use bevy::prelude::*;

use super::components::{
    to_color, CellLabel, CellLink, FarmWorldResource, InfoText, ProgressBar, ToolIcon,
};
use super::spawner::tool_color;
use crate::simulation::{stage_color, CropStage};

/// System to run simulation tick
pub fn tick_farm(mut farm_world: ResMut<FarmWorldResource>) {
    farm_world.0.tick();
}

/// System to colour each cell by its crop stage
pub fn sync_cells(
    farm_world: Res<FarmWorldResource>,
    mut cell_query: Query<(&CellLink, &mut BackgroundColor)>,
    mut label_query: Query<(&CellLabel, &mut Text)>,
) {
    let world = &farm_world.0;

    for (link, mut background) in cell_query.iter_mut() {
        let Ok(stage) = world.stage_at(link.0) else {
            continue;
        };
        let color = to_color(stage_color(stage));
        if background.0 != color {
            background.0 = color;
        }
    }

    for (label, mut text) in label_query.iter_mut() {
        let Ok(stage) = world.stage_at(label.0) else {
            continue;
        };
        let name = match stage {
            None | Some(CropStage::Empty) => "",
            Some(stage) => stage.name(),
        };
        if text.as_str() != name {
            **text = name.to_string();
        }
    }
}

/// System to stretch the progress bar of watered crops
pub fn sync_progress_bars(
    farm_world: Res<FarmWorldResource>,
    mut bar_query: Query<(&ProgressBar, &mut Node, &mut Visibility)>,
) {
    let world = &farm_world.0;
    let max_width = world.layout.cell_size - 10.0;

    for (bar, mut node, mut visibility) in bar_query.iter_mut() {
        match world.progress_at(bar.0) {
            Ok(Some(progress)) => {
                node.width = Val::Px(max_width * progress);
                *visibility = Visibility::Inherited;
            }
            _ => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

/// System to update the info panel text
pub fn update_info_text(
    farm_world: Res<FarmWorldResource>,
    mut text_query: Query<(&InfoText, &mut Text)>,
) {
    let world = &farm_world.0;
    let tool = world.selected_tool();

    for (kind, mut text) in text_query.iter_mut() {
        let content = match kind {
            InfoText::SelectedTool => format!("Selected Tool: {}", tool),
            InfoText::Money => format!("Money: ${}", world.game_state.money),
            InfoText::ToolInfo => tool.description().to_string(),
        };
        if **text != content {
            **text = content;
        }
    }
}

/// Highlight the selected tool in the sidebar
pub fn update_tool_icons(
    farm_world: Res<FarmWorldResource>,
    mut icon_query: Query<(&ToolIcon, &mut BorderColor, &mut BackgroundColor)>,
) {
    let selected = farm_world.0.selected_tool();

    for (icon, mut border_color, mut bg_color) in icon_query.iter_mut() {
        let base_color = tool_color(icon.0);
        if icon.0 == selected {
            *border_color = BorderColor::all(Color::srgb(1.0, 1.0, 0.0));
            // Brighten when selected (clamp to prevent overflow)
            let base = base_color.to_srgba();
            bg_color.0 = Color::srgba(
                (base.red * 1.3).min(1.0),
                (base.green * 1.3).min(1.0),
                (base.blue * 1.3).min(1.0),
                1.0,
            );
        } else {
            *border_color = BorderColor::all(Color::WHITE);
            bg_color.0 = base_color;
        }
    }
}
