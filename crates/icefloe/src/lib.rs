use bevy::prelude::*;

mod audio;
mod bear;
mod board;
mod controls;
mod game;
mod navigator;
mod screen;
mod ui;

#[cfg(test)]
mod bear_tests;
#[cfg(test)]
mod board_tests;

use board::WATER_COLOR;

pub fn run() {
    floe_helpers::get_default_app(env!("CARGO_PKG_NAME"))
        .insert_resource(ClearColor(WATER_COLOR))
        .add_plugins(game::GamePlugin)
        .add_plugins(board::BoardPlugin)
        .add_plugins(navigator::NavigatorPlugin)
        .add_plugins(bear::BearPlugin)
        .add_plugins(controls::ControlsPlugin)
        .add_plugins(screen::ScreenPlugin)
        .add_plugins(ui::UiPlugin)
        .add_plugins(audio::GameAudioPlugin)
        .init_state::<game::GameState>()
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
