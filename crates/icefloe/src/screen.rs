use bevy::prelude::*;
use floe_helpers::restart::{CleanupMarker, RestartButton, cleanup_marked_entities, handle_restart};
use floe_helpers::welcome_screen::{despawn_welcome_screen, spawn_welcome_screen_shape};
use floe_helpers::{FONT, WINDOW_HEIGHT, WINDOW_WIDTH};

use crate::game::{GameProgress, GameState};

#[derive(Component)]
struct NextLevelButton;

pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Welcome), spawn_welcome)
            .add_systems(OnExit(GameState::Welcome), despawn_welcome_screen)
            .add_systems(OnEnter(GameState::Cleared), spawn_cleared)
            .add_systems(OnExit(GameState::Cleared), cleanup_marked_entities)
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_marked_entities)
            .add_systems(
                Update,
                (
                    start_on_tap.run_if(in_state(GameState::Welcome)),
                    handle_next_level.run_if(in_state(GameState::Cleared)),
                    handle_restart::<GameProgress>.run_if(in_state(GameState::GameOver)),
                ),
            );
    }
}

fn spawn_welcome(
    commands: Commands,
    asset_server: Res<AssetServer>,
    meshes: ResMut<Assets<Mesh>>,
    materials: ResMut<Assets<ColorMaterial>>,
) {
    spawn_welcome_screen_shape(
        commands,
        asset_server,
        meshes,
        materials,
        "Icefloe",
        Mesh::from(Circle::new(60.0)),
        Color::WHITE,
    );
}

fn start_on_tap(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.get_just_pressed().next().is_some()
        || mouse_button_input.just_pressed(MouseButton::Left)
        || touch_input.any_just_pressed()
    {
        next_state.set(GameState::Playing);
    }
}

fn spawn_cleared(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    progress: Res<GameProgress>,
) {
    spawn_result_screen(
        &mut commands,
        &asset_server,
        "Level cleared!",
        format!("Score {}", progress.score),
        "Next level",
        NextLevelButton,
    );
}

fn spawn_game_over(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    progress: Res<GameProgress>,
) {
    spawn_result_screen(
        &mut commands,
        &asset_server,
        "The bear went swimming",
        format!("Score {}", progress.score),
        "Restart",
        RestartButton,
    );
}

fn handle_next_level(
    mut progress: ResMut<GameProgress>,
    mut next_state: ResMut<NextState<GameState>>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut interaction_query: Query<&Interaction, (Changed<Interaction>, With<NextLevelButton>)>,
) {
    let pressed = keyboard_input.just_pressed(KeyCode::Space)
        || interaction_query
            .iter_mut()
            .any(|interaction| *interaction == Interaction::Pressed);

    if pressed {
        progress.level += 1;
        next_state.set(GameState::Playing);
    }
}

fn spawn_result_screen<M: Component>(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    title: &str,
    detail: String,
    button_label: &str,
    button_marker: M,
) {
    commands.spawn((
        Sprite::from_color(
            Color::srgba(0.0, 0.0, 0.0, 0.7),
            Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        ),
        Transform::from_xyz(0.0, 0.0, 20.0),
        CleanupMarker,
    ));

    commands.spawn((
        Text::new(title),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 36.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(30.0),
            width: Val::Percent(100.0),
            ..default()
        },
        CleanupMarker,
    ));

    commands.spawn((
        Text::new(detail),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(42.0),
            width: Val::Percent(100.0),
            ..default()
        },
        CleanupMarker,
    ));

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(55.0),
                justify_self: JustifySelf::Center,
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.35, 0.55)),
            button_marker,
            CleanupMarker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(button_label),
                TextFont {
                    font: asset_server.load(FONT),
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
