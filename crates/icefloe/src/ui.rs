use bevy::color::palettes::css::GOLD;
use bevy::prelude::*;
use floe_helpers::FONT;
use floe_helpers::floating_score::{animate_floating_scores, spawn_floating_score};

use crate::board::{Board, OrbCollected};
use crate::game::{GameProgress, GameState};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_hud)
            .add_systems(
                Update,
                (
                    update_hud.run_if(in_state(GameState::Playing)),
                    spawn_pickup_popups
                        .run_if(in_state(GameState::Playing).and(resource_exists::<Board>)),
                    animate_floating_scores,
                ),
            );
    }
}

#[derive(Component)]
struct HudElement;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct OrbText;

fn spawn_hud(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    previous: Query<Entity, With<HudElement>>,
) {
    for entity in &previous {
        commands.entity(entity).despawn_recursive();
    }

    commands.spawn((
        Text::new("0"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 32.0,
            ..default()
        },
        TextColor(GOLD.into()),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..default()
        },
        ScoreText,
        HudElement,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(12.0),
            ..default()
        },
        OrbText,
        HudElement,
    ));
}

fn update_hud(
    progress: Res<GameProgress>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<OrbText>)>,
    mut orb_query: Query<&mut Text, (With<OrbText>, Without<ScoreText>)>,
) {
    if !progress.is_changed() {
        return;
    }

    for mut text in &mut score_query {
        text.0 = format!("{num}", num = progress.score);
    }
    for mut text in &mut orb_query {
        text.0 = format!(
            "orbs {collected}/{total}",
            collected = progress.orbs_collected,
            total = progress.orbs_total
        );
    }
}

/// A small "+100" drifts up from every collected orb.
fn spawn_pickup_popups(
    mut commands: Commands,
    mut events: EventReader<OrbCollected>,
    board: Res<Board>,
    camera: Query<(&Camera, &GlobalTransform)>,
    asset_server: Res<AssetServer>,
) {
    for event in events.read() {
        let (camera, camera_transform) = camera.single();
        let Ok(screen_position) =
            camera.world_to_viewport(camera_transform, board.to_world(event.cell))
        else {
            continue;
        };
        spawn_floating_score(&mut commands, screen_position, "+100", GOLD, &asset_server);
    }
}
