use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use super::components::{
    BEAR_SIZE, FLOE_COLOR, FLOE_SIZE, Floe, LevelLifetime, ORB_COLOR, ORB_RADIUS, Orb,
};
use super::layout::Layout;
use super::Board;
use crate::bear::{Bear, MoveConfig};
use crate::controls::{self, Action};
use crate::game::GameProgress;

/// Orbs placed per level, drawn from the map's candidate cells.
const ORB_GOAL: usize = 3;

pub fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut progress: ResMut<GameProgress>,
    previous: Query<Entity, With<LevelLifetime>>,
) {
    for entity in &previous {
        commands.entity(entity).despawn_recursive();
    }

    let layout = Layout::level(progress.level as usize);

    // Shuffle the candidate cells so reruns of a level differ
    let mut orb_cells = layout.orb_candidates.clone();
    for i in (1..orb_cells.len()).rev() {
        let j = fastrand::usize(..=i);
        orb_cells.swap(i, j);
    }
    orb_cells.truncate(ORB_GOAL);

    let board = Board::from_layout(&layout, &orb_cells);

    for cell in &layout.open_cells {
        commands.spawn((
            Sprite::from_color(FLOE_COLOR, Vec2::new(FLOE_SIZE, FLOE_SIZE)),
            Transform::from_translation(board.to_world(*cell)),
            Floe { cell: *cell },
            LevelLifetime,
        ));
    }

    let orb_mesh = meshes.add(Circle::new(ORB_RADIUS));
    let orb_material = materials.add(ColorMaterial::from(ORB_COLOR));
    for cell in &orb_cells {
        commands.spawn((
            Mesh2d(orb_mesh.clone()),
            MeshMaterial2d(orb_material.clone()),
            Transform::from_translation(board.to_world(*cell) + Vec3::Z),
            Orb { cell: *cell },
            LevelLifetime,
        ));
    }

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(BEAR_SIZE * 0.5))),
        MeshMaterial2d(materials.add(ColorMaterial::from(Color::WHITE))),
        Transform::from_translation(board.to_world(layout.bear_start) + Vec3::Z * 2.0),
        Bear::default(),
        MoveConfig::default(),
        InputManagerBundle::<Action> {
            input_map: controls::create_input_map(),
            ..default()
        },
        LevelLifetime,
    ));

    info!(
        "level {} spawned, {} orbs on a {}x{} board",
        progress.level,
        orb_cells.len(),
        board.width(),
        board.height()
    );

    progress.orbs_total = orb_cells.len() as u32;
    progress.orbs_collected = 0;
    commands.insert_resource(board);
}
