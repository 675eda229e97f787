use bevy::prelude::*;

use super::components::{
    Floe, FloeLowering, FloeState, FloeSunk, LOWERING_COLOR, SINK_DELAY, Sinking,
};
use super::Board;

/// Starts the sink timer on the floe the bear just left.
pub fn begin_sinking(
    mut commands: Commands,
    mut events: EventReader<FloeLowering>,
    mut floes: Query<(Entity, &Floe, &mut Sprite)>,
) {
    for event in events.read() {
        for (entity, floe, mut sprite) in &mut floes {
            if floe.cell == event.cell {
                sprite.color = LOWERING_COLOR;
                commands.entity(entity).insert(Sinking {
                    timer: Timer::from_seconds(SINK_DELAY, TimerMode::Once),
                });
            }
        }
    }
}

/// Shrinks lowering floes into the water and flips them to sunken when
/// the timer runs out.
pub fn update_sinking(
    mut commands: Commands,
    time: Res<Time>,
    mut board: ResMut<Board>,
    mut sunk: EventWriter<FloeSunk>,
    mut floes: Query<(Entity, &Floe, &mut Transform, &mut Sinking)>,
) {
    for (entity, floe, mut transform, mut sinking) in &mut floes {
        sinking.timer.tick(time.delta());
        transform.scale = Vec3::splat(0.4f32.mul_add(-sinking.timer.fraction(), 1.0));

        if sinking.timer.finished() {
            board.set_floe(floe.cell, FloeState::Sunken);
            sunk.send(FloeSunk { cell: floe.cell });
            commands.entity(entity).despawn_recursive();
        }
    }
}
