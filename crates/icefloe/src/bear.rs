use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use strum::EnumIter;

use crate::board::{Board, FloeLowering, OrbCollected, TILE_SIZE};
use crate::controls::{Action, PointerVector};
use crate::game::GameState;
use crate::navigator::{Slide, SlideCompleted, advance_slides};

/// Cardinal directions the bear can walk in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step in grid coordinates.
    pub const fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, 1),
            Self::South => IVec2::new(0, -1),
            Self::East => IVec2::new(1, 0),
            Self::West => IVec2::new(-1, 0),
        }
    }

    /// Unit displacement in world space.
    pub fn offset(self) -> Vec3 {
        self.step().as_vec2().extend(0.0)
    }
}

/// Picks the dominant cardinal axis of a raw input vector. Ties go to
/// the horizontal axis.
pub fn resolve_direction(input: Vec2) -> Option<Direction> {
    if input == Vec2::ZERO {
        return None;
    }

    let direction = if input.x.abs() >= input.y.abs() {
        if input.x > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if input.y > 0.0 {
        Direction::North
    } else {
        Direction::South
    };

    Some(direction)
}

/// Single-slot move gate. While a slide is in flight every further
/// request is dropped on the floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveState {
    #[default]
    Idle,
    Moving(Direction),
}

#[derive(Component, Default)]
pub struct Bear {
    /// Grid coordinate, recomputed from the translation after every
    /// completed move rather than tracked independently.
    pub logical_pos: IVec2,
    pub state: MoveState,
}

/// Time the bear takes to cross one tile and the world-space length of
/// that crossing. Fixed per bear.
#[derive(Component, Clone, Copy)]
pub struct MoveConfig {
    pub duration: f32,
    pub distance: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            duration: 0.18,
            distance: TILE_SIZE,
        }
    }
}

impl MoveConfig {
    pub fn speed(&self) -> f32 {
        self.distance / self.duration
    }
}

impl Bear {
    /// Starts a move if both gates pass: nothing already in flight, and
    /// the board allows the step. A refused request is a silent no-op.
    pub fn try_begin_move(
        &mut self,
        direction: Direction,
        board: &Board,
        translation: Vec3,
        config: &MoveConfig,
    ) -> Option<Slide> {
        if self.state != MoveState::Idle {
            return None;
        }
        if !board.is_legal_move(self.logical_pos, direction) {
            return None;
        }

        self.state = MoveState::Moving(direction);
        Some(Slide::new(
            translation + direction.offset() * config.distance,
            self.logical_pos + direction.step(),
            direction,
            config.speed(),
            config.duration,
        ))
    }
}

#[derive(Event)]
pub struct MoveStarted {
    pub direction: Direction,
}

#[derive(Event)]
pub struct MoveCompleted {
    pub cell: IVec2,
}

pub struct BearPlugin;

impl Plugin for BearPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveStarted>()
            .add_event::<MoveCompleted>()
            .add_systems(
                Update,
                (
                    sync_spawned_bears,
                    request_move.after(sync_spawned_bears).before(advance_slides),
                    finish_move.after(advance_slides),
                )
                    .run_if(in_state(GameState::Playing).and(resource_exists::<Board>)),
            );
    }
}

/// Derives the initial grid coordinate from wherever the bear was placed
/// in the world.
fn sync_spawned_bears(board: Res<Board>, mut bears: Query<(&mut Bear, &Transform), Added<Bear>>) {
    for (mut bear, transform) in &mut bears {
        bear.logical_pos = board.to_logical(transform.translation);
    }
}

fn request_move(
    mut commands: Commands,
    board: Res<Board>,
    pointer: Res<PointerVector>,
    mut bears: Query<(Entity, &ActionState<Action>, &mut Bear, &MoveConfig, &Transform)>,
    mut started: EventWriter<MoveStarted>,
) {
    for (entity, action_state, mut bear, config, transform) in &mut bears {
        let mut input = action_state.clamped_axis_pair(&Action::Move);
        if input == Vec2::ZERO {
            input = pointer.0;
        }

        let Some(direction) = resolve_direction(input) else {
            continue;
        };

        if let Some(slide) = bear.try_begin_move(direction, &board, transform.translation, config) {
            commands.entity(entity).insert(slide);
            started.send(MoveStarted { direction });
        }
    }
}

/// Runs once per completed slide. Order matters here: resync the grid
/// coordinate first, then the board effects for the tile arrived on and
/// the tile left behind, then reopen the gate.
pub(crate) fn finish_move(
    mut completed: EventReader<SlideCompleted>,
    mut board: ResMut<Board>,
    mut bears: Query<(&mut Bear, &Transform)>,
    mut orbs: EventWriter<OrbCollected>,
    mut lowering: EventWriter<FloeLowering>,
    mut moved: EventWriter<MoveCompleted>,
) {
    for event in completed.read() {
        let Ok((mut bear, transform)) = bears.get_mut(event.entity) else {
            continue;
        };

        bear.logical_pos = board.to_logical(transform.translation);
        if board.take_orb(bear.logical_pos) {
            orbs.send(OrbCollected {
                cell: bear.logical_pos,
            });
        }
        if let Some(cell) = board.act_on_previous_tile(bear.logical_pos, event.direction) {
            lowering.send(FloeLowering { cell });
        }
        bear.state = MoveState::Idle;
        moved.send(MoveCompleted {
            cell: bear.logical_pos,
        });
    }
}
