use bevy::prelude::*;
use floe_helpers::restart::Restartable;
use serde::{Deserialize, Serialize};

use crate::bear::MoveCompleted;
use crate::board::{Board, OrbCollected};

const ORB_SCORE: u32 = 100;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum GameState {
    #[default]
    Welcome,
    Playing,
    Cleared,
    GameOver,
}

#[derive(Resource, Default, Copy, Clone, Deserialize, Serialize)]
pub struct GameProgress {
    pub score: u32,
    pub level: u32,
    pub orbs_collected: u32,
    pub orbs_total: u32,
    pub moves_made: u32,
}

impl Restartable for GameProgress {
    type State = GameState;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn initial_state() -> GameState {
        GameState::Playing
    }
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameProgress>().add_systems(
            Update,
            (handle_scoring, check_outcome)
                .chain()
                .run_if(in_state(GameState::Playing).and(resource_exists::<Board>)),
        );
    }
}

fn handle_scoring(
    mut progress: ResMut<GameProgress>,
    mut orb_events: EventReader<OrbCollected>,
    mut move_events: EventReader<MoveCompleted>,
) {
    let moves = move_events.read().count() as u32;
    if moves > 0 {
        progress.moves_made += moves;
    }
    for _ in orb_events.read() {
        progress.score += ORB_SCORE;
        progress.orbs_collected += 1;
    }
}

/// Decides the round after each completed move: all orbs collected wins,
/// a bear with no legal step left loses.
fn check_outcome(
    board: Res<Board>,
    progress: Res<GameProgress>,
    mut move_events: EventReader<MoveCompleted>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in move_events.read() {
        if progress.orbs_total > 0 && progress.orbs_collected >= progress.orbs_total {
            info!(
                "level {} cleared in {} moves",
                progress.level, progress.moves_made
            );
            next_state.set(GameState::Cleared);
            return;
        }
        if board.is_stranded(event.cell) {
            info!("bear stranded at {}", event.cell);
            next_state.set(GameState::GameOver);
            return;
        }
    }
}
