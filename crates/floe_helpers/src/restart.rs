use bevy::prelude::*;
use bevy::state::state::FreelyMutableState;

#[derive(Component)]
pub struct RestartButton;

#[derive(Component)]
pub struct CleanupMarker;

pub trait Restartable: Resource {
    fn reset(&mut self);
    fn initial_state() -> Self::State;
    type State: States + FreelyMutableState;
}

// Pressing the restart button (or R) resets the game resource and jumps
// back to the game's initial state.
pub fn handle_restart<T: Restartable>(
    mut next_state: ResMut<NextState<T::State>>,
    mut restartable: ResMut<T>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut interaction_query: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
) {
    let pressed = keyboard_input.just_pressed(KeyCode::KeyR)
        || interaction_query
            .iter_mut()
            .any(|interaction| *interaction == Interaction::Pressed);

    if pressed {
        restartable.reset();
        next_state.set(T::initial_state());
    }
}

pub fn cleanup_marked_entities(mut commands: Commands, query: Query<Entity, With<CleanupMarker>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
