use std::f32::consts::SQRT_2;

use bevy::prelude::*;
use floe_helpers::input::{
    just_pressed_world_position, just_released_world_position, pressed_world_position,
};
use leafwing_input_manager::prelude::*;

use crate::game::GameState;

// This is the list of "things in the game I want to be able to do based on input"
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum Action {
    #[actionlike(DualAxis)]
    Move,
}

// Map keyboard and gamepad onto the single move axis pair
pub fn create_input_map() -> InputMap<Action> {
    InputMap::default()
        .with_dual_axis(Action::Move, VirtualDPad::wasd())
        .with_dual_axis(Action::Move, VirtualDPad::arrow_keys())
        .with_dual_axis(Action::Move, GamepadStick::LEFT)
}

const JOYSTICK_FRAME_SIZE: f32 = 64.0;
const JOYSTICK_LEVER_SIZE: f32 = 32.0;
const JOYSTICK_THRESHOLD: f32 = 0.5;
const JOYSTICK_NEUTRAL: f32 = 0.25;
const JOYSTICK_COLOR: Color = Color::srgba(0.75, 0.75, 0.75, 0.5);

#[derive(Component, Default)]
struct JoystickFrame;

#[derive(Component, Default)]
struct JoystickLever;

/// Raw 2D vector read from the on-screen joystick. Zero while the
/// pointer is up or inside the dead zone.
#[derive(Resource, Default)]
pub struct PointerVector(pub Vec2);

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<Action>::default())
            .init_resource::<PointerVector>()
            .add_systems(Startup, spawn_joystick)
            .add_systems(
                Update,
                pointer_joystick.run_if(in_state(GameState::Playing)),
            );
    }
}

fn spawn_joystick(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let frame = meshes.add(Annulus::new(
        JOYSTICK_FRAME_SIZE * 0.875,
        JOYSTICK_FRAME_SIZE,
    ));
    let lever = meshes.add(Circle::new(JOYSTICK_LEVER_SIZE));
    let material = materials.add(JOYSTICK_COLOR);

    commands.spawn((
        Mesh2d(frame),
        MeshMaterial2d(material.clone()),
        Transform::from_xyz(0.0, 0.0, 10.0),
        JoystickFrame,
        Visibility::Hidden,
    ));
    commands.spawn((
        Mesh2d(lever),
        MeshMaterial2d(material),
        Transform::from_xyz(0.0, 0.0, 10.0),
        JoystickLever,
        Visibility::Hidden,
    ));
}

/// Touch/mouse joystick: press anywhere to plant the frame, drag to
/// steer. Feeds [`PointerVector`] with the raw lever direction.
fn pointer_joystick(
    window: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut pointer: ResMut<PointerVector>,
    mut frame_query: Query<
        (&mut Transform, &mut Visibility),
        (With<JoystickFrame>, Without<JoystickLever>),
    >,
    mut lever_query: Query<
        (&mut Transform, &mut Visibility),
        (With<JoystickLever>, Without<JoystickFrame>),
    >,
) {
    if let Some(world_position) =
        just_pressed_world_position(&mouse_button_input, &touch_input, &window, &camera)
    {
        let (mut frame, mut frame_visibility) = frame_query.single_mut();
        frame.translation.x = world_position.x;
        frame.translation.y = world_position.y;
        *frame_visibility = Visibility::Inherited;
        let (_, mut lever_visibility) = lever_query.single_mut();
        *lever_visibility = Visibility::Inherited;
    }

    if let Some(world_position) =
        pressed_world_position(&mouse_button_input, &touch_input, &window, &camera)
    {
        let (frame, _) = frame_query.single_mut();
        let (mut lever, _) = lever_query.single_mut();
        let diff = Vec2::new(
            world_position.x - frame.translation.x,
            world_position.y - frame.translation.y,
        );
        let limit = JOYSTICK_FRAME_SIZE - JOYSTICK_LEVER_SIZE;
        let dist = limit.mul_add(
            -JOYSTICK_NEUTRAL,
            diff.length().clamp(limit * JOYSTICK_NEUTRAL, limit),
        );
        let input = (diff.normalize_or_zero() * dist).normalize_or_zero();
        let offset = input * limit;
        lever.translation.x = frame.translation.x + offset.x;
        lever.translation.y = frame.translation.y + offset.y;

        // Snap to a cardinal axis once the lever leaves the dead zone
        pointer.0 = if input.length() < JOYSTICK_THRESHOLD {
            Vec2::ZERO
        } else {
            let inv_sqrt_2 = 1.0 / SQRT_2;
            if input.dot(Vec2::Y).abs() > inv_sqrt_2 {
                Vec2::new(0.0, input.y.signum())
            } else if input.dot(Vec2::X).abs() > inv_sqrt_2 {
                Vec2::new(input.x.signum(), 0.0)
            } else {
                Vec2::ZERO
            }
        };
    }

    if just_released_world_position(&mouse_button_input, &touch_input, &window, &camera).is_some() {
        let (_, mut frame_visibility) = frame_query.single_mut();
        *frame_visibility = Visibility::Hidden;
        let (_, mut lever_visibility) = lever_query.single_mut();
        *lever_visibility = Visibility::Hidden;
        pointer.0 = Vec2::ZERO;
    }
}
