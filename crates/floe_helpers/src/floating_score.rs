use core::time::Duration;

use bevy::prelude::*;

use crate::FONT;

const RISE_DISTANCE: f32 = 60.0;
const LIFETIME: Duration = Duration::from_millis(900);

#[derive(Component)]
pub struct FloatingScore {
    timer: Timer,
    origin: Vec2,
    color: Srgba,
}

// Short-lived score popup at a screen position, drifting up while fading out.
pub fn spawn_floating_score(
    commands: &mut Commands,
    position: Vec2,
    text: &str,
    color: Srgba,
    asset_server: &Res<AssetServer>,
) {
    commands.spawn((
        Text::new(text),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::Srgba(color)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(position.x),
            top: Val::Px(position.y),
            ..default()
        },
        FloatingScore {
            timer: Timer::new(LIFETIME, TimerMode::Once),
            origin: position,
            color,
        },
    ));
}

pub fn animate_floating_scores(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Node, &mut TextColor, &mut FloatingScore)>,
) {
    for (entity, mut node, mut text_color, mut floating_score) in &mut query {
        floating_score.timer.tick(time.delta());
        let progress = floating_score.timer.fraction();

        // Ease out so the popup decelerates as it fades
        let eased = 1.0 - (1.0 - progress) * (1.0 - progress);
        node.top = Val::Px(RISE_DISTANCE.mul_add(-eased, floating_score.origin.y));
        text_color.0 = Color::Srgba(floating_score.color.with_alpha(1.0 - progress));

        if floating_score.timer.finished() {
            commands.entity(entity).despawn();
        }
    }
}
