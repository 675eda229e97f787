use bevy::prelude::*;

use crate::bear::Direction;
use crate::game::GameState;

/// An in-flight slide toward a tile center. Attached to the entity being
/// animated and removed on arrival; there is no cancel path.
#[derive(Component, Clone, Copy, Debug)]
pub struct Slide {
    pub target: Vec3,
    pub destination: IVec2,
    pub direction: Direction,
    pub speed: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Slide {
    pub const fn new(
        target: Vec3,
        destination: IVec2,
        direction: Direction,
        speed: f32,
        duration: f32,
    ) -> Self {
        Self {
            target,
            destination,
            direction,
            speed,
            duration,
            elapsed: 0.0,
        }
    }
}

#[derive(Event)]
pub struct SlideCompleted {
    pub entity: Entity,
    pub direction: Direction,
}

/// Hook consulted every frame while a slide is in flight. Returning true
/// marks the crossing as contested; nothing acts on the answer yet.
#[derive(Resource)]
pub struct ChallengePolicy(pub fn(IVec2) -> bool);

impl Default for ChallengePolicy {
    fn default() -> Self {
        Self(|_| false)
    }
}

pub struct NavigatorPlugin;

impl Plugin for NavigatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SlideCompleted>()
            .init_resource::<ChallengePolicy>()
            .add_systems(
                Update,
                advance_slides.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Moves each sliding entity toward its target at the slide's speed,
/// snapping onto the tile center on arrival or when the slide has run
/// for its full duration.
pub fn advance_slides(
    mut commands: Commands,
    time: Res<Time>,
    policy: Res<ChallengePolicy>,
    mut slides: Query<(Entity, &mut Transform, &mut Slide)>,
    mut completed: EventWriter<SlideCompleted>,
) {
    for (entity, mut transform, mut slide) in &mut slides {
        slide.elapsed += time.delta_secs();

        // TODO: decide what a contested crossing should do once floes can
        // lower in unrelated places while a slide is in flight
        if (policy.0)(slide.destination) {
            warn!("crossing into {} contested, no handling defined", slide.destination);
        }

        let remaining = slide.target - transform.translation;
        let step = slide.speed * time.delta_secs();
        if remaining.length() <= step || slide.elapsed >= slide.duration {
            transform.translation = slide.target;
            commands.entity(entity).remove::<Slide>();
            completed.send(SlideCompleted {
                entity,
                direction: slide.direction,
            });
        } else {
            transform.translation += remaining.normalize() * step;
        }
    }
}
