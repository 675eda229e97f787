use bevy::prelude::*;

pub const TILE_SIZE: f32 = 40.0;
pub const FLOE_SIZE: f32 = TILE_SIZE - 2.0;
pub const ORB_RADIUS: f32 = TILE_SIZE * 0.22;
pub const BEAR_SIZE: f32 = TILE_SIZE * 0.75;
pub const SINK_DELAY: f32 = 0.8; // seconds from lowering to fully sunken

pub const WATER_COLOR: Color = Color::srgb(0.04, 0.15, 0.29);
pub const FLOE_COLOR: Color = Color::srgb(0.85, 0.93, 0.98);
pub const LOWERING_COLOR: Color = Color::srgb(0.55, 0.70, 0.82);
pub const ORB_COLOR: Color = Color::srgb(1.0, 0.84, 0.25);

/// Logical state of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloeState {
    /// No floe here, just water.
    #[default]
    Water,
    Open,
    Lowering,
    Sunken,
}

/// Sprite marker for one floe tile.
#[derive(Component)]
pub struct Floe {
    pub cell: IVec2,
}

#[derive(Component)]
pub struct Orb {
    pub cell: IVec2,
}

/// Sink animation handle for a floe that was just vacated.
#[derive(Component)]
pub struct Sinking {
    pub timer: Timer,
}

/// Everything spawned for the current level, despawned on respawn.
#[derive(Component)]
pub struct LevelLifetime;

#[derive(Event)]
pub struct OrbCollected {
    pub cell: IVec2,
}

#[derive(Event)]
pub struct FloeLowering {
    pub cell: IVec2,
}

#[derive(Event)]
pub struct FloeSunk {
    pub cell: IVec2,
}
