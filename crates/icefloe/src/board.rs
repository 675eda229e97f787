use bevy::prelude::*;
use strum::IntoEnumIterator;

mod components;
mod layout;
mod sinking;
mod spawning;

pub use components::*;
pub use layout::{LEVELS, Layout, LayoutError};
use sinking::{begin_sinking, update_sinking};
use spawning::spawn_level;

use crate::bear::Direction;
use crate::game::GameState;

/// The grid the bear walks on. Owns tile state, the world/grid coordinate
/// mapping, move legality and the orb bookkeeping; everything visual
/// reacts to the events this produces.
#[derive(Resource)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<FloeState>,
    orbs: Vec<IVec2>,
}

impl Board {
    pub fn from_layout(layout: &Layout, orbs: &[IVec2]) -> Self {
        let mut tiles = vec![FloeState::Water; (layout.width * layout.height) as usize];
        for cell in &layout.open_cells {
            let index = (cell.x + cell.y * layout.width) as usize;
            if let Some(tile) = tiles.get_mut(index) {
                *tile = FloeState::Open;
            }
        }
        Self {
            width: layout.width,
            height: layout.height,
            tiles,
            orbs: orbs.to_vec(),
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some((cell.x + cell.y * self.width) as usize)
    }

    /// Cells outside the board read as open water.
    pub fn floe(&self, cell: IVec2) -> FloeState {
        self.index(cell)
            .and_then(|index| self.tiles.get(index))
            .copied()
            .unwrap_or(FloeState::Water)
    }

    pub fn set_floe(&mut self, cell: IVec2, state: FloeState) {
        if let Some(index) = self.index(cell) {
            if let Some(tile) = self.tiles.get_mut(index) {
                *tile = state;
            }
        }
    }

    /// Center of a grid cell in world space. The board is centered on the
    /// world origin.
    pub fn to_world(&self, cell: IVec2) -> Vec3 {
        let origin = self.world_origin();
        Vec3::new(
            (cell.x as f32).mul_add(TILE_SIZE, -origin.x),
            (cell.y as f32).mul_add(TILE_SIZE, -origin.y),
            0.0,
        )
    }

    /// Nearest grid cell for a world position. Exact inverse of
    /// [`Self::to_world`] on tile centers.
    pub fn to_logical(&self, position: Vec3) -> IVec2 {
        let origin = self.world_origin();
        IVec2::new(
            ((position.x + origin.x) / TILE_SIZE).round() as i32,
            ((position.y + origin.y) / TILE_SIZE).round() as i32,
        )
    }

    fn world_origin(&self) -> Vec2 {
        Vec2::new(
            (self.width - 1) as f32 * 0.5 * TILE_SIZE,
            (self.height - 1) as f32 * 0.5 * TILE_SIZE,
        )
    }

    /// A step is legal when the destination floe is still fully open.
    /// Lowering and sunken floes no longer take the bear's weight.
    pub fn is_legal_move(&self, from: IVec2, direction: Direction) -> bool {
        self.floe(from + direction.step()) == FloeState::Open
    }

    /// Removes the orb on the given cell, if any.
    pub fn take_orb(&mut self, cell: IVec2) -> bool {
        let before = self.orbs.len();
        self.orbs.retain(|orb| *orb != cell);
        self.orbs.len() < before
    }

    pub fn orbs_remaining(&self) -> usize {
        self.orbs.len()
    }

    /// The floe the bear just vacated starts lowering into the water.
    /// Returns the affected cell so visuals and audio can react.
    pub fn act_on_previous_tile(&mut self, arrived: IVec2, direction: Direction) -> Option<IVec2> {
        let vacated = arrived - direction.step();
        if self.floe(vacated) == FloeState::Open {
            self.set_floe(vacated, FloeState::Lowering);
            Some(vacated)
        } else {
            None
        }
    }

    /// True when no direction out of the cell is legal any more.
    pub fn is_stranded(&self, cell: IVec2) -> bool {
        Direction::iter().all(|direction| !self.is_legal_move(cell, direction))
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OrbCollected>()
            .add_event::<FloeLowering>()
            .add_event::<FloeSunk>()
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(
                Update,
                (collect_orbs, begin_sinking, update_sinking)
                    .run_if(in_state(GameState::Playing).and(resource_exists::<Board>)),
            );
    }
}

fn collect_orbs(
    mut commands: Commands,
    mut events: EventReader<OrbCollected>,
    orbs: Query<(Entity, &Orb)>,
) {
    for event in events.read() {
        for (entity, orb) in &orbs {
            if orb.cell == event.cell {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}
