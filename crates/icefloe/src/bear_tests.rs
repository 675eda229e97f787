//! Tests for direction resolution and the move gate.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use strum::IntoEnumIterator;

    use crate::bear::{Bear, Direction, MoveConfig, MoveState, resolve_direction};
    use crate::board::{Board, Layout, TILE_SIZE};

    fn open_strip() -> Board {
        let layout = Layout::parse(
            "\
~~~~~
~Bo.~
~~~~~",
        )
        .expect("test map parses");
        Board::from_layout(&layout, &layout.orb_candidates)
    }

    #[test]
    fn zero_input_resolves_nothing() {
        assert_eq!(resolve_direction(Vec2::ZERO), None);
    }

    #[test]
    fn cardinal_inputs_resolve_directly() {
        assert_eq!(resolve_direction(Vec2::new(1.0, 0.0)), Some(Direction::East));
        assert_eq!(
            resolve_direction(Vec2::new(-1.0, 0.0)),
            Some(Direction::West)
        );
        assert_eq!(
            resolve_direction(Vec2::new(0.0, 1.0)),
            Some(Direction::North)
        );
        assert_eq!(
            resolve_direction(Vec2::new(0.0, -1.0)),
            Some(Direction::South)
        );
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            resolve_direction(Vec2::new(0.3, 0.9)),
            Some(Direction::North)
        );
        assert_eq!(
            resolve_direction(Vec2::new(-0.8, 0.2)),
            Some(Direction::West)
        );
        assert_eq!(
            resolve_direction(Vec2::new(0.1, -0.7)),
            Some(Direction::South)
        );
    }

    #[test]
    fn diagonal_ties_go_horizontal() {
        assert_eq!(
            resolve_direction(Vec2::new(0.5, 0.5)),
            Some(Direction::East)
        );
        assert_eq!(
            resolve_direction(Vec2::new(-0.5, -0.5)),
            Some(Direction::West)
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let input = Vec2::new(0.42, -0.17);
        assert_eq!(resolve_direction(input), resolve_direction(input));
    }

    #[test]
    fn every_direction_has_a_unit_step() {
        for direction in Direction::iter() {
            let step = direction.step();
            assert_eq!(step.x.abs() + step.y.abs(), 1, "step must be a unit step");
            assert_eq!(
                direction.offset(),
                step.as_vec2().extend(0.0),
                "world offset must match the grid step"
            );
        }
    }

    #[test]
    fn legal_move_opens_the_gate_and_computes_the_slide() {
        let board = open_strip();
        let config = MoveConfig {
            duration: 0.2,
            distance: TILE_SIZE,
        };
        let start = IVec2::new(1, 1);
        let translation = board.to_world(start);
        let mut bear = Bear {
            logical_pos: start,
            state: MoveState::Idle,
        };

        let slide = bear
            .try_begin_move(Direction::East, &board, translation, &config)
            .expect("move onto an open floe starts");

        assert_eq!(bear.state, MoveState::Moving(Direction::East));
        assert_eq!(slide.destination, IVec2::new(2, 1));
        assert_eq!(
            slide.target,
            translation + Direction::East.offset() * TILE_SIZE
        );
        assert!((slide.speed - TILE_SIZE / 0.2).abs() < f32::EPSILON, "speed is distance over duration");
    }

    #[test]
    fn requests_while_moving_are_dropped() {
        let board = open_strip();
        let config = MoveConfig::default();
        let start = IVec2::new(1, 1);
        let translation = board.to_world(start);
        let mut bear = Bear {
            logical_pos: start,
            state: MoveState::Idle,
        };

        assert!(
            bear.try_begin_move(Direction::East, &board, translation, &config)
                .is_some(),
            "first request starts a slide"
        );
        for _ in 0..3 {
            assert!(
                bear.try_begin_move(Direction::East, &board, translation, &config)
                    .is_none(),
                "requests are no-ops while a slide is in flight"
            );
        }
        assert_eq!(bear.state, MoveState::Moving(Direction::East));
    }

    #[test]
    fn illegal_moves_leave_the_bear_idle() {
        let board = open_strip();
        let config = MoveConfig::default();
        let start = IVec2::new(1, 1);
        let translation = board.to_world(start);
        let mut bear = Bear {
            logical_pos: start,
            state: MoveState::Idle,
        };

        // north of the strip is water
        assert!(
            bear.try_begin_move(Direction::North, &board, translation, &config)
                .is_none(),
            "a step into water never starts"
        );
        assert_eq!(bear.state, MoveState::Idle);
        assert_eq!(bear.logical_pos, start);
    }
}
