//! Tests for level parsing, the coordinate mapping and tile-state rules.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::bear::Direction;
    use crate::board::{Board, FloeState, LEVELS, Layout, LayoutError};

    const RING: &str = "\
~~~~
~.o~
~B.~
~~~~";

    fn ring_board() -> (Layout, Board) {
        let layout = Layout::parse(RING).expect("test map parses");
        let orbs = layout.orb_candidates.clone();
        let board = Board::from_layout(&layout, &orbs);
        (layout, board)
    }

    #[test]
    fn parse_reads_the_map_upside_up() {
        let (layout, _) = ring_board();
        assert_eq!(layout.width, 4);
        assert_eq!(layout.height, 4);
        // bottom text row is grid row 0, so the bear sits at y = 1
        assert_eq!(layout.bear_start, IVec2::new(1, 1));
        assert_eq!(layout.orb_candidates, vec![IVec2::new(2, 2)]);
        assert_eq!(layout.open_cells.len(), 4);
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert!(matches!(Layout::parse(""), Err(LayoutError::Empty)));
        assert!(matches!(
            Layout::parse("~Bo~\n~~~"),
            Err(LayoutError::RaggedRow { row: 1, expected: 4, got: 3 })
        ));
        assert!(matches!(
            Layout::parse("~Bxo~"),
            Err(LayoutError::UnknownTile { tile: 'x', row: 0, column: 2 })
        ));
        assert!(matches!(
            Layout::parse("~BoB~"),
            Err(LayoutError::DuplicateBearStart)
        ));
        assert!(matches!(
            Layout::parse("~.o.~"),
            Err(LayoutError::MissingBearStart)
        ));
        assert!(matches!(Layout::parse("~B..~"), Err(LayoutError::NoOrbs)));
    }

    #[test]
    fn world_and_logical_coordinates_invert() {
        let (layout, board) = ring_board();
        for cell in &layout.open_cells {
            assert_eq!(
                board.to_logical(board.to_world(*cell)),
                *cell,
                "conversion must invert on tile centers"
            );
        }
    }

    #[test]
    fn the_grid_is_centered_on_the_origin() {
        let (_, board) = ring_board();
        // 4x4 board: cell (0,0) sits one and a half tiles below-left of center
        assert_eq!(board.to_world(IVec2::ZERO), Vec3::new(-60.0, -60.0, 0.0));
        assert_eq!(board.to_world(IVec2::new(3, 3)), Vec3::new(60.0, 60.0, 0.0));
    }

    #[test]
    fn legality_follows_tile_state() {
        let (_, mut board) = ring_board();
        let bear = IVec2::new(1, 1);

        assert!(board.is_legal_move(bear, Direction::East));
        assert!(board.is_legal_move(bear, Direction::North));
        assert!(!board.is_legal_move(bear, Direction::South), "water is not walkable");
        assert!(!board.is_legal_move(bear, Direction::West), "water is not walkable");

        board.set_floe(IVec2::new(2, 1), FloeState::Lowering);
        assert!(
            !board.is_legal_move(bear, Direction::East),
            "a lowering floe no longer takes weight"
        );
        board.set_floe(IVec2::new(2, 1), FloeState::Sunken);
        assert!(!board.is_legal_move(bear, Direction::East));
    }

    #[test]
    fn cells_off_the_board_read_as_water() {
        let (_, board) = ring_board();
        assert_eq!(board.floe(IVec2::new(-1, 0)), FloeState::Water);
        assert_eq!(board.floe(IVec2::new(0, 99)), FloeState::Water);
    }

    #[test]
    fn vacated_floes_start_lowering_once() {
        let (_, mut board) = ring_board();
        // bear stepped East onto (2,1); it came from (1,1)
        let arrived = IVec2::new(2, 1);

        let vacated = board.act_on_previous_tile(arrived, Direction::East);
        assert_eq!(vacated, Some(IVec2::new(1, 1)));
        assert_eq!(board.floe(IVec2::new(1, 1)), FloeState::Lowering);

        // acting again on the same crossing changes nothing
        assert_eq!(board.act_on_previous_tile(arrived, Direction::East), None);
        assert_eq!(board.floe(IVec2::new(1, 1)), FloeState::Lowering);
    }

    #[test]
    fn orbs_are_taken_once() {
        let (_, mut board) = ring_board();
        let orb = IVec2::new(2, 2);

        assert_eq!(board.orbs_remaining(), 1);
        assert!(board.take_orb(orb));
        assert_eq!(board.orbs_remaining(), 0);
        assert!(!board.take_orb(orb), "an orb can only be picked up once");
        assert!(!board.take_orb(IVec2::new(1, 1)), "empty cells hold no orb");
    }

    #[test]
    fn stranded_means_no_legal_direction() {
        let (_, mut board) = ring_board();
        let bear = IVec2::new(1, 1);
        assert!(!board.is_stranded(bear));

        board.set_floe(IVec2::new(2, 1), FloeState::Sunken);
        board.set_floe(IVec2::new(1, 2), FloeState::Sunken);
        assert!(board.is_stranded(bear), "all four neighbours are gone");
    }

    #[test]
    fn bundled_levels_parse() {
        for (index, map) in LEVELS.iter().enumerate() {
            let layout = Layout::parse(map).unwrap_or_else(|error| {
                panic!("bundled level {index} must parse: {error}");
            });
            assert!(
                layout.orb_candidates.len() >= 3,
                "level {index} needs enough orb cells"
            );
        }
    }

    #[test]
    fn level_lookup_wraps_past_the_end() {
        let direct = Layout::level(0);
        let wrapped = Layout::level(LEVELS.len());
        assert_eq!(direct.bear_start, wrapped.bear_start);
        assert_eq!(direct.open_cells, wrapped.open_cells);
    }
}
