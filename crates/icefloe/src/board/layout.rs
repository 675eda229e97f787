use bevy::log::warn;
use bevy::math::IVec2;
use thiserror::Error;

/// Level maps, drawn top row first. `~` is water, `.` an open floe,
/// `o` a floe that may hold an orb, `B` the bear's starting floe.
pub const LEVELS: [&str; 3] = [
    "\
~~~~~~~~
~.o..o.~
~......~
~B.o...~
~.o...o~
~~~~~~~~",
    "\
~~~~~~~~
~..o..o~
~.~~~..~
~.~o~..~
~.~~~.o~
~B....o~
~~~~~~~~",
    "\
~~~~~~~~~
~o...~o.~
~.~.~.~.~
~.~.o.~.~
~.~~~~~.~
~B..o...~
~~~~~~~~~",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} is {got} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },
    #[error("layout has no bear start")]
    MissingBearStart,
    #[error("layout has more than one bear start")]
    DuplicateBearStart,
    #[error("layout has no orb cells")]
    NoOrbs,
}

/// Parsed level map in grid coordinates, y growing upward.
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub open_cells: Vec<IVec2>,
    pub orb_candidates: Vec<IVec2>,
    pub bear_start: IVec2,
}

impl Layout {
    pub fn parse(map: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = map
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let height = rows.len();
        if height == 0 {
            return Err(LayoutError::Empty);
        }
        let width = rows.first().map_or(0, |row| row.chars().count());

        let mut open_cells = Vec::new();
        let mut orb_candidates = Vec::new();
        let mut bear_start = None;

        for (row_index, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(LayoutError::RaggedRow {
                    row: row_index,
                    expected: width,
                    got,
                });
            }

            for (column, tile) in row.chars().enumerate() {
                // top row of the map is the highest grid row
                let cell = IVec2::new(column as i32, (height - 1 - row_index) as i32);
                match tile {
                    '~' => {}
                    '.' => open_cells.push(cell),
                    'o' => {
                        open_cells.push(cell);
                        orb_candidates.push(cell);
                    }
                    'B' => {
                        if bear_start.is_some() {
                            return Err(LayoutError::DuplicateBearStart);
                        }
                        open_cells.push(cell);
                        bear_start = Some(cell);
                    }
                    _ => {
                        return Err(LayoutError::UnknownTile {
                            tile,
                            row: row_index,
                            column,
                        });
                    }
                }
            }
        }

        let Some(bear_start) = bear_start else {
            return Err(LayoutError::MissingBearStart);
        };
        if orb_candidates.is_empty() {
            return Err(LayoutError::NoOrbs);
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            open_cells,
            orb_candidates,
            bear_start,
        })
    }

    /// The built-in level for the given index, wrapping past the end so
    /// the game keeps cycling. A level that fails to parse is a bug in
    /// the map above; it is logged and skipped rather than crashing.
    pub fn level(index: usize) -> Self {
        for offset in 0..LEVELS.len() {
            let slot = (index + offset) % LEVELS.len();
            if let Some(map) = LEVELS.get(slot) {
                match Self::parse(map) {
                    Ok(layout) => return layout,
                    Err(error) => warn!("level {slot} is malformed: {error}"),
                }
            }
        }
        Self::strip()
    }

    /// Minimal hand-built board used only if every bundled map is bad.
    fn strip() -> Self {
        Self {
            width: 3,
            height: 1,
            open_cells: vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)],
            orb_candidates: vec![IVec2::new(2, 0)],
            bear_start: IVec2::new(0, 0),
        }
    }
}
