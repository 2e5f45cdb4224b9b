// Static tile grid the whole game runs on.
// Rows are stored top-to-bottom, cells left-to-right; `cells[y * w + x]`.

use glam::{IVec2, Vec2};

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Reasons a grid is refused at construction time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map must be at least 3x3, got {w}x{h}")]
    TooSmall { w: usize, h: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("expected {expected} cells, got {got}")]
    CellCount { expected: usize, got: usize },

    /// Every border cell must be a wall so rays and movers never leave the grid.
    #[error("border cell ({x}, {y}) is not a wall")]
    OpenBorder { x: usize, y: usize },

    #[error("unknown map glyph `{glyph}` at ({x}, {y})")]
    BadGlyph { glyph: char, x: usize, y: usize },
}

/// The built-in 16×16 maze. `#` = wall, `.` = floor.
const MAZE: [&str; 16] = [
    "################",
    "#..............#",
    "#.###.#.###.##.#",
    "#...#.#...#.#..#",
    "#.#.#.###.#.#.##",
    "#.#.........#..#",
    "#.#.###.###.##.#",
    "#.....#........#",
    "#####.#####.##.#",
    "#.........#....#",
    "#.###.###.#.##.#",
    "#...#...#.#.#..#",
    "#.#.#.#.#.#.#.##",
    "#.#...#.....#..#",
    "#.##############",
    "################",
];

/// Immutable grid of [`Cell`]s enclosed by a solid wall border.
#[derive(Clone, Debug)]
pub struct Map {
    w: usize,
    h: usize,
    cells: Vec<Cell>,
}

impl Map {
    /// Build a map from row-major cells, enforcing the solid border.
    pub fn new(w: usize, h: usize, cells: Vec<Cell>) -> Result<Self, MapError> {
        if w < 3 || h < 3 {
            return Err(MapError::TooSmall { w, h });
        }
        if cells.len() != w * h {
            return Err(MapError::CellCount {
                expected: w * h,
                got: cells.len(),
            });
        }

        let map = Self { w, h, cells };
        for y in 0..h {
            for x in 0..w {
                let on_border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                if on_border && map.cells[y * w + x] != Cell::Wall {
                    return Err(MapError::OpenBorder { x, y });
                }
            }
        }
        Ok(map)
    }

    /// Parse rows of `#` (wall) and `.` (empty).
    pub fn from_ascii(rows: &[&str]) -> Result<Self, MapError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.chars().count());
        if w < 3 || h < 3 {
            return Err(MapError::TooSmall { w, h });
        }

        let mut cells = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != w {
                return Err(MapError::RaggedRow {
                    row: y,
                    got,
                    expected: w,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                cells.push(match glyph {
                    '#' => Cell::Wall,
                    '.' => Cell::Empty,
                    _ => return Err(MapError::BadGlyph { glyph, x, y }),
                });
            }
        }
        Self::new(w, h, cells)
    }

    /// The fixed maze the game ships with.
    pub fn default_maze() -> Self {
        Self::from_ascii(&MAZE).expect("built-in maze is well formed")
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Cell at integer grid coordinates.
    ///
    /// Callers only pass cells reached from inside the border, so an
    /// out-of-range coordinate is a bug and panics.
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        debug_assert!(
            x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h,
            "cell ({x}, {y}) outside {}x{} map",
            self.w,
            self.h
        );
        self.cells[y as usize * self.w + x as usize]
    }

    /// Grid cell containing the world-space point `p`.
    #[inline]
    pub fn cell_of(p: Vec2) -> IVec2 {
        p.floor().as_ivec2()
    }

    #[inline]
    pub fn is_wall_at(&self, p: Vec2) -> bool {
        let c = Self::cell_of(p);
        self.cell_at(c.x, c.y) == Cell::Wall
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::default_maze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maze_dimensions_and_spawns() {
        let map = Map::default_maze();
        assert_eq!((map.width(), map.height()), (16, 16));
        // player and monster spawn cells are open
        assert_eq!(map.cell_at(1, 1), Cell::Empty);
        assert_eq!(map.cell_at(14, 13), Cell::Empty);
        assert_eq!(map.cell_at(0, 1), Cell::Wall);
        assert_eq!(map.cell_at(2, 2), Cell::Wall);
    }

    #[test]
    fn world_point_maps_to_floored_cell() {
        assert_eq!(Map::cell_of(Vec2::new(1.99, 3.01)), IVec2::new(1, 3));
        let map = Map::default_maze();
        assert!(!map.is_wall_at(Vec2::new(1.5, 1.5)));
        assert!(map.is_wall_at(Vec2::new(0.9, 1.5)));
    }

    #[test]
    fn open_border_rejected() {
        let err = Map::from_ascii(&["###", "#..", "###"]).unwrap_err();
        assert_eq!(err, MapError::OpenBorder { x: 2, y: 1 });
    }

    #[test]
    fn cell_count_must_match_dimensions() {
        // two whole rows too many
        let cells = vec![Cell::Wall; 5 * 3];
        assert_eq!(
            Map::new(3, 3, cells).unwrap_err(),
            MapError::CellCount {
                expected: 9,
                got: 15
            }
        );
        assert!(Map::new(3, 3, vec![Cell::Wall; 9]).is_ok());
    }

    #[test]
    fn malformed_rows_rejected() {
        assert_eq!(
            Map::from_ascii(&["####", "#.#", "####"]).unwrap_err(),
            MapError::RaggedRow {
                row: 1,
                got: 3,
                expected: 4
            }
        );
        assert_eq!(
            Map::from_ascii(&["##", "##"]).unwrap_err(),
            MapError::TooSmall { w: 2, h: 2 }
        );
        assert!(matches!(
            Map::from_ascii(&["###", "#x#", "###"]),
            Err(MapError::BadGlyph { glyph: 'x', .. })
        ));
    }
}
