//! Per-column wall casting with DDA grid traversal.
//!
//! The ray walks grid-line crossings, always advancing the axis whose next
//! crossing is nearer, until it enters a wall cell. The distance reported
//! is measured along the view direction (not the ray), which keeps walls
//! straight instead of fish-eyed.

use glam::{IVec2, Vec2};

use super::types::Screen;
use crate::renderer::{Rgba, rgb};
use crate::world::{Camera, Cell, Map};

/// Stand-in for an infinite per-axis step when the ray is parallel to it.
const NEVER: f32 = 1e30;

/// Grid axis crossed last before the hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical grid line (east/west face).
    X,
    /// Crossed a horizontal grid line (north/south face).
    Y,
}

impl Side {
    /// Flat shade for this face orientation.
    #[inline]
    pub fn shade(self) -> Rgba {
        match self {
            Side::X => rgb(150, 150, 150),
            Side::Y => rgb(100, 100, 100),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub cell: IVec2,
    pub side: Side,
    pub perp_dist: f32,
}

/// March from `origin` along `ray` until a wall cell is entered.
///
/// Terminates because every map is enclosed by walls.
pub fn cast_ray(map: &Map, origin: Vec2, ray: Vec2) -> RayHit {
    let mut cell = Map::cell_of(origin);

    let delta = Vec2::new(
        if ray.x == 0.0 { NEVER } else { (1.0 / ray.x).abs() },
        if ray.y == 0.0 { NEVER } else { (1.0 / ray.y).abs() },
    );

    /* step direction + distance to the first crossing on each axis */
    let (step_x, mut side_x) = if ray.x < 0.0 {
        (-1, (origin.x - cell.x as f32) * delta.x)
    } else {
        (1, (cell.x as f32 + 1.0 - origin.x) * delta.x)
    };
    let (step_y, mut side_y) = if ray.y < 0.0 {
        (-1, (origin.y - cell.y as f32) * delta.y)
    } else {
        (1, (cell.y as f32 + 1.0 - origin.y) * delta.y)
    };

    loop {
        let side = if side_x < side_y {
            side_x += delta.x;
            cell.x += step_x;
            Side::X
        } else {
            side_y += delta.y;
            cell.y += step_y;
            Side::Y
        };

        if map.cell_at(cell.x, cell.y) == Cell::Wall {
            // undo the last increment: distance to the face we just crossed
            let perp_dist = match side {
                Side::X => side_x - delta.x,
                Side::Y => side_y - delta.y,
            };
            return RayHit {
                cell,
                side,
                perp_dist,
            };
        }
    }
}

/// Cast the ray for screen column `x`.
#[inline]
pub fn cast_column(camera: &Camera, map: &Map, screen: &Screen, x: usize) -> RayHit {
    cast_ray(map, camera.pos, camera.ray_dir(screen.camera_x(x)))
}

/// One vertical wall strip in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlice {
    pub y0: i32, // inclusive
    pub y1: i32, // inclusive
    pub colour: Rgba,
}

impl WallSlice {
    /// Height ∝ 1 / distance, centred on the horizon, clamped to the screen.
    pub fn from_hit(hit: &RayHit, screen: &Screen) -> Self {
        // float → int casts saturate, so a zero distance yields a full column
        let line_h = (screen.h as f32 / hit.perp_dist) as i32;
        let y0 = (-line_h / 2 + screen.half_h).max(0);
        let y1 = (line_h / 2 + screen.half_h).min(screen.h as i32 - 1);
        Self {
            y0,
            y1,
            colour: hit.side.shade(),
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_west_from_spawn_hits_border() {
        let map = Map::default_maze();
        let cam = Camera::default();
        let screen = Screen::new(800, 600);

        let hit = cast_column(&cam, &map, &screen, 400);
        assert_eq!(hit.cell, IVec2::new(0, 1));
        assert_eq!(hit.side, Side::X);
        assert!((hit.perp_dist - 0.5).abs() < 1e-6);
    }

    #[test]
    fn horizontal_crossing_reports_side_y() {
        let map = Map::default_maze();
        // straight north from (1.5, 1.5) hits the top border row
        let hit = cast_ray(&map, Vec2::new(1.5, 1.5), Vec2::new(0.0, -1.0));
        assert_eq!(hit.cell, IVec2::new(1, 0));
        assert_eq!(hit.side, Side::Y);
        assert!((hit.perp_dist - 0.5).abs() < 1e-6);
    }

    #[test]
    fn farther_wall_means_larger_distance() {
        let ray = Vec2::new(1.0, 0.37);
        let origin = Vec2::new(1.5, 2.5);
        let mut last = 0.0;
        for gap in 1..8 {
            let mut row = String::from("#");
            row.push_str(&".".repeat(gap));
            row.push_str(&"#".repeat(10 - gap));
            let rows: Vec<String> = (0..9)
                .map(|y| if y == 0 || y == 8 { "#".repeat(11) } else { row.clone() })
                .collect();
            let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let map = Map::from_ascii(&refs).unwrap();

            let hit = cast_ray(&map, origin, ray);
            assert!(hit.perp_dist > last, "gap {gap}: {} <= {last}", hit.perp_dist);
            last = hit.perp_dist;
        }
    }

    #[test]
    fn perpendicular_distance_has_no_fisheye() {
        // Flat wall at x = 5: every column must report the same depth.
        let map = Map::from_ascii(&[
            "######", //
            "#....#",
            "#....#",
            "#....#",
            "#....#",
            "#....#",
            "######",
        ])
        .unwrap();
        let cam = Camera::new(Vec2::new(1.5, 3.5), Vec2::X, Vec2::new(0.0, 0.66));
        let screen = Screen::new(64, 48);
        for x in 0..64 {
            let hit = cast_column(&cam, &map, &screen, x);
            if hit.side == Side::X {
                assert!((hit.perp_dist - 3.5).abs() < 1e-4, "column {x}");
            }
        }
    }

    #[test]
    fn slice_height_and_clamping() {
        let screen = Screen::new(800, 600);
        let near = RayHit {
            cell: IVec2::ZERO,
            side: Side::Y,
            perp_dist: 0.5,
        };
        assert_eq!(
            WallSlice::from_hit(&near, &screen),
            WallSlice {
                y0: 0,
                y1: 599,
                colour: rgb(100, 100, 100)
            }
        );

        let far = RayHit {
            perp_dist: 4.0,
            side: Side::X,
            ..near
        };
        let s = WallSlice::from_hit(&far, &screen);
        assert_eq!((s.y0, s.y1), (300 - 75, 300 + 75));
        assert_eq!(s.colour, rgb(150, 150, 150));

        let touching = RayHit {
            perp_dist: 0.0,
            ..near
        };
        let s = WallSlice::from_hit(&touching, &screen);
        assert_eq!((s.y0, s.y1), (0, 599));
    }
}
