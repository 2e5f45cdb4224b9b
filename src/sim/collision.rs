//! Axis-separated tile collision.
//!
//! A move is split into an X step and a Y step. X is tested first against
//! the unchanged Y; Y is then tested against the (possibly updated) X. Each
//! step is kept only if it lands in an empty cell, so actors slide along
//! walls instead of sticking on diagonal contact.

use glam::Vec2;

use crate::world::{Cell, Map};

/// Try to move from `pos` by `delta`; returns the resolved position.
pub fn try_move(map: &Map, pos: Vec2, delta: Vec2) -> Vec2 {
    let mut out = pos;

    let next_x = pos.x + delta.x;
    if map.cell_at(next_x.floor() as i32, out.y.floor() as i32) == Cell::Empty {
        out.x = next_x;
    }

    let next_y = pos.y + delta.y;
    if map.cell_at(out.x.floor() as i32, next_y.floor() as i32) == Cell::Empty {
        out.y = next_y;
    }

    out
}
