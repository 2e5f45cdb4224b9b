pub mod engine;
pub mod raycast;
pub mod sprites;
pub mod types;

pub use engine::Engine;
pub use raycast::{RayHit, Side, WallSlice, cast_column, cast_ray};
pub use sprites::{SpriteProjection, project};
pub use types::Screen;
