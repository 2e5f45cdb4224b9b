pub mod camera;
pub mod map;

pub use camera::Camera;
pub use map::{Cell, Map, MapError};
