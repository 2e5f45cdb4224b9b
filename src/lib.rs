//! Monster Maze: a Wolfenstein-style raycaster.
//!
//! * [`world`]    – static tile map and the player's camera pose.
//! * [`sim`]      – fixed-step game logic (player, monster, bullets).
//! * [`engine`]   – DDA wall casting and billboard sprite projection.
//! * [`renderer`] – drawing surface abstraction + software framebuffer.
//! * [`audio`]    – sound cues and their synthesised PCM clips.

pub mod audio;
pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
