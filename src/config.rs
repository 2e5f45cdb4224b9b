//! Tuning constants and the command-line surface.

use clap::Parser;
use glam::Vec2;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "First-person monster maze")]
pub struct Args {
    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub height: u32,

    /// Sleep at the end of every frame (coarse frame cap)
    #[arg(long, value_name = "MS", default_value_t = 16)]
    pub frame_delay_ms: u64,

    /// Default log filter when `RUST_LOG` is unset
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,
}

/// Gameplay constants. Distances are in map cells, speeds per tic.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub player_spawn: Vec2,
    pub player_dir: Vec2,
    pub camera_plane: Vec2,
    pub move_speed: f32,
    pub turn_speed: f32, // radians / tic

    pub enemy_spawn: Vec2,
    pub enemy_health: i32,
    pub enemy_speed: f32,
    pub aggro_radius: f32,
    pub catch_radius: f32,

    pub bullet_speed: f32,
    pub bullet_lifetime: i32,
    pub hit_radius: f32,
    pub anim_period: u32, // tics per bullet frame flip

    pub heartbeat_ms_per_cell: f32,
    pub heartbeat_min_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        const MOVE_SPEED: f32 = 0.05;
        Self {
            player_spawn: Vec2::new(1.5, 1.5),
            player_dir: Vec2::new(-1.0, 0.0),
            camera_plane: Vec2::new(0.0, 0.66),
            move_speed: MOVE_SPEED,
            turn_speed: 0.03,

            enemy_spawn: Vec2::new(14.5, 13.5),
            enemy_health: 3,
            enemy_speed: MOVE_SPEED * 0.5,
            aggro_radius: 8.0,
            catch_radius: 0.5,

            bullet_speed: 0.1,
            bullet_lifetime: 100,
            hit_radius: 0.5,
            anim_period: 6,

            heartbeat_ms_per_cell: 100.0,
            heartbeat_min_ms: 50,
        }
    }
}
