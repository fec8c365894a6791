//! Bridge Runner - A side-scrolling bridge runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform spawning)
//! - `render`: Canvas-style drawing of the current session
//! - `game`: Loop driver tying simulation, rendering, UI and audio together
//! - `assets`: Loaded-or-absent asset handles
//! - `config`: Data-driven game constants

pub mod assets;
pub mod audio;
pub mod config;
pub mod game;
pub mod render;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameDecision, Game, Input};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -20.0;
    /// Maximum downward speed (pixels/tick)
    pub const TERMINAL_VELOCITY: f32 = 25.0;
    /// Horizontal scroll speed of the platforms (pixels/tick)
    pub const SCROLL_SPEED: f32 = 7.0;
    /// Base forward lean while running (degrees)
    pub const RUN_TILT: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Platform (bridge plank) defaults
    pub const PLATFORM_WIDTH: f32 = 120.0;
    pub const PLATFORM_HEIGHT: f32 = 40.0;
    pub const PLATFORM_Y: f32 = 460.0;
    /// Contiguous platforms laid down at session start
    pub const INITIAL_PLATFORMS: usize = 10;

    /// Spawn a new platform while the rightmost edge is closer than this past the view
    pub const SPAWN_MARGIN: f32 = 200.0;
    /// Chance that a spawn opens a jumpable gap (once past `GAP_SCORE_THRESHOLD`)
    pub const GAP_CHANCE: f32 = 0.25;
    pub const GAP_MIN: u32 = 130;
    pub const GAP_MAX: u32 = 220;
    /// Small seams between planks are drawn from `0..JITTER_MAX`
    pub const JITTER_MAX: u32 = 16;
    pub const JITTER_SCORE_THRESHOLD: u64 = 100;
    pub const GAP_SCORE_THRESHOLD: u64 = 150;

    /// Audio levels
    pub const MUSIC_VOLUME: f64 = 0.3;
    pub const SFX_VOLUME: f64 = 0.7;

    /// Ticks per displayed distance unit
    pub const TICKS_PER_METER: u64 = 10;
}

/// Distance shown to the player for a tick score, e.g. `"42m"`
pub fn distance_label(score: u64) -> String {
    format!("{}m", score / consts::TICKS_PER_METER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_label_floors() {
        assert_eq!(distance_label(0), "0m");
        assert_eq!(distance_label(9), "0m");
        assert_eq!(distance_label(10), "1m");
        assert_eq!(distance_label(1000), "100m");
        assert_eq!(distance_label(1009), "100m");
    }
}
