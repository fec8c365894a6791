//! Game configuration
//!
//! Defaults come from [`crate::consts`]. The web shell may override any field
//! with a JSON object (missing fields keep their defaults).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while building a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON text could not be parsed
    Parse(serde_json::Error),
    /// A field is outside the range the simulation can handle
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Upper bound on the opening stream length
const MAX_INITIAL_PLATFORMS: usize = 1000;

/// All tunable values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub terminal_velocity: f32,
    pub scroll_speed: f32,
    pub run_tilt: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,

    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_y: f32,
    pub initial_platforms: usize,

    pub spawn_margin: f32,
    pub gap_chance: f32,
    pub gap_min: u32,
    pub gap_max: u32,
    pub jitter_max: u32,
    pub jitter_score_threshold: u64,
    pub gap_score_threshold: u64,

    pub music_volume: f64,
    pub sfx_volume: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            terminal_velocity: TERMINAL_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            run_tilt: RUN_TILT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_y: PLATFORM_Y,
            initial_platforms: INITIAL_PLATFORMS,

            spawn_margin: SPAWN_MARGIN,
            gap_chance: GAP_CHANCE,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            jitter_max: JITTER_MAX,
            jitter_score_threshold: JITTER_SCORE_THRESHOLD,
            gap_score_threshold: GAP_SCORE_THRESHOLD,

            music_volume: MUSIC_VOLUME,
            sfx_volume: SFX_VOLUME,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.width > 0.0) {
            return invalid("width", "must be positive");
        }
        if !(self.height > 0.0) {
            return invalid("height", "must be positive");
        }
        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.terminal_velocity > 0.0) {
            return invalid("terminal_velocity", "must be positive");
        }
        if !(self.platform_width > 0.0) {
            return invalid("platform_width", "must be positive");
        }
        if !(self.platform_height > 0.0) {
            return invalid("platform_height", "must be positive");
        }
        if !(self.scroll_speed > 0.0) {
            return invalid("scroll_speed", "must be positive");
        }
        if !(1..=MAX_INITIAL_PLATFORMS).contains(&self.initial_platforms) {
            return invalid("initial_platforms", "must be within [1, 1000]");
        }
        if !(self.spawn_margin >= 0.0 && self.spawn_margin.is_finite()) {
            return invalid("spawn_margin", "must be finite and non-negative");
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0) {
            return invalid("player_width", "player size must be positive");
        }
        if !(0.0..=1.0).contains(&self.gap_chance) {
            return invalid("gap_chance", "must be within [0, 1]");
        }
        if self.gap_min > self.gap_max {
            return invalid("gap_min", "must not exceed gap_max");
        }
        if self.jitter_max == 0 {
            return invalid("jitter_max", "must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.music_volume) || !(0.0..=1.0).contains(&self.sfx_volume) {
            return invalid("music_volume", "volumes must be within [0, 1]");
        }
        Ok(())
    }
}
