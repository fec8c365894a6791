//! The runner
//!
//! The player never moves horizontally; the world scrolls past instead.

use glam::Vec2;

use super::platform::Platform;
use crate::config::GameConfig;

/// Lean back while rising from a jump (degrees)
pub const JUMP_TILT: f32 = -10.0;
/// Maximum forward lean while falling (degrees)
pub const MAX_FALL_TILT: f32 = 15.0;
/// Fall lean per unit of vertical speed
pub const FALL_TILT_FACTOR: f32 = 0.8;

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down), clamped to terminal velocity
    pub velocity_y: f32,
    pub jumping: bool,
    pub grounded: bool,
    pub animation_tick: u32,
    /// Cosmetic sprite rotation (degrees, positive = clockwise lean)
    pub tilt: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_start_x, config.player_start_y),
            size: Vec2::new(config.player_width, config.player_height),
            velocity_y: 0.0,
            jumping: false,
            grounded: false,
            animation_tick: 0,
            tilt: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Sprite centre, used as the rotation pivot when drawing
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Full per-tick update: physics, then tilt, then landing
    pub fn update(&mut self, platforms: &[Platform], config: &GameConfig) {
        self.integrate(config);
        self.resolve_tilt(config);
        self.resolve_collisions(platforms);
    }

    /// Apply gravity, clamp to terminal velocity and move
    pub fn integrate(&mut self, config: &GameConfig) {
        self.velocity_y = (self.velocity_y + config.gravity).min(config.terminal_velocity);
        self.pos.y += self.velocity_y;
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Pick the sprite lean for the current motion state.
    ///
    /// Uses the grounded flag from the previous tick, so a runner that just
    /// walked off an edge keeps bobbing for one frame before leaning.
    pub fn resolve_tilt(&mut self, config: &GameConfig) {
        self.tilt = if self.grounded && !self.jumping {
            config.run_tilt + 2.0 * (self.animation_tick % 10) as f32 / 10.0
        } else if self.jumping && self.velocity_y < 0.0 {
            JUMP_TILT
        } else {
            (self.velocity_y.abs() * FALL_TILT_FACTOR).min(MAX_FALL_TILT)
        };
    }

    /// Land on the first platform (in sequence order) the player is falling through.
    ///
    /// First match wins even when a later platform would be a closer fit.
    /// Returns the index of the platform landed on.
    pub fn resolve_collisions(&mut self, platforms: &[Platform]) -> Option<usize> {
        self.grounded = false;
        if self.velocity_y <= 0.0 {
            return None;
        }

        let hit = platforms.iter().position(|p| {
            self.right() > p.left()
                && self.left() < p.right()
                && self.bottom() >= p.top()
                && self.top() < p.top()
        })?;

        self.pos.y = platforms[hit].top() - self.size.y;
        self.velocity_y = 0.0;
        self.jumping = false;
        self.grounded = true;
        Some(hit)
    }

    /// Jump if standing on a platform. Returns whether the jump happened.
    pub fn jump(&mut self, config: &GameConfig) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity_y = config.jump_strength;
        self.jumping = true;
        self.grounded = false;
        true
    }
}
