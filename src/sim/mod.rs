//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (platform spawn order)
//! - No rendering or platform dependencies

pub mod platform;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use platform::{Platform, rightmost_edge};
pub use player::Player;
pub use spawn::{initial_platforms, spawn_offset, spawn_platform};
pub use state::{GameSession, SessionPhase};
pub use tick::{TickOutcome, tick};
