//! Session state
//!
//! A session is created fresh for every start/restart and owned by the loop
//! driver. Nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::platform::Platform;
use super::player::Player;
use super::spawn::initial_platforms;
use crate::config::GameConfig;
use crate::distance_label;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Simulation advances every tick
    Running,
    /// Player fell off-screen; simulation is frozen
    Over,
}

/// One run from start until the player falls
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub running: bool,
    pub over: bool,
    /// Ticks survived
    pub score: u64,
    pub player: Player,
    /// Insertion order == left-to-right spawn order
    pub platforms: Vec<Platform>,
    pub config: GameConfig,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Start a new running session with the opening run of planks
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            running: true,
            over: false,
            score: 0,
            player: Player::new(&config),
            platforms: initial_platforms(&config),
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.over {
            SessionPhase::Over
        } else {
            SessionPhase::Running
        }
    }

    /// Whether the next tick will advance the simulation
    pub fn is_active(&self) -> bool {
        self.running && !self.over
    }

    /// Displayed distance in meters (one per ten ticks)
    pub fn distance(&self) -> u64 {
        self.score / crate::consts::TICKS_PER_METER
    }

    pub fn distance_label(&self) -> String {
        distance_label(self.score)
    }

    /// Jump input; ignored unless the session is active and the player grounded
    pub fn jump(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.player.jump(&self.config)
    }

    /// Freeze the session. Returns false if it was already over.
    pub(crate) fn finish(&mut self) -> bool {
        if self.over {
            return false;
        }
        self.over = true;
        self.running = false;
        true
    }
}
