//! Fixed timestep simulation tick
//!
//! One tick per displayed frame. The order of the steps matters: platforms
//! are spawned before the player moves, so a fresh plank can be landed on in
//! the same tick.

use super::platform::advance_all;
use super::spawn::spawn_platform;
use super::state::GameSession;

/// What a call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session was not running; nothing changed
    Idle,
    /// Simulation advanced and the player is still in play
    Continue,
    /// Player fell off-screen this tick. Reported once per session.
    GameOver { distance: u64 },
}

/// Advance the session by one tick
pub fn tick(session: &mut GameSession) -> TickOutcome {
    if !session.is_active() {
        return TickOutcome::Idle;
    }

    session.score += 1;

    let GameSession {
        score,
        player,
        platforms,
        config,
        rng,
        ..
    } = session;

    spawn_platform(platforms, *score, rng, config);

    let was_grounded = player.grounded;
    player.update(platforms, config);
    if player.grounded && !was_grounded {
        log::trace!("landed at y={} (tick {})", player.pos.y, score);
    }

    advance_all(platforms, config.scroll_speed);

    let fell = player.pos.y > config.height;
    if fell && session.finish() {
        let distance = session.distance();
        log::info!("Game over: fell after {}m", distance);
        return TickOutcome::GameOver { distance };
    }

    TickOutcome::Continue
}
