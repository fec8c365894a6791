//! Audio playback
//!
//! Background music loops during a run; a one-shot clip plays when the player
//! falls. Playback problems (missing clips, autoplay blocking) are logged and
//! otherwise ignored.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Audio playback collaborator
pub trait AudioPlayer {
    /// Start (or resume) the looping music from its current position
    fn start_music(&mut self);
    /// Pause the music and rewind it
    fn stop_music(&mut self);
    /// One-shot cue for falling into the fire
    fn play_game_over(&mut self);
}
