//! Loop driver
//!
//! Owns the current session and the host collaborators. The host calls
//! [`Game::frame`] once per display refresh while the loop is armed, and
//! forwards input through [`Game::handle`].

use crate::assets::Sprites;
use crate::audio::AudioPlayer;
use crate::config::GameConfig;
use crate::distance_label;
use crate::render::{self, Surface};
use crate::sim::{GameSession, SessionPhase, TickOutcome, tick};
use crate::ui::{Panel, Ui};

/// User input, already mapped from DOM events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Space bar: start, jump or restart depending on state
    Action,
    StartClicked,
    RestartClicked,
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecision {
    Continue,
    Halt,
}

/// Game instance holding all state
pub struct Game<S: Surface, U: Ui, A: AudioPlayer> {
    config: GameConfig,
    surface: S,
    sprites: Sprites<S::Image>,
    ui: U,
    audio: A,
    session: Option<GameSession>,
    /// Base seed; each session mixes in its ordinal
    seed: u64,
    sessions_started: u64,
    /// A frame callback is pending with the host
    looping: bool,
}

impl<S: Surface, U: Ui, A: AudioPlayer> Game<S, U, A> {
    /// Create the driver once assets have settled: drop the loading screen
    /// and draw the idle frame behind the start screen.
    pub fn new(
        config: GameConfig,
        surface: S,
        sprites: Sprites<S::Image>,
        ui: U,
        audio: A,
        seed: u64,
    ) -> Self {
        let mut game = Self {
            config,
            surface,
            sprites,
            ui,
            audio,
            session: None,
            seed,
            sessions_started: 0,
            looping: false,
        };
        game.ui.hide(Panel::Loading);
        game.ui.show(Panel::Start);
        game.redraw();
        game
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Apply an input. Returns true if the host must schedule the frame loop.
    pub fn handle(&mut self, input: Input) -> bool {
        let phase = self.session.as_ref().map(GameSession::phase);

        match (input, phase) {
            (Input::Action | Input::RestartClicked, Some(SessionPhase::Over)) => self.restart(),
            (Input::Action, Some(SessionPhase::Running)) => {
                if let Some(session) = self.session.as_mut() {
                    session.jump();
                }
                false
            }
            (Input::Action | Input::StartClicked, None) if self.ui.is_visible(Panel::Start) => {
                self.start()
            }
            _ => false,
        }
    }

    fn start(&mut self) -> bool {
        self.ui.hide(Panel::Start);
        self.begin_session()
    }

    fn restart(&mut self) -> bool {
        self.ui.hide(Panel::GameOver);
        self.begin_session()
    }

    fn begin_session(&mut self) -> bool {
        let seed = self.seed.wrapping_add(self.sessions_started);
        self.sessions_started += 1;
        self.session = Some(GameSession::new(self.config.clone(), seed));
        self.audio.start_music();
        log::info!("Session {} started with seed {}", self.sessions_started, seed);

        let schedule = !self.looping;
        self.looping = true;
        schedule
    }

    /// One display refresh: step the simulation if it is live, then draw.
    pub fn frame(&mut self) -> FrameDecision {
        let outcome = match self.session.as_mut() {
            Some(session) => tick(session),
            None => TickOutcome::Idle,
        };

        self.redraw();

        if let TickOutcome::GameOver { distance } = outcome {
            self.present_game_over(distance);
        }

        if self.session.as_ref().is_some_and(GameSession::is_active) {
            FrameDecision::Continue
        } else {
            self.looping = false;
            FrameDecision::Halt
        }
    }

    /// Render step: draw the session and refresh the live score
    fn redraw(&mut self) {
        render::draw(
            &mut self.surface,
            &self.sprites,
            &self.config,
            self.session.as_ref(),
        );
        let score = self.session.as_ref().map_or(0, |s| s.score);
        self.ui.set_score(&distance_label(score));
    }

    fn present_game_over(&mut self, distance: u64) {
        self.audio.play_game_over();
        self.audio.stop_music();
        self.ui.set_final_score(&format!("{distance}m"));
        self.ui.show(Panel::GameOver);
    }
}
