//! HUD and overlay panels
//!
//! The DOM owns the start, loading and game-over screens plus the score
//! readouts. The game only toggles them through [`Ui`].

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomUi;

/// Overlay panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Start,
    Loading,
    GameOver,
}

/// UI collaborator
pub trait Ui {
    fn show(&mut self, panel: Panel);
    fn hide(&mut self, panel: Panel);
    fn is_visible(&self, panel: Panel) -> bool;
    /// Live distance readout
    fn set_score(&mut self, text: &str);
    /// Distance shown on the game-over panel
    fn set_final_score(&mut self, text: &str);
}
