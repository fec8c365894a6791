//! DOM-backed overlays

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use super::{Panel, Ui};

/// Element ids used by the page
const START_SCREEN: &str = "startScreen";
const LOADING_SCREEN: &str = "loadingScreen";
const GAME_OVER_SCREEN: &str = "gameOverScreen";
const SCORE_VALUE: &str = "scoreValue";
const FINAL_SCORE: &str = "finalScore";
const GAME_OVER_IMAGE: &str = "gameOverImage";

/// [`Ui`] over the page's overlay elements.
///
/// Start and loading screens are hidden with a `hidden` class; the game-over
/// screen is shown with an `active` class.
pub struct DomUi {
    document: Document,
}

impl DomUi {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let el = self.document.get_element_by_id(id);
        if el.is_none() {
            log::warn!("Missing #{id} element");
        }
        el
    }

    fn panel_element(&self, panel: Panel) -> Option<Element> {
        self.element(match panel {
            Panel::Start => START_SCREEN,
            Panel::Loading => LOADING_SCREEN,
            Panel::GameOver => GAME_OVER_SCREEN,
        })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Point the game-over picture at the loaded image, if there is one
    pub fn set_game_over_image(&self, src: Option<&str>) -> Result<(), JsValue> {
        let Some(src) = src else { return Ok(()) };
        if let Some(el) = self.element(GAME_OVER_IMAGE) {
            el.dyn_into::<HtmlImageElement>()?.set_src(src);
        }
        Ok(())
    }
}

impl Ui for DomUi {
    fn show(&mut self, panel: Panel) {
        let Some(el) = self.panel_element(panel) else { return };
        let classes = el.class_list();
        let _ = match panel {
            Panel::GameOver => classes.add_1("active"),
            Panel::Start | Panel::Loading => classes.remove_1("hidden"),
        };
    }

    fn hide(&mut self, panel: Panel) {
        let Some(el) = self.panel_element(panel) else { return };
        let classes = el.class_list();
        let _ = match panel {
            Panel::GameOver => classes.remove_1("active"),
            Panel::Start | Panel::Loading => classes.add_1("hidden"),
        };
    }

    fn is_visible(&self, panel: Panel) -> bool {
        let Some(el) = self.panel_element(panel) else { return false };
        let classes = el.class_list();
        match panel {
            Panel::GameOver => classes.contains("active"),
            Panel::Start | Panel::Loading => !classes.contains("hidden"),
        }
    }

    fn set_score(&mut self, text: &str) {
        self.set_text(SCORE_VALUE, text);
    }

    fn set_final_score(&mut self, text: &str) {
        self.set_text(FINAL_SCORE, text);
    }
}
