//! `<audio>` element playback

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

use super::AudioPlayer;
use crate::assets::Asset;

/// Music and game-over clip loaded as `HtmlAudioElement`s
pub struct WebAudio {
    music: Asset<HtmlAudioElement>,
    scream: Asset<HtmlAudioElement>,
}

impl WebAudio {
    pub fn new(
        music: Asset<HtmlAudioElement>,
        scream: Asset<HtmlAudioElement>,
        music_volume: f64,
        sfx_volume: f64,
    ) -> Self {
        if let Some(music) = music.get() {
            music.set_loop(true);
            music.set_volume(music_volume);
        }
        if let Some(scream) = scream.get() {
            scream.set_volume(sfx_volume);
        }
        Self { music, scream }
    }
}

/// Start playback; rejections (autoplay policy) are only logged
fn play_clip(clip: &HtmlAudioElement) {
    match clip.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("Audio play failed: {:?}", e);
            }
        }),
        Err(e) => log::info!("Audio play failed: {:?}", e),
    }
}

impl AudioPlayer for WebAudio {
    fn start_music(&mut self) {
        if let Some(music) = self.music.get() {
            play_clip(music);
        }
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.music.get() {
            if let Err(e) = music.pause() {
                log::info!("Audio pause failed: {:?}", e);
            }
            music.set_current_time(0.0);
        }
    }

    fn play_game_over(&mut self) {
        if let Some(scream) = self.scream.get() {
            scream.set_current_time(0.0);
            play_clip(scream);
        }
    }
}
