//! Browser asset loading
//!
//! Every fetch is started at once and wrapped in a promise that always
//! resolves: to the element on success, or to `null` on error. Awaiting
//! `Promise.all` over those is the all-settled barrier the game waits on
//! before enabling the start button.

use js_sys::{Array, Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlElement, HtmlImageElement};

use super::{Asset, AssetError, AssetId, Sprites};

/// Everything the web build loads up front
pub struct LoadedAssets {
    pub sprites: Sprites<HtmlImageElement>,
    pub music: Asset<HtmlAudioElement>,
    pub scream: Asset<HtmlAudioElement>,
}

impl LoadedAssets {
    /// Source for the game-over picture, if it loaded
    pub fn game_over_src(&self) -> Option<&'static str> {
        self.sprites
            .game_over
            .is_loaded()
            .then(|| AssetId::GameOverImage.path())
    }
}

/// Resolve with `value` when `ready` fires, or with `null` on error
fn settle(
    element: &HtmlElement,
    value: JsValue,
    on_ready: fn(&HtmlElement, Option<&Function>),
) -> Promise {
    let element = element.clone();
    Promise::new(&mut |resolve: Function, _reject: Function| {
        let ok = {
            let resolve = resolve.clone();
            let value = value.clone();
            Closure::once_into_js(move || {
                let _ = resolve.call1(&JsValue::NULL, &value);
            })
        };
        let err = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
        });
        on_ready(&element, Some(ok.unchecked_ref()));
        element.set_onerror(Some(err.unchecked_ref()));
    })
}

fn start_image(id: AssetId) -> Result<Promise, AssetError> {
    let img = HtmlImageElement::new().map_err(|e| AssetError::Unsupported {
        id,
        reason: format!("{e:?}"),
    })?;
    let promise = settle(&img, img.clone().into(), |el, f| el.set_onload(f));
    img.set_src(id.path());
    Ok(promise)
}

fn start_audio(id: AssetId) -> Result<Promise, AssetError> {
    let audio = HtmlAudioElement::new().map_err(|e| AssetError::Unsupported {
        id,
        reason: format!("{e:?}"),
    })?;
    let promise = settle(&audio, audio.clone().into(), |el, f| {
        el.set_oncanplaythrough(f)
    });
    audio.set_src(id.path());
    Ok(promise)
}

fn start(id: AssetId) -> Result<Promise, AssetError> {
    if id.is_audio() {
        start_audio(id)
    } else {
        start_image(id)
    }
}

/// Turn a settled value back into a typed handle
fn settled<T: JsCast>(id: AssetId, started: Result<(), AssetError>, value: JsValue) -> Asset<T> {
    let result = started.and_then(|()| {
        if value.is_null() || value.is_undefined() {
            return Err(AssetError::LoadFailed { id });
        }
        value.dyn_into::<T>().map_err(|_| AssetError::Unsupported {
            id,
            reason: "unexpected element type".to_string(),
        })
    });
    Asset::from_result(id, result)
}

/// Load every asset, waiting until all attempts have settled. Never fails.
pub async fn load_all() -> LoadedAssets {
    let ids: Vec<AssetId> = AssetId::IMAGES
        .iter()
        .chain(AssetId::SOUNDS.iter())
        .copied()
        .collect();

    let promises = Array::new();
    let mut started = Vec::with_capacity(ids.len());
    for &id in &ids {
        match start(id) {
            Ok(promise) => {
                promises.push(&promise);
                started.push(Ok(()));
            }
            Err(err) => {
                promises.push(&Promise::resolve(&JsValue::NULL));
                started.push(Err(err));
            }
        }
    }

    let values = match JsFuture::from(Promise::all(&promises)).await {
        Ok(values) => Array::from(&values),
        Err(e) => {
            log::error!("Asset barrier rejected: {:?}", e);
            Array::new()
        }
    };

    let mut loaded = LoadedAssets {
        sprites: Sprites::default(),
        music: Asset::Absent,
        scream: Asset::Absent,
    };

    for (i, (id, started)) in ids.into_iter().zip(started).enumerate() {
        let value = values.get(i as u32);
        match id {
            AssetId::BackgroundMusic => loaded.music = settled(id, started, value),
            AssetId::ScreamSound => loaded.scream = settled(id, started, value),
            _ => {
                if let Some(slot) = loaded.sprites.slot_mut(id) {
                    *slot = settled(id, started, value);
                }
            }
        }
    }

    log::info!(
        "Assets settled: {}/{} images, music {}, scream {}",
        loaded.sprites.loaded_count(),
        AssetId::IMAGES.len(),
        if loaded.music.is_loaded() { "ok" } else { "absent" },
        if loaded.scream.is_loaded() { "ok" } else { "absent" },
    );
    loaded
}
