use crate::asset_check::AssetStatus;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use wavewall_core::{AudioError, AudioLoader, PlaybackHandle};
use web_sys as web;

/// Loads bundled tracks as looping `<audio>` elements under `base_url`.
///
/// The bundled track is checked with a HEAD request up front. A 404 there,
/// or a later media `error` on the element, marks it missing; loads then
/// fail with `AssetUnavailable` and the frame loop drops any live player.
pub struct HtmlAudioLoader {
    base_url: String,
    track: String,
    status: Rc<Cell<AssetStatus>>,
}

impl HtmlAudioLoader {
    pub fn new(base_url: impl Into<String>, track: impl Into<String>) -> Self {
        let loader = Self {
            base_url: base_url.into(),
            track: track.into(),
            status: Rc::new(Cell::new(AssetStatus::Unknown)),
        };
        check_asset(loader.url_for(&loader.track), loader.status.clone());
        loader
    }

    pub fn status(&self) -> AssetStatus {
        self.status.get()
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

async fn head_status(url: &str) -> Result<u16, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = web::RequestInit::new();
    init.set_method("HEAD");
    let request = web::Request::new_with_str_and_init(url, &init)?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    Ok(response.status())
}

fn check_asset(url: String, status: Rc<Cell<AssetStatus>>) {
    spawn_local(async move {
        match head_status(&url).await {
            Ok(code) => {
                let observed = AssetStatus::from_http_status(code);
                if observed == AssetStatus::Missing {
                    log::warn!("[audio] {url} answered {code}");
                }
                status.set(status.get().update(observed));
            }
            // offline or blocked: leave it to the element's own error event
            Err(e) => log::debug!("[audio] could not check {url}: {:?}", e),
        }
    });
}

impl AudioLoader for HtmlAudioLoader {
    type Handle = HtmlAudioPlayer;

    fn load_looping(&mut self, name: &str) -> Result<HtmlAudioPlayer, AudioError> {
        if name == self.track && !self.status.get().allows_load() {
            return Err(AudioError::AssetUnavailable {
                name: name.to_string(),
            });
        }
        let url = self.url_for(name);
        let element = web::HtmlAudioElement::new_with_src(&url)
            .map_err(|e| AudioError::Engine(format!("{:?}", e)))?;
        element.set_loop(true);
        element.set_preload("auto");

        let on_error = Closure::wrap(Box::new({
            let status = self.status.clone();
            let url = url.clone();
            move || {
                log::warn!("[audio] {url} could not be loaded");
                status.set(status.get().update(AssetStatus::Missing));
            }
        }) as Box<dyn FnMut()>);
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        log::info!("[audio] loading {url}");
        Ok(HtmlAudioPlayer { element, url })
    }
}

pub struct HtmlAudioPlayer {
    element: web::HtmlAudioElement,
    url: String,
}

impl PlaybackHandle for HtmlAudioPlayer {
    /// `play()` resolves asynchronously. A blocked autoplay surfaces as a
    /// rejected promise, logged when it settles; a missing file also fires
    /// the element's `error` event.
    fn play(&mut self) -> Result<(), AudioError> {
        let promise = self
            .element
            .play()
            .map_err(|e| AudioError::Engine(format!("{:?}", e)))?;
        let url = self.url.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::error!("[audio] {url} failed to play: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause failed: {:?}", e);
        }
    }
}
