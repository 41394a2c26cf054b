#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wavewall_core::{Wallpaper, LOGO_ASSET, MUSIC_ASSET};
use web_sys as web;

mod asset_check;
mod audio;
mod canvas;
mod dom;
mod events;
mod frame;
mod input;
mod paint;

const CANVAS_ID: &str = "app-canvas";
const ASSET_BASE_URL: &str = "assets";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavewall-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn load_logo() -> Option<web::HtmlImageElement> {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("[assets] image element unavailable: {:?}", e);
            return None;
        }
    };
    let url = format!("{ASSET_BASE_URL}/{LOGO_ASSET}");
    let on_error = Closure::wrap(Box::new({
        let url = url.clone();
        move || log::warn!("[assets] {url} not found, header drawn without logo")
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
    img.set_src(&url);
    Some(img)
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let (viewport, dpr) = dom::sync_canvas_backing_size(&canvas);

    let wallpaper = Wallpaper::launch(
        viewport,
        audio::HtmlAudioLoader::new(ASSET_BASE_URL, MUSIC_ASSET),
        StdRng::from_entropy(),
        0.0,
    );
    let state = Rc::new(RefCell::new(frame::PageState {
        wallpaper,
        painter: canvas::CanvasPainter::new(ctx, load_logo()),
        canvas,
        dpr,
        clock: Instant::now(),
    }));

    events::wire_pointer(&state);
    events::wire_resize(&state);
    frame::start_loop(state);
    Ok(())
}
