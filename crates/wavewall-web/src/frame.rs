use crate::asset_check::should_drop_player;
use crate::audio::HtmlAudioLoader;
use crate::canvas::CanvasPainter;
use crate::dom;
use crate::paint::paint_list;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wavewall_core::Wallpaper;
use web_sys as web;

/// Everything one page owns; shared by the event closures and the frame loop.
pub struct PageState {
    pub wallpaper: Wallpaper<HtmlAudioLoader, StdRng>,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub dpr: f64,
    pub clock: Instant,
}

impl PageState {
    pub fn now_secs(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    /// Re-read the canvas box and feed the new size to the scene.
    pub fn sync_size(&mut self) {
        let (viewport, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        self.dpr = dpr;
        let now = self.now_secs();
        self.wallpaper.resize(viewport, now);
    }

    pub fn frame(&mut self) {
        let music = self.wallpaper.music();
        if should_drop_player(music.loader().status(), music.player().is_some()) {
            self.wallpaper.music_asset_lost();
        }
        let now = self.now_secs();
        let frame = self.wallpaper.frame(now);
        let ops = paint_list(&frame, self.wallpaper.is_muted(), self.painter.has_logo());
        if let Err(e) = self.painter.paint(&ops, self.dpr) {
            log::error!("[canvas] paint failed: {:?}", e);
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub fn start_loop(state: Rc<RefCell<PageState>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
