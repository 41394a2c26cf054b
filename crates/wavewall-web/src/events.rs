use crate::frame::PageState;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavewall_core::PointerOutcome;
use web_sys as web;

fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| match ev.dyn_into::<E>() {
        Ok(ev) => handler(ev),
        Err(_) => log::warn!("[events] unexpected event type"),
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::error!("[events] could not listen for {kind}: {:?}", e);
    }
    closure.forget();
}

pub fn wire_pointer(state: &Rc<RefCell<PageState>>) {
    let canvas = state.borrow().canvas.clone();
    let target: &web::EventTarget = canvas.as_ref();

    {
        let state = state.clone();
        let canvas = canvas.clone();
        listen(target, "pointerdown", move |ev: web::PointerEvent| {
            // keep receiving moves when the pointer leaves the canvas mid-drag
            if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                log::debug!("[events] pointer capture unavailable: {:?}", e);
            }
            let at = input::pointer_logical_px(&ev, &canvas);
            state.borrow_mut().wallpaper.pointer_down(at);
            ev.prevent_default();
        });
    }
    {
        let state = state.clone();
        let canvas = canvas.clone();
        listen(target, "pointermove", move |ev: web::PointerEvent| {
            let at = input::pointer_logical_px(&ev, &canvas);
            state.borrow_mut().wallpaper.pointer_move(at);
        });
    }
    {
        let state = state.clone();
        let canvas = canvas.clone();
        listen(target, "pointerup", move |ev: web::PointerEvent| {
            let at = input::pointer_logical_px(&ev, &canvas);
            let mut s = state.borrow_mut();
            let now = s.now_secs();
            if let PointerOutcome::MusicToggled(Err(e)) = s.wallpaper.pointer_up(at, now) {
                log::warn!("[music] toggle failed: {e}");
            }
        });
    }
    {
        let state = state.clone();
        listen(target, "pointercancel", move |_ev: web::PointerEvent| {
            state.borrow_mut().wallpaper.pointer_cancel();
        });
    }
}

pub fn wire_resize(state: &Rc<RefCell<PageState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let state = state.clone();
    listen(window.as_ref(), "resize", move |_ev: web::Event| {
        state.borrow_mut().sync_size();
    });
}
