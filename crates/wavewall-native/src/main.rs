use std::time::Instant;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::LogicalSize;
use winit::keyboard::{Key, NamedKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use wavewall_core::{PointerOutcome, Viewport, Wallpaper, LOGO_ASSET};

mod assets;
mod audio;
mod render;
mod shapes;

use assets::{load_logo, AssetDir};
use audio::NativeLoader;
use render::GpuState;

// phone-sized portrait window, logical px
const WINDOW_WIDTH: f64 = 430.0;
const WINDOW_HEIGHT: f64 = 932.0;

fn logical_viewport(window: &winit::window::Window) -> Viewport {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    Viewport::new(size.width, size.height)
}

fn logical_point(window: &winit::window::Window, x: f64, y: f64) -> Vec2 {
    let scale = window.scale_factor();
    Vec2::new((x / scale) as f32, (y / scale) as f32)
}

fn report(outcome: PointerOutcome) {
    if let PointerOutcome::MusicToggled(Err(e)) = outcome {
        log::warn!("[music] toggle failed: {e}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let assets = AssetDir::discover();
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("wavewall")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    match load_logo(&assets, LOGO_ASSET) {
        Ok(Some(image)) => gpu.set_logo(&image),
        Ok(None) => log::warn!("[assets] {LOGO_ASSET} not found, header drawn without logo"),
        Err(e) => log::warn!("[assets] {e:#}"),
    }

    let clock = Instant::now();
    let mut wallpaper = Wallpaper::launch(
        logical_viewport(&window),
        NativeLoader::new(assets),
        StdRng::from_entropy(),
        0.0,
    );
    let mut cursor = Vec2::ZERO;

    event_loop.run(move |event, elwt| {
        let now = clock.elapsed().as_secs_f64();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => elwt.exit(),
                WindowEvent::Resized(size) => {
                    gpu.resize(size);
                    wallpaper.resize(logical_viewport(gpu.window), now);
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    wallpaper.resize(logical_viewport(gpu.window), now);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = logical_point(gpu.window, position.x, position.y);
                    wallpaper.pointer_move(cursor);
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => wallpaper.pointer_down(cursor),
                    ElementState::Released => report(wallpaper.pointer_up(cursor, now)),
                },
                WindowEvent::Touch(touch) => {
                    let at = logical_point(gpu.window, touch.location.x, touch.location.y);
                    match touch.phase {
                        TouchPhase::Started => wallpaper.pointer_down(at),
                        TouchPhase::Moved => wallpaper.pointer_move(at),
                        TouchPhase::Ended => report(wallpaper.pointer_up(at, now)),
                        TouchPhase::Cancelled => wallpaper.pointer_cancel(),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let frame = wallpaper.frame(now);
                match gpu.render(&frame, wallpaper.is_muted()) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.resize(gpu.window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit()
                    }
                    Err(e) => log::debug!("[gpu] frame skipped: {e}"),
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
