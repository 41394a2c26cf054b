//! Wallpaper scene state and its reducer.
//!
//! The whole screen is one owned [`Scene`]. Input is turned into
//! [`SceneEvent`]s and folded in with [`Scene::reduce`]; every frame is
//! re-derived from the current scene and clock with [`Scene::frame`]. Both
//! frontends share this path, so there is no framework-managed state.

use crate::animation::{Repeat, Tween};
use crate::color::{self, Rgba};
use crate::constants::*;
use crate::gesture::{classify_angle, swipe_angle, SwipeDirection};
use crate::layout::{Layout, Viewport};
use crate::path::WavePath;
use crate::wave::{WaveParams, WaveSpec};
use glam::Vec2;
use rand::Rng;

/// Palette entry for a swipe direction.
pub fn direction_color(direction: SwipeDirection) -> Rgba {
    match direction {
        SwipeDirection::Down => color::BLUE,
        SwipeDirection::Right => color::YELLOW,
        SwipeDirection::Up => color::GREEN,
        SwipeDirection::Left => color::RED,
    }
}

/// Colors derived from the last recognized swipe.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorState {
    pub direction: SwipeDirection,
    /// Band fill, breathing between the previous tint and the current one.
    pub background: Tween<Rgba>,
    pub indicator: Rgba,
}

impl ColorState {
    /// Launch colors: the fill starts red and crossfades toward the default
    /// direction's tint.
    fn launch(now_secs: f64) -> Self {
        let direction = SwipeDirection::Right;
        let from = color::RED.with_opacity(BACKGROUND_TINT_OPACITY);
        let background = Tween::hold(from, now_secs).retarget(
            background_tint(direction),
            TINT_CROSSFADE_SECS,
            now_secs,
            crossfade_repeat(),
        );
        Self {
            direction,
            background,
            indicator: indicator_tint(direction),
        }
    }

    fn apply(&mut self, direction: SwipeDirection, now_secs: f64) {
        self.direction = direction;
        self.background = self.background.retarget(
            background_tint(direction),
            TINT_CROSSFADE_SECS,
            now_secs,
            crossfade_repeat(),
        );
        self.indicator = indicator_tint(direction);
    }

    pub fn background_at(&self, now_secs: f64) -> Rgba {
        self.background.value(now_secs)
    }
}

pub fn background_tint(direction: SwipeDirection) -> Rgba {
    direction_color(direction).with_opacity(BACKGROUND_TINT_OPACITY)
}

pub fn indicator_tint(direction: SwipeDirection) -> Rgba {
    direction_color(direction).with_opacity(INDICATOR_TINT_OPACITY)
}

fn crossfade_repeat() -> Repeat {
    Repeat::Forever { autoreverses: true }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The drawing surface changed size.
    Resized { viewport: Viewport, at_secs: f64 },
    /// A drag passed the travel threshold and was released.
    DragEnded { translation: Vec2, at_secs: f64 },
}

#[derive(Clone, Debug)]
pub struct Scene {
    viewport: Viewport,
    waves: Vec<WaveSpec>,
    colors: ColorState,
    params: WaveParams,
}

impl Scene {
    /// Sample a fresh wave field and start every animation at `now_secs`.
    pub fn launch<R: Rng + ?Sized>(
        viewport: Viewport,
        params: WaveParams,
        now_secs: f64,
        rng: &mut R,
    ) -> Self {
        let count = params.sample_count(rng);
        let waves = (0..count)
            .map(|i| {
                let mut spec = WaveSpec::at_rest(
                    params.sample_period(rng, viewport.width),
                    params.sample_amplitude(rng),
                    params.sample_baseline_offset(rng),
                    now_secs,
                );
                spec.start_scroll(i, now_secs);
                spec
            })
            .collect::<Vec<_>>();
        log::info!(
            "[scene] launch: {} waves in {:.0}x{:.0}",
            waves.len(),
            viewport.width,
            viewport.height
        );
        Self {
            viewport,
            waves,
            colors: ColorState::launch(now_secs),
            params,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    pub fn waves(&self) -> &[WaveSpec] {
        &self.waves
    }

    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    pub fn direction(&self) -> SwipeDirection {
        self.colors.direction
    }

    pub fn layout(&self) -> Layout {
        Layout::for_viewport(self.viewport)
    }

    /// Fold one event into the scene.
    pub fn reduce<R: Rng + ?Sized>(mut self, event: &SceneEvent, rng: &mut R) -> Self {
        self.dispatch(event, rng);
        self
    }

    /// In-place form of [`Scene::reduce`] for owners that hold the scene
    /// by value.
    pub fn dispatch<R: Rng + ?Sized>(&mut self, event: &SceneEvent, rng: &mut R) {
        match *event {
            SceneEvent::Resized { viewport, at_secs } => {
                let width_changed = viewport.width != self.viewport.width;
                self.viewport = viewport;
                if width_changed {
                    for (i, wave) in self.waves.iter_mut().enumerate() {
                        wave.period = self.params.sample_period(rng, viewport.width);
                        wave.reset_scroll(at_secs);
                        wave.start_scroll(i, at_secs);
                    }
                    log::debug!(
                        "[scene] width -> {:.0}: resampled {} periods",
                        viewport.width,
                        self.waves.len()
                    );
                }
            }
            SceneEvent::DragEnded {
                translation,
                at_secs,
            } => {
                let angle = swipe_angle(translation);
                match classify_angle(angle) {
                    Some(direction) => {
                        self.colors.apply(direction, at_secs);
                        log::info!("[swipe] {}", direction.label());
                    }
                    None => log::warn!("[swipe] unknown direction for angle {angle}"),
                }
            }
        }
    }

    /// Everything a renderer needs for the frame at `now_secs`.
    pub fn frame(&self, now_secs: f64) -> Frame {
        let fill = self.colors.background_at(now_secs);
        let bands = self
            .waves
            .iter()
            .map(|w| Band {
                path: w.path(self.viewport.height),
                offset_x: w.offset_x(now_secs),
                fill,
            })
            .collect();
        Frame {
            viewport: self.viewport,
            backdrop: color::WHITE,
            veil: color::GRAY.with_opacity(BACKDROP_VEIL_OPACITY),
            layout: self.layout(),
            indicator: self.colors.indicator,
            bands,
        }
    }
}

/// One band as it should appear this frame.
#[derive(Clone, Debug)]
pub struct Band {
    /// Untranslated silhouette.
    pub path: WavePath,
    pub offset_x: f32,
    pub fill: Rgba,
}

impl Band {
    pub fn placed_path(&self) -> WavePath {
        self.path.translated(self.offset_x)
    }
}

/// Render description, back to front: backdrop, veil, header, bands.
#[derive(Clone, Debug)]
pub struct Frame {
    pub viewport: Viewport,
    pub backdrop: Rgba,
    pub veil: Rgba,
    pub layout: Layout,
    pub indicator: Rgba,
    pub bands: Vec<Band>,
}
