use crate::animation::{Repeat, Tween};
use crate::constants::*;
use crate::path::{wave_band_path, WavePath};
use rand::Rng;

/// Sampling ranges for the wave field.
#[derive(Clone, Debug)]
pub struct WaveParams {
    pub count_min: usize,
    pub count_max: usize,
    /// Period as a multiple of viewport width, half-open.
    pub period_multiplier: (f32, f32),
    pub amplitude: (i32, i32),
    pub baseline_offset: (i32, i32),
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            count_min: WAVE_COUNT_MIN,
            count_max: WAVE_COUNT_MAX,
            period_multiplier: PERIOD_WIDTH_MULTIPLIER,
            amplitude: AMPLITUDE_RANGE,
            baseline_offset: BASELINE_OFFSET_RANGE,
        }
    }
}

impl WaveParams {
    pub fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.count_min..=self.count_max)
    }

    pub fn sample_period<R: Rng + ?Sized>(&self, rng: &mut R, viewport_width: f32) -> f32 {
        let (lo, hi) = self.period_multiplier;
        viewport_width * rng.gen_range(lo..hi)
    }

    pub fn sample_amplitude<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.amplitude.0..=self.amplitude.1)
    }

    pub fn sample_baseline_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.baseline_offset.0..=self.baseline_offset.1)
    }
}

/// One wave band: geometry plus its horizontal scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSpec {
    pub period: f32,
    pub amplitude: i32,
    pub baseline_offset: i32,
    /// Target of the scroll: `false` is rest, `true` one period to the left.
    pub scroll_phase: bool,
    /// Progress toward one period of scroll, 0 at rest.
    pub scroll: Tween<f32>,
}

impl WaveSpec {
    pub fn at_rest(period: f32, amplitude: i32, baseline_offset: i32, now_secs: f64) -> Self {
        Self {
            period,
            amplitude,
            baseline_offset,
            scroll_phase: false,
            scroll: Tween::hold(0.0, now_secs),
        }
    }

    /// Snap back to rest.
    pub fn reset_scroll(&mut self, now_secs: f64) {
        self.scroll_phase = false;
        self.scroll = Tween::hold(0.0, now_secs);
    }

    /// Drive the phase to `true` with a non-reversing infinite loop.
    pub fn start_scroll(&mut self, index: usize, now_secs: f64) {
        self.scroll_phase = true;
        self.scroll = Tween::new(
            0.0,
            1.0,
            scroll_duration_secs(index),
            now_secs,
            Repeat::Forever {
                autoreverses: false,
            },
        );
    }

    /// Horizontal render offset at `now_secs`: 0 at rest, `-period` when
    /// fully scrolled.
    pub fn offset_x(&self, now_secs: f64) -> f32 {
        -self.period * self.scroll.value(now_secs)
    }

    pub fn baseline(&self, viewport_height: f32) -> f32 {
        viewport_height / 2.0 + self.baseline_offset as f32
    }

    pub fn path(&self, viewport_height: f32) -> WavePath {
        wave_band_path(
            self.period,
            self.amplitude as f32,
            self.baseline(viewport_height),
            viewport_height,
        )
    }
}
