// Shared visual/interaction tuning constants used by both web and native frontends.

// Wave field sampling
pub const WAVE_COUNT_MIN: usize = 2;
pub const WAVE_COUNT_MAX: usize = 5; // inclusive
pub const PERIOD_WIDTH_MULTIPLIER: (f32, f32) = (1.0, 3.0); // half-open, times viewport width
pub const AMPLITUDE_RANGE: (i32, i32) = (50, 600); // inclusive, logical px
pub const BASELINE_OFFSET_RANGE: (i32, i32) = (-200, 200); // inclusive, from mid-height

// Control-point placement as fractions of one period
pub const CONTROL_LEAD: f32 = 0.35;
pub const CONTROL_TRAIL: f32 = 0.65;

// Animation timing (seconds)
pub const SCROLL_BASE_SECS: f64 = 7.0; // band 0
pub const SCROLL_STEP_SECS: f64 = 2.0; // added per band index
pub const TINT_CROSSFADE_SECS: f64 = 10.0;

// Color opacities
pub const BACKGROUND_TINT_OPACITY: f32 = 0.3;
pub const INDICATOR_TINT_OPACITY: f32 = 0.6;
pub const BACKDROP_VEIL_OPACITY: f32 = 0.01;
pub const LOGO_OPACITY: f32 = 0.5;
pub const MUTE_ICON_OPACITY: f32 = 0.3;

// Gestures
pub const DRAG_MIN_DISTANCE: f32 = 3.0; // logical px before a press becomes a drag

// Header layout (logical px)
pub const CONTENT_PADDING: f32 = 16.0;
pub const LOGO_SIZE: f32 = 50.0;
pub const MUTE_ICON_SIZE: f32 = 30.0;
pub const INDICATOR_SIZE: f32 = 30.0;
pub const STACK_SPACING: f32 = 8.0;

// Bundled assets
pub const MUSIC_ASSET: &str = "music.mp3";
pub const LOGO_ASSET: &str = "logo.png";

/// Scroll duration for the band at `index`: 7, 9, 11, ... seconds.
#[inline]
pub fn scroll_duration_secs(index: usize) -> f64 {
    SCROLL_BASE_SECS + SCROLL_STEP_SECS * index as f64
}
