//! Time-evaluated animation descriptors.
//!
//! Nothing here runs in the background. A [`Tween`] records where an
//! interpolation started and is sampled with the current clock each frame.
//! Restarting an animation means replacing the descriptor; the old one is
//! simply dropped.

use crate::color::Rgba;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Rgba {
    fn lerp(self, to: Self, t: f32) -> Self {
        Rgba::lerp(self, to, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    /// Play once and hold the end value.
    Once,
    /// Loop forever. With `autoreverses` every odd cycle plays backwards.
    Forever { autoreverses: bool },
}

/// Linear interpolation from `from` to `to` over `duration_secs`, starting at
/// `start_secs` on the caller's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration_secs: f64,
    pub start_secs: f64,
    pub repeat: Repeat,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration_secs: f64, start_secs: f64, repeat: Repeat) -> Self {
        Self {
            from,
            to,
            duration_secs,
            start_secs,
            repeat,
        }
    }

    /// A descriptor that always evaluates to `value`.
    pub fn hold(value: T, start_secs: f64) -> Self {
        Self::new(value, value, 0.0, start_secs, Repeat::Once)
    }

    /// Interpolation parameter in \[0, 1\] at `now_secs`.
    pub fn progress(&self, now_secs: f64) -> f32 {
        let elapsed = now_secs - self.start_secs;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        let cycles = elapsed / self.duration_secs;
        match self.repeat {
            Repeat::Once => cycles.min(1.0) as f32,
            Repeat::Forever { autoreverses } => {
                let whole = cycles.floor();
                let frac = (cycles - whole) as f32;
                // exact cycle boundaries land on the end of the previous cycle
                if frac == 0.0 {
                    return if autoreverses && (whole as u64) % 2 == 0 {
                        0.0
                    } else {
                        1.0
                    };
                }
                if autoreverses && (whole as u64) % 2 == 1 {
                    1.0 - frac
                } else {
                    frac
                }
            }
        }
    }

    pub fn value(&self, now_secs: f64) -> T {
        self.from.lerp(self.to, self.progress(now_secs))
    }

    /// Start a new interpolation toward `to`, beginning from whatever this
    /// descriptor shows at `now_secs`.
    pub fn retarget(&self, to: T, duration_secs: f64, now_secs: f64, repeat: Repeat) -> Self {
        Self::new(self.value(now_secs), to, duration_secs, now_secs, repeat)
    }
}
