//! Straight-alpha RGBA colors and the named palette the wallpaper draws with.

/// Color with components in \[0, 1\], alpha not premultiplied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Replace the alpha channel.
    pub const fn with_opacity(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise linear interpolation, `t` clamped to \[0, 1\].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS `rgba(...)` string for canvas fill styles.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0)
        )
    }

    /// Approximate a component-wise equality, for animation checks.
    pub fn approx_eq(self, other: Rgba, eps: f32) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }
}

// System palette (light appearance)
pub const BLUE: Rgba = Rgba::opaque(0.0, 0.478, 1.0);
pub const YELLOW: Rgba = Rgba::opaque(1.0, 0.8, 0.0);
pub const GREEN: Rgba = Rgba::opaque(0.204, 0.78, 0.349);
pub const RED: Rgba = Rgba::opaque(1.0, 0.231, 0.188);
pub const GRAY: Rgba = Rgba::opaque(0.557, 0.557, 0.576);
pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
