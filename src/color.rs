use std::ops::{Add, Mul, Sub};

/// Largest value a channel may hold once written to the raster.
pub const CHANNEL_MAX: f64 = 255.0;

/// Floating point color in display units, each channel in `[0, 255]` once clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: CHANNEL_MAX,
        }
    }

    pub fn has_nan(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan() || self.a.is_nan()
    }

    pub fn clamped(&self) -> Self {
        Self {
            r: clamp_channel(self.r),
            g: clamp_channel(self.g),
            b: clamp_channel(self.b),
            a: clamp_channel(self.a),
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamped();
        [c.r as u8, c.g as u8, c.b as u8, c.a as u8]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, CHANNEL_MAX)
}

impl Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a,
        }
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            a: self.a,
        }
    }
}

/// Elementwise product, channels are treated as fractions of `CHANNEL_MAX`.
impl Mul for Color {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r / CHANNEL_MAX,
            g: self.g * rhs.g / CHANNEL_MAX,
            b: self.b * rhs.b / CHANNEL_MAX,
            a: self.a,
        }
    }
}

impl Mul<f64> for Color {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a,
        }
    }
}
