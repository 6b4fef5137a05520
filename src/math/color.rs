use std::ops::{Add, Mul, Sub};

/// Linear RGB color.
///
/// `Color::new` clamps every channel into `[0, 1]`. The arithmetic operators go
/// through `from_raw` instead, so an intermediate result (a color scaled by an
/// unnormalized light amount, for instance) can sit outside that range until
/// the next clamping constructor runs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Color {
        Color {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
    pub const fn from_raw(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
    pub const BLACK: Color = Color::from_raw(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::from_raw(1.0, 1.0, 1.0);
}

impl Color {
    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.r
    }
    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.g
    }
    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// `a * (1 - t) + b * t` with `t` clamped to `[0, 1]`. The result is
    /// rebuilt through the clamping constructor.
    pub fn mix(a: Color, b: Color, mixture: f32) -> Color {
        let t = mixture.clamp(0.0, 1.0);
        Color::new(
            a.r * (1.0 - t) + b.r * t,
            a.g * (1.0 - t) + b.g * t,
            a.b * (1.0 - t) + b.b * t,
        )
    }

    /// Per channel power, used for gamma correction.
    pub fn pow(self, exponent: f32) -> Color {
        Color::new(
            self.r.powf(exponent),
            self.g.powf(exponent),
            self.b.powf(exponent),
        )
    }

    /// Quantizes to `[r, g, b, a]` bytes by truncation, with full opacity.
    /// Float to int casts saturate, so unclamped channels land on 0 or 255.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            255,
        ]
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, other: f32) -> Color {
        Color::from_raw(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        other * self
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color::from_raw(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, other: Color) -> Color {
        Color::from_raw(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Color {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> [f32; 3] {
        [c.r, c.g, c.b]
    }
}
