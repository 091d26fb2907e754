//! Pipe colours.
//!
//! The animated view tints each installed segment along a diverging
//! red-yellow-blue map: the first half of the path runs the map reversed
//! (cool to hot), the second half forward (hot to cool).

use std::fmt;

/// Flat colour of the supply line in the static view
pub const SUPPLY_COLOR: Rgb = Rgb::new(255, 0, 0);
/// Flat colour of the return line in the static view
pub const RETURN_COLOR: Rgb = Rgb::new(0, 0, 255);
pub const BOUNDARY_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const ROOM_COLOR: Rgb = Rgb::new(128, 128, 128);
pub const INK_COLOR: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// ColorBrewer RdYlBu, 11 classes
const RD_YL_BU: [Rgb; 11] = [
    Rgb::new(0xa5, 0x00, 0x26),
    Rgb::new(0xd7, 0x30, 0x27),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x90),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xe0, 0xf3, 0xf8),
    Rgb::new(0xab, 0xd9, 0xe9),
    Rgb::new(0x74, 0xad, 0xd1),
    Rgb::new(0x45, 0x75, 0xb4),
    Rgb::new(0x31, 0x36, 0x95),
];

/// Piecewise-linear colour map over evenly spaced stops
#[derive(Debug, Clone, Copy)]
pub struct ColorMap {
    stops: &'static [Rgb],
    reversed: bool,
}

impl ColorMap {
    /// Red at 0, yellow at 0.5, blue at 1
    pub fn red_yellow_blue() -> Self {
        Self {
            stops: &RD_YL_BU,
            reversed: false,
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            stops: self.stops,
            reversed: !self.reversed,
        }
    }

    /// Colour at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let t = if self.reversed { 1.0 - t } else { t };

        let last = self.stops.len() - 1;
        let scaled = t * last as f64;
        let i = (scaled.floor() as usize).min(last - 1);
        self.stops[i].lerp(self.stops[i + 1], scaled - i as f64)
    }
}

/// Colour of segment `index` in a path of `point_count` points.
pub fn segment_color(index: usize, point_count: usize) -> Rgb {
    let half = (point_count / 2).max(1);
    if index < half {
        ColorMap::red_yellow_blue()
            .reversed()
            .sample(index as f64 / half as f64)
    } else {
        ColorMap::red_yellow_blue().sample((index - half) as f64 / half as f64)
    }
}
