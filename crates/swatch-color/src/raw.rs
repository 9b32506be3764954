// SPDX-License-Identifier: MIT
//
// Raw (unvalidated) color records.
//
// These mirror the branded structs field for field but hold plain numbers
// and strings. They are what callers hand the engine: text the codec just
// parsed, numbers a UI slider produced, or a branded value converted back
// with `From` so it can chain into the next conversion.

use crate::model::{Cmyk, Color, Format, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawCmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

/// Hex digits with an optional `#`, 6 or 8 of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHex {
    pub hex: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSl {
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSv {
    pub saturation: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawXyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An unvalidated color in one of the nine formats.
#[derive(Debug, Clone, PartialEq)]
pub enum RawColor {
    Cmyk(RawCmyk),
    Hex(RawHex),
    Hsl(RawHsl),
    Hsv(RawHsv),
    Lab(RawLab),
    Rgb(RawRgb),
    Sl(RawSl),
    Sv(RawSv),
    Xyz(RawXyz),
}

impl RawColor {
    /// The format tag of this record.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self {
            Self::Cmyk(_) => Format::Cmyk,
            Self::Hex(_) => Format::Hex,
            Self::Hsl(_) => Format::Hsl,
            Self::Hsv(_) => Format::Hsv,
            Self::Lab(_) => Format::Lab,
            Self::Rgb(_) => Format::Rgb,
            Self::Sl(_) => Format::Sl,
            Self::Sv(_) => Format::Sv,
            Self::Xyz(_) => Format::Xyz,
        }
    }
}

// ─── Branded → raw ───────────────────────────────────────────────────────────

impl From<Cmyk> for RawCmyk {
    fn from(v: Cmyk) -> Self {
        Self { cyan: v.cyan.get(), magenta: v.magenta.get(), yellow: v.yellow.get(), key: v.key.get() }
    }
}

impl From<Hex> for RawHex {
    fn from(v: Hex) -> Self {
        Self { hex: v.to_hex_string() }
    }
}

impl From<&Hex> for RawHex {
    fn from(v: &Hex) -> Self {
        Self { hex: v.to_hex_string() }
    }
}

impl From<&str> for RawHex {
    fn from(hex: &str) -> Self {
        Self { hex: hex.to_owned() }
    }
}

impl From<Hsl> for RawHsl {
    fn from(v: Hsl) -> Self {
        Self { hue: v.hue.get(), saturation: v.saturation.get(), lightness: v.lightness.get() }
    }
}

impl From<Hsv> for RawHsv {
    fn from(v: Hsv) -> Self {
        Self { hue: v.hue.get(), saturation: v.saturation.get(), value: v.value.get() }
    }
}

impl From<Lab> for RawLab {
    fn from(v: Lab) -> Self {
        Self { l: v.l.get(), a: v.a.get(), b: v.b.get() }
    }
}

impl From<Rgb> for RawRgb {
    fn from(v: Rgb) -> Self {
        Self { red: v.red.get(), green: v.green.get(), blue: v.blue.get() }
    }
}

impl From<Sl> for RawSl {
    fn from(v: Sl) -> Self {
        Self { saturation: v.saturation.get(), lightness: v.lightness.get() }
    }
}

impl From<Sv> for RawSv {
    fn from(v: Sv) -> Self {
        Self { saturation: v.saturation.get(), value: v.value.get() }
    }
}

impl From<Xyz> for RawXyz {
    fn from(v: Xyz) -> Self {
        Self { x: v.x.get(), y: v.y.get(), z: v.z.get() }
    }
}

impl From<Color> for RawColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Cmyk(v) => Self::Cmyk(v.into()),
            Color::Hex(v) => Self::Hex(v.into()),
            Color::Hsl(v) => Self::Hsl(v.into()),
            Color::Hsv(v) => Self::Hsv(v.into()),
            Color::Lab(v) => Self::Lab(v.into()),
            Color::Rgb(v) => Self::Rgb(v.into()),
            Color::Sl(v) => Self::Sl(v.into()),
            Color::Sv(v) => Self::Sv(v.into()),
            Color::Xyz(v) => Self::Xyz(v.into()),
        }
    }
}
