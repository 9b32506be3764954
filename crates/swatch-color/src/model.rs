// SPDX-License-Identifier: MIT
//
// Branded color values.
//
// One struct per format, every field a brand from `range`. A struct can only
// be assembled from already-validated fields, so a `Color` in hand is a
// color in range. Untrusted input starts life as a `raw` record instead and
// is promoted through `validate`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::range::{
    ByteRange, HexAlpha, HexSet, LabA, LabB, LabL, Percentile, Radial, XyzX, XyzY, XyzZ,
};
use crate::raw::{RawCmyk, RawHex, RawHsl, RawHsv, RawLab, RawRgb, RawSl, RawSv, RawXyz};
use crate::validate::Validate;

// ─── Format tag ──────────────────────────────────────────────────────────────

/// The nine color formats the engine speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Cmyk,
    Hex,
    Hsl,
    Hsv,
    Lab,
    Rgb,
    Sl,
    Sv,
    Xyz,
}

impl Format {
    /// Every format, in tag order.
    pub const ALL: [Self; 9] = [
        Self::Cmyk,
        Self::Hex,
        Self::Hsl,
        Self::Hsv,
        Self::Lab,
        Self::Rgb,
        Self::Sl,
        Self::Sv,
        Self::Xyz,
    ];

    /// Lowercase tag, as used in color strings and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cmyk => "cmyk",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Lab => "lab",
            Self::Rgb => "rgb",
            Self::Sl => "sl",
            Self::Sv => "sv",
            Self::Xyz => "xyz",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    /// Case-insensitive tag lookup. This is where an unknown format tag is
    /// reported; past this point dispatch is exhaustive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ColorError::UnknownFormat(tag.to_owned()))
    }
}

// ─── Values ──────────────────────────────────────────────────────────────────

/// Cyan, magenta, yellow, key — each a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub cyan: Percentile,
    pub magenta: Percentile,
    pub yellow: Percentile,
    pub key: Percentile,
}

/// A `#RRGGBB` string with an optional alpha pair carried alongside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hex {
    pub hex: HexSet,
    pub alpha: Option<HexAlpha>,
}

/// Hue in degrees; saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: Radial,
    pub saturation: Percentile,
    pub lightness: Percentile,
}

/// Hue in degrees; saturation and value as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: Radial,
    pub saturation: Percentile,
    pub value: Percentile,
}

/// CIE L*a*b*, D65.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: LabL,
    pub a: LabA,
    pub b: LabB,
}

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub red: ByteRange,
    pub green: ByteRange,
    pub blue: ByteRange,
}

/// HSL without its hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sl {
    pub saturation: Percentile,
    pub lightness: Percentile,
}

/// HSV without its hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sv {
    pub saturation: Percentile,
    pub value: Percentile,
}

/// CIE 1931 tristimulus values, bounded by the D65 white.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: XyzX,
    pub y: XyzY,
    pub z: XyzZ,
}

// Checked constructors. Each one goes through the raw record so there is a
// single validation path.

impl Cmyk {
    /// # Errors
    ///
    /// The first field that fails its brand.
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self, ColorError> {
        RawCmyk { cyan, magenta, yellow, key }.validate()
    }
}

impl Hex {
    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// [`ColorError::Malformed`] when the digits are not hex or the length is
    /// neither 6 nor 8.
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        RawHex { hex: hex.to_owned() }.validate()
    }

    /// The display form: `#rrggbb`, followed by the alpha pair if any.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        match &self.alpha {
            Some(alpha) => format!("{}{alpha}", self.hex),
            None => self.hex.to_string(),
        }
    }
}

impl Hsl {
    /// # Errors
    ///
    /// The first field that fails its brand. A hue of exactly 360 folds to 0.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        RawHsl { hue, saturation, lightness }.validate()
    }
}

impl Hsv {
    /// # Errors
    ///
    /// The first field that fails its brand. A hue of exactly 360 folds to 0.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self, ColorError> {
        RawHsv { hue, saturation, value }.validate()
    }
}

impl Lab {
    /// # Errors
    ///
    /// The first field that fails its brand.
    pub fn new(l: f64, a: f64, b: f64) -> Result<Self, ColorError> {
        RawLab { l, a, b }.validate()
    }
}

impl Rgb {
    /// # Errors
    ///
    /// The first channel that is not a whole number in `[0, 255]`.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        RawRgb { red, green, blue }.validate()
    }

    /// From bytes; cannot fail.
    #[must_use]
    pub fn from_bytes([red, green, blue]: [u8; 3]) -> Self {
        Self { red: red.into(), green: green.into(), blue: blue.into() }
    }

    /// The channels as bytes.
    #[must_use]
    pub fn bytes(self) -> [u8; 3] {
        [self.red.as_u8(), self.green.as_u8(), self.blue.as_u8()]
    }
}

impl Sl {
    /// # Errors
    ///
    /// The first field outside `[0, 100]`.
    pub fn new(saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        RawSl { saturation, lightness }.validate()
    }
}

impl Sv {
    /// # Errors
    ///
    /// The first field outside `[0, 100]`.
    pub fn new(saturation: f64, value: f64) -> Result<Self, ColorError> {
        RawSv { saturation, value }.validate()
    }
}

impl Xyz {
    /// # Errors
    ///
    /// The first component outside the reference-white box.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ColorError> {
        RawXyz { x, y, z }.validate()
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A validated color in one of the nine formats.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Cmyk(Cmyk),
    Hex(Hex),
    Hsl(Hsl),
    Hsv(Hsv),
    Lab(Lab),
    Rgb(Rgb),
    Sl(Sl),
    Sv(Sv),
    Xyz(Xyz),
}

impl Color {
    /// The format tag of this value.
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

macro_rules! color_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Color {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

color_from!(Cmyk, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz);

// ─── Tests ───────────────────────────────────────────────────────────────────
