// SPDX-License-Identifier: MIT
//
// Validation layer — the gate between raw records and branded values.
//
// `Validate::validate` checks every field of a raw record against its range
// and, if all pass, assembles the branded struct. `color_values` is the
// boolean form used at the top of a conversion: it logs what was wrong and
// lets the caller decide how to degrade.

use log::error;

use crate::error::ColorError;
use crate::math::strip_hash_from_hex;
use crate::model::{Cmyk, Color, Format, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
use crate::range::{
    ByteRange, HexAlpha, HexSet, LabA, LabB, LabL, Percentile, Radial, RangeKey, XyzX, XyzY,
    XyzZ,
};
use crate::raw::{RawCmyk, RawColor, RawHex, RawHsl, RawHsv, RawLab, RawRgb, RawSl, RawSv, RawXyz};

/// A raw record that can be promoted to its branded form.
pub trait Validate {
    /// The branded struct this record validates into.
    type Branded;

    /// The format of the record.
    const FORMAT: Format;

    /// Check every field and build the branded value.
    ///
    /// # Errors
    ///
    /// The first field that fails its brand, as [`ColorError::OutOfRange`]
    /// or [`ColorError::Malformed`].
    fn validate(&self) -> Result<Self::Branded, ColorError>;
}

/// Whether `color` is structurally complete and every field is in range.
///
/// Failures are logged at `error` level with the offending field.
#[must_use]
pub fn color_values(color: &RawColor) -> bool {
    let checked = match color {
        RawColor::Cmyk(v) => v.validate().map(drop),
        RawColor::Hex(v) => v.validate().map(drop),
        RawColor::Hsl(v) => v.validate().map(drop),
        RawColor::Hsv(v) => v.validate().map(drop),
        RawColor::Lab(v) => v.validate().map(drop),
        RawColor::Rgb(v) => v.validate().map(drop),
        RawColor::Sl(v) => v.validate().map(drop),
        RawColor::Sv(v) => v.validate().map(drop),
        RawColor::Xyz(v) => v.validate().map(drop),
    };
    match checked {
        Ok(()) => true,
        Err(err) => {
            error!("invalid {} value {color:?}: {err}", color.format());
            false
        }
    }
}

/// Parse a percentage component, with or without a trailing `%`.
///
/// `"50%"`, `"50"` and `" 50 % "` all give `Some(50.0)`. The result is not
/// range-checked; that happens when the record is validated.
#[must_use]
pub fn parse_percent(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = text.strip_suffix('%').unwrap_or(text).trim_end();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Hue input accepts the closed interval `[0, 360]` and folds 360 to 0.
fn hue(degrees: f64) -> Result<Radial, ColorError> {
    if (0.0..=360.0).contains(&degrees) {
        Radial::wrapping(degrees)
    } else {
        Err(ColorError::OutOfRange { key: RangeKey::Radial, value: degrees })
    }
}

impl Validate for RawCmyk {
    type Branded = Cmyk;
    const FORMAT: Format = Format::Cmyk;

    fn validate(&self) -> Result<Cmyk, ColorError> {
        Ok(Cmyk {
            cyan: Percentile::new(self.cyan)?,
            magenta: Percentile::new(self.magenta)?,
            yellow: Percentile::new(self.yellow)?,
            key: Percentile::new(self.key)?,
        })
    }
}

impl Validate for RawHex {
    type Branded = Hex;
    const FORMAT: Format = Format::Hex;

    fn validate(&self) -> Result<Hex, ColorError> {
        let digits = strip_hash_from_hex(self.hex.trim());
        if !digits.is_ascii() {
            return Err(ColorError::Malformed { key: RangeKey::HexSet, value: self.hex.clone() });
        }
        match digits.len() {
            6 => Ok(Hex { hex: HexSet::new(&format!("#{digits}"))?, alpha: None }),
            8 => {
                let (rgb, alpha) = digits.split_at(6);
                Ok(Hex {
                    hex: HexSet::new(&format!("#{rgb}"))?,
                    alpha: Some(HexAlpha::new(alpha)?),
                })
            }
            _ => Err(ColorError::Malformed { key: RangeKey::HexSet, value: self.hex.clone() }),
        }
    }
}

impl Validate for RawHsl {
    type Branded = Hsl;
    const FORMAT: Format = Format::Hsl;

    fn validate(&self) -> Result<Hsl, ColorError> {
        Ok(Hsl {
            hue: hue(self.hue)?,
            saturation: Percentile::new(self.saturation)?,
            lightness: Percentile::new(self.lightness)?,
        })
    }
}

impl Validate for RawHsv {
    type Branded = Hsv;
    const FORMAT: Format = Format::Hsv;

    fn validate(&self) -> Result<Hsv, ColorError> {
        Ok(Hsv {
            hue: hue(self.hue)?,
            saturation: Percentile::new(self.saturation)?,
            value: Percentile::new(self.value)?,
        })
    }
}

impl Validate for RawLab {
    type Branded = Lab;
    const FORMAT: Format = Format::Lab;

    fn validate(&self) -> Result<Lab, ColorError> {
        Ok(Lab { l: LabL::new(self.l)?, a: LabA::new(self.a)?, b: LabB::new(self.b)? })
    }
}

impl Validate for RawRgb {
    type Branded = Rgb;
    const FORMAT: Format = Format::Rgb;

    fn validate(&self) -> Result<Rgb, ColorError> {
        Ok(Rgb {
            red: ByteRange::new(self.red)?,
            green: ByteRange::new(self.green)?,
            blue: ByteRange::new(self.blue)?,
        })
    }
}

impl Validate for RawSl {
    type Branded = Sl;
    const FORMAT: Format = Format::Sl;

    fn validate(&self) -> Result<Sl, ColorError> {
        Ok(Sl {
            saturation: Percentile::new(self.saturation)?,
            lightness: Percentile::new(self.lightness)?,
        })
    }
}

impl Validate for RawSv {
    type Branded = Sv;
    const FORMAT: Format = Format::Sv;

    fn validate(&self) -> Result<Sv, ColorError> {
        Ok(Sv {
            saturation: Percentile::new(self.saturation)?,
            value: Percentile::new(self.value)?,
        })
    }
}

impl Validate for RawXyz {
    type Branded = Xyz;
    const FORMAT: Format = Format::Xyz;

    fn validate(&self) -> Result<Xyz, ColorError> {
        Ok(Xyz { x: XyzX::new(self.x)?, y: XyzY::new(self.y)?, z: XyzZ::new(self.z)? })
    }
}

impl TryFrom<RawColor> for Color {
    type Error = ColorError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawColor::Cmyk(v) => v.validate()?.into(),
            RawColor::Hex(v) => v.validate()?.into(),
            RawColor::Hsl(v) => v.validate()?.into(),
            RawColor::Hsv(v) => v.validate()?.into(),
            RawColor::Lab(v) => v.validate()?.into(),
            RawColor::Rgb(v) => v.validate()?.into(),
            RawColor::Sl(v) => v.validate()?.into(),
            RawColor::Sv(v) => v.validate()?.into(),
            RawColor::Xyz(v) => v.validate()?.into(),
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
