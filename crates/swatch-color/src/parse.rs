// SPDX-License-Identifier: MIT
//
// Text codec: CSS-like color strings in, the same syntax out.
//
//   #ff8800   #ff880080   ff8800   hex(#ff8800)
//   rgb(255, 136, 0)            cmyk(0%, 47%, 100%, 0%)
//   hsl(32, 100%, 50%)          hsv(32deg 100% 100%)
//   lab(67.05, 42.83, 74.03)    xyz(51.5, 48.3, 6.4)
//   sl(100%, 50%)               sv(100%, 100%)
//
// Components are separated by commas, whitespace, or both. Any component
// may carry a `%`, a hue may carry `deg`. The function name is matched
// case-insensitively against the format tags. Parsing only checks shape;
// ranges are checked when the `RawColor` is validated.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ColorError;
use crate::model::{Color, Format};
use crate::range::pattern;
use crate::raw::{RawCmyk, RawColor, RawHsl, RawHsv, RawLab, RawRgb, RawSl, RawSv, RawXyz};
use crate::validate::parse_percent;

static HEX: OnceLock<Regex> = OnceLock::new();
static FUNCTIONAL: OnceLock<Regex> = OnceLock::new();
static SEPARATOR: OnceLock<Regex> = OnceLock::new();

/// Parse a color string into an unvalidated record.
///
/// # Errors
///
/// [`ColorError::UnknownFormat`] when the function name is not a format
/// tag, [`ColorError::Parse`] when the string has any other shape problem
/// (wrong component count, an empty component, or one that is not a
/// number).
pub fn parse_raw(input: &str) -> Result<RawColor, ColorError> {
    let text = input.trim();
    if pattern(&HEX, r"^#?[0-9A-Fa-f]{6}(?:[0-9A-Fa-f]{2})?$").is_match(text) {
        return Ok(RawColor::Hex(text.into()));
    }

    let failed = || ColorError::Parse { input: input.to_owned() };
    let caps = pattern(&FUNCTIONAL, r"^([A-Za-z]+)\s*\(\s*([^()]*?)\s*\)$")
        .captures(text)
        .ok_or_else(failed)?;
    let format: Format = caps[1].parse()?;
    let args: Vec<&str> = pattern(&SEPARATOR, r"\s*,\s*|\s+")
        .split(&caps[2])
        .collect();
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(failed());
    }

    if format == Format::Hex {
        return match args.as_slice() {
            [hex] => Ok(RawColor::Hex((*hex).into())),
            _ => Err(failed()),
        };
    }

    let numbers: Vec<f64> = args
        .iter()
        .map(|arg| component(arg))
        .collect::<Option<_>>()
        .ok_or_else(failed)?;
    let raw = match (format, numbers.as_slice()) {
        (Format::Cmyk, &[cyan, magenta, yellow, key]) => {
            RawColor::Cmyk(RawCmyk { cyan, magenta, yellow, key })
        }
        (Format::Hsl, &[hue, saturation, lightness]) => {
            RawColor::Hsl(RawHsl { hue, saturation, lightness })
        }
        (Format::Hsv, &[hue, saturation, value]) => RawColor::Hsv(RawHsv { hue, saturation, value }),
        (Format::Lab, &[l, a, b]) => RawColor::Lab(RawLab { l, a, b }),
        (Format::Rgb, &[red, green, blue]) => RawColor::Rgb(RawRgb { red, green, blue }),
        (Format::Sl, &[saturation, lightness]) => RawColor::Sl(RawSl { saturation, lightness }),
        (Format::Sv, &[saturation, value]) => RawColor::Sv(RawSv { saturation, value }),
        (Format::Xyz, &[x, y, z]) => RawColor::Xyz(RawXyz { x, y, z }),
        _ => return Err(failed()),
    };
    Ok(raw)
}

fn component(text: &str) -> Option<f64> {
    parse_percent(text.strip_suffix("deg").unwrap_or(text))
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse and validate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_raw(s)?)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cmyk(v) => {
                write!(f, "cmyk({}%, {}%, {}%, {}%)", v.cyan, v.magenta, v.yellow, v.key)
            }
            Self::Hex(v) => f.write_str(&v.to_hex_string()),
            Self::Hsl(v) => write!(f, "hsl({}, {}%, {}%)", v.hue, v.saturation, v.lightness),
            Self::Hsv(v) => write!(f, "hsv({}, {}%, {}%)", v.hue, v.saturation, v.value),
            Self::Lab(v) => write!(f, "lab({}, {}, {})", v.l, v.a, v.b),
            Self::Rgb(v) => write!(f, "rgb({}, {}, {})", v.red, v.green, v.blue),
            Self::Sl(v) => write!(f, "sl({}%, {}%)", v.saturation, v.lightness),
            Self::Sv(v) => write!(f, "sv({}%, {}%)", v.saturation, v.value),
            Self::Xyz(v) => write!(f, "xyz({}, {}, {})", v.x, v.y, v.z),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
