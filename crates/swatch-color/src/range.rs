// SPDX-License-Identifier: MIT
//
// Range/brand registry.
//
// Every number that leaves the engine is wrapped in a newtype whose only
// constructor checks it against a named interval. Once wrapped, a value is
// known to be in range for the rest of its life: the inner field is private
// and nothing hands out `&mut` access to it.
//
//   ByteRange   [0, 255]        RGB channels, whole numbers only
//   Percentile  [0, 100]        CMYK, saturation, lightness, value
//   Radial      [0, 360)        hue angles
//   LabL        [0, 100]        L*
//   LabA/LabB   [-125, 125]     a*, b*
//   XyzX/Y/Z    [0, white]      bounded by the D65 reference white
//   HexSet      #RRGGBB
//   HexAlpha    AA

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ColorError;

/// D65 reference white, X component (2° observer, scaled so Y = 100).
pub const REF_X: f64 = 95.047;
/// D65 reference white, Y component.
pub const REF_Y: f64 = 100.0;
/// D65 reference white, Z component.
pub const REF_Z: f64 = 108.883;

// ─── Range keys ──────────────────────────────────────────────────────────────

/// The name of a validated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKey {
    ByteRange,
    Percentile,
    Radial,
    LabL,
    LabA,
    LabB,
    XyzX,
    XyzY,
    XyzZ,
    HexSet,
    HexAlpha,
}

impl RangeKey {
    /// Every key, in registry order.
    pub const ALL: [Self; 11] = [
        Self::ByteRange,
        Self::Percentile,
        Self::Radial,
        Self::LabL,
        Self::LabA,
        Self::LabB,
        Self::XyzX,
        Self::XyzY,
        Self::XyzZ,
        Self::HexSet,
        Self::HexAlpha,
    ];

    /// Numeric interval of this key, `None` for the string-shaped keys.
    ///
    /// All intervals are closed except [`RangeKey::Radial`], whose upper
    /// bound is exclusive. [`RangeKey::ByteRange`] also requires a whole
    /// number.
    #[must_use]
    pub const fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Self::ByteRange => Some((0.0, 255.0)),
            Self::Percentile | Self::LabL => Some((0.0, 100.0)),
            Self::Radial => Some((0.0, 360.0)),
            Self::LabA | Self::LabB => Some((-125.0, 125.0)),
            Self::XyzX => Some((0.0, REF_X)),
            Self::XyzY => Some((0.0, REF_Y)),
            Self::XyzZ => Some((0.0, REF_Z)),
            Self::HexSet | Self::HexAlpha => None,
        }
    }

    /// Whether `value` may be branded with this key.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match (self, self.bounds()) {
            (Self::Radial, Some((lo, hi))) => value >= lo && value < hi,
            (Self::ByteRange, Some((lo, hi))) => value.fract() == 0.0 && (lo..=hi).contains(&value),
            (_, Some((lo, hi))) => (lo..=hi).contains(&value),
            (_, None) => false,
        }
    }

    /// Registry name of the key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ByteRange => "ByteRange",
            Self::Percentile => "Percentile",
            Self::Radial => "Radial",
            Self::LabL => "LAB_L",
            Self::LabA => "LAB_A",
            Self::LabB => "LAB_B",
            Self::XyzX => "XYZ_X",
            Self::XyzY => "XYZ_Y",
            Self::XyzZ => "XYZ_Z",
            Self::HexSet => "HexSet",
            Self::HexAlpha => "HexAlpha",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check `raw` against the interval of `key`.
///
/// This is the single numeric gate of the registry; every typed constructor
/// below goes through it.
///
/// # Errors
///
/// [`ColorError::OutOfRange`] naming `key` and `raw` when the number is not
/// finite or lies outside the interval.
pub fn brand(key: RangeKey, raw: f64) -> Result<f64, ColorError> {
    if key.contains(raw) {
        Ok(raw)
    } else {
        Err(ColorError::OutOfRange { key, value: raw })
    }
}

// ─── Numeric brands ──────────────────────────────────────────────────────────

macro_rules! branded {
    ($(#[$meta:meta])* $name:ident => $key:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
        pub struct $name(f64);

        impl $name {
            /// The zero value, valid for every numeric range.
            pub const ZERO: Self = Self(0.0);

            /// The key this brand validates against.
            pub const KEY: RangeKey = RangeKey::$key;

            /// Validate `raw` and wrap it.
            ///
            /// # Errors
            ///
            /// [`ColorError::OutOfRange`] when `raw` is outside the range.
            pub fn new(raw: f64) -> Result<Self, ColorError> {
                brand(Self::KEY, raw).map(Self)
            }

            /// The wrapped number.
            #[inline]
            #[must_use]
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = ColorError;

            fn try_from(raw: f64) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

branded! {
    /// An 8-bit channel value, a whole number in `[0, 255]`.
    ByteRange => ByteRange
}

branded! {
    /// A percentage in `[0, 100]`.
    Percentile => Percentile
}

branded! {
    /// A hue angle in degrees, `[0, 360)`.
    Radial => Radial
}

branded! {
    /// CIE L* lightness, `[0, 100]`.
    LabL => LabL
}

branded! {
    /// CIE a* (green–red axis), `[-125, 125]`.
    LabA => LabA
}

branded! {
    /// CIE b* (blue–yellow axis), `[-125, 125]`.
    LabB => LabB
}

branded! {
    /// CIE X tristimulus, `[0, 95.047]`.
    XyzX => XyzX
}

branded! {
    /// CIE Y tristimulus, `[0, 100]`.
    XyzY => XyzY
}

branded! {
    /// CIE Z tristimulus, `[0, 108.883]`.
    XyzZ => XyzZ
}

impl ByteRange {
    /// The channel as a byte.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u8(self) -> u8 {
        // A whole number in 0..=255 by construction.
        self.0 as u8
    }
}

impl From<u8> for ByteRange {
    fn from(byte: u8) -> Self {
        Self(f64::from(byte))
    }
}

impl Radial {
    /// Fold any finite angle into `[0, 360)` and wrap it.
    ///
    /// `360` becomes `0`, `-30` becomes `330`.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] when `degrees` is not finite.
    pub fn wrapping(degrees: f64) -> Result<Self, ColorError> {
        if !degrees.is_finite() {
            return Err(ColorError::OutOfRange { key: RangeKey::Radial, value: degrees });
        }
        let folded = degrees.rem_euclid(360.0);
        // rem_euclid of a tiny negative number rounds up to exactly 360.0.
        Self::new(if folded >= 360.0 { 0.0 } else { folded })
    }
}

// ─── String brands ───────────────────────────────────────────────────────────

static HEX_SET: OnceLock<Regex> = OnceLock::new();
static HEX_ALPHA: OnceLock<Regex> = OnceLock::new();

/// Compile `source` into `cell` on first use.
pub(crate) fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("color patterns are valid literals"))
}

/// A `#RRGGBB` hex string. Case is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexSet(String);

impl HexSet {
    /// Validate `raw` as `#RRGGBB` and wrap it.
    ///
    /// An 8-digit `#RRGGBBAA` string is truncated to its RGB portion first;
    /// the alpha pair, if wanted, has to be taken separately.
    ///
    /// # Errors
    ///
    /// [`ColorError::Malformed`] when the string is not six hex digits after
    /// a `#`.
    pub fn new(raw: &str) -> Result<Self, ColorError> {
        let candidate = if raw.len() == 9 && raw.starts_with('#') {
            raw.get(..7).unwrap_or(raw)
        } else {
            raw
        };
        if pattern(&HEX_SET, r"^#[0-9A-Fa-f]{6}$").is_match(candidate) {
            Ok(Self(candidate.to_owned()))
        } else {
            Err(ColorError::Malformed { key: RangeKey::HexSet, value: raw.to_owned() })
        }
    }

    /// The `#RRGGBB` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three channel bytes.
    #[must_use]
    pub fn bytes(&self) -> [u8; 3] {
        let digits = self.0.as_bytes();
        // Six ASCII hex digits after '#', guaranteed by the constructor.
        [1, 3, 5].map(|i| hex_pair(digits[i], digits[i + 1]))
    }
}

impl Default for HexSet {
    fn default() -> Self {
        Self("#000000".to_owned())
    }
}

impl fmt::Display for HexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two-digit hex alpha component (`00`–`FF`), case kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexAlpha(String);

impl HexAlpha {
    /// Validate `raw` as two hex digits and wrap it.
    ///
    /// # Errors
    ///
    /// [`ColorError::Malformed`] for anything but two hex digits.
    pub fn new(raw: &str) -> Result<Self, ColorError> {
        if pattern(&HEX_ALPHA, r"^[0-9A-Fa-f]{2}$").is_match(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(ColorError::Malformed { key: RangeKey::HexAlpha, value: raw.to_owned() })
        }
    }

    /// Fully opaque, uppercase: `FF`.
    #[must_use]
    pub fn opaque() -> Self {
        Self("FF".to_owned())
    }

    /// The two digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        let digits = self.0.as_bytes();
        f64::from(hex_pair(digits[0], digits[1])) / 255.0
    }
}

impl fmt::Display for HexAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

const fn hex_pair(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) << 4 | hex_digit(lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_accepts_interval_edges() {
        assert_eq!(brand(RangeKey::ByteRange, 0.0), Ok(0.0));
        assert_eq!(brand(RangeKey::ByteRange, 255.0), Ok(255.0));
        assert_eq!(brand(RangeKey::LabA, -125.0), Ok(-125.0));
        assert_eq!(brand(RangeKey::XyzZ, REF_Z), Ok(REF_Z));
    }

    #[test]
    fn brand_rejects_outside_values_naming_the_key() {
        assert_eq!(
            brand(RangeKey::Percentile, 100.5),
            Err(ColorError::OutOfRange { key: RangeKey::Percentile, value: 100.5 })
        );
        let err = ByteRange::new(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "-1 is out of range for ByteRange");
    }

    #[test]
    fn brand_rejects_non_finite() {
        assert!(Percentile::new(f64::NAN).is_err());
        assert!(XyzX::new(f64::INFINITY).is_err());
        assert!(Radial::wrapping(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn radial_upper_bound_is_exclusive() {
        assert!(Radial::new(359.9).is_ok());
        assert!(Radial::new(360.0).is_err());
    }

    #[test]
    fn radial_wrapping_folds_angles() {
        assert_eq!(Radial::wrapping(360.0).unwrap().get(), 0.0);
        assert_eq!(Radial::wrapping(-30.0).unwrap().get(), 330.0);
        assert_eq!(Radial::wrapping(725.0).unwrap().get(), 5.0);
        assert_eq!(Radial::wrapping(-1e-20).unwrap().get(), 0.0);
    }

    #[test]
    fn string_keys_have_no_numeric_interval() {
        assert!(RangeKey::HexSet.bounds().is_none());
        assert!(!RangeKey::HexAlpha.contains(0.0));
        assert!(brand(RangeKey::HexSet, 1.0).is_err());
    }

    #[test]
    fn every_numeric_key_admits_zero() {
        for key in RangeKey::ALL {
            if key.bounds().is_some() {
                assert!(key.contains(0.0), "{key} rejects zero");
            }
        }
    }

    #[test]
    fn hex_set_validates_pattern() {
        assert_eq!(HexSet::new("#A1b2C3").unwrap().as_str(), "#A1b2C3");
        assert!(HexSet::new("A1b2C3").is_err());
        assert!(HexSet::new("#12345").is_err());
        assert!(HexSet::new("#12345g").is_err());
    }

    #[test]
    fn hex_set_truncates_alpha_digits() {
        let hex = HexSet::new("#ff000080").unwrap();
        assert_eq!(hex.as_str(), "#ff0000");
    }

    #[test]
    fn hex_set_bytes() {
        assert_eq!(HexSet::new("#c86432").unwrap().bytes(), [200, 100, 50]);
        assert_eq!(HexSet::default().bytes(), [0, 0, 0]);
    }

    #[test]
    fn hex_alpha_opacity() {
        assert_eq!(HexAlpha::new("FF").unwrap().opacity(), 1.0);
        assert_eq!(HexAlpha::opaque(), HexAlpha::new("FF").unwrap());
        assert_eq!(HexAlpha::new("00").unwrap().opacity(), 0.0);
        assert!(HexAlpha::new("F").is_err());
        assert!(HexAlpha::new("GG").is_err());
    }

    #[test]
    fn byte_range_converts_to_u8() {
        assert_eq!(ByteRange::new(254.0).unwrap().as_u8(), 254);
        assert_eq!(ByteRange::from(17).get(), 17.0);
    }

    #[test]
    fn byte_range_rejects_fractions() {
        assert_eq!(
            ByteRange::new(12.5),
            Err(ColorError::OutOfRange { key: RangeKey::ByteRange, value: 12.5 })
        );
        assert!(!RangeKey::ByteRange.contains(254.6));
        assert!(RangeKey::Percentile.contains(12.5));
    }
}
