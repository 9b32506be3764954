// SPDX-License-Identifier: MIT
//
// Default/fallback registry.
//
// One zero value per format, built on first use and shared read-only for
// the rest of the process. Every conversion that rejects its input answers
// with the entry for its *target* format, so callers always get a fully
// branded value back.
//
// RGB → Hex is the one exception: it answers with `#000000FF` instead.

use std::sync::OnceLock;

use crate::model::{Cmyk, Color, Format, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
use crate::range::{HexAlpha, HexSet};

/// The registry contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub cmyk: Cmyk,
    pub hex: Hex,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub lab: Lab,
    pub rgb: Rgb,
    pub sl: Sl,
    pub sv: Sv,
    pub xyz: Xyz,
    /// What `rgb_to_hex` returns for unusable channels.
    pub hex_sentinel: Hex,
}

static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

/// The process-wide registry, initialized on first call.
#[must_use]
pub fn registry() -> &'static Defaults {
    DEFAULTS.get_or_init(|| Defaults {
        cmyk: Cmyk::default(),
        hex: Hex { hex: HexSet::default(), alpha: None },
        hsl: Hsl::default(),
        hsv: Hsv::default(),
        lab: Lab::default(),
        rgb: Rgb::default(),
        sl: Sl::default(),
        sv: Sv::default(),
        xyz: Xyz::default(),
        hex_sentinel: Hex { hex: HexSet::default(), alpha: Some(HexAlpha::opaque()) },
    })
}

impl Defaults {
    /// The default value of `format`, as a [`Color`].
    #[must_use]
    pub fn get(&self, format: Format) -> Color {
        match format {
            Format::Cmyk => Color::Cmyk(self.cmyk),
            Format::Hex => Color::Hex(self.hex.clone()),
            Format::Hsl => Color::Hsl(self.hsl),
            Format::Hsv => Color::Hsv(self.hsv),
            Format::Lab => Color::Lab(self.lab),
            Format::Rgb => Color::Rgb(self.rgb),
            Format::Sl => Color::Sl(self.sl),
            Format::Sv => Color::Sv(self.sv),
            Format::Xyz => Color::Xyz(self.xyz),
        }
    }
}

/// Shorthand for `registry().get(format)`.
#[must_use]
pub fn default_for(format: Format) -> Color {
    registry().get(format)
}

/// The `#000000FF` sentinel of RGB → Hex.
#[must_use]
pub fn hex_sentinel() -> Hex {
    registry().hex_sentinel.clone()
}

/// A branded type with a registry entry.
pub trait Fallback {
    /// The registry entry for this type.
    fn fallback() -> Self;
}

macro_rules! fallback {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl Fallback for $ty {
                fn fallback() -> Self {
                    registry().$field
                }
            }
        )*
    };
}

impl Fallback for Hex {
    fn fallback() -> Self {
        registry().hex.clone()
    }
}

fallback! {
    Cmyk => cmyk,
    Hsl => hsl,
    Hsv => hsv,
    Lab => lab,
    Rgb => rgb,
    Sl => sl,
    Sv => sv,
    Xyz => xyz,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
