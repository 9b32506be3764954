// SPDX-License-Identifier: MIT
//
// Dispatch layer.
//
// Routes a `Color` of any format to a hub (`to_hsl`, `to_rgb`, `to_hsv`) and
// a hub value out to any `Format` (`hsl_to`, `rgb_to`). Every match here is
// exhaustive; an unknown format tag is turned away by `Format::from_str`
// before it gets this far.

use log::{debug, error};

use crate::convert::{
    cmyk_to_hsl, cmyk_to_rgb, hex_to_hsl, hex_to_rgb, hsl_to_cmyk, hsl_to_hex, hsl_to_hsv,
    hsl_to_lab, hsl_to_rgb, hsl_to_sl, hsl_to_sv, hsl_to_xyz, hsv_to_hsl, hsv_to_rgb, hsv_to_sv,
    lab_to_hsl, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
    rgb_to_lab, rgb_to_xyz, sl_to_hsl, sv_to_hsv, xyz_to_hsl, xyz_to_lab, xyz_to_rgb,
};
use crate::defaults::default_for;
use crate::model::{Color, Format, Hsl, Hsv, Rgb};
use crate::raw::{RawHsl, RawRgb};
use crate::validate::Validate;

// ─── Into a hub ──────────────────────────────────────────────────────────────

/// Any color, as HSL.
///
/// SL comes back with hue 0. SV is lifted to HSV (hue 0) and then taken to
/// HSL.
#[must_use]
pub fn to_hsl(color: &Color) -> Hsl {
    debug!("{} → hsl", color.format());
    match color {
        Color::Cmyk(v) => cmyk_to_hsl(*v),
        Color::Hex(v) => hex_to_hsl(v),
        Color::Hsl(v) => *v,
        Color::Hsv(v) => hsv_to_hsl(*v),
        Color::Lab(v) => lab_to_hsl(*v),
        Color::Rgb(v) => rgb_to_hsl(*v),
        Color::Sl(v) => sl_to_hsl(*v),
        Color::Sv(v) => hsv_to_hsl(sv_to_hsv(*v)),
        Color::Xyz(v) => xyz_to_hsl(*v),
    }
}

/// Any color, as RGB.
#[must_use]
pub fn to_rgb(color: &Color) -> Rgb {
    debug!("{} → rgb", color.format());
    match color {
        Color::Cmyk(v) => cmyk_to_rgb(*v),
        Color::Hex(v) => hex_to_rgb(v),
        Color::Hsl(v) => hsl_to_rgb(*v),
        Color::Hsv(v) => hsv_to_rgb(*v),
        Color::Lab(v) => lab_to_rgb(*v),
        Color::Rgb(v) => *v,
        Color::Sl(v) => hsl_to_rgb(sl_to_hsl(*v)),
        Color::Sv(v) => hsv_to_rgb(sv_to_hsv(*v)),
        Color::Xyz(v) => xyz_to_rgb(*v),
    }
}

/// Any color, as HSV. Everything except HSV and SV goes through RGB.
#[must_use]
pub fn to_hsv(color: &Color) -> Hsv {
    match color {
        Color::Hsv(v) => *v,
        Color::Sv(v) => sv_to_hsv(*v),
        other => rgb_to_hsv(to_rgb(other)),
    }
}

// ─── Out of a hub ────────────────────────────────────────────────────────────

/// HSL to `target`. `Format::Hsl` hands the validated value back unchanged.
///
/// `Format::Hsv` uses [`hsl_to_hsv`] (saturation 0, value = lightness),
/// not the RGB route [`convert`] takes. Rejected input gives the default of
/// `target`.
#[must_use]
pub fn hsl_to(hsl: impl Into<RawHsl>, target: Format) -> Color {
    let raw: RawHsl = hsl.into();
    let hsl = match raw.validate() {
        Ok(hsl) => hsl,
        Err(err) => {
            error!("hsl → {target}: rejected input ({err}); returning the {target} default");
            return default_for(target);
        }
    };
    debug!("hsl → {target}");
    match target {
        Format::Cmyk => hsl_to_cmyk(hsl).into(),
        Format::Hex => hsl_to_hex(hsl).into(),
        Format::Hsl => hsl.into(),
        Format::Hsv => hsl_to_hsv(hsl).into(),
        Format::Lab => hsl_to_lab(hsl).into(),
        Format::Rgb => hsl_to_rgb(hsl).into(),
        Format::Sl => hsl_to_sl(hsl).into(),
        Format::Sv => hsl_to_sv(hsl).into(),
        Format::Xyz => hsl_to_xyz(hsl).into(),
    }
}

/// RGB to `target`. SL and SV are projected from RGB's HSL and HSV.
#[must_use]
pub fn rgb_to(rgb: impl Into<RawRgb>, target: Format) -> Color {
    let raw: RawRgb = rgb.into();
    let rgb = match raw.validate() {
        Ok(rgb) => rgb,
        Err(err) => {
            error!("rgb → {target}: rejected input ({err}); returning the {target} default");
            return default_for(target);
        }
    };
    debug!("rgb → {target}");
    match target {
        Format::Cmyk => rgb_to_cmyk(rgb).into(),
        Format::Hex => rgb_to_hex(rgb).into(),
        Format::Hsl => rgb_to_hsl(rgb).into(),
        Format::Hsv => rgb_to_hsv(rgb).into(),
        Format::Lab => rgb_to_lab(rgb).into(),
        Format::Rgb => rgb.into(),
        Format::Sl => hsl_to_sl(rgb_to_hsl(rgb)).into(),
        Format::Sv => hsv_to_sv(rgb_to_hsv(rgb)).into(),
        Format::Xyz => rgb_to_xyz(rgb).into(),
    }
}

// ─── Any to any ──────────────────────────────────────────────────────────────

/// `color` in `target` format.
///
/// Same-format conversion returns a copy. Pairs with a direct hop (LAB and
/// XYZ, a cylinder and its projection) take it; HSL targets go through
/// [`to_hsl`]; everything else goes through RGB, so Hex, CMYK, XYZ and LAB
/// never pick up HSL's whole-number rounding.
///
/// HSV targets go through RGB as well, so an HSL color converted here gets
/// the textbook HSV, while [`hsl_to`] with `Format::Hsv` gives the literal
/// [`hsl_to_hsv`] answer: `hsl(0, 100%, 50%)` is `hsv(0, 100%, 100%)` here
/// and `hsv(0, 0%, 50%)` there.
#[must_use]
pub fn convert(color: &Color, target: Format) -> Color {
    if color.format() == target {
        return color.clone();
    }
    match (color, target) {
        (Color::Lab(v), Format::Xyz) => lab_to_xyz(*v).into(),
        (Color::Xyz(v), Format::Lab) => xyz_to_lab(*v).into(),
        (Color::Hsl(v), Format::Sl) => hsl_to_sl(*v).into(),
        (Color::Hsv(v), Format::Sv) => hsv_to_sv(*v).into(),
        (Color::Sv(v), Format::Hsv) => sv_to_hsv(*v).into(),
        (_, Format::Hsl) => to_hsl(color).into(),
        (_, Format::Hsv) => to_hsv(color).into(),
        _ => rgb_to(to_rgb(color), target),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
