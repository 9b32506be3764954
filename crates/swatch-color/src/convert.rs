// SPDX-License-Identifier: MIT
//
// Conversion hub.
//
// HSL, RGB and XYZ are the hubs. Every other format is one hop away from
// one of them, and multi-hop conversions chain the hops:
//
//   CMYK ─┐                 ┌── HSV ── SV
//         ├── RGB ──── HSL ─┤
//   Hex  ─┘     │           └── SL
//               └── XYZ ── LAB
//
// Each public function accepts anything that converts into the raw record
// of its source format (a raw record, or a branded value from an earlier
// conversion), validates it, runs the typed hops below, and brands the
// result. Rejected input is logged at `error` and answered with the target
// format's default. RGB → Hex alone answers with the `#000000FF` sentinel
// and logs at `warn`.
//
// Rounding: the 8-bit-oriented formats (RGB, CMYK, HSL, HSV, SL, SV) round
// to whole numbers, XYZ keeps three decimals and LAB two. Nothing is
// rounded in the middle of a hop; each hop rounds its own output.

use log::{error, warn};

use crate::defaults::{Fallback, hex_sentinel};
use crate::error::ColorError;
use crate::math::{
    apply_gamma_correction, clamp_rgb, component_to_hex, hue_to_rgb, linearize, round_to,
};
use crate::model::{Cmyk, Format, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
use crate::range::{
    HexSet, LabA, LabB, LabL, Percentile, REF_X, REF_Y, REF_Z, Radial, XyzX, XyzY, XyzZ,
};
use crate::raw::{RawCmyk, RawHex, RawHsl, RawHsv, RawLab, RawRgb, RawSl, RawSv, RawXyz};
use crate::validate::Validate;

// ─── Constants ───────────────────────────────────────────────────────────────

/// Linear sRGB → XYZ (D65), rows X, Y, Z.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ (D65) → linear sRGB, rows R, G, B.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// CIE L*a*b* threshold between the cube-root and linear segments.
const LAB_EPSILON: f64 = 0.008_856;
/// Slope of the linear segment.
const LAB_SLOPE: f64 = 7.787;
/// Offset of the linear segment.
const LAB_OFFSET: f64 = 16.0 / 116.0;

// ─── Public entry points ─────────────────────────────────────────────────────

/// Validate `input`, run `hop`, fall back to the default of the target.
fn run<R, T>(input: &R, target: Format, hop: impl FnOnce(R::Branded) -> Result<T, ColorError>) -> T
where
    R: Validate,
    T: Fallback,
{
    let source = R::FORMAT;
    let value = match input.validate() {
        Ok(value) => value,
        Err(err) => {
            error!("{source} → {target}: rejected input ({err}); returning the {target} default");
            return T::fallback();
        }
    };
    hop(value).unwrap_or_else(|err| {
        error!("{source} → {target}: result failed its brand ({err}); returning the {target} default");
        T::fallback()
    })
}

/// CMYK → HSL, through RGB.
#[must_use]
pub fn cmyk_to_hsl(cmyk: impl Into<RawCmyk>) -> Hsl {
    run(&cmyk.into(), Format::Hsl, |cmyk| rgb_hsl(cmyk_rgb(cmyk)))
}

/// CMYK → RGB.
#[must_use]
pub fn cmyk_to_rgb(cmyk: impl Into<RawCmyk>) -> Rgb {
    run(&cmyk.into(), Format::Rgb, |cmyk| Ok(cmyk_rgb(cmyk)))
}

/// Hex → HSL, through RGB. Alpha is dropped.
#[must_use]
pub fn hex_to_hsl(hex: impl Into<RawHex>) -> Hsl {
    run(&hex.into(), Format::Hsl, |hex| rgb_hsl(hex_rgb(&hex)))
}

/// Hex → RGB. Alpha is dropped.
#[must_use]
pub fn hex_to_rgb(hex: impl Into<RawHex>) -> Rgb {
    run(&hex.into(), Format::Rgb, |hex| Ok(hex_rgb(&hex)))
}

/// HSL → CMYK, through RGB.
#[must_use]
pub fn hsl_to_cmyk(hsl: impl Into<RawHsl>) -> Cmyk {
    run(&hsl.into(), Format::Cmyk, |hsl| rgb_cmyk(hsl_rgb(hsl)))
}

/// HSL → Hex, through RGB.
#[must_use]
pub fn hsl_to_hex(hsl: impl Into<RawHsl>) -> Hex {
    run(&hsl.into(), Format::Hex, |hsl| rgb_hex(hsl_rgb(hsl)))
}

/// HSL → HSV.
///
/// The value term is `l + s·min(l, 0)`, so for any valid input the value
/// equals the lightness and the saturation comes out 0. Route through RGB
/// ([`rgb_to_hsv`]) for the textbook cylinder.
#[must_use]
pub fn hsl_to_hsv(hsl: impl Into<RawHsl>) -> Hsv {
    run(&hsl.into(), Format::Hsv, hsl_hsv)
}

/// HSL → LAB, through RGB and XYZ.
#[must_use]
pub fn hsl_to_lab(hsl: impl Into<RawHsl>) -> Lab {
    run(&hsl.into(), Format::Lab, |hsl| xyz_lab(rgb_xyz(hsl_rgb(hsl))?))
}

/// HSL → RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: impl Into<RawHsl>) -> Rgb {
    run(&hsl.into(), Format::Rgb, |hsl| Ok(hsl_rgb(hsl)))
}

/// HSL → SL: drops the hue.
#[must_use]
pub fn hsl_to_sl(hsl: impl Into<RawHsl>) -> Sl {
    run(&hsl.into(), Format::Sl, |hsl| Ok(hsl_sl(hsl)))
}

/// HSL → SV: drops the hue, lightness is carried over as value.
#[must_use]
pub fn hsl_to_sv(hsl: impl Into<RawHsl>) -> Sv {
    run(&hsl.into(), Format::Sv, |hsl| Ok(hsl_sv(hsl)))
}

/// HSL → XYZ, through RGB.
#[must_use]
pub fn hsl_to_xyz(hsl: impl Into<RawHsl>) -> Xyz {
    run(&hsl.into(), Format::Xyz, |hsl| rgb_xyz(hsl_rgb(hsl)))
}

/// HSV → HSL.
#[must_use]
pub fn hsv_to_hsl(hsv: impl Into<RawHsv>) -> Hsl {
    run(&hsv.into(), Format::Hsl, hsv_hsl)
}

/// HSV → RGB, through HSL.
#[must_use]
pub fn hsv_to_rgb(hsv: impl Into<RawHsv>) -> Rgb {
    run(&hsv.into(), Format::Rgb, |hsv| hsv_hsl(hsv).map(hsl_rgb))
}

/// HSV → SV: drops the hue.
#[must_use]
pub fn hsv_to_sv(hsv: impl Into<RawHsv>) -> Sv {
    run(&hsv.into(), Format::Sv, |hsv| Ok(hsv_sv(hsv)))
}

/// LAB → HSL, through XYZ and RGB.
#[must_use]
pub fn lab_to_hsl(lab: impl Into<RawLab>) -> Hsl {
    run(&lab.into(), Format::Hsl, |lab| rgb_hsl(xyz_rgb(lab_xyz(lab)?)))
}

/// LAB → RGB, through XYZ.
#[must_use]
pub fn lab_to_rgb(lab: impl Into<RawLab>) -> Rgb {
    run(&lab.into(), Format::Rgb, |lab| lab_xyz(lab).map(xyz_rgb))
}

/// LAB → XYZ.
#[must_use]
pub fn lab_to_xyz(lab: impl Into<RawLab>) -> Xyz {
    run(&lab.into(), Format::Xyz, lab_xyz)
}

/// RGB → CMYK.
#[must_use]
pub fn rgb_to_cmyk(rgb: impl Into<RawRgb>) -> Cmyk {
    run(&rgb.into(), Format::Cmyk, rgb_cmyk)
}

/// RGB → Hex.
///
/// Unlike every other conversion, unusable channels (NaN, or outside
/// `[0, 255]`) give the `#000000FF` sentinel and a warning, not the default.
#[must_use]
pub fn rgb_to_hex(rgb: impl Into<RawRgb>) -> Hex {
    let raw: RawRgb = rgb.into();
    match raw.validate() {
        Ok(rgb) => rgb_hex(rgb).unwrap_or_else(|err| {
            error!("rgb → hex: result failed its brand ({err}); returning the hex default");
            Hex::fallback()
        }),
        Err(err) => {
            warn!("rgb → hex: cannot encode {raw:?} ({err}); returning #000000FF");
            hex_sentinel()
        }
    }
}

/// RGB → HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: impl Into<RawRgb>) -> Hsl {
    run(&rgb.into(), Format::Hsl, rgb_hsl)
}

/// RGB → HSV, directly from the channel maximum.
#[must_use]
pub fn rgb_to_hsv(rgb: impl Into<RawRgb>) -> Hsv {
    run(&rgb.into(), Format::Hsv, rgb_hsv)
}

/// RGB → LAB, through XYZ.
#[must_use]
pub fn rgb_to_lab(rgb: impl Into<RawRgb>) -> Lab {
    run(&rgb.into(), Format::Lab, |rgb| xyz_lab(rgb_xyz(rgb)?))
}

/// RGB → XYZ.
#[must_use]
pub fn rgb_to_xyz(rgb: impl Into<RawRgb>) -> Xyz {
    run(&rgb.into(), Format::Xyz, rgb_xyz)
}

/// SL → HSL with hue 0.
#[must_use]
pub fn sl_to_hsl(sl: impl Into<RawSl>) -> Hsl {
    run(&sl.into(), Format::Hsl, |sl| Ok(sl_hsl(sl)))
}

/// SV → HSV with hue 0.
#[must_use]
pub fn sv_to_hsv(sv: impl Into<RawSv>) -> Hsv {
    run(&sv.into(), Format::Hsv, |sv| Ok(sv_hsv(sv)))
}

/// XYZ → HSL, through RGB.
#[must_use]
pub fn xyz_to_hsl(xyz: impl Into<RawXyz>) -> Hsl {
    run(&xyz.into(), Format::Hsl, |xyz| rgb_hsl(xyz_rgb(xyz)))
}

/// XYZ → LAB.
#[must_use]
pub fn xyz_to_lab(xyz: impl Into<RawXyz>) -> Lab {
    run(&xyz.into(), Format::Lab, xyz_lab)
}

/// XYZ → RGB, gamut-clamped.
#[must_use]
pub fn xyz_to_rgb(xyz: impl Into<RawXyz>) -> Rgb {
    run(&xyz.into(), Format::Rgb, |xyz| Ok(xyz_rgb(xyz)))
}

// ─── Typed hops ──────────────────────────────────────────────────────────────
//
// Branded in, branded out. The `Result`s only carry brand failures on the
// way out, which the arithmetic is built to avoid.

fn percent(unit: f64) -> Result<Percentile, ColorError> {
    Percentile::new(round_to(unit * 100.0, 0))
}

fn unit_channels(rgb: Rgb) -> [f64; 3] {
    [rgb.red, rgb.green, rgb.blue].map(|c| c.get() / 255.0)
}

/// Hue in degrees from unit channels, 0 when achromatic.
fn hue_degrees([r, g, b]: [f64; 3], max: f64, delta: f64) -> f64 {
    if delta <= 0.0 {
        return 0.0;
    }
    // `max` is one of the three channels, so exact comparison is sound.
    #[allow(clippy::float_cmp)]
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector * 60.0
}

fn matrix(m: [[f64; 3]; 3], [a, b, c]: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[2].mul_add(c, row[1].mul_add(b, row[0] * a)))
}

/// Three decimals, clamped into `[0, white]`.
fn tristimulus(value: f64, white: f64) -> f64 {
    round_to(value, 3).clamp(0.0, white)
}

pub(crate) fn rgb_hsl(rgb: Rgb) -> Result<Hsl, ColorError> {
    let channels = unit_channels(rgb);
    let [r, g, b] = channels;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let saturation = if delta <= 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Ok(Hsl {
        hue: Radial::wrapping(round_to(hue_degrees(channels, max, delta), 0))?,
        saturation: percent(saturation)?,
        lightness: percent(lightness)?,
    })
}

pub(crate) fn hsl_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.hue.get() / 360.0;
    let s = hsl.saturation.get() / 100.0;
    let l = hsl.lightness.get() / 100.0;

    if s <= 0.0 {
        return Rgb::from_bytes(clamp_rgb(l, l, l));
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { (-l).mul_add(s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    Rgb::from_bytes(clamp_rgb(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ))
}

pub(crate) fn rgb_hsv(rgb: Rgb) -> Result<Hsv, ColorError> {
    let channels = unit_channels(rgb);
    let [r, g, b] = channels;
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);
    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    Ok(Hsv {
        hue: Radial::wrapping(round_to(hue_degrees(channels, max, delta), 0))?,
        saturation: percent(saturation)?,
        value: percent(max)?,
    })
}

pub(crate) fn hsl_hsv(hsl: Hsl) -> Result<Hsv, ColorError> {
    let s = hsl.saturation.get() / 100.0;
    let l = hsl.lightness.get() / 100.0;
    let value = s.mul_add(l.min(0.0), l);
    let saturation = if value <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / value) };

    Ok(Hsv { hue: hsl.hue, saturation: percent(saturation)?, value: percent(value)? })
}

pub(crate) fn hsv_hsl(hsv: Hsv) -> Result<Hsl, ColorError> {
    let s = hsv.saturation.get() / 100.0;
    let v = hsv.value.get() / 100.0;
    let lightness = v * (1.0 - s / 2.0);
    let saturation = if lightness <= 0.0 || lightness >= 1.0 {
        0.0
    } else {
        (v - lightness) / lightness.min(1.0 - lightness)
    };

    Ok(Hsl { hue: hsv.hue, saturation: percent(saturation)?, lightness: percent(lightness)? })
}

pub(crate) fn rgb_xyz(rgb: Rgb) -> Result<Xyz, ColorError> {
    let linear = unit_channels(rgb).map(|c| linearize(c) * 100.0);
    let [x, y, z] = matrix(RGB_TO_XYZ, linear);
    Ok(Xyz {
        x: XyzX::new(tristimulus(x, REF_X))?,
        y: XyzY::new(tristimulus(y, REF_Y))?,
        z: XyzZ::new(tristimulus(z, REF_Z))?,
    })
}

pub(crate) fn xyz_rgb(xyz: Xyz) -> Rgb {
    let scaled = [xyz.x.get(), xyz.y.get(), xyz.z.get()].map(|v| v / 100.0);
    let [r, g, b] = matrix(XYZ_TO_RGB, scaled).map(apply_gamma_correction);
    Rgb::from_bytes(clamp_rgb(r, g, b))
}

pub(crate) fn xyz_lab(xyz: Xyz) -> Result<Lab, ColorError> {
    let f = |t: f64| if t > LAB_EPSILON { t.cbrt() } else { LAB_SLOPE.mul_add(t, LAB_OFFSET) };
    let fx = f(xyz.x.get() / REF_X);
    let fy = f(xyz.y.get() / REF_Y);
    let fz = f(xyz.z.get() / REF_Z);

    let l = 116.0f64.mul_add(fy, -16.0);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    Ok(Lab {
        l: LabL::new(round_to(l, 2).clamp(0.0, 100.0))?,
        a: LabA::new(round_to(a, 2).clamp(-125.0, 125.0))?,
        b: LabB::new(round_to(b, 2).clamp(-125.0, 125.0))?,
    })
}

pub(crate) fn lab_xyz(lab: Lab) -> Result<Xyz, ColorError> {
    let fy = (lab.l.get() + 16.0) / 116.0;
    let fx = lab.a.get() / 500.0 + fy;
    let fz = fy - lab.b.get() / 200.0;

    let inverse = |t: f64| {
        let cube = t.powi(3);
        if cube > LAB_EPSILON { cube } else { (t - LAB_OFFSET) / LAB_SLOPE }
    };

    Ok(Xyz {
        x: XyzX::new(tristimulus(inverse(fx) * REF_X, REF_X))?,
        y: XyzY::new(tristimulus(inverse(fy) * REF_Y, REF_Y))?,
        z: XyzZ::new(tristimulus(inverse(fz) * REF_Z, REF_Z))?,
    })
}

pub(crate) fn rgb_cmyk(rgb: Rgb) -> Result<Cmyk, ColorError> {
    let [r, g, b] = unit_channels(rgb);
    let max = r.max(g).max(b);

    // True black: key is 1 and the ink formula would divide by zero.
    if max <= 0.0 {
        return Ok(Cmyk {
            cyan: Percentile::ZERO,
            magenta: Percentile::ZERO,
            yellow: Percentile::ZERO,
            key: Percentile::new(100.0)?,
        });
    }

    let key = 1.0 - max;
    let ink = |c: f64| percent((1.0 - c - key) / (1.0 - key));
    Ok(Cmyk { cyan: ink(r)?, magenta: ink(g)?, yellow: ink(b)?, key: percent(key)? })
}

pub(crate) fn cmyk_rgb(cmyk: Cmyk) -> Rgb {
    let k = 1.0 - cmyk.key.get() / 100.0;
    let [r, g, b] = [cmyk.cyan, cmyk.magenta, cmyk.yellow].map(|ink| (1.0 - ink.get() / 100.0) * k);
    Rgb::from_bytes(clamp_rgb(r, g, b))
}

pub(crate) fn rgb_hex(rgb: Rgb) -> Result<Hex, ColorError> {
    let digits: String = rgb.bytes().map(component_to_hex).concat();
    Ok(Hex { hex: HexSet::new(&format!("#{digits}"))?, alpha: None })
}

pub(crate) fn hex_rgb(hex: &Hex) -> Rgb {
    Rgb::from_bytes(hex.hex.bytes())
}

pub(crate) const fn hsl_sl(hsl: Hsl) -> Sl {
    Sl { saturation: hsl.saturation, lightness: hsl.lightness }
}

pub(crate) const fn hsl_sv(hsl: Hsl) -> Sv {
    Sv { saturation: hsl.saturation, value: hsl.lightness }
}

pub(crate) const fn hsv_sv(hsv: Hsv) -> Sv {
    Sv { saturation: hsv.saturation, value: hsv.value }
}

pub(crate) const fn sl_hsl(sl: Sl) -> Hsl {
    Hsl { hue: Radial::ZERO, saturation: sl.saturation, lightness: sl.lightness }
}

pub(crate) const fn sv_hsv(sv: Sv) -> Hsv {
    Hsv { hue: Radial::ZERO, saturation: sv.saturation, value: sv.value }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{capture_logs, grid};
    use approx::assert_abs_diff_eq;
    use log::Level;
    use pretty_assertions::assert_eq;

    fn rgb(red: f64, green: f64, blue: f64) -> RawRgb {
        RawRgb { red, green, blue }
    }

    fn hsl(hue: f64, saturation: f64, lightness: f64) -> RawHsl {
        RawHsl { hue, saturation, lightness }
    }

    fn channel_gap(a: Rgb, b: Rgb) -> u8 {
        let (a, b) = (a.bytes(), b.bytes());
        (0..3).map(|i| a[i].abs_diff(b[i])).max().unwrap_or(0)
    }

    // ── Seed scenarios ───────────────────────────────────────────────────

    #[test]
    fn red_to_hex() {
        assert_eq!(rgb_to_hex(rgb(255.0, 0.0, 0.0)).to_hex_string(), "#ff0000");
    }

    #[test]
    fn pure_red_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(hsl(0.0, 100.0, 50.0)).bytes(), [255, 0, 0]);
    }

    #[test]
    fn full_key_cmyk_is_black() {
        let cmyk = RawCmyk { cyan: 0.0, magenta: 0.0, yellow: 0.0, key: 100.0 };
        assert_eq!(cmyk_to_rgb(cmyk).bytes(), [0, 0, 0]);
    }

    #[test]
    fn black_hex_to_rgb_to_hsl() {
        let black = hex_to_rgb("#000000");
        assert_eq!(black.bytes(), [0, 0, 0]);
        assert_eq!(rgb_to_hsl(black), Hsl::default());
    }

    #[test]
    fn white_reaches_the_reference_white_and_lab_100() {
        let xyz = rgb_to_xyz(rgb(255.0, 255.0, 255.0));
        assert_abs_diff_eq!(xyz.x.get(), REF_X, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y.get(), REF_Y, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.z.get(), REF_Z, epsilon = 1e-3);

        let lab = xyz_to_lab(xyz);
        assert_abs_diff_eq!(lab.l.get(), 100.0, epsilon = 0.01);
        assert_abs_diff_eq!(lab.a.get(), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(lab.b.get(), 0.0, epsilon = 0.01);
    }

    #[test]
    fn out_of_range_rgb_to_hex_gives_sentinel_and_warns() {
        let (hex, logs) = capture_logs(|| rgb_to_hex(rgb(300.0, -5.0, 10.0)));
        assert_eq!(hex.to_hex_string(), "#000000FF");
        assert!(logs.iter().any(|(level, _)| *level == Level::Warn), "no warning in {logs:?}");
        assert!(logs.iter().all(|(level, _)| *level != Level::Error));
    }

    #[test]
    fn nan_rgb_to_hex_gives_sentinel() {
        assert_eq!(rgb_to_hex(rgb(f64::NAN, 0.0, 0.0)).to_hex_string(), "#000000FF");
    }

    // ── Boundaries ───────────────────────────────────────────────────────

    #[test]
    fn mid_gray_is_achromatic() {
        let gray = rgb_to_hsl(rgb(128.0, 128.0, 128.0));
        assert_eq!(gray.hue.get(), 0.0);
        assert_eq!(gray.saturation.get(), 0.0);
        assert_eq!(gray.lightness.get(), 50.0);
    }

    #[test]
    fn black_and_white_cmyk() {
        let black = rgb_to_cmyk(rgb(0.0, 0.0, 0.0));
        assert_eq!(black, Cmyk::new(0.0, 0.0, 0.0, 100.0).unwrap());
        let white = rgb_to_cmyk(rgb(255.0, 255.0, 255.0));
        assert_eq!(white, Cmyk::default());
    }

    #[test]
    fn primary_hues() {
        assert_eq!(rgb_to_hsl(rgb(0.0, 255.0, 0.0)).hue.get(), 120.0);
        assert_eq!(rgb_to_hsl(rgb(0.0, 0.0, 255.0)).hue.get(), 240.0);
        assert_eq!(rgb_to_hsl(rgb(255.0, 0.0, 255.0)).hue.get(), 300.0);
    }

    #[test]
    fn hue_rounding_to_360_folds_to_zero() {
        // Red with a hint of blue sits at 359.77°.
        let hsl = rgb_to_hsl(rgb(255.0, 0.0, 1.0));
        assert_eq!(hsl.hue.get(), 0.0);
    }

    #[test]
    fn cmyk_of_orange() {
        let cmyk = rgb_to_cmyk(rgb(255.0, 128.0, 0.0));
        assert_eq!(cmyk, Cmyk::new(0.0, 50.0, 100.0, 0.0).unwrap());
    }

    #[test]
    fn hex_alpha_is_dropped_on_the_way_to_rgb() {
        assert_eq!(hex_to_rgb("#c8643280").bytes(), [200, 100, 50]);
    }

    // ── HSL ↔ HSV ────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hsv_keeps_lightness_as_value() {
        // Textbook HSL(210, 60%, 40%) is HSV(210, 75%, 64%); the
        // `min(l, 0)` term makes value == lightness and saturation 0.
        let hsv = hsl_to_hsv(hsl(210.0, 60.0, 40.0));
        assert_eq!(hsv, Hsv::new(210.0, 0.0, 40.0).unwrap());
        assert_ne!(hsv, Hsv::new(210.0, 75.0, 64.0).unwrap());
    }

    #[test]
    fn hsl_to_hsv_black() {
        assert_eq!(hsl_to_hsv(hsl(0.0, 100.0, 0.0)), Hsv::default());
    }

    #[test]
    fn hsv_to_hsl_textbook() {
        let hsl = hsv_to_hsl(RawHsv { hue: 0.0, saturation: 100.0, value: 100.0 });
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0).unwrap());
        let white = hsv_to_hsl(RawHsv { hue: 90.0, saturation: 0.0, value: 100.0 });
        assert_eq!(white, Hsl::new(90.0, 0.0, 100.0).unwrap());
    }

    #[test]
    fn rgb_to_hsv_textbook() {
        let hsv = rgb_to_hsv(rgb(255.0, 128.0, 0.0));
        assert_eq!(hsv, Hsv::new(30.0, 100.0, 100.0).unwrap());
        let orange = Rgb::from_bytes([255, 128, 0]);
        assert!(channel_gap(hsv_to_rgb(hsv), orange) <= 1);
    }

    // ── Projections ──────────────────────────────────────────────────────

    #[test]
    fn projections_drop_hue() {
        let source = hsl(200.0, 30.0, 70.0);
        assert_eq!(hsl_to_sl(source), Sl::new(30.0, 70.0).unwrap());
        assert_eq!(hsl_to_sv(source), Sv::new(30.0, 70.0).unwrap());
        let hsv = RawHsv { hue: 10.0, saturation: 20.0, value: 90.0 };
        assert_eq!(hsv_to_sv(hsv), Sv::new(20.0, 90.0).unwrap());
    }

    #[test]
    fn projections_lift_back_with_hue_zero() {
        assert_eq!(sl_to_hsl(RawSl { saturation: 30.0, lightness: 70.0 }), Hsl::new(0.0, 30.0, 70.0).unwrap());
        assert_eq!(sv_to_hsv(RawSv { saturation: 20.0, value: 90.0 }), Hsv::new(0.0, 20.0, 90.0).unwrap());
    }

    // ── Fallbacks ────────────────────────────────────────────────────────

    #[test]
    fn invalid_input_returns_target_default_and_logs_error() {
        let (out, logs) = capture_logs(|| hsl_to_rgb(hsl(400.0, 50.0, 50.0)));
        assert_eq!(out, Rgb::default());
        assert!(logs.iter().any(|(level, _)| *level == Level::Error), "no error in {logs:?}");
    }

    #[test]
    fn every_conversion_falls_back_on_nan() {
        let bad_rgb = rgb(f64::NAN, 0.0, 0.0);
        let bad_hsl = hsl(0.0, f64::NAN, 0.0);
        assert_eq!(rgb_to_hsl(bad_rgb), Hsl::default());
        assert_eq!(rgb_to_xyz(bad_rgb), Xyz::default());
        assert_eq!(rgb_to_lab(bad_rgb), Lab::default());
        assert_eq!(rgb_to_cmyk(bad_rgb), Cmyk::default());
        assert_eq!(hsl_to_lab(bad_hsl), Lab::default());
        assert_eq!(hsl_to_hex(bad_hsl), Hex::default());
        assert_eq!(lab_to_rgb(RawLab { l: f64::NAN, a: 0.0, b: 0.0 }), Rgb::default());
        assert_eq!(xyz_to_rgb(RawXyz { x: 0.0, y: 101.0, z: 0.0 }), Rgb::default());
        assert_eq!(hex_to_rgb("#12"), Rgb::default());
        assert_eq!(cmyk_to_hsl(RawCmyk { cyan: -1.0, magenta: 0.0, yellow: 0.0, key: 0.0 }), Hsl::default());
    }

    // ── Round trips ──────────────────────────────────────────────────────

    #[test]
    fn hsl_round_trip_exact_on_named_colors() {
        let named = [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
            [255, 255, 255],
            [0, 0, 0],
            [128, 128, 128],
            [200, 100, 50],
        ];
        for bytes in named {
            let original = Rgb::from_bytes(bytes);
            let back = hsl_to_rgb(rgb_to_hsl(original));
            assert!(channel_gap(original, back) <= 1, "{bytes:?} came back as {:?}", back.bytes());
        }
    }

    #[test]
    fn hsl_round_trip_stays_within_whole_number_rounding() {
        // Whole-degree hue and whole-percent S/L cost a few 8-bit steps on
        // steep ramps; five over the whole cube, three on this grid.
        for original in grid(15) {
            let back = hsl_to_rgb(rgb_to_hsl(original));
            assert!(channel_gap(original, back) <= 3, "{:?} came back as {:?}", original.bytes(), back.bytes());
        }
    }

    #[test]
    fn xyz_round_trip_within_one() {
        let ((), logs) = capture_logs(|| {
            for original in grid(5) {
                let back = xyz_to_rgb(rgb_to_xyz(original));
                assert!(channel_gap(original, back) <= 1, "{:?} came back as {:?}", original.bytes(), back.bytes());
            }
        });
        assert!(logs.iter().all(|(level, _)| *level != Level::Error), "fell back: {logs:?}");
    }

    #[test]
    fn lab_round_trip_within_one() {
        let ((), logs) = capture_logs(|| {
            for original in grid(5) {
                let back = lab_to_rgb(rgb_to_lab(original));
                assert!(channel_gap(original, back) <= 1, "{:?} came back as {:?}", original.bytes(), back.bytes());
            }
        });
        assert!(logs.iter().all(|(level, _)| *level != Level::Error), "fell back: {logs:?}");
    }

    #[test]
    fn cmyk_round_trip_within_whole_percent_rounding() {
        for original in grid(15) {
            let back = cmyk_to_rgb(rgb_to_cmyk(original));
            assert!(channel_gap(original, back) <= 2, "{:?} came back as {:?}", original.bytes(), back.bytes());
        }
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for original in grid(15) {
            assert_eq!(hex_to_rgb(rgb_to_hex(original)), original);
        }
    }

    // ── Range invariant ──────────────────────────────────────────────────

    #[test]
    fn extreme_lab_clamps_into_the_white_box() {
        let xyz = lab_to_xyz(RawLab { l: 100.0, a: 125.0, b: -125.0 });
        assert!(xyz.x.get() <= REF_X && xyz.z.get() <= REF_Z);
        let xyz = lab_to_xyz(RawLab { l: 0.0, a: -125.0, b: 125.0 });
        assert!(xyz.x.get() >= 0.0 && xyz.z.get() >= 0.0);
    }

    #[test]
    fn extreme_xyz_clamps_lab_axes() {
        let lab = xyz_to_lab(RawXyz { x: REF_X, y: 0.0, z: 0.0 });
        assert_eq!(lab.a.get(), 125.0);
        assert_eq!(lab.l.get(), 0.0);
    }

    #[test]
    fn gamut_clamping_on_xyz_to_rgb() {
        // Pure X with no Y lies far outside sRGB.
        let rgb = xyz_to_rgb(RawXyz { x: 50.0, y: 0.0, z: 0.0 });
        assert_eq!(rgb.green.get(), 0.0);
    }
}
