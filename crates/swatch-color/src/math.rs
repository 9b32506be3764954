// SPDX-License-Identifier: MIT
//
// Numeric helpers for the conversion hub.
//
// Pure scalar functions: sRGB companding in both directions, gamut clamping
// to 8-bit, the HSL hue-sector helper, and hex formatting. All channel
// arithmetic is f64 in the unit interval unless a name says otherwise.

// ─── sRGB companding ─────────────────────────────────────────────────────────

/// Encode a linear-light channel with the sRGB transfer curve.
#[inline]
#[must_use]
pub fn apply_gamma_correction(linear: f64) -> f64 {
    if linear > 0.003_130_8 {
        1.055f64.mul_add(linear.powf(1.0 / 2.4), -0.055)
    } else {
        12.92 * linear
    }
}

/// Decode an sRGB-encoded channel to linear light.
#[inline]
#[must_use]
pub fn linearize(companded: f64) -> f64 {
    if companded > 0.040_45 {
        ((companded + 0.055) / 1.055).powf(2.4)
    } else {
        companded / 12.92
    }
}

// ─── Clamping and rounding ───────────────────────────────────────────────────

/// Clamp unit-interval channels to `[0, 1]`, scale to `[0, 255]`, round.
///
/// NaN clamps to 0.
#[must_use]
pub fn clamp_rgb(red: f64, green: f64, blue: f64) -> [u8; 3] {
    [red, green, blue].map(unit_to_byte)
}

/// Clamp an alpha to `[0, 1]` and round it to two decimals.
#[must_use]
pub fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        return 0.0;
    }
    round_to(alpha.clamp(0.0, 1.0), 2)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    // 0.0 <= v * 255.0 <= 255.0 after the clamp.
    (v * 255.0).round() as u8
}

/// Round to `decimals` places, ties away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    // `+ 0.0` turns a rounded -0.0 into 0.0.
    (value * scale).round() / scale + 0.0
}

// ─── HSL hue sectors ─────────────────────────────────────────────────────────

/// The classic HSL auxiliary: one channel from `p`, `q` and a hue offset `t`.
///
/// `t` is first wrapped into `[0, 1]` by ±1, then the sixth of the wheel it
/// falls in picks the ramp.
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Two lowercase hex digits, zero-padded.
#[inline]
#[must_use]
pub fn component_to_hex(byte: u8) -> String {
    format!("{byte:02x}")
}

/// Drop one leading `#`, if there is one.
#[inline]
#[must_use]
pub fn strip_hash_from_hex(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
