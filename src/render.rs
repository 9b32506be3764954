// SPDX-License-Identifier: MIT
//
// Truecolor preview.
//
// Pure functions that write SGR sequences to any `impl Write`. A swatch is
// a short label on a 24-bit background, in black or white text depending on
// which one contrasts more with the background.

use std::io::{self, Write};

use swatch_color::Rgb;
use swatch_color::math::linearize;

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Set a 24-bit foreground color (SGR 38;2).
pub fn fg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    let [r, g, b] = rgb.bytes();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set a 24-bit background color (SGR 48;2).
pub fn bg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    let [r, g, b] = rgb.bytes();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Contrast ────────────────────────────────────────────────────────────────

/// WCAG 2.1 relative luminance, `[0, 1]`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.bytes().map(|c| linearize(f64::from(c) / 255.0));
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio, `[1, 21]`, symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever reads better on `background`.
#[must_use]
pub fn label_color(background: Rgb) -> Rgb {
    let black = Rgb::from_bytes([0, 0, 0]);
    let white = Rgb::from_bytes([255, 255, 255]);
    if contrast_ratio(black, background) >= contrast_ratio(white, background) {
        black
    } else {
        white
    }
}

// ─── Swatch ──────────────────────────────────────────────────────────────────

/// `label`, padded by one space each side, on a `rgb` background.
pub fn swatch(w: &mut impl Write, rgb: Rgb, label: &str) -> io::Result<()> {
    bg(w, rgb)?;
    fg(w, label_color(rgb))?;
    write!(w, " {label} ")?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
