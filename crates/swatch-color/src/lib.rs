//! # swatch-color — Color Space Conversion and Validation Engine
//!
//! Nine color formats (CMYK, Hex, HSL, HSV, LAB, RGB, SL, SV, XYZ), every
//! component a range-checked newtype, and a hub of pure conversions
//! between them. Bad input never panics and never escapes as an error from
//! a conversion: it is logged and answered with the target format's
//! default.
//!
//! # Architecture
//!
//! ```text
//! "hsl(32, 100%, 50%)"
//!     │
//!     ▼
//! parse.rs:     color string → RawColor (shape only)
//!     │
//!     ▼
//! validate.rs:  RawColor → Color (every field branded by range.rs)
//!     │
//!     ▼
//! dispatch.rs:  route to a hub (HSL / RGB) and out to the target format
//!     │
//!     ▼
//! convert.rs:   pairwise hops; outputs re-branded, failures → defaults.rs
//! ```
//!
//! # Hubs
//!
//! HSL, RGB and XYZ. CMYK and Hex hang off RGB, HSV and the hue-less SL/SV
//! projections off HSL, LAB off XYZ. All math is `f64`; 8-bit-oriented
//! outputs round to whole numbers, XYZ to three decimals, LAB to two.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Saturation/lightness/value names are inherently similar.
#![allow(clippy::similar_names)]

pub mod convert;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod math;
pub mod model;
pub mod parse;
pub mod range;
pub mod raw;
pub mod validate;

#[cfg(test)]
mod testing;

pub use defaults::default_for;
pub use dispatch::{convert, hsl_to, rgb_to, to_hsl, to_hsv, to_rgb};
pub use error::ColorError;
pub use math::{component_to_hex, strip_hash_from_hex};
pub use model::{Cmyk, Color, Format, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
pub use raw::RawColor;
