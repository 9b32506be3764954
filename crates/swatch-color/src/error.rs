// SPDX-License-Identifier: MIT
//
// The one error type of swatch-color.
//
// Conversions never return it: they absorb bad input and fall back to the
// target format's default. It surfaces only from the brand constructors,
// from raw-record validation, and from the text codec (unknown format tags,
// unparseable color strings).

use thiserror::Error;

use crate::range::RangeKey;

/// Everything that can go wrong at the engine's boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A number fell outside the interval of its range key (or was not finite).
    #[error("{value} is out of range for {key}")]
    OutOfRange { key: RangeKey, value: f64 },

    /// A string failed the pattern of its range key.
    #[error("{value:?} is not a valid {key}")]
    Malformed { key: RangeKey, value: String },

    /// A format tag that names none of the nine formats.
    #[error("unknown color format `{0}`")]
    UnknownFormat(String),

    /// A color string that matches no known syntax.
    #[error("cannot parse {input:?} as a color")]
    Parse { input: String },
}
