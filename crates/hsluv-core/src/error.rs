//! Utility module with the errors of the HSLuv core.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An erroneous hexadecimal color code.
///
/// Hex codes have exactly six hexadecimal digits, two per sRGB coordinate,
/// optionally preceded by a `#`. Letters may be upper or lower case. Parsing
/// fails for malformed hex codes. Formatting fails for coordinates that have no
/// byte value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A hex code with an unexpected number of characters or with non-ASCII
    /// characters. For example, `#00` is missing four hexadecimal digits,
    /// whereas `00💩00` contains an unsuitable character.
    UnexpectedCharacters,

    /// A hex code with a malformed hexadecimal byte. For example, `CD8BG0` has
    /// a malformed third coordinate.
    MalformedHex,

    /// An sRGB coordinate that is not-a-number or infinite and hence cannot be
    /// rounded to a hexadecimal byte. Finite coordinates out of unit range are
    /// clamped instead.
    NonFiniteCoordinate,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedCharacters => {
                f.write_str("hex code should contain exactly six ASCII characters")
            }
            MalformedHex => {
                f.write_str("hex code coordinates should be hexadecimal bytes but are not")
            }
            NonFiniteCoordinate => {
                f.write_str("hex code coordinates should be finite numbers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An impossible gamut query.
///
/// Normalizing HSLuv saturation requires the maximum chroma for the given
/// lightness and hue, which is the shortest non-negative distance from the
/// gray axis to one of the six lines bounding the sRGB gamut in CIELUV's u/v
/// plane. If none of the lines has a non-negative distance, the query has no
/// answer. That does not happen for finite lightness and hue. It does happen
/// for not-a-number inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GamutBoundaryError {
    pub lightness: Float,
    pub hue: Float,
}

impl GamutBoundaryError {
    /// Create a new gamut boundary error.
    pub const fn new(lightness: Float, hue: Float) -> Self {
        Self { lightness, hue }
    }
}

impl std::fmt::Display for GamutBoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "no sRGB gamut boundary for lightness {} and hue {}",
            self.lightness, self.hue
        ))
    }
}

impl std::error::Error for GamutBoundaryError {}

#[cfg(feature = "pyffi")]
impl From<GamutBoundaryError> for PyErr {
    fn from(value: GamutBoundaryError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while converting between HSLuv and hex codes.
#[derive(Clone, Debug, PartialEq)]
pub enum HsluvError {
    /// The hex code is malformed or the color has no hex code.
    Format(ColorFormatError),
    /// The maximum chroma is undefined.
    Gamut(GamutBoundaryError),
}

impl From<ColorFormatError> for HsluvError {
    fn from(value: ColorFormatError) -> Self {
        Self::Format(value)
    }
}

impl From<GamutBoundaryError> for HsluvError {
    fn from(value: GamutBoundaryError) -> Self {
        Self::Gamut(value)
    }
}

impl std::fmt::Display for HsluvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Format(_) => f.write_str("could not convert hex code"),
            Self::Gamut(_) => f.write_str("could not determine maximum chroma"),
        }
    }
}

impl std::error::Error for HsluvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Format(ref error) => Some(error),
            Self::Gamut(ref error) => Some(error),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<HsluvError> for PyErr {
    fn from(value: HsluvError) -> Self {
        let message = match value {
            HsluvError::Format(ref error) => error.to_string(),
            HsluvError::Gamut(ref error) => error.to_string(),
        };
        PyValueError::new_err(format!("{}: {}", value, message))
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, GamutBoundaryError, HsluvError};
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            GamutBoundaryError::new(50.0, f64::NAN).to_string(),
            "no sRGB gamut boundary for lightness 50 and hue NaN"
        );

        let error = HsluvError::from(ColorFormatError::MalformedHex);
        assert_eq!(error.to_string(), "could not convert hex code");
        assert_eq!(
            error.source().map(|e| e.to_string()),
            Some(ColorFormatError::MalformedHex.to_string())
        );
    }
}
