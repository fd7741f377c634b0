//! Utility module with colorconv's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// The name prefixed to every error message.
const PACKAGE: &str = "colorconv";

/// An error while parsing or converting a color.
///
/// Every fallible function in this crate returns this error. The variant
/// doubles as the error's kind, while [`ColorParseError::message`] and the
/// [`Display`](std::fmt::Display) implementation provide the human-readable
/// message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorParseError {
    /// A hexadecimal color string that does not have 3 or 6 characters after
    /// removing the optional leading `#`. For example, `#ffff` has one
    /// character too many.
    InvalidLength,

    /// A hexadecimal color string with the right length but at least one
    /// character that is not a hexadecimal digit. For example, `abcdeg` ends
    /// in `g`.
    InvalidChars,

    /// A numeric component outside the bounds of its representation, such as
    /// a hue of 361 or a byte of 255.001.
    InvalidRange,

    /// A string that could not be parsed as a number. No conversion in this
    /// crate currently produces this error.
    StringConv,

    /// A numeric component that is not-a-number.
    NaN,
}

impl ColorParseError {
    /// Get the human-readable message for this error.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidLength => "Invalid length: expected 3 or 6",
            Self::InvalidChars => "Invalid characters: only hexadecimal character allowed.",
            Self::InvalidRange => "Invalid Range: value not within allowed range.",
            Self::StringConv => "String convert: failed to parse string to number.",
            Self::NaN => "NaN: encountered a NaN value.",
        }
    }
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", PACKAGE, self.message())
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(feature = "pyffi")]
impl From<ColorParseError> for PyErr {
    fn from(value: ColorParseError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::ColorParseError;

    #[test]
    fn test_display() {
        let cases = [
            (
                ColorParseError::InvalidLength,
                "[colorconv] Invalid length: expected 3 or 6",
            ),
            (
                ColorParseError::InvalidChars,
                "[colorconv] Invalid characters: only hexadecimal character allowed.",
            ),
            (
                ColorParseError::InvalidRange,
                "[colorconv] Invalid Range: value not within allowed range.",
            ),
            (
                ColorParseError::StringConv,
                "[colorconv] String convert: failed to parse string to number.",
            ),
            (ColorParseError::NaN, "[colorconv] NaN: encountered a NaN value."),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected, "displaying {:?}", error);
            assert!(
                expected.ends_with(error.message()),
                "message of {:?} is part of its display",
                error
            );
        }
    }
}
