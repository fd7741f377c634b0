use crate::error::ColorParseError;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Parse a 24-bit color in hexadecimal notation.
///
/// The string may start with a single `#`. After removing that prefix, it must
/// have 3 or 6 characters, with the three-character form doubling each digit.
/// Letters may be upper- or lowercase. If successful, this function returns the
/// red, green, and blue coordinates as unsigned bytes.
///
/// The length check comes before the digit check. Hence `"ffff"` fails with
/// [`ColorParseError::InvalidLength`] but `"      "` fails with
/// [`ColorParseError::InvalidChars`].
///
/// # Examples
///
/// ```
/// # use colorconv::{parse_hex_string, error::ColorParseError};
/// assert_eq!(parse_hex_string("#a0c")?, [0xaa, 0x00, 0xcc]);
/// assert_eq!(parse_hex_string("BADA55")?, [0xba, 0xda, 0x55]);
/// assert_eq!(parse_hex_string("#ffff"), Err(ColorParseError::InvalidLength));
/// assert_eq!(parse_hex_string("abcdeg"), Err(ColorParseError::InvalidChars));
/// # Ok::<(), ColorParseError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn parse_hex_string(s: &str) -> Result<[u8; 3], ColorParseError> {
    let s = s.strip_prefix('#').unwrap_or(s);

    let digits: Vec<char> = s.chars().collect();
    let hex: String = match *digits.as_slice() {
        [r, g, b] => [r, r, g, g, b, b].iter().collect(),
        [_, _, _, _, _, _] => digits.iter().collect(),
        _ => return Err(ColorParseError::InvalidLength),
    };

    // u8::from_str_radix() also accepts a leading plus sign.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidChars);
    }

    // All characters are ASCII now, so byte offsets are character offsets.
    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorParseError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorParseError::InvalidLength)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorParseError::InvalidChars)
    }

    let r = parse_coordinate(&hex, 0)?;
    let g = parse_coordinate(&hex, 1)?;
    let b = parse_coordinate(&hex, 2)?;
    Ok([r, g, b])
}

// ====================================================================================================================
