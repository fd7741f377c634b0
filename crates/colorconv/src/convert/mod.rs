//! Validated conversion between color representations.
//!
//! This module provides the pure functions underlying the color objects:
//! [`parse_hex_string`] turns hashed hexadecimal notation into 24-bit
//! coordinates, whereas [`rgb_to_hsl`], [`hsl_to_rgb`], and [`hsv_to_rgb`]
//! translate between color models. Each function validates its inputs and
//! returns a [`ColorParseError`](crate::error::ColorParseError) instead of
//! producing an out-of-range or not-a-number result. The validators are public
//! as well, so that applications can check components up front.

mod conversion;
mod string;
mod validate;

#[cfg(test)]
mod test_util;

use crate::Float;

/// Three color components.
///
/// The meaning of the components depends on context. For RGB, they are the
/// red, green, and blue channels `0..=255`. For HSL, they are the hue
/// `0..=360` as well as saturation and lightness `0..=100`.
pub type ColorTuple = [Float; 3];

pub use conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl};
pub use string::parse_hex_string;
pub use validate::{
    validate_8bit, validate_all, validate_hue, validate_nan, validate_percent, validate_range,
    Validator,
};

#[cfg(test)]
pub(crate) use test_util::COLOR_TABLE;
