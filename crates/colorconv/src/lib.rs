//! # Color Conversion
//!
//! Colorconv converts colors between hexadecimal notation, RGB, HSL, and HSV.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for documentation that also covers Python
integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Disable the `pyffi` feature for documentation of the Rust
interfaces only. "
)]
//!
//!
//! ## 1. Overview
//!
//! Colorconv has two layers:
//!
//!   * The [`convert`] module provides **pure, validated functions** for
//!     parsing hexadecimal strings with [`parse_hex_string`] and for
//!     converting between color models with [`rgb_to_hsl`], [`hsl_to_rgb`],
//!     and [`hsv_to_rgb`]. All of them return a [`ColorParseError`] for
//!     malformed, out-of-range, or not-a-number inputs.
//!   * The **color objects** [`Hex`], [`Rgb`], [`Hsl`], and [`Hsv`] wrap
//!     those functions as small value types. They share the [`BasicColor`]
//!     contract, which covers formatting, conversion to one another, and
//!     dispatch on the representation. [`Color`] closes the set of color
//!     objects as an enumeration.
//!
//! [`ColorParseError`]: error::ColorParseError
//!
//!
//! ## 2. Pure Functions
//!
//! ```
//! # use colorconv::{hsl_to_rgb, hsv_to_rgb, parse_hex_string, rgb_to_hsl};
//! # use colorconv::error::ColorParseError;
//! let [r, g, b] = parse_hex_string("#bada55")?;
//! assert_eq!([r, g, b], [186, 218, 85]);
//!
//! let [h, s, l] = rgb_to_hsl(r.into(), g.into(), b.into())?;
//! assert_eq!([h, s, l], [74.0, 64.0, 59.0]);
//!
//! // Rounding to integer HSL loses precision.
//! assert_eq!(hsl_to_rgb(h, s, l)?, [186, 217, 84]);
//!
//! assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0)?, [0, 0, 255]);
//! assert_eq!(hsl_to_rgb(361.0, 0.0, 0.0), Err(ColorParseError::InvalidRange));
//! # Ok::<(), ColorParseError>(())
//! ```
//!
//!
//! ## 3. Color Objects
//!
//! ```
//! # use colorconv::{BasicColor, ColorFormat, Hex, Hsl, Rgb};
//! let navy = Hex::new("#000080");
//! assert_eq!(navy.format(), ColorFormat::Hex);
//! assert_eq!(navy.to_rgb(), Rgb::new(0, 0, 128));
//! assert_eq!(navy.to_hsl().to_string(), "hsl(240, 100, 25)");
//!
//! let label = navy.to_hsl().dispatch(
//!     |_| "hex",
//!     |_| "rgb",
//!     |hsl| if hsl.l < 50.0 { "dark hsl" } else { "light hsl" },
//!     |_| "hsv",
//! );
//! assert_eq!(label, "dark hsl");
//! ```
//!
//!
//! ## 4. Optional Features
//!
//! Colorconv supports one feature flag:
//!
//!   - **`pyffi`** controls colorconv's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 5. Logging
//!
//! Colorconv reports rejected inputs through the [log](https://docs.rs/log)
//! facade at debug level and traces successful conversions at trace level. It
//! does not install a logger.

/// The floating point type in use.
pub type Float = f64;

pub mod convert;
pub mod error;
mod object;

pub use convert::{hsl_to_rgb, hsv_to_rgb, parse_hex_string, rgb_to_hsl, ColorTuple};
pub use object::{BasicColor, Color, ColorFormat, Hex, Hsl, Hsv, Rgb};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorconv(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert::parse_hex_string, m)?)?;
    m.add_function(wrap_pyfunction!(convert::rgb_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(convert::hsl_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(convert::hsv_to_rgb, m)?)?;

    m.add_class::<ColorFormat>()?;
    m.add_class::<Hex>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Hsv>()?;

    Ok(())
}
