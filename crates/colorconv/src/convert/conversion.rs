use super::validate::{validate_8bit, validate_all, validate_hue, validate_nan, validate_percent};
use super::{ColorTuple, Validator};
use crate::error::ColorParseError;
use crate::Float;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Convert the given RGB coordinates to HSL.
///
/// The coordinates must not be not-a-number and must range `0..=255`. The
/// result has hue `0..=360` as well as saturation and lightness `0..=100`,
/// each rounded to the nearest integer. Since the hue is rounded, a color just
/// shy of pure red may come out with hue 360.
///
/// # Examples
///
/// ```
/// # use colorconv::{rgb_to_hsl, error::ColorParseError};
/// assert_eq!(rgb_to_hsl(255.0, 0.0, 0.0)?, [0.0, 100.0, 50.0]);
/// assert_eq!(rgb_to_hsl(192.0, 192.0, 192.0)?, [0.0, 0.0, 75.0]);
/// assert_eq!(rgb_to_hsl(0.0, 0.0, 256.0), Err(ColorParseError::InvalidRange));
/// assert_eq!(rgb_to_hsl(0.0, f64::NAN, 256.0), Err(ColorParseError::NaN));
/// # Ok::<(), ColorParseError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsl(r: Float, g: Float, b: Float) -> Result<ColorTuple, ColorParseError> {
    // https://www.rapidtables.com/convert/color/rgb-to-hsl.html
    let rgb = [r, g, b];
    let checks: [(Validator, &[Float]); 2] = [(validate_nan, &rgb), (validate_8bit, &rgb)];
    validate_all(&checks)?;

    let [r, g, b] = rgb.map(|c| c / 255.0);

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let l = (c_max + c_min) / 2.0;
    #[allow(clippy::suboptimal_flops)]
    let s = if delta == 0.0 && r == g && g == b {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let mut h = if delta == 0.0 {
        0.0
    } else if c_max == r {
        ((g - b) / delta) % 6.0
    } else if c_max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    let hsl = [h.round(), (s * 100.0).round(), (l * 100.0).round()];
    log::trace!("converted rgb{:?} to hsl{:?}", rgb, hsl);
    Ok(hsl)
}

/// Distribute chroma and the intermediate value across the three channels.
///
/// The hue must range `0..360`. Each 60° sector of the color wheel assigns the
/// chroma to one channel, the intermediate value to another, and zero to the
/// third.
fn hue_sector(h: Float, c: Float, x: Float) -> [Float; 3] {
    if h < 60.0 {
        [c, x, 0.0]
    } else if h < 120.0 {
        [x, c, 0.0]
    } else if h < 180.0 {
        [0.0, c, x]
    } else if h < 240.0 {
        [0.0, x, c]
    } else if h < 300.0 {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    }
}

/// Offset the channels by the lightness match and scale them to bytes.
#[inline]
fn to_24bit(channels: [Float; 3], m: Float) -> [u8; 3] {
    channels.map(|c| ((c + m) * 255.0).round() as u8)
}

/// Convert the given HSL coordinates to RGB.
///
/// The hue must range `0..=360`, with 360 denoting the same hue as 0, and the
/// saturation and lightness must range `0..=100`. None of them may be
/// not-a-number. The result is rounded to the nearest byte.
///
/// Converting from RGB to HSL and back need not produce the original color,
/// since HSL coordinates are rounded to integers. Notably, silver
/// `#C0C0C0` becomes `hsl(0, 0, 75)`, which converts back to `#BFBFBF`.
///
/// # Examples
///
/// ```
/// # use colorconv::{hsl_to_rgb, error::ColorParseError};
/// assert_eq!(hsl_to_rgb(120.0, 100.0, 25.0)?, [0, 128, 0]);
/// assert_eq!(hsl_to_rgb(0.0, 0.0, 75.0)?, [191, 191, 191]);
/// assert_eq!(hsl_to_rgb(361.0, 0.0, 0.0), Err(ColorParseError::InvalidRange));
/// # Ok::<(), ColorParseError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_rgb(h: Float, s: Float, l: Float) -> Result<[u8; 3], ColorParseError> {
    // https://www.rapidtables.com/convert/color/hsl-to-rgb.html
    let all = [h, s, l];
    let hue = [h];
    let percent = [s, l];
    let checks: [(Validator, &[Float]); 3] = [
        (validate_nan, &all),
        (validate_hue, &hue),
        (validate_percent, &percent),
    ];
    validate_all(&checks)?;

    let h = if h == 360.0 { 0.0 } else { h };
    let s = s / 100.0;
    let l = l / 100.0;

    #[allow(clippy::suboptimal_flops)]
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let rgb = to_24bit(hue_sector(h, c, x), m);
    log::trace!("converted hsl{:?} to rgb{:?}", all, rgb);
    Ok(rgb)
}

/// Convert the given HSV coordinates to RGB.
///
/// The hue must range `0..=360`, with 360 denoting the same hue as 0, and the
/// saturation and value must range `0..=100`. None of them may be
/// not-a-number. The result is rounded to the nearest byte. There is no
/// conversion in the opposite direction.
///
/// # Examples
///
/// ```
/// # use colorconv::{hsv_to_rgb, error::ColorParseError};
/// assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0)?, [255, 0, 0]);
/// assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0)?, [0, 255, 0]);
/// # Ok::<(), ColorParseError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsv_to_rgb(h: Float, s: Float, v: Float) -> Result<[u8; 3], ColorParseError> {
    // https://www.rapidtables.com/convert/color/hsv-to-rgb.html
    let all = [h, s, v];
    let hue = [h];
    let percent = [s, v];
    let checks: [(Validator, &[Float]); 3] = [
        (validate_nan, &all),
        (validate_hue, &hue),
        (validate_percent, &percent),
    ];
    validate_all(&checks)?;

    let h = if h == 360.0 { 0.0 } else { h };
    let s = s / 100.0;
    let v = v / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let rgb = to_24bit(hue_sector(h, c, x), m);
    log::trace!("converted hsv{:?} to rgb{:?}", all, rgb);
    Ok(rgb)
}

// ====================================================================================================================
