use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyNotImplementedError, prelude::*};

use crate::convert::{hsl_to_rgb, parse_hex_string, rgb_to_hsl};
use crate::error::ColorParseError;
use crate::Float;

// ====================================================================================================================
// Color Format
// ====================================================================================================================

/// The representation used by a color object.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorconv")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorFormat {
    /// Get this format's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }

    /// Convert this color format to its name. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> &'static str {
        self.name()
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
// The Shared Contract
// ====================================================================================================================

/// The operations shared by all color objects.
///
/// Every color object can be displayed, converted to every other color
/// object, and dispatched upon without inspecting its type at runtime.
///
/// Color objects assume that their fields are valid, since validation happens
/// when parsing strings or converting between representations. Conversions
/// that require computation hence do not return a `Result`. If a field was set
/// to an invalid value after construction, they panic instead of returning a
/// meaningless color. Code that cannot rule out invalid fields should use the
/// fallible [`TryFrom`] implementations, e.g., [`Rgb as
/// TryFrom<&Hsl>`](struct.Rgb.html#impl-TryFrom%3C%26Hsl%3E-for-Rgb).
///
/// There is no conversion from RGB to HSV. Hence [`BasicColor::to_hsv`] panics
/// for all color objects but [`Hsv`], which in turn implements only that one
/// conversion. Displaying or dispatching on an [`Hsv`] panics as well.
pub trait BasicColor: std::fmt::Display {
    /// Get this color object's representation.
    fn format(&self) -> ColorFormat;

    /// Convert to a hexadecimal color.
    fn to_hex(&self) -> Hex;

    /// Convert to an RGB color.
    fn to_rgb(&self) -> Rgb;

    /// Convert to an HSL color.
    fn to_hsl(&self) -> Hsl;

    /// Convert to an HSV color.
    fn to_hsv(&self) -> Hsv;

    /// Wrap a copy of this color object as a [`Color`].
    fn to_color(&self) -> Color;

    /// Invoke the handler for this color object's representation.
    ///
    /// This method takes one handler per representation and invokes exactly
    /// one of them, passing this color object.
    ///
    /// # Panics
    ///
    /// This method panics for [`Hsv`], which supports no operation but
    /// conversion to itself. The HSV handler is never invoked.
    ///
    /// ```
    /// # use colorconv::{BasicColor, Hex, Rgb};
    /// let describe = |c: &dyn BasicColor| {
    ///     c.to_color().dispatch(
    ///         |hex| format!("hexadecimal {}", hex),
    ///         |rgb| format!("red {}", rgb.r),
    ///         |hsl| format!("hue {}", hsl.h),
    ///         |_| "who knows".to_string(),
    ///     )
    /// };
    ///
    /// assert_eq!(describe(&Rgb::new(42, 0, 0)), "red 42");
    /// assert_eq!(describe(&Rgb::new(42, 0, 0).to_hsl()), "hue 0");
    /// assert_eq!(describe(&Hex::new("#abc")), "hexadecimal #AABBCC");
    /// ```
    fn dispatch<T, H, R, L, V>(&self, on_hex: H, on_rgb: R, on_hsl: L, on_hsv: V) -> T
    where
        Self: Sized,
        H: FnOnce(&Hex) -> T,
        R: FnOnce(&Rgb) -> T,
        L: FnOnce(&Hsl) -> T,
        V: FnOnce(&Hsv) -> T,
    {
        self.to_color().dispatch(on_hex, on_rgb, on_hsl, on_hsv)
    }
}

/// Convert 24-bit coordinates to HSL.
///
/// # Panics
///
/// This function panics if the conversion fails, which is impossible for
/// byte-sized coordinates.
fn hsl_from_24bit(r: u8, g: u8, b: u8) -> Hsl {
    match rgb_to_hsl(Float::from(r), Float::from(g), Float::from(b)) {
        Ok([h, s, l]) => Hsl::new(h, s, l),
        Err(error) => unreachable!("24-bit coordinates {:?} are invalid: {}", [r, g, b], error),
    }
}

/// Panic because the conversion to or from HSV is not supported.
#[cold]
fn unsupported_hsv(from: ColorFormat, to: ColorFormat) -> ! {
    unimplemented!("conversion from {} to {} is not supported", from, to)
}

/// Panic because dispatching on HSV colors is not supported.
#[cold]
fn unsupported_hsv_dispatch() -> ! {
    unimplemented!("dispatch on {} colors is not supported", ColorFormat::Hsv)
}

// ====================================================================================================================
// Hex
// ====================================================================================================================

/// A 24-bit color written in hexadecimal notation.
///
/// A hexadecimal color stores three bytes, just like [`Rgb`], but displays
/// them in hashed hexadecimal notation with uppercase digits. The default is
/// black.
///
/// # Examples
///
/// [`Hex::new`] parses a string and panics if it is malformed, whereas
/// [`Hex as FromStr`](struct.Hex.html#impl-FromStr-for-Hex) returns an
/// error.
///
/// ```
/// # use colorconv::{BasicColor, Hex, Rgb};
/// # use colorconv::error::ColorParseError;
/// let sand = Hex::new("#eedcad");
/// assert_eq!(sand.to_string(), "#EEDCAD");
/// assert_eq!(sand.to_rgb(), Rgb::new(0xee, 0xdc, 0xad));
///
/// let oops = "#eedcaX".parse::<Hex>();
/// assert_eq!(oops, Err(ColorParseError::InvalidChars));
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, get_all, set_all, module = "colorconv")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hex {
    /// Create a new hexadecimal color by parsing the string. <i
    /// class=python-only>Python only!</i>
    ///
    /// Without a string, this constructor creates black. A malformed string
    /// raises a `ValueError`.
    #[new]
    #[pyo3(signature = (hex = None))]
    pub fn py_new(hex: Option<&str>) -> Result<Self, ColorParseError> {
        hex.map_or_else(|| Ok(Self::default()), Self::from_str)
    }

    /// Create a new hexadecimal color from its coordinates.
    #[staticmethod]
    pub const fn from_values(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get this color's format. <i class=python-only>Python only!</i>
    #[getter(format)]
    pub fn py_format(&self) -> ColorFormat {
        ColorFormat::Hex
    }

    /// Return this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> Hex {
        *self
    }

    /// Convert this color to RGB. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Convert this color to HSL. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// Fail to convert this color to HSV. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> PyResult<Hsv> {
        Err(PyNotImplementedError::new_err("conversion from hex to hsv"))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Hex({})", self)
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Hex {
    /// Create a new hexadecimal color from its coordinates.
    pub const fn from_values(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Hex {
    /// Create a new hexadecimal color by parsing the string.
    ///
    /// The string may start with a `#` and must have either 3 or 6
    /// hexadecimal digits.
    ///
    /// # Panics
    ///
    /// This method panics if the string is malformed. Use [`Hex as
    /// FromStr`](struct.Hex.html#impl-FromStr-for-Hex) or
    /// [`parse_hex_string`] to recover from malformed strings.
    pub fn new(hex: &str) -> Self {
        match Self::from_str(hex) {
            Ok(color) => color,
            Err(error) => panic!("unable to parse {:?} as hex color: {}", hex, error),
        }
    }
}

impl FromStr for Hex {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse_hex_string(s)?;
        Ok(Self::from_values(r, g, b))
    }
}

impl TryFrom<&str> for Hex {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Hex::from_str(value)
    }
}

impl From<[u8; 3]> for Hex {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::from_values(r, g, b)
    }
}

impl From<Hex> for [u8; 3] {
    fn from(value: Hex) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self::from_values(value.r, value.g, value.b)
    }
}

impl TryFrom<&Hsl> for Hex {
    type Error = ColorParseError;

    /// Try to convert the HSL color to a hexadecimal color.
    ///
    /// This method fails if the HSL color's fields are out of range or
    /// not-a-number.
    fn try_from(value: &Hsl) -> Result<Self, Self::Error> {
        Rgb::try_from(value).map(Hex::from)
    }
}

impl BasicColor for Hex {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hex
    }

    fn to_hex(&self) -> Hex {
        *self
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_hsv(&self) -> Hsv {
        unsupported_hsv(ColorFormat::Hex, ColorFormat::Hsv)
    }

    fn to_color(&self) -> Color {
        Color::Hex(*self)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// # Examples
///
/// ```
/// # use colorconv::{BasicColor, Hsl, Rgb};
/// let teal = Rgb::new(0, 128, 128);
/// assert_eq!(teal.to_string(), "rgb(0, 128, 128)");
/// assert_eq!(teal.to_hex().to_string(), "#008080");
/// assert_eq!(teal.to_hsl(), Hsl::new(180.0, 100.0, 25.0));
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, get_all, set_all, module = "colorconv")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (r = 0, g = 0, b = 0))]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get this color's format. <i class=python-only>Python only!</i>
    #[getter(format)]
    pub fn py_format(&self) -> ColorFormat {
        ColorFormat::Rgb
    }

    /// Convert this color to hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Return this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> Rgb {
        *self
    }

    /// Convert this color to HSL. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// Fail to convert this color to HSV. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> PyResult<Hsv> {
        Err(PyNotImplementedError::new_err("conversion from rgb to hsv"))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        Self::new(value.r, value.g, value.b)
    }
}

impl TryFrom<&Hsl> for Rgb {
    type Error = ColorParseError;

    /// Try to convert the HSL color to an RGB color.
    ///
    /// This method fails if the HSL color's fields are out of range or
    /// not-a-number.
    fn try_from(value: &Hsl) -> Result<Self, Self::Error> {
        hsl_to_rgb(value.h, value.s, value.l).map(Rgb::from)
    }
}

impl BasicColor for Rgb {
    fn format(&self) -> ColorFormat {
        ColorFormat::Rgb
    }

    fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_hsv(&self) -> Hsv {
        unsupported_hsv(ColorFormat::Rgb, ColorFormat::Hsv)
    }

    fn to_color(&self) -> Color {
        Color::Rgb(*self)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// An HSL color.
///
/// The hue ranges `0..=360`, saturation and lightness range `0..=100`. They
/// need not be integral, though conversion from RGB always produces integers.
///
/// # Examples
///
/// Converting an HSL color back to RGB may be off by one or more. Notably,
/// silver `#C0C0C0` comes back as `#BFBFBF`.
///
/// ```
/// # use colorconv::{BasicColor, Hex, Hsl, Rgb};
/// let silver = Hex::new("#C0C0C0").to_hsl();
/// assert_eq!(silver.to_string(), "hsl(0, 0, 75)");
/// assert_eq!(silver.to_hex().to_string(), "#BFBFBF");
/// assert_eq!(silver.to_rgb(), Rgb::new(191, 191, 191));
/// ```
///
/// Since the fields are public, they may be set to invalid values, which makes
/// [`BasicColor::to_rgb`] and [`BasicColor::to_hex`] panic. [`Rgb as
/// TryFrom<&Hsl>`](struct.Rgb.html#impl-TryFrom%3C%26Hsl%3E-for-Rgb)
/// reports the error instead.
///
/// ```
/// # use colorconv::{Hsl, Rgb};
/// # use colorconv::error::ColorParseError;
/// let mut color = Hsl::new(120.0, 100.0, 50.0);
/// color.h = 400.0;
/// assert_eq!(Rgb::try_from(&color), Err(ColorParseError::InvalidRange));
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, get_all, set_all, module = "colorconv")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hsl {
    /// Create a new HSL color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (h = 0.0, s = 0.0, l = 0.0))]
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Get this color's format. <i class=python-only>Python only!</i>
    #[getter(format)]
    pub fn py_format(&self) -> ColorFormat {
        ColorFormat::Hsl
    }

    /// Convert this color to hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method raises a `ValueError` if the coordinates are invalid.
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> Result<Hex, ColorParseError> {
        Hex::try_from(self)
    }

    /// Convert this color to RGB. <i class=python-only>Python only!</i>
    ///
    /// This method raises a `ValueError` if the coordinates are invalid.
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> Result<Rgb, ColorParseError> {
        Rgb::try_from(self)
    }

    /// Return this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> Hsl {
        *self
    }

    /// Fail to convert this color to HSV. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> PyResult<Hsv> {
        Err(PyNotImplementedError::new_err("conversion from hsl to hsv"))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Hsl({}, {}, {})", self.h, self.s, self.l)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Hsl {
    /// Create a new HSL color from its coordinates.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }
}

impl From<&Rgb> for Hsl {
    fn from(value: &Rgb) -> Self {
        hsl_from_24bit(value.r, value.g, value.b)
    }
}

impl From<&Hex> for Hsl {
    fn from(value: &Hex) -> Self {
        hsl_from_24bit(value.r, value.g, value.b)
    }
}

impl BasicColor for Hsl {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hsl
    }

    /// # Panics
    ///
    /// This method panics if this color's coordinates are invalid.
    fn to_hex(&self) -> Hex {
        Hex::from(self.to_rgb())
    }

    /// # Panics
    ///
    /// This method panics if this color's coordinates are invalid.
    fn to_rgb(&self) -> Rgb {
        match Rgb::try_from(self) {
            Ok(color) => color,
            Err(error) => panic!("{} has invalid coordinates: {}", self, error),
        }
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_hsv(&self) -> Hsv {
        unsupported_hsv(ColorFormat::Hsl, ColorFormat::Hsv)
    }

    fn to_color(&self) -> Color {
        Color::Hsl(*self)
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}, {})", self.h, self.s, self.l)
    }
}

// ====================================================================================================================
// Hsv
// ====================================================================================================================

/// An HSV color.
///
/// This type is a placeholder. It can be created and converted to itself, but
/// all other operations, including formatting, panic. Use [`hsv_to_rgb`] to
/// convert HSV coordinates to RGB.
///
/// [`hsv_to_rgb`]: crate::hsv_to_rgb
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, get_all, set_all, module = "colorconv")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hsv {
    /// Create a new HSV color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (h = 0.0, s = 0.0, v = 0.0))]
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }

    /// Get this color's format. <i class=python-only>Python only!</i>
    #[getter(format)]
    pub fn py_format(&self) -> ColorFormat {
        ColorFormat::Hsv
    }

    /// Fail to convert this color to hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> PyResult<Hex> {
        Err(PyNotImplementedError::new_err("conversion from hsv to hex"))
    }

    /// Fail to convert this color to RGB. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> PyResult<Rgb> {
        Err(PyNotImplementedError::new_err("conversion from hsv to rgb"))
    }

    /// Fail to convert this color to HSL. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> PyResult<Hsl> {
        Err(PyNotImplementedError::new_err("conversion from hsv to hsl"))
    }

    /// Return this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> Hsv {
        *self
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Hsv({}, {}, {})", self.h, self.s, self.v)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Hsv {
    /// Create a new HSV color from its coordinates.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }
}

impl BasicColor for Hsv {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hsv
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_hex(&self) -> Hex {
        unsupported_hsv(ColorFormat::Hsv, ColorFormat::Hex)
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_rgb(&self) -> Rgb {
        unsupported_hsv(ColorFormat::Hsv, ColorFormat::Rgb)
    }

    /// # Panics
    ///
    /// This method always panics.
    fn to_hsl(&self) -> Hsl {
        unsupported_hsv(ColorFormat::Hsv, ColorFormat::Hsl)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }

    fn to_color(&self) -> Color {
        Color::Hsv(*self)
    }

    /// # Panics
    ///
    /// This method always panics.
    fn dispatch<T, H, R, L, V>(&self, _: H, _: R, _: L, _: V) -> T
    where
        Self: Sized,
        H: FnOnce(&Hex) -> T,
        R: FnOnce(&Rgb) -> T,
        L: FnOnce(&Hsl) -> T,
        V: FnOnce(&Hsv) -> T,
    {
        unsupported_hsv_dispatch()
    }
}

impl std::fmt::Display for Hsv {
    /// # Panics
    ///
    /// This method always panics.
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unimplemented!("formatting {} colors is not supported", ColorFormat::Hsv)
    }
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// A color object in any of the supported representations. <i
/// class=rust-only>Rust only!</i>
///
/// This enumeration closes the set of color objects, so that code can
/// exhaustively match on the representation. [`Color::dispatch`] does the same
/// with one handler per representation, though it refuses HSV colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
}

impl Color {
    /// Invoke the handler for this color's representation.
    ///
    /// The HSV handler keeps the set of handlers complete but is never
    /// invoked.
    ///
    /// # Panics
    ///
    /// This method panics for HSV colors.
    ///
    /// ```
    /// # use colorconv::{Color, Hex, Hsl};
    /// let colors = [Color::from(Hsl::new(0.0, 100.0, 50.0)), Color::from(Hex::default())];
    /// let names: Vec<&str> = colors
    ///     .iter()
    ///     .map(|c| c.dispatch(|_| "hex", |_| "rgb", |_| "hsl", |_| "hsv"))
    ///     .collect();
    /// assert_eq!(names, ["hsl", "hex"]);
    /// ```
    pub fn dispatch<T, H, R, L, V>(&self, on_hex: H, on_rgb: R, on_hsl: L, _on_hsv: V) -> T
    where
        H: FnOnce(&Hex) -> T,
        R: FnOnce(&Rgb) -> T,
        L: FnOnce(&Hsl) -> T,
        V: FnOnce(&Hsv) -> T,
    {
        match self {
            Self::Hex(c) => on_hex(c),
            Self::Rgb(c) => on_rgb(c),
            Self::Hsl(c) => on_hsl(c),
            Self::Hsv(_) => unsupported_hsv_dispatch(),
        }
    }

    fn as_basic(&self) -> &dyn BasicColor {
        match self {
            Self::Hex(c) => c,
            Self::Rgb(c) => c,
            Self::Hsl(c) => c,
            Self::Hsv(c) => c,
        }
    }
}

impl BasicColor for Color {
    fn format(&self) -> ColorFormat {
        self.as_basic().format()
    }

    /// # Panics
    ///
    /// This method panics for invalid HSL coordinates and for HSV colors.
    fn to_hex(&self) -> Hex {
        self.as_basic().to_hex()
    }

    /// # Panics
    ///
    /// This method panics for invalid HSL coordinates and for HSV colors.
    fn to_rgb(&self) -> Rgb {
        self.as_basic().to_rgb()
    }

    /// # Panics
    ///
    /// This method panics for HSV colors.
    fn to_hsl(&self) -> Hsl {
        self.as_basic().to_hsl()
    }

    /// # Panics
    ///
    /// This method panics for all but HSV colors.
    fn to_hsv(&self) -> Hsv {
        self.as_basic().to_hsv()
    }

    fn to_color(&self) -> Color {
        *self
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_basic(), f)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Self::Hsv(value)
    }
}

// ====================================================================================================================
