use crate::Float;

/// A named color with its hexadecimal, RGB, and HSL representations.
pub(crate) struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: [u8; 3],
    pub hsl: [Float; 3],
}

impl NamedColor {
    /// Get the RGB coordinates expected when converting this color's HSL
    /// coordinates. Silver comes back one less in each channel.
    pub fn rgb_from_hsl(&self) -> [u8; 3] {
        if self.name == "Silver" {
            self.rgb.map(|c| c - 1)
        } else {
            self.rgb
        }
    }

    /// Get the hexadecimal string expected when converting this color's HSL
    /// coordinates.
    pub fn hex_from_hsl(&self) -> String {
        let [r, g, b] = self.rgb_from_hsl();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

macro_rules! named {
    ($name:literal, $hex:literal, [$r:expr, $g:expr, $b:expr], [$h:expr, $s:expr, $l:expr]) => {
        NamedColor {
            name: $name,
            hex: $hex,
            rgb: [$r, $g, $b],
            hsl: [$h as Float, $s as Float, $l as Float],
        }
    };
}

/// The 16 basic colors of HTML 4.01.
pub(crate) const COLOR_TABLE: [NamedColor; 16] = [
    named!("Black", "#000000", [0, 0, 0], [0, 0, 0]),
    named!("White", "#FFFFFF", [255, 255, 255], [0, 0, 100]),
    named!("Red", "#FF0000", [255, 0, 0], [0, 100, 50]),
    named!("Lime", "#00FF00", [0, 255, 0], [120, 100, 50]),
    named!("Blue", "#0000FF", [0, 0, 255], [240, 100, 50]),
    named!("Yellow", "#FFFF00", [255, 255, 0], [60, 100, 50]),
    named!("Cyan", "#00FFFF", [0, 255, 255], [180, 100, 50]),
    named!("Magenta", "#FF00FF", [255, 0, 255], [300, 100, 50]),
    named!("Silver", "#C0C0C0", [192, 192, 192], [0, 0, 75]),
    named!("Gray", "#808080", [128, 128, 128], [0, 0, 50]),
    named!("Maroon", "#800000", [128, 0, 0], [0, 100, 25]),
    named!("Olive", "#808000", [128, 128, 0], [60, 100, 25]),
    named!("Green", "#008000", [0, 128, 0], [120, 100, 25]),
    named!("Purple", "#800080", [128, 0, 128], [300, 100, 25]),
    named!("Teal", "#008080", [0, 128, 128], [180, 100, 25]),
    named!("Navy", "#000080", [0, 0, 128], [240, 100, 25]),
];
