// File: crates/scatter-core/src/theme.rs
// Summary: Colors and light/dark theming for the scatter plot.

use std::fmt;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
    pub marker_stroke: Color,
    /// Marker fill for rides with a doping allegation.
    pub allegation: Color,
    /// Marker fill for rides without an allegation.
    pub no_allegation: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub caption: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::from_rgb(20, 20, 30),
            tick: Color::from_rgb(60, 60, 70),
            title: Color::from_rgb(20, 20, 30),
            marker_stroke: Color::BLACK,
            allegation: Color::from_rgb(0xBD, 0x2D, 0x28),
            no_allegation: Color::from_rgb(0xE3, 0xBA, 0x22),
            tooltip_background: Color::from_argb(235, 255, 255, 224),
            tooltip_text: Color::from_rgb(20, 20, 30),
            caption: Color::from_rgb(60, 60, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            tick: Color::from_rgb(150, 150, 160),
            title: Color::from_rgb(235, 235, 245),
            // Marker outlines stay black on every theme.
            marker_stroke: Color::BLACK,
            allegation: Color::from_rgb(0xBD, 0x2D, 0x28),
            no_allegation: Color::from_rgb(0xE3, 0xBA, 0x22),
            tooltip_background: Color::from_argb(235, 40, 40, 45),
            tooltip_text: Color::from_rgb(235, 235, 245),
            caption: Color::from_rgb(150, 150, 160),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
