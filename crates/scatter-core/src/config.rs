// File: crates/scatter-core/src/config.rs
// Summary: Immutable layout configuration handed to the chart renderer.

use std::time::Duration;

use crate::geometry::{Point, Rect};
use crate::theme::Theme;

/// Surface width in pixels.
pub const WIDTH: u32 = 900;
/// Surface height in pixels.
pub const HEIGHT: u32 = 500;

/// Space between the surface edges and the plotted region, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn horizontal(&self) -> u32 { self.left + self.right }
    pub const fn vertical(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 70, right: 50, bottom: 80, left: 80 }
    }
}

/// Public location of the cyclist dataset.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Length of the fade in and fade out transitions.
    pub fade: Duration,
    /// Opacity reached once the tooltip is fully shown.
    pub opacity: f64,
    /// Offset from the pointer to the tooltip's top-left corner.
    pub offset: Point,
    pub font_size: f64,
    pub line_height: f64,
    pub padding: f64,
    /// Average glyph advance as a fraction of `font_size`, used to size the box.
    pub char_width: f64,
    pub min_width: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(100),
            opacity: 0.95,
            offset: Point::new(25.0, 0.0),
            font_size: 12.0,
            line_height: 16.0,
            padding: 8.0,
            char_width: 0.55,
            min_width: 120.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    pub radius: f64,
    pub font_size: f64,
    /// Vertical gap added to the radius between two legend rows.
    pub row_gap: f64,
    /// Distance of the legend swatches from the right edge of the plot.
    pub offset_right: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { radius: 4.0, font_size: 14.0, row_gap: 15.0, offset_right: 50.0 }
    }
}

/// A caption rendered as "label" followed by a hyperlink.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribution {
    pub label: String,
    pub text: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub allegation: String,
    pub no_allegation: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Doping Allegations in Professional Cycling".into(),
            x_axis: "Years".into(),
            y_axis: "Time finished (minutes)".into(),
            allegation: "Doping allegations".into(),
            no_allegation: "No doping allegations".into(),
        }
    }
}

/// Everything the renderer needs to lay out one chart. Built once, never mutated
/// by rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub theme: Theme,
    pub marker_radius: f64,
    /// Whole years added on both sides of the x domain.
    pub year_padding: i32,
    /// Approximate number of ticks requested from each scale.
    pub tick_count: usize,
    pub tick_size: f64,
    pub font_size: f64,
    pub title_font_size: f64,
    pub labels: Labels,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
    pub source: Attribution,
    pub author: Attribution,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            theme: Theme::default(),
            marker_radius: 8.0,
            year_padding: 1,
            tick_count: 10,
            tick_size: 6.0,
            font_size: 10.0,
            title_font_size: 24.0,
            labels: Labels::default(),
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
            source: Attribution {
                label: "Data source: ".into(),
                text: "https://raw.githubusercontent.com/freeCodeCamp...".into(),
                href: DATA_URL.into(),
            },
            author: Attribution {
                label: "Created by ".into(),
                text: "DavorJ".into(),
                href: "https://www.linkedin.com/in/davor-jovanovi%C4%87/".into(),
            },
        }
    }
}

impl ChartConfig {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn inner_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(self.margins.horizontal()))
    }

    pub fn inner_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(self.margins.vertical()))
    }

    /// Plotted region in surface coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(
            f64::from(self.margins.left),
            f64::from(self.margins.top),
            self.inner_width(),
            self.inner_height(),
        )
    }
}
