// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with ticks, labels and conversion into scene elements.

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::scale::{format_elapsed_tick, ElapsedScale, ScaleTransform, YearScale};
use crate::scene::{Element, Group, Line, Text, TextAnchor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: String,
    pub label: String,
    pub orientation: Orientation,
    /// Pixel extent of the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(id: impl Into<String>, label: impl Into<String>, orientation: Orientation, range: (f64, f64)) -> Self {
        Self { id: id.into(), label: label.into(), orientation, range, ticks: Vec::new() }
    }

    /// Bottom axis with one tick per selected year.
    pub fn years(scale: &YearScale, cfg: &ChartConfig) -> Self {
        let mut axis = Self::new("x-axis", cfg.labels.x_axis.clone(), Orientation::Bottom, scale.range());
        axis.ticks = scale
            .ticks(cfg.tick_count)
            .into_iter()
            .filter_map(|y| scale.year_to_px(y).map(|offset| Tick { offset, label: y.to_string() }))
            .collect();
        axis
    }

    /// Left axis with `%M:%S` ticks.
    pub fn elapsed(scale: &ElapsedScale, cfg: &ChartConfig) -> Self {
        let mut axis = Self::new("y-axis", cfg.labels.y_axis.clone(), Orientation::Left, scale.range());
        axis.ticks = scale
            .ticks(cfg.tick_count)
            .into_iter()
            .map(|s| Tick { offset: scale.seconds_to_px(s), label: format_elapsed_tick(s) })
            .collect();
        axis
    }

    /// Build the axis group: domain line, tick marks with labels, and the axis title.
    /// `inner` is the (width, height) of the plotted region.
    pub fn to_element(&self, cfg: &ChartConfig, inner: (f64, f64)) -> Element {
        let theme = &cfg.theme;
        let size = cfg.tick_size;
        let (r0, r1) = (self.range.0.min(self.range.1), self.range.0.max(self.range.1));

        let mut group = Group::new().with_id(self.id.clone()).with_class("axis");
        if self.orientation == Orientation::Bottom {
            group = group.translated(0.0, inner.1);
        }

        let domain = match self.orientation {
            Orientation::Bottom => Line { from: Point::new(r0, 0.0), to: Point::new(r1, 0.0), stroke: theme.axis_line, width: 1.0 },
            Orientation::Left => Line { from: Point::new(0.0, r0), to: Point::new(0.0, r1), stroke: theme.axis_line, width: 1.0 },
        };
        group.push(domain);

        for tick in &self.ticks {
            let (mark, label) = match self.orientation {
                Orientation::Bottom => (
                    Line { from: Point::new(tick.offset, 0.0), to: Point::new(tick.offset, size), stroke: theme.tick, width: 1.0 },
                    Text::new(Point::new(tick.offset, size + 3.0 + cfg.font_size), tick.label.clone(), cfg.font_size, theme.tick)
                        .anchored(TextAnchor::Middle),
                ),
                Orientation::Left => (
                    Line { from: Point::new(-size, tick.offset), to: Point::new(0.0, tick.offset), stroke: theme.tick, width: 1.0 },
                    Text::new(Point::new(-(size + 3.0), tick.offset + cfg.font_size * 0.32), tick.label.clone(), cfg.font_size, theme.tick)
                        .anchored(TextAnchor::End),
                ),
            };
            let mut tg = Group::new().with_class("tick");
            tg.push(mark);
            tg.push(label);
            group.push(tg);
        }

        let title = match self.orientation {
            Orientation::Bottom => Text::new(Point::new(inner.0 / 2.0, 45.0), self.label.clone(), cfg.font_size * 1.4, theme.axis_label)
                .with_class("xAxisLabel")
                .anchored(TextAnchor::Middle),
            Orientation::Left => {
                let mut t = Text::new(Point::new(-inner.1 / 2.0, -45.0), self.label.clone(), cfg.font_size * 1.4, theme.axis_label)
                    .with_class("yAxisLabel")
                    .anchored(TextAnchor::Middle);
                t.rotate = -90.0;
                t
            }
        };
        group.push(title);
        Element::Group(group)
    }
}
