// File: crates/scatter-core/src/legend.rs
// Summary: Two-entry legend (allegation / no allegation) stacked beside the plot.

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::scene::{Circle, Element, Group, Text};
use crate::theme::Color;

/// Marker category, decided only by whether a ride carries an allegation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Allegation,
    NoAllegation,
}

impl Category {
    pub fn of(doping: &str) -> Self {
        if doping.is_empty() { Category::NoAllegation } else { Category::Allegation }
    }

    pub fn color(&self, cfg: &ChartConfig) -> Color {
        match self {
            Category::Allegation => cfg.theme.allegation,
            Category::NoAllegation => cfg.theme.no_allegation,
        }
    }

    pub fn label<'a>(&self, cfg: &'a ChartConfig) -> &'a str {
        match self {
            Category::Allegation => &cfg.labels.allegation,
            Category::NoAllegation => &cfg.labels.no_allegation,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub label: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: [LegendEntry; 2],
    /// Center of the first swatch, in surface coordinates.
    pub origin: Point,
}

impl Legend {
    pub fn new(cfg: &ChartConfig) -> Self {
        let entry = |category: Category| LegendEntry {
            category,
            label: category.label(cfg).to_owned(),
            color: category.color(cfg),
        };
        Self {
            entries: [entry(Category::Allegation), entry(Category::NoAllegation)],
            origin: Point::new(cfg.inner_width() - cfg.legend.offset_right, cfg.inner_height()),
        }
    }

    pub fn to_element(&self, cfg: &ChartConfig) -> Element {
        let lc = &cfg.legend;
        let mut g = Group::new().with_id("legend");
        for (i, e) in self.entries.iter().enumerate() {
            let cy = self.origin.y + i as f64 * (lc.radius + lc.row_gap);
            g.push(Circle {
                id: None,
                center: Point::new(self.origin.x, cy),
                radius: lc.radius,
                fill: e.color,
                stroke: Some(cfg.theme.marker_stroke),
                class: Some("legend-swatch".into()),
                data: Vec::new(),
            });
            g.push(
                Text::new(
                    Point::new(self.origin.x + lc.radius * 1.75, cy + lc.font_size * 0.32),
                    e.label.clone(),
                    lc.font_size,
                    e.color,
                )
                .with_class("legend-label"),
            );
        }
        Element::Group(g)
    }
}
