// File: crates/scatter-core/src/chart.rs
// Summary: ChartRenderer: computes both scales and draws axes, markers, legend, captions and tooltips.

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::{clamp, Point};
use crate::legend::{Category, Legend};
use crate::record::{RaceRecord, RaceTime};
use crate::scale::{ElapsedScale, ScaleTransform, YearScale};
use crate::scene::{Circle, Element, Group, Reveal, Scene, Text, TextAnchor, TextSpan};
use crate::tooltip::{RecordTooltip, TooltipContent};
use crate::view::{ChartView, MarkerBinding};

/// Draws the doping scatter plot for a fixed configuration.
pub struct ChartRenderer {
    config: ChartConfig,
}

/// What one render pass produced besides the scene elements.
pub struct RenderOutput {
    pub x_scale: YearScale,
    pub y_scale: ElapsedScale,
    pub markers: Vec<MarkerBinding>,
}

impl Default for ChartRenderer {
    fn default() -> Self { Self::new(ChartConfig::default()) }
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// A fresh surface sized and colored by the configuration.
    pub fn surface(&self) -> Scene {
        let mut scene = Scene::new(self.config.width, self.config.height, self.config.theme.background);
        scene.id = Some("scatterPlot".into());
        scene
    }

    /// Render onto a new surface and wrap it with its hover handlers.
    pub fn render(&self, records: &[RaceRecord]) -> Result<ChartView, ValidationError> {
        let mut scene = self.surface();
        let out = self.render_into(records, &mut scene)?;
        Ok(ChartView::new(scene, self.config.clone(), out))
    }

    /// X scale over the padded year range and nice-rounded Y scale over the finish times.
    pub fn scales(&self, records: &[RaceRecord]) -> Result<(YearScale, ElapsedScale), ValidationError> {
        let cfg = &self.config;
        let (first, last) = records
            .iter()
            .map(RaceRecord::calendar_year)
            .fold(None, |acc: Option<(i32, i32)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
            .ok_or(ValidationError::EmptyDataset)?;
        let x = YearScale::padded(first, last, cfg.year_padding, (0.0, cfg.inner_width()))
            .ok_or(ValidationError::YearRange { first, last, padding: cfg.year_padding })?;

        let fastest = records.iter().map(|r| r.time).min().ok_or(ValidationError::EmptyDataset)?;
        let slowest = records.iter().map(|r| r.time).max().ok_or(ValidationError::EmptyDataset)?;
        // Fastest bound keeps its minutes unchanged; only the nice rounding moves it.
        let fastest = RaceTime::from_seconds((fastest.minutes() * 60) + fastest.seconds());
        // Slowest at the bottom, fastest at the top.
        let y = ElapsedScale::new((slowest, fastest), (cfg.inner_height(), 0.0)).nice(cfg.tick_count);
        Ok((x, y))
    }

    /// Append the chart to `scene`. Rendering twice appends a second copy.
    pub fn render_into(&self, records: &[RaceRecord], scene: &mut Scene) -> Result<RenderOutput, ValidationError> {
        let cfg = &self.config;
        let (x_scale, y_scale) = self.scales(records)?;
        let inner = (cfg.inner_width(), cfg.inner_height());
        let origin = Point::new(f64::from(cfg.margins.left), f64::from(cfg.margins.top));
        log::debug!(
            "rendering {} records, x domain {:?}, y domain {:?}",
            records.len(),
            x_scale.domain_years(),
            y_scale.domain_seconds()
        );

        let mut plot = Group::new().with_class("plot").translated(origin.x, origin.y);
        plot.push(Axis::years(&x_scale, cfg).to_element(cfg, inner));
        plot.push(Axis::elapsed(&y_scale, cfg).to_element(cfg, inner));

        let mut title = Text::new(Point::new(inner.0 / 2.0, -30.0), cfg.labels.title.clone(), cfg.title_font_size, cfg.theme.title)
            .anchored(TextAnchor::Middle);
        title.id = Some("title".into());
        title.spans = vec![TextSpan::strong(cfg.labels.title.clone())];
        plot.push(title);

        let mut tooltips = Group::new().with_class("tooltips");
        let mut markers = Vec::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            let center = Point::new(x_scale.to_px(&r.year), y_scale.to_px(&r.time));
            let dot_id = format!("dot-{i}");
            plot.push(Circle {
                id: Some(dot_id.clone()),
                center,
                radius: cfg.marker_radius,
                fill: Category::of(&r.doping).color(cfg),
                stroke: Some(cfg.theme.marker_stroke),
                class: Some("dot".into()),
                data: vec![
                    ("xvalue".into(), r.calendar_year().to_string()),
                    ("yvalue".into(), r.time.instant().format("%Y-%m-%dT%H:%M:%S").to_string()),
                ],
            });

            let handler = RecordTooltip::new(r);
            let size = handler.content.size(&cfg.tooltip);
            let mut tip = handler.content.to_element(cfg, self.static_tooltip_origin(origin + center, size));
            tip.opacity = Some(0.0);
            tip.reveal = Some(Reveal { trigger: dot_id, opacity: cfg.tooltip.opacity, duration: cfg.tooltip.fade });
            tooltips.push(tip);

            markers.push(MarkerBinding {
                index: i,
                center: origin + center,
                radius: cfg.marker_radius,
                handler: Box::new(handler),
            });
        }

        scene.append(plot);
        scene.append(Legend::new(cfg).to_element(cfg));
        scene.append(self.captions());
        scene.append(tooltips);

        Ok(RenderOutput { x_scale, y_scale, markers })
    }

    /// Where a marker's tooltip of `size` sits when no pointer position is known:
    /// beside the marker, flipped to its left when it would leave the surface, and
    /// kept on the surface whenever it fits.
    fn static_tooltip_origin(&self, marker: Point, (width, height): (f64, f64)) -> Point {
        let tc = &self.config.tooltip;
        let (w, h) = (f64::from(self.config.width), f64::from(self.config.height));
        let mut x = marker.x + tc.offset.x;
        if x + width > w {
            x = marker.x - tc.offset.x - width;
        }
        let x = clamp(x, 0.0, (w - width).max(0.0));
        let y = clamp(marker.y + tc.offset.y, 0.0, (h - height).max(0.0));
        Point::new(x, y)
    }

    fn captions(&self) -> Element {
        let cfg = &self.config;
        let (w, h) = (f64::from(cfg.width), f64::from(cfg.height));
        let mut g = Group::new().with_class("captions");

        let mut source = Text::new(Point::new(w - f64::from(cfg.margins.right), h - 20.0), "", cfg.font_size * 1.2, cfg.theme.caption)
            .with_class("textSource")
            .anchored(TextAnchor::End);
        source.spans = vec![
            TextSpan::plain(cfg.source.label.clone()),
            TextSpan::link(cfg.source.text.clone(), cfg.source.href.clone()),
        ];
        g.push(source);

        let mut author = Text::new(Point::new(f64::from(cfg.margins.left), h - 20.0), "", cfg.font_size * 1.2, cfg.theme.caption)
            .with_class("nameAuthor");
        author.spans = vec![
            TextSpan::plain(cfg.author.label.clone()),
            TextSpan::link(cfg.author.text.clone(), cfg.author.href.clone()),
        ];
        g.push(author);
        Element::Group(g)
    }
}

/// Tooltip text for a record, as shown on hover.
pub fn tooltip_text(record: &RaceRecord) -> String {
    TooltipContent::from_record(record).to_text()
}
