// File: crates/scatter-core/src/tooltip.rs
// Summary: Tooltip view-model, its opacity fade, and the hover handlers bound to markers.

use std::time::Duration;

use crate::config::{ChartConfig, TooltipConfig};
use crate::geometry::Point;
use crate::record::RaceRecord;
use crate::scene::{Element, Group, RectShape, Text, TextSpan};

/// Details shown for one ride.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub name: String,
    pub nationality: String,
    pub year: i32,
    pub time: String,
    pub place: String,
    pub doping: String,
}

impl TooltipContent {
    pub fn from_record(r: &RaceRecord) -> Self {
        Self {
            name: r.name.clone(),
            nationality: r.nationality.clone(),
            year: r.calendar_year(),
            time: r.time.to_string(),
            place: r.place.to_string(),
            doping: r.allegation_text().to_owned(),
        }
    }

    /// `(label, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        [
            ("Name: ", self.name.clone()),
            ("Nationality: ", self.nationality.clone()),
            ("Year: ", self.year.to_string()),
            ("Time: ", self.time.clone()),
            ("Place: ", self.place.clone()),
            ("Doping allegations: ", self.doping.clone()),
        ]
    }

    pub fn to_text(&self) -> String {
        self.rows().iter().map(|(k, v)| format!("{k}{v}")).collect::<Vec<_>>().join("\n")
    }

    /// Box `(width, height)` fitting every row. Text width is estimated at
    /// `char_width` ems per character; the box is never narrower than `min_width`.
    pub fn size(&self, tc: &TooltipConfig) -> (f64, f64) {
        let rows = self.rows();
        let longest = rows.iter().map(|(k, v)| k.chars().count() + v.chars().count()).max().unwrap_or(0);
        let text_width = longest as f64 * tc.font_size * tc.char_width;
        let width = (text_width + tc.padding * 2.0).max(tc.min_width);
        let height = tc.padding * 2.0 + tc.line_height * rows.len() as f64;
        (width, height)
    }

    /// Tooltip box with its top-left corner at `origin`.
    pub fn to_element(&self, cfg: &ChartConfig, origin: Point) -> Group {
        let tc = &cfg.tooltip;
        let rows = self.rows();
        let (width, height) = self.size(tc);
        let mut g = Group::new().with_class("tooltip").translated(origin.x, origin.y);
        g.data.push(("year".into(), self.year.to_string()));
        g.push(RectShape {
            origin: Point::default(),
            width,
            height,
            fill: cfg.theme.tooltip_background,
            stroke: Some(cfg.theme.axis_line),
            corner_radius: 4.0,
        });
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = tc.padding + tc.line_height * (i as f64 + 1.0) - (tc.line_height - tc.font_size) / 2.0;
            let mut t = Text::new(Point::new(tc.padding, y), "", tc.font_size, cfg.theme.tooltip_text);
            t.spans = vec![TextSpan::strong(*label), TextSpan::plain(value.clone())];
            g.push(t);
        }
        g
    }
}

/// Linear opacity transition.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Fade {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Fade {
    fn value(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }
}

/// Tooltip state owned by a chart view. Starts hidden and fully transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    config: TooltipConfig,
    visible: bool,
    content: Option<TooltipContent>,
    position: Point,
    opacity: f64,
    fade: Option<Fade>,
}

impl TooltipState {
    pub fn new(config: TooltipConfig) -> Self {
        Self { config, visible: false, content: None, position: Point::default(), opacity: 0.0, fade: None }
    }

    /// Replace the content, move to `at`, and start fading in.
    pub fn show(&mut self, content: TooltipContent, at: Point) {
        self.content = Some(content);
        self.position = at;
        self.visible = true;
        self.start_fade(self.config.opacity);
    }

    /// Start fading out. Content and position stay as they were.
    pub fn hide(&mut self) {
        self.visible = false;
        self.start_fade(0.0);
    }

    fn start_fade(&mut self, to: f64) {
        let fade = Fade { from: self.opacity, to, duration: self.config.fade, elapsed: Duration::ZERO };
        self.opacity = fade.value();
        self.fade = if self.opacity == to { None } else { Some(fade) };
    }

    /// Advance the running fade by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += dt;
            self.opacity = fade.value();
            if fade.elapsed >= fade.duration {
                self.fade = None;
            }
        }
    }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn is_animating(&self) -> bool { self.fade.is_some() }
    pub fn opacity(&self) -> f64 { self.opacity }
    pub fn position(&self) -> Point { self.position }
    pub fn content(&self) -> Option<&TooltipContent> { self.content.as_ref() }
    pub fn config(&self) -> &TooltipConfig { &self.config }

    /// The live tooltip as a scene element (`id="tooltip"`), if it has content.
    pub fn to_element(&self, cfg: &ChartConfig) -> Option<Element> {
        let content = self.content.as_ref()?;
        let mut g = content.to_element(cfg, self.position);
        g.id = Some("tooltip".into());
        g.opacity = Some(self.opacity);
        Some(Element::Group(g))
    }
}

/// Pointer interaction routed to a marker, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { marker: usize, at: Point },
    Leave { marker: usize },
}

impl PointerEvent {
    pub fn marker(&self) -> usize {
        match *self {
            PointerEvent::Enter { marker, .. } | PointerEvent::Leave { marker } => marker,
        }
    }
}

/// Callbacks bound to one marker.
pub trait HoverHandler {
    fn on_enter(&self, tooltip: &mut TooltipState, at: Point);
    fn on_leave(&self, tooltip: &mut TooltipState);
}

/// Shows a record's details next to the pointer while it hovers the marker.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordTooltip {
    pub content: TooltipContent,
}

impl RecordTooltip {
    pub fn new(record: &RaceRecord) -> Self {
        Self { content: TooltipContent::from_record(record) }
    }
}

impl HoverHandler for RecordTooltip {
    fn on_enter(&self, tooltip: &mut TooltipState, at: Point) {
        let at = at + tooltip.config().offset;
        tooltip.show(self.content.clone(), at);
    }

    fn on_leave(&self, tooltip: &mut TooltipState) {
        tooltip.hide();
    }
}
