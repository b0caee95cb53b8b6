// File: crates/scatter-core/src/scene.rs
// Summary: Retained element tree that forms the drawing surface (groups, circles, text, lines).

use std::time::Duration;

use crate::geometry::Point;
use crate::theme::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate: Point,
    /// Rotation in degrees, applied after the translation.
    pub rotate: f64,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { translate: Point::new(x, y), rotate: 0.0 }
    }

    pub fn is_identity(&self) -> bool {
        self.translate == Point::default() && self.rotate == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Run of text, optionally a hyperlink.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub href: Option<String>,
    pub bold: bool,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), href: None, bold: false }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self { text: text.into(), href: None, bold: true }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self { text: text.into(), href: Some(href.into()), bold: false }
    }
}

/// Fades a hidden group in while the pointer is over the element `trigger`,
/// and back out when it leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub trigger: String,
    pub opacity: f64,
    pub duration: Duration,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<String>,
    pub transform: Transform,
    /// `None` means fully opaque.
    pub opacity: Option<f64>,
    pub data: Vec<(String, String)>,
    pub reveal: Option<Reveal>,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self { Self::default() }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.transform = Transform::translate(x, y);
        self
    }

    pub fn push(&mut self, el: impl Into<Element>) {
        self.children.push(el.into());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub id: Option<String>,
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub class: Option<String>,
    /// `data-*` attributes, stored without the prefix.
    pub data: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub id: Option<String>,
    pub class: Option<String>,
    pub position: Point,
    pub spans: Vec<TextSpan>,
    pub font_size: f64,
    pub fill: Color,
    pub anchor: TextAnchor,
    pub rotate: f64,
}

impl Text {
    pub fn new(position: Point, text: impl Into<String>, font_size: f64, fill: Color) -> Self {
        Self {
            id: None,
            class: None,
            position,
            spans: vec![TextSpan::plain(text)],
            font_size,
            fill,
            anchor: TextAnchor::Start,
            rotate: 0.0,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Concatenated text of all spans.
    pub fn content(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Color,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub corner_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Group(Group),
    Circle(Circle),
    Text(Text),
    Line(Line),
    Rect(RectShape),
}

impl From<Group> for Element { fn from(g: Group) -> Self { Element::Group(g) } }
impl From<Circle> for Element { fn from(c: Circle) -> Self { Element::Circle(c) } }
impl From<Text> for Element { fn from(t: Text) -> Self { Element::Text(t) } }
impl From<Line> for Element { fn from(l: Line) -> Self { Element::Line(l) } }
impl From<RectShape> for Element { fn from(r: RectShape) -> Self { Element::Rect(r) } }

/// Shortest decimal form with at most three fractional digits.
pub(crate) fn format_number(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() { format!("{}", r as i64) } else { format!("{r}") }
}

impl Element {
    pub fn id(&self) -> Option<&str> {
        match self {
            Element::Group(g) => g.id.as_deref(),
            Element::Circle(c) => c.id.as_deref(),
            Element::Text(t) => t.id.as_deref(),
            _ => None,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Element::Group(g) => g.class.as_deref(),
            Element::Circle(c) => c.class.as_deref(),
            Element::Text(t) => t.class.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Group(g) => &g.children,
            _ => &[],
        }
    }

    /// Look up an attribute by its SVG name, e.g. `"cx"`, `"fill"` or `"data-xvalue"`.
    pub fn attr(&self, name: &str) -> Option<String> {
        if let Some(key) = name.strip_prefix("data-") {
            let data = match self {
                Element::Group(g) => &g.data,
                Element::Circle(c) => &c.data,
                _ => return None,
            };
            return data.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone());
        }
        match (self, name) {
            (_, "id") => self.id().map(str::to_owned),
            (_, "class") => self.class().map(str::to_owned),
            (Element::Circle(c), "cx") => Some(format_number(c.center.x)),
            (Element::Circle(c), "cy") => Some(format_number(c.center.y)),
            (Element::Circle(c), "r") => Some(format_number(c.radius)),
            (Element::Circle(c), "fill") => Some(c.fill.to_hex()),
            (Element::Circle(c), "stroke") => c.stroke.map(|s| s.to_hex()),
            (Element::Text(t), "x") => Some(format_number(t.position.x)),
            (Element::Text(t), "y") => Some(format_number(t.position.y)),
            (Element::Text(t), "fill") => Some(t.fill.to_hex()),
            (Element::Text(t), "text-anchor") => Some(t.anchor.as_str().to_owned()),
            (Element::Group(g), "opacity") => g.opacity.map(format_number),
            _ => None,
        }
    }

    /// Depth-first walk over this element and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for c in self.children() {
            c.walk(visit);
        }
    }
}

/// The drawing surface: a fixed-size canvas holding a list of root elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub id: Option<String>,
    pub background: Color,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { width, height, id: None, background, elements: Vec::new() }
    }

    pub fn append(&mut self, el: impl Into<Element>) {
        self.elements.push(el.into());
    }

    /// Depth-first walk over every element of the surface.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        for el in &self.elements {
            el.walk(visit);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |el| {
            if found.is_none() && el.id() == Some(id) {
                found = Some(el);
            }
        });
        found
    }

    /// All elements whose class list contains `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if el.class().is_some_and(|c| c.split_whitespace().any(|c| c == class)) {
                out.push(el);
            }
        });
        out
    }
}
