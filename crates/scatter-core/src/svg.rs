// File: crates/scatter-core/src/svg.rs
// Summary: Serializes a scene into a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::scene::{format_number as num, Circle, Element, Group, Line, RectShape, Scene, Text};
use crate::theme::Color;

const STYLE: &str = "text{font-family:'Segoe UI',Arial,Helvetica,sans-serif}\
.dot{cursor:pointer}.tooltip{pointer-events:none}a{text-decoration:underline}";

/// Escape text and attribute values for XML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn paint(c: Color) -> String {
    if c.a == 255 {
        c.to_hex()
    } else {
        format!("rgba({},{},{},{})", c.r, c.g, c.b, num(f64::from(c.a) / 255.0))
    }
}

/// Render the scene as SVG markup.
pub fn to_svg_string(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
        w = scene.width,
        h = scene.height
    );
    if let Some(id) = &scene.id {
        let _ = write!(out, r#" id="{}""#, escape(id));
    }
    out.push_str(">\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, paint(scene.background));
    for el in &scene.elements {
        write_element(&mut out, el, 0);
    }
    out.push_str("</svg>\n");
    out
}

/// Write the scene as an SVG file, creating parent directories as needed.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io = |source| ChartError::Io { path: path.display().to_string(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, to_svg_string(scene)).map_err(io)
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    match el {
        Element::Group(g) => write_group(out, g, depth),
        Element::Circle(c) => {
            let _ = writeln!(out, "{pad}{}", circle(c));
        }
        Element::Text(t) => {
            let _ = writeln!(out, "{pad}{}", text(t));
        }
        Element::Line(l) => {
            let _ = writeln!(out, "{pad}{}", line(l));
        }
        Element::Rect(r) => {
            let _ = writeln!(out, "{pad}{}", rect(r));
        }
    }
}

fn common_attrs(out: &mut String, id: Option<&str>, class: Option<&str>) {
    if let Some(id) = id {
        let _ = write!(out, r#" id="{}""#, escape(id));
    }
    if let Some(class) = class {
        let _ = write!(out, r#" class="{}""#, escape(class));
    }
}

fn data_attrs(out: &mut String, data: &[(String, String)]) {
    for (k, v) in data {
        let _ = write!(out, r#" data-{}="{}""#, escape(k), escape(v));
    }
}

fn write_group(out: &mut String, g: &Group, depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = write!(out, "{pad}<g");
    common_attrs(out, g.id.as_deref(), g.class.as_deref());
    if !g.transform.is_identity() {
        let t = &g.transform;
        let _ = write!(out, r#" transform="translate({}, {})"#, num(t.translate.x), num(t.translate.y));
        if t.rotate != 0.0 {
            let _ = write!(out, " rotate({})", num(t.rotate));
        }
        out.push('"');
    }
    if let Some(o) = g.opacity {
        let _ = write!(out, r#" opacity="{}""#, num(o));
    }
    data_attrs(out, &g.data);
    out.push_str(">\n");
    if let Some(rv) = &g.reveal {
        let dur = num(rv.duration.as_secs_f64());
        let trigger = escape(&rv.trigger);
        let _ = writeln!(
            out,
            r#"{pad}  <animate attributeName="opacity" to="{}" dur="{dur}s" begin="{trigger}.mouseover" fill="freeze"/>"#,
            num(rv.opacity)
        );
        let _ = writeln!(
            out,
            r#"{pad}  <animate attributeName="opacity" to="0" dur="{dur}s" begin="{trigger}.mouseout" fill="freeze"/>"#
        );
    }
    for c in &g.children {
        write_element(out, c, depth + 1);
    }
    let _ = writeln!(out, "{pad}</g>");
}

fn circle(c: &Circle) -> String {
    let mut s = String::from("<circle");
    common_attrs(&mut s, c.id.as_deref(), c.class.as_deref());
    let _ = write!(s, r#" cx="{}" cy="{}" r="{}" fill="{}""#, num(c.center.x), num(c.center.y), num(c.radius), paint(c.fill));
    if let Some(stroke) = c.stroke {
        let _ = write!(s, r#" stroke="{}""#, paint(stroke));
    }
    data_attrs(&mut s, &c.data);
    s.push_str("/>");
    s
}

fn text(t: &Text) -> String {
    let mut s = String::from("<text");
    common_attrs(&mut s, t.id.as_deref(), t.class.as_deref());
    let _ = write!(
        s,
        r#" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
        num(t.position.x),
        num(t.position.y),
        num(t.font_size),
        paint(t.fill),
        t.anchor.as_str()
    );
    if t.rotate != 0.0 {
        let _ = write!(s, r#" transform="rotate({})""#, num(t.rotate));
    }
    s.push('>');
    for span in &t.spans {
        let body = if span.bold {
            format!(r#"<tspan font-weight="bold">{}</tspan>"#, escape(&span.text))
        } else {
            escape(&span.text)
        };
        match &span.href {
            Some(href) => {
                let _ = write!(s, r#"<a href="{h}" xlink:href="{h}" target="_blank">{body}</a>"#, h = escape(href));
            }
            None => s.push_str(&body),
        }
    }
    s.push_str("</text>");
    s
}

fn line(l: &Line) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
        paint(l.stroke),
        num(l.width)
    )
}

fn rect(r: &RectShape) -> String {
    let mut s = format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
        num(r.origin.x),
        num(r.origin.y),
        num(r.width),
        num(r.height),
        num(r.corner_radius),
        paint(r.fill)
    );
    if let Some(stroke) = r.stroke {
        let _ = write!(s, r#" stroke="{}""#, paint(stroke));
    }
    s.push_str("/>");
    s
}
