// File: crates/scatter-render-skia/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use scatter_core::scene::{Circle, Element, Group, Line, RectShape, Text};
use scatter_core::{Color, Scene};
use skia_safe as skia;

use crate::text::TextShaper;
use crate::{RasterError, RasterOptions};

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub(crate) fn render_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    let dpr = opts.dpr.max(0.1);
    let w = (scene.width as f32 * dpr).round() as i32;
    let h = (scene.height as f32 * dpr).round() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(RasterError::Surface(w, h))?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(scene.background));
    canvas.scale((dpr, dpr));

    let shaper = TextShaper::new();
    for el in &scene.elements {
        draw_element(canvas, &shaper, el);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RasterError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

fn draw_element(canvas: &skia::Canvas, shaper: &TextShaper, el: &Element) {
    match el {
        Element::Group(g) => draw_group(canvas, shaper, g),
        Element::Circle(c) => draw_circle(canvas, c),
        Element::Text(t) => draw_text(canvas, shaper, t),
        Element::Line(l) => draw_line(canvas, l),
        Element::Rect(r) => draw_rect(canvas, r),
    }
}

fn draw_group(canvas: &skia::Canvas, shaper: &TextShaper, g: &Group) {
    let opacity = g.opacity.unwrap_or(1.0).clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let restore_to = canvas.save();
    if opacity < 1.0 {
        canvas.save_layer_alpha(None, (opacity * 255.0).round() as u32);
    }
    let t = g.transform;
    canvas.translate((t.translate.x as f32, t.translate.y as f32));
    if t.rotate != 0.0 {
        canvas.rotate(t.rotate as f32, None);
    }
    for c in &g.children {
        draw_element(canvas, shaper, c);
    }
    canvas.restore_to_count(restore_to);
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn draw_circle(canvas: &skia::Canvas, c: &Circle) {
    let center = (c.center.x as f32, c.center.y as f32);
    canvas.draw_circle(center, c.radius as f32, &fill_paint(c.fill));
    if let Some(stroke) = c.stroke {
        canvas.draw_circle(center, c.radius as f32, &stroke_paint(stroke, 1.0));
    }
}

fn draw_line(canvas: &skia::Canvas, l: &Line) {
    let paint = stroke_paint(l.stroke, l.width as f32);
    canvas.draw_line((l.from.x as f32, l.from.y as f32), (l.to.x as f32, l.to.y as f32), &paint);
}

fn draw_rect(canvas: &skia::Canvas, r: &RectShape) {
    let rect = skia::Rect::from_xywh(r.origin.x as f32, r.origin.y as f32, r.width as f32, r.height as f32);
    let rad = r.corner_radius as f32;
    canvas.draw_round_rect(rect, rad, rad, &fill_paint(r.fill));
    if let Some(stroke) = r.stroke {
        canvas.draw_round_rect(rect, rad, rad, &stroke_paint(stroke, 1.0));
    }
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, t: &Text) {
    if t.rotate != 0.0 {
        let restore_to = canvas.save();
        canvas.rotate(t.rotate as f32, None);
        shaper.draw(canvas, t);
        canvas.restore_to_count(restore_to);
    } else {
        shaper.draw(canvas, t);
    }
}
