// File: crates/scatter-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; lays out styled spans and honors text anchors.

use scatter_core::scene::{Text, TextAnchor};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextDecoration, TextStyle};
use skia_safe as skia;

use crate::raster::to_skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &Text) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        for span in &text.spans {
            let mut style = Self::make_style(text.font_size as f32, to_skia(text.fill));
            if span.bold {
                style.set_font_style(skia::FontStyle::bold());
            }
            if span.href.is_some() {
                style.set_decoration_type(TextDecoration::UNDERLINE);
            }
            builder.push_style(&style);
            builder.add_text(&span.text);
            builder.pop();
        }
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the baseline at the text's position, shifted by its anchor.
    pub fn draw(&self, canvas: &skia::Canvas, text: &Text) {
        let p = self.layout(text);
        let width = p.max_intrinsic_width();
        let dx = match text.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => width / 2.0,
            TextAnchor::End => width,
        };
        let x = text.position.x as f32 - dx;
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        let y = text.position.y as f32 - text.font_size as f32 * 0.8;
        p.paint(canvas, (x, y));
    }
}
