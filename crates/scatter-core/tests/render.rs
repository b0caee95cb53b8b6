// File: crates/scatter-core/tests/render.rs
// Purpose: End-to-end rendering: markers, their attributes and colors, axes, legend and captions.

mod common;

use scatter_core::scene::Element;
use scatter_core::{ChartRenderer, Color, PointerEvent, ValidationError};

const ALLEGATION: &str = "#BD2D28";
const NO_ALLEGATION: &str = "#E3BA22";

fn dot_named<'a>(dots: &[&'a Element], records: &[scatter_core::RaceRecord], name: &str) -> &'a Element {
    let i = records.iter().position(|r| r.name == name).expect("record present");
    dots[i]
}

#[test]
fn two_record_scenario() {
    let records = common::scenario();
    let mut view = ChartRenderer::default().render(&records).expect("render");

    let dots = view.scene().find_by_class("dot");
    assert_eq!(dots.len(), 2);
    assert_eq!(dot_named(&dots, &records, "A").attr("fill").as_deref(), Some(NO_ALLEGATION));
    assert_eq!(dot_named(&dots, &records, "B").attr("fill").as_deref(), Some(ALLEGATION));
    assert_eq!(view.x_scale().domain_years(), (1993, 1997));

    let b = view.marker_center(1).expect("marker B");
    view.pointer_moved(b);
    let shown = view.tooltip().content().expect("tooltip content").to_text();
    assert!(shown.contains("Admitted"), "tooltip was: {shown}");
    assert!(shown.contains("Name: B"));
}

#[test]
fn markers_expose_year_and_time() {
    let records = common::sample();
    let view = ChartRenderer::default().render(&records).expect("render");
    let dots = view.scene().find_by_class("dot");
    assert_eq!(dots.len(), records.len());
    for (dot, r) in dots.iter().zip(&records) {
        assert_eq!(dot.attr("data-xvalue"), Some(r.calendar_year().to_string()));
        assert_eq!(dot.attr("data-yvalue"), Some(r.time.instant().format("%Y-%m-%dT%H:%M:%S").to_string()));
        assert_eq!(dot.attr("r").as_deref(), Some("8"));
        assert_eq!(dot.attr("stroke").as_deref(), Some("#000000"));
    }
    assert_eq!(dots[0].attr("data-yvalue").as_deref(), Some("1900-01-01T00:36:50"));
}

#[test]
fn fill_follows_the_doping_field() {
    let records = common::sample();
    let view = ChartRenderer::default().render(&records).expect("render");
    for (dot, r) in view.scene().find_by_class("dot").iter().zip(&records) {
        let want = if r.doping.is_empty() { NO_ALLEGATION } else { ALLEGATION };
        assert_eq!(dot.attr("fill").as_deref(), Some(want), "{} {}", r.name, r.calendar_year());
    }
}

#[test]
fn marker_pixels_match_the_scales() {
    let records = common::scenario();
    let view = ChartRenderer::default().render(&records).expect("render");
    // Plot group is translated by the left/top margins.
    let a = view.marker_center(0).unwrap();
    let b = view.marker_center(1).unwrap();
    assert!((a.x - (80.0 + 770.0 * 365.0 / 1461.0)).abs() < 1e-6);
    assert_eq!(a.y, 70.0);
    assert!((b.y - (70.0 + 330.0)).abs() < 1e-9);
    assert!(a.y < b.y, "faster ride plots higher");
}

#[test]
fn legend_always_has_two_entries() {
    let only_doped = common::records_from(
        br#"[{"Name":"X","Nationality":"USA","Year":2004,"Time":"37:36","Place":4,"Doping":"Stripped"}]"#,
    );
    for records in [only_doped, common::sample()] {
        let view = ChartRenderer::default().render(&records).expect("render");
        let legend = view.scene().find_by_id("legend").expect("legend");
        let swatches: Vec<_> = legend.children().iter().filter(|e| e.class() == Some("legend-swatch")).collect();
        let labels: Vec<_> = legend.children().iter().filter(|e| e.class() == Some("legend-label")).collect();
        assert_eq!(swatches.len(), 2);
        assert_eq!(labels.len(), 2);
        assert_eq!(swatches[0].attr("fill").as_deref(), Some(ALLEGATION));
        assert_eq!(swatches[1].attr("fill").as_deref(), Some(NO_ALLEGATION));
        // Rows stack downwards by radius + gap.
        assert_eq!(swatches[0].attr("cx").as_deref(), Some("720"));
        assert_eq!(swatches[0].attr("cy").as_deref(), Some("350"));
        assert_eq!(swatches[1].attr("cy").as_deref(), Some("369"));
    }
}

#[test]
fn axes_title_and_captions_are_drawn() {
    let view = ChartRenderer::default().render(&common::scenario()).expect("render");
    let scene = view.scene();
    assert_eq!(scene.id.as_deref(), Some("scatterPlot"));
    assert!(scene.find_by_id("x-axis").is_some());
    assert!(scene.find_by_id("y-axis").is_some());
    match scene.find_by_id("title") {
        Some(Element::Text(t)) => assert_eq!(t.content(), "Doping Allegations in Professional Cycling"),
        other => panic!("title missing: {other:?}"),
    }

    let y_ticks = scene.find_by_id("y-axis").unwrap().children().iter().filter(|e| e.class() == Some("tick")).count();
    assert_eq!(y_ticks, 15);

    let source = scene.find_by_class("textSource");
    let Element::Text(source) = source[0] else { panic!("source caption is text") };
    assert_eq!(source.spans[1].href.as_deref(), Some(scatter_core::config::DATA_URL));
    assert_eq!(scene.find_by_class("nameAuthor").len(), 1);
}

#[test]
fn rendering_twice_appends_a_second_copy() {
    let records = common::scenario();
    let renderer = ChartRenderer::default();
    let mut scene = renderer.surface();
    renderer.render_into(&records, &mut scene).expect("first");
    renderer.render_into(&records, &mut scene).expect("second");
    assert_eq!(scene.find_by_class("dot").len(), 4);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = ChartRenderer::default().render(&[]).err().expect("empty must fail");
    assert_eq!(err, ValidationError::EmptyDataset);
}

#[test]
fn dark_theme_keeps_category_colors() {
    let cfg = scatter_core::ChartConfig::default().with_theme(scatter_core::Theme::dark());
    let view = ChartRenderer::new(cfg).render(&common::scenario()).expect("render");
    assert_eq!(view.scene().background, Color::from_rgb(18, 18, 20));
    assert_eq!(view.scene().find_by_class("dot")[1].attr("fill").as_deref(), Some(ALLEGATION));
}

#[test]
fn leave_event_for_unknown_marker_is_ignored() {
    let mut view = ChartRenderer::default().render(&common::scenario()).expect("render");
    view.dispatch(PointerEvent::Leave { marker: 99 });
    assert!(!view.tooltip().is_visible());
}

#[test]
fn markers_stay_inside_the_plotted_region() {
    let view = ChartRenderer::default().render(&common::sample()).expect("render");
    let plot = view.config().plot_rect();
    assert_eq!((plot.width(), plot.height()), (770.0, 350.0));
    for m in view.markers() {
        assert!(plot.contains(m.center), "marker {} at {:?} outside {:?}", m.index, m.center, plot);
    }
}

#[test]
fn tooltip_boxes_hold_their_rows_and_stay_on_the_surface() {
    let records = common::sample();
    let view = ChartRenderer::default().render(&records).expect("render");
    let cfg = view.config();
    let tc = &cfg.tooltip;
    let (w, h) = (f64::from(cfg.width), f64::from(cfg.height));
    let tips = view.scene().find_by_class("tooltip");
    assert_eq!(tips.len(), records.len());

    let mut longest_rows = Vec::new();
    for tip in &tips {
        let Element::Group(g) = tip else { panic!("tooltip is a group") };
        let Element::Rect(bg) = &g.children[0] else { panic!("tooltip starts with its box") };
        let rows: Vec<_> = g
            .children
            .iter()
            .filter_map(|c| match c {
                Element::Text(t) => Some(t.content().chars().count()),
                _ => None,
            })
            .collect();
        assert_eq!(rows.len(), 6);
        let longest = *rows.iter().max().unwrap();
        longest_rows.push(longest);

        // Half an em per glyph is a floor for proportional text at this size.
        assert!(bg.width >= longest as f64 * tc.font_size * 0.5 + 2.0 * tc.padding, "box {} for {longest} chars", bg.width);
        assert_eq!(bg.height, tc.padding * 2.0 + tc.line_height * 6.0);

        let at = g.transform.translate;
        assert!(at.x >= 0.0 && at.x + bg.width <= w, "x {} + {} leaves the surface", at.x, bg.width);
        assert!(at.y >= 0.0 && at.y + bg.height <= h, "y {} + {} leaves the surface", at.y, bg.height);
    }
    // Pantani 1995: "Doping allegations: Alleged drug use during 1995 due to high hematocrit levels".
    assert_eq!(longest_rows[0], 78);
}

#[test]
fn unpaddable_year_range_is_a_dataset_error() {
    let mut cfg = scatter_core::ChartConfig::default();
    cfg.year_padding = i32::MAX;
    let err = ChartRenderer::new(cfg).render(&common::scenario()).err().expect("padding overflows the calendar");
    assert_eq!(err, ValidationError::YearRange { first: 1994, last: 1996, padding: i32::MAX });
    assert_eq!(err.record_index(), None);
}
