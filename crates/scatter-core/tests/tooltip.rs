// File: crates/scatter-core/tests/tooltip.rs
// Purpose: Tooltip content, hover/unhover handling and the opacity fade.

mod common;

use std::time::Duration;

use scatter_core::config::TooltipConfig;
use scatter_core::tooltip::RecordTooltip;
use scatter_core::{ChartRenderer, HoverHandler, Point, PointerEvent, TooltipContent, TooltipState};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn allegation_text_is_literal_or_none() {
    let records = common::scenario();
    let a = TooltipContent::from_record(&records[0]);
    let b = TooltipContent::from_record(&records[1]);
    assert_eq!(a.doping, "None");
    assert_eq!(b.doping, "Admitted");
    assert_eq!(
        a.to_text(),
        "Name: A\nNationality: ITA\nYear: 1994\nTime: 36:55\nPlace: 1\nDoping allegations: None"
    );
    assert_eq!(scatter_core::chart::tooltip_text(&records[1]).lines().last(), Some("Doping allegations: Admitted"));
}

#[test]
fn hover_fades_in_next_to_the_pointer_and_out_on_leave() {
    let mut view = ChartRenderer::default().render(&common::scenario()).expect("render");
    assert!(!view.tooltip().is_visible());
    assert_eq!(view.tooltip().opacity(), 0.0);

    let at = Point::new(300.0, 200.0);
    view.dispatch(PointerEvent::Enter { marker: 0, at });
    assert!(view.tooltip().is_visible());
    assert_eq!(view.tooltip().position(), Point::new(325.0, 200.0));
    assert_eq!(view.hovered(), Some(0));

    view.advance(Duration::from_millis(50));
    assert!(approx(view.tooltip().opacity(), 0.475));
    view.advance(Duration::from_millis(50));
    assert!(approx(view.tooltip().opacity(), 0.95));
    assert!(!view.tooltip().is_animating());

    view.dispatch(PointerEvent::Leave { marker: 0 });
    assert!(!view.tooltip().is_visible());
    assert_eq!(view.hovered(), None);
    view.advance(Duration::from_millis(100));
    assert_eq!(view.tooltip().opacity(), 0.0);
    // Content stays around for the fade-out.
    assert_eq!(view.tooltip().content().map(|c| c.name.as_str()), Some("A"));
}

#[test]
fn pointer_moves_switch_between_markers() {
    let mut view = ChartRenderer::default().render(&common::scenario()).expect("render");
    let a = view.marker_center(0).unwrap();
    let b = view.marker_center(1).unwrap();

    view.pointer_moved(Point::new(a.x + 3.0, a.y + 3.0));
    assert_eq!(view.hovered(), Some(0));
    view.pointer_moved(b);
    assert_eq!(view.hovered(), Some(1));
    assert_eq!(view.tooltip().content().unwrap().name, "B");

    // Outside every marker's radius.
    view.pointer_moved(Point::new(b.x + 20.0, b.y));
    assert_eq!(view.hovered(), None);
    assert!(!view.tooltip().is_visible());

    view.pointer_moved(a);
    view.pointer_exited();
    assert!(!view.tooltip().is_visible());
}

#[test]
fn hit_test_prefers_the_topmost_marker() {
    let records = common::records_from(
        br#"[
            {"Name":"First","Nationality":"ITA","Year":1995,"Time":"37:00","Place":1,"Doping":""},
            {"Name":"Second","Nationality":"ESP","Year":1995,"Time":"37:00","Place":2,"Doping":""}
        ]"#,
    );
    let view = ChartRenderer::default().render(&records).expect("render");
    let c = view.marker_center(0).unwrap();
    assert_eq!(view.marker_center(1), Some(c));
    assert_eq!(view.hit_test(c), Some(1));
    assert_eq!(view.hit_test(Point::new(0.0, 0.0)), None);
}

#[test]
fn live_tooltip_element_carries_year_and_opacity() {
    let mut view = ChartRenderer::default().render(&common::scenario()).expect("render");
    assert!(view.tooltip_element().is_none());
    view.dispatch(PointerEvent::Enter { marker: 1, at: Point::new(10.0, 10.0) });
    view.advance(Duration::from_millis(100));
    let el = view.tooltip_element().expect("tooltip element");
    assert_eq!(el.id(), Some("tooltip"));
    assert_eq!(el.attr("data-year").as_deref(), Some("1996"));
    assert_eq!(el.attr("opacity").as_deref(), Some("0.95"));
}

#[test]
fn zero_duration_fade_is_immediate() {
    let cfg = TooltipConfig { fade: Duration::ZERO, ..TooltipConfig::default() };
    let mut state = TooltipState::new(cfg);
    let handler = RecordTooltip::new(&common::scenario()[0]);
    handler.on_enter(&mut state, Point::new(0.0, 0.0));
    assert_eq!(state.opacity(), 0.95);
    assert!(!state.is_animating());
    handler.on_leave(&mut state);
    assert_eq!(state.opacity(), 0.0);
}

#[test]
fn leaving_mid_fade_starts_from_current_opacity() {
    let mut state = TooltipState::new(TooltipConfig::default());
    let content = TooltipContent::from_record(&common::scenario()[1]);
    state.show(content, Point::new(0.0, 0.0));
    state.advance(Duration::from_millis(20));
    let mid = state.opacity();
    assert!(approx(mid, 0.19));
    state.hide();
    assert!(approx(state.opacity(), mid));
    state.advance(Duration::from_millis(50));
    assert!(approx(state.opacity(), mid / 2.0));
    state.advance(Duration::from_millis(50));
    assert_eq!(state.opacity(), 0.0);
}

#[test]
fn box_size_follows_the_longest_row() {
    let tc = TooltipConfig { min_width: 300.0, ..TooltipConfig::default() };
    let short = TooltipContent::from_record(&common::scenario()[0]);
    let (w, h) = short.size(&tc);
    assert_eq!(w, tc.min_width);
    assert_eq!(h, tc.padding * 2.0 + tc.line_height * short.rows().len() as f64);

    let mut long = short.clone();
    long.doping = "x".repeat(100);
    let (w, _) = long.size(&tc);
    let chars = "Doping allegations: ".len() + 100;
    assert!((w - (chars as f64 * tc.font_size * tc.char_width + 2.0 * tc.padding)).abs() < 1e-9);
}
