// File: crates/scatter-core/tests/scale.rs
// Purpose: Validate year/elapsed scales: padding, inversion, nice rounding and ticks.

mod common;

use scatter_core::scale::{format_elapsed_tick, tick_step};
use scatter_core::{ChartRenderer, ElapsedScale, RaceTime, ScaleTransform, YearScale};

#[test]
fn x_domain_is_padded_by_one_year() {
    let renderer = ChartRenderer::default();
    let (x, _) = renderer.scales(&common::scenario()).expect("scales");
    assert_eq!(x.domain_years(), (1993, 1997));
    assert_eq!(x.range(), (0.0, 770.0));

    let (x, _) = renderer.scales(&common::sample()).expect("scales");
    assert_eq!(x.domain_years(), (1993, 2016));
}

#[test]
fn x_positions_follow_the_calendar() {
    let x = YearScale::padded(1994, 1996, 1, (0.0, 770.0)).unwrap();
    let a = x.year_to_px(1994).unwrap();
    let b = x.year_to_px(1996).unwrap();
    assert_eq!(x.year_to_px(1993), Some(0.0));
    assert_eq!(x.year_to_px(1997), Some(770.0));
    // 365 and 1095 of 1461 days (1996 is a leap year).
    assert!((a - 770.0 * 365.0 / 1461.0).abs() < 1e-6);
    assert!((b - 770.0 * 1095.0 / 1461.0).abs() < 1e-6);
}

#[test]
fn faster_times_plot_higher() {
    let records = common::sample();
    let (_, y) = ChartRenderer::default().scales(&records).expect("scales");
    for a in &records {
        for b in &records {
            if a.time < b.time {
                assert!(y.to_px(&a.time) < y.to_px(&b.time), "{} should be above {}", a.time, b.time);
            }
        }
    }
}

#[test]
fn y_domain_is_nice_rounded_to_interval_boundaries() {
    // 36:50 .. 39:50 spans 180s; ~10 ticks asks for 18s, nearest clock interval is 15s.
    let (_, y) = ChartRenderer::default().scales(&common::sample()).expect("scales");
    assert_eq!(y.tick_interval(10), 15.0);
    let (d0, d1) = y.domain_seconds();
    assert_eq!((d0.min(d1), d0.max(d1)), (2205.0, 2400.0));
    assert_eq!(y.range(), (350.0, 0.0));

    // 36:55 .. 38:01 spans 66s: 5s interval; the fastest bound is already aligned.
    let (_, y) = ChartRenderer::default().scales(&common::scenario()).expect("scales");
    let (d0, d1) = y.domain_seconds();
    assert_eq!((d0.min(d1), d0.max(d1)), (2215.0, 2285.0));
}

#[test]
fn elapsed_ticks_land_on_the_interval() {
    let y = ElapsedScale::new((RaceTime::from_seconds(2205), RaceTime::from_seconds(2400)), (350.0, 0.0));
    let ticks = y.ticks(10);
    assert_eq!(ticks.first(), Some(&2205.0));
    assert_eq!(ticks.last(), Some(&2400.0));
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 15.0));
    assert_eq!(format_elapsed_tick(2205.0), "36:45");
    assert_eq!(format_elapsed_tick(2400.0), "40:00");
}

#[test]
fn degenerate_domain_maps_to_the_middle() {
    let t = RaceTime::from_seconds(2215);
    let y = ElapsedScale::new((t, t), (350.0, 0.0));
    assert_eq!(y.to_px(&t), 175.0);
}

#[test]
fn invert_round_trips_pixels() {
    let x = YearScale::padded(1994, 2015, 1, (0.0, 770.0)).unwrap();
    let t = x.from_px(x.year_to_px(2000).unwrap());
    assert_eq!(chrono::Datelike::year(&t), 2000);

    let y = ElapsedScale::from_seconds((2205.0, 2400.0), (350.0, 0.0));
    assert_eq!(y.from_px(0.0), RaceTime::from_seconds(2400));
}

#[test]
fn tick_step_uses_1_2_5_multiples() {
    assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
    assert_eq!(tick_step(0.0, 23.0, 10), 2.0);
    assert_eq!(tick_step(0.0, 40.0, 10), 5.0);
    assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_step(5.0, 5.0, 10), 0.0);
}

#[test]
fn year_ticks_skip_by_step() {
    let x = YearScale::padded(1994, 2015, 1, (0.0, 770.0)).unwrap();
    let ticks = x.ticks(10);
    assert_eq!(ticks.first(), Some(&1994));
    assert_eq!(ticks.last(), Some(&2016));
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 2));

    let narrow = YearScale::padded(1994, 1996, 1, (0.0, 770.0)).unwrap();
    assert_eq!(narrow.ticks(10), vec![1993, 1994, 1995, 1996, 1997]);
}
