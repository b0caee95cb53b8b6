// File: crates/scatter-core/src/scale.rs
// Summary: Year (X) and elapsed-time (Y) scale transforms with tick generation and nice rounding.

use chrono::{Datelike, NaiveDateTime};

use crate::record::{elapsed_epoch, year_start, RaceTime};

/// Milliseconds in a 365-day year, used to size year tick steps.
const YEAR_MS: f64 = 365.0 * 24.0 * 3600.0 * 1000.0;
const DAY_SECS: f64 = 24.0 * 3600.0;

/// Candidate tick intervals for elapsed times, in seconds.
const ELAPSED_INTERVALS: [f64; 13] = [
    1.0, 5.0, 15.0, 30.0, 60.0, 300.0, 900.0, 1800.0, 3600.0, 10800.0, 21600.0, 43200.0, DAY_SECS,
];

/// General scale transform between a domain value and a pixel offset.
pub trait ScaleTransform {
    type Value;
    fn to_px(&self, v: &Self::Value) -> f64;
    fn from_px(&self, px: f64) -> Self::Value;
    fn domain(&self) -> (Self::Value, Self::Value);
    fn range(&self) -> (f64, f64);
}

/// Continuous linear mapping shared by both scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearMap {
    pub const fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1 }
    }

    /// A degenerate domain maps every value to the middle of the range.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        let t = if span.abs() < f64::EPSILON { 0.5 } else { (v - self.d0) / span };
        self.r0 + t * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        let t = if span.abs() < f64::EPSILON { 0.5 } else { (px - self.r0) / span };
        self.d0 + t * (self.d1 - self.d0)
    }
}

/// Step between ticks for `count` ticks over `[start, stop]`: 1, 2 or 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    if step0 == 0.0 || !step0.is_finite() {
        return 0.0;
    }
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= 50f64.sqrt() {
        step1 *= 10.0;
    } else if error >= 10f64.sqrt() {
        step1 *= 5.0;
    } else if error >= 2f64.sqrt() {
        step1 *= 2.0;
    }
    if stop < start { -step1 } else { step1 }
}

fn millis(t: &NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

fn from_millis(ms: f64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp_millis(ms.round() as i64)
        .map(|d| d.naive_utc())
        .unwrap_or_default()
}

/// Horizontal time scale over calendar instants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearScale {
    domain: (NaiveDateTime, NaiveDateTime),
    map: LinearMap,
}

impl YearScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        let map = LinearMap::new(millis(&domain.0), millis(&domain.1), range.0, range.1);
        Self { domain, map }
    }

    /// Domain spanning `[first - padding, last + padding]` whole years.
    pub fn padded(first: i32, last: i32, padding: i32, range: (f64, f64)) -> Option<Self> {
        let lo = year_start(first.checked_sub(padding)?)?;
        let hi = year_start(last.checked_add(padding)?)?;
        Some(Self::new((lo, hi), range))
    }

    /// Calendar years of the domain bounds.
    pub fn domain_years(&self) -> (i32, i32) {
        (self.domain.0.year(), self.domain.1.year())
    }

    /// Years whose January 1st lies inside the domain, every `step` years.
    pub fn ticks(&self, count: usize) -> Vec<i32> {
        let (lo, hi) = (self.map.d0.min(self.map.d1), self.map.d0.max(self.map.d1));
        let step = (tick_step(lo / YEAR_MS, hi / YEAR_MS, count).round() as i32).max(1);
        let (y0, y1) = self.domain_years();
        (y0.min(y1)..=y0.max(y1)).filter(|y| y.rem_euclid(step) == 0).collect()
    }

    /// Pixel offset of January 1st of `year`.
    pub fn year_to_px(&self, year: i32) -> Option<f64> {
        year_start(year).map(|t| self.to_px(&t))
    }
}

impl ScaleTransform for YearScale {
    type Value = NaiveDateTime;

    fn to_px(&self, v: &NaiveDateTime) -> f64 { self.map.apply(millis(v)) }
    fn from_px(&self, px: f64) -> NaiveDateTime { from_millis(self.map.invert(px)) }
    fn domain(&self) -> (NaiveDateTime, NaiveDateTime) { self.domain }
    fn range(&self) -> (f64, f64) { (self.map.r0, self.map.r1) }
}

/// Vertical time scale over elapsed race times, in seconds since the elapsed epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElapsedScale {
    map: LinearMap,
}

impl ElapsedScale {
    pub fn new(domain: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        Self::from_seconds(
            (domain.0.total_seconds() as f64, domain.1.total_seconds() as f64),
            range,
        )
    }

    pub fn from_seconds(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { map: LinearMap::new(domain.0, domain.1, range.0, range.1) }
    }

    pub fn domain_seconds(&self) -> (f64, f64) { (self.map.d0, self.map.d1) }

    /// Interval (seconds) closest to `span / count` among the usual clock intervals.
    pub fn tick_interval(&self, count: usize) -> f64 {
        let (lo, hi) = self.bounds();
        let target = (hi - lo) / count.max(1) as f64;
        let i = ELAPSED_INTERVALS.partition_point(|iv| *iv <= target);
        if i == 0 {
            ELAPSED_INTERVALS[0]
        } else if i == ELAPSED_INTERVALS.len() {
            tick_step(lo / DAY_SECS, hi / DAY_SECS, count).max(1.0) * DAY_SECS
        } else {
            let (below, above) = (ELAPSED_INTERVALS[i - 1], ELAPSED_INTERVALS[i]);
            if target / below < above / target { below } else { above }
        }
    }

    /// Extend the domain outwards to the nearest tick interval boundaries.
    pub fn nice(self, count: usize) -> Self {
        let step = self.tick_interval(count);
        let (d0, d1) = (self.map.d0, self.map.d1);
        let (lo, hi) = ((d0.min(d1) / step).floor() * step, (d0.max(d1) / step).ceil() * step);
        let domain = if d0 <= d1 { (lo, hi) } else { (hi, lo) };
        Self { map: LinearMap::new(domain.0, domain.1, self.map.r0, self.map.r1) }
    }

    /// Tick values (seconds) at multiples of the tick interval inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.bounds();
        let step = self.tick_interval(count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }

    pub fn seconds_to_px(&self, seconds: f64) -> f64 { self.map.apply(seconds) }

    fn bounds(&self) -> (f64, f64) {
        (self.map.d0.min(self.map.d1), self.map.d0.max(self.map.d1))
    }
}

impl ScaleTransform for ElapsedScale {
    type Value = RaceTime;

    fn to_px(&self, v: &RaceTime) -> f64 { self.map.apply(v.total_seconds() as f64) }

    fn from_px(&self, px: f64) -> RaceTime {
        RaceTime::from_seconds(self.map.invert(px).round().max(0.0) as u32)
    }

    fn domain(&self) -> (RaceTime, RaceTime) {
        let secs = |s: f64| RaceTime::from_seconds(s.round().max(0.0) as u32);
        (secs(self.map.d0), secs(self.map.d1))
    }

    fn range(&self) -> (f64, f64) { (self.map.r0, self.map.r1) }
}

/// `%M:%S` rendering of an elapsed-time tick, as it reads on a wall clock.
pub fn format_elapsed_tick(seconds: f64) -> String {
    let instant = elapsed_epoch() + chrono::TimeDelta::seconds(seconds.round() as i64);
    instant.format("%M:%S").to_string()
}
