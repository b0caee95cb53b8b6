// File: crates/scatter-core/src/record.rs
// Summary: Race record model: raw dataset rows and their normalized form.
// Notes:
// - `RawRecord` mirrors the dataset's field names and accepts loosely typed input.
// - `RaceRecord` is produced once by `RawRecord::normalize` and never mutated after.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Deserialize;

use crate::error::ValidationError;

/// Finishing rank; the dataset uses integers but strings are tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Place {
    Rank(u32),
    Label(String),
}

impl Default for Place {
    fn default() -> Self { Place::Label(String::new()) }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Rank(n) => write!(f, "{n}"),
            Place::Label(s) => f.write_str(s),
        }
    }
}

/// `Year` as found in the dataset: a number, or a string holding one.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for RawYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawYear::Number(n) => write!(f, "{n}"),
            RawYear::Text(s) => f.write_str(s),
        }
    }
}

/// One row of the dataset exactly as it is delivered.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub year: Option<RawYear>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub place: Option<Place>,
    #[serde(default)]
    pub seconds: Option<i64>,
    #[serde(default)]
    pub doping: Option<String>,
    #[serde(default, rename = "URL")]
    pub url: Option<String>,
    #[serde(default, rename = "Doping_URL")]
    pub doping_url: Option<String>,
}

impl RawRecord {
    /// Validate and convert the row at position `index` of the dataset.
    pub fn normalize(self, index: usize) -> Result<RaceRecord, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField { index, field: "Name" })?;
        let nationality = self
            .nationality
            .ok_or(ValidationError::MissingField { index, field: "Nationality" })?;
        let raw_year = self.year.ok_or(ValidationError::MissingField { index, field: "Year" })?;
        let raw_time = self.time.ok_or(ValidationError::MissingField { index, field: "Time" })?;

        let year = parse_year(&raw_year)
            .ok_or_else(|| ValidationError::InvalidYear { index, value: raw_year.to_string() })?;
        let time: RaceTime = raw_time
            .parse()
            .map_err(|_| ValidationError::InvalidTime { index, value: raw_time.clone() })?;

        if let Some(seconds) = self.seconds {
            if seconds != time.total_seconds() {
                log::warn!(
                    "record {index} ({name}): Seconds={seconds} disagrees with Time={raw_time}; using Time"
                );
            }
        }

        Ok(RaceRecord {
            name,
            nationality,
            year,
            time,
            place: self.place.unwrap_or_default(),
            doping: self.doping.unwrap_or_default(),
            url: self.url.filter(|u| !u.is_empty()),
            doping_url: self.doping_url.filter(|u| !u.is_empty()),
        })
    }
}

fn parse_year(raw: &RawYear) -> Option<NaiveDateTime> {
    let y = match raw {
        RawYear::Number(n) => *n,
        RawYear::Text(s) => s.trim().parse().ok()?,
    };
    if !(1000..=9999).contains(&y) {
        return None;
    }
    year_start(i32::try_from(y).ok()?)
}

/// Midnight of January 1st of `year`.
pub fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Midnight of the day every elapsed race time is measured from.
pub fn elapsed_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// A finishing time of `minutes:seconds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaceTime {
    total_seconds: u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("expected minutes:seconds, got '{0}'")]
pub struct ParseRaceTimeError(String);

impl RaceTime {
    pub const fn from_seconds(total_seconds: u32) -> Self {
        Self { total_seconds }
    }

    pub fn minutes(&self) -> u32 { self.total_seconds / 60 }
    pub fn seconds(&self) -> u32 { self.total_seconds % 60 }
    pub fn total_seconds(&self) -> i64 { i64::from(self.total_seconds) }

    pub fn as_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.total_seconds())
    }

    /// The time as an instant on the elapsed-time epoch, e.g. `1900-01-01T00:36:55`.
    pub fn instant(&self) -> NaiveDateTime {
        elapsed_epoch() + self.as_delta()
    }
}

impl FromStr for RaceTime {
    type Err = ParseRaceTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRaceTimeError(s.to_owned());
        let (m, sec) = s.trim().split_once(':').ok_or_else(err)?;
        let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !digits(m) || !digits(sec) || sec.len() != 2 {
            return Err(err());
        }
        let minutes: u32 = m.parse().map_err(|_| err())?;
        let seconds: u32 = sec.parse().map_err(|_| err())?;
        if seconds >= 60 {
            return Err(err());
        }
        let total = minutes.checked_mul(60).and_then(|t| t.checked_add(seconds)).ok_or_else(err)?;
        Ok(Self { total_seconds: total })
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

/// A validated ride, ready to be plotted.
#[derive(Clone, Debug, PartialEq)]
pub struct RaceRecord {
    pub name: String,
    pub nationality: String,
    /// January 1st of the race year.
    pub year: NaiveDateTime,
    pub time: RaceTime,
    pub place: Place,
    /// Allegation text; empty when there is none.
    pub doping: String,
    pub url: Option<String>,
    pub doping_url: Option<String>,
}

impl RaceRecord {
    pub fn calendar_year(&self) -> i32 {
        chrono::Datelike::year(&self.year)
    }

    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    /// Allegation text for display, `"None"` when there is no allegation.
    pub fn allegation_text(&self) -> &str {
        if self.has_allegation() { &self.doping } else { "None" }
    }
}

/// One dataset row after decoding: either well-typed fields, or the reason it
/// could not be decoded at all.
#[derive(Clone, Debug)]
pub enum RawRow {
    Record(RawRecord),
    Malformed(String),
}

impl RawRow {
    pub fn normalize(self, index: usize) -> Result<RaceRecord, ValidationError> {
        match self {
            RawRow::Record(r) => r.normalize(index),
            RawRow::Malformed(reason) => Err(ValidationError::Malformed { index, reason }),
        }
    }
}

impl From<RawRecord> for RawRow {
    fn from(r: RawRecord) -> Self { RawRow::Record(r) }
}

/// Normalize a whole dataset, stopping at the first invalid row.
pub fn normalize_all<R: Into<RawRow>>(raw: Vec<R>) -> Result<Vec<RaceRecord>, ValidationError> {
    raw.into_iter().enumerate().map(|(i, r)| Into::<RawRow>::into(r).normalize(i)).collect()
}
