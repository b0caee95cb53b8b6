// File: crates/scatter-core/src/source.rs
// Summary: Fetches the dataset from a URL or local file and normalizes it into race records.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::DATA_URL;
use crate::error::{DataLoadError, Result, ValidationError};
use crate::record::{RaceRecord, RawRecord, RawRow};

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// URLs start with `http://` or `https://`; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(raw.trim().to_owned())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self { DataSource::Url(DATA_URL.to_owned()) }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(u) => f.write_str(u),
            DataSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// What to do with records that fail validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidRecordPolicy {
    /// The first invalid record aborts loading.
    #[default]
    Abort,
    /// Invalid records are logged and left out.
    Skip,
}

/// Fetch and decode the raw rows. No retries.
pub fn load_raw(source: &DataSource) -> Result<Vec<RawRow>, DataLoadError> {
    match source {
        DataSource::Url(url) => fetch_json(url),
        DataSource::File(path) => read_file(path),
    }
}

fn fetch_json(url: &str) -> Result<Vec<RawRow>, DataLoadError> {
    log::info!("fetching dataset from {url}");
    let http = |source| DataLoadError::Http { url: url.to_owned(), source };
    let resp = reqwest::blocking::get(url).map_err(http)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DataLoadError::Status { url: url.to_owned(), status: status.as_u16() });
    }
    let body = resp.bytes().map_err(http)?;
    parse_json(&body)
}

fn read_file(path: &Path) -> Result<Vec<RawRow>, DataLoadError> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase());
    log::info!("reading dataset from {}", path.display());
    let io = |source| DataLoadError::Io { path: path.display().to_string(), source };
    match ext.as_deref() {
        Some("json") => parse_json(&std::fs::read(path).map_err(io)?),
        Some("csv") => parse_csv(std::fs::File::open(path).map_err(io)?),
        _ => Err(DataLoadError::Unsupported(path.display().to_string())),
    }
}

/// Decode a JSON array of dataset rows. Only the array itself must be well formed;
/// an element with mistyped fields becomes a `RawRow::Malformed`.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<RawRow>, DataLoadError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let rows = values
        .into_iter()
        .map(|v| match serde_json::from_value::<RawRecord>(v) {
            Ok(r) => RawRow::Record(r),
            Err(e) => RawRow::Malformed(e.to_string()),
        })
        .collect();
    Ok(rows)
}

/// Decode CSV rows whose headers use the dataset's field names.
pub fn parse_csv<R: std::io::Read>(reader: R) -> Result<Vec<RawRow>, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize::<RawRecord>() {
        match row {
            Ok(r) => rows.push(RawRow::Record(r)),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => rows.push(RawRow::Malformed(e.to_string())),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(rows)
}

/// Validate every row. The dataset must end up non-empty.
pub fn normalize<R: Into<RawRow>>(raw: Vec<R>, policy: InvalidRecordPolicy) -> Result<Vec<RaceRecord>, ValidationError> {
    let total = raw.len();
    let records = match policy {
        InvalidRecordPolicy::Abort => crate::record::normalize_all(raw)?,
        InvalidRecordPolicy::Skip => raw
            .into_iter()
            .enumerate()
            .filter_map(|(i, r)| match Into::<RawRow>::into(r).normalize(i) {
                Ok(rec) => Some(rec),
                Err(e) => {
                    log::warn!("skipping invalid record: {e}");
                    None
                }
            })
            .collect(),
    };
    if records.is_empty() {
        return Err(ValidationError::EmptyDataset);
    }
    if records.len() < total {
        log::warn!("kept {} of {} records", records.len(), total);
    }
    Ok(records)
}

/// Load, decode and normalize in one step.
pub fn load_records(source: &DataSource, policy: InvalidRecordPolicy) -> Result<Vec<RaceRecord>> {
    let raw = load_raw(source)?;
    log::debug!("decoded {} raw records", raw.len());
    Ok(normalize(raw, policy)?)
}
