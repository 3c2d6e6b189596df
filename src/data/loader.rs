//! Consumption series loading and boundary validation.
//!
//! The loader is the only place the record schema is trusted-checked:
//! `month` must be a `"YYYY-MM"` string and `kwh` a number or null. Energy
//! values that fail coercion become missing readings; a period that fails to
//! parse fails the whole load, since sort order is meaningless without it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::data::sample::sample_series;
use crate::data::series::{ConsumptionRecord, ConsumptionSeries, DuplicateMonth, Month};

/// Where a loaded series came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesSource {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// Built-in sample, used when the file was absent or unreadable.
    Sample,
}

impl SeriesSource {
    /// Whether this series is the built-in fallback.
    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample)
    }
}

impl fmt::Display for SeriesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Sample => write!(f, "built-in sample"),
        }
    }
}

/// A loaded series together with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSeries {
    /// The normalized, sorted series.
    pub series: ConsumptionSeries,
    /// Where the records came from.
    pub source: SeriesSource,
}

/// Why a present consumption file could not be loaded.
///
/// A missing or unreadable file is deliberately *not* an error: [`load`]
/// falls back to the built-in sample so the report never blocks. Everything
/// here is a defect in a file that was successfully read.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The body is not a JSON array of records.
    Malformed {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message or shape description.
        detail: String,
    },
    /// A record's period is missing, not a string, or not a calendar month.
    MalformedPeriod {
        /// File that failed to parse.
        path: PathBuf,
        /// Zero-based index of the offending record.
        index: usize,
        /// What was wrong with the period field.
        detail: String,
    },
    /// Two records name the same month.
    DuplicateMonth {
        /// File that failed to parse.
        path: PathBuf,
        /// The month that appears more than once.
        month: Month,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { path, detail } => {
                write!(f, "cannot parse \"{}\": {detail}", path.display())
            }
            Self::MalformedPeriod {
                path,
                index,
                detail,
            } => write!(
                f,
                "cannot parse \"{}\": record {index}: {detail}",
                path.display()
            ),
            Self::DuplicateMonth { path, month } => write!(
                f,
                "cannot parse \"{}\": duplicate month {month}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Loads the consumption series from `path`.
///
/// An absent or unreadable file yields the built-in sample series — the
/// report must never block on a missing source. A file that *can* be read
/// must parse cleanly.
///
/// # Errors
///
/// Returns a [`LoadError`] when the body is not a JSON record array, a
/// period fails to resolve to a month, or a month appears twice.
pub fn load(path: &Path) -> Result<LoadedSeries, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            return Ok(LoadedSeries {
                series: sample_series(),
                source: SeriesSource::Sample,
            });
        }
    };

    let series = parse_series(path, &raw)?;
    Ok(LoadedSeries {
        series,
        source: SeriesSource::File(path.to_path_buf()),
    })
}

/// Parses a record array into a sorted series.
fn parse_series(path: &Path, raw: &str) -> Result<ConsumptionSeries, LoadError> {
    let body: Value = serde_json::from_str(raw).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let entries = body.as_array().ok_or_else(|| LoadError::Malformed {
        path: path.to_path_buf(),
        detail: "expected a top-level array of { month, kwh } records".to_string(),
    })?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        records.push(parse_record(path, index, entry)?);
    }

    ConsumptionSeries::new(records).map_err(|DuplicateMonth(month)| LoadError::DuplicateMonth {
        path: path.to_path_buf(),
        month,
    })
}

/// Validates one record against the (month: string, kwh: number|null) schema.
fn parse_record(path: &Path, index: usize, entry: &Value) -> Result<ConsumptionRecord, LoadError> {
    let malformed_period = |detail: String| LoadError::MalformedPeriod {
        path: path.to_path_buf(),
        index,
        detail,
    };

    let object = entry
        .as_object()
        .ok_or_else(|| malformed_period("expected an object with \"month\" and \"kwh\"".into()))?;

    let period = object
        .get("month")
        .ok_or_else(|| malformed_period("missing \"month\" field".into()))?;
    let period = period
        .as_str()
        .ok_or_else(|| malformed_period("\"month\" must be a string".into()))?;
    let month = Month::parse(period)
        .ok_or_else(|| malformed_period(format!("\"{period}\" is not a YYYY-MM month")))?;

    Ok(ConsumptionRecord::new(month, coerce_kwh(object.get("kwh"))))
}

/// Coerces the energy field to a reading, or to the missing marker.
///
/// Numbers pass through, numeric strings are accepted (sources exported from
/// spreadsheets quote their numbers), and anything else — null, text, a
/// missing field — is a missing reading, never a load failure.
fn coerce_kwh(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
