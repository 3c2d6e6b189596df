//! Typed monthly consumption series and its ordering invariants.

use std::fmt;

use chrono::NaiveDate;

/// Calendar-month identifier used as the period key for all records.
///
/// Parses strictly from `"YYYY-MM"` and resolves to the first day of the
/// month, so ordering is chronological. Derived `Ord` compares `(year,
/// month)`, which matches date order.
///
/// # Examples
///
/// ```
/// use solar_report::data::series::Month;
///
/// let m = Month::parse("2025-03").unwrap();
/// assert_eq!(m.to_string(), "2025-03");
/// assert!(m < Month::parse("2025-04").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month from its components.
    ///
    /// Returns `None` when the pair does not name a calendar month
    /// (month outside 1..=12 or a year chrono cannot represent).
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// Parses a `"YYYY-MM"` period string.
    ///
    /// Leading/trailing whitespace is ignored. Returns `None` for anything
    /// that does not resolve to a calendar month.
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month)
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month, the date this period sorts by.
    pub fn first_day(&self) -> NaiveDate {
        // new() validated the pair, so this cannot fail.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One month of metered consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionRecord {
    /// Billing month this reading covers.
    pub month: Month,
    /// Metered energy in kWh; `None` marks an unparsable ("missing") reading.
    ///
    /// Missing readings are excluded from numeric aggregates but keep their
    /// place in the sequence for display and export.
    pub kwh: Option<f64>,
}

impl ConsumptionRecord {
    /// Convenience constructor.
    pub fn new(month: Month, kwh: Option<f64>) -> Self {
        Self { month, kwh }
    }
}

/// Error returned when two records share the same billing month.
///
/// Duplicates are rejected outright rather than deduplicated: silently
/// preferring one reading over the other would hide a defect in the source
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateMonth(pub Month);

impl fmt::Display for DuplicateMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate month {} in consumption series", self.0)
    }
}

impl std::error::Error for DuplicateMonth {}

/// Immutable snapshot of a monthly consumption series.
///
/// Invariants, enforced at construction: records are unique by month and
/// sorted ascending by month. The series is never mutated after creation;
/// a new load replaces it wholesale.
///
/// # Examples
///
/// ```
/// use solar_report::data::series::{ConsumptionRecord, ConsumptionSeries, Month};
///
/// let records = vec![
///     ConsumptionRecord::new(Month::parse("2025-02").unwrap(), Some(398.7)),
///     ConsumptionRecord::new(Month::parse("2025-01").unwrap(), Some(410.2)),
/// ];
/// let series = ConsumptionSeries::new(records).unwrap();
/// assert_eq!(series.records()[0].month.to_string(), "2025-01");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsumptionSeries {
    records: Vec<ConsumptionRecord>,
}

impl ConsumptionSeries {
    /// Builds a series from records in any order.
    ///
    /// Sorts ascending by month and rejects duplicate months.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateMonth`] when two records share a month.
    pub fn new(mut records: Vec<ConsumptionRecord>) -> Result<Self, DuplicateMonth> {
        records.sort_by_key(|r| r.month);
        for pair in records.windows(2) {
            if pair[0].month == pair[1].month {
                return Err(DuplicateMonth(pair[0].month));
            }
        }
        Ok(Self { records })
    }

    /// The records in ascending month order.
    pub fn records(&self) -> &[ConsumptionRecord] {
        &self.records
    }

    /// Number of records, missing readings included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last month covered, when the series is non-empty.
    pub fn span(&self) -> Option<(Month, Month)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.month, last.month)),
            _ => None,
        }
    }

    /// Iterator over the non-missing kWh readings in month order.
    pub fn known_kwh(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(|r| r.kwh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> Month {
        Month::parse(s).expect("valid test month")
    }

    #[test]
    fn month_parses_and_displays() {
        let m = month("2025-07");
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 7);
        assert_eq!(m.to_string(), "2025-07");
    }

    #[test]
    fn month_parse_rejects_garbage() {
        assert!(Month::parse("2025").is_none());
        assert!(Month::parse("2025-00").is_none());
        assert!(Month::parse("2025-13").is_none());
        assert!(Month::parse("rooftop").is_none());
        assert!(Month::parse("").is_none());
    }

    #[test]
    fn month_parse_accepts_surrounding_whitespace() {
        assert_eq!(Month::parse(" 2025-05 "), Some(month("2025-05")));
    }

    #[test]
    fn month_order_is_chronological() {
        assert!(month("2024-12") < month("2025-01"));
        assert!(month("2025-01") < month("2025-02"));
    }

    #[test]
    fn first_day_resolves_to_start_of_month() {
        let d = month("2025-03").first_day();
        assert_eq!((d.to_string()), "2025-03-01");
    }

    #[test]
    fn series_sorts_any_input_order() {
        let records = vec![
            ConsumptionRecord::new(month("2025-03"), Some(450.1)),
            ConsumptionRecord::new(month("2025-01"), Some(410.2)),
            ConsumptionRecord::new(month("2025-02"), Some(398.7)),
        ];
        let series = ConsumptionSeries::new(records).expect("unique months");
        let months: Vec<String> = series
            .records()
            .iter()
            .map(|r| r.month.to_string())
            .collect();
        assert_eq!(months, vec!["2025-01", "2025-02", "2025-03"]);
    }

    #[test]
    fn series_rejects_duplicate_months() {
        let records = vec![
            ConsumptionRecord::new(month("2025-01"), Some(410.2)),
            ConsumptionRecord::new(month("2025-01"), Some(398.7)),
        ];
        let err = ConsumptionSeries::new(records).expect_err("duplicate must fail");
        assert_eq!(err, DuplicateMonth(month("2025-01")));
        assert!(err.to_string().contains("2025-01"));
    }

    #[test]
    fn series_keeps_missing_readings_in_place() {
        let records = vec![
            ConsumptionRecord::new(month("2025-02"), None),
            ConsumptionRecord::new(month("2025-01"), Some(410.2)),
        ];
        let series = ConsumptionSeries::new(records).expect("unique months");
        assert_eq!(series.len(), 2);
        assert_eq!(series.records()[1].kwh, None);
        let known: Vec<f64> = series.known_kwh().collect();
        assert_eq!(known, vec![410.2]);
    }

    #[test]
    fn empty_series_has_no_span() {
        let series = ConsumptionSeries::new(Vec::new()).expect("empty is fine");
        assert!(series.is_empty());
        assert_eq!(series.span(), None);
    }
}
