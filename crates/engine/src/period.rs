//! Calendar periods used to bucket records.
//!
//! A [`Period`] is a `(year, month)` pair. It orders chronologically, so a
//! `BTreeMap<Period, _>` iterates months in date order regardless of how
//! the `"Mon-YY"` display key would sort as a string.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month of a given year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodParts", into = "PeriodParts")]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Serialize, Deserialize)]
struct PeriodParts {
    year: i32,
    month: u32,
}

impl TryFrom<PeriodParts> for Period {
    type Error = EngineError;

    fn try_from(value: PeriodParts) -> Result<Self, Self::Error> {
        Period::new(value.year, value.month)
    }
}

impl From<Period> for PeriodParts {
    fn from(value: Period) -> Self {
        Self {
            year: value.year,
            month: value.month,
        }
    }
}

impl Period {
    /// Build a period, `month` is 1-based.
    pub fn new(year: i32, month: u32) -> ResultEngine<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::validation(
                "month",
                format!("{month} is not in 1..=12"),
            ));
        }
        if !(1..=9999).contains(&year) {
            return Err(EngineError::validation(
                "year",
                format!("{year} is not in 1..=9999"),
            ));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Build a period from a month name (`"February"` or `"Feb"`, any case).
    pub fn from_month_name(year: i32, name: &str) -> ResultEngine<Self> {
        let month = parse_month_name(name).ok_or_else(|| {
            EngineError::validation("month", format!("unknown month name '{}'", name.trim()))
        })?;
        Self::new(year, month)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Full English month name, the form stored on monthly snapshots.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Display key, e.g. `"Feb-25"`.
    pub fn label(self) -> String {
        format!("{}-{:02}", &self.month_name()[..3], self.year.rem_euclid(100))
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Inclusive date range covering the whole month.
    pub fn date_range(self) -> DateRange {
        DateRange {
            start: Some(self.first_day()),
            end: Some(self.last_day()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn parse_month_name(name: &str) -> Option<u32> {
    let needle = name.trim().to_ascii_lowercase();
    if needle.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|full| {
            let full = full.to_ascii_lowercase();
            full == needle || full[..3] == needle
        })
        .map(|index| index as u32 + 1)
}

/// Inclusive, optionally open-ended date range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ResultEngine<Self> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(EngineError::validation(
                "date_range",
                "start must not be after end",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Periods touched by the range, used for salary rows keyed by month.
    pub(crate) fn period_bounds(&self) -> (Option<Period>, Option<Period>) {
        (
            self.start.map(Period::from_date),
            self.end.map(Period::from_date),
        )
    }
}

/// Optional month/year filter applied to records before bucketing.
///
/// Either part may be omitted: `month` alone selects that month in every
/// year, `year` alone selects the whole year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl PeriodFilter {
    pub fn new(month: Option<u32>, year: Option<i32>) -> ResultEngine<Self> {
        if let Some(month) = month
            && !(1..=12).contains(&month)
        {
            return Err(EngineError::validation(
                "month",
                format!("{month} is not in 1..=12"),
            ));
        }
        Ok(Self { month, year })
    }

    pub fn period(period: Period) -> Self {
        Self {
            month: Some(period.month()),
            year: Some(period.year()),
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            month: None,
            year: Some(year),
        }
    }

    pub fn matches(&self, period: Period) -> bool {
        self.month.is_none_or(|month| month == period.month())
            && self.year.is_none_or(|year| year == period.year())
    }

    /// Narrowest date range that can contain matching records.
    pub fn date_range(&self) -> DateRange {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Period::new(year, month)
                .map(Period::date_range)
                .unwrap_or_default(),
            (Some(year), None) => DateRange {
                start: NaiveDate::from_ymd_opt(year, 1, 1),
                end: NaiveDate::from_ymd_opt(year, 12, 31),
            },
            _ => DateRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn label_uses_short_month_and_two_digit_year() {
        assert_eq!(Period::new(2025, 2).unwrap().label(), "Feb-25");
        assert_eq!(Period::new(2009, 12).unwrap().label(), "Dec-09");
        assert_eq!(Period::new(2100, 1).unwrap().to_string(), "Jan-00");
    }

    #[test]
    fn ordering_is_chronological_across_centuries() {
        let mut periods = vec![
            Period::new(2100, 1).unwrap(),
            Period::new(1999, 12).unwrap(),
            Period::new(2025, 2).unwrap(),
            Period::new(2025, 11).unwrap(),
        ];
        periods.sort();
        let labels: Vec<_> = periods.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Dec-99", "Feb-25", "Nov-25", "Jan-00"]);
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(Period::new(2025, 0).is_err());
        assert!(Period::new(2025, 13).is_err());
        assert!(PeriodFilter::new(Some(13), None).is_err());
    }

    #[test]
    fn parses_month_names() {
        assert_eq!(Period::from_month_name(2025, "February").unwrap().month(), 2);
        assert_eq!(Period::from_month_name(2025, " sep ").unwrap().month(), 9);
        assert!(Period::from_month_name(2025, "Ju").is_err());
        assert!(Period::from_month_name(2025, "Smarch").is_err());
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        assert_eq!(Period::new(2024, 2).unwrap().last_day(), date(2024, 2, 29));
        assert_eq!(Period::new(2025, 12).unwrap().last_day(), date(2025, 12, 31));
        assert_eq!(Period::new(2025, 12).unwrap().next(), Period::new(2026, 1).unwrap());
    }

    #[test]
    fn filter_matches_partial_specifications() {
        let feb_25 = Period::new(2025, 2).unwrap();
        let feb_24 = Period::new(2024, 2).unwrap();
        let month_only = PeriodFilter::new(Some(2), None).unwrap();
        assert!(month_only.matches(feb_25) && month_only.matches(feb_24));
        let year_only = PeriodFilter::year(2025);
        assert!(year_only.matches(feb_25) && !year_only.matches(feb_24));
        assert!(PeriodFilter::default().matches(feb_24));
        assert_eq!(month_only.date_range(), DateRange::default());
        assert_eq!(
            PeriodFilter::period(feb_25).date_range(),
            DateRange {
                start: Some(date(2025, 2, 1)),
                end: Some(date(2025, 2, 28)),
            }
        );
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        assert!(DateRange::new(Some(date(2025, 3, 1)), Some(date(2025, 2, 1))).is_err());
        let range = DateRange::new(Some(date(2025, 2, 1)), None).unwrap();
        assert!(range.contains(date(2030, 1, 1)));
        assert!(!range.contains(date(2025, 1, 31)));
    }

    #[test]
    fn deserialization_validates_month() {
        let ok: Period = serde_json::from_str(r#"{"year":2025,"month":2}"#).unwrap();
        assert_eq!(ok.label(), "Feb-25");
        assert!(serde_json::from_str::<Period>(r#"{"year":2025,"month":14}"#).is_err());
    }
}
