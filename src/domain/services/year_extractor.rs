use crate::config::constants::MIN_RELEASE_YEAR;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static YEAR_AT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\b").expect("year pattern is valid"));
static YEAR_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})$").expect("year pattern is valid"));
static YEAR_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("year pattern is valid"));

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

// Steam store pages use both "12 Dec, 2015" and "Dec 12, 2015".
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b, %Y",
    "%b %d, %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%m/%d/%Y",
];

/// Pulls a release year out of the loosely typed `release_date` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearExtractor {
    max_year: i32,
}

impl YearExtractor {
    /// Accepts years up to one after `current_year`, for announced releases.
    #[must_use]
    pub const fn new(current_year: i32) -> Self {
        Self {
            max_year: current_year.saturating_add(1),
        }
    }

    #[must_use]
    pub const fn min_year(self) -> i32 {
        MIN_RELEASE_YEAR
    }

    #[must_use]
    pub const fn max_year(self) -> i32 {
        self.max_year
    }

    #[must_use]
    pub fn in_range(self, year: i32) -> bool {
        (MIN_RELEASE_YEAR..=self.max_year).contains(&year)
    }

    /// Returns the release year, or `None` when no plausible year is present.
    ///
    /// Proper dates are parsed first; otherwise a four-digit year is looked
    /// for at the start, then the end, then anywhere in the value.
    #[must_use]
    pub fn extract(self, raw: Option<&str>) -> Option<i32> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(year) = parse_date(raw).filter(|year| self.in_range(*year)) {
            return Some(year);
        }

        [&*YEAR_AT_START, &*YEAR_AT_END]
            .into_iter()
            .filter_map(|regex| regex.captures(raw))
            .chain(YEAR_ANYWHERE.captures_iter(raw))
            .filter_map(|captures| captures.get(1)?.as_str().parse::<i32>().ok())
            .find(|year| self.in_range(*year))
    }

    /// Parses a client supplied year filter.
    #[must_use]
    pub fn parse_filter(self, raw: &str) -> Option<i32> {
        raw.trim()
            .parse::<i32>()
            .ok()
            .filter(|year| self.in_range(*year))
    }
}

fn parse_date(raw: &str) -> Option<i32> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.year());
    }
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(datetime.year());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .map(|date| date.year())
}
