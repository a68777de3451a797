use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Invalid-argument signals raised when calendar inputs break their preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("week start index {0} is out of range (expected 0 = Sunday ..= 6 = Saturday)")]
    InvalidWeekStart(u8),

    #[error("invalid date key '{0}' (expected canonical YYYY-MM-DD)")]
    InvalidDateKey(String),

    #[error("invalid month '{0}' (expected YYYY-MM)")]
    InvalidYearMonth(String),

    #[error("minimum month {min} is after maximum month {max}")]
    InvalidBounds { min: YearMonth, max: YearMonth },
}

// ============================================================================
// Date Key
// ============================================================================

/// Canonical `YYYY-MM-DD` identity of a calendar day.
///
/// Two keys are equal exactly when they name the same calendar day, so this is
/// the lookup key for event membership and cell identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDateKey(s.to_string()))?;
        let key = Self(date);

        // chrono accepts unpadded fields; keys must round-trip exactly
        if key.to_string() != s {
            return Err(CalendarError::InvalidDateKey(s.to_string()));
        }

        Ok(key)
    }
}

impl TryFrom<String> for DateKey {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

// ============================================================================
// Year / Month
// ============================================================================

/// A calendar month, the unit the grid is built for and navigation moves by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::InvalidYearMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`. Only year and month are kept.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Construction guarantees the first of the month is representable
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("YearMonth always holds a representable month")
    }

    /// Number of days, found as the day before the first of the following month.
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };

        // Only December of the last representable year has no successor
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map_or(31, |last| last.day())
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .with_day(self.days_in_month())
            .expect("days_in_month is a valid day of this month")
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// The following month, or `None` past chrono's representable range.
    pub fn succ(&self) -> Option<Self> {
        let (year, month) = if self.month == 12 {
            (self.year.checked_add(1)?, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).ok()
    }

    /// The preceding month, or `None` before chrono's representable range.
    pub fn pred(&self) -> Option<Self> {
        let (year, month) = if self.month == 1 {
            (self.year.checked_sub(1)?, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidYearMonth(s.to_string());

        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let year_digits = year.strip_prefix('-').unwrap_or(year);
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if month.len() != 2 || !all_digits(month) || !all_digits(year_digits) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Week Start
// ============================================================================

/// Maps a native weekday index (0 = Sunday ..= 6 = Saturday) onto `Weekday`.
pub fn weekday_from_index(index: u8) -> Result<Weekday, CalendarError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(CalendarError::InvalidWeekStart(other)),
    }
}

// ============================================================================
// Calendar Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// First column of every week row
    pub week_starts_on: Weekday,
    /// Always lay out 6 rows (42 cells) instead of just covering the month
    pub force_six_rows: bool,
    /// Earliest navigable month (day of month ignored)
    pub min_date: Option<NaiveDate>,
    /// Latest navigable month (day of month ignored)
    pub max_date: Option<NaiveDate>,
    pub events: HashSet<DateKey>,
    /// Day highlighted as "today"; not necessarily the wall-clock date
    pub today: NaiveDate,
}

impl CalendarConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week_starts_on: Weekday::Mon,
            force_six_rows: false,
            min_date: None,
            max_date: None,
            events: HashSet::new(),
            today,
        }
    }

    /// Config whose `today` is sampled from the local clock once, now.
    pub fn for_local_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_week_start(mut self, week_starts_on: Weekday) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    pub fn with_six_rows(mut self, force_six_rows: bool) -> Self {
        self.force_six_rows = force_six_rows;
        self
    }

    pub fn with_min_date(mut self, min_date: Option<NaiveDate>) -> Self {
        self.min_date = min_date;
        self
    }

    pub fn with_max_date(mut self, max_date: Option<NaiveDate>) -> Self {
        self.max_date = max_date;
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = DateKey>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn min_month(&self) -> Option<YearMonth> {
        self.min_date.map(YearMonth::of)
    }

    pub fn max_month(&self) -> Option<YearMonth> {
        self.max_date.map(YearMonth::of)
    }

    pub fn has_event(&self, date: NaiveDate) -> bool {
        self.events.contains(&DateKey::from(date))
    }
}

// ============================================================================
// Navigation State and Cells
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub reference_month: YearMonth,
    pub selected_date: Option<NaiveDate>,
}

/// One grid position, classified against the navigation state and config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellViewModel {
    pub date: NaiveDate,
    pub key: DateKey,
    pub day_of_month: u32,
    pub column_index: u32,
    pub is_today: bool,
    pub is_previous_month: bool,
    pub is_next_month: bool,
    pub has_event: bool,
    pub is_selected: bool,
}
