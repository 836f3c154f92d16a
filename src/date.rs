use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{self, Day, Month, WeekdayIndex, Year};

/// A concrete, day-granular calendar date.
///
/// Field order is year, month, day, so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {}", _0)]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", _0, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", _0, MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {} for month {}-{:02}", day, year, month)]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid weekday index: {} (must be 0-6)", _0)]
    InvalidWeekday(u8),
    #[display(
        fmt = "First day of {}-{:02} falls on weekday {}, not {}",
        year,
        month,
        expected,
        found
    )]
    WeekdayMismatch {
        year:     u16,
        month:    u8,
        expected: u8,
        found:    u8,
    },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Builds a date from already validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from a 1-indexed `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date whose month is counted from zero (January is 0).
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn from_zero_based_month(year: u16, month_index: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::from_index0(month_index)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Weekday of the first day of this date's month.
    pub const fn first_weekday_of_month(&self) -> WeekdayIndex {
        WeekdayIndex::wrapping(types::weekday_of(self.year.get(), self.month.get(), MIN_DAY))
    }

    /// Weekday of this date, 0 = Sunday.
    pub const fn weekday(&self) -> WeekdayIndex {
        WeekdayIndex::from_first_day(self.first_weekday_of_month(), self.day)
    }

    /// `(year, month, day)` with a 1-indexed month.
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
