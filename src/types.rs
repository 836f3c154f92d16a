use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, WEEKDAY_MONTH_SHIFT,
};
use crate::{DateError, prelude::*};
use std::num::{NonZeroU8, NonZeroU16};

/// Calendar year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(DateError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Month of the year. Hosts pass it 1-indexed (`1..=12`); grid code that
/// counts months from zero goes through [`Month::from_index0`] and
/// [`Month::index0`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }

    /// Builds a month from its 0-indexed position (January is 0).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the index is 12 or more.
    pub fn from_index0(index: u8) -> Result<Self, DateError> {
        Self::new(index.saturating_add(1))
    }

    /// 1-indexed month number
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// 0-indexed month number (January is 0)
    #[inline]
    pub const fn index0(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Day of the month, validated against its year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        match NonZeroU8::new(value) {
            Some(day) if value <= days_in_month(year.get(), month.get()) => Ok(Self(day)),
            _ => Err(invalid),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// Position of a day within the week, `0..7`, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{}", _0)]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the value is 7 or more.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value < DAYS_IN_WEEK {
            Ok(Self(value))
        } else {
            Err(DateError::InvalidWeekday(value))
        }
    }

    /// Reduces any value into `0..7`.
    pub(crate) const fn wrapping(value: u8) -> Self {
        Self(value % DAYS_IN_WEEK)
    }

    /// Weekday of `day` in a month whose first day falls on `first_day`:
    /// `(first_day + day - 1) mod 7`.
    pub const fn from_first_day(first_day: Self, day: Day) -> Self {
        let offset = (first_day.0 as u16 + day.get() as u16 - MIN_DAY as u16) % DAYS_IN_WEEK as u16;
        Self(offset as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday (0 = Sunday) of a proleptic Gregorian date, by Sakamoto's method.
/// Inputs must already be a valid date.
pub const fn weekday_of(year: u16, month: u8, day: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = (if month <= FEBRUARY { year - 1 } else { year }) as u32;
    let shift = WEEKDAY_MONTH_SHIFT[(month - 1) as usize] as u32;
    ((y + y / 4 - y / 100 + y / 400 + shift + day as u32) % DAYS_IN_WEEK as u32) as u8
}
