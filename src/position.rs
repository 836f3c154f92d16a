use crate::{CalendarDate, DateError, WeekdayIndex};

/// A clicked grid cell: the weekday the month starts on, plus the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarPosition {
    first_day: WeekdayIndex,
    date:      CalendarDate,
}

impl CalendarPosition {
    /// Builds a position from the grid's first-day offset (0 = Sunday) and a
    /// 1-indexed `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns `DateError` if the triple is not a date, if `first_day` is not
    /// in `0..7`, or if the month does not actually start on `first_day`.
    pub fn new(first_day: u8, year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let first_day = WeekdayIndex::new(first_day)?;
        let date = CalendarDate::new(year, month, day)?;
        Self::from_date(first_day, date)
    }

    /// # Errors
    /// Returns `DateError::WeekdayMismatch` if `date`'s month does not start on `first_day`.
    pub fn from_date(first_day: WeekdayIndex, date: CalendarDate) -> Result<Self, DateError> {
        let expected = date.first_weekday_of_month();
        if expected != first_day {
            return Err(DateError::WeekdayMismatch {
                year:     date.year().get(),
                month:    date.month().get(),
                expected: expected.get(),
                found:    first_day.get(),
            });
        }
        Ok(Self { first_day, date })
    }

    pub const fn first_day(&self) -> WeekdayIndex {
        self.first_day
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// `(first_day + day - 1) mod 7`
    pub const fn weekday(&self) -> WeekdayIndex {
        WeekdayIndex::from_first_day(self.first_day, self.date.day())
    }
}

impl From<CalendarDate> for CalendarPosition {
    fn from(date: CalendarDate) -> Self {
        Self {
            first_day: date.first_weekday_of_month(),
            date,
        }
    }
}
