//! Shorthand constructors for tests.

use crate::{CalendarDate, Selection};

pub(crate) fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date must be valid")
}

pub(crate) fn selection(start: Option<(u16, u8, u8)>, end: Option<(u16, u8, u8)>) -> Selection {
    let to_date = |(y, m, d): (u16, u8, u8)| date(y, m, d);
    Selection::new(start.map(to_date), end.map(to_date)).expect("test selection must be ordered")
}
