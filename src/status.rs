//! Per-day relationship to the selection, for rendering.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, Selection, prelude::*};

/// How a single calendar day relates to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Strictly before today.
    #[display(fmt = "passed")]
    Passed,
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
    /// Strictly between both endpoints.
    #[display(fmt = "between")]
    Between,
    #[display(fmt = "none")]
    None,
}

/// Everything a day cell needs to style itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayView {
    pub status:         DayStatus,
    pub is_today:       bool,
    /// Both endpoints of the selection are chosen.
    pub range_complete: bool,
}

/// Derives the status of `date`.
///
/// Endpoints keep their marker even when they lie before `today`; any other
/// day before `today` is `Passed`. `today` itself is never `Passed`.
pub fn status(date: CalendarDate, selection: &Selection, today: CalendarDate) -> DayStatus {
    if selection.start() == Some(date) {
        DayStatus::Start
    } else if selection.end() == Some(date) {
        DayStatus::End
    } else if date < today {
        DayStatus::Passed
    } else if selection.is_strictly_inside(date) {
        DayStatus::Between
    } else {
        DayStatus::None
    }
}

/// [`status`] for a `(year, month, day)` triple with a 1-indexed month.
///
/// # Errors
/// Returns `DateError` if the triple is not a calendar date.
pub fn status_ymd(
    year: u16,
    month: u8,
    day: u8,
    selection: &Selection,
    today: CalendarDate,
) -> Result<DayStatus, DateError> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(status(date, selection, today))
}

pub fn describe_day(date: CalendarDate, selection: &Selection, today: CalendarDate) -> DayView {
    DayView {
        status:         status(date, selection, today),
        is_today:       date == today,
        range_complete: selection.is_complete(),
    }
}
