use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, classify, consts::CASE_PREFIX, prelude::*};

/// The currently chosen endpoints. When both are present, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct Selection {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

#[derive(Deserialize)]
struct RawSelection {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

impl TryFrom<RawSelection> for Selection {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Which endpoint the next click is presumed to set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    #[default]
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// The classified intent of one day click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Case {
    /// Move the start to the clicked day.
    #[display(fmt = "SET_START")]
    SetStart,
    /// Move the end to the clicked day.
    #[display(fmt = "SET_END")]
    SetEnd,
    /// Restart the range at the clicked day.
    #[display(fmt = "SET_START_CLEAR_END")]
    SetStartClearEnd,
    /// Drop both endpoints.
    #[display(fmt = "CLEAR_BOTH")]
    ClearBoth,
}

/// Error type for selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The classifier found no case for the inputs; the ordering precondition was already broken.
    #[error("No selection case matches click on {clicked} with start {start} after end {end}")]
    NoMatchingCase {
        start:   CalendarDate,
        end:     CalendarDate,
        clicked: CalendarDate,
    },

    /// A case name that is not one of the four known cases.
    #[error("Invalid selection case: {0}")]
    InvalidCase(String),

    /// Start date is after end date.
    #[error("Invalid selection: start ({start}) is after end ({end})")]
    InvalidOrder { start: CalendarDate, end: CalendarDate },

    /// Error building a date or calendar position.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl Selection {
    /// Creates a selection, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `SelectionError::InvalidOrder` if both endpoints are present and out of order.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self, SelectionError> {
        match (start, end) {
            (Some(start), Some(end)) if start > end => Err(SelectionError::InvalidOrder { start, end }),
            _ => Ok(Self { start, end }),
        }
    }

    /// A selection with neither endpoint set.
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Both endpoints are chosen.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both endpoints are set and `date` lies strictly between them.
    pub fn is_strictly_inside(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }

    /// Classifies a click on `clicked` against this selection.
    ///
    /// # Errors
    /// See [`classify`](crate::classify()).
    pub fn classify(&self, clicked: CalendarDate, target: ClickTarget) -> Result<Case, SelectionError> {
        classify(self.start, self.end, clicked, target)
    }
}

impl FromStr for Case {
    type Err = SelectionError;

    /// Accepts `SET_START`, `SET_END`, `SET_START_CLEAR_END` and `CLEAR_BOTH`,
    /// optionally prefixed with `CASE_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix(CASE_PREFIX).unwrap_or(trimmed);
        match name {
            "SET_START" => Ok(Self::SetStart),
            "SET_END" => Ok(Self::SetEnd),
            "SET_START_CLEAR_END" => Ok(Self::SetStartClearEnd),
            "CLEAR_BOTH" => Ok(Self::ClearBoth),
            _ => Err(SelectionError::InvalidCase(s.to_owned())),
        }
    }
}
