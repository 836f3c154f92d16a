//! Decides what a day click means for the current selection.

use crate::{CalendarDate, Case, ClickTarget, SelectionError};

/// Classifies a click on `clicked` given the current endpoints and the click
/// target hint.
///
/// Out-of-range clicks are decided by date ordering; the hint only settles
/// which endpoint moves when the click lands inside or beyond a range:
///
/// | selection   | clicked                 | target  | case                 |
/// |-------------|-------------------------|---------|----------------------|
/// | empty       | any                     | `Start` | `SetStart`           |
/// | empty       | any                     | `End`   | `SetEnd`             |
/// | start only  | `< start`               | any     | `SetStart`           |
/// | start only  | `>= start`              | `Start` | `SetStart`           |
/// | start only  | `>= start`              | `End`   | `SetEnd`             |
/// | end only    | `> end`                 | any     | `SetEnd`             |
/// | end only    | `<= end`                | `End`   | `SetEnd`             |
/// | end only    | `<= end`                | `Start` | `SetStart`           |
/// | both        | `== start` or `== end`  | any     | `ClearBoth`          |
/// | both        | `< start`               | any     | `SetStartClearEnd`   |
/// | both        | `> end`                 | `Start` | `SetStartClearEnd`   |
/// | both        | `> end`                 | `End`   | `SetEnd`             |
/// | both        | inside                  | `Start` | `SetStart`           |
/// | both        | inside                  | `End`   | `SetEnd`             |
///
/// # Errors
/// Returns `SelectionError::NoMatchingCase` if both endpoints are set with
/// `start > end`; no click on such a selection has a defined meaning.
pub fn classify(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    clicked: CalendarDate,
    target: ClickTarget,
) -> Result<Case, SelectionError> {
    let case = match (start, end) {
        (None, None) => match target {
            ClickTarget::Start => Case::SetStart,
            ClickTarget::End => Case::SetEnd,
        },
        (Some(start), None) => {
            if clicked < start || target == ClickTarget::Start {
                Case::SetStart
            } else {
                Case::SetEnd
            }
        },
        (None, Some(end)) => {
            if clicked > end || target == ClickTarget::End {
                Case::SetEnd
            } else {
                Case::SetStart
            }
        },
        (Some(start), Some(end)) if start > end => {
            return Err(SelectionError::NoMatchingCase { start, end, clicked });
        },
        (Some(start), Some(end)) => {
            if clicked == start || clicked == end {
                Case::ClearBoth
            } else if clicked < start {
                Case::SetStartClearEnd
            } else if clicked > end {
                match target {
                    ClickTarget::Start => Case::SetStartClearEnd,
                    ClickTarget::End => Case::SetEnd,
                }
            } else {
                match target {
                    ClickTarget::Start => Case::SetStart,
                    ClickTarget::End => Case::SetEnd,
                }
            }
        },
    };
    Ok(case)
}
