//! Applies a classified click to the selection and builds the report handed to observers.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Case, ClickTarget, Selection, SelectionError, WeekdayNames};

/// A date spelled out for display: 1-indexed month plus weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDate {
    pub year:         u16,
    pub month:        u8,
    pub day:          u8,
    pub weekday_name: String,
}

impl NormalizedDate {
    /// Normalizes `date`, naming its weekday from `weekdays`.
    pub fn new(date: CalendarDate, weekdays: &WeekdayNames) -> Self {
        let (year, month, day) = date.to_ymd();
        Self {
            year,
            month,
            day,
            weekday_name: weekdays.name(date.weekday()).to_owned(),
        }
    }
}

/// What a click did, as reported to the observer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub clicked_type:      ClickTarget,
    pub next_click_target: ClickTarget,
    pub start_date:        Option<NormalizedDate>,
    pub end_date:          Option<NormalizedDate>,
}

/// Outcome of applying one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub case:         Case,
    pub selection:    Selection,
    pub click_target: ClickTarget,
    pub result:       SelectionResult,
}

/// Applies `case` to the endpoints `start`/`end` for a click on `clicked`.
///
/// | case               | selection                        | next target              | clicked type |
/// |--------------------|----------------------------------|--------------------------|--------------|
/// | `SetStart`         | start = clicked                  | `End`                    | `Start`      |
/// | `SetEnd`           | end = clicked                    | `End`, or `Start` if no start | `End`   |
/// | `SetStartClearEnd` | start = clicked, no end          | `End`                    | `Start`      |
/// | `ClearBoth`        | empty                            | `Start`                  | `Start`      |
///
/// # Errors
/// Returns `SelectionError::InvalidOrder` if the case would leave the start
/// after the end, which only happens when `case` was not produced by
/// [`classify`](crate::classify()) for the same inputs.
pub fn apply(
    case: Case,
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    clicked: CalendarDate,
    weekdays: &WeekdayNames,
) -> Result<Transition, SelectionError> {
    let (new_start, new_end, click_target, clicked_type) = match case {
        Case::SetStart => (Some(clicked), end, ClickTarget::End, ClickTarget::Start),
        Case::SetEnd => match start {
            None => (None, Some(clicked), ClickTarget::Start, ClickTarget::End),
            Some(start) => (Some(start), Some(clicked), ClickTarget::End, ClickTarget::End),
        },
        Case::SetStartClearEnd => (Some(clicked), None, ClickTarget::End, ClickTarget::Start),
        Case::ClearBoth => (None, None, ClickTarget::Start, ClickTarget::Start),
    };

    let selection = Selection::new(new_start, new_end)?;
    let result = SelectionResult {
        clicked_type,
        next_click_target: click_target,
        start_date: selection.start().map(|date| NormalizedDate::new(date, weekdays)),
        end_date: selection.end().map(|date| NormalizedDate::new(date, weekdays)),
    };

    Ok(Transition {
        case,
        selection,
        click_target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;
    use crate::test_utils::date;

    fn names() -> WeekdayNames {
        Locale::En.weekday_names()
    }

    #[test]
    fn test_set_start_keeps_end() {
        let t = apply(
            Case::SetStart,
            Some(date(2024, 3, 10)),
            Some(date(2024, 3, 15)),
            date(2024, 3, 12),
            &names(),
        )
        .unwrap();

        assert_eq!(t.selection.start(), Some(date(2024, 3, 12)));
        assert_eq!(t.selection.end(), Some(date(2024, 3, 15)));
        assert_eq!(t.click_target, ClickTarget::End);
        assert_eq!(t.result.clicked_type, ClickTarget::Start);
        assert_eq!(t.result.next_click_target, ClickTarget::End);
    }

    #[test]
    fn test_set_end_without_start_aims_next_click_at_start() {
        let t = apply(Case::SetEnd, None, None, date(2024, 3, 15), &names()).unwrap();

        assert_eq!(t.selection.start(), None);
        assert_eq!(t.selection.end(), Some(date(2024, 3, 15)));
        assert_eq!(t.click_target, ClickTarget::Start);
        assert_eq!(t.result.clicked_type, ClickTarget::End);
        assert_eq!(t.result.next_click_target, ClickTarget::Start);
        assert_eq!(t.result.start_date, None);
    }

    #[test]
    fn test_set_end_with_start_stays_on_end() {
        let t = apply(Case::SetEnd, Some(date(2024, 3, 10)), None, date(2024, 3, 15), &names()).unwrap();

        assert_eq!(t.selection.start(), Some(date(2024, 3, 10)));
        assert_eq!(t.selection.end(), Some(date(2024, 3, 15)));
        assert_eq!(t.click_target, ClickTarget::End);
        assert_eq!(t.result.clicked_type, ClickTarget::End);
        assert_eq!(t.result.next_click_target, ClickTarget::End);
    }

    #[test]
    fn test_set_start_clear_end() {
        let t = apply(
            Case::SetStartClearEnd,
            Some(date(2024, 3, 10)),
            Some(date(2024, 3, 15)),
            date(2024, 3, 20),
            &names(),
        )
        .unwrap();

        assert_eq!(t.selection, Selection::new(Some(date(2024, 3, 20)), None).unwrap());
        assert_eq!(t.click_target, ClickTarget::End);
        assert_eq!(t.result.clicked_type, ClickTarget::Start);
        assert_eq!(t.result.end_date, None);
    }

    #[test]
    fn test_clear_both() {
        let t = apply(
            Case::ClearBoth,
            Some(date(2024, 3, 10)),
            Some(date(2024, 3, 15)),
            date(2024, 3, 10),
            &names(),
        )
        .unwrap();

        assert!(t.selection.is_empty());
        assert_eq!(t.click_target, ClickTarget::Start);
        assert_eq!(t.result.clicked_type, ClickTarget::Start);
        assert_eq!(t.result.next_click_target, ClickTarget::Start);
        assert_eq!(t.result.start_date, None);
        assert_eq!(t.result.end_date, None);
    }

    #[test]
    fn test_unclassified_case_cannot_break_ordering() {
        let start = date(2024, 3, 10);
        let clicked = date(2024, 3, 5);
        let result = apply(Case::SetEnd, Some(start), None, clicked, &names());
        assert_eq!(result, Err(SelectionError::InvalidOrder { start, end: clicked }));
    }

    #[test]
    fn test_result_dates_are_normalized() {
        let t = apply(Case::SetEnd, Some(date(2024, 3, 10)), None, date(2024, 3, 15), &names()).unwrap();

        assert_eq!(
            t.result.start_date,
            Some(NormalizedDate {
                year:         2024,
                month:        3,
                day:          10,
                weekday_name: "Sun".to_owned(),
            })
        );
        assert_eq!(
            t.result.end_date,
            Some(NormalizedDate {
                year:         2024,
                month:        3,
                day:          15,
                weekday_name: "Fri".to_owned(),
            })
        );
    }

    #[test]
    fn test_weekday_name_follows_locale() {
        let t = apply(
            Case::SetStart,
            None,
            None,
            date(2024, 4, 1),
            &Locale::Ko.weekday_names(),
        )
        .unwrap();
        let start = t.result.start_date.unwrap();
        assert_eq!(start.weekday_name, "월");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let t = apply(Case::SetStart, None, None, date(2024, 3, 10), &names()).unwrap();
        let json = serde_json::to_value(&t.result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "clickedType": "start",
                "nextClickTarget": "end",
                "startDate": { "year": 2024, "month": 3, "day": 10, "weekdayName": "Sun" },
                "endDate": null,
            })
        );
    }
}
