//! Date range selection by clicking calendar days.
//!
//! Each click is classified against the current [`Selection`] and
//! [`ClickTarget`] into a [`Case`], then applied to produce the next
//! selection, the next click target and a [`SelectionResult`] for observers.
//! [`RangePicker`] runs that cycle for a session; [`classify`], [`apply`] and
//! [`status`] are available for hosts that keep the state themselves.
//!
//! ```
//! use date_range_picker::{Case, ClickTarget, Locale, RangePicker};
//!
//! let mut picker = RangePicker::new(Locale::En.weekday_names());
//! picker.click_ymd(2024, 3, 10)?;
//! let transition = picker.click_ymd(2024, 3, 15)?;
//!
//! assert_eq!(transition.case, Case::SetEnd);
//! assert_eq!(transition.result.next_click_target, ClickTarget::End);
//! assert_eq!(transition.result.end_date.map(|d| d.weekday_name), Some("Fri".to_owned()));
//! # Ok::<(), date_range_picker::SelectionError>(())
//! ```

mod classify;
mod config;
mod consts;
mod date;
mod locale;
mod picker;
mod position;
mod prelude;
mod selection;
mod status;
#[cfg(test)]
mod test_utils;
mod transition;
mod types;

pub use classify::classify;
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use date::{CalendarDate, DateError};
pub use locale::{Locale, WeekdayCountError, WeekdayNames};
pub use picker::{Observer, RangePicker, SelectionState};
pub use position::CalendarPosition;
pub use selection::{Case, ClickTarget, Selection, SelectionError};
pub use status::{DayStatus, DayView, describe_day, status, status_ymd};
pub use transition::{NormalizedDate, SelectionResult, Transition, apply};
pub use types::{Day, Month, WeekdayIndex, Year, days_in_month, is_leap_year, weekday_of};
