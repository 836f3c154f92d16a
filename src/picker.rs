//! Click handling for one picker session: the selection store plus the
//! classify → apply → store → notify cycle.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::{
    CalendarDate, CalendarPosition, ClickTarget, DayView, PickerConfig, Selection, SelectionError,
    SelectionResult, Transition, WeekdayNames, apply, classify, describe_day,
};

/// Selection and click target, always read and written together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    pub selection:    Selection,
    pub click_target: ClickTarget,
}

impl SelectionState {
    pub const fn new(selection: Selection, click_target: ClickTarget) -> Self {
        Self {
            selection,
            click_target,
        }
    }

    /// Classifies and applies a click without touching `self`.
    ///
    /// # Errors
    /// Returns the classifier or applier fault; see [`classify`] and [`apply`].
    pub fn transition(&self, clicked: CalendarDate, weekdays: &WeekdayNames) -> Result<Transition, SelectionError> {
        let start = self.selection.start();
        let end = self.selection.end();
        let case = classify(start, end, clicked, self.click_target)?;
        apply(case, start, end, clicked, weekdays)
    }
}

/// Receives the result of every successful click.
pub type Observer = Box<dyn FnMut(&SelectionResult)>;

/// A date range picker session.
pub struct RangePicker {
    state:    SelectionState,
    initial:  ClickTarget,
    weekdays: WeekdayNames,
    observer: Option<Observer>,
}

impl fmt::Debug for RangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangePicker")
            .field("state", &self.state)
            .field("initial", &self.initial)
            .field("weekdays", &self.weekdays)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for RangePicker {
    fn default() -> Self {
        Self::new(WeekdayNames::default())
    }
}

impl RangePicker {
    pub fn new(weekdays: WeekdayNames) -> Self {
        Self {
            state: SelectionState::default(),
            initial: ClickTarget::Start,
            weekdays,
            observer: None,
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        let initial = config.initial_click_target;
        Self {
            state: SelectionState::new(Selection::empty(), initial),
            initial,
            weekdays: config.weekdays(),
            observer: None,
        }
    }

    /// Restores a previously saved state, e.g. one a host persisted between sessions.
    #[must_use]
    pub fn with_state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    /// Registers the callback invoked after each successful click.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&SelectionResult) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub const fn selection(&self) -> Selection {
        self.state.selection
    }

    pub const fn click_target(&self) -> ClickTarget {
        self.state.click_target
    }

    pub const fn weekdays(&self) -> &WeekdayNames {
        &self.weekdays
    }

    /// Handles a click on a grid cell.
    ///
    /// # Errors
    /// See [`RangePicker::click_date`].
    pub fn click(&mut self, position: CalendarPosition) -> Result<Transition, SelectionError> {
        self.click_date(position.date())
    }

    /// Handles a click on `clicked`: the new state is stored in one write,
    /// then the observer runs once with the result. On error the state is
    /// left untouched and the observer is not called.
    ///
    /// # Errors
    /// Returns `SelectionError::NoMatchingCase` or `SelectionError::InvalidOrder`
    /// if the stored state already violates the ordering invariant.
    pub fn click_date(&mut self, clicked: CalendarDate) -> Result<Transition, SelectionError> {
        let transition = self.state.transition(clicked, &self.weekdays).inspect_err(|err| {
            error!(%clicked, target = %self.state.click_target, error = %err, "day click rejected");
        })?;

        self.state = SelectionState::new(transition.selection, transition.click_target);
        debug!(
            %clicked,
            case = %transition.case,
            next_click_target = %transition.click_target,
            complete = transition.selection.is_complete(),
            "day click applied"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&transition.result);
        }
        Ok(transition)
    }

    /// Like [`RangePicker::click_date`] for a 1-indexed `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns `SelectionError::Date` if the triple is not a date.
    pub fn click_ymd(&mut self, year: u16, month: u8, day: u8) -> Result<Transition, SelectionError> {
        let clicked = CalendarDate::new(year, month, day)?;
        self.click_date(clicked)
    }

    /// Rendering flags for `date` against the current selection.
    pub fn day_view(&self, date: CalendarDate, today: CalendarDate) -> DayView {
        let view = describe_day(date, &self.state.selection, today);
        trace!(%date, %today, status = %view.status, "day status");
        view
    }

    /// Drops the selection and aims the next click at the configured initial endpoint.
    pub fn reset(&mut self) {
        self.state = SelectionState::new(Selection::empty(), self.initial);
        debug!("selection reset");
    }
}
