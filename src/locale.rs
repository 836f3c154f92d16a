//! Weekday-name tables used to label normalized dates.

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;
use crate::types::WeekdayIndex;

/// Seven weekday names, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WeekdayNames([String; DAYS_IN_WEEK as usize]);

/// Error for a weekday-name list that does not hold exactly seven names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected {expected} weekday names, found {0}", expected = DAYS_IN_WEEK)]
pub struct WeekdayCountError(pub usize);

impl WeekdayNames {
    pub const fn new(names: [String; DAYS_IN_WEEK as usize]) -> Self {
        Self(names)
    }

    pub fn name(&self, index: WeekdayIndex) -> &str {
        &self.0[index.as_usize()]
    }
}

impl TryFrom<Vec<String>> for WeekdayNames {
    type Error = WeekdayCountError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let count = names.len();
        names.try_into().map(Self).map_err(|_| WeekdayCountError(count))
    }
}

impl From<WeekdayNames> for Vec<String> {
    fn from(names: WeekdayNames) -> Self {
        names.0.into()
    }
}

impl From<[&str; DAYS_IN_WEEK as usize]> for WeekdayNames {
    fn from(names: [&str; DAYS_IN_WEEK as usize]) -> Self {
        Self(names.map(str::to_owned))
    }
}

/// Built-in weekday tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "ko")]
    Ko,
}

const EN_WEEKDAYS: [&str; DAYS_IN_WEEK as usize] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const KO_WEEKDAYS: [&str; DAYS_IN_WEEK as usize] = ["일", "월", "화", "수", "목", "금", "토"];

impl Locale {
    pub fn weekday_names(self) -> WeekdayNames {
        match self {
            Self::En => EN_WEEKDAYS.into(),
            Self::Ko => KO_WEEKDAYS.into(),
        }
    }
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Locale::default().weekday_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday(i: u8) -> WeekdayIndex {
        WeekdayIndex::new(i).unwrap()
    }

    #[test]
    fn test_locale_tables_start_on_sunday() {
        assert_eq!(Locale::En.weekday_names().name(weekday(0)), "Sun");
        assert_eq!(Locale::En.weekday_names().name(weekday(6)), "Sat");
        assert_eq!(Locale::Ko.weekday_names().name(weekday(0)), "일");
        assert_eq!(Locale::Ko.weekday_names().name(weekday(5)), "금");
    }

    #[test]
    fn test_deref_exposes_sequence() {
        let names = Locale::En.weekday_names();
        assert_eq!(names.len(), 7);
        assert_eq!(names.iter().next().map(String::as_str), Some("Sun"));
    }

    #[test]
    fn test_try_from_vec() {
        let names: Vec<String> = ["D", "L", "M", "X", "J", "V", "S"].map(String::from).into();
        let parsed = WeekdayNames::try_from(names).unwrap();
        assert_eq!(parsed.name(weekday(3)), "X");

        let short = vec!["Sun".to_owned(), "Mon".to_owned()];
        assert_eq!(WeekdayNames::try_from(short), Err(WeekdayCountError(2)));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Locale::Ko).unwrap();
        assert_eq!(json, r#""ko""#);

        let names: WeekdayNames =
            serde_json::from_str(r#"["S","M","T","W","T","F","S"]"#).unwrap();
        assert_eq!(names.name(weekday(1)), "M");

        let too_many: Result<WeekdayNames, _> =
            serde_json::from_str(r#"["S","M","T","W","T","F","S","X"]"#);
        assert!(too_many.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::Ko.to_string(), "ko");
    }
}
