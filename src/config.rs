//! Picker settings read from TOML.
//!
//! ```toml
//! locale = "ko"
//! weekday_names = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
//! initial_click_target = "start"
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::{ClickTarget, Locale, WeekdayNames};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Built-in weekday table, used when `weekday_names` is absent.
    pub locale:               Locale,
    /// Custom weekday names, Sunday first; overrides `locale`.
    pub weekday_names:        Option<WeekdayNames>,
    /// Endpoint the first click of a fresh session sets.
    pub initial_click_target: ClickTarget,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid picker config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PickerConfig {
    /// # Errors
    /// Returns `ConfigError::Toml` if the text is not a valid picker config.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        debug!(
            locale = %config.locale,
            custom_weekdays = config.weekday_names.is_some(),
            initial_click_target = %config.initial_click_target,
            "loaded picker config"
        );
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Toml` if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The weekday names normalized dates are labelled with.
    pub fn weekdays(&self) -> WeekdayNames {
        self.weekday_names
            .clone()
            .unwrap_or_else(|| self.locale.weekday_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeekdayIndex;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.initial_click_target, ClickTarget::Start);
        assert_eq!(config.weekdays(), Locale::En.weekday_names());
    }

    #[test]
    fn test_locale_and_target() {
        let config = PickerConfig::from_toml_str(
            r#"
            locale = "ko"
            initial_click_target = "end"
            "#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.initial_click_target, ClickTarget::End);
        assert_eq!(config.weekdays().name(WeekdayIndex::new(0).unwrap()), "일");
    }

    #[test]
    fn test_custom_names_override_locale() {
        let config = PickerConfig::from_toml_str(
            r#"
            locale = "ko"
            weekday_names = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"]
            "#,
        )
        .unwrap();
        assert_eq!(config.weekdays().name(WeekdayIndex::new(3).unwrap()), "Mié");
    }

    #[test]
    fn test_rejects_bad_input() {
        let wrong_count = PickerConfig::from_toml_str(r#"weekday_names = ["Sun", "Mon"]"#);
        assert!(matches!(wrong_count, Err(ConfigError::Toml(_))));

        let unknown_locale = PickerConfig::from_toml_str(r#"locale = "xx""#);
        assert!(unknown_locale.is_err());

        let unknown_field = PickerConfig::from_toml_str("first_day = 1");
        assert!(unknown_field.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = PickerConfig::load("/nonexistent/picker.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
