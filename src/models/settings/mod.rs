// Settings module
// Picker defaults read from the TOML configuration file

use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::services::format::validate_pattern;

pub const DEFAULT_DATE_FORMAT: &str = "%a, %B %-d, %Y";
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub theme: String,
    /// chrono pattern for the date input
    pub date_format: String,
    /// chrono pattern for the time input
    pub time_format: String,
    /// Stage selections until OK is pressed
    pub ok_to_confirm: bool,
    /// Open pickers in a modal dialog instead of a popover
    pub dialog: bool,
    /// Only minutes divisible by this are selectable
    pub minute_interval: Option<u32>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            ok_to_confirm: false,
            dialog: false,
            minute_interval: None,
        }
    }
}

impl PickerSettings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if !matches!(self.theme.as_str(), "light" | "dark") {
            return Err(PickerError::InvalidTheme(self.theme.clone()));
        }
        validate_pattern(&self.date_format)?;
        validate_pattern(&self.time_format)?;
        if let Some(interval) = self.minute_interval {
            if interval == 0 || interval > 60 {
                return Err(PickerError::InvalidMinuteInterval(interval));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PickerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings =
            PickerSettings::from_toml("ok_to_confirm = true\nminute_interval = 15\n").unwrap();
        assert!(settings.ok_to_confirm);
        assert_eq!(settings.minute_interval, Some(15));
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = PickerSettings {
            theme: "dark".to_string(),
            dialog: true,
            ..Default::default()
        };
        let text = settings.to_toml().unwrap();
        assert_eq!(PickerSettings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let settings = PickerSettings {
            minute_interval: Some(0),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(PickerError::InvalidMinuteInterval(0)));
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        let settings = PickerSettings {
            theme: "neon".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(PickerError::InvalidTheme(_))));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let settings = PickerSettings {
            date_format: "%Y-%m-%".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(PickerError::InvalidFormat(_))));
    }
}
