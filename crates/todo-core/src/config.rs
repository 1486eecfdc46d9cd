//! List Configuration
//!
//! Labels and starting display mode, read from JSON by the page shell.

use serde::{Deserialize, Serialize};

use crate::domain::{DisplayMode, TodoList};
use crate::error::ListResult;
use crate::view::Labels;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub labels: Labels,
    pub initial_mode: DisplayMode,
}

impl ListConfig {
    pub fn from_json(json: &str) -> ListResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional JSON blob; absent means defaults
    pub fn from_optional_json(json: Option<&str>) -> ListResult<Self> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn build_list(&self) -> TodoList {
        TodoList::with_mode(self.initial_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;

    #[test]
    fn test_from_json() {
        let config = ListConfig::from_json(
            r#"{"initial_mode": "hide_finished", "labels": {"add_button": "Bæta við"}}"#,
        )
        .unwrap();
        assert_eq!(config.initial_mode, DisplayMode::HideFinished);
        assert_eq!(config.labels.add_button, "Bæta við");
        assert_eq!(config.labels.empty, Labels::default().empty);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        assert_eq!(ListConfig::from_optional_json(None).unwrap(), ListConfig::default());
        assert_eq!(ListConfig::from_optional_json(Some("  ")).unwrap(), ListConfig::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = ListConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ListError::Config(_)));
    }

    #[test]
    fn test_build_list_uses_initial_mode() {
        let config = ListConfig {
            initial_mode: DisplayMode::HideFinished,
            ..ListConfig::default()
        };
        let list = config.build_list();
        assert!(!list.show_finished());
        assert!(list.empty_state().indicator_visible);
    }
}
