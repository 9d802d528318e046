//! Per-surface menu configuration

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::state::DisclosureMode;

/// Behaviour settings for one menu surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub mode: DisclosureMode,
}

impl MenuConfig {
    /// Mobile hamburger flyout
    pub fn mobile() -> Self {
        Self { mode: DisclosureMode::Accordion }
    }

    /// Desktop sidebar
    pub fn sidebar() -> Self {
        Self { mode: DisclosureMode::Accordion }
    }

    /// Compact dropdown where several groups may stay expanded
    pub fn dropdown() -> Self {
        Self { mode: DisclosureMode::MultiOpen }
    }

    pub fn from_json(json: &str) -> MenuResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_accordion() {
        assert_eq!(MenuConfig::default().mode, DisclosureMode::Accordion);
        assert_eq!(MenuConfig::from_json("{}").unwrap(), MenuConfig::default());
    }

    #[test]
    fn test_surface_presets() {
        assert_eq!(MenuConfig::mobile().mode, DisclosureMode::Accordion);
        assert_eq!(MenuConfig::sidebar().mode, DisclosureMode::Accordion);
        assert_eq!(MenuConfig::dropdown().mode, DisclosureMode::MultiOpen);
    }

    #[test]
    fn test_parse_mode() {
        let config = MenuConfig::from_json(r#"{"mode": "multi_open"}"#).unwrap();
        assert_eq!(config.mode, DisclosureMode::MultiOpen);
        assert!(MenuConfig::from_json(r#"{"mode": "sideways"}"#).is_err());
    }
}
