//! Resolver configuration.
//!
//! Read once when the page starts. Every setting is optional; an unset or
//! empty value falls back to the default below. Values that are present but
//! unusable (a template naming an unknown placeholder, a delay that is not a
//! positive integer, a conflicting launch mode) are rejected as a whole so a
//! broken deployment is visible instead of producing half-filled URLs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::unknown_placeholders;

pub const APP_URL_TEMPLATE: &str = "APP_URL_TEMPLATE";
pub const WEB_URL_TEMPLATE: &str = "WEB_URL_TEMPLATE";
pub const FALLBACK_DELAY_MS: &str = "FALLBACK_DELAY_MS";
pub const AUTO_ATTEMPT_APP: &str = "AUTO_ATTEMPT_APP";
pub const MANUAL_TRIGGER_REQUIRED: &str = "MANUAL_TRIGGER_REQUIRED";

pub const DEFAULT_APP_URL_TEMPLATE: &str =
    "https://lk-intelbras.use-move.com/station/{stationId}/{chargerBoxId}";
pub const DEFAULT_WEB_URL_TEMPLATE: &str =
    "https://terminal-pagamento.intelbras-cve-pro.com.br/?chargerBoxId={chargerBoxId}";
pub const DEFAULT_FALLBACK_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} references unknown placeholder(s): {}", .names.join(", "))]
    UnknownPlaceholder { key: &'static str, names: Vec<String> },

    #[error("FALLBACK_DELAY_MS must be a positive integer number of milliseconds, got {0:?}")]
    InvalidDelay(String),

    #[error("{key} must be a boolean (true/false/1/0), got {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("AUTO_ATTEMPT_APP and MANUAL_TRIGGER_REQUIRED cannot both be enabled")]
    ConflictingLaunchMode,
}

/// How the app-open attempt is started on mobile clients.
///
/// | auto  | manual | behaviour                                             |
/// |-------|--------|-------------------------------------------------------|
/// | true  | false  | navigate to the app on load, fall back after a delay  |
/// | false | true   | wait for a tap on "open app", then the same race       |
/// | false | false  | no app attempt; go straight to the web page            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchMode {
    pub auto_attempt_app: bool,
    pub manual_trigger_required: bool,
}

impl Default for LaunchMode {
    fn default() -> Self {
        Self {
            auto_attempt_app: true,
            manual_trigger_required: false,
        }
    }
}

impl LaunchMode {
    /// True when neither an automatic nor a gesture-initiated attempt will
    /// ever be made.
    pub fn web_only(&self) -> bool {
        !self.auto_attempt_app && !self.manual_trigger_required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    pub app_url_template: String,
    pub web_url_template: String,
    pub fallback_delay_ms: u32,
    pub launch_mode: LaunchMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            app_url_template: DEFAULT_APP_URL_TEMPLATE.to_string(),
            web_url_template: DEFAULT_WEB_URL_TEMPLATE.to_string(),
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
            launch_mode: LaunchMode::default(),
        }
    }
}

impl ResolverConfig {
    /// Builds the configuration from a key lookup (the process or build
    /// environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let app_url_template = get(APP_URL_TEMPLATE).unwrap_or(defaults.app_url_template);
        check_template(APP_URL_TEMPLATE, &app_url_template)?;

        let web_url_template = get(WEB_URL_TEMPLATE).unwrap_or(defaults.web_url_template);
        check_template(WEB_URL_TEMPLATE, &web_url_template)?;

        let fallback_delay_ms = match get(FALLBACK_DELAY_MS) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::InvalidDelay(raw)),
            },
            None => defaults.fallback_delay_ms,
        };

        let launch_mode = LaunchMode {
            auto_attempt_app: parse_flag(AUTO_ATTEMPT_APP, get(AUTO_ATTEMPT_APP))?
                .unwrap_or(defaults.launch_mode.auto_attempt_app),
            manual_trigger_required: parse_flag(
                MANUAL_TRIGGER_REQUIRED,
                get(MANUAL_TRIGGER_REQUIRED),
            )?
            .unwrap_or(defaults.launch_mode.manual_trigger_required),
        };
        if launch_mode.auto_attempt_app && launch_mode.manual_trigger_required {
            return Err(ConfigError::ConflictingLaunchMode);
        }

        Ok(Self {
            app_url_template,
            web_url_template,
            fallback_delay_ms,
            launch_mode,
        })
    }
}

fn check_template(key: &'static str, template: &str) -> Result<(), ConfigError> {
    let names = unknown_placeholders(template);
    if names.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::UnknownPlaceholder { key, names })
    }
}

fn parse_flag(key: &'static str, raw: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ResolverConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ResolverConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn unset_environment_yields_defaults() {
        assert_eq!(load(&[]).unwrap(), ResolverConfig::default());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = load(&[(APP_URL_TEMPLATE, ""), (FALLBACK_DELAY_MS, "  ")]).unwrap();
        assert_eq!(cfg, ResolverConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let cfg = load(&[
            (APP_URL_TEMPLATE, "move://station/{stationId}"),
            (WEB_URL_TEMPLATE, "https://pay/{chargerBoxId}"),
            (FALLBACK_DELAY_MS, "2500"),
            (AUTO_ATTEMPT_APP, "false"),
            (MANUAL_TRIGGER_REQUIRED, "1"),
        ])
        .unwrap();
        assert_eq!(cfg.app_url_template, "move://station/{stationId}");
        assert_eq!(cfg.web_url_template, "https://pay/{chargerBoxId}");
        assert_eq!(cfg.fallback_delay_ms, 2500);
        assert_eq!(
            cfg.launch_mode,
            LaunchMode {
                auto_attempt_app: false,
                manual_trigger_required: true
            }
        );
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let err =
            load(&[(WEB_URL_TEMPLATE, "https://pay/?box={boxId}&s={stationId}")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownPlaceholder {
                key: WEB_URL_TEMPLATE,
                names: vec!["boxId".to_string()]
            }
        );
        assert_eq!(
            err.to_string(),
            "WEB_URL_TEMPLATE references unknown placeholder(s): boxId"
        );
    }

    #[test]
    fn rejects_bad_delay() {
        for raw in ["abc", "-5", "0", "1.5"] {
            assert_eq!(
                load(&[(FALLBACK_DELAY_MS, raw)]).unwrap_err(),
                ConfigError::InvalidDelay(raw.to_string())
            );
        }
    }

    #[test]
    fn rejects_bad_flag() {
        let err = load(&[(AUTO_ATTEMPT_APP, "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                key: AUTO_ATTEMPT_APP,
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn rejects_conflicting_launch_mode() {
        let err = load(&[(MANUAL_TRIGGER_REQUIRED, "true")]).unwrap_err();
        assert_eq!(err, ConfigError::ConflictingLaunchMode);
    }

    #[test]
    fn web_only_mode() {
        let cfg = load(&[(AUTO_ATTEMPT_APP, "off")]).unwrap();
        assert!(cfg.launch_mode.web_only());
        assert!(!LaunchMode::default().web_only());
    }

    #[test]
    fn serializes_for_logging() {
        let json = serde_json::to_string(&ResolverConfig::default()).unwrap();
        assert!(json.contains("\"fallbackDelayMs\":1500"));
        assert!(json.contains("\"autoAttemptApp\":true"));
    }
}
