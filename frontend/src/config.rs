//! Build-time configuration.
//!
//! The page has no process environment, so settings are captured from the
//! environment of the `trunk build` invocation, the same way a bundler
//! injects `import.meta.env`. They are read once, in `App::create`.

use common::model::config::{
    ConfigError, ResolverConfig, APP_URL_TEMPLATE, AUTO_ATTEMPT_APP, FALLBACK_DELAY_MS,
    MANUAL_TRIGGER_REQUIRED, WEB_URL_TEMPLATE,
};
use log::Level;
use std::str::FromStr;

pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        APP_URL_TEMPLATE => option_env!("APP_URL_TEMPLATE"),
        WEB_URL_TEMPLATE => option_env!("WEB_URL_TEMPLATE"),
        FALLBACK_DELAY_MS => option_env!("FALLBACK_DELAY_MS"),
        AUTO_ATTEMPT_APP => option_env!("AUTO_ATTEMPT_APP"),
        MANUAL_TRIGGER_REQUIRED => option_env!("MANUAL_TRIGGER_REQUIRED"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load() -> Result<ResolverConfig, ConfigError> {
    ResolverConfig::from_lookup(build_env)
}

/// `LOG_LEVEL` from the build environment.
pub fn log_level() -> Level {
    parse_log_level(option_env!("LOG_LEVEL"))
}

/// `info` when unset or unparsable.
fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(Level::Info)
}
