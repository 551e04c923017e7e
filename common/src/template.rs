//! URL template substitution.
//!
//! Templates carry `{name}` placeholders, e.g.
//! `https://host/station/{stationId}/{chargerBoxId}`. Substitution is a single
//! left-to-right pass: replacement values are copied verbatim and never
//! rescanned, so a value that itself looks like `{stationId}` stays literal.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder name used for the station identifier.
pub const STATION_ID: &str = "stationId";

/// Placeholder name used for the charger box identifier.
pub const CHARGER_BOX_ID: &str = "chargerBoxId";

/// Every placeholder name a template may reference.
pub const KNOWN_PLACEHOLDERS: [&str; 2] = [STATION_ID, CHARGER_BOX_ID];

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Replaces every `{name}` in `template` with `vars[name]`.
///
/// Names missing from `vars` collapse to an empty string; this is never an
/// error. Braces that do not enclose a word (`{}`, `{a-b}`) are left alone.
pub fn fill_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            vars.get(&caps[1]).copied().unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Lists the placeholder names referenced by `template`, in order of first
/// appearance and without duplicates.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholder names in `template` that substitution would collapse to empty.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| !KNOWN_PLACEHOLDERS.contains(&name.as_str()))
        .collect()
}
