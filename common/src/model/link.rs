use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

use crate::template::{CHARGER_BOX_ID, STATION_ID};

/// Identifiers bound from the `/r/{stationId}/{chargerBoxId}` path, already
/// percent-decoded. Either may be absent when the link came through `/q`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    pub station_id: Option<String>,
    pub charger_box_id: Option<String>,
}

/// The pair of identifiers a shared link points at. Both are non-empty and
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifiers {
    pub station_id: String,
    pub charger_box_id: String,
}

/// Raised when a link does not carry both identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid link: missing {}", .missing.join(" and "))]
pub struct InvalidLink {
    /// Placeholder names of the identifiers that were empty or absent.
    pub missing: Vec<&'static str>,
}

impl Identifiers {
    /// Extracts both identifiers, preferring the path binding over the query
    /// parameter of the same name.
    ///
    /// `query` is the raw search string, with or without its leading `?`.
    /// Values are trimmed; anything non-empty is accepted.
    pub fn extract(path: &PathParams, query: &str) -> Result<Self, InvalidLink> {
        let station_id = pick(path.station_id.as_deref(), query, STATION_ID);
        let charger_box_id = pick(path.charger_box_id.as_deref(), query, CHARGER_BOX_ID);

        let mut missing = Vec::new();
        if station_id.is_empty() {
            missing.push(STATION_ID);
        }
        if charger_box_id.is_empty() {
            missing.push(CHARGER_BOX_ID);
        }
        if !missing.is_empty() {
            return Err(InvalidLink { missing });
        }

        Ok(Self {
            station_id,
            charger_box_id,
        })
    }
}

fn pick(bound: Option<&str>, query: &str, name: &str) -> String {
    bound
        .map(str::to_string)
        .or_else(|| query_param(query, name))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// First value of `name` in a form-encoded query string.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
