//! Route table for the link surface.
//!
//! - `/r/{stationId}/{chargerBoxId}` binds both identifiers from the path
//! - `/q?stationId=..&chargerBoxId=..` reads them from the query string
//! - `/` is rewritten to `/q`, keeping the query string
//! - anything else is not found

use crate::model::link::PathParams;

pub const QUERY_PATH: &str = "/q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/r/{stationId}/{chargerBoxId}`; segments are still percent-encoded.
    PathLink {
        station_id: String,
        charger_box_id: String,
    },
    QueryLink,
    Root,
    NotFound,
}

impl Route {
    /// Matches a URL path (no query, no fragment). One trailing slash is
    /// tolerated; empty segments never match.
    pub fn recognize(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed.is_empty() || trimmed == "/" {
            return Route::Root;
        }
        if trimmed == QUERY_PATH {
            return Route::QueryLink;
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["r", station, charger] if !station.is_empty() && !charger.is_empty() => {
                Route::PathLink {
                    station_id: station.to_string(),
                    charger_box_id: charger.to_string(),
                }
            }
            _ => Route::NotFound,
        }
    }

    /// Path bindings for identifier extraction. `decode` percent-decodes a raw
    /// segment.
    pub fn path_params<F>(&self, decode: F) -> PathParams
    where
        F: Fn(&str) -> String,
    {
        match self {
            Route::PathLink {
                station_id,
                charger_box_id,
            } => PathParams {
                station_id: Some(decode(station_id)),
                charger_box_id: Some(decode(charger_box_id)),
            },
            _ => PathParams::default(),
        }
    }

    /// Whether this route renders the redirect page.
    pub fn resolves_link(&self) -> bool {
        matches!(self, Route::PathLink { .. } | Route::QueryLink)
    }
}

/// Target of the root redirect: `/q` with the original search string.
pub fn root_redirect_target(search: &str) -> String {
    if search.is_empty() || search == "?" {
        QUERY_PATH.to_string()
    } else if search.starts_with('?') {
        format!("{QUERY_PATH}{search}")
    } else {
        format!("{QUERY_PATH}?{search}")
    }
}
