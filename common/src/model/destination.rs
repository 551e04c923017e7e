use serde::Serialize;
use std::collections::HashMap;

use crate::model::link::Identifiers;
use crate::template::{fill_template, CHARGER_BOX_ID, STATION_ID};

/// The two URLs a link resolves to. Always computed from the identifiers and
/// the templates, never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destinations {
    /// Expected to be intercepted by an OS-level app link handler.
    pub app_url: String,
    /// External web payment page.
    pub web_url: String,
}

impl Destinations {
    pub fn resolve(ids: &Identifiers, app_template: &str, web_template: &str) -> Self {
        let vars = HashMap::from([
            (STATION_ID, ids.station_id.as_str()),
            (CHARGER_BOX_ID, ids.charger_box_id.as_str()),
        ]);
        Self {
            app_url: fill_template(app_template, &vars),
            web_url: fill_template(web_template, &vars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{DEFAULT_APP_URL_TEMPLATE, DEFAULT_WEB_URL_TEMPLATE};

    #[test]
    fn default_templates_resolve_known_link() {
        let ids = Identifiers {
            station_id: "956".into(),
            charger_box_id: "abc-123".into(),
        };
        let dest = Destinations::resolve(&ids, DEFAULT_APP_URL_TEMPLATE, DEFAULT_WEB_URL_TEMPLATE);
        assert_eq!(
            dest.app_url,
            "https://lk-intelbras.use-move.com/station/956/abc-123"
        );
        assert_eq!(
            dest.web_url,
            "https://terminal-pagamento.intelbras-cve-pro.com.br/?chargerBoxId=abc-123"
        );
    }

    #[test]
    fn follows_custom_templates() {
        let ids = Identifiers {
            station_id: "s".into(),
            charger_box_id: "c".into(),
        };
        let dest = Destinations::resolve(&ids, "app://{chargerBoxId}", "https://w/{stationId}");
        assert_eq!(dest.app_url, "app://c");
        assert_eq!(dest.web_url, "https://w/s");
    }
}
