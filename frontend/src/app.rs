use std::rc::Rc;

use common::model::config::{ConfigError, ResolverConfig};
use common::routes::{root_redirect_target, Route};
use log::{error, info, warn};
use wasm_bindgen::JsValue;
use yew::{html, Component, Context, Html};

use crate::components::config_error::ConfigErrorPage;
use crate::components::not_found::NotFoundPage;
use crate::components::redirect::RedirectPage;
use crate::config;

/// Route table. Configuration and location are read once, here.
pub struct App {
    config: Result<Rc<ResolverConfig>, ConfigError>,
    route: Route,
    search: String,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load().map(Rc::new);
        match &config {
            Ok(cfg) => info!(
                "resolver config: {}",
                serde_json::to_string(&**cfg).unwrap_or_default()
            ),
            Err(err) => error!("invalid configuration: {err}"),
        }

        let (path, search) = current_location();
        let mut route = Route::recognize(&path);
        if route == Route::Root {
            replace_history(&root_redirect_target(&search));
            route = Route::QueryLink;
        }

        Self {
            config,
            route,
            search,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if !self.route.resolves_link() {
            return html! { <NotFoundPage /> };
        }

        match &self.config {
            Err(err) => html! { <ConfigErrorPage message={err.to_string()} /> },
            Ok(cfg) => html! {
                <RedirectPage
                    config={cfg.clone()}
                    path_params={self.route.path_params(decode_segment)}
                    query={self.search.clone()}
                />
            },
        }
    }
}

fn current_location() -> (String, String) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return (String::new(), String::new());
    };
    (
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default(),
    )
}

/// Rewrites the address bar without loading a new page or adding a history
/// entry.
fn replace_history(url: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
        warn!("could not rewrite location to {url}: {err:?}");
    }
}

fn decode_segment(raw: &str) -> String {
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}
