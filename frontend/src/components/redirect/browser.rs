//! `Browser` implementation backed by `web-sys` and `gloo-timers`.
//!
//! Timer expiry and visibility changes are posted back to the owning
//! `RedirectPage` as messages. Both handles release themselves on drop: a
//! dropped `Timeout` is cleared and a dropped `VisibilityListener` removes
//! itself from the document, so dropping `WebBrowser` leaves nothing behind.

use common::resolver::{Browser, NavigationMode};
use gloo_timers::callback::Timeout;
use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;
use yew::html::Scope;
use yew::Callback;

use super::messages::Msg;
use super::state::RedirectPage;

const VISIBILITY_CHANGE: &str = "visibilitychange";

pub struct WebBrowser {
    link: Scope<RedirectPage>,
    timeout: Option<Timeout>,
    visibility: Option<VisibilityListener>,
}

impl WebBrowser {
    pub fn new(link: Scope<RedirectPage>) -> Self {
        Self {
            link,
            timeout: None,
            visibility: None,
        }
    }
}

impl Browser for WebBrowser {
    fn navigate(&mut self, url: &str, mode: NavigationMode) {
        let Some(window) = web_sys::window() else {
            error!("no window to navigate to {url}");
            return;
        };
        let location = window.location();
        let result = match mode {
            NavigationMode::Push => location.set_href(url),
            NavigationMode::Replace => location.replace(url),
        };
        if let Err(err) = result {
            error!("navigation to {url} failed: {err:?}");
        }
    }

    fn is_hidden(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.hidden())
    }

    fn arm_timer(&mut self, delay_ms: u32) {
        let link = self.link.clone();
        self.timeout = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::TimerFired)
        }));
    }

    fn cancel_timer(&mut self) {
        self.timeout = None;
    }

    fn watch_visibility(&mut self) {
        let on_change = self.link.callback(|_: ()| Msg::VisibilityChanged);
        self.visibility = VisibilityListener::attach(on_change);
        if self.visibility.is_none() {
            warn!("visibility listener unavailable; fallback relies on the fire-time check");
        }
    }

    fn unwatch_visibility(&mut self) {
        self.visibility = None;
    }
}

struct VisibilityListener {
    document: Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl VisibilityListener {
    fn attach(on_change: Callback<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            on_change.emit(())
        });
        document
            .add_event_listener_with_callback(VISIBILITY_CHANGE, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, closure })
    }
}

impl Drop for VisibilityListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            VISIBILITY_CHANGE,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
