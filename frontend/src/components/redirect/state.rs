//! Component state for the redirect page.

use common::model::client::ClientClass;
use common::model::config::LaunchMode;
use common::model::destination::Destinations;
use common::model::status::Status;
use common::resolver::ResolverSession;

use super::browser::WebBrowser;

pub struct RedirectPage {
    /// `None` once the page has been torn down.
    pub session: Option<ResolverSession<WebBrowser>>,

    /// Classified once from `navigator.userAgent` at creation.
    pub client: ClientClass,

    /// Copied from the configuration; decides whether the button is shown.
    pub launch_mode: LaunchMode,

    /// Guard so the race is entered on the first render only.
    pub started: bool,
}

impl RedirectPage {
    pub fn status(&self) -> Status {
        self.session
            .as_ref()
            .map(|s| s.status())
            .unwrap_or_default()
    }

    /// Known from creation, so the first paint never shows a redirect page
    /// for a link that cannot resolve.
    pub fn is_invalid(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_invalid())
    }

    pub fn destinations(&self) -> Option<&Destinations> {
        self.session.as_ref().and_then(|s| s.destinations())
    }

    /// Whether an "open app" button makes sense for this client at all.
    pub fn offers_app(&self) -> bool {
        self.client.is_mobile() && !self.launch_mode.web_only()
    }

    /// Gesture-gated mode before the first tap.
    pub fn awaiting_tap(&self) -> bool {
        self.launch_mode.manual_trigger_required
            && self.client.is_mobile()
            && self
                .session
                .as_ref()
                .is_some_and(|s| !s.state().timer_spent && s.status() == Status::Idle)
    }
}
