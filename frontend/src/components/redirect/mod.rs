//! Redirect page: resolves one charger link and races the app hand-off
//! against the web fallback.
//!
//! The component only wires Yew to `common::resolver::ResolverSession`:
//! - `create` classifies the client and builds the session around a
//!   `WebBrowser`.
//! - The first render posts `Msg::Start`; `update` forwards every message to
//!   the session.
//! - `destroy` drops the session, which clears the fallback timer and
//!   detaches the visibility listener.

use common::model::client::ClientClass;
use common::model::link::Identifiers;
use common::resolver::ResolverSession;
use yew::prelude::*;

mod browser;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use browser::WebBrowser;
use messages::Msg;
use props::RedirectProps;
pub use state::RedirectPage;

impl Component for RedirectPage {
    type Message = Msg;
    type Properties = RedirectProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let user_agent = web_sys::window().and_then(|w| w.navigator().user_agent().ok());
        let client = ClientClass::classify(user_agent.as_deref());
        let link = Identifiers::extract(&props.path_params, &props.query);
        let browser = WebBrowser::new(ctx.link().clone());
        let session = ResolverSession::new(&props.config, link, browser);

        RedirectPage {
            session: Some(session),
            client,
            launch_mode: props.config.launch_mode,
            started: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            ctx.link().send_message(Msg::Start);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session = None;
    }
}
