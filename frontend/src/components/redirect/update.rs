//! Update function for the redirect page.
//!
//! Every message is forwarded to the `ResolverSession`, which decides what
//! happens. Messages arriving after teardown are dropped.

use yew::prelude::*;

use super::messages::Msg;
use super::state::RedirectPage;

pub fn update(page: &mut RedirectPage, _ctx: &Context<RedirectPage>, msg: Msg) -> bool {
    let client = page.client;
    let Some(session) = page.session.as_mut() else {
        return false;
    };
    let before = session.state();

    match msg {
        Msg::Start => {
            if page.started {
                return false;
            }
            page.started = true;
            session.start(client);
        }
        Msg::OpenApp => session.open_app(),
        Msg::VisibilityChanged => session.visibility_changed(),
        Msg::TimerFired => session.timer_fired(),
    }

    session.state() != before
}
