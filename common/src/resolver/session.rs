use log::{debug, info, warn};

use crate::model::client::ClientClass;
use crate::model::config::ResolverConfig;
use crate::model::destination::Destinations;
use crate::model::link::{Identifiers, InvalidLink};
use crate::model::status::Status;

use super::browser::Browser;
use super::machine::{Effect, Event, Machine, MachineState, Target};

/// One page view's resolution.
///
/// Owns the machine state and the browser capability. Every input goes
/// through [`Machine::transition`] and the returned effects are executed
/// against the browser. Dropping the session tears it down, which clears a
/// pending timer and detaches the visibility listener whatever state was
/// reached.
pub struct ResolverSession<B: Browser> {
    machine: Machine,
    state: MachineState,
    link: Result<Destinations, InvalidLink>,
    browser: B,
}

impl<B: Browser> ResolverSession<B> {
    pub fn new(
        config: &ResolverConfig,
        link: Result<Identifiers, InvalidLink>,
        browser: B,
    ) -> Self {
        let link = link.map(|ids| {
            Destinations::resolve(&ids, &config.app_url_template, &config.web_url_template)
        });
        Self {
            machine: Machine::new(config),
            state: MachineState::default(),
            link,
            browser,
        }
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    /// `None` for an invalid link.
    pub fn destinations(&self) -> Option<&Destinations> {
        self.link.as_ref().ok()
    }

    pub fn invalid_link(&self) -> Option<&InvalidLink> {
        self.link.as_ref().err()
    }

    /// True from construction for a link missing an identifier, before the
    /// machine has been started.
    pub fn is_invalid(&self) -> bool {
        self.link.is_err() || self.state.status == Status::Invalid
    }

    /// Enters the race. `client` decides between the app attempt and the
    /// direct web redirect.
    pub fn start(&mut self, client: ClientClass) {
        match &self.link {
            Ok(dest) => info!(
                "resolving link: app={} web={} client={:?}",
                dest.app_url, dest.web_url, client
            ),
            Err(err) => warn!("{err}"),
        }
        self.dispatch(Event::Start {
            link_valid: self.link.is_ok(),
            mobile: client.is_mobile(),
        });
    }

    /// User gesture on the "open app" affordance.
    pub fn open_app(&mut self) {
        self.dispatch(Event::ManualOpen);
    }

    /// Called by the browser when the document visibility changed.
    pub fn visibility_changed(&mut self) {
        let hidden = self.browser.is_hidden();
        self.dispatch(Event::VisibilityChanged { hidden });
    }

    /// Called by the browser when the fallback timer elapsed. Visibility is
    /// read now, not when the timer was armed.
    pub fn timer_fired(&mut self) {
        let hidden = self.browser.is_hidden();
        self.dispatch(Event::TimerFired { hidden });
    }

    pub fn teardown(&mut self) {
        self.dispatch(Event::Teardown);
    }

    fn dispatch(&mut self, event: Event) {
        let before = self.state.status;
        let (next, effects) = self.machine.transition(self.state, event);
        self.state = next;

        if before != next.status {
            debug!("status {before} -> {} on {event:?}", next.status);
        }
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        debug!("effect {effect:?}");
        match effect {
            Effect::Navigate { target, mode } => {
                let Ok(dest) = &self.link else {
                    return;
                };
                let url = match target {
                    Target::App => &dest.app_url,
                    Target::Web => &dest.web_url,
                };
                self.browser.navigate(url, mode);
            }
            Effect::ArmTimer { delay_ms } => self.browser.arm_timer(delay_ms),
            Effect::CancelTimer => self.browser.cancel_timer(),
            Effect::WatchVisibility => self.browser.watch_visibility(),
            Effect::UnwatchVisibility => self.browser.unwatch_visibility(),
        }
    }
}

impl<B: Browser> Drop for ResolverSession<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
