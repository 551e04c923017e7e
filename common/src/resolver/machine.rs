//! Pure transition function for the open-app / fallback race.
//!
//! `Machine::transition` takes the current state and one event and returns
//! the next state plus the side effects to perform, in order. Nothing here
//! touches a browser or a clock, so every interleaving of timer and
//! visibility events can be driven directly from tests.

use crate::model::config::{LaunchMode, ResolverConfig};
use crate::model::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Page view mounted. `link_valid` is false when an identifier is missing.
    Start { link_valid: bool, mobile: bool },
    /// User tapped the explicit "open app" affordance.
    ManualOpen,
    /// Document visibility changed; `hidden` is read when the event arrives.
    VisibilityChanged { hidden: bool },
    /// Fallback timer elapsed; `hidden` is re-read at fire time.
    TimerFired { hidden: bool },
    /// Page view is going away.
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    App,
    Web,
}

/// `Push` adds a history entry, `Replace` overwrites the current one so the
/// redirect page cannot be reached again with the back button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    Push,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Navigate { target: Target, mode: NavigationMode },
    ArmTimer { delay_ms: u32 },
    CancelTimer,
    WatchVisibility,
    UnwatchVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MachineState {
    pub status: Status,
    pub started: bool,
    /// A fallback timer is pending.
    pub timer_armed: bool,
    /// A fallback timer was armed at some point in this view.
    pub timer_spent: bool,
    /// A visibility listener is attached.
    pub watching: bool,
    /// The web destination was navigated to; the view is done.
    pub web_issued: bool,
    pub torn_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    pub launch_mode: LaunchMode,
    pub fallback_delay_ms: u32,
}

impl Machine {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            launch_mode: config.launch_mode,
            fallback_delay_ms: config.fallback_delay_ms,
        }
    }

    pub fn transition(&self, state: MachineState, event: Event) -> (MachineState, Vec<Effect>) {
        if state.torn_down {
            return (state, Vec::new());
        }

        let mut next = state;
        let mut effects = Vec::new();

        match event {
            Event::Start { .. } if state.started => {}

            Event::Start { link_valid: false, .. } => {
                next.started = true;
                next.status = Status::Invalid;
            }

            Event::Start { mobile, .. } => {
                next.started = true;
                if !mobile || self.launch_mode.web_only() {
                    go_web(&mut next, &mut effects);
                } else if self.launch_mode.auto_attempt_app {
                    next.status = Status::OpeningApp;
                    self.start_race(&mut next, &mut effects);
                }
            }

            Event::ManualOpen if !state.started || state.status == Status::Invalid => {}

            Event::ManualOpen => {
                if matches!(state.status, Status::Idle | Status::OpeningApp) {
                    next.status = Status::Trying;
                }
                if !state.timer_spent && !state.web_issued {
                    self.start_race(&mut next, &mut effects);
                } else {
                    effects.push(Effect::Navigate {
                        target: Target::App,
                        mode: NavigationMode::Push,
                    });
                }
            }

            Event::VisibilityChanged { hidden: true } if state.timer_armed => {
                next.timer_armed = false;
                effects.push(Effect::CancelTimer);
                unwatch(&mut next, &mut effects);
            }

            Event::VisibilityChanged { .. } => {}

            Event::TimerFired { hidden } if state.timer_armed => {
                next.timer_armed = false;
                unwatch(&mut next, &mut effects);
                if !hidden {
                    next.status = Status::Fallback;
                    go_web(&mut next, &mut effects);
                }
            }

            Event::TimerFired { .. } => {}

            Event::Teardown => {
                if state.timer_armed {
                    next.timer_armed = false;
                    effects.push(Effect::CancelTimer);
                }
                unwatch(&mut next, &mut effects);
                next.torn_down = true;
            }
        }

        (next, effects)
    }

    /// Listener first so a hide caused by the navigation is never missed.
    fn start_race(&self, next: &mut MachineState, effects: &mut Vec<Effect>) {
        next.timer_armed = true;
        next.timer_spent = true;
        next.watching = true;
        effects.push(Effect::WatchVisibility);
        effects.push(Effect::ArmTimer {
            delay_ms: self.fallback_delay_ms,
        });
        effects.push(Effect::Navigate {
            target: Target::App,
            mode: NavigationMode::Push,
        });
    }
}

fn go_web(next: &mut MachineState, effects: &mut Vec<Effect>) {
    next.web_issued = true;
    effects.push(Effect::Navigate {
        target: Target::Web,
        mode: NavigationMode::Replace,
    });
}

fn unwatch(next: &mut MachineState, effects: &mut Vec<Effect>) {
    if next.watching {
        next.watching = false;
        effects.push(Effect::UnwatchVisibility);
    }
}
