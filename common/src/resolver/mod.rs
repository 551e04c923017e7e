//! The link resolver: identifiers in, navigations out.
//!
//! - `machine`: the explicit state machine for the open-app/fallback race.
//! - `browser`: the capability trait through which navigations, the timer and
//!   the visibility listener reach the real browser.
//! - `session`: binds one page view's destinations, machine and browser, and
//!   guarantees teardown on drop.

mod browser;
mod machine;
mod session;

pub use browser::Browser;
pub use machine::{Effect, Event, Machine, MachineState, NavigationMode, Target};
pub use session::ResolverSession;
