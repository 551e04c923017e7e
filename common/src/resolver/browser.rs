use super::machine::NavigationMode;

/// Browser primitives the resolver consumes but does not own.
///
/// Timer expiry and visibility changes are not callbacks here: the
/// implementation reports them back by calling
/// [`ResolverSession::timer_fired`](super::ResolverSession::timer_fired) and
/// [`ResolverSession::visibility_changed`](super::ResolverSession::visibility_changed).
pub trait Browser {
    /// Top-level navigation of the current page.
    fn navigate(&mut self, url: &str, mode: NavigationMode);

    /// Whether the document is currently hidden.
    fn is_hidden(&self) -> bool;

    /// Schedules a single fallback timer. Never called while one is pending.
    fn arm_timer(&mut self, delay_ms: u32);

    /// Clears the pending timer, if any. After this returns the timer must
    /// not be reported as fired.
    fn cancel_timer(&mut self);

    /// Starts listening for visibility changes.
    fn watch_visibility(&mut self);

    /// Detaches the visibility listener, if any.
    fn unwatch_visibility(&mut self);
}
