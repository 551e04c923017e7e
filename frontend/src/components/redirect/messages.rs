#[derive(Clone, Debug)]
pub enum Msg {
    /// Sent once after the first render; enters the race.
    Start,
    /// Tap on "Abrir no aplicativo".
    OpenApp,
    /// `visibilitychange` on the document, forwarded by the browser adapter.
    VisibilityChanged,
    /// The fallback `Timeout` elapsed.
    TimerFired,
}
