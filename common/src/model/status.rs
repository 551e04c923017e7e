use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable status of one redirect page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Nothing attempted yet. A non-mobile client stays here while the web
    /// page loads, and a gesture-gated page stays here until the first tap.
    #[default]
    Idle,
    /// The automatic app-open navigation was issued on load.
    OpeningApp,
    /// An app-open navigation issued from a user gesture is pending.
    Trying,
    /// The fallback timer fired while the page was visible.
    Fallback,
    /// The link is missing an identifier. Absorbing.
    Invalid,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::OpeningApp => "opening-app",
            Status::Trying => "trying",
            Status::Fallback => "fallback",
            Status::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
