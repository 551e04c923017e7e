//! Advisory client classification from the user-agent string.
//!
//! The device class decides whether an app-open attempt is made at all; the
//! in-app browser class only changes the hint shown to the user. Neither is
//! needed for the fallback race to end correctly: a missing user agent is
//! treated as mobile, and the fallback timer covers a failed attempt.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|iPhone|iPad|iPod").expect("mobile pattern is valid")
});

/// Checked in order: WeChat's `MicroMessenger` would otherwise match Messenger,
/// and Messenger's user agent also carries Facebook's `FBAN`.
static IN_APP_SIGNATURES: LazyLock<Vec<(InAppBrowser, Regex)>> = LazyLock::new(|| {
    [
        (InAppBrowser::WeChat, r"MicroMessenger"),
        (InAppBrowser::Messenger, r"(?i)Messenger|FB_IAB/MESSENGER"),
        (InAppBrowser::Facebook, r"FBAN|FBAV|FB_IAB|FBIOS"),
        (InAppBrowser::Instagram, r"(?i)Instagram"),
        (InAppBrowser::WhatsApp, r"(?i)WhatsApp"),
        (InAppBrowser::Line, r"\bLine/"),
        (InAppBrowser::TikTok, r"(?i)TikTok|musical_ly|BytedanceWebview"),
        (InAppBrowser::Snapchat, r"(?i)Snapchat"),
        (InAppBrowser::Twitter, r"(?i)Twitter|TwitterAndroid"),
        (InAppBrowser::LinkedIn, r"LinkedInApp"),
    ]
    .into_iter()
    .map(|(app, pattern)| (app, Regex::new(pattern).expect("in-app pattern is valid")))
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// Social apps whose embedded webview may refuse to hand app links to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InAppBrowser {
    Facebook,
    Messenger,
    Instagram,
    WhatsApp,
    Line,
    TikTok,
    Snapchat,
    Twitter,
    LinkedIn,
    WeChat,
}

impl InAppBrowser {
    pub fn display_name(&self) -> &'static str {
        match self {
            InAppBrowser::Facebook => "Facebook",
            InAppBrowser::Messenger => "Messenger",
            InAppBrowser::Instagram => "Instagram",
            InAppBrowser::WhatsApp => "WhatsApp",
            InAppBrowser::Line => "LINE",
            InAppBrowser::TikTok => "TikTok",
            InAppBrowser::Snapchat => "Snapchat",
            InAppBrowser::Twitter => "X (Twitter)",
            InAppBrowser::LinkedIn => "LinkedIn",
            InAppBrowser::WeChat => "WeChat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientClass {
    pub device: DeviceClass,
    pub in_app_browser: Option<InAppBrowser>,
}

impl ClientClass {
    /// Classifies a user agent. `None` (user agent unavailable) is treated as
    /// a mobile client in a regular browser.
    pub fn classify(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return Self {
                device: DeviceClass::Mobile,
                in_app_browser: None,
            };
        };

        let device = if MOBILE_RE.is_match(ua) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        };
        let in_app_browser = IN_APP_SIGNATURES
            .iter()
            .find(|(_, re)| re.is_match(ua))
            .map(|(app, _)| *app);

        Self {
            device,
            in_app_browser,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const DESKTOP_FIREFOX: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0";
    const INSTAGRAM_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Instagram 327.0.0.30.120 (iPhone14,5; iOS 17_4; pt_BR)";
    const FACEBOOK_ANDROID: &str = "Mozilla/5.0 (Linux; Android 13; SM-A536B Build/TP1A; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/123.0 Mobile Safari/537.36 [FB_IAB/FB4A;FBAV/458.0.0.40.95;]";
    const MESSENGER_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 [FBAN/MessengerForiOS;FBAV/440.0]";
    const WECHAT: &str = "Mozilla/5.0 (Linux; Android 12) AppleWebKit/537.36 Chrome/86.0 Mobile Safari/537.36 MicroMessenger/8.0.47";

    #[test]
    fn mobile_platforms() {
        for ua in [IPHONE_SAFARI, ANDROID_CHROME, "ipad", "Mozilla/5.0 (iPod touch)"] {
            assert_eq!(ClientClass::classify(Some(ua)).device, DeviceClass::Mobile, "{ua}");
        }
    }

    #[test]
    fn desktop_browser() {
        let class = ClientClass::classify(Some(DESKTOP_FIREFOX));
        assert_eq!(class.device, DeviceClass::Desktop);
        assert_eq!(class.in_app_browser, None);
        assert!(!class.is_mobile());
    }

    #[test]
    fn in_app_browsers() {
        let cases = [
            (INSTAGRAM_IOS, InAppBrowser::Instagram),
            (FACEBOOK_ANDROID, InAppBrowser::Facebook),
            (MESSENGER_IOS, InAppBrowser::Messenger),
            (WECHAT, InAppBrowser::WeChat),
        ];
        for (ua, expected) in cases {
            let class = ClientClass::classify(Some(ua));
            assert_eq!(class.in_app_browser, Some(expected), "{ua}");
            assert!(class.is_mobile());
        }
        assert_eq!(ClientClass::classify(Some(IPHONE_SAFARI)).in_app_browser, None);
        assert_eq!(ClientClass::classify(Some(ANDROID_CHROME)).in_app_browser, None);
    }

    #[test]
    fn axes_are_independent() {
        let desktop_webview = "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 LinkedInApp";
        let class = ClientClass::classify(Some(desktop_webview));
        assert_eq!(class.device, DeviceClass::Desktop);
        assert_eq!(class.in_app_browser, Some(InAppBrowser::LinkedIn));
    }

    #[test]
    fn missing_user_agent_is_treated_as_mobile() {
        let class = ClientClass::classify(None);
        assert!(class.is_mobile());
        assert_eq!(class.in_app_browser, None);
    }
}
