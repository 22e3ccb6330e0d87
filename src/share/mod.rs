//! Social sharing
//!
//! Building a share action is pure: it only produces an outbound URL or a
//! clipboard payload. Performing it is left to a [`SharingGateway`].

mod gateway;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

pub use gateway::{dispatch, open_browser, ShareError, SharingGateway, SystemGateway};

use crate::config::ShareConfig;

/// Characters left alone by ECMAScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const LINKEDIN_SHARE: &str = "https://www.linkedin.com/sharing/share-offsite/";

/// Percent-encode a query component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Share targets offered on a post page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    Facebook,
    Linkedin,
    Copy,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Linkedin,
        Platform::Copy,
    ];

    /// Parse a platform name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "twitter" => Some(Platform::Twitter),
            "facebook" => Some(Platform::Facebook),
            "linkedin" => Some(Platform::Linkedin),
            "copy" => Some(Platform::Copy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Copy => "copy",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Linkedin => "LinkedIn",
            Platform::Copy => "Copy Link",
        }
    }

    /// Outbound share URL, or `None` for [`Platform::Copy`]
    pub fn outbound_url(&self, current_url: &str, title: &str) -> Option<String> {
        let url = encode_component(current_url);
        match self {
            Platform::Twitter => Some(format!(
                "{}?text={}&url={}",
                TWITTER_INTENT,
                encode_component(title),
                url
            )),
            Platform::Facebook => Some(format!("{}?u={}", FACEBOOK_SHARER, url)),
            Platform::Linkedin => Some(format!("{}?url={}", LINKEDIN_SHARE, url)),
            Platform::Copy => None,
        }
    }

    /// Build the action for sharing a page
    pub fn action(&self, current_url: &str, title: &str, config: &ShareConfig) -> ShareAction {
        match self.outbound_url(current_url, title) {
            Some(url) => ShareAction::OpenWindow {
                url,
                width: config.popup_width,
                height: config.popup_height,
            },
            None => ShareAction::CopyToClipboard(current_url.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A side effect requested by a share button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open `url` in a new browsing context of the given size
    OpenWindow { url: String, width: u32, height: u32 },
    /// Put the text on the clipboard, verbatim
    CopyToClipboard(String),
}

/// Build the share action for a platform name. Unknown platforms are a no-op.
pub fn share(
    platform: &str,
    current_url: &str,
    title: &str,
    config: &ShareConfig,
) -> Option<ShareAction> {
    Platform::parse(platform).map(|p| p.action(current_url, title, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/post/1";

    fn open_url(action: Option<ShareAction>) -> String {
        match action {
            Some(ShareAction::OpenWindow { url, .. }) => url,
            other => panic!("expected a window, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_is_not_encoded() {
        let action = share("copy", PAGE, "Title", &ShareConfig::default());
        assert_eq!(action, Some(ShareAction::CopyToClipboard(PAGE.to_string())));
    }

    #[test]
    fn test_twitter_encodes_title_and_url() {
        let url = open_url(share("twitter", PAGE, "A & B", &ShareConfig::default()));
        assert!(url.starts_with("https://twitter.com/intent/tweet?"));
        assert!(url.contains("text=A%20%26%20B"));
        assert!(url.contains("url=https%3A%2F%2Fexample.com%2Fpost%2F1"));
    }

    #[test]
    fn test_facebook_and_linkedin() {
        let config = ShareConfig::default();
        assert_eq!(
            open_url(share("facebook", PAGE, "Title", &config)),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fpost%2F1"
        );
        assert_eq!(
            open_url(share("linkedin", PAGE, "Title", &config)),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fexample.com%2Fpost%2F1"
        );
    }

    #[test]
    fn test_window_uses_configured_viewport() {
        let config = ShareConfig {
            popup_width: 800,
            popup_height: 640,
        };
        match Platform::Facebook.action(PAGE, "Title", &config) {
            ShareAction::OpenWindow { width, height, .. } => {
                assert_eq!((width, height), (800, 640));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_platform_is_noop() {
        let config = ShareConfig::default();
        assert!(share("myspace", PAGE, "Title", &config).is_none());
        assert!(share("Twitter", PAGE, "Title", &config).is_none());
        assert!(share("", PAGE, "Title", &config).is_none());
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("?x=1&y=2#top"), "%3Fx%3D1%26y%3D2%23top");
        assert_eq!(encode_component("Études"), "%C3%89tudes");
    }

    #[test]
    fn test_platform_names_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::parse(platform.as_str()), Some(platform));
        }
    }
}
