//! Share a post from the command line

use anyhow::Result;

use crate::content::PostId;
use crate::share::{self, ShareAction, SharingGateway};
use crate::Musoclef;

/// Build the share action for a post and hand it to `gateway`.
///
/// Returns the action that was dispatched, or `None` when the platform is
/// unknown (a no-op). An unknown post is an error.
pub fn run(
    site: &Musoclef,
    id: PostId,
    platform: &str,
    gateway: &dyn SharingGateway,
) -> Result<Option<ShareAction>> {
    let action = build(site, id, platform)?;
    match &action {
        Some(action) => share::dispatch(action, gateway),
        None => tracing::info!("Unknown platform {:?}, nothing to do", platform),
    }
    Ok(action)
}

/// Build the share action for a post without performing it
pub fn build(site: &Musoclef, id: PostId, platform: &str) -> Result<Option<ShareAction>> {
    if site.store.get_detail(id).is_none() {
        anyhow::bail!("Post not found: {}", id);
    }
    Ok(site.detail().share_post(id, platform))
}

/// Human-readable description of an action
pub fn describe(action: &ShareAction) -> String {
    match action {
        ShareAction::OpenWindow { url, width, height } => {
            format!("open {} ({}x{})", url, width, height)
        }
        ShareAction::CopyToClipboard(text) => format!("copy {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::PostStore;
    use crate::share::ShareError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl SharingGateway for Recorder {
        fn open_window(&self, url: &str, _width: u32, _height: u32) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("open {}", url));
            Ok(())
        }

        fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("copy {}", text));
            Ok(())
        }
    }

    fn site() -> Musoclef {
        let config = SiteConfig {
            url: "https://musoclef.example".to_string(),
            ..SiteConfig::default()
        };
        Musoclef::with_store(config, std::env::temp_dir(), PostStore::builtin().unwrap())
    }

    #[test]
    fn test_share_copy() {
        let recorder = Recorder::default();
        let action = run(&site(), 1, "copy", &recorder).unwrap();
        assert_eq!(
            action,
            Some(ShareAction::CopyToClipboard(
                "https://musoclef.example/blogs/1/".to_string()
            ))
        );
        assert_eq!(
            recorder.calls.borrow().as_slice(),
            ["copy https://musoclef.example/blogs/1/".to_string()]
        );
    }

    #[test]
    fn test_share_linkedin() {
        let recorder = Recorder::default();
        run(&site(), 1, "linkedin", &recorder).unwrap();
        assert_eq!(
            recorder.calls.borrow()[0],
            "open https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fmusoclef.example%2Fblogs%2F1%2F"
        );
    }

    #[test]
    fn test_unknown_platform_does_nothing() {
        let recorder = Recorder::default();
        assert!(run(&site(), 1, "myspace", &recorder).unwrap().is_none());
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_post_is_error() {
        let recorder = Recorder::default();
        assert!(run(&site(), 9999, "copy", &recorder).is_err());
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_describe() {
        let action = build(&site(), 1, "facebook").unwrap().unwrap();
        assert!(describe(&action).ends_with("(600x400)"));
    }
}
