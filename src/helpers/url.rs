//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::PostId;

/// Characters that may not appear raw in a quoted HTML attribute URL
const ATTRIBUTE_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blogs/") // -> "/musoclef/blogs/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blogs/1/") // -> "https://example.com/musoclef/blogs/1/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Path of the blog listing
pub fn listing_path() -> &'static str {
    "blogs/"
}

/// Path of the expanded blog listing in generated output
pub fn listing_more_path() -> &'static str {
    "blogs/more/"
}

/// Path of a post page
pub fn post_path(id: PostId) -> String {
    format!("blogs/{}/", id)
}

/// Public URL of a post page, as shared on social platforms
pub fn post_permalink(config: &SiteConfig, id: PostId) -> String {
    full_url_for(config, &post_path(id))
}

/// Resolve an opaque image reference to a URL.
///
/// Absolute URLs pass through; anything else is looked up under `/assets/`.
/// Quotes, angle brackets and whitespace are percent-encoded, so the result
/// can be placed in an attribute unescaped.
pub fn asset_url(config: &SiteConfig, image: &str) -> String {
    let image = utf8_percent_encode(image, ATTRIBUTE_UNSAFE).to_string();
    if image.is_empty()
        || image.starts_with("http://")
        || image.starts_with("https://")
        || image.starts_with("//")
    {
        image
    } else {
        url_for(config, &format!("assets/{}", image.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/musoclef/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blogs/"), "/musoclef/blogs/");
        assert_eq!(url_for(&config, ""), "/musoclef/");
        assert_eq!(url_for(&SiteConfig::default(), "blogs/"), "/blogs/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blogs/"),
            "https://example.com/musoclef/blogs/"
        );
    }

    #[test]
    fn test_post_permalink() {
        assert_eq!(
            post_permalink(&test_config(), 1),
            "https://example.com/musoclef/blogs/1/"
        );
        assert_eq!(
            post_permalink(&SiteConfig::default(), 12),
            "http://localhost:4000/blogs/12/"
        );
    }

    #[test]
    fn test_asset_url() {
        let config = test_config();
        assert_eq!(
            asset_url(&config, "piano-learning.jpg"),
            "/musoclef/assets/piano-learning.jpg"
        );
        assert_eq!(
            asset_url(&config, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(asset_url(&config, ""), "");
    }

    #[test]
    fn test_asset_url_cannot_leave_attribute() {
        let config = test_config();
        assert_eq!(
            asset_url(&config, "x.jpg\" onerror=\"alert(1)"),
            "/musoclef/assets/x.jpg%22%20onerror=%22alert(1)"
        );
        assert_eq!(
            asset_url(&config, "https://cdn.example.com/a.jpg'><script>"),
            "https://cdn.example.com/a.jpg%27%3E%3Cscript%3E"
        );
        assert_eq!(
            asset_url(&config, "my photo.jpg"),
            "/musoclef/assets/my%20photo.jpg"
        );
    }
}
