//! HTTP server for the blog

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers;
use crate::share::{self, ShareAction};
use crate::templates::TemplateRenderer;
use crate::views::DetailPage;
use crate::Musoclef;

/// Server state
struct ServerState {
    site: Musoclef,
    renderer: TemplateRenderer,
}

/// Query string of the listing page
#[derive(Debug, Default, Deserialize)]
struct ListingQuery {
    #[serde(default)]
    more: Option<String>,
}

impl ListingQuery {
    /// Any `more` value expands the listing except an explicit `false` or `0`
    fn is_more(&self) -> bool {
        match self.more.as_deref() {
            Some(value) => !matches!(value, "false" | "0"),
            None => false,
        }
    }
}

/// Build the application router
pub fn router(site: &Musoclef) -> Result<Router> {
    let state = Arc::new(ServerState {
        site: site.clone(),
        renderer: TemplateRenderer::new(&site.config)?,
    });

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/blogs", get(listing_handler))
        .route("/blogs/", get(listing_handler))
        .route("/blogs/:id", get(post_handler))
        .route("/blogs/:id/", get(post_handler))
        .route("/blogs/:id/share/:platform", get(share_handler))
        .nest_service("/assets", ServeDir::new(&site.asset_dir))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Start the server
pub async fn start(site: &Musoclef, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(site)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    // Open browser if requested
    if open {
        if let Err(e) = share::open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Landing page
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    html_response(StatusCode::OK, state.renderer.render_index())
}

/// Blog listing; `?more=true` shows the expanded listing
async fn listing_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let mut listing = state.site.listing();
    if query.is_more() {
        listing.load_more();
    }

    let more_url = format!(
        "{}?more=true",
        helpers::url_for(&state.site.config, helpers::listing_path())
    );
    html_response(
        StatusCode::OK,
        state.renderer.render_listing(&listing, &more_url),
    )
}

/// Post page, or the not-found fallback with a 404
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    let page = state.site.detail().render(&id);
    let status = match page {
        DetailPage::Article(_) => StatusCode::OK,
        DetailPage::NotFound => StatusCode::NOT_FOUND,
    };
    html_response(status, state.renderer.render_detail(&page))
}

/// Share a post: redirect to the platform, or return the raw URL for `copy`
async fn share_handler(
    State(state): State<Arc<ServerState>>,
    Path((id, platform)): Path<(String, String)>,
) -> Response {
    let Some(post) = state.site.store.resolve(&id) else {
        return not_found(&state);
    };

    let permalink = helpers::post_permalink(&state.site.config, post.id);
    match state.site.detail().share(&platform, &permalink, &post.title) {
        Some(ShareAction::OpenWindow { url, .. }) => Redirect::to(&url).into_response(),
        Some(ShareAction::CopyToClipboard(text)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Anything else
async fn fallback_handler(State(state): State<Arc<ServerState>>) -> Response {
    not_found(&state)
}

fn not_found(state: &ServerState) -> Response {
    html_response(StatusCode::NOT_FOUND, state.renderer.render_not_found())
}

fn html_response(status: StatusCode, rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::PostStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = SiteConfig {
            url: "https://example.com".to_string(),
            ..SiteConfig::default()
        };
        let site = Musoclef::with_store(config, std::env::temp_dir(), PostStore::builtin().unwrap());
        router(&site).unwrap()
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index() {
        let (status, _, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Explore Our Blog"));
    }

    #[tokio::test]
    async fn test_listing_and_load_more() {
        let (status, _, body) = get("/blogs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"class="post-card"#).count(), 9);
        assert!(body.contains(r#"href="/blogs/?more=true""#));

        let (status, _, body) = get("/blogs/?more=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"class="post-card"#).count(), 12);
        assert!(body.contains("reached the end"));
    }

    #[tokio::test]
    async fn test_listing_more_values() {
        for uri in ["/blogs?more=1", "/blogs?more=yes", "/blogs/?more", "/blogs?more=true"] {
            let (status, _, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body.matches(r#"class="post-card"#).count(), 12, "{}", uri);
        }
        for uri in ["/blogs?more=false", "/blogs?more=0", "/blogs?other=1"] {
            let (status, _, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body.matches(r#"class="post-card"#).count(), 9, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_post_found() {
        let (status, _, body) = get("/blogs/1/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("How to Master Piano Scales in 30 Days"));
        assert!(body.contains("Share this article"));
    }

    #[tokio::test]
    async fn test_post_not_found() {
        for uri in ["/blogs/0", "/blogs/-1", "/blogs/9999", "/blogs/abc", "/blogs/2/"] {
            let (status, _, body) = get(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(body.contains("Post Not Found"));
            assert!(!body.contains("Share this article"));
            assert!(!body.contains("About the Author"));
            assert!(!body.contains("TOP POSTS"));
        }
    }

    #[tokio::test]
    async fn test_share_redirects() {
        let (status, location, _) = get("/blogs/1/share/facebook").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location.as_deref(),
            Some("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fblogs%2F1%2F")
        );
    }

    #[tokio::test]
    async fn test_share_copy_and_unknown() {
        let (status, _, body) = get("/blogs/1/share/copy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "https://example.com/blogs/1/");

        let (status, _, body) = get("/blogs/1/share/myspace").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _, _) = get("/blogs/9999/share/copy").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, body) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Back to Blog"));
    }
}
