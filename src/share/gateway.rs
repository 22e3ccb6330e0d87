//! Performing share actions

use thiserror::Error;

use super::ShareAction;

/// Errors from the browser launcher or the clipboard
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to open browser: {0}")]
    Browser(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Capability that carries out share side effects
pub trait SharingGateway {
    /// Open `url` in a new browsing context sized `width` x `height`
    fn open_window(&self, url: &str, width: u32, height: u32) -> Result<(), ShareError>;

    /// Write `text` to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}

/// Hand an action to the gateway. Fire and forget: failures are only logged.
pub fn dispatch(action: &ShareAction, gateway: &dyn SharingGateway) {
    let result = match action {
        ShareAction::OpenWindow { url, width, height } => {
            tracing::debug!("Opening share window {}", url);
            gateway.open_window(url, *width, *height)
        }
        ShareAction::CopyToClipboard(text) => {
            tracing::debug!("Copying {} to clipboard", text);
            gateway.copy_to_clipboard(text)
        }
    };

    if let Err(e) = result {
        tracing::warn!("Share action failed: {}", e);
    }
}

/// Gateway backed by the desktop: the default browser and the system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGateway;

impl SharingGateway for SystemGateway {
    fn open_window(&self, url: &str, width: u32, height: u32) -> Result<(), ShareError> {
        // Desktop browsers pick their own window size.
        tracing::debug!("Requested viewport {}x{} ignored by system browser", width, height);
        open_browser(url)?;
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

/// Open a URL in the default browser
pub fn open_browser(url: &str) -> std::io::Result<()> {
    let os = std::env::consts::OS;
    let Some((program, args)) = launch_command(os, url) else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("no browser launcher for {}", os),
        ));
    };
    std::process::Command::new(program).args(args).spawn()?;
    Ok(())
}

/// Program and arguments that open `url` on `os`.
///
/// The URL is always a single argument and never passes through a shell,
/// so `&` in a query string is not a command separator on Windows.
fn launch_command<'a>(os: &str, url: &'a str) -> Option<(&'static str, Vec<&'a str>)> {
    match os {
        "macos" => Some(("open", vec![url])),
        "windows" => Some(("rundll32", vec!["url.dll,FileProtocolHandler", url])),
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Some(("xdg-open", vec![url])),
        _ => None,
    }
}
