//! Desktop window display for the rendered graph page.
//!
//! Prefers a Chromium-family browser in app mode, which gives a plain
//! window at the requested geometry with scripting enabled and no browser
//! chrome. Falls back to the platform opener when none is installed.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use notegraph_core::{Error, Result};

/// Minimum window geometry for the graph viewer.
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;

/// Binaries probed for app-mode support, in order.
const BROWSER_CANDIDATES: [&str; 6] = [
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "brave-browser",
    "microsoft-edge",
];

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Pick the browser binary for the viewer window. `NOTEGRAPH_BROWSER`
/// overrides the probe order.
fn app_mode_browser() -> Option<String> {
    if let Ok(browser) = std::env::var("NOTEGRAPH_BROWSER") {
        let browser = browser.trim();
        if !browser.is_empty() {
            return Some(browser.to_string());
        }
    }
    BROWSER_CANDIDATES
        .iter()
        .find(|b| command_exists(b))
        .map(|b| b.to_string())
}

fn page_url(html_path: &Path) -> String {
    let absolute = html_path
        .canonicalize()
        .unwrap_or_else(|_| html_path.to_path_buf());
    format!("file://{}", absolute.display())
}

/// Display the rendered page in a desktop window.
///
/// Blocks until the app-mode window is closed; with the fallback opener
/// the call returns once the page has been handed to the default browser.
pub fn show_in_window(html_path: &Path) -> Result<()> {
    let url = page_url(html_path);

    if let Some(browser) = app_mode_browser() {
        info!("Opening graph window via {}", browser);
        match Command::new(&browser)
            .arg(format!("--app={}", url))
            .arg(format!("--window-size={},{}", WINDOW_WIDTH, WINDOW_HEIGHT))
            .status()
        {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => warn!("{} exited with status {}", browser, status),
            Err(e) => warn!("Failed to launch {}: {}", browser, e),
        }
    }

    open_in_default_browser(&url)
}

fn open_in_default_browser(url: &str) -> Result<()> {
    if cfg!(target_os = "macos") && command_exists("open") {
        let status = Command::new("open").arg(url).status()?;
        if status.success() {
            return Ok(());
        }
        return Err(Error::Browser(format!(
            "`open` exited with status {}",
            status
        )));
    }
    if command_exists("xdg-open") {
        let status = Command::new("xdg-open").arg(url).status()?;
        if status.success() {
            return Ok(());
        }
        return Err(Error::Browser(format!(
            "`xdg-open` exited with status {}",
            status
        )));
    }
    Err(Error::Browser(
        "no browser found; set NOTEGRAPH_BROWSER to a Chromium-family binary".to_string(),
    ))
}
