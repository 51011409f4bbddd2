//! Chrome/Chromium executable discovery.
//!
//! There is no registry to consult and no `$PATH` contract to rely on:
//! browsers install into a handful of well-known locations per platform.
//! Each platform gets a static ordered guess list; the first path that
//! stats wins. An explicitly configured path short-circuits discovery and
//! is used as-is — if it is wrong, the invocation stage's file check will
//! say so.

use crate::error::MdResumeError;
use std::path::{Path, PathBuf};
use tracing::info;

const MACOS_GUESSES: &[&str] = &[
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
    "/Applications/Google Chrome Canary.app/Contents/MacOS/Google Chrome Canary",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
];

const WINDOWS_GUESSES: &[&str] = &[
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
];

const LINUX_GUESSES: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/chrome",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/local/bin/chrome",
    "/usr/local/bin/chromium",
];

/// Guess list for a platform identifier (`std::env::consts::OS` values).
///
/// Unrecognized platforms fall back to the Linux list; the BSDs and friends
/// mostly install to the same places.
fn guesses_for(os: &str) -> &'static [&'static str] {
    match os {
        "macos" => MACOS_GUESSES,
        "windows" => WINDOWS_GUESSES,
        _ => LINUX_GUESSES,
    }
}

/// First guess that exists on the filesystem.
fn first_existing(guesses: &[&str]) -> Option<PathBuf> {
    guesses
        .iter()
        .find(|path| std::fs::metadata(path).is_ok())
        .map(PathBuf::from)
}

/// Locate a Chrome or Chromium executable.
///
/// An explicit override is returned without validation. Otherwise the
/// current platform's guess list is probed in order; if nothing exists,
/// this is a terminal failure — the user must install a browser or point
/// `--chrome-path` at one.
pub fn find_chrome(explicit: Option<&Path>) -> Result<PathBuf, MdResumeError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match first_existing(guesses_for(std::env::consts::OS)) {
        Some(path) => {
            info!("Found Chrome/Chromium at {}", path.display());
            Ok(path)
        }
        None => Err(MdResumeError::BrowserNotFound),
    }
}
