//! Error types for the mdresume library.
//!
//! Every variant of [`MdResumeError`] is fatal: the pipeline has no retries
//! and no partial-success mode, so the first failure aborts the run. Two
//! conditions are deliberately *not* errors:
//!
//! * An unreadable CSS file — the page is rendered unstyled and a warning
//!   is logged.
//! * A headless Chrome process that exits non-zero or crashes — Chrome in
//!   headless mode routinely exits non-cleanly even after writing a perfect
//!   PDF. The only signal that matters is whether the PDF file exists
//!   afterwards; when it does not, that surfaces as [`PdfNotCreated`].
//!
//! [`PdfNotCreated`]: MdResumeError::PdfNotCreated

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the mdresume library.
#[derive(Debug, Error)]
pub enum MdResumeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The Markdown input file could not be read (missing, unreadable, or
    /// not valid UTF-8).
    #[error("Failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not write an output file (HTML page or PDF target path).
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Browser errors ────────────────────────────────────────────────────
    /// No Chrome/Chromium executable was found at any well-known install
    /// location and none was configured.
    #[error(
        "Could not find Chrome or Chromium in any well-known location.\n\
         Point --chrome-path at your browser executable, or pass --no-pdf."
    )]
    BrowserNotFound,

    /// Chrome ran (or failed to run) and no PDF appeared at the expected
    /// path. Exit codes are ignored; this file check is the only verdict.
    #[error("PDF was not created at '{path}'")]
    PdfNotCreated { path: PathBuf },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (e.g. scratch directory creation failed).
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_read_display_names_the_path() {
        let e = MdResumeError::InputRead {
            path: PathBuf::from("cv.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = e.to_string();
        assert!(msg.contains("cv.md"), "got: {msg}");
        assert!(msg.contains("no such file"), "got: {msg}");
    }

    #[test]
    fn browser_not_found_suggests_the_flag() {
        let msg = MdResumeError::BrowserNotFound.to_string();
        assert!(msg.contains("--chrome-path"), "got: {msg}");
    }

    #[test]
    fn pdf_not_created_names_the_expected_path() {
        let e = MdResumeError::PdfNotCreated {
            path: PathBuf::from("resume.pdf"),
        };
        assert!(e.to_string().contains("resume.pdf"));
    }
}
