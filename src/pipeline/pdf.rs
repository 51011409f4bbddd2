//! PDF export via headless Chrome.
//!
//! The rendered page is handed to the browser as a `data:` URI — no temp
//! HTML file, no local web server. Chrome is told to print straight to the
//! target path and given a private scratch directory for its profile and
//! crash-dump state, which is removed on every exit path.
//!
//! Headless Chrome's exit status is famously unreliable: it can exit
//! non-zero (or get killed by our deadline) after writing a perfectly good
//! PDF, and it can exit zero having written nothing. The process outcome
//! is therefore ignored wholesale; the one and only success criterion is
//! that a file exists at the expected path afterwards.

use crate::config::RenderConfig;
use crate::error::MdResumeError;
use crate::pipeline::chrome;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, warn};

/// Hard cap on the browser invocation. A one-page data-URI print is an
/// instant operation; anything slower is a hung renderer.
const PDF_TIMEOUT: Duration = Duration::from_secs(5);

/// Print the rendered document to `<prefix>.pdf`.
///
/// Resolves a browser executable, invokes it headless with the document
/// embedded as a base64 data URI, and verifies afterwards that the PDF
/// materialized on disk.
///
/// # Errors
///
/// [`MdResumeError::BrowserNotFound`] when discovery fails, or
/// [`MdResumeError::PdfNotCreated`] when no file exists at the target path
/// after the invocation (including deadline kills and spawn failures).
pub async fn export(
    html: &str,
    prefix: &str,
    config: &RenderConfig,
) -> Result<PathBuf, MdResumeError> {
    let browser = chrome::find_chrome(config.chrome_path.as_deref())?;
    let pdf_path = PathBuf::from(format!("{prefix}.pdf"));

    let data_uri = format!("data:text/html;base64,{}", STANDARD.encode(html.as_bytes()));

    let scratch =
        TempDir::new().map_err(|e| MdResumeError::Internal(format!("scratch dir: {e}")))?;

    let args = invocation_args(scratch.path(), &pdf_path, &data_uri);
    debug!("Running: {} {}", browser.display(), args.join(" "));

    run_to_completion(&browser, &args).await;

    // `scratch` is dropped — and the directory deleted — on both branches.
    if tokio::fs::metadata(&pdf_path).await.is_ok() {
        Ok(pdf_path)
    } else {
        Err(MdResumeError::PdfNotCreated { path: pdf_path })
    }
}

/// Spawn the browser and wait for it, bounded by [`PDF_TIMEOUT`].
///
/// Spawn failures and exit statuses are swallowed on purpose; the caller's
/// file-existence check is the only verdict that counts.
async fn run_to_completion(browser: &Path, args: &[String]) {
    let spawned = Command::new(browser)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn();

    match spawned {
        Ok(mut child) => {
            if tokio::time::timeout(PDF_TIMEOUT, child.wait()).await.is_err() {
                warn!(
                    "Chrome still running after {}s — killing it",
                    PDF_TIMEOUT.as_secs()
                );
                let _ = child.kill().await;
            }
        }
        Err(e) => debug!("Chrome failed to start: {e}"),
    }
}

/// Fixed headless flag set, scratch-dir bindings, target path, and the
/// data URI as the final positional argument.
fn invocation_args(scratch: &Path, pdf_path: &Path, data_uri: &str) -> Vec<String> {
    vec![
        "--no-sandbox".into(),
        "--headless".into(),
        "--print-to-pdf-no-header".into(),
        "--no-pdf-header-footer".into(),
        "--enable-logging=stderr".into(),
        "--log-level=2".into(),
        "--in-process-gpu".into(),
        "--disable-gpu".into(),
        "--disable-software-rasterizer".into(),
        "--disable-dev-shm-usage".into(),
        "--disable-background-networking".into(),
        "--disable-background-timer-throttling".into(),
        "--disable-backgrounding-occluded-windows".into(),
        "--disable-renderer-backgrounding".into(),
        "--run-all-compositor-stages-before-draw".into(),
        format!("--crash-dumps-dir={}", scratch.display()),
        format!("--user-data-dir={}", scratch.display()),
        format!("--print-to-pdf={}", pdf_path.display()),
        data_uri.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_is_the_final_argument() {
        let args = invocation_args(
            Path::new("/tmp/scratch"),
            Path::new("out.pdf"),
            "data:text/html;base64,PGI+",
        );
        assert_eq!(args.last().unwrap(), "data:text/html;base64,PGI+");
        assert!(args.contains(&"--print-to-pdf=out.pdf".to_string()));
        assert!(args.contains(&"--user-data-dir=/tmp/scratch".to_string()));
        assert!(args.contains(&"--crash-dumps-dir=/tmp/scratch".to_string()));
        assert_eq!(args[0], "--no-sandbox");
        assert!(args.contains(&"--headless".to_string()));
    }

    #[test]
    fn encoded_document_round_trips() {
        let html = "<html><body>résumé</body></html>";
        let encoded = STANDARD.encode(html.as_bytes());
        assert_eq!(STANDARD.decode(&encoded).unwrap(), html.as_bytes());
    }

    #[tokio::test]
    async fn unlaunchable_browser_surfaces_as_pdf_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("out");
        let config = RenderConfig::builder()
            .chrome_path("/definitely/not/a/browser")
            .build();

        let err = export("<html></html>", prefix.to_str().unwrap(), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, MdResumeError::PdfNotCreated { .. }), "got: {err}");
        assert!(!prefix.with_file_name("out.pdf").exists());
    }
}
