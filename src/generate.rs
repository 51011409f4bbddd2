//! Top-level entry points: one call takes a Markdown file to its outputs.
//!
//! The pipeline is strictly linear — strip, render, write HTML, print PDF —
//! and every failure past CSS loading is fatal. There is no partial-success
//! mode: the first error aborts the run, and outputs written before the
//! failure are left on disk exactly as a shell script would leave them.

use crate::config::RenderConfig;
use crate::error::MdResumeError;
use crate::pipeline::{html, pdf};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a render run produced.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The complete standalone HTML document, whether or not it was written.
    pub html: String,
    /// Path of the written HTML file, unless HTML output was suppressed.
    pub html_path: Option<PathBuf>,
    /// Path of the written PDF, unless PDF output was suppressed.
    pub pdf_path: Option<PathBuf>,
}

/// Render a Markdown file to HTML and (optionally) PDF.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input` — path to a UTF-8 Markdown file, optionally with frontmatter
/// * `config` — render configuration
///
/// # Errors
/// Returns `Err(MdResumeError)` when the input cannot be read, an output
/// file cannot be written, no browser can be found, or the browser failed
/// to produce the PDF. An unreadable CSS file is not an error.
pub async fn generate(
    input: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, MdResumeError> {
    let input = input.as_ref();
    info!("Rendering {}", input.display());

    let source =
        tokio::fs::read_to_string(input)
            .await
            .map_err(|e| MdResumeError::InputRead {
                path: input.to_path_buf(),
                source: e,
            })?;

    let prefix = config
        .output_prefix
        .clone()
        .unwrap_or_else(|| default_prefix(input));

    let mut output = RenderOutput {
        html: html::render_page(&source, config),
        html_path: None,
        pdf_path: None,
    };

    if config.write_html {
        let html_path = PathBuf::from(format!("{prefix}.html"));
        tokio::fs::write(&html_path, &output.html)
            .await
            .map_err(|e| MdResumeError::OutputWrite {
                path: html_path.clone(),
                source: e,
            })?;
        info!("Wrote {}", html_path.display());
        output.html_path = Some(html_path);
    }

    if config.write_pdf {
        let pdf_path = pdf::export(&output.html, &prefix, config).await?;
        info!("Wrote {}", pdf_path.display());
        output.pdf_path = Some(pdf_path);
    }

    Ok(output)
}

/// Synchronous wrapper around [`generate`].
///
/// Creates a temporary tokio runtime internally.
pub fn generate_sync(
    input: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, MdResumeError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| MdResumeError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(generate(input, config))
}

/// Input filename with its final extension removed, directories preserved.
fn default_prefix(input: &Path) -> String {
    let full = input.to_string_lossy();
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => full
            .strip_suffix(&format!(".{ext}"))
            .unwrap_or(full.as_ref())
            .to_string(),
        None => full.into_owned(),
    }
}
