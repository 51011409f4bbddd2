//! # mdresume
//!
//! Render a Markdown résumé to a styled, standalone HTML page and a
//! print-ready PDF.
//!
//! ## Why this crate?
//!
//! Résumé builders force you into their templates; word processors make
//! version control miserable. A résumé is a perfectly ordinary Markdown
//! document — keep it in git, style it with one CSS file, and let a browser
//! engine do the one thing it is unbeatable at: producing pixel-faithful
//! print output. This crate wires those pieces together in a single pass.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume.md
//!  │
//!  ├─ 1. Strip    remove an optional ---‑delimited frontmatter block
//!  ├─ 2. Render   comrak (GFM + smart typography) → HTML fragment,
//!  │              wrapped in a fixed template with the CSS inlined
//!  ├─ 3. Write    resume.html
//!  └─ 4. Print    headless Chrome, HTML passed as a base64 data URI
//!                 → resume.pdf (optional)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdresume::{generate, RenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default();
//!     let output = generate("resume.md", &config).await?;
//!     eprintln!("wrote {:?} and {:?}", output.html_path, output.pdf_path);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `mdresume` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! mdresume = { version = "0.3", default-features = false }
//! ```
//!
//! ## PDF prerequisites
//!
//! PDF output shells out to an installed Chrome or Chromium. Well-known
//! install locations are probed per platform; point `--chrome-path` (or
//! [`RenderConfigBuilder::chrome_path`]) at the executable if yours lives
//! somewhere else. HTML output has no external dependencies.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder, DEFAULT_CSS_FILE};
pub use error::MdResumeError;
pub use generate::{generate, generate_sync, RenderOutput};
pub use pipeline::html::render_page;
