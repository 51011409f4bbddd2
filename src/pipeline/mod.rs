//! Pipeline stages for Markdown-to-HTML/PDF rendering.
//!
//! Each submodule implements exactly one transformation step. Control flow
//! is strictly linear; no stage depends on another's internal state beyond
//! the HTML string and filename prefix passed forward.
//!
//! ## Data Flow
//!
//! ```text
//! source ──▶ frontmatter ──▶ html ──────▶ pdf
//! (file)     (strip ---)     (comrak +    (headless Chrome,
//!                             template)    data URI, 5 s cap)
//! ```
//!
//! 1. [`frontmatter`] — drop an optional leading `---`-delimited metadata
//!    block; degrades to a no-op when the block is absent or unterminated
//! 2. [`html`]   — extract the title, inline the CSS, convert the body with
//!    comrak, and assemble the standalone page
//! 3. [`chrome`] — locate a Chrome/Chromium executable from static
//!    per-platform guess tables
//! 4. [`pdf`]    — drive the browser subprocess and verify the PDF landed;
//!    the only stage with a deadline

pub mod chrome;
pub mod frontmatter;
pub mod html;
pub mod pdf;
