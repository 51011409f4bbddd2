//! Configuration for a render run.
//!
//! All behaviour is controlled through [`RenderConfig`], built via its
//! [`RenderConfigBuilder`]. Keeping every knob in one struct means the CLI
//! shim, library callers, and tests all drive the pipeline through the same
//! surface, and a config can be logged wholesale to explain a run.

use std::path::PathBuf;

/// Default CSS filename consulted when no `--css` override is given.
pub const DEFAULT_CSS_FILE: &str = "resume.css";

/// Configuration for rendering one Markdown document.
///
/// Built via [`RenderConfig::builder()`] or [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use mdresume::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .css_path("style/modern.css")
///     .write_pdf(false)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// CSS file inlined into the page head. `None` means [`DEFAULT_CSS_FILE`].
    ///
    /// An unreadable CSS file is never fatal — the page is emitted unstyled
    /// and a warning is logged.
    pub css_path: Option<PathBuf>,

    /// Explicit Chrome/Chromium executable. `None` means probe the
    /// platform's well-known install locations. An explicit path is used
    /// as-is, without validation.
    pub chrome_path: Option<PathBuf>,

    /// Output filename prefix (no extension). `None` derives it from the
    /// input filename with its extension removed.
    pub output_prefix: Option<String>,

    /// Write `<prefix>.html`. Default: true.
    pub write_html: bool,

    /// Write `<prefix>.pdf` via headless Chrome. Default: true.
    pub write_pdf: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            css_path: None,
            chrome_path: None,
            output_prefix: None,
            write_html: true,
            write_pdf: true,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn css_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.css_path = Some(path.into());
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    pub fn output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.output_prefix = Some(prefix.into());
        self
    }

    pub fn write_html(mut self, v: bool) -> Self {
        self.config.write_html = v;
        self
    }

    pub fn write_pdf(mut self, v: bool) -> Self {
        self.config.write_pdf = v;
        self
    }

    /// Build the configuration. There are no cross-field constraints to
    /// validate; a config with both outputs disabled simply renders in
    /// memory and writes nothing.
    pub fn build(self) -> RenderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_write_both_outputs() {
        let c = RenderConfig::default();
        assert!(c.write_html);
        assert!(c.write_pdf);
        assert!(c.css_path.is_none());
        assert!(c.chrome_path.is_none());
        assert!(c.output_prefix.is_none());
    }

    #[test]
    fn builder_sets_overrides() {
        let c = RenderConfig::builder()
            .css_path("custom.css")
            .chrome_path("/opt/chrome")
            .output_prefix("out/cv")
            .write_html(false)
            .write_pdf(false)
            .build();
        assert_eq!(c.css_path.as_deref(), Some(std::path::Path::new("custom.css")));
        assert_eq!(c.chrome_path.as_deref(), Some(std::path::Path::new("/opt/chrome")));
        assert_eq!(c.output_prefix.as_deref(), Some("out/cv"));
        assert!(!c.write_html);
        assert!(!c.write_pdf);
    }
}
