//! HTML rendering: Markdown body → complete standalone page.
//!
//! The body is converted with comrak configured to match GitHub rendering
//! (tables, strikethrough, autolinks, task lists), with smart typography
//! and generated heading IDs, and with raw HTML passed through — résumés
//! routinely embed a `<span>` or two for layout tweaks. The fragment is
//! wrapped in a fixed template: charset, `<title>` from the first H1,
//! the CSS file inlined into a `<style>` block, and a single
//! `<div id="resume">` container for the stylesheet to hang selectors on.
//!
//! Rendering is deterministic: identical body + CSS yields byte-identical
//! output.

use crate::config::{RenderConfig, DEFAULT_CSS_FILE};
use crate::pipeline::frontmatter;
use comrak::{markdown_to_html, Options};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Title used when the document has no top-level heading.
pub const DEFAULT_TITLE: &str = "Resume";

const HTML_POSTAMBLE: &str = "</div>\n</body>\n</html>\n";

/// First line shaped like a level-1 heading, anywhere in the body.
///
/// Note the `[^#]` consumes one character after the `#`, so a line like
/// `#tag` (no space) still matches and captures from its second letter.
/// That oddity is inherited behaviour; title extraction is best-effort.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[^#]\s*(.+)$").unwrap());

/// Render Markdown source to a complete HTML document.
///
/// Strips any leading frontmatter block, extracts the page title from the
/// first H1 (falling back to [`DEFAULT_TITLE`]), inlines the configured CSS
/// (an unreadable CSS file degrades to an unstyled page with a warning),
/// converts the body, and assembles the fixed page template.
pub fn render_page(source: &str, config: &RenderConfig) -> String {
    let body = frontmatter::strip(source);
    let title = extract_title(body);
    let style = load_style(config);

    // comrak configured to match GitHub rendering, plus smart typography.
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.parse.smart = true;
    // Raw HTML in the Markdown is content, not an attack surface — the
    // input is the user's own résumé.
    options.render.unsafe_ = true;

    let fragment = markdown_to_html(body, &options);
    assemble(title, &style, &fragment)
}

/// Extract the trimmed text of the first level-1 heading.
fn extract_title(body: &str) -> &str {
    TITLE_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(DEFAULT_TITLE)
}

/// Read the CSS file, or fall back to empty style text.
fn load_style(config: &RenderConfig) -> String {
    let path = config
        .css_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CSS_FILE.into());

    match std::fs::read_to_string(&path) {
        Ok(css) => css,
        Err(e) => {
            warn!(
                "Could not read CSS file {}: {e} — output will be unstyled",
                path.display()
            );
            String::new()
        }
    }
}

/// Concatenate preamble, fragment, and postamble in fixed order.
fn assemble(title: &str, style: &str, fragment: &str) -> String {
    let mut page = format!(
        r#"<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<div id="resume">
"#
    );
    page.push_str(fragment);
    page.push_str(HTML_POSTAMBLE);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> RenderConfig {
        // Point the CSS lookup somewhere that cannot exist so tests never
        // pick up a stray resume.css from the working directory.
        RenderConfig::builder()
            .css_path("/nonexistent/mdresume-test.css")
            .build()
    }

    // ── Title extraction ─────────────────────────────────────────────────

    #[test]
    fn title_from_first_h1() {
        assert_eq!(extract_title("# Jane Doe\n\nSome text"), "Jane Doe");
    }

    #[test]
    fn title_defaults_without_h1() {
        assert_eq!(extract_title("Just a paragraph.\n\nAnother."), DEFAULT_TITLE);
    }

    #[test]
    fn title_ignores_deeper_headings() {
        assert_eq!(extract_title("## Not This\n\n# This One"), "This One");
    }

    #[test]
    fn title_takes_first_of_multiple_h1s() {
        assert_eq!(extract_title("# First\n\n# Second"), "First");
    }

    #[test]
    fn title_need_not_be_on_the_first_line() {
        assert_eq!(extract_title("intro paragraph\n\n# Late Title"), "Late Title");
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(extract_title("#   Spaced Out   \n"), "Spaced Out");
    }

    #[test]
    fn title_quirk_hashtag_line_matches_from_second_letter() {
        // Inherited pattern quirk: `[^#]` eats the first character.
        assert_eq!(extract_title("#tag\n"), "ag");
    }

    // ── Conversion & assembly ────────────────────────────────────────────

    #[test]
    fn page_wraps_fragment_in_resume_container() {
        let page = render_page("# Test\nHello *world*", &bare_config());
        assert!(page.contains("<title>Test</title>"), "got: {page}");
        assert!(page.contains(r#"<div id="resume">"#));
        assert!(page.contains("<em>world</em>"));
        assert!(page.ends_with("</div>\n</body>\n</html>\n"));
    }

    #[test]
    fn missing_css_yields_empty_style_block() {
        let page = render_page("# T\n", &bare_config());
        assert!(page.contains("<style>\n\n</style>"), "got: {page}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let source = "# Jane\n\n- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
        let first = render_page(source, &bare_config());
        let second = render_page(source, &bare_config());
        assert_eq!(first, second);
    }

    #[test]
    fn gfm_extensions_are_enabled() {
        let source = "# T\n\n~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n";
        let page = render_page(source, &bare_config());
        assert!(page.contains("<del>gone</del>"), "strikethrough: {page}");
        assert!(page.contains("<table>"), "tables: {page}");
        assert!(page.contains("type=\"checkbox\""), "task lists: {page}");
    }

    #[test]
    fn autolinks_are_enabled() {
        let page = render_page("# T\n\nhttps://example.com/x\n", &bare_config());
        assert!(
            page.contains(r#"<a href="https://example.com/x">"#),
            "got: {page}"
        );
    }

    #[test]
    fn headings_get_generated_ids() {
        let page = render_page("# Jane Doe\n", &bare_config());
        assert!(page.contains(r##"id="jane-doe""##), "got: {page}");
    }

    #[test]
    fn smart_punctuation_is_applied() {
        let page = render_page("# T\n\ndashes -- here\n", &bare_config());
        assert!(page.contains('–'), "en dash expected: {page}");
    }

    #[test]
    fn raw_html_passes_through() {
        let page = render_page("# T\n\n<span class=\"x\">kept</span>\n", &bare_config());
        assert!(page.contains(r#"<span class="x">kept</span>"#), "got: {page}");
    }

    #[test]
    fn frontmatter_is_stripped_before_rendering() {
        let page = render_page("---\ntitle: meta\n---\n# Real Title\n", &bare_config());
        assert!(page.contains("<title>Real Title</title>"));
        assert!(!page.contains("title: meta"));
    }

    #[test]
    fn css_file_contents_are_inlined() {
        let dir = tempfile::tempdir().unwrap();
        let css = dir.path().join("style.css");
        std::fs::write(&css, "body{color:red}").unwrap();

        let config = RenderConfig::builder().css_path(&css).build();
        let page = render_page("# T\n", &config);
        assert!(page.contains("body{color:red}"), "got: {page}");
    }
}
