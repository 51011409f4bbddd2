//! Frontmatter stripping: drop a leading `---`-delimited metadata block.
//!
//! Static-site generators (Hugo, Jekyll) prepend a YAML block between `---`
//! lines. The metadata is irrelevant here — the résumé body is everything
//! after the closing delimiter — so the block is skipped, never parsed.
//!
//! Absence of a block, or a block that never closes, is not an error: the
//! function degrades to the identity and the text renders as-is.

/// Strip a leading frontmatter block, returning the body after it.
///
/// The block opens when the text starts with `---` and closes at the first
/// subsequent line whose trimmed content is exactly `---`. When no closing
/// delimiter exists, or it is the final line with nothing after it, the
/// input is returned unchanged.
///
/// Returns a subslice of the input; stripping allocates nothing and is
/// idempotent (a stripped body no longer starts with `---`).
pub fn strip(text: &str) -> &str {
    if !text.starts_with("---") {
        return text;
    }

    // Walk lines tracking the byte offset just past each one's newline.
    let mut offset = 0;
    for (i, line) in text.split('\n').enumerate() {
        offset += line.len() + 1;
        if i == 0 {
            continue;
        }
        if line.trim() == "---" {
            // A closing delimiter on the final line (offset overshoots the
            // text length) leaves nothing to return; keep the original.
            if offset > text.len() {
                return text;
            }
            return &text[offset..];
        }
    }

    text
}
