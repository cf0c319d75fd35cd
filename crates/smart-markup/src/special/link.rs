//! Link delimiters from clipboard contents.

use regex::Regex;
use smart_markup_config::MarkupConfig;

/// Delimiters substituted for a link command's placeholder pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDelimiters {
    /// Opening delimiter (`[`, `![`, or `[` followed by link text).
    pub before: String,
    /// Closing delimiter.
    pub after: String,
}

/// Lowercased extension of the last path segment of `url`, query and fragment stripped.
fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let (_, extension) = path.rsplit_once('.')?;
    if extension.contains('/') {
        return None;
    }
    Some(extension.to_lowercase())
}

/// Work out the link delimiters for the trimmed `clipboard` text.
///
/// A URL becomes the link target (an image embed if its extension is a raster image). Any other
/// non-empty text becomes the link text, truncated, but only when nothing is selected. Returns
/// `None` when the command's own delimiters should be used unchanged.
pub fn link_delimiters(
    config: &MarkupConfig,
    url_pattern: &Regex,
    clipboard: &str,
    something_selected: bool,
) -> Option<LinkDelimiters> {
    let clipboard = clipboard.trim();

    if url_pattern.is_match(clipboard) {
        let is_image = url_extension(clipboard)
            .is_some_and(|ext| config.image_extensions.iter().any(|known| *known == ext));
        let before = if is_image { "![" } else { "[" };
        return Some(LinkDelimiters {
            before: before.to_string(),
            after: format!("]({clipboard})"),
        });
    }

    if !something_selected && !clipboard.is_empty() {
        let text: String = clipboard.chars().take(config.link_text_limit).collect();
        return Some(LinkDelimiters {
            before: format!("[{text}"),
            after: config.link_placeholder.clone(),
        });
    }

    None
}
