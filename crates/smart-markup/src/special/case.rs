//! Case cycling: lower → sentence → upper → lower.

use crate::host::EditorHost;
use crate::session::Session;

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}

/// Upper-case the first cased character and lower-case everything after it.
///
/// Uncased characters in front of the first cased one are kept as they are.
pub fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    for ch in chars.by_ref() {
        if is_cased(ch) {
            out.extend(ch.to_uppercase());
            break;
        }
        out.push(ch);
    }
    for ch in chars {
        out.extend(ch.to_lowercase());
    }
    out
}

/// Next case in the cycle. Mixed case that fits none of the three forms goes to sentence case.
pub fn cycle_case(text: &str) -> String {
    let upper = text.to_uppercase();
    if text == text.to_lowercase() {
        sentence_case(text)
    } else if text == upper {
        text.to_lowercase()
    } else if text == sentence_case(text) {
        upper
    } else {
        sentence_case(text)
    }
}

impl<H: EditorHost> Session<'_, H> {
    /// Cycle the case of the expanded selection, then restore the selection as it was before
    /// expansion.
    pub(crate) fn cycle_case(&mut self) {
        let pre = self.expand_selection();
        let text = self.selected_text();
        let cycled = cycle_case(&text);
        log::debug!("case {text:?} -> {cycled:?}");

        if cycled != text {
            let (from, to) = (self.sel.from(), self.sel.to());
            self.replace(&cycled, from, to);
        }
        self.sel = pre;
    }
}
