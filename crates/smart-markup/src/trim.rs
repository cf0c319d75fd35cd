//! Selection trimming
//!
//! Strips list markers, heading markers, whitespace and the command's own delimiters from the
//! edges of a selection so toggling acts on the meaningful text only.

use crate::host::EditorHost;
use crate::session::{Session, char_len};
use regex::Regex;
use std::sync::OnceLock;

fn block_reference() -> &'static Regex {
    static BLOCK_REFERENCE: OnceLock<Regex> = OnceLock::new();
    BLOCK_REFERENCE.get_or_init(|| Regex::new(r" \^\w+$").expect("Invalid block reference regex"))
}

/// Strip `leading` noise from the start and `trailing` noise from the end of `text`.
///
/// Each list is applied in order, pass after pass, until a pass strips nothing. A trailing
/// ` ^blockid` is removed as well. Returns the number of characters cut from the start and the
/// remaining text. Empty noise strings are ignored. The result is a fixed point: trimming it
/// again removes nothing.
pub fn trim_noise<'t>(text: &'t str, leading: &[&str], trailing: &[&str]) -> (usize, &'t str) {
    let mut rest = text;
    let mut skipped = 0;

    loop {
        let mut stripped = false;
        for noise in leading.iter().filter(|n| !n.is_empty()) {
            if let Some(stripped_rest) = rest.strip_prefix(noise) {
                skipped += char_len(noise);
                rest = stripped_rest;
                stripped = true;
            }
        }
        if !stripped || rest.is_empty() {
            break;
        }
    }

    loop {
        loop {
            let mut stripped = false;
            for noise in trailing.iter().filter(|n| !n.is_empty()) {
                if let Some(stripped_rest) = rest.strip_suffix(noise) {
                    rest = stripped_rest;
                    stripped = true;
                }
            }
            if !stripped || rest.is_empty() {
                break;
            }
        }

        match block_reference().find(rest) {
            Some(found) => rest = &rest[..found.start()],
            None => break,
        }
    }

    (skipped, rest)
}

impl<H: EditorHost> Session<'_, H> {
    /// Noise lists for the working delimiters.
    ///
    /// Block delimiters are only trimmed against themselves (comment delimiters also with
    /// their padding space); everything else gets the generic lists plus its own delimiters.
    fn noise_lists(&self) -> (Vec<String>, Vec<String>) {
        if self.is_block() {
            let mut leading = Vec::with_capacity(2);
            let mut trailing = Vec::with_capacity(2);
            if self.is_comment() {
                leading.push(format!("{} ", self.before));
                trailing.push(format!(" {}", self.after));
            }
            leading.push(self.before.clone());
            trailing.push(self.after.clone());
            return (leading, trailing);
        }

        let mut leading = self.config.leading_noise.clone();
        let mut trailing = self.config.trailing_noise.clone();
        if !self.sentinel && !self.after.is_empty() {
            leading.push(self.before.clone());
            trailing.push(self.after.clone());
        }
        (leading, trailing)
    }

    /// Narrow the current selection to its meaningful text. The result is always forward.
    pub(crate) fn trim_selection(&mut self) {
        let (leading, trailing) = self.noise_lists();
        let leading: Vec<&str> = leading.iter().map(String::as_str).collect();
        let trailing: Vec<&str> = trailing.iter().map(String::as_str).collect();

        let text = self.selected_text();
        let start = self.start_offset() as isize;
        let (skipped, trimmed) = trim_noise(&text, &leading, &trailing);
        let trimmed_len = char_len(trimmed) as isize;

        log::debug!("trim {text:?} -> {trimmed:?}");
        let from = start + skipped as isize;
        self.select_offsets(from, from + trimmed_len);
    }
}
