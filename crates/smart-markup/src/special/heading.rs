//! Heading level toggle.

use crate::host::EditorHost;
use crate::position::{Position, Range};
use crate::session::{Session, char_len};
use regex::Regex;
use smart_markup_config::HeadingDirection;
use std::sync::OnceLock;

const MAX_LEVEL: usize = 6;

fn heading_marker() -> &'static Regex {
    static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();
    HEADING_MARKER.get_or_init(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"))
}

/// Heading level of `line`, if it starts with one to six `#` and a space.
pub(crate) fn heading_level(line: &str) -> Option<usize> {
    heading_marker()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|hashes| hashes.as_str().len())
}

/// New text of `line` after a level change, or `None` if the line stays as it is.
///
/// Increasing past level 6 and decreasing below level 1 remove the heading, but only when
/// `allow_removal` is set. A line without a heading becomes level 1 on increase and level 6
/// on decrease.
pub fn retitle(line: &str, direction: HeadingDirection, allow_removal: bool) -> Option<String> {
    let level = heading_level(line);
    match (direction, level) {
        (HeadingDirection::Increase, Some(level)) if level < MAX_LEVEL => Some(format!("#{line}")),
        (HeadingDirection::Decrease, Some(level)) if level > 1 => Some(line[1..].to_string()),
        (_, Some(level)) if allow_removal => Some(line[level + 1..].to_string()),
        (_, Some(_)) => None,
        (HeadingDirection::Increase, None) => Some(format!("# {line}")),
        (HeadingDirection::Decrease, None) => Some(format!("{} {line}", "#".repeat(MAX_LEVEL))),
    }
}

impl<H: EditorHost> Session<'_, H> {
    /// Rewrite one line; returns the column delta, zero if the line was left alone.
    fn retitle_line(
        &mut self,
        line: usize,
        direction: HeadingDirection,
        allow_removal: bool,
    ) -> isize {
        let old = self.host.get_line(line);
        let Some(new) = retitle(&old, direction, allow_removal) else {
            return 0;
        };

        let old_len = char_len(&old);
        let delta = char_len(&new) as isize - old_len as isize;
        log::debug!("heading line {line}: {old:?} -> {new:?}");
        self.host
            .replace_range(&new, Position::new(line, 0), Position::new(line, old_len));
        self.ledger.record(line, delta);
        delta
    }

    /// Change the heading level of the cursor line, or of every heading line in a multi-line
    /// selection.
    pub(crate) fn toggle_heading(&mut self, direction: HeadingDirection) {
        if !self.selected_text().contains('\n') {
            let head = self.sel.to();
            let delta = self.retitle_line(head.line, direction, true);
            self.sel = Range::caret(head.shifted(delta));
            return;
        }

        let (from, to) = (self.sel.from(), self.sel.to());
        let mut from_delta = 0;
        let mut to_delta = 0;
        for line in from.line..=to.line {
            if heading_level(&self.host.get_line(line)).is_none() {
                continue;
            }
            let delta = self.retitle_line(line, direction, false);
            if line == from.line {
                from_delta = delta;
            }
            if line == to.line {
                to_delta = delta;
            }
        }
        self.sel = Range::new(from.shifted(from_delta), to.shifted(to_delta));
    }
}
