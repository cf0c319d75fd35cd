//! Per-cursor working state.
//!
//! A [`Session`] is created for every cursor of an invocation. It owns the working copy of the
//! delimiters (which block promotion may change) and the current selection, and borrows the
//! host, the configuration and the invocation's shift ledger.

use crate::host::EditorHost;
use crate::ledger::ShiftLedger;
use crate::position::{Position, Range};
use smart_markup_config::MarkupConfig;

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns `true` if `before` sits directly in front of `range` and `after` directly behind it.
///
/// Reads that would cross the start or end of the document make the test fail; they are never
/// clamped into a match.
pub fn outside_sel<H: EditorHost + ?Sized>(
    host: &H,
    range: Range,
    before: &str,
    after: &str,
) -> bool {
    let start = host.position_to_offset(range.from());
    let end = host.position_to_offset(range.to());
    let before_len = char_len(before);
    let after_len = char_len(after);

    if start < before_len {
        return false;
    }
    if end + after_len > host.text_len() {
        return false;
    }

    let chars_before = host.get_range(
        host.offset_to_position(start - before_len),
        host.offset_to_position(start),
    );
    let chars_after = host.get_range(
        host.offset_to_position(end),
        host.offset_to_position(end + after_len),
    );
    chars_before == before && chars_after == after
}

pub(crate) struct Session<'a, H: EditorHost> {
    pub(crate) host: &'a mut H,
    pub(crate) config: &'a MarkupConfig,
    pub(crate) ledger: &'a mut ShiftLedger,
    pub(crate) before: String,
    pub(crate) after: String,
    /// Sentinel commands never add themselves to the noise lists.
    pub(crate) sentinel: bool,
    pub(crate) sel: Range,
    /// The cursor's selection ran from right to left when the session started.
    pub(crate) backward: bool,
}

impl<'a, H: EditorHost> Session<'a, H> {
    pub(crate) fn new(
        host: &'a mut H,
        config: &'a MarkupConfig,
        ledger: &'a mut ShiftLedger,
        before: &str,
        after: &str,
        sentinel: bool,
        sel: Range,
    ) -> Self {
        Self {
            host,
            config,
            ledger,
            before: before.to_string(),
            after: after.to_string(),
            sentinel,
            sel,
            backward: sel.anchor > sel.head,
        }
    }

    /// `range` with the direction the cursor's selection had when the session started.
    pub(crate) fn oriented(&self, range: Range) -> Range {
        if self.backward {
            Range::new(range.to(), range.from())
        } else {
            range
        }
    }

    pub(crate) fn is_block(&self) -> bool {
        !self.sentinel && self.config.is_block_marker(&self.before)
    }

    pub(crate) fn is_comment(&self) -> bool {
        !self.sentinel && self.config.is_comment_marker(&self.before)
    }

    pub(crate) fn is_token_mode(&self) -> bool {
        !self.sentinel && self.config.is_token_marker(&self.before)
    }

    /// Position of a signed offset, clamped to the document.
    pub(crate) fn pos_at(&self, offset: isize) -> Position {
        let offset = offset.clamp(0, self.host.text_len() as isize);
        self.host.offset_to_position(offset as usize)
    }

    pub(crate) fn offset_of(&self, pos: Position) -> usize {
        self.host.position_to_offset(pos)
    }

    pub(crate) fn start_offset(&self) -> usize {
        self.offset_of(self.sel.from())
    }

    pub(crate) fn end_offset(&self) -> usize {
        self.offset_of(self.sel.to())
    }

    pub(crate) fn select_offsets(&mut self, from: isize, to: isize) {
        self.sel = Range::new(self.pos_at(from), self.pos_at(to));
    }

    pub(crate) fn selected_text(&self) -> String {
        self.host.get_selection(&self.sel)
    }

    pub(crate) fn outside_sel(&self, before: &str, after: &str) -> bool {
        outside_sel(&*self.host, self.sel, before, after)
    }

    pub(crate) fn markup_outside_sel(&self) -> bool {
        self.outside_sel(&self.before, &self.after)
    }

    /// Replace `from..to` and record the shift for later cursors.
    pub(crate) fn replace(&mut self, text: &str, from: Position, to: Position) {
        self.host.replace_range(text, from, to);
        self.ledger.record_replacement(from, to, text);
    }

    pub(crate) fn line_len(&self, line: usize) -> usize {
        char_len(&self.host.get_line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    fn range(from: usize, to: usize) -> Range {
        Range::new(Position::new(0, from), Position::new(0, to))
    }

    #[test]
    fn test_outside_sel_matches_surrounding_text() {
        let buffer = TextBuffer::new("a **bold** b");
        assert!(outside_sel(&buffer, range(4, 8), "**", "**"));
        assert!(!outside_sel(&buffer, range(4, 7), "**", "**"));
        assert!(outside_sel(&buffer, range(4, 8), "", ""));
    }

    #[test]
    fn test_outside_sel_false_at_document_edges() {
        let buffer = TextBuffer::new("**x**");
        assert!(!outside_sel(&buffer, range(0, 1), "**", ""));
        assert!(!outside_sel(&buffer, range(4, 5), "", "**"));
        assert!(outside_sel(&buffer, range(2, 3), "**", "**"));
        assert!(!outside_sel(&buffer, range(1, 3), "***", "**"));
    }
}
