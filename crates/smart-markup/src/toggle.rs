//! Markup toggle state machine
//!
//! The state is read from the document itself: if the working delimiters sit directly around
//! the expanded selection they are removed, otherwise they are inserted. Comment delimiters are
//! padded with one space on each side, and that padding is part of both the test and the edit.

use crate::host::EditorHost;
use crate::position::Range;
use crate::session::{Session, char_len};

/// How the selection is restored after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineMode {
    /// One selection; the pre-expansion range is restored, shifted by the prefix change.
    Single,
    /// One line of a multi-line selection; the caller tracks the selection itself.
    PerLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupState {
    Absent,
    /// Delimiter lengths (in chars, padding included) found around the selection.
    Present {
        lead: usize,
        trail: usize,
    },
}

impl<H: EditorHost> Session<'_, H> {
    fn padded_delimiters(&self) -> (String, String) {
        if self.is_comment() {
            (format!("{} ", self.before), format!(" {}", self.after))
        } else {
            (self.before.clone(), self.after.clone())
        }
    }

    fn markup_state(&self) -> MarkupState {
        if self.is_comment() {
            let (open, close) = self.padded_delimiters();
            if self.outside_sel(&open, &close) {
                return MarkupState::Present {
                    lead: char_len(&open),
                    trail: char_len(&close),
                };
            }
        }

        if self.markup_outside_sel() {
            MarkupState::Present {
                lead: char_len(&self.before),
                trail: char_len(&self.after),
            }
        } else {
            MarkupState::Absent
        }
    }

    /// Toggle the working delimiters around the current selection.
    ///
    /// `pre` is the selection before expansion. Returns the signed number of characters the
    /// document grew by.
    pub(crate) fn apply_markup(&mut self, pre: Range, mode: LineMode) -> isize {
        let text = self.selected_text();
        if mode == LineMode::PerLine && text.is_empty() {
            return 0;
        }

        let (from, to) = (self.sel.from(), self.sel.to());
        let (prefix_shift, delta) = match self.markup_state() {
            MarkupState::Absent => {
                let (open, close) = self.padded_delimiters();
                log::debug!("apply {open:?}..{close:?} around {text:?}");
                self.replace(&format!("{open}{text}{close}"), from, to);

                let lead = char_len(&open) as isize;
                (lead, lead + char_len(&close) as isize)
            }
            MarkupState::Present { lead, trail } => {
                log::debug!("remove {lead}+{trail} delimiter chars around {text:?}");
                let outer_from = self.host.offset_to_position(self.offset_of(from) - lead);
                let outer_to = self.host.offset_to_position(self.offset_of(to) + trail);
                self.replace(&text, outer_from, outer_to);

                (-(lead as isize), -((lead + trail) as isize))
            }
        };

        if mode == LineMode::Single {
            self.sel = Range::new(
                pre.anchor.shifted(prefix_shift),
                pre.head.shifted(prefix_shift),
            );
        }
        delta
    }

    /// Toggle the delimiters on every non-blank line of a multi-line selection.
    ///
    /// Lines are walked with a running offset pointer; each step advances by the line length,
    /// the line break and the change actually applied to that line. The cursor ends up at the
    /// end of the last processed line.
    pub(crate) fn wrap_each_line(&mut self) {
        let text = self.selected_text();
        let mut pointer = self.start_offset() as isize;

        for line in text.split('\n') {
            let len = char_len(line) as isize;
            let mut delta = 0;
            if !line.trim().is_empty() {
                self.select_offsets(pointer, pointer + len);
                let pre = self.expand_selection();
                delta = self.apply_markup(pre, LineMode::PerLine);
            }
            pointer += len + 1 + delta;
        }

        self.sel = Range::caret(self.pos_at(pointer - 1));
    }
}
