//! Multi-line block wrapping
//!
//! Block delimiters (code, comments, math) go on their own lines above and below the selected
//! lines instead of being inserted into every line. Inline code and inline math are promoted to
//! their fenced forms first.

use crate::host::EditorHost;
use crate::position::{Position, Range};
use crate::session::Session;

impl<H: EditorHost> Session<'_, H> {
    /// Returns `true` if the line above `first` starts with the opening delimiter and the line
    /// below `last` starts with the closing one. Both lines must exist.
    fn outside_multiline(&self, first: usize, last: usize) -> bool {
        if first == 0 || last >= self.host.last_line() {
            return false;
        }
        self.host.get_line(first - 1).starts_with(&self.before)
            && self.host.get_line(last + 1).starts_with(&self.after)
    }

    /// Remove `line` together with one adjacent line break.
    fn delete_line(&mut self, line: usize) {
        if line < self.host.last_line() {
            self.replace("", Position::new(line, 0), Position::new(line + 1, 0));
        } else if line > 0 {
            let previous_end = Position::new(line - 1, self.line_len(line - 1));
            let line_end = Position::new(line, self.line_len(line));
            self.replace("", previous_end, line_end);
        } else {
            let line_end = Position::new(line, self.line_len(line));
            self.replace("", Position::new(line, 0), line_end);
        }
    }

    fn promote_delimiters(&mut self) {
        let config = self.config;
        if let Some(block) = config.promote(&self.before) {
            self.before = block.to_string();
        }
        if let Some(block) = config.promote(&self.after) {
            self.after = block.to_string();
        }
    }

    /// Toggle block delimiter lines around the lines the selection touches.
    pub(crate) fn wrap_multi_line(&mut self) {
        let first = self.sel.from().line;
        let last = self.sel.to().line;
        let last_len = self.line_len(last);
        self.promote_delimiters();

        if self.outside_multiline(first, last) {
            log::debug!("unwrap block {:?} around lines {first}..={last}", self.before);
            self.delete_line(first - 1);
            // The closing line moved up by one with the first deletion.
            self.delete_line(last);
            self.sel = Range::new(
                Position::new(first - 1, 0),
                Position::new(last - 1, last_len),
            );
            return;
        }

        log::debug!("wrap block {:?} around lines {first}..={last}", self.before);
        let opening = format!("{}\n", self.before);
        let top = Position::new(first, 0);
        self.replace(&opening, top, top);

        // Lines shifted down by one.
        let closed = last + 1;
        if closed < self.host.last_line() {
            let next = Position::new(closed + 1, 0);
            self.replace(&format!("{}\n", self.after), next, next);
        } else {
            let end = Position::new(closed, last_len);
            self.replace(&format!("\n{}", self.after), end, end);
        }

        self.sel = if self.before.starts_with("```") {
            Range::caret(Position::new(first, self.before.chars().count()))
        } else {
            Range::new(Position::new(first + 1, 0), Position::new(closed, last_len))
        };
    }
}
