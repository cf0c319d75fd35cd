use crate::host::EditorHost;
use crate::position::{Position, Range};
use crate::session::Session;

/// Characters swallowed together with the deleted text so no double space or dangling tag
/// marker is left behind.
const SWALLOWED_BEFORE: &[char] = &[' ', '#'];

impl<H: EditorHost> Session<'_, H> {
    /// Delete the expanded selection and one separator in front of it.
    pub(crate) fn smart_delete(&mut self) {
        self.expand_selection();
        let mut from = self.sel.from();
        let to = self.sel.to();

        if let Some(ch) = self.char_before(from).filter(|ch| SWALLOWED_BEFORE.contains(ch)) {
            from = Position::new(from.line, from.column - 1);
            // A removed tag marker takes its separating space along.
            if ch == '#' && self.char_before(from) == Some(' ') {
                from = Position::new(from.line, from.column - 1);
            }
        }

        log::debug!("delete {:?}", self.host.get_range(from, to));
        self.replace("", from, to);
        self.sel = Range::caret(from);
    }

    fn char_before(&self, pos: Position) -> Option<char> {
        if pos.column == 0 {
            return None;
        }
        let previous = Position::new(pos.line, pos.column - 1);
        self.host.get_range(previous, pos).chars().next()
    }
}
