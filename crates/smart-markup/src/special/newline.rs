use crate::host::EditorHost;
use crate::position::{Position, Range};
use crate::session::Session;

impl<H: EditorHost> Session<'_, H> {
    /// Replace the selection with a bare line break, without continuing lists or quotes.
    pub(crate) fn newline_only(&mut self) {
        let (from, to) = (self.sel.from(), self.sel.to());
        self.replace("\n", from, to);
        self.sel = Range::caret(Position::new(from.line + 1, 0));
    }
}
