//! The editor collaborator the engine drives.
//!
//! A host owns the text and the cursors. The engine only reads ranges, replaces ranges and
//! converts coordinates through this trait, so any editor that can do those things can run the
//! toggle commands.

use crate::position::{Position, Range};

/// Result of asking the host for the word around a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordAt {
    /// The word touching the position.
    Word(Range),
    /// The host looked but the position is not next to a word character.
    NoWord,
    /// The host has no word-boundary primitive; the engine scans whitespace instead.
    Unsupported,
}

/// Editor operations consumed by the engine.
///
/// Columns are counted in characters. Reads past the document clamp instead of failing.
pub trait EditorHost {
    /// All current selections, in any order.
    fn list_selections(&self) -> Vec<Range>;

    /// Replace all selections.
    fn set_selections(&mut self, selections: &[Range]);

    /// Replace all selections with a single one.
    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.set_selections(&[Range::new(anchor, head)]);
    }

    /// Text between two positions (`from <= to`).
    fn get_range(&self, from: Position, to: Position) -> String;

    /// Replace the text between two positions (`from <= to`).
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Position of a character offset; offsets past the end clamp to the end.
    fn offset_to_position(&self, offset: usize) -> Position;

    /// Character offset of a position; the line and column clamp to the document.
    fn position_to_offset(&self, pos: Position) -> usize;

    /// Text of a line without its line break; empty past the last line.
    fn get_line(&self, line: usize) -> String;

    /// Number of lines (an empty document has one).
    fn line_count(&self) -> usize;

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Document length in characters.
    fn text_len(&self) -> usize {
        self.position_to_offset(Position::new(self.last_line(), usize::MAX))
    }

    /// The word around `pos`, if the host can tell.
    fn word_at(&self, _pos: Position) -> WordAt {
        WordAt::Unsupported
    }

    /// Text covered by a selection.
    fn get_selection(&self, range: &Range) -> String {
        self.get_range(range.from(), range.to())
    }

    /// Returns `true` if any selection is non-empty.
    fn something_selected(&self) -> bool {
        self.list_selections().iter().any(|range| !range.is_empty())
    }
}
