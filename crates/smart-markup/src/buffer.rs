//! In-memory editor host
//!
//! [`TextBuffer`] keeps the document in a [`ropey::Rope`] (O(log N) line and offset lookups)
//! together with a selection set, and implements [`EditorHost`] so the engine can run against
//! it directly. Only `\n` is treated as a line break; a `\r` before it is ordinary line text,
//! so every char offset has exactly one position.

use crate::host::{EditorHost, WordAt};
use crate::position::{Position, Range};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// Rope-backed document with cursors.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selections: Vec<Range>,
}

impl TextBuffer {
    /// Create a buffer with a single cursor at the start.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Range::caret(Position::new(0, 0))],
        }
    }

    /// Create a buffer with the given selections.
    pub fn with_selections(text: &str, selections: Vec<Range>) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections,
        }
    }

    /// Get complete text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Current selections, in the order they were set.
    pub fn selections(&self) -> &[Range] {
        &self.selections
    }

    /// The first selection, if any.
    pub fn primary(&self) -> Option<Range> {
        self.selections.first().copied()
    }

    fn line_char_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        len
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        Position::new(line, pos.column.min(self.line_char_len(line)))
    }
}

fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
}

impl EditorHost for TextBuffer {
    fn list_selections(&self) -> Vec<Range> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: &[Range]) {
        self.selections = selections
            .iter()
            .map(|range| Range::new(self.clamp(range.anchor), self.clamp(range.head)))
            .collect();
    }

    fn get_range(&self, from: Position, to: Position) -> String {
        let start = self.position_to_offset(from);
        let end = self.position_to_offset(to);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let start = self.position_to_offset(from);
        let end = self.position_to_offset(to).max(start);
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        Position::new(line, offset - line_start)
    }

    fn position_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.line) + pos.column
    }

    fn get_line(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let len = self.line_char_len(line);
        self.rope.line(line).slice(..len).to_string()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn text_len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Scans grapheme clusters on both sides of `pos` while they start with an alphanumeric
    /// character or `_`.
    fn word_at(&self, pos: Position) -> WordAt {
        let pos = self.clamp(pos);
        let line = self.get_line(pos.line);
        let graphemes: Vec<&str> = line.graphemes(true).collect();

        let mut columns = Vec::with_capacity(graphemes.len() + 1);
        let mut column = 0;
        for grapheme in &graphemes {
            columns.push(column);
            column += grapheme.chars().count();
        }
        columns.push(column);

        let at = columns
            .iter()
            .position(|&c| c >= pos.column)
            .unwrap_or(graphemes.len());

        let mut start = at;
        while start > 0 && is_word_grapheme(graphemes[start - 1]) {
            start -= 1;
        }
        let mut end = at;
        while end < graphemes.len() && is_word_grapheme(graphemes[end]) {
            end += 1;
        }

        if start == end {
            WordAt::NoWord
        } else {
            WordAt::Word(Range::new(
                Position::new(pos.line, columns[start]),
                Position::new(pos.line, columns[end]),
            ))
        }
    }
}
