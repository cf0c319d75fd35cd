//! Positions and selection ranges.
//!
//! Both are plain `Copy` values. Every operation that moves a position returns a new one; no
//! position is ever shared between two owners.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Same line, column moved by `delta` (saturating at column 0).
    pub fn shifted(self, delta: isize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add_signed(delta),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A selection: `anchor` is where it started, `head` is where the cursor is.
///
/// Anchor and head are not ordered; use [`Range::from`] and [`Range::to`] for start/end
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Fixed end of the selection.
    pub anchor: Position,
    /// Moving end of the selection (the visible cursor).
    pub head: Position,
}

impl Range {
    /// Create a range from its two endpoints.
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// A zero-length range (bare cursor).
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// The earlier endpoint.
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The later endpoint.
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Returns `true` for a bare cursor.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The same range with `anchor <= head`.
    pub fn normalized(&self) -> Self {
        Self::new(self.from(), self.to())
    }
}
