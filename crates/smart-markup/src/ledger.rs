//! Shift ledger for multi-cursor passes.
//!
//! Cursors are read once, before any edit, and processed one after another against the live
//! buffer. Every edit appends entries here; replaying them in order moves a stale position to
//! where it sits after all edits recorded so far.

use crate::position::Position;

/// Column delta applied to positions on `line` at or after `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChange {
    /// Line the delta applies to, in the coordinates current when it was recorded.
    pub line: usize,
    /// First column that moves.
    pub column: usize,
    /// Signed column delta.
    pub shift: isize,
}

/// One recorded edit effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntry {
    /// Columns moved on a single line.
    Column(ContentChange),
    /// An edit that changed the line count.
    ///
    /// Positions at or after `end` on its line keep their distance to it and land relative to
    /// `new_end`; every later line moves by the line difference.
    Lines {
        /// End of the replaced range before the edit.
        end: Position,
        /// End of the inserted text after the edit.
        new_end: Position,
    },
}

impl LedgerEntry {
    fn apply(&self, pos: Position) -> Position {
        match *self {
            LedgerEntry::Column(change) => {
                if pos.line == change.line && pos.column >= change.column {
                    pos.shifted(change.shift)
                } else {
                    pos
                }
            }
            LedgerEntry::Lines { end, new_end } => {
                if pos.line > end.line {
                    let line = pos.line + new_end.line - end.line;
                    Position::new(line, pos.column)
                } else if pos.line == end.line && pos.column >= end.column {
                    Position::new(new_end.line, pos.column - end.column + new_end.column)
                } else {
                    pos
                }
            }
        }
    }
}

/// Append-only record of the position shifts of one command invocation.
#[derive(Debug, Clone, Default)]
pub struct ShiftLedger {
    entries: Vec<LedgerEntry>,
}

impl ShiftLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column delta for every position on `line`. Zero deltas are dropped.
    pub fn record(&mut self, line: usize, shift: isize) {
        self.record_column(line, 0, shift);
    }

    fn record_column(&mut self, line: usize, column: usize, shift: isize) {
        if shift != 0 {
            self.entries.push(LedgerEntry::Column(ContentChange {
                line,
                column,
                shift,
            }));
        }
    }

    /// Record the replacement of `from..to` with `inserted`.
    ///
    /// Positions at or after `to` keep their distance to the end of the replaced range.
    /// Positions before `from` do not move.
    pub fn record_replacement(&mut self, from: Position, to: Position, inserted: &str) {
        let added_lines = inserted.matches('\n').count();
        let tail_len = inserted
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count())
            .unwrap_or(0);

        let new_end = if added_lines == 0 {
            Position::new(from.line, from.column + tail_len)
        } else {
            Position::new(from.line + added_lines, tail_len)
        };

        if new_end.line == to.line {
            self.record_column(to.line, to.column, new_end.column as isize - to.column as isize);
        } else {
            self.entries.push(LedgerEntry::Lines { end: to, new_end });
        }
    }

    /// Replay the ledger on a position recorded before the pass started.
    pub fn recalibrate(&self, pos: Position) -> Position {
        self.recalibrate_from(0, pos)
    }

    /// Replay only the entries recorded from index `start` on.
    ///
    /// A position read after `start` entries were recorded is already current with respect to
    /// them; this brings it up to date with everything recorded since.
    pub fn recalibrate_from(&self, start: usize, pos: Position) -> Position {
        self.entries
            .iter()
            .skip(start)
            .fold(pos, |pos, entry| entry.apply(pos))
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_shift_only_hits_same_line() {
        let mut ledger = ShiftLedger::new();
        ledger.record(0, 2);
        ledger.record(0, 2);
        ledger.record(3, -1);

        assert_eq!(ledger.recalibrate(Position::new(0, 10)), Position::new(0, 14));
        assert_eq!(ledger.recalibrate(Position::new(1, 10)), Position::new(1, 10));
        assert_eq!(ledger.recalibrate(Position::new(3, 0)), Position::new(3, 0));
    }

    #[test]
    fn test_zero_shifts_are_dropped() {
        let mut ledger = ShiftLedger::new();
        ledger.record(0, 0);
        ledger.record_replacement(Position::new(0, 2), Position::new(0, 4), "ab");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_replacement_inserting_lines() {
        // "abc|def" -> "ab" + "X\nYZ" + "def": the tail of line 0 lands on line 1.
        let mut ledger = ShiftLedger::new();
        ledger.record_replacement(Position::new(0, 2), Position::new(0, 3), "X\nYZ");

        assert_eq!(ledger.recalibrate(Position::new(0, 4)), Position::new(1, 3));
        assert_eq!(ledger.recalibrate(Position::new(2, 1)), Position::new(3, 1));
        assert_eq!(ledger.recalibrate(Position::new(0, 1)), Position::new(0, 1));
    }

    #[test]
    fn test_replacement_joining_lines() {
        // Delete from (0, 3) to (2, 1): line 2 column 5 becomes line 0 column 7.
        let mut ledger = ShiftLedger::new();
        ledger.record_replacement(Position::new(0, 3), Position::new(2, 1), "");

        assert_eq!(ledger.recalibrate(Position::new(2, 5)), Position::new(0, 7));
        assert_eq!(ledger.recalibrate(Position::new(4, 0)), Position::new(2, 0));
    }

    #[test]
    fn test_positions_before_an_edit_stay_put() {
        let mut ledger = ShiftLedger::new();
        ledger.record_replacement(Position::new(0, 6), Position::new(0, 9), "**bar**");

        assert_eq!(ledger.recalibrate(Position::new(0, 4)), Position::new(0, 4));
        assert_eq!(ledger.recalibrate(Position::new(0, 9)), Position::new(0, 13));
    }

    #[test]
    fn test_entries_replay_in_order() {
        let mut ledger = ShiftLedger::new();
        // A line is inserted above, then an edit happens on the moved line.
        ledger.record_replacement(Position::new(0, 0), Position::new(0, 0), "x\n");
        ledger.record(2, 3);

        assert_eq!(ledger.recalibrate(Position::new(1, 4)), Position::new(2, 7));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_recalibrate_from_skips_older_entries() {
        let mut ledger = ShiftLedger::new();
        ledger.record(0, 2);
        let mark = ledger.len();
        ledger.record_replacement(Position::new(0, 0), Position::new(0, 0), "```\n");

        assert_eq!(ledger.recalibrate_from(mark, Position::new(0, 3)), Position::new(1, 3));
        assert_eq!(ledger.recalibrate(Position::new(0, 3)), Position::new(1, 5));
    }
}
