//! Selection classification and cursor normalization.

use crate::position::Range;

/// What a selection covers, decided once per cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Bare cursor.
    Empty,
    /// Part of (or exactly) one token.
    PartialToken,
    /// Several tokens on one line.
    MultiToken,
    /// Text across a line break.
    MultiLine,
}

/// Classify selected text. A line break wins over spaces.
pub fn classify(text: &str) -> SelectionKind {
    if text.is_empty() {
        SelectionKind::Empty
    } else if text.contains('\n') {
        SelectionKind::MultiLine
    } else if text.contains(' ') {
        SelectionKind::MultiToken
    } else {
        SelectionKind::PartialToken
    }
}

/// Sort selections into document order and merge overlapping ones.
pub fn normalize_ranges(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_by(|a, b| {
        a.from()
            .cmp(&b.from())
            .then_with(|| a.to().cmp(&b.to()))
    });

    // Half-open: a range starting exactly where the previous ends is kept separate.
    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.from() < last.to() => {
                *last = Range::new(last.from(), last.to().max(range.to()));
            }
            Some(last) if last.from() == range.from() && last.to() == range.to() => {}
            _ => merged.push(range),
        }
    }
    merged
}
