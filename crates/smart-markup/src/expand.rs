//! Word/token expansion and outside-pair growth.

use crate::host::{EditorHost, WordAt};
use crate::position::{Position, Range};
use crate::session::{Session, char_len};

/// Characters a token must not swallow when they follow the selection.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '-', '–', '—'];

/// Maximal run of non-whitespace characters around `pos` on its line.
pub fn token_around(line: &str, pos: Position) -> Range {
    let chars: Vec<char> = line.chars().collect();
    let column = pos.column.min(chars.len());

    let mut start = column;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    let mut end = column;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }

    Range::new(Position::new(pos.line, start), Position::new(pos.line, end))
}

impl<H: EditorHost> Session<'_, H> {
    /// Word or token under `pos`.
    pub(crate) fn token_at(&self, pos: Position) -> Range {
        // A bare cursor between the command's own markers must not grow into them.
        if self.sel.is_empty() && self.markup_outside_sel() {
            return Range::caret(pos);
        }

        if self.is_token_mode() {
            return token_around(&self.host.get_line(pos.line), pos);
        }

        match self.host.word_at(pos) {
            WordAt::Word(word) => word.normalized(),
            WordAt::NoWord => Range::caret(pos),
            WordAt::Unsupported => token_around(&self.host.get_line(pos.line), pos),
        }
    }

    /// Trim, grow to whole tokens, trim again, then grow over an enclosing pair.
    ///
    /// Returns the selection as it was after the first trim, in the direction the cursor had,
    /// which is what the caller restores after toggling.
    pub(crate) fn expand_selection(&mut self) -> Range {
        self.trim_selection();
        let pre = self.oriented(self.sel);
        let (pre_from, pre_to) = (pre.from(), pre.to());

        let first = self.token_at(pre_from);
        let mut last = self.token_at(pre_to);

        if pre_from != pre_to && pre_to.column > 0 {
            let probe = Position::new(pre_to.line, pre_to.column - 1);
            let inner = self.token_at(probe);
            if inner != last {
                last = inner;
            }

            let follows = self
                .host
                .get_range(pre_to, Position::new(pre_to.line, pre_to.column + 1));
            let absorbs_punctuation = last.to() > pre_to
                && follows
                    .chars()
                    .next()
                    .is_some_and(|ch| TRAILING_PUNCTUATION.contains(&ch));
            if absorbs_punctuation {
                last = Range::new(last.from(), pre_to);
            }
        }

        self.sel = Range::new(first.from(), last.to().max(first.from()));
        log::debug!("expanded to {:?}", self.selected_text());
        self.trim_selection();
        self.expand_outside();

        pre
    }

    /// Grow the selection over the first matching enclosing pairs, one pass in rule order.
    fn expand_outside(&mut self) {
        let config = self.config;
        for rule in &config.outside_rules {
            if rule.open == self.before || rule.close == self.after {
                continue;
            }
            if !self.outside_sel(&rule.open, &rule.close) {
                continue;
            }

            let mut grow_right = char_len(&rule.close) as isize;
            if rule.keep_trailing_space {
                grow_right -= 1;
            }
            let start = self.start_offset() as isize - char_len(&rule.open) as isize;
            let end = self.end_offset() as isize + grow_right.max(0);
            self.select_offsets(start, end);
            log::debug!(
                "grew over {:?}..{:?} to {:?}",
                rule.open,
                rule.close,
                self.selected_text()
            );
        }
    }
}
