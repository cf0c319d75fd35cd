use smart_markup::{
    EditorHost, MarkupConfig, MarkupEngine, Outcome, Position, Range, TextBuffer,
};

/// Host without a word primitive; `word_at` keeps its default answer.
struct PlainHost(TextBuffer);

impl EditorHost for PlainHost {
    fn list_selections(&self) -> Vec<Range> {
        self.0.list_selections()
    }

    fn set_selections(&mut self, selections: &[Range]) {
        self.0.set_selections(selections);
    }

    fn get_range(&self, from: Position, to: Position) -> String {
        self.0.get_range(from, to)
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        self.0.replace_range(text, from, to);
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        self.0.offset_to_position(offset)
    }

    fn position_to_offset(&self, pos: Position) -> usize {
        self.0.position_to_offset(pos)
    }

    fn get_line(&self, line: usize) -> String {
        self.0.get_line(line)
    }

    fn line_count(&self) -> usize {
        self.0.line_count()
    }
}

fn engine() -> MarkupEngine {
    MarkupEngine::new(MarkupConfig::default()).unwrap()
}

fn caret(line: usize, column: usize) -> Range {
    Range::caret(Position::new(line, column))
}

fn span(line: usize, from: usize, to: usize) -> Range {
    Range::new(Position::new(line, from), Position::new(line, to))
}

fn toggle(engine: &MarkupEngine, id: &str, buffer: &mut TextBuffer) -> Outcome {
    let command = engine.command(id).unwrap();
    engine.run_toggle(command, buffer)
}

#[test]
fn test_caret_in_word_wraps_bold() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("hello", vec![caret(0, 2)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "**hello**");
    assert_eq!(buffer.selections(), &[caret(0, 4)]);
}

#[test]
fn test_selection_inside_markers_unwraps() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("**bold**", vec![span(0, 2, 6)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "bold");
    assert_eq!(buffer.selections(), &[span(0, 0, 4)]);
}

#[test]
fn test_multi_line_italics_skip_empty_line() {
    let engine = engine();
    let sel = Range::new(Position::new(0, 0), Position::new(2, 5));
    let mut buffer = TextBuffer::with_selections("one\n\nthree", vec![sel]);

    toggle(&engine, "smarter-asterisk-italics", &mut buffer);

    assert_eq!(buffer.text(), "*one*\n\n*three*");
    assert_eq!(buffer.selections(), &[caret(2, 7)]);

    let sel = Range::new(Position::new(0, 0), Position::new(2, 7));
    buffer.set_selection(sel.anchor, sel.head);
    toggle(&engine, "smarter-asterisk-italics", &mut buffer);
    assert_eq!(buffer.text(), "one\n\nthree");
}

#[test]
fn test_two_cursors_on_one_line() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("foo bar", vec![caret(0, 5), caret(0, 1)]);

    let outcome = toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "**foo** **bar**");
    assert_eq!(
        outcome,
        Outcome::Applied {
            cursors: vec![caret(0, 4), caret(0, 11)]
        }
    );
}

#[test]
fn test_toggle_twice_restores_text_and_selection() {
    let engine = engine();
    let samples = [
        ("plain word here", caret(0, 7), "smarter-asterisk-bold"),
        ("x", span(0, 0, 1), "smarter-highlight"),
        ("a b c", span(0, 0, 5), "smarter-strikethrough"),
        ("snake_case name", caret(0, 3), "smarter-underscore-italics"),
    ];

    for (text, sel, id) in samples {
        let mut buffer = TextBuffer::with_selections(text, vec![sel]);
        toggle(&engine, id, &mut buffer);
        assert_ne!(buffer.text(), text, "{id} on {text:?}");
        toggle(&engine, id, &mut buffer);
        assert_eq!(buffer.text(), text, "{id} on {text:?}");
        assert_eq!(buffer.selections(), &[sel], "{id} on {text:?}");
    }
}

#[test]
fn test_list_marker_stays_outside() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("- item", vec![span(0, 0, 6)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "- **item**");
    assert_eq!(buffer.selections(), &[span(0, 4, 8)]);
}

#[test]
fn test_line_selection_with_break_is_not_multi_line() {
    let engine = engine();
    let sel = Range::new(Position::new(0, 0), Position::new(1, 0));
    let mut buffer = TextBuffer::with_selections("## Title\nnext", vec![sel]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "## **Title**\nnext");
}

#[test]
fn test_block_reference_stays_outside() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("some text ^ref1", vec![span(0, 0, 15)]);

    toggle(&engine, "smarter-highlight", &mut buffer);

    assert_eq!(buffer.text(), "==some text== ^ref1");
}

#[test]
fn test_grows_over_wikilink() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("see [[page]] now", vec![caret(0, 7)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "see **[[page]]** now");
    assert_eq!(buffer.selections(), &[caret(0, 9)]);
}

#[test]
fn test_grows_over_tag() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("a #tag b", vec![caret(0, 4)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "a **#tag** b");
}

#[test]
fn test_grows_over_brackets_but_not_the_space() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("[text] x", vec![caret(0, 2)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "**[text]** x");
}

#[test]
fn test_caret_between_markers_removes_them() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("a **** b", vec![caret(0, 4)]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);

    assert_eq!(buffer.text(), "a  b");
    assert_eq!(buffer.selections(), &[caret(0, 2)]);
}

#[test]
fn test_comment_padding_is_removed_with_markers() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("%% note %%", vec![span(0, 0, 10)]);

    toggle(&engine, "smarter-comments", &mut buffer);

    assert_eq!(buffer.text(), "note");
    assert_eq!(buffer.selections(), &[span(0, 0, 4)]);
}

#[test]
fn test_html_comment() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("text", vec![span(0, 0, 4)]);

    toggle(&engine, "smarter-html-comments", &mut buffer);
    assert_eq!(buffer.text(), "<!-- text -->");
    assert_eq!(buffer.selections(), &[span(0, 5, 9)]);

    toggle(&engine, "smarter-html-comments", &mut buffer);
    assert_eq!(buffer.text(), "text");
}

#[test]
fn test_inline_code_takes_whole_token() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("call foo.bar(x) now", vec![caret(0, 7)]);

    toggle(&engine, "smarter-inline-code", &mut buffer);

    assert_eq!(buffer.text(), "call `foo.bar(x)` now");
    assert_eq!(buffer.selections(), &[caret(0, 8)]);
}

#[test]
fn test_trailing_punctuation_is_not_absorbed() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("run cargo.", vec![span(0, 4, 9)]);

    toggle(&engine, "smarter-inline-code", &mut buffer);

    assert_eq!(buffer.text(), "run `cargo`.");
    assert_eq!(buffer.selections(), &[span(0, 5, 10)]);
}

#[test]
fn test_inline_math_takes_whole_token() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("x^2 + y", vec![caret(0, 1)]);

    toggle(&engine, "smarter-math", &mut buffer);

    assert_eq!(buffer.text(), "$x^2$ + y");
    assert_eq!(buffer.selections(), &[caret(0, 2)]);
}

#[test]
fn test_cursor_after_block_wrap_follows_moved_lines() {
    let engine = engine();
    let block = Range::new(Position::new(0, 0), Position::new(1, 1));
    let mut buffer = TextBuffer::with_selections("a\nb\nc", vec![caret(2, 0), block]);

    let outcome = toggle(&engine, "smarter-inline-code", &mut buffer);

    assert_eq!(buffer.text(), "```\na\nb\n```\n`c`");
    assert_eq!(
        outcome,
        Outcome::Applied {
            cursors: vec![caret(0, 3), caret(4, 1)]
        }
    );
}

#[test]
fn test_earlier_cursor_follows_fence_inserted_above_it() {
    let engine = engine();
    let block = Range::new(Position::new(0, 2), Position::new(1, 1));
    let mut buffer = TextBuffer::with_selections("a b\nc", vec![caret(0, 0), block]);

    let outcome = toggle(&engine, "smarter-inline-code", &mut buffer);

    assert_eq!(buffer.text(), "```\n`a` b\nc\n```");
    assert_eq!(
        outcome,
        Outcome::Applied {
            cursors: vec![caret(1, 1), caret(0, 3)]
        }
    );
    assert_eq!(buffer.get_line(1), "`a` b");
}

#[test]
fn test_backward_selection_round_trip_keeps_direction() {
    let engine = engine();
    let backward = Range::new(Position::new(0, 5), Position::new(0, 0));
    let mut buffer = TextBuffer::with_selections("hello world", vec![backward]);

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);
    assert_eq!(buffer.text(), "**hello** world");
    assert_eq!(
        buffer.selections(),
        &[Range::new(Position::new(0, 7), Position::new(0, 2))]
    );

    toggle(&engine, "smarter-asterisk-bold", &mut buffer);
    assert_eq!(buffer.text(), "hello world");
    assert_eq!(buffer.selections(), &[backward]);
}

#[test]
fn test_host_without_words_falls_back_to_tokens() {
    let engine = engine();
    let mut host = PlainHost(TextBuffer::with_selections("foo.bar baz", vec![caret(0, 5)]));

    let command = engine.command("smarter-asterisk-bold").unwrap();
    engine.run_toggle(command, &mut host);

    assert_eq!(host.0.text(), "**foo.bar** baz");
    assert_eq!(host.0.selections(), &[caret(0, 7)]);
}

#[test]
fn test_cursors_on_later_lines_are_untouched_by_column_shifts() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("one\ntwo", vec![caret(0, 1), caret(1, 1)]);

    toggle(&engine, "smarter-highlight", &mut buffer);

    assert_eq!(buffer.text(), "==one==\n==two==");
    assert_eq!(buffer.selections(), &[caret(0, 3), caret(1, 3)]);
}

#[test]
fn test_custom_command_from_toml() {
    let config = MarkupConfig::from_toml_str(
        r#"
        [[commands]]
        id = "underline"
        name = "Underline"
        before = "<u>"
        after = "</u>"
        "#,
    )
    .unwrap();
    let engine = MarkupEngine::new(config).unwrap();
    let mut buffer = TextBuffer::with_selections("word", vec![caret(0, 0)]);

    toggle(&engine, "underline", &mut buffer);

    assert_eq!(buffer.text(), "<u>word</u>");
    assert!(engine.command("smarter-asterisk-bold").is_err());
}

#[test]
fn test_no_cursors_is_a_no_op() {
    let engine = engine();
    let mut buffer = TextBuffer::with_selections("text", Vec::new());

    assert_eq!(toggle(&engine, "smarter-asterisk-bold", &mut buffer), Outcome::NoOp);
    assert_eq!(buffer.text(), "text");
}
