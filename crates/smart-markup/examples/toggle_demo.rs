use smart_markup::{
    ActiveFile, COPY_PATH_ID, EditorHost, MarkupConfig, MarkupEngine, MemoryClipboard, Outcome,
    Position, Range, TextBuffer,
};

fn show(label: &str, buffer: &TextBuffer) {
    println!("{label}:");
    for line in buffer.text().lines() {
        println!("  | {line}");
    }
    println!("  cursors: {:?}", buffer.selections());
}

fn main() {
    env_logger::init();

    let engine = MarkupEngine::new(MarkupConfig::default()).unwrap();
    let mut buffer = TextBuffer::with_selections(
        "- buy milk\n- call mom\n\nlet x = 1;\nlet y = 2;",
        vec![
            Range::caret(Position::new(0, 4)),
            Range::caret(Position::new(1, 8)),
        ],
    );
    show("initial", &buffer);

    let bold = engine.command("smarter-asterisk-bold").unwrap();
    engine.run_toggle(bold, &mut buffer);
    show("bold at two cursors", &buffer);

    engine.run_toggle(bold, &mut buffer);
    show("bold again", &buffer);

    buffer.set_selection(Position::new(3, 0), Position::new(4, 10));
    let code = engine.command("smarter-inline-code").unwrap();
    engine.run_toggle(code, &mut buffer);
    show("fenced code", &buffer);

    let clipboard = MemoryClipboard::new("https://www.rust-lang.org");
    buffer.set_selection(Position::new(0, 2), Position::new(0, 5));
    let outcome = pollster::block_on(engine.run("smarter-md-link", &mut buffer, &clipboard))
        .unwrap();
    show("link from clipboard", &buffer);
    println!("  outcome: {outcome:?}");

    let file = ActiveFile::new("lists/groceries.md", "/home/me/vault");
    for _ in 0..3 {
        let outcome =
            pollster::block_on(engine.run_file_command(COPY_PATH_ID, Some(&file), &clipboard))
                .unwrap();
        if let Outcome::Notice(notice) = outcome {
            println!("{}", notice.replace('\n', ""));
        }
    }
}
