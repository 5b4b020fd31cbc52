use text_format_engine::{Command, Document, Editor, Position, Selection, Settings, TextFormat};

const FIXTURE: &str = "Notes\nhello world.  how are you? a) one b) two\nend";

fn fixture_with_selection(anchor: usize, head: usize) -> Document {
    let mut doc = Document::from_bytes(FIXTURE.as_bytes()).unwrap();
    doc.set_selection_offsets(anchor, head).unwrap();
    doc
}

fn render(command: Command) -> String {
    let mut doc = fixture_with_selection(8, 8);
    let patch = TextFormat::default().apply(command, &mut doc).unwrap();
    format!(
        "== {command} (changed: {})\nselected: {:?}\n{}",
        patch.changed,
        doc.selected_text(),
        doc.text()
    )
}

#[test]
fn every_command_on_caret_line() {
    let report = Command::ALL
        .iter()
        .map(|&command| render(command))
        .collect::<Vec<_>>()
        .join("\n\n");

    insta::assert_snapshot!("every_command_on_caret_line", report);
}

#[test]
fn selection_stays_inside_document_for_every_command() {
    let selections = [(0, 0), (8, 8), (3, 20), (20, 3), (47, 47), (0, 47)];

    for command in Command::ALL {
        for (anchor, head) in selections {
            let mut doc = fixture_with_selection(anchor, head);
            let patch = TextFormat::default().apply(command, &mut doc).unwrap();

            let from = doc.position_to_offset(patch.new_selection.from()).unwrap();
            let to = doc.position_to_offset(patch.new_selection.to()).unwrap();
            assert!(from <= to, "{command} {anchor}..{head}");
            assert!(to <= doc.len_chars(), "{command} {anchor}..{head}");
        }
    }
}

#[test]
fn unchanged_text_is_not_written() {
    for command in [Command::Lowercase, Command::FormatBulletList] {
        let mut doc = fixture_with_selection(8, 8);
        let patch = TextFormat::default().apply(command, &mut doc).unwrap();

        assert!(!patch.changed);
        assert_eq!(doc.version(), 0);
        assert_eq!(doc.text(), FIXTURE);
        assert_eq!(
            patch.new_selection,
            Selection::new(Position::new(1, 0), Position::new(2, 0))
        );
    }
}

#[test]
fn repeated_application_is_stable() {
    for command in [
        Command::Uppercase,
        Command::Lowercase,
        Command::RemoveSpaces,
        Command::SplitByBlank,
    ] {
        let mut doc = fixture_with_selection(0, 47);
        let engine = TextFormat::new(Settings::default());

        engine.apply(command, &mut doc).unwrap();
        let once = doc.text();
        let patch = engine.apply(command, &mut doc).unwrap();

        assert_eq!(doc.text(), once, "{command}");
        assert!(!patch.changed, "{command}");
    }
}

#[test]
fn bullet_list_over_explicit_multi_line_selection() {
    let text = "Shopping\n• eggs • flour\n• sugar\nThanks";
    let mut doc = Document::from_bytes(text.as_bytes()).unwrap();
    // Partial selection from inside line 1 to inside line 2
    doc.set_selection_offsets(12, 27).unwrap();

    TextFormat::default()
        .apply(Command::FormatBulletList, &mut doc)
        .unwrap();

    assert_eq!(doc.text(), "Shopping\n- eggs\n- flour\n- sugar\nThanks");
    assert_eq!(doc.selected_text(), "- eggs\n- flour\n- sugar\n");
}
