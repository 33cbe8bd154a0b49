use msgbar::{
    BarConfig, Command, KeyAction, KeyCode, KeyModifiers, KeyPress, MessageBar, Outcome,
};
use tempfile::TempDir;

fn press(bar: &mut MessageBar, key: KeyPress) -> Option<Outcome> {
    match bar.key_action(key)? {
        KeyAction::Run(command) => Some(bar.execute(command).unwrap()),
        KeyAction::PromptSavePath => {
            let path = bar.suggested_save_path()?;
            Some(bar.execute(Command::SaveToChosenPath(path)).unwrap())
        }
    }
}

fn ctrl_alt(c: char) -> KeyPress {
    KeyPress::with(KeyCode::Char(c), KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn ctrl_alt_shift(c: char) -> KeyPress {
    KeyPress::with(
        KeyCode::Char(c.to_ascii_uppercase()),
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
    )
}

#[test]
fn arrow_keys_recall_messages() {
    let mut bar = MessageBar::default();
    for text in ["a", "b", "c"] {
        bar.show(text);
    }

    press(&mut bar, KeyPress::plain(KeyCode::Up));
    assert_eq!(bar.current_message().unwrap().text(), "b");

    press(&mut bar, KeyPress::plain(KeyCode::Home));
    assert_eq!(bar.current_message().unwrap().text(), "a");

    press(&mut bar, KeyPress::plain(KeyCode::End));
    assert_eq!(bar.current_message().unwrap().text(), "c");

    press(&mut bar, KeyPress::plain(KeyCode::Down));
    assert_eq!(bar.current_message().unwrap().text(), "c");
}

#[test]
fn delete_chords_remove_messages() {
    let mut bar = MessageBar::default();
    for text in ["a", "b", "c"] {
        bar.show(text);
    }

    let outcome = press(&mut bar, ctrl_alt('x')).unwrap();
    assert!(matches!(outcome, Outcome::Deleted { .. }));
    assert_eq!(bar.len(), 2);

    let outcome = press(&mut bar, ctrl_alt_shift('x')).unwrap();
    assert_eq!(outcome, Outcome::Cleared { count: 2 });
}

#[test]
fn save_chords_ignored_without_save_dir() {
    let mut bar = MessageBar::default();
    bar.show("a");
    assert!(press(&mut bar, ctrl_alt('s')).is_none());
    assert!(press(&mut bar, ctrl_alt_shift('s')).is_none());
}

#[test]
fn save_chords_write_files_with_save_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut bar = MessageBar::new(&BarConfig {
        save_dir: Some(temp_dir.path().to_path_buf()),
        ..BarConfig::default()
    });
    bar.show("a");

    let Some(Outcome::Saved { path, lines }) = press(&mut bar, ctrl_alt('s')) else {
        panic!("expected a save");
    };
    assert_eq!(lines, 1);
    assert!(path.starts_with(temp_dir.path()));

    let Some(Outcome::Saved { path, .. }) = press(&mut bar, ctrl_alt_shift('s')) else {
        panic!("expected a save");
    };
    assert!(path.exists());
}

#[test]
fn unbound_keys_pass_through() {
    let mut bar = MessageBar::default();
    bar.show("a");
    assert!(press(&mut bar, KeyPress::plain(KeyCode::Char('q'))).is_none());
    assert!(press(&mut bar, KeyPress::plain(KeyCode::Esc)).is_none());
}

#[test]
fn uppercase_delete_chord_clears_everything() {
    let mut bar = MessageBar::default();
    for text in ["a", "b", "c"] {
        bar.show(text);
    }

    let outcome = press(&mut bar, ctrl_alt('X')).unwrap();
    assert_eq!(outcome, Outcome::Cleared { count: 3 });
    assert!(bar.is_empty());
}
