use std::fs;
use std::time::Duration;

use msgbar::{BarConfig, BarError, Command, Message, MessageBar, Outcome, Rgb};
use tempfile::TempDir;

fn bar_saving_to(dir: &TempDir) -> MessageBar {
    MessageBar::new(&BarConfig {
        save_dir: Some(dir.path().to_path_buf()),
        ..BarConfig::default()
    })
}

#[test]
fn saving_empty_buffer_writes_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.msgs");
    let mut bar = MessageBar::default();

    let outcome = bar
        .execute(Command::SaveToChosenPath(path.clone()))
        .unwrap();

    assert_eq!(outcome, Outcome::Saved { path: path.clone(), lines: 0 });
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 0);
}

#[test]
fn saved_lines_are_oldest_first_with_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("buffer.msgs");
    let mut bar = MessageBar::default();
    bar.show("first");
    bar.show(
        Message::new("second")
            .with_fg(Rgb::new(0x12, 0x34, 0x56))
            .with_timeout(Duration::from_millis(2500)),
    );
    bar.show_error("third");

    bar.execute(Command::SaveToChosenPath(path.clone())).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("00: first 0 msecs FG:- BG:- BOLD:false @ "));
    assert!(lines[1].starts_with("01: second 2500 msecs FG:#123456 BG:- BOLD:false @ "));
    assert!(lines[2].starts_with("02: third 0 msecs FG:#ffff00 BG:#aa0000 BOLD:true @ "));
}

#[test]
fn save_to_default_dir_creates_timestamped_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut bar = bar_saving_to(&temp_dir);
    bar.show("hello");

    let Outcome::Saved { path, lines } = bar.execute(Command::SaveToDefaultDir).unwrap() else {
        panic!("expected a save");
    };

    assert_eq!(lines, 1);
    assert_eq!(path.parent(), Some(temp_dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("msgs"));
    assert!(path.exists());
}

#[test]
fn save_to_default_dir_without_dir_is_disabled() {
    let mut bar = MessageBar::default();
    bar.show("hello");

    let result = bar.execute(Command::SaveToDefaultDir);
    assert!(matches!(result, Err(BarError::SaveDisabled)));
    assert!(!bar.can_save());
    assert!(bar.suggested_save_path().is_none());
}

#[test]
fn failed_write_reports_io_error_and_keeps_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("buffer.msgs");
    let mut bar = MessageBar::default();
    bar.show("kept");

    let result = bar.execute(Command::SaveToChosenPath(path.clone()));

    match result {
        Err(BarError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(bar.len(), 1);
    assert_eq!(bar.current_message().map(Message::text), Some("kept"));
}

#[test]
fn multi_line_message_stays_on_one_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("multi.msgs");
    let mut bar = MessageBar::default();
    bar.show("build failed:\nsee log");
    bar.show("crlf\r\nand a \\ backslash");

    let Outcome::Saved { lines, .. } = bar
        .execute(Command::SaveToChosenPath(path.clone()))
        .unwrap()
    else {
        panic!("expected a save");
    };

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), lines);
    let saved: Vec<&str> = content.lines().collect();
    assert!(saved[0].starts_with(r"00: build failed:\nsee log 0 msecs "));
    assert!(saved[1].starts_with(r"01: crlf\r\nand a \\ backslash 0 msecs "));
}
