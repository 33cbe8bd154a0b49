//! Key bindings for message recall and buffer commands.
//!
//! | key                | action                       |
//! |--------------------|------------------------------|
//! | Up / Down          | previous / next message      |
//! | Home / End         | oldest / newest message      |
//! | PageUp / PageDown  | ten messages back / forward  |
//! | Ctrl+Alt+X         | delete displayed message     |
//! | Ctrl+Alt+Shift+X   | delete every message         |
//! | Ctrl+Alt+S         | save to the save directory   |
//! | Ctrl+Alt+Shift+S   | ask the host for a save path |
//!
//! The two save bindings only resolve when saving is enabled.

use bitflags::bitflags;
use crossterm::event::{self, KeyEventKind};

use crate::bar::Command;

/// Key codes the message bar cares about.
///
/// This is a subset of crossterm's KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
}

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b0000_1000;
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// A key press with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// A key press with the given modifiers.
    pub const fn with(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Convert a crossterm key event.
    ///
    /// Only press events are kept (not release or repeat), and keys outside
    /// [`KeyCode`] map to `None`.
    pub fn from_crossterm(key_event: &event::KeyEvent) -> Option<Self> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        let code = convert_key_code(key_event.code)?;
        let modifiers = convert_modifiers(key_event.modifiers);
        Some(Self { code, modifiers })
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, mods.contains(event::KeyModifiers::SHIFT));
    out.set(KeyModifiers::CONTROL, mods.contains(event::KeyModifiers::CONTROL));
    out.set(KeyModifiers::ALT, mods.contains(event::KeyModifiers::ALT));
    out.set(KeyModifiers::SUPER, mods.contains(event::KeyModifiers::SUPER));
    out
}

/// What a bound key asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command.
    Run(Command),
    /// The host should ask the user for a save path, then run
    /// [`Command::SaveToChosenPath`].
    PromptSavePath,
}

/// Map a key press to an action.
///
/// Navigation keys must be pressed without modifiers. Returns `None` for
/// unbound keys so the host can pass them on.
pub fn resolve(key: KeyPress, saving_enabled: bool) -> Option<KeyAction> {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let shifted_chord = chord | KeyModifiers::SHIFT;

    if key.modifiers.is_empty() {
        let command = match key.code {
            KeyCode::Up => Command::MovePrevious,
            KeyCode::Down => Command::MoveNext,
            KeyCode::Home => Command::MoveToOldest,
            KeyCode::End => Command::MoveToNewest,
            KeyCode::PageUp => Command::PageUp,
            KeyCode::PageDown => Command::PageDown,
            _ => return None,
        };
        return Some(KeyAction::Run(command));
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };

    // Some terminals report Shift only through the uppercase char.
    let mut modifiers = key.modifiers;
    if c.is_uppercase() {
        modifiers |= KeyModifiers::SHIFT;
    }

    match (c.to_ascii_lowercase(), modifiers) {
        ('x', m) if m == chord => Some(KeyAction::Run(Command::DeleteCurrent)),
        ('x', m) if m == shifted_chord => Some(KeyAction::Run(Command::DeleteAll)),
        ('s', m) if m == chord && saving_enabled => {
            Some(KeyAction::Run(Command::SaveToDefaultDir))
        }
        ('s', m) if m == shifted_chord && saving_enabled => Some(KeyAction::PromptSavePath),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(c: char, shift: bool) -> KeyPress {
        let mut mods = KeyModifiers::CONTROL | KeyModifiers::ALT;
        if shift {
            mods |= KeyModifiers::SHIFT;
        }
        KeyPress::with(KeyCode::Char(c), mods)
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Up, Command::MovePrevious),
            (KeyCode::Down, Command::MoveNext),
            (KeyCode::Home, Command::MoveToOldest),
            (KeyCode::End, Command::MoveToNewest),
            (KeyCode::PageUp, Command::PageUp),
            (KeyCode::PageDown, Command::PageDown),
        ];
        for (code, command) in cases {
            assert_eq!(
                resolve(KeyPress::plain(code), false),
                Some(KeyAction::Run(command))
            );
        }
    }

    #[test]
    fn test_delete_chords() {
        assert_eq!(
            resolve(chord('x', false), false),
            Some(KeyAction::Run(Command::DeleteCurrent))
        );
        // Terminals report Shift+X as an uppercase char.
        assert_eq!(
            resolve(chord('X', true), false),
            Some(KeyAction::Run(Command::DeleteAll))
        );
    }

    #[test]
    fn test_uppercase_char_implies_shift() {
        let ctrl_alt = KeyModifiers::CONTROL | KeyModifiers::ALT;

        let upper = KeyPress::with(KeyCode::Char('X'), ctrl_alt);
        assert_eq!(
            resolve(upper, false),
            Some(KeyAction::Run(Command::DeleteAll))
        );

        let upper = KeyPress::with(KeyCode::Char('S'), ctrl_alt);
        assert_eq!(resolve(upper, true), Some(KeyAction::PromptSavePath));
    }

    #[test]
    fn test_save_chords_need_saving_enabled() {
        assert_eq!(resolve(chord('s', false), false), None);
        assert_eq!(resolve(chord('S', true), false), None);
        assert_eq!(
            resolve(chord('s', false), true),
            Some(KeyAction::Run(Command::SaveToDefaultDir))
        );
        assert_eq!(resolve(chord('S', true), true), Some(KeyAction::PromptSavePath));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(resolve(KeyPress::plain(KeyCode::Char('x')), true), None);
        assert_eq!(resolve(KeyPress::plain(KeyCode::Left), true), None);
        assert_eq!(
            resolve(KeyPress::with(KeyCode::Up, KeyModifiers::SHIFT), true),
            None
        );
        assert_eq!(
            resolve(KeyPress::with(KeyCode::Char('x'), KeyModifiers::CONTROL), true),
            None
        );
    }

    #[test]
    fn test_from_crossterm_press_only() {
        let press = event::KeyEvent::new(
            event::KeyCode::Char('X'),
            event::KeyModifiers::CONTROL | event::KeyModifiers::ALT | event::KeyModifiers::SHIFT,
        );
        let key = KeyPress::from_crossterm(&press).unwrap();
        assert_eq!(key, chord('X', true));

        let mut release = press;
        release.kind = KeyEventKind::Release;
        assert_eq!(KeyPress::from_crossterm(&release), None);

        let f1 = event::KeyEvent::new(event::KeyCode::F(1), event::KeyModifiers::NONE);
        assert_eq!(KeyPress::from_crossterm(&f1), None);
    }
}
