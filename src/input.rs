//! Keyboard mapping.
//!
//! Turns crossterm key events into app-level actions. Character keys are
//! matched case-insensitively; which actions a key produces depends on the
//! visible screen.

use crate::app::Screen;
use crate::constants::{FIRE_KEY, JUMP_KEY, RESTART_KEY};
use crate::runner::RunnerInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Move the variant cursor up.
    MenuUp,
    /// Move the variant cursor down.
    MenuDown,
    /// Jump the cursor straight to a variant by number.
    MenuSelect(usize),
    /// Start a session with the highlighted variant.
    Start,
    /// Leave the play view for the menu.
    Back,
    Quit,
    /// Forwarded to the running session.
    Game(RunnerInput),
    None,
}

/// Map a key event for the given screen.
pub fn map_key(key: KeyEvent, screen: Screen) -> AppInput {
    // Terminals with enhanced keyboard reporting also send releases
    if key.kind == KeyEventKind::Release {
        return AppInput::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return AppInput::Quit;
    }

    match screen {
        Screen::Menu => map_menu_key(key.code),
        Screen::Playing => map_play_key(key.code),
    }
}

fn map_menu_key(code: KeyCode) -> AppInput {
    match code {
        KeyCode::Up => AppInput::MenuUp,
        KeyCode::Down => AppInput::MenuDown,
        KeyCode::Enter => AppInput::Start,
        KeyCode::Esc => AppInput::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            ' ' => AppInput::Start,
            'q' => AppInput::Quit,
            d @ '1'..='9' => AppInput::MenuSelect(d as usize - '1' as usize),
            _ => AppInput::None,
        },
        _ => AppInput::None,
    }
}

fn map_play_key(code: KeyCode) -> AppInput {
    match code {
        KeyCode::Esc => AppInput::Back,
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            let input = if c == JUMP_KEY {
                RunnerInput::Jump
            } else if c == FIRE_KEY {
                RunnerInput::Fire
            } else if c == RESTART_KEY {
                RunnerInput::Restart
            } else {
                RunnerInput::Other
            };
            AppInput::Game(input)
        }
        _ => AppInput::Game(RunnerInput::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_play_bindings() {
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), Screen::Playing),
            AppInput::Game(RunnerInput::Jump)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a')), Screen::Playing),
            AppInput::Game(RunnerInput::Fire)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('r')), Screen::Playing),
            AppInput::Game(RunnerInput::Restart)
        );
        assert_eq!(map_key(press(KeyCode::Esc), Screen::Playing), AppInput::Back);
    }

    #[test]
    fn test_play_bindings_are_case_insensitive() {
        assert_eq!(
            map_key(press(KeyCode::Char('A')), Screen::Playing),
            AppInput::Game(RunnerInput::Fire)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('R')), Screen::Playing),
            AppInput::Game(RunnerInput::Restart)
        );
    }

    #[test]
    fn test_unbound_keys_map_to_other() {
        assert_eq!(
            map_key(press(KeyCode::Char('z')), Screen::Playing),
            AppInput::Game(RunnerInput::Other)
        );
        assert_eq!(
            map_key(press(KeyCode::Left), Screen::Playing),
            AppInput::Game(RunnerInput::Other)
        );
    }

    #[test]
    fn test_menu_never_produces_game_input() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Char('a'),
            KeyCode::Char('r'),
            KeyCode::Char('x'),
            KeyCode::Tab,
        ] {
            let mapped = map_key(press(code), Screen::Menu);
            assert!(!matches!(mapped, AppInput::Game(_)), "{:?} -> {:?}", code, mapped);
        }
    }

    #[test]
    fn test_menu_bindings() {
        assert_eq!(map_key(press(KeyCode::Up), Screen::Menu), AppInput::MenuUp);
        assert_eq!(map_key(press(KeyCode::Down), Screen::Menu), AppInput::MenuDown);
        assert_eq!(map_key(press(KeyCode::Enter), Screen::Menu), AppInput::Start);
        assert_eq!(map_key(press(KeyCode::Char(' ')), Screen::Menu), AppInput::Start);
        assert_eq!(map_key(press(KeyCode::Char('2')), Screen::Menu), AppInput::MenuSelect(1));
        assert_eq!(map_key(press(KeyCode::Char('Q')), Screen::Menu), AppInput::Quit);
        assert_eq!(map_key(press(KeyCode::Esc), Screen::Menu), AppInput::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Screen::Menu), AppInput::Quit);
        assert_eq!(map_key(ctrl_c, Screen::Playing), AppInput::Quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, Screen::Playing), AppInput::None);
    }
}
