use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Mode;

/// User actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave without choosing, whatever the state
    Cancel,
    /// `q`: leave only when no filter is applied
    QuitIfUnfiltered,
    /// `Esc`: clear the filter, or leave when there is none
    Back,
    Confirm,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    StartFilter,
    UpdateFilter(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration, mode: Mode) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key, mode));
    }
    Ok(Action::None)
}

/// Map a key to an action; printable keys mean different things per mode
pub fn key_to_action(key: KeyEvent, mode: Mode) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Enter, _) => Action::Confirm,

        // Navigation (arrows and Emacs style work in both modes)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Home, _) => Action::Top,
        (KeyCode::End, _) => Action::Bottom,

        (KeyCode::Backspace, _) if mode == Mode::Filtering => Action::DeleteChar,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            match mode {
                Mode::Filtering => Action::UpdateFilter(c),
                Mode::Browsing => browsing_char(c),
            }
        }

        _ => Action::None,
    }
}

fn browsing_char(c: char) -> Action {
    match c {
        'k' => Action::MoveUp,
        'j' => Action::MoveDown,
        'g' => Action::Top,
        'G' => Action::Bottom,
        '/' => Action::StartFilter,
        'q' => Action::QuitIfUnfiltered,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cancel_in_both_modes() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c, Mode::Browsing), Action::Cancel);
        assert_eq!(key_to_action(ctrl_c, Mode::Filtering), Action::Cancel);
    }

    #[test]
    fn test_escape_and_enter() {
        assert_eq!(key_to_action(key(KeyCode::Esc), Mode::Browsing), Action::Back);
        assert_eq!(key_to_action(key(KeyCode::Esc), Mode::Filtering), Action::Back);
        assert_eq!(key_to_action(key(KeyCode::Enter), Mode::Browsing), Action::Confirm);
        assert_eq!(key_to_action(key(KeyCode::Enter), Mode::Filtering), Action::Confirm);
    }

    #[test]
    fn test_navigation_arrows_and_emacs() {
        assert_eq!(key_to_action(key(KeyCode::Up), Mode::Filtering), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Down), Mode::Browsing), Action::MoveDown);
        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_p, Mode::Filtering), Action::MoveUp);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_n, Mode::Browsing), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::PageUp), Mode::Browsing), Action::PageUp);
        assert_eq!(key_to_action(key(KeyCode::PageDown), Mode::Browsing), Action::PageDown);
        assert_eq!(key_to_action(key(KeyCode::Home), Mode::Browsing), Action::Top);
        assert_eq!(key_to_action(key(KeyCode::End), Mode::Filtering), Action::Bottom);
    }

    #[test]
    fn test_browsing_letters_are_commands() {
        assert_eq!(key_to_action(key(KeyCode::Char('j')), Mode::Browsing), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::Char('k')), Mode::Browsing), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Char('/')), Mode::Browsing), Action::StartFilter);
        assert_eq!(
            key_to_action(key(KeyCode::Char('q')), Mode::Browsing),
            Action::QuitIfUnfiltered
        );
        assert_eq!(key_to_action(key(KeyCode::Char('x')), Mode::Browsing), Action::None);
        assert_eq!(key_to_action(key(KeyCode::Backspace), Mode::Browsing), Action::None);
    }

    #[test]
    fn test_filtering_letters_are_input() {
        assert_eq!(key_to_action(key(KeyCode::Char('q')), Mode::Filtering), Action::UpdateFilter('q'));
        assert_eq!(key_to_action(key(KeyCode::Char('j')), Mode::Filtering), Action::UpdateFilter('j'));
        assert_eq!(key_to_action(key(KeyCode::Char('/')), Mode::Filtering), Action::UpdateFilter('/'));
        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(shift_a, Mode::Filtering), Action::UpdateFilter('A'));
        assert_eq!(key_to_action(key(KeyCode::Backspace), Mode::Filtering), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1)), Mode::Browsing), Action::None);
        assert_eq!(key_to_action(key(KeyCode::Tab), Mode::Filtering), Action::None);
    }
}
