use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Focus;

/// What a keystroke means for the inventory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TuiEvent {
    Quit,
    TogglePanel,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    Submit,
    ClearForm,
    Reload,
    SelectNext,
    SelectPrev,
    EditSelected,
    DeleteSelected,
}

pub(crate) fn map_key(key: KeyEvent, focus: Focus) -> Option<TuiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(TuiEvent::Quit),
        KeyCode::Esc => return Some(TuiEvent::Quit),
        KeyCode::F(2) => return Some(TuiEvent::TogglePanel),
        KeyCode::Char('t') if ctrl => return Some(TuiEvent::TogglePanel),
        KeyCode::Char('l') if ctrl => return Some(TuiEvent::ClearForm),
        KeyCode::F(5) => return Some(TuiEvent::Reload),
        KeyCode::Tab => return Some(TuiEvent::FocusNext),
        KeyCode::BackTab => return Some(TuiEvent::FocusPrev),
        _ => {}
    }

    if ctrl || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match focus {
        Focus::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(TuiEvent::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(TuiEvent::SelectPrev),
            KeyCode::Enter | KeyCode::Char('e') => Some(TuiEvent::EditSelected),
            KeyCode::Delete | KeyCode::Char('d') => Some(TuiEvent::DeleteSelected),
            _ => None,
        },
        Focus::Search => match key.code {
            KeyCode::Char(c) => Some(TuiEvent::Input(c)),
            KeyCode::Backspace => Some(TuiEvent::Backspace),
            KeyCode::Enter | KeyCode::Down => Some(TuiEvent::FocusNext),
            _ => None,
        },
        Focus::Field(_) => match key.code {
            KeyCode::Char(c) => Some(TuiEvent::Input(c)),
            KeyCode::Backspace => Some(TuiEvent::Backspace),
            KeyCode::Enter => Some(TuiEvent::Submit),
            KeyCode::Down => Some(TuiEvent::FocusNext),
            KeyCode::Up => Some(TuiEvent::FocusPrev),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockkeep_runtime::FormField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_letters_are_text_in_fields_and_commands_in_list() {
        let name = Focus::Field(FormField::Name);
        assert_eq!(map_key(key(KeyCode::Char('d')), name), Some(TuiEvent::Input('d')));
        assert_eq!(
            map_key(key(KeyCode::Char('d')), Focus::List),
            Some(TuiEvent::DeleteSelected)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('e')), Focus::List),
            Some(TuiEvent::EditSelected)
        );
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Field(FormField::Quantity)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Search), Some(TuiEvent::FocusNext));
        assert_eq!(map_key(key(KeyCode::Enter), Focus::List), Some(TuiEvent::EditSelected));
    }

    #[test]
    fn test_global_bindings() {
        for focus in [Focus::Search, Focus::List, Focus::Field(FormField::Category)] {
            assert_eq!(map_key(ctrl('c'), focus), Some(TuiEvent::Quit));
            assert_eq!(map_key(key(KeyCode::F(2)), focus), Some(TuiEvent::TogglePanel));
            assert_eq!(map_key(ctrl('l'), focus), Some(TuiEvent::ClearForm));
            assert_eq!(map_key(key(KeyCode::Tab), focus), Some(TuiEvent::FocusNext));
        }
        assert_eq!(map_key(ctrl('x'), Focus::Search), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, Focus::Search), None);
    }
}
