//! Key bindings: crossterm key events to dashboard commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

use crate::section::Section;

/// Something the user asked the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Section(Section),
    NextTab,
    PrevTab,
    RowUp,
    RowDown,
    ColumnLeft,
    ColumnRight,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    /// Cycle through the page sizes.
    CyclePageSize,
    /// Sort by the focused column.
    Sort,
    /// Return to input order.
    ClearSort,
    /// Close every expanded row.
    CollapseAll,
    /// Click the focused cell.
    Activate,
    /// Click the first action of the focused row.
    Action,
    /// Leave the current detail view.
    Back,
}

/// Map a terminal event to a command. Releases and unbound keys map to `None`.
pub fn command_for(event: &Event) -> Option<Command> {
    let Event::Key(key) = event else {
        return None;
    };
    let command = key_command(key);
    trace!("key {:?} -> {:?}", key.code, command);
    command
}

fn key_command(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char(c @ '1'..='9') => Command::Section(Section::from_digit(c.to_digit(10)?)?),
        KeyCode::Tab => Command::NextTab,
        KeyCode::BackTab => Command::PrevTab,
        KeyCode::Up | KeyCode::Char('k') => Command::RowUp,
        KeyCode::Down | KeyCode::Char('j') => Command::RowDown,
        KeyCode::Left | KeyCode::Char('h') => Command::ColumnLeft,
        KeyCode::Right | KeyCode::Char('l') => Command::ColumnRight,
        KeyCode::Char('[') | KeyCode::PageUp => Command::PrevPage,
        KeyCode::Char(']') | KeyCode::PageDown => Command::NextPage,
        KeyCode::Home | KeyCode::Char('g') => Command::FirstPage,
        KeyCode::End | KeyCode::Char('G') => Command::LastPage,
        KeyCode::Char('z') => Command::CyclePageSize,
        KeyCode::Char('s') => Command::Sort,
        KeyCode::Char('x') => Command::ClearSort,
        KeyCode::Char('c') => Command::CollapseAll,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate,
        KeyCode::Char('a') => Command::Action,
        KeyCode::Esc | KeyCode::Backspace => Command::Back,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(command_for(&press(KeyCode::Char('3'))), Some(Command::Section(Section::Finance)));
        assert_eq!(command_for(&press(KeyCode::Tab)), Some(Command::NextTab));
        assert_eq!(command_for(&press(KeyCode::BackTab)), Some(Command::PrevTab));
        assert_eq!(command_for(&press(KeyCode::Char(']'))), Some(Command::NextPage));
        assert_eq!(command_for(&press(KeyCode::Char('['))), Some(Command::PrevPage));
        assert_eq!(command_for(&press(KeyCode::Enter)), Some(Command::Activate));
        assert_eq!(command_for(&press(KeyCode::Esc)), Some(Command::Back));
    }

    #[test]
    fn test_page_jump_keys() {
        assert_eq!(command_for(&press(KeyCode::Home)), Some(Command::FirstPage));
        assert_eq!(command_for(&press(KeyCode::End)), Some(Command::LastPage));
        assert_eq!(command_for(&press(KeyCode::Char('G'))), Some(Command::LastPage));
        assert_eq!(command_for(&press(KeyCode::Char('x'))), Some(Command::ClearSort));
        assert_eq!(command_for(&press(KeyCode::Char('c'))), Some(Command::CollapseAll));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(command_for(&press(KeyCode::Char('7'))), None);
        assert_eq!(command_for(&press(KeyCode::Char('0'))), None);
        assert_eq!(command_for(&press(KeyCode::F(5))), None);
        assert_eq!(command_for(&Event::FocusGained), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(command_for(&event), Some(Command::Quit));

        let event = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(command_for(&event), None);
    }

    #[test]
    fn test_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(command_for(&event), None);
    }
}
