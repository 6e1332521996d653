use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.load`(...) for the configured location
    Reload,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Delete, Down, Enter, Esc, Left, Right, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    app.info_message = None;
    let mut action = Action::None;

    match app.screen {
        Screen::SkipList => match key.code {
            Up | Char('k') => app.list_index = app.list_index.saturating_sub(1),
            Down | Char('j') => {
                if app.list_index + 1 < app.skips.len() {
                    app.list_index += 1;
                }
            }
            Enter | Right => app.open_detail(),
            Char('c') => app.compare_current(),
            Char('v') => app.screen = Screen::Compare,
            Char('a') => {
                app.dialog_index = app.list_index;
                app.screen = Screen::AddToCompare;
            }
            Char('r') => action = Action::Reload,
            _ => {}
        },

        Screen::Detail => match key.code {
            Left | Esc | Char('b') => app.screen = Screen::SkipList,
            Char('c') => app.compare_current(),
            _ => {}
        },

        Screen::Compare => match key.code {
            Up | Char('k') => app.compare_index = app.compare_index.saturating_sub(1),
            Down | Char('j') => {
                if app.compare_index + 1 < app.comparison.len() {
                    app.compare_index += 1;
                }
            }
            Char('d') | Delete | Backspace => app.remove_compared(),
            Char('x') => app.clear_comparison(),
            Char('a') => app.screen = Screen::AddToCompare,
            Left | Esc | Char('b') => app.screen = Screen::SkipList,
            _ => {}
        },

        Screen::AddToCompare => match key.code {
            Up | Char('k') => app.dialog_index = app.dialog_index.saturating_sub(1),
            Down | Char('j') => {
                if app.dialog_index + 1 < app.skips.len() {
                    app.dialog_index += 1;
                }
            }
            Char(' ') => app.toggle_dialog_pick(),
            Enter => app.commit_dialog(),
            Left | Esc => app.screen = Screen::Compare,
            _ => {}
        },
    }
    action
}
