//! Key mapping. The TUI translates terminal events into actions; the
//! driver decides what each action means for the current route.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Up,
    Down,
    /// Open the selected row (list pages).
    Open,
    /// Leave a show page / dismiss the toast.
    Back,
    GoJobs,
    GoApplications,
    GoProfile,
    GoUploads,
    /// Open the comments page for the job being viewed.
    GoComments,
}

/// Map one key event; `None` for keys without a binding or release events.
#[must_use]
pub fn map_key(event: KeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match event.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('1') => Some(Action::GoJobs),
        KeyCode::Char('2') => Some(Action::GoApplications),
        KeyCode::Char('3') => Some(Action::GoProfile),
        KeyCode::Char('4') => Some(Action::GoUploads),
        KeyCode::Char('c') => Some(Action::GoComments),
        _ => None,
    }
}
