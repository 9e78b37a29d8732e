//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;
use super::state::IssueFilter;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(AppMsg::Back),
        KeyCode::Char('a') => Some(AppMsg::SelectFilter(IssueFilter::All)),
        KeyCode::Char('o') => Some(AppMsg::SelectFilter(IssueFilter::Open)),
        KeyCode::Char('c') => Some(AppMsg::SelectFilter(IssueFilter::Closed)),
        KeyCode::Left | KeyCode::Char('h' | 'p') => Some(AppMsg::PreviousPage),
        KeyCode::Right | KeyCode::Char('l' | 'n') => Some(AppMsg::NextPage),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
