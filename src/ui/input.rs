//! Keyboard input handling.
//!
//! Maps key presses to selection movement, tab switching, and reaction
//! submits. Reaction keys issue one request per press — rapid presses each
//! fire independently and the binder's latest-token guard decides which
//! response lands.

use crate::app::{App, AppEvent};
use crate::feed::ReactionKind;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::loop_runner::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match code {
        KeyCode::Char('q') => return Action::Quit,

        // Selection over reactable cards
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        // Tab switching
        KeyCode::Tab | KeyCode::Char(']') | KeyCode::Right => app.next_tab(),
        KeyCode::BackTab | KeyCode::Char('[') | KeyCode::Left => app.prev_tab(),
        KeyCode::Char('0') | KeyCode::Char('a') => app.select_all_posts(),
        KeyCode::Char(c @ '1'..='9') => {
            let position = c as usize - '1' as usize;
            app.select_category_at(position);
        }

        // Reactions on the selected post/comment
        KeyCode::Char('l') => app.react(ReactionKind::Like, event_tx),
        KeyCode::Char('d') => app.react(ReactionKind::Dislike, event_tx),

        _ => {}
    }

    Action::Continue
}
