//! Application actions
//!
//! All state mutations are expressed as `AppAction` values applied through
//! `apply_action`. This separates input handling from state transitions and
//! keeps the transition logic testable without a terminal. The one side
//! effect (the fetch) happens outside; its outcome re-enters as
//! `ApplyFetchOutcome` like any other action.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::http::FetchOutcome;
use crate::state::{AppState, FetchStatus};
use crate::ui::draw;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Terminal dimensions changed (or were first established)
    TerminalResized(u16, u16),

    // Endpoint selection
    SelectNext,
    SelectPrevious,

    // Focus transitions
    FocusEditor,
    BlurEditor,

    // Routed input
    EditorKey(KeyEvent),
    ViewportKey(KeyEvent),
    ViewportMouse(MouseEvent),

    /// Result of a completed fetch, success or failure
    ApplyFetchOutcome(FetchOutcome),
}

/// Apply an action to the application state
///
/// Pure state transformation: no I/O, no terminal access. Panel geometry on
/// resize comes from the same layout function the renderer uses, so the
/// viewport is always sized to what will actually be painted.
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::TerminalResized(width, height) => {
            let panels = draw::panel_layout(Rect::new(0, 0, width, height));
            state
                .viewport
                .resize(panels.viewport.width, panels.viewport.height);
            state.editor.set_height(panels.viewport.height as usize);
            state.ready = true;
        }

        AppAction::SelectNext => state.endpoints.select_next(),
        AppAction::SelectPrevious => state.endpoints.select_previous(),

        AppAction::FocusEditor => state.editor.focus(),
        AppAction::BlurEditor => state.editor.blur(),

        AppAction::EditorKey(key) => {
            state.editor.handle_key_event(key);
        }
        AppAction::ViewportKey(key) => state.viewport.handle_key_event(key),
        AppAction::ViewportMouse(mouse) => state.viewport.handle_mouse_event(mouse),

        AppAction::ApplyFetchOutcome(outcome) => match outcome {
            FetchOutcome::Success(fetched) => {
                let bytes = fetched.body.len();
                state.viewport.set_content(fetched.body);
                state.fetch_status = FetchStatus::Fetched {
                    url: fetched.url,
                    bytes,
                    elapsed: fetched.elapsed,
                };
            }
            FetchOutcome::Failure { kind, message } => {
                // Selection and focus stay untouched; only the viewport and
                // status record change
                state.viewport.set_content(message.clone());
                state.fetch_status = FetchStatus::Failed { kind, message };
            }
        },
    }
}
