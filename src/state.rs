//! Application state
//!
//! One value composing the three panels plus the readiness flag and the
//! record of the last fetch. Focus is not stored separately: the app is in
//! editing mode exactly when the editor is focused.

use std::time::Duration;

use crate::editor::RequestEditor;
use crate::endpoints::EndpointList;
use crate::http::FetchErrorKind;
use crate::viewport::ResponseViewport;

/// Record of the last fetch, for the status line and error styling
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Fetched {
        url: String,
        bytes: usize,
        elapsed: Duration,
    },
    Failed {
        kind: FetchErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub endpoints: EndpointList,
    pub viewport: ResponseViewport,
    pub editor: RequestEditor,

    /// False until the first resize event establishes terminal dimensions
    pub ready: bool,

    pub fetch_status: FetchStatus,
}

impl AppState {
    pub fn new(endpoints: EndpointList) -> Self {
        Self {
            endpoints,
            viewport: ResponseViewport::new(),
            editor: RequestEditor::new(),
            ready: false,
            fetch_status: FetchStatus::Idle,
        }
    }

    /// Whether key input currently goes to the editor rather than navigation
    pub fn is_editing(&self) -> bool {
        self.editor.is_focused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::EndpointList;

    #[test]
    fn test_initial_state() {
        let state = AppState::new(EndpointList::new(["http://example.com"]).unwrap());
        assert!(!state.ready);
        assert!(!state.is_editing());
        assert_eq!(state.fetch_status, FetchStatus::Idle);
        assert_eq!(state.viewport.content(), "");
        assert_eq!(state.editor.content(), "");
    }
}
