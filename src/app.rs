//! Application controller
//!
//! Owns the state, the event source and the fetcher, and runs the one loop:
//! draw a frame, wait for an event, translate it into actions. Input routing
//! depends on focus: while the editor is focused everything except Esc goes
//! to it; otherwise keys drive selection, fetch and viewport scrolling.
//!
//! The fetch is awaited inline, so the loop blocks for its duration. At most
//! one fetch can ever be in flight because nothing else runs while it does.

use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use crate::actions::{apply_action, AppAction};
use crate::endpoints::EndpointList;
use crate::events::EventSource;
use crate::http::{Fetch, FetchOutcome};
use crate::state::AppState;
use crate::ui::draw;
use crate::ui::theme::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub struct App<S, F> {
    state: AppState,
    events: S,
    fetcher: F,
    theme: Theme,
    should_quit: bool,
}

impl<S: EventSource, F: Fetch> App<S, F> {
    pub fn new(endpoints: EndpointList, events: S, fetcher: F, theme: Theme) -> Self {
        Self {
            state: AppState::new(endpoints),
            events,
            fetcher,
            theme,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main UI loop
    ///
    /// A resize is synthesized from the current terminal size before the
    /// first frame so the sizing path is the same one real resize events
    /// take. The loop ends on quit, or when a scripted event source runs dry.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        apply_action(
            AppAction::TerminalResized(size.width, size.height),
            &mut self.state,
        );

        while !self.should_quit {
            // Keep the editor as tall as the viewport paints
            let rows = self.state.viewport.rendered_line_count();
            self.state.editor.set_height(rows);

            terminal.draw(|frame| draw::render(frame, &self.state, &self.theme))?;

            if self.events.poll(POLL_INTERVAL)? {
                let event = self.events.read()?;
                self.handle_event(event).await;
            } else if self.events.is_exhausted() {
                break;
            }
        }

        Ok(())
    }

    pub(crate) async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => {
                apply_action(AppAction::TerminalResized(width, height), &mut self.state);
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key).await;
            }
            Event::Mouse(mouse) if self.state.ready && !self.state.is_editing() => {
                apply_action(AppAction::ViewportMouse(mouse), &mut self.state);
            }
            _ => {}
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        // Quit works in every state, including before the first resize
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Everything else waits for terminal dimensions
        if !self.state.ready {
            return;
        }

        if self.state.is_editing() {
            match key.code {
                KeyCode::Esc => apply_action(AppAction::BlurEditor, &mut self.state),
                _ => apply_action(AppAction::EditorKey(key), &mut self.state),
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => apply_action(AppAction::SelectNext, &mut self.state),
            KeyCode::Char('p') if ctrl => {
                apply_action(AppAction::SelectPrevious, &mut self.state)
            }
            KeyCode::Char('r') if ctrl => self.fetch_active().await,
            KeyCode::Enter => apply_action(AppAction::FocusEditor, &mut self.state),
            _ => apply_action(AppAction::ViewportKey(key), &mut self.state),
        }
    }

    /// GET the active endpoint and feed the outcome back in as an action
    async fn fetch_active(&mut self) {
        let url = self.state.endpoints.current().as_str().to_string();
        tracing::info!(%url, "fetching endpoint");

        let outcome = FetchOutcome::from(self.fetcher.get(&url).await);
        match &outcome {
            FetchOutcome::Success(fetched) => {
                tracing::info!(%url, bytes = fetched.body.len(), "fetch complete");
            }
            FetchOutcome::Failure { message, .. } => {
                tracing::warn!(%url, %message, "fetch failed");
            }
        }

        apply_action(AppAction::ApplyFetchOutcome(outcome), &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ScriptedEventSource;
    use crate::http::{FetchError, FetchedBody};

    /// Fetcher that never runs; for tests that exercise only input routing
    struct NoFetch;

    impl Fetch for NoFetch {
        async fn get(&self, _url: &str) -> Result<FetchedBody, FetchError> {
            panic!("fetch must not be triggered in this test");
        }
    }

    fn app() -> App<ScriptedEventSource, NoFetch> {
        App::new(
            EndpointList::new(["http://example.com/a", "http://example.com/b"]).unwrap(),
            ScriptedEventSource::new(),
            NoFetch,
            Theme::default(),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[tokio::test]
    async fn test_keys_ignored_before_ready() {
        let mut app = app();
        app.handle_event(ctrl('n')).await;
        app.handle_event(key(KeyCode::Enter)).await;
        assert_eq!(app.state().endpoints.active_index(), 0);
        assert!(!app.state().is_editing());
    }

    #[tokio::test]
    async fn test_quit_works_before_ready() {
        let mut app = app();
        assert!(!app.state().ready);
        app.handle_event(ctrl('c')).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_quit_works_while_editing() {
        let mut app = app();
        app.handle_event(Event::Resize(80, 24)).await;
        app.handle_event(key(KeyCode::Enter)).await;
        assert!(app.state().is_editing());
        app.handle_event(ctrl('c')).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_enter_and_escape_toggle_focus() {
        let mut app = app();
        app.handle_event(Event::Resize(80, 24)).await;

        app.handle_event(key(KeyCode::Enter)).await;
        assert!(app.state().is_editing());

        // Keys while editing go to the editor, never to the selection
        app.handle_event(ctrl('n')).await;
        app.handle_event(key(KeyCode::Char('x'))).await;
        assert_eq!(app.state().endpoints.active_index(), 0);
        assert_eq!(app.state().editor.content(), "x");

        app.handle_event(key(KeyCode::Esc)).await;
        assert!(!app.state().is_editing());

        // Navigation works again after blur
        app.handle_event(ctrl('n')).await;
        assert_eq!(app.state().endpoints.active_index(), 1);
    }

    #[tokio::test]
    async fn test_mouse_ignored_while_editing() {
        use crossterm::event::{MouseEvent, MouseEventKind};

        let mut app = app();
        app.handle_event(Event::Resize(80, 24)).await;
        app.state.viewport.set_content(
            (0..100).map(|i| format!("{i}\n")).collect::<String>(),
        );
        app.handle_event(key(KeyCode::Enter)).await;

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_event(wheel.clone()).await;
        assert_eq!(app.state().viewport.scroll(), 0);

        app.handle_event(key(KeyCode::Esc)).await;
        app.handle_event(wheel).await;
        assert_eq!(app.state().viewport.scroll(), 3);
    }
}
