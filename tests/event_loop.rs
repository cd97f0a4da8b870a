//! End-to-end event loop tests
//!
//! Drives `App::run` headless: scripted events in, ratatui `TestBackend`
//! frames out, with a stub fetcher standing in for the network.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;

use restdeck::app::App;
use restdeck::endpoints::EndpointList;
use restdeck::events::ScriptedEventSource;
use restdeck::http::{Fetch, FetchError, FetchedBody};
use restdeck::state::FetchStatus;
use restdeck::ui::theme::Theme;

/// Stub fetcher returning a canned body or a canned failure
#[derive(Debug, Clone)]
enum StubFetcher {
    Body(String),
    Refused,
}

impl Fetch for StubFetcher {
    async fn get(&self, url: &str) -> Result<FetchedBody, FetchError> {
        match self {
            StubFetcher::Body(body) => Ok(FetchedBody {
                url: url.to_string(),
                body: body.clone(),
                elapsed: Duration::from_millis(1),
            }),
            StubFetcher::Refused => Err(FetchError::Transport("connection refused".into())),
        }
    }
}

fn endpoints() -> EndpointList {
    EndpointList::new([
        "http://example.com",
        "https://jsonplaceholder.typicode.com/todos/1",
        "https://jsonplaceholder.typicode.com/posts/1",
    ])
    .unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

async fn run_scripted(
    events: Vec<Event>,
    fetcher: StubFetcher,
) -> (App<ScriptedEventSource, StubFetcher>, Terminal<TestBackend>) {
    let mut app = App::new(
        endpoints(),
        ScriptedEventSource::with_events(events),
        fetcher,
        Theme::default(),
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    app.run(&mut terminal).await.unwrap();
    (app, terminal)
}

#[tokio::test]
async fn selection_clamps_at_the_end_of_the_list() {
    let events = vec![ctrl('n'), ctrl('n'), ctrl('n')];
    let (app, _) = run_scripted(events, StubFetcher::Refused).await;
    assert_eq!(app.state().endpoints.active_index(), 2);
}

#[tokio::test]
async fn fetch_replaces_viewport_content() {
    let events = vec![ctrl('r')];
    let (app, terminal) = run_scripted(events, StubFetcher::Body("hello".into())).await;

    assert_eq!(app.state().viewport.content(), "hello");
    assert_eq!(app.state().viewport.scroll(), 0);
    assert!(matches!(
        app.state().fetch_status,
        FetchStatus::Fetched { bytes: 5, .. }
    ));

    let rendered = format!("{:?}", terminal.backend().buffer());
    assert!(rendered.contains("hello"));
}

#[tokio::test]
async fn fetch_of_second_endpoint_follows_the_selection() {
    let events = vec![ctrl('n'), ctrl('r')];
    let (app, _) = run_scripted(events, StubFetcher::Body("todo".into())).await;

    match &app.state().fetch_status {
        FetchStatus::Fetched { url, .. } => {
            assert_eq!(url, "https://jsonplaceholder.typicode.com/todos/1");
        }
        other => panic!("expected a successful fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn editing_captures_keys_until_escape() {
    let events = vec![
        key(KeyCode::Enter),
        key(KeyCode::Char('h')),
        key(KeyCode::Char('i')),
        ctrl('n'), // must go to the editor as a no-op, not the selection
        key(KeyCode::Esc),
        ctrl('n'),
    ];
    let (app, _) = run_scripted(events, StubFetcher::Refused).await;

    assert_eq!(app.state().editor.content(), "hi");
    assert!(!app.state().is_editing());
    // Only the post-escape Ctrl+N moved the selection
    assert_eq!(app.state().endpoints.active_index(), 1);
}

#[tokio::test]
async fn failed_fetch_is_displayed_and_the_app_keeps_running() {
    let events = vec![ctrl('n'), ctrl('r'), ctrl('n')];
    let (app, terminal) = run_scripted(events, StubFetcher::Refused).await;

    assert!(matches!(
        app.state().fetch_status,
        FetchStatus::Failed { .. }
    ));
    assert!(app.state().viewport.content().contains("connection refused"));
    // The Ctrl+N after the failure still worked, and the failure itself
    // did not move the selection
    assert_eq!(app.state().endpoints.active_index(), 2);
    assert!(!app.should_quit());

    let rendered = format!("{:?}", terminal.backend().buffer());
    assert!(rendered.contains("connection refused"));
}

#[tokio::test]
async fn quit_key_stops_processing() {
    let events = vec![ctrl('c'), ctrl('n'), ctrl('n')];
    let (app, _) = run_scripted(events, StubFetcher::Refused).await;

    assert!(app.should_quit());
    assert_eq!(app.state().endpoints.active_index(), 0);
}

#[tokio::test]
async fn repeated_resize_renders_an_identical_frame() {
    let (_, once) = run_scripted(vec![Event::Resize(60, 20)], StubFetcher::Refused).await;
    let (_, twice) = run_scripted(
        vec![Event::Resize(60, 20), Event::Resize(60, 20)],
        StubFetcher::Refused,
    )
    .await;

    assert_eq!(once.backend().buffer(), twice.backend().buffer());
}

#[tokio::test]
async fn scrolling_a_long_response_moves_the_view() {
    let long_body: String = (0..100).map(|i| format!("row-{i}\n")).collect();
    let events = vec![
        ctrl('r'),
        key(KeyCode::PageDown),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('k')),
    ];
    let (app, _) = run_scripted(events, StubFetcher::Body(long_body)).await;

    let height = app.state().viewport.rendered_line_count();
    assert_eq!(app.state().viewport.scroll(), height + 1);
}
