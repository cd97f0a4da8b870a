use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use restdeck::app::App;
use restdeck::endpoints::EndpointList;
use restdeck::events::TerminalEventSource;
use restdeck::http::HttpFetcher;
use restdeck::logging;
use restdeck::ui::theme::Theme;

/// The catalog is fixed at startup; edit here, recompile
const ENDPOINTS: &[&str] = &[
    "http://example.com",
    "https://jsonplaceholder.typicode.com/todos/1",
    "https://jsonplaceholder.typicode.com/posts/1",
];

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let endpoints = EndpointList::new(ENDPOINTS.iter().copied())?;
    let mut app = App::new(
        endpoints,
        TerminalEventSource::new(),
        HttpFetcher::new(),
        Theme::default(),
    );

    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = app.run(&mut terminal).await;

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
