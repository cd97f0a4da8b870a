//! Frame rendering
//!
//! Pure functions from state to widgets. The whole frame sits inside one
//! rounded border; inside it the endpoint menu, the request editor and the
//! response viewport are joined left to right, with the viewport carrying a
//! left border as the visual separator, and a one-line status bar at the
//! bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::editor::{RequestEditor, PLACEHOLDER};
use crate::endpoints::EndpointList;
use crate::state::{AppState, FetchStatus};
use crate::ui::theme::Theme;
use crate::viewport::ResponseViewport;

/// Panel geometry for a given terminal size
///
/// `viewport` is the content rect (the pane minus its left separator); it is
/// what the viewport component is resized against, so the scroll clamp always
/// matches what gets painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panels {
    pub menu: Rect,
    pub editor: Rect,
    pub viewport_pane: Rect,
    pub viewport: Rect,
    pub status: Rect,
}

/// Compute panel rects for the given frame area
pub fn panel_layout(area: Rect) -> Panels {
    // One cell all around for the outer border
    let inner = area.inner(Margin::new(1, 1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);

    let viewport_pane = columns[2];
    let viewport = Rect {
        x: viewport_pane.x.saturating_add(1),
        y: viewport_pane.y,
        width: viewport_pane.width.saturating_sub(1),
        height: viewport_pane.height,
    };

    Panels {
        menu: columns[0],
        editor: columns[1],
        viewport_pane,
        viewport,
        status: rows[1],
    }
}

/// Render one full frame
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.ready {
        let waiting = Paragraph::new("waiting for terminal size...")
            .style(Style::default().fg(theme.placeholder));
        frame.render_widget(waiting, frame.area());
        return;
    }

    let area = frame.area();
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(outer, area);

    let panels = panel_layout(area);
    render_menu(frame, panels.menu, &state.endpoints, theme);
    render_editor(frame, panels.editor, &state.editor, theme);
    render_viewport(
        frame,
        panels.viewport_pane,
        panels.viewport,
        &state.viewport,
        &state.fetch_status,
        theme,
    );
    render_status_bar(frame, panels.status, state, theme);
}

/// Styled vertical menu of endpoints, highlighting the active one
fn render_menu(frame: &mut Frame, area: Rect, endpoints: &EndpointList, theme: &Theme) {
    let items: Vec<ListItem> = endpoints
        .iter()
        .map(|endpoint| ListItem::new(Line::from(Span::raw(endpoint.as_str()))))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.active_item)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(endpoints.active_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_editor(frame: &mut Frame, area: Rect, editor: &RequestEditor, theme: &Theme) {
    let (line, col) = editor.cursor_line_col();

    // Scroll the view so the cursor line is always on screen while editing
    let height = area.height as usize;
    let view_scroll = if editor.is_focused() && height > 0 {
        line.saturating_sub(height - 1)
    } else {
        0
    };

    if editor.content().is_empty() {
        let placeholder =
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.placeholder));
        frame.render_widget(placeholder, area);
    } else {
        let lines: Vec<Line> = editor.lines().map(Line::from).collect();
        let text = Paragraph::new(lines)
            .style(Style::default().fg(theme.text))
            .scroll((scroll_offset(view_scroll), 0));
        frame.render_widget(text, area);
    }

    if editor.is_focused() {
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        let y = area.y + ((line - view_scroll) as u16).min(area.height.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn render_viewport(
    frame: &mut Frame,
    pane: Rect,
    content_area: Rect,
    viewport: &ResponseViewport,
    fetch_status: &FetchStatus,
    theme: &Theme,
) {
    let separator = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(separator, pane);

    let body = match fetch_status {
        // Failure messages must stay readable in a narrow pane, so wrap
        // them; response bodies keep logical lines as the scroll unit
        FetchStatus::Failed { .. } => Paragraph::new(viewport.content())
            .style(Style::default().fg(theme.error))
            .wrap(Wrap { trim: false })
            .scroll((scroll_offset(viewport.scroll()), 0)),
        _ => Paragraph::new(viewport.content())
            .style(Style::default().fg(theme.text))
            .scroll((scroll_offset(viewport.scroll()), 0)),
    };
    frame.render_widget(body, content_area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.is_editing() {
        "Esc:Done Ctrl+F:Format Ctrl+C:Quit"
    } else {
        "Ctrl+N/Ctrl+P:Select Ctrl+R:Fetch Enter:Edit j/k:Scroll Ctrl+C:Quit"
    };

    // Status leads so it survives narrow terminals; hints clip first
    let text = match &state.fetch_status {
        FetchStatus::Idle => hints.to_string(),
        FetchStatus::Fetched {
            url,
            bytes,
            elapsed,
        } => format!("{} B in {} ms from {} | {}", bytes, elapsed.as_millis(), url, hints),
        FetchStatus::Failed { message, .. } => format!("{message} | {hints}"),
    };

    let bar = Paragraph::new(text).style(Style::default().fg(theme.hint));
    frame.render_widget(bar, area);
}

/// Scroll state is a `usize`; ratatui scrolls by `u16`. Saturate instead of
/// wrapping so enormous bodies pin the view at the end rather than jumping
/// backwards.
fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}
