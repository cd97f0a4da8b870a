//! Response viewport
//!
//! Scrollable pane that shows the body of the last fetch. Content is replaced
//! wholesale on every fetch, which resets the scroll to the top. Logical lines
//! are the scroll unit (no soft wrap), so the scroll clamp is exact:
//! `scroll <= content_lines - height`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Lines scrolled per mouse wheel tick
const WHEEL_SCROLL_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseViewport {
    width: u16,
    height: u16,
    content: String,
    scroll: usize,
}

impl Default for ResponseViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseViewport {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            content: String::new(),
            scroll: 0,
        }
    }

    /// Update display dimensions. Must be called before the first render and
    /// again on every terminal resize; a same-size resize changes nothing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Replace the displayed content and reset scroll to the top
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.scroll = 0;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The pane always paints `height` rows; the editor height is driven from
    /// this value so the two panels stay aligned.
    pub fn rendered_line_count(&self) -> usize {
        self.height as usize
    }

    /// The slice of logical lines currently in view
    pub fn visible_lines(&self) -> Vec<&str> {
        self.content
            .lines()
            .skip(self.scroll)
            .take(self.height as usize)
            .collect()
    }

    fn content_lines(&self) -> usize {
        self.content.lines().count()
    }

    fn max_scroll(&self) -> usize {
        self.content_lines().saturating_sub(self.height as usize)
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    /// Scroll-relevant key input; anything else is a no-op
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let half_page = (self.height as usize / 2).max(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.height as usize),
            KeyCode::PageDown => self.scroll_down(self.height as usize),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_up(half_page)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_down(half_page)
            }
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL_LINES),
            _ => {}
        }
    }
}
