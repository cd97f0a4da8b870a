//! Request editor module
//!
//! A focusable text field for composing a request body (primarily JSON). The
//! content is not sent anywhere yet; the field exists so a body is ready once
//! body-aware requests land. It encapsulates all editing state and operations:
//! - Cursor movement (left/right/up/down/home/end) on UTF-8 boundaries
//! - Multi-line editing with column-clamping vertical movement
//! - JSON prettify (Ctrl+F)
//!
//! The editor only receives key input while focused; whatever it does not
//! recognize is ignored as a no-op rather than failing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

/// Shown in place of content while the editor is empty
pub const PLACEHOLDER: &str = "Request Body";

/// A text editor for composing request bodies
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEditor {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,

    /// Whether the editor currently receives key input
    focused: bool,

    /// Display height in rows, driven by the viewport so the panels align
    height: usize,
}

impl Default for RequestEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestEditor {
    /// Create a new empty, unfocused editor
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            height: 0,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Content as display lines; a trailing newline yields an empty last line
    /// so the cursor has a row to sit on
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Cursor position as (line, column) in characters, for rendering
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let col = before[self.line_start(self.cursor)..].chars().count();
        (line, col)
    }

    /// Clear all content and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    /// Insert a string at the current cursor position
    pub fn insert_str(&mut self, s: &str) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert_str(cursor, s);
        self.cursor = cursor + s.len();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        // Find the previous character boundary
        let mut cursor = self.cursor;
        while cursor > 0 && !self.content.is_char_boundary(cursor - 1) {
            cursor -= 1;
        }
        if cursor > 0 {
            cursor -= 1;
        }

        self.content.remove(cursor);
        self.cursor = cursor;
        true
    }

    /// Delete the character after the cursor (delete key)
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.remove(cursor);
        true
    }

    /// Move cursor to the left by one character
    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut new_cursor = self.cursor - 1;
        while new_cursor > 0 && !self.content.is_char_boundary(new_cursor) {
            new_cursor -= 1;
        }

        self.cursor = new_cursor;
        true
    }

    /// Move cursor to the right by one character
    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let mut new_cursor = self.cursor + 1;
        while new_cursor < self.content.len() && !self.content.is_char_boundary(new_cursor) {
            new_cursor += 1;
        }

        self.cursor = new_cursor.min(self.content.len());
        true
    }

    /// Move cursor up one line, clamping the column to the shorter line
    pub fn move_cursor_up(&mut self) -> bool {
        let line_start = self.line_start(self.cursor);
        if line_start == 0 {
            return false;
        }

        let col = self.content[line_start..self.cursor].chars().count();
        let prev_start = self.line_start(line_start - 1);
        let prev_line = &self.content[prev_start..line_start - 1];
        self.cursor = prev_start + byte_offset_for_col(prev_line, col);
        true
    }

    /// Move cursor down one line, clamping the column to the shorter line
    pub fn move_cursor_down(&mut self) -> bool {
        let line_end = match self.content[self.cursor..].find('\n') {
            Some(i) => self.cursor + i,
            None => return false,
        };

        let line_start = self.line_start(self.cursor);
        let col = self.content[line_start..self.cursor].chars().count();
        let next_start = line_end + 1;
        let next_line = match self.content[next_start..].find('\n') {
            Some(i) => &self.content[next_start..next_start + i],
            None => &self.content[next_start..],
        };
        self.cursor = next_start + byte_offset_for_col(next_line, col);
        true
    }

    /// Move cursor to start of content
    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end of content
    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Format content as JSON (prettify)
    /// Returns Ok(()) if formatting succeeded, Err with the parse error if invalid JSON
    pub fn format_json(&mut self) -> Result<(), String> {
        match serde_json::from_str::<Value>(&self.content) {
            Ok(json) => {
                self.content =
                    serde_json::to_string_pretty(&json).unwrap_or_else(|_| self.content.clone());
                self.cursor = self.content.len();
                Ok(())
            }
            Err(e) => Err(format!("Invalid JSON: {e}")),
        }
    }

    /// Handle a key event - returns true if the event was handled
    ///
    /// Standard text-editing semantics; anything unrecognized is a no-op.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Prettify if the content parses; leave it alone otherwise
                let _ = self.format_json();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Byte offset of the start of the line containing `pos`
    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    /// Clamp cursor to valid UTF-8 character boundary
    fn clamp_cursor_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

/// Byte offset of character column `col` within `line`, clamped to line length
fn byte_offset_for_col(line: &str, col: usize) -> usize {
    line.chars().take(col).map(char::len_utf8).sum()
}
