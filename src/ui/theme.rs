//! Color scheme
//!
//! Styling is a plain value handed into the render functions; there is no
//! process-wide style state. Swap the colors here and every panel follows.

use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Outer frame and panel separators
    pub border: Color,

    /// The active entry in the endpoint menu
    pub active_item: Color,

    /// Inactive menu entries and regular text
    pub text: Color,

    /// Editor placeholder text
    pub placeholder: Color,

    /// Viewport content after a failed fetch
    pub error: Color,

    /// Key hints in the status bar
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::White,
            // Same green the menu highlight has always used
            active_item: Color::Green,
            text: Color::White,
            placeholder: Color::DarkGray,
            error: Color::Red,
            hint: Color::Yellow,
        }
    }
}
