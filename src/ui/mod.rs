//! UI rendering
//!
//! - `draw`: pure render functions, one per panel plus the frame composition
//! - `theme`: the style value passed into every render function

pub mod draw;
pub mod theme;
