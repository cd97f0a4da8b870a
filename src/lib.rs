//! restdeck - a terminal UI for poking a fixed set of HTTP endpoints
//!
//! Three panels inside one event loop: a selectable endpoint menu, an
//! editable request-body field, and a scrollable response viewer. The
//! library exists so the loop can be driven headless in integration tests;
//! the binary in `main.rs` wires up the terminal-backed implementations.

pub mod actions;
pub mod app;
pub mod editor;
pub mod endpoints;
pub mod events;
pub mod http;
pub mod logging;
pub mod state;
pub mod ui;
pub mod viewport;
