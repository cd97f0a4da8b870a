//! Terminal event input boundary
//!
//! `EventSource` abstracts where input events come from so the event loop can
//! run headless in tests. Production reads from the terminal via crossterm;
//! tests use a pre-programmed queue and mark themselves exhausted when it
//! runs dry, which is what ends the loop in a scripted run.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub trait EventSource {
    /// Check whether an event is available without blocking
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read the next event; only call after `poll` returned true
    fn read(&mut self) -> io::Result<Event>;

    /// True once no more events will ever arrive. Terminal sources never
    /// exhaust; scripted sources exhaust when their queue is empty.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Production event source reading from the terminal
#[derive(Debug, Default)]
pub struct TerminalEventSource;

impl TerminalEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Scripted event source for headless tests
#[derive(Debug, Clone, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<Event>,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.events.push_back(Event::Key(key));
    }

    pub fn push_resize(&mut self, width: u16, height: u16) {
        self.events.push_back(Event::Resize(width, height));
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted event queue empty")
        })
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
