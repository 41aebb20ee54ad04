//! Keyboard input handling
//!
//! Drains crossterm's event queue without blocking and maps key presses
//! onto the core's input events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputEvent, InputSource, Key};

/// Non-blocking event drain over the terminal's input
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TermInput {
    fn poll(&mut self) -> Option<InputEvent> {
        while event::poll(Duration::ZERO).unwrap_or(false) {
            let Ok(event) = event::read() else {
                return None;
            };
            if let Some(mapped) = map_event(&event) {
                return Some(mapped);
            }
            // Releases, repeats-on-release, resizes: skip and keep draining.
        }
        None
    }
}

fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Up => Some(InputEvent::KeyDown(Key::Up)),
        KeyCode::Down => Some(InputEvent::KeyDown(Key::Down)),
        KeyCode::Char(c) => Some(InputEvent::KeyDown(Key::Char(c.to_ascii_lowercase()))),
        _ => None,
    }
}
