//! Contracts for the external collaborators: the drawing surface, the
//! input-event source, and the frame clock.
//!
//! The simulation core owns no window or terminal; a client supplies
//! implementations of these traits and the loop drives them once per tick.

use glam::Vec2;

use crate::geom::Aabb;

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Char(char),
}

/// One event drained from the host window or terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The host asked us to shut down (window close, Esc, Ctrl-C, ...)
    Quit,
    KeyDown(Key),
}

/// Where each frame is drawn
///
/// Methods are infallible by contract; backends deal with their own I/O
/// faults. Nothing is visible until `present` is called.
pub trait DisplaySurface {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Aabb, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);
    fn present(&mut self);
}

/// Source of input events, drained to exhaustion once per tick
pub trait InputSource {
    /// Next pending event, or `None` when the queue is empty. Must not
    /// block.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Fixed-cadence frame clock
pub trait Clock {
    /// Block the calling thread until the next tick boundary at `hz`
    /// ticks per second.
    fn wait_for_next_tick(&mut self, hz: u32);
}
