//! Terminal Pong client
//!
//! Wires the simulation core to a crossterm backend: the terminal is the
//! display surface, its key events are the input source, and a wall-clock
//! timer enforces the tick cadence.
//!
//! Controls: arrow keys drive the right paddle, `q`/`a` the left one.
//! Esc or Ctrl-C quits.

mod clock;
mod input;
mod surface;

use anyhow::Context;
use game_core::{GameLoop, Params};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // Display setup is the one operation that can fail; abort with a
    // diagnostic before the loop starts.
    let mut surface =
        surface::TermSurface::new().context("failed to set up the terminal display")?;
    let mut input = input::TermInput::new();
    let mut clock = clock::TickClock::new();

    log::info!("running at {} ticks/s; Esc or Ctrl-C quits", Params::TICK_HZ);

    let mut game = GameLoop::new();
    game.run(&mut surface, &mut input, &mut clock);

    let (left, right) = game.score().snapshot();
    log::info!("quit received; final score left {left} - right {right}");
    Ok(())
}
