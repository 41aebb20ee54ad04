//! Wall-clock tick cadence

use std::thread;
use std::time::{Duration, Instant};

use game_core::Clock;

/// Blocks the loop thread until each tick's time budget has elapsed
pub struct TickClock {
    next: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            next: Instant::now(),
        }
    }
}

impl Clock for TickClock {
    fn wait_for_next_tick(&mut self, hz: u32) {
        self.next += Duration::from_secs(1) / hz;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            // Fell behind a full tick (stall, suspend): re-anchor rather
            // than sprinting through the backlog.
            self.next = now;
        }
    }
}
