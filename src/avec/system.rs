//! Clock backed by the operating system.
//!
//! _Requires Cargo feature `std`._

use std::{
    thread,
    time::{Duration, Instant},
};

use super::Clock;

/// A [`Clock`] measuring time from its creation.
///
/// _Requires Cargo feature `std`._
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        // Truncation wraps the counter, which readers tolerate.
        self.origin.elapsed().as_millis() as u32
    }

    fn delay(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}
