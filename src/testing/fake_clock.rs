use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::ports::Clock;

/// Clock that only moves when told to.
pub struct FakeClock {
    now: Cell<Instant>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now: Cell::new(Instant::now()) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
