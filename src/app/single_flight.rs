use std::cell::Cell;

use crate::domain::AppError;

/// Rejects a second start of the same request kind while one is in flight.
#[derive(Debug)]
pub struct SingleFlight {
    label: &'static str,
    in_flight: Cell<bool>,
}

/// Held for the duration of a request; releases the flag on drop.
#[derive(Debug)]
pub struct FlightPermit<'a> {
    in_flight: &'a Cell<bool>,
}

impl SingleFlight {
    pub fn new(label: &'static str) -> Self {
        Self { label, in_flight: Cell::new(false) }
    }

    pub fn try_begin(&self) -> Result<FlightPermit<'_>, AppError> {
        if self.in_flight.replace(true) {
            return Err(AppError::AlreadyInFlight(self.label));
        }
        Ok(FlightPermit { in_flight: &self.in_flight })
    }
}

impl Drop for FlightPermit<'_> {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}
