/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Simulated time source.
//!
//! One `Clock` is created per simulation run and owned by the tick loop; it is
//! never shared between runs.

/// Monotonic integer clock, starting at tick 0.
#[derive(Debug, Default)]
pub struct Clock {
    now: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick.
    pub fn time(&self) -> u64 {
        self.now
    }

    /// Move forward by exactly one tick and return the new time.
    pub fn advance(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Clock::new().time(), 0);
    }

    #[test]
    fn advance_moves_one_tick_and_returns_new_time() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.advance(), 2);
        assert_eq!(clock.time(), 2);
    }

    #[test]
    fn clocks_are_independent() {
        let mut a = Clock::new();
        let b = Clock::new();
        a.advance();
        assert_eq!(a.time(), 1);
        assert_eq!(b.time(), 0);
    }
}
