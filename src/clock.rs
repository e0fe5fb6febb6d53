//! Source of the current date.
//!
//! The commit row is labelled with the current year, so rendering reads the
//! clock through this trait rather than calling chrono directly.

use chrono::{Datelike, Utc};

pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().date_naive().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
