//! Where "now" comes from.

use jiff::Zoned;

/// A source of the current instant, in a time zone.
pub trait Clock: Send + Sync {
    fn now(&self) -> Zoned;
}

/// The system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Zoned);

impl FixedClock {
    pub fn new(now: Zoned) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
