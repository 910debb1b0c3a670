//! Wall clock

use chrono::NaiveDateTime;

use crate::domain::ports::Clock;

/// Local time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
