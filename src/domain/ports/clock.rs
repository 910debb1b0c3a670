//! Clock port - where archive timestamps come from

use chrono::NaiveDateTime;

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
