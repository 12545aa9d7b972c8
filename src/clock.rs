use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

pub type ClockFn = dyn Fn() -> DateTime<Utc> + Send + Sync;

/// Source of the current time used to clamp `Last-Modified` values.
#[derive(Clone, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
    Custom(Arc<ClockFn>),
}

impl Clock {
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::Fixed(instant)
    }

    pub fn custom<F>(now: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(now))
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
            Clock::Custom(now) => now(),
        }
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clock::System => f.write_str("Clock::System"),
            Clock::Fixed(instant) => f.debug_tuple("Clock::Fixed").field(instant).finish(),
            Clock::Custom(_) => f.write_str("Clock::Custom(..)"),
        }
    }
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
