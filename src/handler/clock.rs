//! Runtime clock abstraction
//!
//! The creation timestamp is attributed by the runtime, not the client.
//! Production uses `SystemClock`; tests pin time with `FixedClock`.

/// Source of the timestamp stamped onto new posts.
pub trait Clock {
    /// Current time in unix seconds.
    fn unix_timestamp(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}
