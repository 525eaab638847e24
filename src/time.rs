// Wall clock used for report timestamps

pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn unix_millis(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_millis(&self) -> u64 {
        #[cfg(miri)]
        {
            0
        }
        #[cfg(not(miri))]
        {
            u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
        }
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_millis(&self) -> u64 {
        self.0
    }
}

pub fn now_unix_millis() -> u64 {
    SystemClock.unix_millis()
}
