use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    // None when the host cannot express a time at or after the epoch
    fn unix_seconds(&self) -> Option<u64>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> Option<u64> {
        SystemTime::now().duration_since(UNIX_EPOCH).ok().map(|d| d.as_secs())
    }
}

#[cfg(test)]
pub struct FixedClock(pub u64);

#[cfg(test)]
impl Clock for FixedClock {
    fn unix_seconds(&self) -> Option<u64> { Some(self.0) }
}

#[cfg(test)]
pub struct StoppedClock;

#[cfg(test)]
impl Clock for StoppedClock {
    fn unix_seconds(&self) -> Option<u64> { None }
}
