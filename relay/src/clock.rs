use chrono::NaiveTime;

/// Source of the wall-clock time stamped into echo and fallback replies.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// `HH:MM:SS`, sub-second part dropped.
pub fn timestamp(clock: &dyn Clock) -> String {
    clock.now().format("%H:%M:%S").to_string()
}
