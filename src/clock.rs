use std::time::SystemTime;

/// Source of the current wall-clock time.
///
/// The encoder reads the clock exactly once per cookie. Swap in a
/// [`FixedClock`] to make expiry dates deterministic.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// The host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at a single instant.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flash_core::{Clock, FixedClock};
///
/// let at = UNIX_EPOCH + Duration::from_secs(784_111_777);
/// let clock = FixedClock::new(at);
/// assert_eq!(clock.now(), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: SystemTime,
}

impl FixedClock {
    /// Creates a clock that always returns `at`.
    pub fn new(at: SystemTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.at
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> SystemTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = FixedClock::new(UNIX_EPOCH + Duration::from_secs(42));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now() > UNIX_EPOCH);
    }

    #[test]
    fn references_are_clocks() {
        fn read<C: Clock>(c: C) -> SystemTime {
            c.now()
        }
        let clock = FixedClock::new(UNIX_EPOCH);
        assert_eq!(read(&clock), UNIX_EPOCH);
    }
}
