use crate::Duration;
use crate::pal::{Platform, PlatformFacade, TimeSource, TimeSourceFacade};

/// A stopwatch measuring elapsed time against a monotonic clock.
///
/// Construction captures the current monotonic instant as the baseline;
/// [`elapsed()`][Self::elapsed] measures against that baseline without
/// touching it, and [`reset()`][Self::reset] moves the baseline forward while
/// returning the time it accumulated. The clock is always live - there is no
/// stopped state.
///
/// The underlying time source is monotonic, so results are unaffected by wall
/// clock adjustments such as NTP steps or timezone changes.
///
/// A `Clock` is owned by a single logical owner. Reading via `elapsed()` takes
/// a shared reference, while `reset()` requires exclusive access, so
/// conflicting concurrent resets are ruled out at compile time.
///
/// # Examples
///
/// ```rust
/// use micro_time::{Clock, Duration};
///
/// let mut clock = Clock::new();
///
/// // Do some work...
/// std::thread::sleep(std::time::Duration::from_millis(5));
///
/// let first_lap = clock.reset();
/// assert!(first_lap >= Duration::from_millis(5));
///
/// // The stopwatch now measures from the reset point.
/// assert!(clock.elapsed() < first_lap + Duration::from_secs_f32(1.0));
/// ```
#[derive(Debug)]
pub struct Clock {
    time_source: TimeSourceFacade,
    baseline: Duration,
}

impl Clock {
    /// Creates a stopwatch whose baseline is the current monotonic instant.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(&PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn from_pal(pal: &PlatformFacade) -> Self {
        let time_source = pal.new_time_source();
        let baseline = time_source.now();

        Self {
            time_source,
            baseline,
        }
    }

    /// Returns the time elapsed since construction or the last reset.
    ///
    /// Does not alter the baseline; successive calls return non-decreasing
    /// values as long as no reset happens in between.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.time_source.now() - self.baseline
    }

    /// Moves the baseline to the current instant and returns the time elapsed
    /// since the previous baseline.
    pub fn reset(&mut self) -> Duration {
        let now = self.time_source.now();
        let elapsed = now - self.baseline;
        self.baseline = now;
        elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
