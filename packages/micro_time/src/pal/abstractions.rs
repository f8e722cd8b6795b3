use std::fmt::Debug;

use crate::Duration;

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type TimeSource: TimeSource;

    fn new_time_source(&self) -> Self::TimeSource;
}

/// A monotonic time source.
///
/// Readings are the [`Duration`] elapsed since an arbitrary, platform-defined
/// epoch; only the difference between two readings is meaningful. Readings
/// never decrease under normal operation.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send {
    fn now(&self) -> Duration;
}
