use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use crate::Duration;
#[cfg(test)]
use crate::pal::MockTimeSource;
#[cfg(not(any(unix, windows)))]
use crate::pal::RustTimeSource;
use crate::pal::TimeSource;
#[cfg(any(unix, windows))]
use crate::pal::TimeSourceImpl;

#[derive(Clone)]
pub(crate) enum TimeSourceFacade {
    #[cfg(any(unix, windows))]
    Native(TimeSourceImpl),

    #[cfg(not(any(unix, windows)))]
    Passthrough(RustTimeSource),

    #[cfg(test)]
    Mock(Arc<MockTimeSource>),
}

#[cfg(any(unix, windows))]
impl From<TimeSourceImpl> for TimeSourceFacade {
    fn from(ts: TimeSourceImpl) -> Self {
        Self::Native(ts)
    }
}

#[cfg(not(any(unix, windows)))]
impl From<RustTimeSource> for TimeSourceFacade {
    fn from(ts: RustTimeSource) -> Self {
        Self::Passthrough(ts)
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(ts: MockTimeSource) -> Self {
        Self::Mock(Arc::new(ts))
    }
}

impl TimeSource for TimeSourceFacade {
    fn now(&self) -> Duration {
        match self {
            #[cfg(any(unix, windows))]
            Self::Native(ts) => ts.now(),
            #[cfg(not(any(unix, windows)))]
            Self::Passthrough(ts) => ts.now(),
            #[cfg(test)]
            Self::Mock(ts) => ts.now(),
        }
    }
}

impl Debug for TimeSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(any(unix, windows))]
            Self::Native(ts) => ts.fmt(f),
            #[cfg(not(any(unix, windows)))]
            Self::Passthrough(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}
