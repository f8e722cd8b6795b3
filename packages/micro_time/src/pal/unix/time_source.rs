use crate::Duration;
use crate::pal::TimeSource;
use crate::pal::unix::{Bindings, BindingsFacade};

#[derive(Clone, Debug)]
pub(crate) struct TimeSourceImpl {
    bindings: BindingsFacade,
}

impl TimeSourceImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl TimeSource for TimeSourceImpl {
    fn now(&self) -> Duration {
        Duration::from_micros(self.bindings.monotonic_time_micros())
    }
}
