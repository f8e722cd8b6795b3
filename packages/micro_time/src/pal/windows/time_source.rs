use crate::Duration;
use crate::pal::TimeSource;
use crate::pal::windows::{Bindings, BindingsFacade};

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
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "the i128 intermediate keeps tick scaling exact; results stay far inside the i64 microsecond range"
    )]
    fn now(&self) -> Duration {
        let ticks = self.bindings.performance_counter();
        let frequency = self.bindings.performance_frequency();

        // Scale counter ticks to microseconds in one exact step. The i128
        // intermediate cannot overflow for any real counter value.
        Duration::from_micros((i128::from(ticks) * 1_000_000 / i128::from(frequency)) as i64)
    }
}
