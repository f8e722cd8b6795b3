use std::fmt::Debug;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// The current reading of the high-resolution performance counter, in ticks.
    fn performance_counter(&self) -> i64;

    /// Ticks per second of the performance counter. Fixed at boot; never zero.
    fn performance_frequency(&self) -> i64;
}
