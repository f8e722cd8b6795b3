use std::fmt::Debug;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Microseconds elapsed on the monotonic clock since an arbitrary epoch.
    fn monotonic_time_micros(&self) -> i64;
}
