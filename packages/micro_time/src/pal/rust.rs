use std::sync::OnceLock;
use std::time::Instant;

use crate::Duration;
use crate::pal::{Platform, TimeSource};

/// The platform epoch for targets served through the standard library: the
/// first reading taken in this process. `std::time::Instant` already wraps
/// the native monotonic primitive everywhere Rust runs, so no direct FFI is
/// needed here.
static ORIGIN: OnceLock<Instant> = OnceLock::new();

pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = RustPlatform;

pub(crate) type BuildTargetPlatform = RustPlatform;

#[derive(Debug)]
pub(crate) struct RustPlatform;

impl Platform for RustPlatform {
    type TimeSource = RustTimeSource;

    fn new_time_source(&self) -> Self::TimeSource {
        RustTimeSource
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RustTimeSource;

impl TimeSource for RustTimeSource {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "elapsed process time in microseconds fits in i64 for any realistic process lifetime"
    )]
    fn now(&self) -> Duration {
        let origin = ORIGIN.get_or_init(Instant::now);

        Duration::from_micros(origin.elapsed().as_micros() as i64)
    }
}
