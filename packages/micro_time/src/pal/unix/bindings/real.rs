use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::pal::unix::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "monotonic readings stay far inside the i64 microsecond range for any realistic uptime"
    )]
    fn monotonic_time_micros(&self) -> i64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        (i128::from(ts.tv_sec) * 1_000_000 + i128::from(ts.tv_nsec) / 1_000) as i64
    }
}
