use std::sync::OnceLock;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::windows::Bindings;

/// The counter frequency is fixed at boot, so we query it once per process
/// and treat it as immutable calibration state from then on.
static PERFORMANCE_FREQUENCY: OnceLock<i64> = OnceLock::new();

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn performance_counter(&self) -> i64 {
        let mut ticks = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut ticks) }
            .expect("QueryPerformanceCounter cannot fail on any supported Windows version");

        ticks
    }

    fn performance_frequency(&self) -> i64 {
        *PERFORMANCE_FREQUENCY.get_or_init(|| {
            let mut frequency = 0_i64;

            // SAFETY: We are passing a valid pointer, no other safety requirements.
            unsafe { QueryPerformanceFrequency(&raw mut frequency) }
                .expect("QueryPerformanceFrequency cannot fail on any supported Windows version");

            frequency
        })
    }
}
