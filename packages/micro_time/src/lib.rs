//! Microsecond-resolution signed durations and a monotonic stopwatch.
//!
//! This crate offers a [`Duration`] value type that stores a signed span of time
//! as a 64-bit count of microseconds, together with a [`Clock`] that measures
//! elapsed time against the operating system's monotonic clock. Durations carry
//! the full arithmetic and comparison operator set, including scalar scaling
//! and duration-to-duration ratios.
//!
//! # Key Features
//!
//! - **Signed spans**: durations may be negative and participate normally in
//!   arithmetic and ordering
//! - **Exact integer paths**: millisecond/microsecond conversions and integer
//!   scaling are exact integer arithmetic
//! - **Monotonic measurement**: [`Clock`] reads a monotonic time source, so
//!   wall clock adjustments (NTP steps, timezone changes) never distort results
//! - **Cross-platform**: native time sources on Unix and Windows, with a
//!   standard library fallback elsewhere
//!
//! # Trade-offs
//!
//! - Seconds conversions and float scalar scaling go through a single-precision
//!   seconds representation and may differ from the exact integer path by a few
//!   microseconds
//! - Arithmetic is unchecked; values are assumed to stay well inside the signed
//!   64-bit microsecond range (roughly ±292,000 years)
//!
//! # Basic Usage
//!
//! ```rust
//! use micro_time::{Clock, Duration};
//!
//! let mut clock = Clock::new();
//!
//! // Do some work...
//! std::thread::sleep(std::time::Duration::from_millis(10));
//!
//! let elapsed = clock.elapsed();
//! assert!(elapsed >= Duration::from_millis(10));
//!
//! // Re-baseline the stopwatch, keeping the elapsed time.
//! let lap = clock.reset();
//! assert!(lap >= elapsed);
//! ```
//!
//! # Duration arithmetic
//!
//! ```rust
//! use micro_time::Duration;
//!
//! let total = Duration::from_secs_f32(1.45) + Duration::from_millis(456);
//! assert_eq!(total.as_micros(), 1_906_000);
//!
//! // Integer scaling is exact; float scaling goes through seconds.
//! assert_eq!((Duration::from_millis(10) * 3_i64).as_micros(), 30_000);
//!
//! // Ratios between durations are single-precision.
//! let ratio = Duration::from_millis(500) / Duration::from_secs_f32(1.0);
//! assert!((ratio - 0.5).abs() < 1e-6);
//! ```

mod pal;

mod clock;
mod duration;

pub use clock::*;
pub use duration::*;
