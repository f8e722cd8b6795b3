#![expect(
    clippy::arithmetic_side_effects,
    reason = "duration math is documented as unchecked; values are assumed to stay well inside the i64 microsecond range"
)]

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

const MICROS_PER_MILLI: i64 = 1_000;

/// An immutable, signed span of time with microsecond resolution.
///
/// The value is stored as a signed 64-bit count of microseconds, regardless of
/// the unit used to construct or read it. Negative durations are valid and
/// participate normally in arithmetic and ordering.
///
/// Two families of scalar scaling exist and deliberately do not agree to the
/// microsecond:
///
/// - the **integer path** (`* i64`, `/ i64`) operates directly on the
///   microsecond count and is exact (division truncates toward zero);
/// - the **float path** (`* f32`, `/ f32`, and the `Duration / Duration`
///   ratio) goes through the single-precision seconds representation and may
///   carry a few microseconds of rounding error.
///
/// # Examples
///
/// ```rust
/// use micro_time::Duration;
///
/// let a = Duration::from_millis(456);
/// let b = Duration::from_secs_f32(1.45);
///
/// assert_eq!((a + b).as_micros(), 1_906_000);
/// assert_eq!((-a).as_millis(), -456);
/// assert!(b > a);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
    micros: i64,
}

impl Duration {
    /// A duration of zero microseconds.
    pub const ZERO: Self = Self { micros: 0 };

    /// Creates a duration from a number of seconds, truncating toward zero to
    /// whole microseconds.
    ///
    /// ```rust
    /// use micro_time::Duration;
    ///
    /// assert_eq!(Duration::from_secs_f32(1.45).as_micros(), 1_450_000);
    /// assert_eq!(Duration::from_secs_f32(-0.5).as_millis(), -500);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the documented conversion"
    )]
    pub fn from_secs_f32(secs: f32) -> Self {
        Self {
            micros: (secs * 1_000_000.0) as i64,
        }
    }

    /// Creates a duration from a number of milliseconds. Exact.
    #[must_use]
    pub fn from_millis(millis: i32) -> Self {
        Self {
            micros: i64::from(millis) * MICROS_PER_MILLI,
        }
    }

    /// Creates a duration from a number of microseconds. Exact.
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    /// Returns the duration as a number of seconds, with single-precision
    /// rounding.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "the seconds representation is documented as single-precision"
    )]
    pub fn as_secs_f32(self) -> f32 {
        self.micros as f32 / 1_000_000.0
    }

    /// Returns the duration as a number of whole milliseconds, truncated
    /// toward zero.
    ///
    /// Durations whose millisecond count does not fit in an `i32` wrap; this
    /// narrowing is accepted, documented behavior, not an error.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to i32 milliseconds is the documented limitation of this accessor"
    )]
    pub const fn as_millis(self) -> i32 {
        (self.micros / MICROS_PER_MILLI) as i32
    }

    /// Returns the duration as a number of microseconds. Exact.
    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.micros
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_micros(-self.micros)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_micros(self.micros + rhs.micros)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_micros(self.micros - rhs.micros)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Float scaling path: converts through the seconds representation and so
/// carries single-precision rounding.
impl Mul<f32> for Duration {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::from_secs_f32(self.as_secs_f32() * rhs)
    }
}

impl Mul<Duration> for f32 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

/// Integer scaling path: exact microsecond arithmetic.
impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::from_micros(self.micros * rhs)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl MulAssign<f32> for Duration {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Duration {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

/// Float scaling path: converts through the seconds representation. Dividing
/// by `0.0` follows IEEE 754 semantics and yields a saturated value rather
/// than panicking.
impl Div<f32> for Duration {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::from_secs_f32(self.as_secs_f32() / rhs)
    }
}

/// Integer scaling path: exact microsecond arithmetic, truncating toward
/// zero. Panics if `rhs` is zero.
impl Div<i64> for Duration {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        assert!(rhs != 0, "duration division requires a non-zero divisor");
        Self::from_micros(self.micros / rhs)
    }
}

impl DivAssign<f32> for Duration {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl DivAssign<i64> for Duration {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

/// The ratio between two durations, computed via each side's seconds
/// representation (single-precision). Panics if `rhs` is zero.
impl Div for Duration {
    type Output = f32;

    fn div(self, rhs: Self) -> f32 {
        assert!(
            rhs != Self::ZERO,
            "duration ratio requires a non-zero divisor"
        );
        self.as_secs_f32() / rhs.as_secs_f32()
    }
}

/// Integer remainder of the microsecond counts, truncating toward zero.
/// Panics if `rhs` is zero.
impl Rem for Duration {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        assert!(
            rhs != Self::ZERO,
            "duration modulo requires a non-zero divisor"
        );
        Self::from_micros(self.micros % rhs.micros)
    }
}

impl RemAssign for Duration {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Duration: Copy, Send, Sync);

    #[test]
    fn micros_round_trip() {
        for micros in [0_i64, 1, -1, 999, 1_000_000, -1_450_000, i64::MAX, i64::MIN] {
            assert_eq!(Duration::from_micros(micros).as_micros(), micros);
        }
    }

    #[test]
    fn millis_round_trip_with_truncation() {
        for millis in [0_i32, 1, -1, 456, -456, i32::MAX, i32::MIN] {
            let duration = Duration::from_millis(millis);
            assert_eq!(duration.as_micros(), i64::from(millis) * 1_000);
            assert_eq!(duration.as_millis(), millis);
        }

        // Sub-millisecond remainders truncate toward zero in both signs.
        assert_eq!(Duration::from_micros(1_999).as_millis(), 1);
        assert_eq!(Duration::from_micros(-1_999).as_millis(), -1);
    }

    #[test]
    fn zero_is_the_additive_identity() {
        assert_eq!(Duration::ZERO, Duration::from_micros(0));
        assert_eq!(Duration::ZERO, Duration::default());

        let duration = Duration::from_micros(123_456);
        assert_eq!(duration + Duration::ZERO, duration);
        assert_eq!(Duration::ZERO + duration, duration);
    }

    #[test]
    fn ordering_is_total_and_consistent() {
        let samples = [
            Duration::from_micros(-1_000_000),
            Duration::from_micros(-1),
            Duration::ZERO,
            Duration::from_micros(1),
            Duration::from_micros(1_000_000),
        ];

        for a in samples {
            for b in samples {
                let exactly_one =
                    [a < b, a == b, a > b].into_iter().filter(|held| *held).count();
                assert_eq!(exactly_one, 1);

                assert_eq!(a <= b, a < b || a == b);
                assert_eq!(a >= b, a > b || a == b);
                assert_eq!(a.cmp(&b) == Ordering::Less, a < b);
            }
        }
    }

    #[test]
    fn addition_and_subtraction_are_exact_inverses() {
        let samples = [
            Duration::from_micros(-7_654_321),
            Duration::ZERO,
            Duration::from_micros(42),
            Duration::from_micros(1_906_000),
        ];

        for a in samples {
            for b in samples {
                assert_eq!((a + b) - b, a);

                let mut compound = a;
                compound += b;
                compound -= b;
                assert_eq!(compound, a);
            }
        }
    }

    #[test]
    fn negation_laws_hold() {
        let duration = Duration::from_micros(123_456_789);

        assert_eq!(-(-duration), duration);
        assert_eq!(duration + (-duration), Duration::ZERO);
        assert_eq!(-Duration::ZERO, Duration::ZERO);
    }

    #[test]
    fn integer_scaling_is_exact() {
        assert_eq!(
            (Duration::from_micros(1_000_000) * 3_i64).as_micros(),
            3_000_000
        );
        assert_eq!(
            (3_i64 * Duration::from_micros(1_234_567)).as_micros(),
            3_703_701
        );
        assert_eq!((Duration::from_micros(7) / 2_i64).as_micros(), 3);
        assert_eq!((Duration::from_micros(-7) / 2_i64).as_micros(), -3);

        let mut compound = Duration::from_micros(500);
        compound *= 4_i64;
        assert_eq!(compound.as_micros(), 2_000);
        compound /= 8_i64;
        assert_eq!(compound.as_micros(), 250);
    }

    #[test]
    fn float_scaling_stays_within_rounding_of_the_integer_path() {
        // The float path converts through single-precision seconds, so it is
        // only required to land near the exact integer result.
        let float_path = Duration::from_secs_f32(1.0) * 3.0_f32;
        assert!((float_path.as_micros() - 3_000_000).abs() <= 5);

        let float_path = Duration::from_micros(1_234_567) * 10.0_f32;
        assert!((float_path.as_micros() - 12_345_670).abs() <= 20);

        let float_path = 0.5_f32 * Duration::from_micros(1_000_000);
        assert!((float_path.as_micros() - 500_000).abs() <= 5);

        let float_path = Duration::from_micros(3_000_000) / 3.0_f32;
        assert!((float_path.as_micros() - 1_000_000).abs() <= 5);

        let mut compound = Duration::from_micros(1_000_000);
        compound *= 2.0_f32;
        assert!((compound.as_micros() - 2_000_000).abs() <= 5);
        compound /= 2.0_f32;
        assert!((compound.as_micros() - 1_000_000).abs() <= 5);
    }

    #[test]
    fn ratio_is_single_precision() {
        let ratio = Duration::from_millis(500) / Duration::from_millis(2_000);
        assert!((ratio - 0.25).abs() < 1e-6);

        let ratio = Duration::from_millis(-500) / Duration::from_millis(500);
        assert!((ratio + 1.0).abs() < 1e-6);
    }

    #[test]
    fn modulo_takes_the_integer_remainder() {
        let a = Duration::from_micros(7_000);
        let b = Duration::from_micros(2_000);

        assert_eq!((a % b).as_micros(), 1_000);
        assert_eq!((-a % b).as_micros(), -1_000);

        let mut compound = a;
        compound %= b;
        assert_eq!(compound.as_micros(), 1_000);
    }

    #[test]
    #[should_panic(expected = "non-zero divisor")]
    fn modulo_by_zero_panics() {
        let _ = Duration::from_micros(1) % Duration::ZERO;
    }

    #[test]
    #[should_panic(expected = "non-zero divisor")]
    fn integer_division_by_zero_panics() {
        let _ = Duration::from_micros(1) / 0_i64;
    }

    #[test]
    #[should_panic(expected = "non-zero divisor")]
    fn ratio_against_zero_panics() {
        let _ = Duration::from_micros(1) / Duration::ZERO;
    }

    #[test]
    fn mixed_unit_scenario() {
        assert_eq!(Duration::from_secs_f32(1.45).as_micros(), 1_450_000);
        assert_eq!(Duration::from_millis(456).as_micros(), 456_000);
        assert_eq!(
            (Duration::from_secs_f32(1.45) + Duration::from_millis(456)).as_micros(),
            1_906_000
        );
    }
}
