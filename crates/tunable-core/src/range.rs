//! Bounded and stepped range constraint types.
//!
//! [`Range`] is a closed interval; [`StepRange`] additionally constrains
//! values to fixed increments from the lower bound. Both are plain value
//! types usable on their own and as validity specifications on a
//! [`ParamDef`](crate::ParamDef). Endpoints are inclusive.

use core::fmt;

/// Step-multiple test for [`StepRange`].
///
/// Integral types use exact remainder arithmetic. Floating-point types use
/// a near-integer tolerance on the step count, so on-grid values are not
/// rejected over representation error.
pub trait SteppedValue: Sized {
    /// Returns `true` when `self` lies an integer number of `step`s above
    /// `lo`. A zero step admits only `lo` itself.
    fn on_step(&self, lo: &Self, step: &Self) -> bool;
}

// The delta is computed in the unsigned counterpart: for signed types a
// range can span more than the positive half, so `value - lo` may not fit
// in the type itself even though the value is on the grid.
macro_rules! stepped_signed {
    ($(($t:ty, $u:ty)),* $(,)?) => {$(
        impl SteppedValue for $t {
            fn on_step(&self, lo: &Self, step: &Self) -> bool {
                if self < lo {
                    return false;
                }
                let delta = self.wrapping_sub(*lo) as $u;
                let step = step.unsigned_abs();
                if step == 0 {
                    return delta == 0;
                }
                delta % step == 0
            }
        }
    )*};
}

stepped_signed!(
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize),
);

macro_rules! stepped_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl SteppedValue for $t {
            fn on_step(&self, lo: &Self, step: &Self) -> bool {
                if self < lo {
                    return false;
                }
                let delta = *self - *lo;
                if *step == 0 {
                    return delta == 0;
                }
                delta % *step == 0
            }
        }
    )*};
}

stepped_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! stepped_float {
    ($($t:ty),* $(,)?) => {$(
        impl SteppedValue for $t {
            fn on_step(&self, lo: &Self, step: &Self) -> bool {
                let delta = *self - *lo;
                if *step == 0.0 {
                    return delta == 0.0;
                }
                let k = delta / *step;
                (k - k.round()).abs() <= <$t>::EPSILON * k.abs().max(1.0) * 64.0
            }
        }
    )*};
}

stepped_float!(f32, f64);

/// A closed interval `[lo, hi]`. Both endpoints are valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    /// Lower bound, inclusive.
    pub lo: T,
    /// Upper bound, inclusive.
    pub hi: T,
}

impl<T: PartialOrd> Range<T> {
    /// Create a range over `[lo, hi]`.
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// Returns `true` when `lo <= value <= hi`.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.lo && *value <= self.hi
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// A closed interval `[lo, hi]` quantized to `lo + k*step` for integer `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange<T> {
    /// Lower bound, inclusive. Also the step grid origin.
    pub lo: T,
    /// Upper bound, inclusive.
    pub hi: T,
    /// Increment between valid values.
    pub step: T,
}

impl<T: PartialOrd + SteppedValue> StepRange<T> {
    /// Create a stepped range over `[lo, hi]` with the given increment.
    pub fn new(lo: T, hi: T, step: T) -> Self {
        Self { lo, hi, step }
    }

    /// Returns `true` when `value` is inside the interval and on the step
    /// grid anchored at `lo`.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.lo && *value <= self.hi && value.on_step(&self.lo, &self.step)
    }
}

impl<T: fmt::Display> fmt::Display for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] step {}", self.lo, self.hi, self.step)
    }
}
