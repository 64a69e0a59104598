//! Cell type of the confusion matrix grid

use num_traits::{One, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::Sub;

/// Numeric type stored in the confusion matrix cells.
///
/// Conventional counts are unsigned integers; float cells allow weighted
/// observations. Ratios are always evaluated in `f64`.
pub trait Count:
    Copy + PartialEq + Zero + One + Sum + Sub<Output = Self> + ToPrimitive + fmt::Debug + fmt::Display
{
    /// Widen to `f64` for ratio computations.
    ///
    /// Values that cannot be represented become `NaN`.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Count for T where
    T: Copy
        + PartialEq
        + Zero
        + One
        + Sum
        + Sub<Output = T>
        + ToPrimitive
        + fmt::Debug
        + fmt::Display
{
}
