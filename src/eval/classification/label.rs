//! Label types accepted by the confusion matrix

use std::fmt;

mod private {
    pub trait Sealed {}
}

/// A class value indexing the rows and columns of a confusion matrix.
///
/// Implemented for the primitive kinds only: `bool`, `char`, the integer and
/// float types, `String` and `&'static str`. Labels are compared with the
/// type's own `PartialEq`, so there is no coercion between kinds, and a `NaN`
/// float label never matches an observation.
pub trait Label: private::Sealed + Clone + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Whether two labels are the same value when building a label set.
    ///
    /// Same as `==`, except that all float `NaN`s collapse into one label.
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_label {
    (float: $($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Label for $t {
                fn same_value(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Label for $t {}
        )*
    };
}

impl_label!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    &'static str,
);

impl_label!(float: f32, f64);
