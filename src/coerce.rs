//! Numeric coercion used by the median-of-three pivot strategy.
//!
//! Every fixed-width integer is widened into an `i128`, which holds all of `i64` and `u64`
//! without loss. Anything else (strings, floats, structs) is "not an integer".
//!
//! # Example
//!
//! ```
//! use pivotsort::coerce::AsInteger;
//!
//! assert_eq!(7u8.as_integer(), Some(7));
//! assert_eq!(u64::MAX.as_integer(), Some(u64::MAX as i128));
//! assert_eq!("7".as_integer(), None);
//! ```

use crate::error::PivotError;

/// The capability of being read as a signed integer.
///
/// The default body answers `None`, so a type that never holds integers opts in with an empty
/// impl:
///
/// ```
/// use pivotsort::coerce::AsInteger;
///
/// struct Name(&'static str);
/// impl AsInteger for Name {}
///
/// assert_eq!(Name("ferris").as_integer(), None);
/// ```
pub trait AsInteger {
    fn as_integer(&self) -> Option<i128> {
        None
    }
}

macro_rules! impl_as_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl AsInteger for $int {
                #[inline]
                fn as_integer(&self) -> Option<i128> {
                    i128::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_as_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AsInteger for f32 {}
impl AsInteger for f64 {}
impl AsInteger for bool {}
impl AsInteger for char {}
impl AsInteger for str {}
impl AsInteger for String {}

impl<T: AsInteger + ?Sized> AsInteger for &T {
    #[inline]
    fn as_integer(&self) -> Option<i128> {
        (**self).as_integer()
    }
}

impl<T: AsInteger + ?Sized> AsInteger for Box<T> {
    #[inline]
    fn as_integer(&self) -> Option<i128> {
        (**self).as_integer()
    }
}

/// Reads an element as an integer, `None` when it holds anything else.
///
/// Only [`PivotStrategy::MedianOfThree`](crate::PivotStrategy::MedianOfThree) reads values, so
/// the sorter takes the coercer per call rather than demanding [`AsInteger`] of every element
/// type. Without one, median-of-three fails on the first value it reads.
pub type Coercer<T> = fn(&T) -> Option<i128>;

/// The coercer of a type that implements [`AsInteger`].
pub fn coercer<T: AsInteger>() -> Coercer<T> {
    T::as_integer
}

/// Coerces the value found at `index` or reports which position could not be read.
pub(crate) fn coerce<T>(
    coercer: Option<Coercer<T>>,
    value: &T,
    index: usize,
) -> Result<i128, PivotError> {
    coercer
        .and_then(|coercer| coercer(value))
        .ok_or(PivotError::NotAnInteger { index })
}
