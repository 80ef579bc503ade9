use rand::Rng;

use crate::coerce::{coerce, coercer, AsInteger, Coercer};
use crate::error::PivotError;
use crate::options::PivotStrategy;

/// Picks the pivot of `slice` with the given strategy and returns its index.
///
/// Fails when the slice is empty, or when [`PivotStrategy::MedianOfThree`] reads a value that
/// is not an integer.
///
/// ```
/// use pivotsort::{pick_pivot, PivotStrategy};
///
/// let slice = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(pick_pivot(&slice, PivotStrategy::First), Ok(0));
/// assert_eq!(pick_pivot(&slice, PivotStrategy::Middle), Ok(3));
/// assert_eq!(pick_pivot(&slice, PivotStrategy::Last), Ok(6));
///
/// assert_eq!(pick_pivot(&[1, 3, 2], PivotStrategy::MedianOfThree), Ok(2));
/// assert!(pick_pivot(&["a", "b", "c"], PivotStrategy::MedianOfThree).is_err());
/// ```
pub fn pick_pivot<T: AsInteger>(slice: &[T], strategy: PivotStrategy) -> Result<usize, PivotError> {
    pick_pivot_with(slice, strategy, Some(coercer::<T>()))
}

/// Like [`pick_pivot`], for element types that may not be integers at all.
///
/// `coercer` is only consulted by [`PivotStrategy::MedianOfThree`]; when it is `None` that
/// strategy fails with [`PivotError::NotAnInteger`] on the first value it reads.
///
/// ```
/// use pivotsort::coerce::Coercer;
/// use pivotsort::{pick_pivot_with, PivotError, PivotStrategy};
///
/// let pairs = [(3, "c"), (1, "a"), (2, "b")];
/// assert_eq!(pick_pivot_with(&pairs, PivotStrategy::Last, None), Ok(2));
/// assert_eq!(
///     pick_pivot_with(&pairs, PivotStrategy::MedianOfThree, None),
///     Err(PivotError::NotAnInteger { index: 0 })
/// );
///
/// let by_key: Coercer<(i32, &str)> = |pair| Some(i128::from(pair.0));
/// assert_eq!(
///     pick_pivot_with(&pairs, PivotStrategy::MedianOfThree, Some(by_key)),
///     Ok(2)
/// );
/// ```
pub fn pick_pivot_with<T>(
    slice: &[T],
    strategy: PivotStrategy,
    coercer: Option<Coercer<T>>,
) -> Result<usize, PivotError> {
    if slice.is_empty() {
        return Err(PivotError::Empty);
    }

    let last = slice.len() - 1;
    let mid = last / 2;

    match strategy {
        PivotStrategy::First => Ok(0),
        PivotStrategy::Middle => Ok(mid),
        PivotStrategy::Last => Ok(last),
        PivotStrategy::Random => Ok(rand::thread_rng().gen_range(0..slice.len())),
        PivotStrategy::MedianOfThree => {
            let first_value = coerce(coercer, &slice[0], 0)?;
            let mid_value = coerce(coercer, &slice[mid], mid)?;
            let last_value = coerce(coercer, &slice[last], last)?;

            let median = median_of_three(first_value, mid_value, last_value);
            if median == first_value {
                Ok(0)
            } else if median == mid_value {
                Ok(mid)
            } else {
                Ok(last)
            }
        }
    }
}

/// Returns the median of three values.
///
/// `a` is the median exactly when `b - a` and `c - a` have opposite signs, likewise for `b`.
/// Only the signs are multiplied, so extreme values cannot overflow. With duplicates among the
/// three the answer is still one of them, though not necessarily the one a sort would put in
/// the middle.
pub fn median_of_three(a: i128, b: i128, c: i128) -> i128 {
    let sign = |x: i128, y: i128| x.cmp(&y) as i8;

    if sign(b, a) * sign(c, a) < 0 {
        a
    } else if sign(a, b) * sign(c, b) < 0 {
        b
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_distinct_values() {
        assert_eq!(median_of_three(1, 2, 3), 2);
        assert_eq!(median_of_three(2, 1, 3), 2);
        assert_eq!(median_of_three(1, 3, 2), 2);
        assert_eq!(median_of_three(3, 2, 1), 2);
        assert_eq!(median_of_three(-7, 100, 0), 0);
    }

    #[test]
    fn median_does_not_overflow() {
        assert_eq!(median_of_three(i128::MIN, 0, i128::MAX), 0);
        assert_eq!(median_of_three(i128::MAX, i128::MIN, -1), -1);
    }

    #[test]
    fn median_with_duplicates_is_one_of_them() {
        for (a, b, c) in [(1, 1, 2), (2, 1, 1), (1, 2, 1), (4, 4, 4)] {
            let median = median_of_three(a, b, c);
            assert!(median == a || median == b || median == c);
        }
    }

    #[test]
    fn fixed_positions() {
        let odd = (1..=7).collect::<Vec<i32>>();
        assert_eq!(pick_pivot(&odd, PivotStrategy::First), Ok(0));
        assert_eq!(pick_pivot(&odd, PivotStrategy::Middle), Ok(3));
        assert_eq!(pick_pivot(&odd, PivotStrategy::Last), Ok(6));

        let even = (1..=8).collect::<Vec<i32>>();
        assert_eq!(pick_pivot(&even, PivotStrategy::Middle), Ok(3));

        assert_eq!(pick_pivot(&[9], PivotStrategy::Middle), Ok(0));
        assert_eq!(pick_pivot(&[9], PivotStrategy::Last), Ok(0));
    }

    #[test]
    fn median_of_three_positions() {
        assert_eq!(pick_pivot(&[1, 2, 3], PivotStrategy::MedianOfThree), Ok(1));
        assert_eq!(pick_pivot(&[1, 3, 2], PivotStrategy::MedianOfThree), Ok(2));
        assert_eq!(pick_pivot(&[2, 1, 3], PivotStrategy::MedianOfThree), Ok(0));
        assert_eq!(
            pick_pivot(&[5u64, 1, 2, 6, 7, 3, 4, 8], PivotStrategy::MedianOfThree),
            Ok(3)
        );
    }

    #[test]
    fn median_of_three_rejects_strings() {
        assert_eq!(
            pick_pivot(&["a", "b", "c"], PivotStrategy::MedianOfThree),
            Err(PivotError::NotAnInteger { index: 0 })
        );
        // Fixed positions never look at the values.
        assert_eq!(pick_pivot(&["a", "b", "c"], PivotStrategy::Last), Ok(2));
    }

    #[test]
    fn opaque_elements_take_fixed_positions() {
        let pairs = [(2, "b"), (1, "a"), (3, "c"), (0, "z")];
        assert_eq!(pick_pivot_with(&pairs, PivotStrategy::First, None), Ok(0));
        assert_eq!(pick_pivot_with(&pairs, PivotStrategy::Middle, None), Ok(1));
        assert_eq!(pick_pivot_with(&pairs, PivotStrategy::Last, None), Ok(3));
        assert_eq!(
            pick_pivot_with(&pairs, PivotStrategy::MedianOfThree, None),
            Err(PivotError::NotAnInteger { index: 0 })
        );
    }

    #[test]
    fn caller_coercer_drives_median_of_three() {
        let by_key: Coercer<(i32, &str)> = |pair| Some(i128::from(pair.0));
        let pairs = [(1, "a"), (9, "z"), (5, "m")];
        assert_eq!(
            pick_pivot_with(&pairs, PivotStrategy::MedianOfThree, Some(by_key)),
            Ok(2)
        );
    }

    #[test]
    fn random_stays_in_bounds() {
        let slice = [0u8; 13];
        for _ in 0..200 {
            let index = pick_pivot(&slice, PivotStrategy::Random).unwrap();
            assert!(index < slice.len());
        }
    }

    #[test]
    fn empty_slice_has_no_pivot() {
        let empty: [i32; 0] = [];
        assert_eq!(pick_pivot(&empty, PivotStrategy::First), Err(PivotError::Empty));
    }
}
