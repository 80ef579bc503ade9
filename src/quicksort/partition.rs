use std::cmp::Ordering;

use crate::coerce::Coercer;
use crate::error::{SortError, SortResult};
use crate::options::PivotStrategy;

use super::pivot::pick_pivot_with;

/// Partitions `slice` around a pivot chosen by `strategy` and returns the pivot's final index.
///
/// Afterwards every element left of the returned index compares less than the pivot and every
/// element right of it compares greater or equal. The pivot is swapped to the front first and
/// then held by reference, so the scan never has to track where its value went.
///
/// A comparator failure stops the scan on the spot. Swaps already made are kept.
pub(crate) fn partition<T, E, F>(
    slice: &mut [T],
    strategy: PivotStrategy,
    coercer: Option<Coercer<T>>,
    compare: &mut F,
) -> SortResult<usize, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let pivot_index = pick_pivot_with(slice, strategy, coercer)?;
    slice.swap(0, pivot_index);

    let mut boundary = 0;
    {
        let Some((pivot, rest)) = slice.split_first_mut() else {
            return Ok(0);
        };

        // `rest[k]` is `slice[k + 1]`, so `rest[..boundary]` is `slice[1..=boundary]`.
        for j in 0..rest.len() {
            if compare(&rest[j], &*pivot).map_err(SortError::Comparator)? == Ordering::Less {
                rest.swap(boundary, j);
                boundary += 1;
            }
        }
    }

    slice.swap(0, boundary);
    log::trace!(
        "partitioned {} elements around a {strategy} pivot, final index {boundary}",
        slice.len()
    );

    Ok(boundary)
}
