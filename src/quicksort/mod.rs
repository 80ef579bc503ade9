//! An in-place [Quick Sort](https://en.wikipedia.org/wiki/Quicksort) driven by a fallible
//! comparator.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use pivotsort::{PivotStrategy, QuickSorter, SortOptions};
//!
//! let mut slice = [5, 1, 2, 6, 7, 3, 4, 8];
//! let sorter = QuickSorter::new(SortOptions::DEFAULT.with_pivot(PivotStrategy::Middle));
//! sorter
//!     .sort_by(&mut slice, |a, b| Ok::<Ordering, ()>(a.cmp(b)))
//!     .unwrap();
//! assert_eq!(slice, [1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! # Storage
//!
//! Sorting happens in the caller's own slice and nothing is allocated for the elements. A
//! caller that needs the original order afterwards must sort a copy, see
//! [`QuickSorter::sort_to_vec`]. When a sort fails the slice keeps every swap made up to that
//! point; it is a permutation of the input but otherwise unspecified.
//!
//! Equal elements may be reordered.

mod partition;
mod pivot;

use std::cmp::Ordering;
use std::ops::Range;

use indicatif::{ProgressBar, ProgressStyle};

use crate::coerce::{coercer, AsInteger, Coercer};
use crate::error::SortResult;
use crate::options::{SortOptions, SortOrder};

pub use pivot::{median_of_three, pick_pivot, pick_pivot_with};

use partition::partition;

/// A sorting algorithm that orders a slice with a caller supplied comparator.
pub trait Sorter<T> {
    fn sort_by<E, F>(&self, slice: &mut [T], compare: F) -> SortResult<(), E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>;
}

/// Quicksort with a configurable pivot. See the [module docs](self).
///
/// # Algorithm
///
/// A pivot is picked with the configured [`PivotStrategy`](crate::PivotStrategy), swapped to
/// the front and every other element of the range is compared against it. Elements that
/// compare less are gathered right behind the pivot, then the pivot is swapped onto the last of
/// them, which is its final place. Both sides of it are then sorted the same way.
///
/// Ranges still to be sorted are kept on an explicit stack rather than the call stack, with the
/// smaller side always taken next, so deep splits on adversarial input cannot overflow the
/// stack. Running time is still quadratic in the worst case.
///
/// # Element types
///
/// [`sort_by`](QuickSorter::sort_by) reads integers through [`AsInteger`] for the
/// median-of-three pivot. Any other element type goes through
/// [`sort_opaque_by`](QuickSorter::sort_opaque_by), or
/// [`sort_by_coercing`](QuickSorter::sort_by_coercing) with a coercer of its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuickSorter {
    pub options: SortOptions,

    /// Draw a progress bar on the terminal while sorting.
    pub progress: bool,
}

impl QuickSorter {
    pub fn new(options: SortOptions) -> Self {
        QuickSorter {
            options,
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Sorts `slice` in place and hands the same slice back.
    ///
    /// `compare` answers how its first argument orders against its second. Any `Err` it
    /// returns aborts the sort and comes back as [`SortError::Comparator`](crate::SortError).
    pub fn sort_by<'a, T, E, F>(
        &self,
        slice: &'a mut [T],
        compare: F,
    ) -> SortResult<&'a mut [T], E>
    where
        T: AsInteger,
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        self.sort_by_coercing(slice, compare, Some(coercer::<T>()))
    }

    /// Sorts values the sorter knows nothing about.
    ///
    /// First, middle, last and random pivots work for any `T`. Median-of-three has nothing to
    /// read the values with and fails with
    /// [`PivotError::NotAnInteger`](crate::PivotError::NotAnInteger).
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use pivotsort::{PivotStrategy, QuickSorter, SortOptions};
    ///
    /// let mut pairs = vec![(2, "b"), (3, "c"), (1, "a")];
    /// QuickSorter::new(SortOptions::DEFAULT.with_pivot(PivotStrategy::First))
    ///     .sort_opaque_by(&mut pairs, |a, b| Ok::<Ordering, ()>(a.cmp(b)))
    ///     .unwrap();
    /// assert_eq!(pairs, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn sort_opaque_by<'a, T, E, F>(
        &self,
        slice: &'a mut [T],
        compare: F,
    ) -> SortResult<&'a mut [T], E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        self.sort_by_coercing(slice, compare, None)
    }

    /// Sorts with an explicit `coercer` for the median-of-three pivot.
    pub fn sort_by_coercing<'a, T, E, F>(
        &self,
        slice: &'a mut [T],
        mut compare: F,
        coercer: Option<Coercer<T>>,
    ) -> SortResult<&'a mut [T], E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        if slice.len() <= 1 {
            return Ok(slice);
        }

        let order = self.options.order;
        let mut ordered = |a: &T, b: &T| {
            compare(a, b).map(|ordering| match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            })
        };

        let pb = self.progress_bar(slice.len());
        let result = quicksort(slice, self.options, coercer, &mut ordered, &pb);
        pb.finish_and_clear();

        if let Err(ref error) = result {
            log::debug!(
                "quicksort of {} elements aborted: {}",
                slice.len(),
                error.kind()
            );
        }
        result.map(|()| slice)
    }

    /// Sorts a copy of `slice`, leaving the original untouched.
    pub fn sort_to_vec<T, E, F>(&self, slice: &[T], compare: F) -> SortResult<Vec<T>, E>
    where
        T: AsInteger + Clone,
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let mut copy = slice.to_vec();
        self.sort_by(&mut copy, compare)?;
        Ok(copy)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(
            "Quick Sort -> {spinner:.green} [{elapsed_precise}] {bar:50.cyan/blue} Pivots placed: {pos}/{len}, ETA: {eta}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());

        ProgressBar::new(len as u64).with_style(style)
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: AsInteger,
{
    #[inline]
    fn sort_by<E, F>(&self, slice: &mut [T], compare: F) -> SortResult<(), E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        QuickSorter::sort_by(self, slice, compare).map(|_| ())
    }
}

/// Sorts `slice` with options given as raw [`flags`](crate::options::flags).
///
/// Slices of length 0 or 1 are returned untouched whatever the flags say. Otherwise flags
/// without a pivot bit fail with [`PivotError::NoStrategy`](crate::PivotError::NoStrategy).
/// The median-of-three pivot reads values through [`AsInteger`]; for other element types
/// build the sorter with [`SortOptions::from_flags`] and use
/// [`QuickSorter::sort_opaque_by`].
pub fn sort_with_flags<T, E, F>(
    slice: &mut [T],
    compare: F,
    flags: u32,
) -> SortResult<&mut [T], E>
where
    T: AsInteger,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if slice.len() <= 1 {
        return Ok(slice);
    }

    let options = SortOptions::from_flags(flags)?;
    QuickSorter::new(options).sort_by(slice, compare)
}

fn quicksort<T, E, F>(
    slice: &mut [T],
    options: SortOptions,
    coercer: Option<Coercer<T>>,
    compare: &mut F,
    pb: &ProgressBar,
) -> SortResult<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut pending: Vec<Range<usize>> = vec![0..slice.len()];

    while let Some(range) = pending.pop() {
        if range.len() <= 1 {
            continue;
        }

        let sub = &mut slice[range.clone()];
        let split = range.start + partition(sub, options.pivot, coercer, compare)?;
        pb.inc(1);

        let left = range.start..split;
        let right = split + 1..range.end;

        // The pivot itself is excluded from both sides.
        if left.len() > right.len() {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }

    Ok(())
}
