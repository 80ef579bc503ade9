//! How a [`QuickSorter`](crate::QuickSorter) picks its pivot and which way it orders.
//!
//! The typed [`SortOptions`] is the primary interface. Raw bit [`flags`] are accepted through
//! [`SortOptions::from_flags`] for callers that carry options around as a single integer.

use std::fmt;

use crate::error::PivotError;

/// Which element of a sub-range becomes the pivot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    /// Index `0`.
    First,

    /// Index `(len - 1) / 2`.
    Middle,

    /// Index `len - 1`.
    Last,

    /// The median of the first, middle and last values. Every sampled value must be coercible to
    /// an integer, see [`AsInteger`](crate::coerce::AsInteger).
    #[default]
    MedianOfThree,

    /// A uniformly random index.
    Random,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 5] = [
        PivotStrategy::First,
        PivotStrategy::Middle,
        PivotStrategy::Last,
        PivotStrategy::MedianOfThree,
        PivotStrategy::Random,
    ];
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PivotStrategy::First => "first",
            PivotStrategy::Middle => "middle",
            PivotStrategy::Last => "last",
            PivotStrategy::MedianOfThree => "median-of-three",
            PivotStrategy::Random => "random",
        };
        f.write_str(name)
    }
}

/// Direction of the final ordering.
///
/// `Descending` reverses every comparator answer before the sorter looks at it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOptions {
    pub pivot: PivotStrategy,
    pub order: SortOrder,
}

impl SortOptions {
    /// Median-of-three, ascending.
    pub const DEFAULT: SortOptions = SortOptions {
        pivot: PivotStrategy::MedianOfThree,
        order: SortOrder::Ascending,
    };

    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Reads options out of raw [`flags`].
    ///
    /// Only one pivot bit is meant to be set. When several are, the first one wins in the order
    /// first, middle, last, median-of-three, random. Order bits live in their own range and can
    /// be combined freely; `ORDER_DESC` selects descending.
    ///
    /// ```
    /// use pivotsort::options::{flags, PivotStrategy, SortOptions, SortOrder};
    ///
    /// let options = SortOptions::from_flags(flags::PIVOT_LAST | flags::ORDER_DESC).unwrap();
    /// assert_eq!(options.pivot, PivotStrategy::Last);
    /// assert_eq!(options.order, SortOrder::Descending);
    ///
    /// assert!(SortOptions::from_flags(flags::ORDER_ASC).is_err());
    /// ```
    pub fn from_flags(bits: u32) -> Result<Self, PivotError> {
        let pivot = [
            (flags::PIVOT_FIRST, PivotStrategy::First),
            (flags::PIVOT_MIDDLE, PivotStrategy::Middle),
            (flags::PIVOT_LAST, PivotStrategy::Last),
            (flags::PIVOT_MEDIAN_OF_THREE, PivotStrategy::MedianOfThree),
            (flags::PIVOT_RANDOM, PivotStrategy::Random),
        ]
        .into_iter()
        .find_map(|(bit, strategy)| (bits & bit != 0).then_some(strategy))
        .ok_or(PivotError::NoStrategy)?;

        let order = if bits & flags::ORDER_DESC != 0 {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        Ok(SortOptions { pivot, order })
    }

    /// The inverse of [`SortOptions::from_flags`].
    pub fn to_flags(self) -> u32 {
        let pivot = match self.pivot {
            PivotStrategy::First => flags::PIVOT_FIRST,
            PivotStrategy::Middle => flags::PIVOT_MIDDLE,
            PivotStrategy::Last => flags::PIVOT_LAST,
            PivotStrategy::MedianOfThree => flags::PIVOT_MEDIAN_OF_THREE,
            PivotStrategy::Random => flags::PIVOT_RANDOM,
        };
        let order = match self.order {
            SortOrder::Ascending => flags::ORDER_ASC,
            SortOrder::Descending => flags::ORDER_DESC,
        };
        pivot | order
    }
}

/// Raw option bits. Pivot bits and order bits occupy disjoint ranges.
pub mod flags {
    pub const PIVOT_FIRST: u32 = 1 << 0;
    pub const PIVOT_MIDDLE: u32 = 1 << 1;
    pub const PIVOT_LAST: u32 = 1 << 2;
    pub const PIVOT_MEDIAN_OF_THREE: u32 = 1 << 3;
    pub const PIVOT_RANDOM: u32 = 1 << 4;
    pub const ORDER_ASC: u32 = 1 << 5;
    pub const ORDER_DESC: u32 = 1 << 6;

    pub const PIVOT_DEFAULT: u32 = PIVOT_MEDIAN_OF_THREE;
    pub const ORDER_DEFAULT: u32 = ORDER_ASC;
    pub const DEFAULT: u32 = PIVOT_DEFAULT | ORDER_DEFAULT;
}
