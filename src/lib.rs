#![doc = include_str!("../README.md")]

pub mod benchmark;
pub mod coerce;
pub mod error;
pub mod options;
pub mod quicksort;
pub mod value;

pub use coerce::AsInteger;
pub use error::{PivotError, SortError, SortResult};
pub use options::{PivotStrategy, SortOptions, SortOrder};
pub use quicksort::{
    median_of_three, pick_pivot, pick_pivot_with, sort_with_flags, QuickSorter, Sorter,
};
pub use value::Value;
