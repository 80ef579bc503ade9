use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

use crate::options::PivotStrategy;

/// Alias for `Result<T, pivotsort::SortError<E>>`.
pub type SortResult<T, E> = StdResult<T, SortError<E>>;

/// Raised when a pivot cannot be chosen for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotError {
    /// The value sampled at `index` is not coercible to an integer, which the
    /// [`PivotStrategy::MedianOfThree`] strategy requires.
    NotAnInteger { index: usize },

    /// No pivot strategy bit was recognized in a set of raw option flags.
    NoStrategy,

    /// An empty slice has no pivot.
    Empty,
}

impl fmt::Display for PivotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PivotError::NotAnInteger { index } => write!(
                f,
                "Value at index {index} is not supported by the {} pivot picking method",
                PivotStrategy::MedianOfThree
            ),
            PivotError::NoStrategy => f.write_str("No supported pivot picking method was given"),
            PivotError::Empty => f.write_str("Cannot pick a pivot from an empty slice"),
        }
    }
}

impl StdError for PivotError {}

/// Represents every way a sort can fail. Both kinds abort the whole sort, and the slice is left
/// with whatever swaps were applied before the failure.
#[derive(Debug)]
pub enum SortError<E> {
    /// The pivot strategy could not be applied to the sampled values.
    UnsupportedPivot(PivotError),

    /// The caller's comparator reported a failure. The error is passed through untouched.
    Comparator(E),
}

impl<E> SortError<E> {
    /// Returns the comparator's error, if that is what stopped the sort.
    pub fn into_comparator(self) -> Option<E> {
        match self {
            SortError::Comparator(error) => Some(error),
            SortError::UnsupportedPivot(_) => None,
        }
    }

    pub fn is_unsupported_pivot(&self) -> bool {
        matches!(self, SortError::UnsupportedPivot(_))
    }

    /// A short description that does not repeat the wrapped error, which stays reachable
    /// through [`source`](StdError::source).
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::UnsupportedPivot(_) => "unsupported pivot",
            SortError::Comparator(_) => "comparator failed",
        }
    }
}

impl<E> From<PivotError> for SortError<E> {
    fn from(error: PivotError) -> Self {
        SortError::UnsupportedPivot(error)
    }
}

impl<E> fmt::Display for SortError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl<E> StdError for SortError<E>
where
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            SortError::UnsupportedPivot(ref error) => Some(error),
            SortError::Comparator(ref error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Mismatch;

    impl fmt::Display for Mismatch {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Compare value must be int")
        }
    }

    impl StdError for Mismatch {}

    #[test]
    fn comparator_error_is_passed_through() {
        let error: SortError<Mismatch> = SortError::Comparator(Mismatch);
        assert_eq!(error.to_string(), "comparator failed");
        assert_eq!(
            error.source().map(|source| source.to_string()),
            Some(String::from("Compare value must be int"))
        );
        assert_eq!(error.into_comparator(), Some(Mismatch));
    }

    #[test]
    fn error_chain_names_each_cause_once() {
        let chain = anyhow::Error::new(SortError::Comparator(Mismatch));
        assert_eq!(
            format!("{chain:#}"),
            "comparator failed: Compare value must be int"
        );

        let chain = anyhow::Error::new(SortError::<Mismatch>::UnsupportedPivot(
            PivotError::NoStrategy,
        ));
        assert_eq!(
            format!("{chain:#}"),
            "unsupported pivot: No supported pivot picking method was given"
        );
    }

    #[test]
    fn pivot_error_converts() {
        let error: SortError<Mismatch> = PivotError::NotAnInteger { index: 2 }.into();
        assert!(error.is_unsupported_pivot());
        assert_eq!(error.to_string(), "unsupported pivot");
        assert!(error.source().unwrap().to_string().contains("index 2"));
        assert_eq!(error.into_comparator(), None);
    }
}
