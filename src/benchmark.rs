//! Compares the pivot strategies by how many times each one calls the comparator.
//!
//! ```
//! let table = pivotsort::benchmark::compare_strategies(&[0, 1, 100]).unwrap();
//! table.printstd();
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use colored::Colorize;
use prettytable::{row, Table};
use rand::Rng;

use crate::options::{PivotStrategy, SortOptions};
use crate::quicksort::{QuickSorter, Sorter};

/// Shape of the input handed to every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Uniformly random `i32`s.
    Random,
    /// `0..n` in order, the worst case for the fixed position strategies.
    Ascending,
}

impl Pattern {
    pub const ALL: [Pattern; 2] = [Pattern::Random, Pattern::Ascending];

    pub fn generate(self, len: usize) -> Vec<i64> {
        match self {
            Pattern::Random => {
                let mut random = rand::thread_rng();
                (0..len).map(|_| i64::from(random.gen::<i32>())).collect()
            }
            Pattern::Ascending => (0..len as i64).collect(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Random => f.write_str("random"),
            Pattern::Ascending => f.write_str("ascending"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Measurement {
    pub pattern: Pattern,
    pub len: usize,
    pub strategy: PivotStrategy,
    pub comparisons: usize,
    pub elapsed: Duration,
}

fn run_bench<S: Sorter<i64>>(sorter: &S, values: &mut [i64]) -> anyhow::Result<usize> {
    let mut comparisons = 0;
    sorter.sort_by(values, |a, b| {
        comparisons += 1;
        Ok::<Ordering, Infallible>(a.cmp(b))
    })?;

    Ok(comparisons)
}

/// Sorts every pattern of every size with every strategy and records what it cost.
pub fn measure(sizes: &[usize]) -> anyhow::Result<Vec<Measurement>> {
    let mut measurements = Vec::with_capacity(sizes.len() * Pattern::ALL.len() * 5);

    for &len in sizes {
        for pattern in Pattern::ALL {
            let input = pattern.generate(len);

            for strategy in PivotStrategy::ALL {
                let sorter = QuickSorter::new(SortOptions::DEFAULT.with_pivot(strategy));
                let mut values = input.clone();

                let now = Instant::now();
                let comparisons = run_bench(&sorter, &mut values)
                    .with_context(|| format!("{strategy} pivot on {len} {pattern} values"))?;
                let elapsed = now.elapsed();

                ensure!(
                    values.windows(2).all(|w| w[0] <= w[1]),
                    "{strategy} pivot left {len} {pattern} values unsorted"
                );

                measurements.push(Measurement {
                    pattern,
                    len,
                    strategy,
                    comparisons,
                    elapsed,
                });
            }
        }
    }

    Ok(measurements)
}

/// Renders measurements as a table, ready for `printstd`.
pub fn report(measurements: &[Measurement]) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Input".bold(),
        "List Size".bold(),
        "Pivot".bold(),
        "Comparisons Made".bold(),
        "Time Taken".bold()
    ]);

    for m in measurements {
        table.add_row(row![
            m.pattern.to_string(),
            m.len.to_string(),
            m.strategy.to_string().blue(),
            m.comparisons.to_string(),
            format!("{:?}", m.elapsed)
        ]);
    }

    table
}

pub fn compare_strategies(sizes: &[usize]) -> anyhow::Result<Table> {
    let measurements = measure(sizes)?;
    Ok(report(&measurements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pivot_on_ascending_is_quadratic() {
        let measurements = measure(&[100]).unwrap();
        let first = measurements
            .iter()
            .find(|m| m.pattern == Pattern::Ascending && m.strategy == PivotStrategy::First)
            .unwrap();
        assert_eq!(first.comparisons, 100 * 99 / 2);

        let median = measurements
            .iter()
            .find(|m| m.pattern == Pattern::Ascending && m.strategy == PivotStrategy::MedianOfThree)
            .unwrap();
        assert!(median.comparisons < first.comparisons);
    }

    #[test]
    fn trivial_sizes_make_no_comparisons() {
        for m in measure(&[0, 1]).unwrap() {
            assert_eq!(m.comparisons, 0);
        }
    }

    #[test]
    fn one_row_per_measurement() {
        let measurements = measure(&[10, 20]).unwrap();
        assert_eq!(measurements.len(), 2 * Pattern::ALL.len() * PivotStrategy::ALL.len());
        assert_eq!(report(&measurements).len(), measurements.len() + 1);
    }
}
