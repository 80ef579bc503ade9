use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use pivotsort::Value;
use rand::seq::SliceRandom;
use rand::Rng;

/// The comparator error used throughout the integration tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAnInt;

impl fmt::Display for NotAnInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Compare value must be int")
    }
}

impl Error for NotAnInt {}

/// Compares two values that must both be `Value::Int`. Anything else fails.
pub fn int_comparator(a: &Value, b: &Value) -> Result<Ordering, NotAnInt> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        _ => Err(NotAnInt),
    }
}

pub fn ints<I: IntoIterator<Item = i64>>(values: I) -> Vec<Value> {
    values.into_iter().map(Value::Int).collect()
}

pub struct TestSequences {
    /// `[5, 1, 2, 6, 7, 3, 4, 8]`
    pub shuffled: Vec<Value>,
    /// `[8, 7, 6, 5, 4, 3, 2, 1]`
    pub reversed: Vec<Value>,
    /// `[5, 1, 2, 6, "a", 3, 4, 8]`
    pub mixed: Vec<Value>,
    /// `[1, 2, 3, 4, 5, 6, 7, 8]`
    pub sorted: Vec<Value>,
}

impl TestSequences {
    pub fn new() -> Self {
        let mut mixed = ints([5, 1, 2, 6]);
        mixed.push(Value::from("a"));
        mixed.extend(ints([3, 4, 8]));

        TestSequences {
            shuffled: ints([5, 1, 2, 6, 7, 3, 4, 8]),
            reversed: ints((1..=8).rev()),
            mixed,
            sorted: ints(1..=8),
        }
    }
}

impl Default for TestSequences {
    fn default() -> Self {
        Self::new()
    }
}

/// `len` random integers drawn from `-range..range`, so duplicates show up once `len` is large.
pub fn random_ints(len: usize, range: i64) -> Vec<i64> {
    let mut random = rand::thread_rng();
    (0..len).map(|_| random.gen_range(-range..range)).collect()
}

/// `0..len` in a random order.
pub fn shuffled_range(len: i64) -> Vec<i64> {
    let mut values = (0..len).collect::<Vec<_>>();
    values.shuffle(&mut rand::thread_rng());
    values
}
