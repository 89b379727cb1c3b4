//! Shared numeric utilities for the solutions.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Sub;
use std::str::FromStr;

use aoc_framework::parsing::{ParseContextError, parse_with_context};

/// The absolute difference of two values, without requiring a signed type.
pub fn absolute_difference<T>(a: T, b: T) -> T
where
    T: PartialOrd + Sub<Output = T>,
{
    if a >= b { a - b } else { b - a }
}

/// Count the decimal digits of a value; zero has one digit.
#[must_use]
pub fn digit_count(value: u64) -> u32 {
    if value == 0 { 1 } else { value.ilog10() + 1 }
}

/// Append the decimal digits of `suffix` to `value`, so
/// `concatenate(12, 345)` is `12345`.
///
/// Returns `None` on overflow.
#[must_use]
pub fn concatenate(value: u64, suffix: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(digit_count(suffix))?;
    value.checked_mul(shift)?.checked_add(suffix)
}

/// Count occurrences of each distinct item in a sequence.
pub fn histogram<T, I>(items: I) -> HashMap<T, u64>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Parse a whitespace-separated list of numbers.
///
/// # Errors
///
/// Returns a [`ParseContextError`] naming the first token that fails to
/// parse.
pub fn parse_number_list<T>(list: &str) -> Result<Vec<T>, ParseContextError<T::Err>>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    list.split_whitespace().map(parse_with_context).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_difference_ignores_argument_order() {
        assert_eq!(absolute_difference(3u32, 7u32), 4);
        assert_eq!(absolute_difference(7u32, 3u32), 4);
        assert_eq!(absolute_difference(5u32, 5u32), 0);
    }

    #[test]
    fn digit_count_spans_magnitudes() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn concatenate_appends_decimal_digits() {
        assert_eq!(concatenate(12, 345), Some(12_345));
        assert_eq!(concatenate(1, 0), Some(10));
        assert_eq!(concatenate(486, 1), Some(4861));
    }

    #[test]
    fn concatenate_checks_overflow() {
        assert_eq!(concatenate(u64::MAX / 10, 99), None);
    }

    #[test]
    fn histogram_counts_occurrences() {
        let counts = histogram([3u32, 4, 3, 3]);
        assert_eq!(counts.get(&3), Some(&3));
        assert_eq!(counts.get(&4), Some(&1));
        assert_eq!(counts.get(&5), None);
    }

    #[test]
    fn number_list_parses_or_names_offender() {
        let values: Vec<u32> = parse_number_list("1 2 3").expect("list should parse");
        assert_eq!(values, vec![1, 2, 3]);

        let result: Result<Vec<u32>, _> = parse_number_list("1 x 3");
        let Err(error) = result else {
            panic!("list with a bad token should fail");
        };
        assert_eq!(error.to_string(), "failed to parse string: \"x\"");
    }
}
