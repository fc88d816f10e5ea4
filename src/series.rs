use std::fmt::Display;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::string_util::join_with;

/// Delimiter placed between formatted series values.
pub const SERIES_DELIMITER: &str = ",";

/// Number of leading Fibonacci terms representable as `i32`. F(47) is the
/// first value past `i32::MAX`.
pub const I32_TERM_LIMIT: usize = 47;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    #[error("Fibonacci term {index} does not fit in i32")]
    Overflow { index: usize },
}

// Negative counts are a defined empty case, not an error.
fn term_count(count: i32) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Generates the first `count` Fibonacci numbers as `i32`.
///
/// Each value is the sum of the two before it, starting from `0, 1`. A
/// `count` of zero or less yields an empty vector. Terms past
/// [`I32_TERM_LIMIT`] wrap around; use [`fibonacci_checked`] to reject them
/// or [`fibonacci_big`] for exact values.
///
/// # Example
/// ```
/// use series_report::series::fibonacci;
/// assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
/// assert!(fibonacci(-3).is_empty());
/// ```
pub fn fibonacci(count: i32) -> Vec<i32> {
    let n = term_count(count);
    let mut values: Vec<i32> = Vec::with_capacity(n);
    for i in 0..n {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => values[i - 1].wrapping_add(values[i - 2]),
        };
        values.push(next);
    }

    if n > I32_TERM_LIMIT {
        debug!(count, "Fibonacci series wrapped past i32::MAX");
    }
    trace!(count, len = values.len(), "Generated Fibonacci series");
    values
}

/// Like [`fibonacci`], but fails instead of wrapping.
///
/// # Errors
/// Returns [`SeriesError::Overflow`] carrying the index of the first term
/// that exceeds `i32::MAX`.
///
/// # Example
/// ```
/// use series_report::series::{fibonacci_checked, SeriesError};
/// assert_eq!(fibonacci_checked(3), Ok(vec![0, 1, 1]));
/// assert_eq!(fibonacci_checked(48), Err(SeriesError::Overflow { index: 47 }));
/// ```
pub fn fibonacci_checked(count: i32) -> Result<Vec<i32>, SeriesError> {
    let n = term_count(count);
    let mut values: Vec<i32> = Vec::with_capacity(n.min(I32_TERM_LIMIT));
    for i in 0..n {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => values[i - 1]
                .checked_add(values[i - 2])
                .ok_or(SeriesError::Overflow { index: i })?,
        };
        values.push(next);
    }

    trace!(count, len = values.len(), "Generated checked Fibonacci series");
    Ok(values)
}

/// Generates the first `count` Fibonacci numbers with arbitrary precision.
///
/// # Example
/// ```
/// use series_report::series::fibonacci_big;
/// use num_bigint::BigUint;
/// let fib_sequence = fibonacci_big(100);
/// assert_eq!(fib_sequence[99], BigUint::parse_bytes(b"218922995834555169026", 10).unwrap());
/// ```
pub fn fibonacci_big(count: i32) -> Vec<BigUint> {
    let n = term_count(count);
    let mut fib_sequence: Vec<BigUint> = Vec::with_capacity(n);
    if n > 0 {
        fib_sequence.push(BigUint::zero());
    }
    if n > 1 {
        fib_sequence.push(BigUint::one());
    }
    for i in 2..n {
        let next_value = &fib_sequence[i - 1] + &fib_sequence[i - 2];
        fib_sequence.push(next_value);
    }

    trace!(count, len = fib_sequence.len(), "Generated big Fibonacci series");
    fib_sequence
}

/// Formats `values` as decimal text separated by [`SERIES_DELIMITER`].
///
/// # Example
/// ```
/// use series_report::series::format_series;
/// assert_eq!(format_series(&[0, 1, 1, 2, 3]), "0,1,1,2,3");
/// assert_eq!(format_series::<i32>(&[]), "");
/// ```
pub fn format_series<T: Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    join_with(&parts, SERIES_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(i32::MIN; "min")]
    #[test_case(-1; "negative")]
    #[test_case(0; "zero")]
    fn non_positive_count_is_empty(count: i32) {
        assert!(fibonacci(count).is_empty());
        assert_eq!(fibonacci_checked(count), Ok(vec![]));
        assert!(fibonacci_big(count).is_empty());
    }

    #[test_case(1 => vec![0]; "one")]
    #[test_case(2 => vec![0, 1]; "two")]
    #[test_case(5 => vec![0, 1, 1, 2, 3]; "five")]
    #[test_case(10 => vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]; "ten")]
    fn fibonacci_prefixes(count: i32) -> Vec<i32> {
        fibonacci(count)
    }

    #[test]
    fn last_representable_term() {
        let values = fibonacci(I32_TERM_LIMIT as i32);
        assert_eq!(values.len(), I32_TERM_LIMIT);
        assert_eq!(values[46], 1_836_311_903);
    }

    #[test]
    fn wraps_past_i32_max() {
        let values = fibonacci(48);
        // 2_971_215_073 - 2^32
        assert_eq!(values[47], -1_323_752_223);
    }

    #[test]
    fn checked_matches_wrapping_within_limit() {
        assert_eq!(
            fibonacci_checked(I32_TERM_LIMIT as i32),
            Ok(fibonacci(I32_TERM_LIMIT as i32))
        );
    }

    #[test_case(48; "first overflowing count")]
    #[test_case(1000; "far past the limit")]
    #[test_case(i32::MAX; "max count")]
    fn checked_reports_first_overflow(count: i32) {
        assert_eq!(
            fibonacci_checked(count),
            Err(SeriesError::Overflow { index: 47 })
        );
    }

    #[test]
    fn overflow_error_message() {
        let err = SeriesError::Overflow { index: 47 };
        assert_eq!(err.to_string(), "Fibonacci term 47 does not fit in i32");
    }

    #[test]
    fn big_agrees_with_i32_within_limit() {
        let small = fibonacci(I32_TERM_LIMIT as i32);
        let big = fibonacci_big(I32_TERM_LIMIT as i32);
        for (a, b) in small.iter().zip(&big) {
            assert_eq!(BigUint::from(*a as u32), *b);
        }
    }

    #[test]
    fn big_keeps_exact_value_past_limit() {
        let big = fibonacci_big(48);
        assert_eq!(big[47], BigUint::from(2_971_215_073u64));
    }

    #[test]
    fn format_series_cases() {
        assert_eq!(format_series::<i32>(&[]), "");
        assert_eq!(format_series(&[7]), "7");
        assert_eq!(format_series(&[0, 1, 1, 2, 3]), "0,1,1,2,3");
        assert_eq!(format_series(&[-5, 12]), "-5,12");
        assert_eq!(format_series(&fibonacci_big(4)), "0,1,1,2");
    }

    proptest! {
        #[test]
        fn follows_recurrence(count in 2i32..=I32_TERM_LIMIT as i32) {
            let values = fibonacci(count);

            prop_assert_eq!(values.len(), count as usize);
            for i in 2..values.len() {
                prop_assert_eq!(values[i], values[i - 1] + values[i - 2]);
            }
        }

        #[test]
        fn formatted_series_splits_back(count in 0i32..60) {
            let values = fibonacci(count);
            let text = format_series(&values);
            let parsed: Vec<i32> = if text.is_empty() {
                vec![]
            } else {
                text.split(SERIES_DELIMITER).map(|v| v.parse().unwrap()).collect()
            };

            prop_assert_eq!(parsed, values);
        }
    }
}
