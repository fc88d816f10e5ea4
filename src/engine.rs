use std::fmt::Display;

use tracing::debug;

use crate::series::{fibonacci, fibonacci_big, fibonacci_checked, format_series, SeriesError};
use crate::string_util::{join_with, split_words};

/// Title phrase leading every report.
pub const REPORT_TITLE: &str = "Example Engine Report";

// Renders `<title>: [<series>]`. The title goes through a split/join round
// trip, which normalizes any whitespace runs to single spaces.
fn compose<T: Display>(values: &[T]) -> String {
    let series_text = format_series(values);
    let words = split_words(REPORT_TITLE);
    format!("{}: [{}]", join_with(&words, " "), series_text)
}

/// Builds the report for the first `count` Fibonacci numbers.
///
/// # Example
/// ```
/// use series_report::engine::build_report;
/// assert_eq!(build_report(5), "Example Engine Report: [0,1,1,2,3]");
/// assert_eq!(build_report(0), "Example Engine Report: []");
/// ```
pub fn build_report(count: i32) -> String {
    debug!(count, "Building report");
    compose(&fibonacci(count))
}

/// Builds the report over [`fibonacci_checked`], failing rather than
/// printing wrapped values.
pub fn build_report_checked(count: i32) -> Result<String, SeriesError> {
    debug!(count, "Building checked report");
    let values = fibonacci_checked(count)?;
    Ok(compose(&values))
}

/// Builds the report over [`fibonacci_big`]; exact for every `count`.
pub fn build_big_report(count: i32) -> String {
    debug!(count, "Building big report");
    compose(&fibonacci_big(count))
}
