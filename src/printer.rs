use crate::engine::{build_report, build_report_checked};
use crate::series::SeriesError;

/// Label prepended to every rendered report.
pub const OUTPUT_LABEL: &str = "Output => ";

/// Renders the displayable output line for the first `count` Fibonacci
/// numbers.
///
/// # Example
/// ```
/// use series_report::printer::render_output;
/// assert_eq!(render_output(5), "Output => Example Engine Report: [0,1,1,2,3]");
/// ```
pub fn render_output(count: i32) -> String {
    format!("{OUTPUT_LABEL}{}", build_report(count))
}

pub fn render_output_checked(count: i32) -> Result<String, SeriesError> {
    Ok(format!("{OUTPUT_LABEL}{}", build_report_checked(count)?))
}
