//! # Series Report Library
//!
//! This library computes a Fibonacci sequence, formats it as text and wraps it in a short
//! printable report. Every function is a synchronous, stateless transformation from its inputs
//! to an owned value.
//!
//! ## Overview of Modules
//!
//! ### `string_util`
//! - `split_words`: splits a text into its whitespace-delimited words.
//! - `join_with`: joins strings with a delimiter, no leading or trailing delimiter.
//!
//! ### `series`
//! - `fibonacci`: the first `n` Fibonacci numbers as `i32`, wrapping on overflow.
//! - `fibonacci_checked`: same, but returns `SeriesError::Overflow` instead of wrapping.
//! - `fibonacci_big`: arbitrary-precision values backed by `num-bigint`.
//! - `format_series`: comma-separated decimal rendering of any `Display` values.
//!
//! ### `engine`
//! - `build_report`: `"Example Engine Report: [<series>]"`, plus checked and big variants.
//!
//! ### `printer`
//! - `render_output`: the report prefixed with `"Output => "`.
//!
//! ## Logging
//! Generation and report building emit `tracing` events at `debug` and `trace` level. The
//! library never installs a subscriber.
//!
//! ## Usage Example
//! ```rust
//! use series_report::printer::render_output;
//! assert_eq!(render_output(5), "Output => Example Engine Report: [0,1,1,2,3]");
//! assert_eq!(render_output(0), "Output => Example Engine Report: []");
//! ```

pub mod engine;
pub mod printer;
pub mod series;
pub mod string_util;
