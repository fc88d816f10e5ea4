// Word separators: the C-locale `isspace` set. Note `\x0B` is not covered by
// `char::is_ascii_whitespace`.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Splits `input` into its whitespace-delimited words.
///
/// Runs of whitespace are skipped, so leading, trailing and repeated
/// separators never produce empty words.
///
/// # Example
/// ```
/// use series_report::string_util::split_words;
/// assert_eq!(split_words("  a  b "), vec!["a", "b"]);
/// assert!(split_words("").is_empty());
/// ```
pub fn split_words(input: &str) -> Vec<String> {
    input
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Concatenates `parts` in order with `delim` between consecutive elements.
///
/// # Example
/// ```
/// use series_report::string_util::join_with;
/// assert_eq!(join_with(&["a", "b", "c"], "-"), "a-b-c");
/// assert_eq!(join_with::<&str>(&[], ","), "");
/// ```
pub fn join_with<S: AsRef<str>>(parts: &[S], delim: &str) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push_str(delim);
        }
        joined.push_str(part.as_ref());
    }
    joined
}
