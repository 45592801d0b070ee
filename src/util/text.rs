/// Removes every whitespace character from `source`.
///
/// Whitespace is never significant inside an expression, so the tokenizer
/// only ever sees the compacted text.
///
/// ## Example
/// ```
/// use rpnexpr::util::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" a >\tb\n"), "a>b");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    out.extend(source.chars().filter(|ch| !ch.is_whitespace()));
    out
}
