//! Escaping utilities for Markdown report output.
//!
//! Class names, type strings and summaries come straight from user-provided
//! models. Generic types (`Map<K, V>`) would be swallowed as HTML tags by
//! most Markdown renderers and a `|` in a type would break a table row, so
//! every such value goes through one of these functions first.

/// Escape a string for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use uml_check::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("Map<String, List<Order>>"),
///     "Map&lt;String, List&lt;Order&gt;&gt;");
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for Markdown running text and headings.
///
/// # Examples
///
/// ```
/// use uml_check::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("_internal"), "\\_internal");
/// assert_eq!(escape_markdown_inline("~ helper"), "\\~ helper");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Wrap a value in a code span, or `-` when it is blank.
///
/// Backticks inside the value are replaced so the span cannot be closed early.
pub fn code_span(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    let cleaned: String = trimmed
        .chars()
        .map(|c| match c {
            '`' => '\'',
            '|' => '/',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect();
    format!("`{cleaned}`")
}
