//! HTML escaping for literal text.

/// Escape special HTML characters.
///
/// Every literal text node passes through here before reaching the output,
/// so author text containing `<`, `>`, or `&` displays as written instead
/// of being interpreted as markup.
///
/// # Examples
///
/// ```
/// use folio::html::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("Q&A"), "Q&amp;A");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
