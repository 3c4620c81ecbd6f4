//! Escaping of reserved markup characters.

/// Escape the five reserved markup characters in plain text.
///
/// The scan is a single left-to-right pass, so `&` inside already escaped
/// input is escaped again. Raw text must go through this exactly once.
///
/// # Examples
///
/// ```
/// use todoc::markup::escape;
///
/// assert_eq!(escape("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_reserved() {
        assert_eq!(escape("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
    }

    #[test]
    fn test_escape_plain_passthrough() {
        assert_eq!(escape("Hello world"), "Hello world");
        assert_eq!(escape(""), "");
        assert_eq!(escape("café ✓"), "café ✓");
    }

    #[test]
    fn test_escape_not_idempotent() {
        let once = escape("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(escape(&once), "a &amp;amp; b");
    }
}
