//! Markup safety: escaping, validation and value rules.
//!
//! Caller input is ambiguous: a sentence may contain a stray `<`, or it may
//! be a deliberate markup fragment. Only provably well-formed markup built
//! from recognized elements is embedded verbatim; everything else is escaped.

mod escape;
pub mod rules;
mod validate;

pub use escape::escape;
pub use validate::{classify, is_known_element, validate, Classified, Validation};

/// Elements the Word HTML importer understands.
pub const KNOWN_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "big", "blockquote", "br", "caption", "center", "cite", "code", "col",
    "colgroup", "dd", "del", "dfn", "div", "dl", "dt", "em", "font", "h1", "h2", "h3", "h4", "h5",
    "h6", "hr", "i", "img", "ins", "kbd", "li", "mark", "o:p", "ol", "p", "pre", "q", "s", "samp",
    "small", "span", "strike", "strong", "sub", "sup", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "tt", "u", "ul", "var", "wbr",
];

/// Elements that may appear without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &["br", "col", "hr", "img", "wbr"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_are_known() {
        for name in VOID_ELEMENTS {
            assert!(is_known_element(name), "{} should be known", name);
        }
    }

    #[test]
    fn test_office_paragraph_known() {
        assert!(is_known_element("o:p"));
        assert!(!is_known_element("script"));
        assert!(!is_known_element("style"));
    }
}
