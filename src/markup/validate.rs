//! Markup validation and text-vs-markup classification.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{escape, rules, KNOWN_ELEMENTS, VOID_ELEMENTS};
use crate::error::{Error, Result};

/// Synthetic root wrapped around caller input so it parses as one fragment.
const FRAGMENT_ROOT: &str = "todoc-fragment";

/// Outcome of validating a markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// The input parsed as a balanced fragment
    pub well_formed: bool,

    /// First element name outside the recognized set, if any
    pub unknown_element: Option<String>,
}

impl Validation {
    fn malformed() -> Self {
        Self {
            well_formed: false,
            unknown_element: None,
        }
    }

    /// Check whether an unrecognized element was found.
    pub fn contains_unknown_element(&self) -> bool {
        self.unknown_element.is_some()
    }

    /// Well-formed and made only of recognized elements.
    pub fn is_trusted(&self) -> bool {
        self.well_formed && self.unknown_element.is_none()
    }
}

/// Caller input after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Verified markup, to be embedded verbatim
    Markup(String),
    /// Plain text, already escaped
    Text(String),
}

impl Classified {
    /// Check if the input was kept as markup.
    pub fn is_markup(&self) -> bool {
        matches!(self, Classified::Markup(_))
    }

    /// The content to store.
    pub fn into_content(self) -> String {
        match self {
            Classified::Markup(s) | Classified::Text(s) => s,
        }
    }
}

/// Strictly parse `input` as a standalone fragment and check every element
/// name against [`KNOWN_ELEMENTS`].
///
/// # Examples
///
/// ```
/// use todoc::markup::validate;
///
/// assert!(validate("<b>Bold</b>").is_trusted());
/// assert!(!validate("<b>unclosed").well_formed);
/// assert!(validate("<script>x</script>").contains_unknown_element());
/// ```
pub fn validate(input: &str) -> Validation {
    let wrapped = format!("<{FRAGMENT_ROOT}>{input}</{FRAGMENT_ROOT}>");

    match collect_elements(&wrapped) {
        Ok(names) => Validation {
            well_formed: true,
            unknown_element: names.into_iter().find(|name| !is_known_element(name)),
        },
        Err(reason) => {
            log::debug!("Markup is not well-formed: {}", reason);
            Validation::malformed()
        }
    }
}

/// Decide whether caller input is trusted markup or plain text.
///
/// Input without anything tag-shaped, or that fails to parse, is escaped and
/// returned as text. Well-formed input using an unknown element is rejected.
pub fn classify(input: &str) -> Result<Classified> {
    if !rules::looks_like_markup(input) {
        return Ok(Classified::Text(escape(input)));
    }

    let validation = validate(input);
    if !validation.well_formed {
        return Ok(Classified::Text(escape(input)));
    }
    if let Some(name) = validation.unknown_element {
        return Err(Error::UnsafeMarkup(name));
    }

    Ok(Classified::Markup(input.to_string()))
}

/// Check a name against the recognized element set (case-insensitive).
pub fn is_known_element(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    KNOWN_ELEMENTS.contains(&lower.as_str())
}

fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Walk the fragment, returning every element name below the synthetic root.
fn collect_elements(source: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(source);
    // Balance is tracked here so that void elements may stay unclosed.
    reader.config_mut().check_end_names = false;

    let mut open: Vec<String> = Vec::new();
    let mut names = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e)?;
                if !root_seen {
                    root_seen = true;
                    open.push(name);
                    continue;
                }
                if !is_void_element(&name) {
                    open.push(name.clone());
                }
                names.push(name);
            }
            Ok(Event::Empty(e)) => names.push(element_name(&e)?),
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_ascii_lowercase();
                match open.last() {
                    Some(top) if *top == name => {
                        open.pop();
                    }
                    _ if is_void_element(&name) => {}
                    Some(top) => return Err(format!("</{}> closes <{}>", name, top)),
                    None => return Err(format!("unmatched </{}>", name)),
                }
            }
            Ok(Event::Decl(_)) | Ok(Event::DocType(_)) => {
                return Err("document prolog inside a fragment".to_string());
            }
            // HTML treats these as bogus comments that end at the first `>`.
            Ok(Event::CData(_)) => return Err("CDATA section inside a fragment".to_string()),
            Ok(Event::PI(_)) => return Err("processing instruction inside a fragment".to_string()),
            Ok(Event::Comment(e)) => check_comment(&e)?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    if let Some(top) = open.last() {
        return Err(format!("<{}> is never closed", top));
    }

    Ok(names)
}

/// Reject comments that an HTML parser would close earlier than XML does.
fn check_comment(text: &[u8]) -> std::result::Result<(), String> {
    if text.starts_with(b">") || text.starts_with(b"->") || text.windows(2).any(|w| w == b"--") {
        return Err("comment that HTML closes early".to_string());
    }
    Ok(())
}

/// Lowercased element name; attribute syntax is checked on the way.
fn element_name(start: &BytesStart<'_>) -> std::result::Result<String, String> {
    for attr in start.attributes() {
        attr.map_err(|e| e.to_string())?;
    }
    Ok(String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_well_formed() {
        let v = validate("<b>Bold</b>");
        assert!(v.well_formed);
        assert!(!v.contains_unknown_element());

        let v = validate("<p align='center'>Hi <i>there</i></p><hr/>");
        assert!(v.is_trusted());
    }

    #[test]
    fn test_validate_malformed() {
        assert!(!validate("<b>unclosed").well_formed);
        assert!(!validate("<b><i>crossed</b></i>").well_formed);
        assert!(!validate("stray</b>").well_formed);
        assert!(!validate("<p align=left>unquoted</p>").well_formed);
        assert!(!validate("<p").well_formed);
    }

    #[test]
    fn test_validate_hidden_elements() {
        let inputs = [
            "<b>x</b><![CDATA[><script>alert(1)</script>]]>",
            "<b>x</b><!--><script>alert(1)</script>-->",
            "<b>x</b><!---><script>alert(1)</script>-->",
            "<b>x</b><!-- a -- b -->",
            "<b>x</b><?xml-stylesheet href='evil.xsl'?>",
        ];
        for input in inputs {
            assert!(!validate(input).well_formed, "{} should be rejected", input);

            let c = classify(input).unwrap();
            assert!(!c.is_markup());
            assert!(!c.into_content().contains('<'));
        }
    }

    #[test]
    fn test_validate_plain_comment() {
        assert!(validate("<b>x</b><!-- note -->").is_trusted());
    }

    #[test]
    fn test_validate_void_elements() {
        assert!(validate("line<br>next").is_trusted());
        assert!(validate("line<br/>next").is_trusted());
        assert!(validate("<p>a<br></br>b</p>").is_trusted());
        assert!(validate("<img src='x.png'>").is_trusted());
    }

    #[test]
    fn test_validate_unknown_element() {
        let v = validate("<p><script>alert(1)</script></p>");
        assert!(v.well_formed);
        assert_eq!(v.unknown_element.as_deref(), Some("script"));

        let v = validate("<blink>old</blink>");
        assert!(v.contains_unknown_element());
    }

    #[test]
    fn test_validate_cannot_escape_root() {
        let v = validate(&format!("</{FRAGMENT_ROOT}><{FRAGMENT_ROOT}>x"));
        assert!(!v.is_trusted());
    }

    #[test]
    fn test_validate_case_insensitive_names() {
        assert!(validate("<B>Bold</B>").is_trusted());
        assert!(validate("<P>para</p>").is_trusted());
    }

    #[test]
    fn test_classify_markup() {
        let c = classify("<b>Bold</b>").unwrap();
        assert_eq!(c, Classified::Markup("<b>Bold</b>".to_string()));
    }

    #[test]
    fn test_classify_plain_text() {
        let c = classify("Hello & welcome").unwrap();
        assert_eq!(c, Classified::Text("Hello &amp; welcome".to_string()));
    }

    #[test]
    fn test_classify_malformed_falls_back_to_text() {
        let c = classify("<b>unclosed").unwrap();
        assert!(!c.is_markup());
        assert_eq!(c.into_content(), "&lt;b&gt;unclosed");
    }

    #[test]
    fn test_classify_rejects_unknown() {
        let err = classify("<iframe src='x'></iframe>").unwrap_err();
        assert!(matches!(err, Error::UnsafeMarkup(ref name) if name == "iframe"));
    }
}
