//! Header and footer composition.

use super::ordered;
use crate::model::{ContentKind, Entry};

/// Render header or footer entries in position order.
///
/// Text entries become styled paragraphs; markup, images and page number
/// fields are already rendered and are appended verbatim.
pub fn compose_section(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in ordered(entries) {
        match entry.kind {
            ContentKind::PlainText | ContentKind::Paragraph => {
                out.push_str(&entry.style.wrap(&entry.content))
            }
            ContentKind::InlineMarkup
            | ContentKind::Image
            | ContentKind::PageNumber
            | ContentKind::Page { .. } => out.push_str(&entry.content),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, ParagraphStyle};

    fn text(content: &str, position: u32) -> Entry {
        Entry::new(ContentKind::PlainText, content, position)
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(compose_section(&[]), "");
    }

    #[test]
    fn test_orders_by_position() {
        let entries = vec![text("third", 3), text("first", 1), text("second", 2)];
        assert_eq!(
            compose_section(&entries),
            "<p align='left'>first</p><p align='left'>second</p><p align='left'>third</p>"
        );
    }

    #[test]
    fn test_unordered_entries_come_first_in_insertion_order() {
        let entries = vec![text("b", 0), text("z", 1), text("a", 0)];
        assert_eq!(
            compose_section(&entries),
            "<p align='left'>b</p><p align='left'>a</p><p align='left'>z</p>"
        );
    }

    #[test]
    fn test_markup_is_verbatim() {
        let style = ParagraphStyle {
            alignment: Alignment::Right,
            font_size: Some("10pt".into()),
            font_family: Some("Georgia".into()),
        };
        let entries = vec![
            Entry::new(ContentKind::InlineMarkup, "<i>Draft</i>", 2).with_style(style.clone()),
            text("Confidential", 1).with_style(style),
        ];
        assert_eq!(
            compose_section(&entries),
            "<p align='right' style='font-size:10pt;font-family:Georgia, Times New Roman;'>Confidential</p><i>Draft</i>"
        );
    }
}
