//! Body composition with hard page breaks.

use super::ordered;
use super::result::BuildStats;
use crate::model::{ContentKind, Entry};

/// Line break placed around inline markup and images.
pub const LINE_BREAK: &str = "<br/>";

/// Hard page break understood by the word processor.
pub const PAGE_BREAK: &str = "<br clear='all' style='page-break-before:always' />";

/// Render body entries in position order.
pub fn compose_body(entries: &[Entry]) -> String {
    compose_body_with_stats(entries, &mut BuildStats::default())
}

/// Render body entries and record paragraph, image and page counts.
///
/// A page entry starts a new page at its sorted position. The break is
/// skipped when nothing precedes it, since the content is already at the
/// top of the first page.
pub fn compose_body_with_stats(entries: &[Entry], stats: &mut BuildStats) -> String {
    let mut out = String::new();
    stats.add_page();

    for entry in ordered(entries) {
        match entry.kind {
            ContentKind::Paragraph | ContentKind::PlainText => {
                out.push_str(&entry.style.wrap(&entry.content));
                stats.add_paragraph();
            }
            ContentKind::Image | ContentKind::InlineMarkup => {
                out.push_str(LINE_BREAK);
                out.push_str(&entry.content);
                out.push_str(LINE_BREAK);
                if entry.is_image() {
                    stats.add_image();
                }
            }
            ContentKind::Page { markup } => {
                if !out.is_empty() {
                    out.push_str(PAGE_BREAK);
                    stats.add_page();
                }
                if markup {
                    out.push_str(&entry.content);
                } else {
                    out.push_str(&entry.style.wrap(&entry.content));
                }
            }
            ContentKind::PageNumber => out.push_str(&entry.content),
        }
    }

    log::debug!(
        "Composed body: {} entries, {} pages",
        entries.len(),
        stats.page_count
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, ParagraphStyle};

    fn paragraph(content: &str, position: u32) -> Entry {
        Entry::new(ContentKind::Paragraph, content, position)
    }

    fn page(content: &str, position: u32, markup: bool) -> Entry {
        Entry::new(ContentKind::Page { markup }, content, position)
    }

    #[test]
    fn test_paragraph_alignment() {
        let entry = paragraph("Hello &amp; welcome", 0).with_style(ParagraphStyle {
            alignment: Alignment::Justify,
            ..Default::default()
        });
        assert_eq!(
            compose_body(&[entry]),
            "<p align='justify'>Hello &amp; welcome</p>"
        );
    }

    #[test]
    fn test_inline_markup_between_line_breaks() {
        let entries = vec![Entry::new(ContentKind::InlineMarkup, "<b>Bold</b>", 0)];
        assert_eq!(compose_body(&entries), "<br/><b>Bold</b><br/>");
    }

    #[test]
    fn test_page_splits_content() {
        let entries = vec![
            paragraph("after", 10),
            page("<h1>Chapter</h1>", 5, true),
            paragraph("before", 1),
        ];
        let mut stats = BuildStats::default();
        let out = compose_body_with_stats(&entries, &mut stats);

        assert_eq!(
            out,
            format!(
                "<p align='left'>before</p>{}<h1>Chapter</h1><p align='left'>after</p>",
                PAGE_BREAK
            )
        );
        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.paragraph_count, 2);
    }

    #[test]
    fn test_leading_page_has_no_break() {
        let entries = vec![page("Cover", 1, false), page("Second", 2, false)];
        let out = compose_body(&entries);
        assert_eq!(
            out,
            format!("<p align='left'>Cover</p>{}<p align='left'>Second</p>", PAGE_BREAK)
        );
        assert_eq!(out.matches(PAGE_BREAK).count(), 1);
    }

    #[test]
    fn test_image_counted() {
        let entries = vec![Entry::new(ContentKind::Image, "<div align='left'></div>", 0)];
        let mut stats = BuildStats::default();
        compose_body_with_stats(&entries, &mut stats);
        assert_eq!(stats.image_count, 1);
        assert_eq!(stats.page_count, 1);
    }
}
