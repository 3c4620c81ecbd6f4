//! Integration tests for ordering, escaping and the build lifecycle.

use todoc::render::PAGE_BREAK;
use todoc::{
    Alignment, BodyKind, DocBuilder, EntryOptions, Error, LayoutConfig, PageNumberFormat, Region,
    Section, TextKind,
};

fn paragraph(builder: &mut DocBuilder, text: &str, position: u32) {
    builder
        .add_body_entry(BodyKind::Paragraph, text, &EntryOptions::new().at(position))
        .unwrap();
}

fn body_of(markup: &str) -> &str {
    let start = markup.find("<div class='Section1'>").unwrap() + "<div class='Section1'>".len();
    let end = markup.find("<table id='hrdftrtbl'").unwrap();
    &markup[start..end]
}

#[test]
fn test_positions_render_ascending() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "three", 3);
    paragraph(&mut builder, "one", 1);
    paragraph(&mut builder, "two", 2);

    let doc = builder.build(None, None);
    assert_eq!(
        body_of(doc.markup()),
        "<p align='left'>one</p><p align='left'>two</p><p align='left'>three</p>"
    );
}

#[test]
fn test_unordered_entries_keep_insertion_order() {
    let mut builder = DocBuilder::new();
    for text in ["a", "b", "c"] {
        builder
            .add_body_entry(BodyKind::Paragraph, text, &EntryOptions::new())
            .unwrap();
    }

    let doc = builder.build(None, None);
    assert_eq!(
        body_of(doc.markup()),
        "<p align='left'>a</p><p align='left'>b</p><p align='left'>c</p>"
    );
}

#[test]
fn test_duplicate_position_keeps_first() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "kept", 4);

    let err = builder
        .add_body_entry(BodyKind::Paragraph, "dropped", &EntryOptions::new().at(4))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicatePosition { position: 4, .. }));
    assert_eq!(builder.store().len(Region::Body), 1);

    let doc = builder.build(None, None);
    assert!(doc.markup().contains("kept"));
    assert!(!doc.markup().contains("dropped"));
}

#[test]
fn test_text_is_escaped_with_alignment() {
    let mut builder = DocBuilder::new();
    builder
        .add_body_entry(
            BodyKind::Paragraph,
            "Hello & welcome",
            &EntryOptions::new().with_alignment(Alignment::Center),
        )
        .unwrap();

    let doc = builder.build(None, None);
    assert_eq!(body_of(doc.markup()), "<p align='center'>Hello &amp; welcome</p>");
}

#[test]
fn test_markup_is_byte_identical() {
    let mut builder = DocBuilder::new();
    builder
        .add_section_entry(Section::Header, TextKind::Html, "<b>Bold</b>", &EntryOptions::new())
        .unwrap();

    let doc = builder.build(None, None);
    assert!(doc
        .markup()
        .contains("<table border='0' width='100%'><b>Bold</b></table>"));
}

#[test]
fn test_malformed_markup_is_escaped() {
    let mut builder = DocBuilder::new();
    builder
        .add_section_entry(Section::Footer, TextKind::Text, "<b>unclosed", &EntryOptions::new())
        .unwrap();

    let doc = builder.build(None, None);
    assert!(doc.markup().contains("<p align='left'>&lt;b&gt;unclosed</p>"));
}

#[test]
fn test_unknown_element_rejected() {
    let mut builder = DocBuilder::new();
    let err = builder
        .add_body_entry(
            BodyKind::Paragraph,
            "<marquee>hi</marquee>",
            &EntryOptions::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnsafeMarkup(ref name) if name == "marquee"));
    assert!(builder.store().is_empty());
}

#[test]
fn test_empty_builder_yields_complete_wrapper() {
    let doc = DocBuilder::new().build(None, None);
    let markup = doc.markup();

    assert_eq!(doc.file_name, "document.doc");
    assert_eq!(doc.mime_type, "application/msword");
    assert!(doc.bytes.starts_with("\u{feff}".as_bytes()));
    assert_eq!(body_of(markup), "");
    assert!(markup.contains("<div style='mso-element:header' id='h1'>"));
    assert!(markup.contains("<div style='mso-element:footer' id='f1'>"));
    assert!(markup.contains("@page Section1{size:8.5in 11in;margin:1in 1in 1in 1in;"));
    assert_eq!(doc.stats.page_count, 1);
}

#[test]
fn test_second_build_is_empty() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "content", 1);
    builder
        .add_page_number(Section::Footer, PageNumberFormat::Number, &EntryOptions::new())
        .unwrap();

    let first = builder.build(None, None);
    let second = builder.build(None, None);

    assert!(first.markup().contains("mso-field-code: PAGE"));
    assert!(!second.markup().contains("content"));
    assert!(!second.markup().contains("mso-field-code"));
    assert_eq!(second.markup(), DocBuilder::new().build(None, None).markup());
}

#[test]
fn test_page_entry_splits_body() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "after", 10);
    builder
        .add_body_entry(BodyKind::Page, "<h1>Part two</h1>", &EntryOptions::new().at(5))
        .unwrap();
    paragraph(&mut builder, "before", 1);

    let doc = builder.build(None, None);
    let body = body_of(doc.markup());

    let before = body.find("before").unwrap();
    let brk = body.find(PAGE_BREAK).unwrap();
    let page = body.find("<h1>Part two</h1>").unwrap();
    let after = body.find("after").unwrap();
    assert!(before < brk && brk < page && page < after);
    assert_eq!(doc.stats.page_count, 2);
}

#[test]
fn test_fonts_in_paragraph_style() {
    let mut builder = DocBuilder::new();
    let options = EntryOptions::new()
        .with_alignment(Alignment::Right)
        .with_font_size("1.5em")
        .with_font_family("Verdana");
    builder
        .add_section_entry(Section::Header, TextKind::Text, "Title", &options)
        .unwrap();

    let doc = builder.build(None, None);
    assert!(doc.markup().contains(
        "<p align='right' style='font-size:1.5em;font-family:Verdana, Times New Roman;'>Title</p>"
    ));
}

#[test]
fn test_invalid_layout_falls_back() {
    let layout = LayoutConfig::from_json(r#"{"marginTop": "2 furlongs", "pageWidth": "20cm"}"#)
        .unwrap();
    let doc = DocBuilder::new().build(Some("odd"), Some(&layout));

    assert_eq!(doc.warnings.len(), 1);
    assert_eq!(doc.warnings[0].field, "marginTop");
    assert!(doc.markup().contains("size:20cm 11in;margin:1in 1in 1in 1in;"));
    assert_eq!(doc.file_name, "odd.doc");
}

#[test]
fn test_clear_discards_pending_content() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "gone", 1);
    builder.clear();

    paragraph(&mut builder, "fresh", 1);
    let doc = builder.build(None, None);
    assert!(!doc.markup().contains("gone"));
    assert!(doc.markup().contains("fresh"));
}

#[test]
fn test_markup_cannot_smuggle_script() {
    let mut builder = DocBuilder::new();
    paragraph(&mut builder, "<b>x</b><![CDATA[><script>alert(1)</script>]]>", 1);
    paragraph(&mut builder, "<b>x</b><!--><script>alert(1)</script>-->", 2);
    builder
        .add_section_entry(
            Section::Header,
            TextKind::Html,
            "<b>x</b><?xml-stylesheet href='evil.xsl'?>",
            &EntryOptions::new(),
        )
        .unwrap();

    let doc = builder.build(None, None);
    assert!(!doc.markup().contains("<script>"));
    assert!(!doc.markup().contains("<?xml-stylesheet"));
    assert!(body_of(doc.markup()).contains("&lt;script&gt;"));
}
