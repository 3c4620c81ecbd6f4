//! Word-flavoured HTML wrapper around the composed regions.

use crate::model::{LayoutConfig, Metadata};

/// MIME type of the produced document.
pub const MIME_TYPE: &str = "application/msword";

/// File name used when the caller gives none.
pub const DEFAULT_FILE_NAME: &str = "document.doc";

const EXTENSION: &str = ".doc";

/// UTF-8 byte order mark. Word relies on it to pick the encoding.
const BOM: &str = "\u{feff}";

/// Rendered markup of the three regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedParts {
    /// Header region markup
    pub header: String,
    /// Footer region markup
    pub footer: String,
    /// Body markup
    pub body: String,
}

/// Wrap the composed regions in a complete document.
///
/// The layout should already be validated; its values are written as is.
pub fn assemble(parts: &ComposedParts, layout: &LayoutConfig, metadata: &Metadata) -> String {
    let mut doc = String::with_capacity(
        parts.header.len() + parts.footer.len() + parts.body.len() + 2048,
    );

    doc.push_str(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>",
    );
    doc.push_str("<head><meta charset='utf-8'>");
    doc.push_str(&metadata.to_head_markup());
    push_styles(&mut doc, layout);
    doc.push_str("</head><body><div class='Section1'>");

    doc.push_str(&parts.body);

    // Word reads headers and footers from this table; the style block
    // pushes the table itself off the page.
    doc.push_str("<table id='hrdftrtbl' border='1' cellspacing='0' cellpadding='0'><tr><td>");
    doc.push_str("<div style='mso-element:header' id='h1'><p class='MsoHeader'>");
    doc.push_str("<table border='0' width='100%'>");
    doc.push_str(&parts.header);
    doc.push_str("</table></p></div></td><td>");
    doc.push_str("<div style='mso-element:footer' id='f1'><p class='MsoFooter'>");
    doc.push_str("<table width='100%' border='0' cellspacing='0' cellpadding='0'>");
    doc.push_str(&parts.footer);
    doc.push_str("</table></p></div></td></tr></table>");

    doc.push_str("</div></body></html>");
    doc
}

fn push_styles(doc: &mut String, layout: &LayoutConfig) {
    doc.push_str("<style>");
    doc.push_str(
        "p.MsoHeader, li.MsoHeader, div.MsoHeader{margin:0in;margin-top:.0001pt;\
         mso-pagination:widow-orphan;tab-stops:center 3.0in right 6.0in;}",
    );
    doc.push_str(
        "p.MsoFooter, li.MsoFooter, div.MsoFooter{margin:0in;margin-bottom:.0001pt;\
         mso-pagination:widow-orphan;tab-stops:center 3.0in right 6.0in;font-size:18.0pt;}",
    );
    doc.push_str(&format!(
        "@page Section1{{size:{} {};margin:{} {} {} {};mso-header-margin:{};\
         mso-header:h1;mso-footer:f1;mso-footer-margin:{};mso-paper-source:0;}}",
        layout.page_width,
        layout.page_height,
        layout.margin_top,
        layout.margin_right,
        layout.margin_bottom,
        layout.margin_left,
        layout.header_margin,
        layout.footer_margin,
    ));
    doc.push_str("div.Section1{page:Section1;}");
    doc.push_str("table#hrdftrtbl{margin:0in 0in 0in 900in;}");
    doc.push_str("</style>");
}

/// Encode the document markup as the bytes to save.
pub fn to_bytes(markup: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(BOM.len() + markup.len());
    bytes.extend_from_slice(BOM.as_bytes());
    bytes.extend_from_slice(markup.as_bytes());
    bytes
}

/// Output file name, appending `.doc` when missing.
pub fn file_name_or_default(name: Option<&str>) -> String {
    match name.map(str::trim) {
        None | Some("") => DEFAULT_FILE_NAME.to_string(),
        Some(name) if name.to_ascii_lowercase().ends_with(EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, EXTENSION),
    }
}
