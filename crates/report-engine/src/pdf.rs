//! PDF writer stage.
//!
//! Encodes laid-out pages into a PDF document with lopdf: standard
//! Helvetica / Helvetica-Bold with WinAnsi encoding (covers the pt-PT
//! accented characters and the € sign), one content stream per page.

use lopdf::{Dictionary, Document, Object, Stream};

use crate::error::ReportError;
use crate::layout::{FontStyle, Page, PAGE_HEIGHT_MM};

const A4_WIDTH_PT: f32 = 595.28;
const A4_HEIGHT_PT: f32 = 841.89;

/// Serialize pages into PDF bytes.
pub fn write_document(pages: &[Page]) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let catalog_id = doc.new_object_id();

    let font_regular_id = doc.new_object_id();
    let font_bold_id = doc.new_object_id();
    doc.objects
        .insert(font_regular_id, Object::Dictionary(font_dict("Helvetica")));
    doc.objects
        .insert(font_bold_id, Object::Dictionary(font_dict("Helvetica-Bold")));

    let mut font_map = Dictionary::new();
    font_map.set("F1", Object::Reference(font_regular_id));
    font_map.set("F2", Object::Reference(font_bold_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_map));
    let resources_id = doc.new_object_id();
    doc.objects
        .insert(resources_id, Object::Dictionary(resources));

    let mut page_refs = Vec::new();
    for page in pages {
        let content_id = doc.new_object_id();
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(Dictionary::new(), page_content(page))),
        );

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Reference(resources_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(A4_WIDTH_PT),
                Object::Real(A4_HEIGHT_PT),
            ]),
        );

        let page_id = doc.new_object_id();
        doc.objects.insert(page_id, Object::Dictionary(page_dict));
        page_refs.push(Object::Reference(page_id));
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
    pages_dict.set("Kids", Object::Array(page_refs));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog_dict.set("Pages", Object::Reference(pages_id));
    doc.objects
        .insert(catalog_id, Object::Dictionary(catalog_dict));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ReportError::Write(e.to_string()))?;
    Ok(buffer)
}

fn font_dict(base_font: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"Font".to_vec()));
    dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    dict.set("BaseFont", Object::Name(base_font.as_bytes().to_vec()));
    dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    dict
}

/// Content stream for one page: filled rectangles first, text on top.
fn page_content(page: &Page) -> Vec<u8> {
    let mut content = Vec::new();

    for rect in &page.rects {
        let (r, g, b) = rect.fill;
        // Rectangles are positioned by their top edge in mm; PDF wants the
        // bottom-left corner in points.
        let x = mm_to_pt(rect.x);
        let y = mm_to_pt(PAGE_HEIGHT_MM - rect.y - rect.height);
        content.extend_from_slice(
            format!(
                "{} {} {} rg {:.2} {:.2} {:.2} {:.2} re f\n",
                rgb(r),
                rgb(g),
                rgb(b),
                x,
                y,
                mm_to_pt(rect.width),
                mm_to_pt(rect.height),
            )
            .as_bytes(),
        );
    }

    for text in &page.texts {
        let (r, g, b) = text.color;
        let font = match text.style {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        };
        let x = mm_to_pt(text.x);
        let y = mm_to_pt(PAGE_HEIGHT_MM - text.y);
        content.extend_from_slice(
            format!(
                "{} {} {} rg BT /{} {:.1} Tf {:.2} {:.2} Td (",
                rgb(r),
                rgb(g),
                rgb(b),
                font,
                text.size,
                x,
                y,
            )
            .as_bytes(),
        );
        escape_literal(&encode_win_ansi(&text.text), &mut content);
        content.extend_from_slice(b") Tj ET\n");
    }

    content
}

fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

fn rgb(channel: u8) -> String {
    format!("{:.3}", channel as f64 / 255.0)
}

/// Map a string onto WinAnsi (cp1252) bytes. Characters outside the code
/// page degrade to '?'.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        c if (c as u32) < 0x80 => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Escape the PDF literal-string delimiters.
fn escape_literal(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
}
