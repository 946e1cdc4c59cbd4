//! PDF serialization of a paged layout with `lopdf`.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left. The conversion happens here and
//! nowhere else. Text uses the standard 14 fonts (no embedding) in
//! WinAnsiEncoding, so the output is small and byte-for-byte deterministic.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::errors::GenerateError;
use crate::layout::style_profile::Rgb;
use crate::layout::{DrawOp, FontFamily, FontWeight, Page, PagedLayout, TextStyle};

const MM_TO_PT: f32 = 72.0 / 25.4;
const PRODUCER: &str = "vitae";

/// Every face a profile can select, with its resource name.
const FONTS: [(&str, FontFamily, FontWeight); 4] = [
    ("F1", FontFamily::Helvetica, FontWeight::Regular),
    ("F2", FontFamily::Helvetica, FontWeight::Bold),
    ("F3", FontFamily::Times, FontWeight::Regular),
    ("F4", FontFamily::Times, FontWeight::Bold),
];

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
}

/// Serializes `layout` into a complete PDF file.
pub fn render_pdf(layout: &PagedLayout, info: &DocumentInfo) -> Result<Vec<u8>, GenerateError> {
    if layout.pages.is_empty() {
        return Err(GenerateError::EmptyLayout);
    }
    let mut writer = PdfWriter::new(layout);
    for page in &layout.pages {
        writer.add_page(page)?;
    }
    writer.finish(info)
}

/// Encodes text for a WinAnsiEncoding font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
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

// ────────────────────────────────────────────────────────────────────────────
// Writer
// ────────────────────────────────────────────────────────────────────────────

struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    width: f32,
    height: f32,
}

impl PdfWriter {
    fn new(layout: &PagedLayout) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for (name, family, weight) in FONTS {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => family.base_font(weight),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(name, font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => fonts });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            width: layout.geometry.width * MM_TO_PT,
            height: layout.geometry.height * MM_TO_PT,
        }
    }

    fn add_page(&mut self, page: &Page) -> Result<(), GenerateError> {
        let mut content = Content {
            operations: Vec::new(),
        };
        let mut annotations = Vec::new();

        for op in &page.ops {
            match op {
                DrawOp::Text {
                    x,
                    baseline,
                    text,
                    style,
                } => self.text(&mut content, *x, *baseline, text, style),
                DrawOp::Rule {
                    x1,
                    x2,
                    y,
                    thickness,
                    color,
                } => self.rule(&mut content, *x1, *x2, *y, *thickness, *color),
                DrawOp::Link {
                    x,
                    y,
                    width,
                    height,
                    uri,
                } => annotations.push(self.link(*x, *y, *width, *height, uri)),
            }
        }

        let content_id = self
            .document
            .add_object(Stream::new(lopdf::Dictionary::new(), content.encode()?));
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.width.into(), self.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        if !annotations.is_empty() {
            let refs: Vec<Object> = annotations.into_iter().map(Object::Reference).collect();
            page_dict.set("Annots", refs);
        }
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(())
    }

    fn text(&self, content: &mut Content, x: f32, baseline: f32, text: &str, style: &TextStyle) {
        let [r, g, b] = style.color.components();
        let ops = &mut content.operations;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![font_resource(style), style.font.size_pt.into()],
        ));
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new(
            "Td",
            vec![(x * MM_TO_PT).into(), self.flip(baseline).into()],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Stroked line; `y` is the rule's top edge.
    fn rule(&self, content: &mut Content, x1: f32, x2: f32, y: f32, thickness: f32, color: Rgb) {
        let [r, g, b] = color.components();
        let y = self.flip(y + thickness / 2.0);
        let ops = &mut content.operations;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("w", vec![(thickness * MM_TO_PT).into()]));
        ops.push(Operation::new("m", vec![(x1 * MM_TO_PT).into(), y.into()]));
        ops.push(Operation::new("l", vec![(x2 * MM_TO_PT).into(), y.into()]));
        ops.push(Operation::new("S", vec![]));
        ops.push(Operation::new("Q", vec![]));
    }

    fn link(&mut self, x: f32, y: f32, width: f32, height: f32, uri: &str) -> ObjectId {
        let rect: Vec<Object> = vec![
            (x * MM_TO_PT).into(),
            self.flip(y + height).into(),
            ((x + width) * MM_TO_PT).into(),
            self.flip(y).into(),
        ];
        self.document.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
            },
        })
    }

    fn finish(mut self, info: &DocumentInfo) -> Result<Vec<u8>, GenerateError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let count = self.page_ids.len() as i64;
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut info_dict = dictionary! {
            "Title" => text_string(&info.title),
            "Creator" => text_string(PRODUCER),
            "Producer" => text_string(PRODUCER),
        };
        if let Some(author) = &info.author {
            info_dict.set("Author", text_string(author));
        }
        let info_id = self.document.add_object(info_dict);
        self.document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        self.document
            .save_to(&mut bytes)
            .map_err(lopdf::Error::from)?;
        Ok(bytes)
    }

    /// Millimetres from the top edge to points from the bottom edge.
    fn flip(&self, y: f32) -> f32 {
        self.height - y * MM_TO_PT
    }
}

fn font_resource(style: &TextStyle) -> Object {
    let name = FONTS
        .iter()
        .find(|(_, family, weight)| *family == style.font.family && *weight == style.font.weight)
        .map(|(name, _, _)| *name)
        .unwrap_or("F1");
    Object::Name(name.as_bytes().to_vec())
}

fn text_string(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
