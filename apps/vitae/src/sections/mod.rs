//! Section formatters and the line-building helpers they share.
//!
//! A formatter turns one slice of the CV into positioned lines and emits
//! them through the cursor. Lines that belong together (an entry's heading
//! block) go out under one page-break decision; flowing text (paragraphs,
//! bullets) checks space line by line.

pub mod certifications;
pub mod dates;
pub mod education;
pub mod experience;
pub mod extracurricular;
pub mod header;
pub mod projects;
pub mod skills;
pub mod summary;

use tracing::debug;

use crate::layout::{
    text_width, wrap_text, Align, ColorRole, Cursor, FontWeight, StyleProfile, TextRole,
    TextStyle,
};
use crate::layout::style_profile::RuleStyle;

/// Minimum horizontal gap between a heading title and its right-aligned date.
const DATE_GAP: f32 = 4.0;

// ────────────────────────────────────────────────────────────────────────────
// Formatter seam
// ────────────────────────────────────────────────────────────────────────────

/// One titled, independently skippable CV section.
pub trait SectionFormatter {
    /// Section title as written in the data; rendered uppercased.
    fn title(&self) -> &'static str;

    /// True when there is nothing to render. Empty sections write nothing at all.
    fn is_empty(&self) -> bool;

    /// Height that must fit under the section header on the same page,
    /// so a header is never stranded at the bottom of a page. Entry
    /// sections return the whole kept-together block of their first entry.
    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        profile.line_height_for(TextRole::Body)
    }

    /// Writes the section's entries (everything below the header).
    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile);
}

/// Renders a whole section: spacing, header, rule, body.
///
/// Returns false (and leaves the cursor untouched) for an empty section.
pub fn format_section(
    section: &dyn SectionFormatter,
    cursor: &mut Cursor,
    profile: &StyleProfile,
) -> bool {
    if section.is_empty() {
        return false;
    }
    if !cursor.at_page_top() {
        cursor.advance(profile.section_spacing);
    }
    cursor.ensure_space(section_header_height(profile) + section.lead_height(profile));
    write_section_header(cursor, profile, section.title());
    section.write_body(cursor, profile);

    debug!(
        section = section.title(),
        page = cursor.page_index(),
        "Section rendered"
    );
    true
}

/// Height of a section header including its rule and gaps.
pub fn section_header_height(profile: &StyleProfile) -> f32 {
    let rule = match profile.rule {
        RuleStyle::Line { thickness } => thickness + profile.header_gap,
        RuleStyle::None => 0.0,
    };
    profile.line_height_for(TextRole::SectionHeader) + profile.header_gap + rule
}

fn write_section_header(cursor: &mut Cursor, profile: &StyleProfile, title: &str) {
    let style = text_style(profile, TextRole::SectionHeader, FontWeight::Bold, ColorRole::Heading);
    let x = cursor.left();
    cursor.write(&title.to_uppercase(), x, style, Align::Left);
    cursor.advance(profile.line_height_for(TextRole::SectionHeader));

    if let RuleStyle::Line { thickness } = profile.rule {
        let (x1, x2) = (cursor.left(), cursor.right());
        cursor.advance(profile.header_gap);
        cursor.rule(x1, x2, thickness, profile.color(ColorRole::Rule));
        cursor.advance(thickness);
    }
    cursor.advance(profile.header_gap);
}

/// Writes entries in order with the profile's entry spacing between them
/// (never after the last one).
pub fn write_entries<'e, T: 'e>(
    cursor: &mut Cursor,
    profile: &StyleProfile,
    entries: impl IntoIterator<Item = &'e T>,
    mut write_entry: impl FnMut(&mut Cursor, &StyleProfile, &T),
) {
    for (index, entry) in entries.into_iter().enumerate() {
        if index > 0 && !cursor.at_page_top() {
            cursor.advance(profile.entry_spacing);
        }
        write_entry(cursor, profile, entry);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prepared lines
// ────────────────────────────────────────────────────────────────────────────

/// A run of text at a fixed horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub x: f32,
    pub style: TextStyle,
    pub align: Align,
    /// Link target covering this segment.
    pub uri: Option<String>,
}

/// One line box: its segments share a top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub segments: Vec<Segment>,
    pub height: f32,
}

impl Line {
    pub fn new(height: f32) -> Self {
        Self {
            segments: Vec::new(),
            height,
        }
    }

    pub fn text(mut self, text: impl Into<String>, x: f32, style: TextStyle, align: Align) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            x,
            style,
            align,
            uri: None,
        });
        self
    }

    pub fn linked(
        mut self,
        text: impl Into<String>,
        x: f32,
        style: TextStyle,
        uri: String,
    ) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            x,
            style,
            align: Align::Left,
            uri: Some(uri),
        });
        self
    }

    #[cfg(test)]
    pub(crate) fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }

    fn write(&self, cursor: &mut Cursor) {
        for segment in &self.segments {
            let placed = cursor.write(&segment.text, segment.x, segment.style, segment.align);
            if let Some(uri) = &segment.uri {
                cursor.link(placed, self.height, uri);
            }
        }
        cursor.advance(self.height);
    }
}

/// Emits `lines` under a single page-break decision that also reserves
/// `lookahead` for whatever must follow them on the same page.
pub fn emit_together(cursor: &mut Cursor, lines: &[Line], lookahead: f32) {
    if lines.is_empty() {
        return;
    }
    let total: f32 = lines.iter().map(|l| l.height).sum();
    cursor.ensure_space(total + lookahead);
    for line in lines {
        line.write(cursor);
    }
}

/// Emits `lines` checking for space before each one.
pub fn emit_flowing(cursor: &mut Cursor, lines: &[Line]) {
    for line in lines {
        cursor.ensure_space(line.height);
        line.write(cursor);
    }
}

/// One entry's prepared lines: a heading block that moves as a unit, then
/// body lines that may break anywhere. The first body line stays with the
/// heading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryBlock {
    pub heading: Vec<Line>,
    pub body: Vec<Line>,
}

impl EntryBlock {
    /// Height reserved before the first line of the entry is written.
    pub fn lead_height(&self) -> f32 {
        self.heading.iter().map(|l| l.height).sum::<f32>() + first_line_height(&self.body)
    }

    pub fn emit(&self, cursor: &mut Cursor) {
        emit_together(cursor, &self.heading, first_line_height(&self.body));
        emit_flowing(cursor, &self.body);
    }
}

/// Lead height of the first entry a section will write, falling back to one
/// body line when there is none.
pub fn first_entry_lead(profile: &StyleProfile, first: Option<EntryBlock>) -> f32 {
    first
        .map(|block| block.lead_height())
        .filter(|h| *h > 0.0)
        .unwrap_or_else(|| profile.line_height_for(TextRole::Body))
}

/// Left and right text edges of the content column.
pub fn content_edges(profile: &StyleProfile) -> (f32, f32) {
    (profile.margins.left, profile.page_width - profile.margins.right)
}

// ────────────────────────────────────────────────────────────────────────────
// Line builders
// ────────────────────────────────────────────────────────────────────────────

pub fn text_style(
    profile: &StyleProfile,
    role: TextRole,
    weight: FontWeight,
    color: ColorRole,
) -> TextStyle {
    TextStyle {
        font: profile.font(role, weight),
        color: profile.color(color),
    }
}

/// Wrapped paragraph between `left` and `right`.
pub fn paragraph(
    profile: &StyleProfile,
    text: &str,
    left: f32,
    right: f32,
    style: TextStyle,
) -> Vec<Line> {
    let height = style.font.line_height(profile.line_height);
    wrap_text(text, &style.font, right - left)
        .into_iter()
        .map(|line| Line::new(height).text(line, left, style, Align::Left))
        .collect()
}

/// Primary entry line: bold title on the left, date range flush right on the
/// same baseline. A title too long to share the line wraps beneath, leaving
/// the date column clear.
pub fn heading_row(
    profile: &StyleProfile,
    left: f32,
    right: f32,
    title: &str,
    date: &str,
) -> Vec<Line> {
    let title_style = text_style(profile, TextRole::Body, FontWeight::Bold, ColorRole::Text);
    let date_style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Muted);
    let height = profile.line_height_for(TextRole::Body);

    let date = date.trim();
    let date_width = if date.is_empty() {
        0.0
    } else {
        text_width(date, &date_style.font) + DATE_GAP
    };
    let title_width = (right - left - date_width).max(0.0);

    let mut lines: Vec<Line> = wrap_text(title, &title_style.font, title_width)
        .into_iter()
        .map(|line| Line::new(height).text(line, left, title_style, Align::Left))
        .collect();

    if !date.is_empty() {
        let date_segment = Segment {
            text: date.to_string(),
            x: right,
            style: date_style,
            align: Align::Right,
            uri: None,
        };
        match lines.first_mut() {
            Some(first) => first.segments.push(date_segment),
            None => lines.push(Line {
                segments: vec![date_segment],
                height,
            }),
        }
    }
    lines
}

/// One bullet point: glyph in the gutter, text wrapped with a hanging indent.
pub fn bullet(profile: &StyleProfile, left: f32, right: f32, text: &str) -> Vec<Line> {
    let style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    let text_left = left + profile.bullet_indent;
    let mut lines = paragraph(profile, text, text_left, right, style);
    if let Some(first) = lines.first_mut() {
        let glyph_x = left + profile.bullet_indent * 0.3;
        first.segments.insert(
            0,
            Segment {
                text: profile.bullet_glyph.to_string(),
                x: glyph_x,
                style,
                align: Align::Left,
                uri: None,
            },
        );
    }
    lines
}

/// Link target for a URL as typed in the form: bare hosts get `https://`.
pub fn url_target(raw: &str) -> String {
    let raw = raw.trim();
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
    {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Lookahead for the first flowing line after an entry heading, if any.
fn first_line_height(lines: &[Line]) -> f32 {
    lines.first().map(|l| l.height).unwrap_or(0.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
