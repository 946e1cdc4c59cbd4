//! Header/contact block. Always rendered first, even for an empty CV.

use crate::layout::{
    text_width, wrap_text, Align, ColorRole, Cursor, FontWeight, StyleProfile, TextRole,
    TextStyle,
};
use crate::models::cv::{present, present_str, PersonalInfo};
use crate::sections::{emit_together, text_style, url_target, Line};

pub const PLACEHOLDER_NAME: &str = "Your Name";
const SEPARATOR: &str = " | ";

/// One contact item: shown text plus optional link target.
struct Item {
    text: String,
    uri: Option<String>,
}

pub fn write_header(cursor: &mut Cursor, profile: &StyleProfile, info: &PersonalInfo) {
    let (left, right) = (cursor.left(), cursor.right());
    let mut lines = Vec::new();

    let name = present_str(&info.full_name).unwrap_or(PLACEHOLDER_NAME);
    let name_style = text_style(profile, TextRole::Name, FontWeight::Bold, ColorRole::Heading);
    lines.extend(aligned_text(profile, name, left, right, name_style));

    if let Some(title) = present_str(&info.job_title) {
        let title_style =
            text_style(profile, TextRole::Title, FontWeight::Regular, ColorRole::Accent);
        lines.extend(aligned_text(profile, title, left, right, title_style));
    }

    let contact_style =
        text_style(profile, TextRole::Contact, FontWeight::Regular, ColorRole::Muted);
    let contacts = contact_items(info);
    lines.extend(item_rows(profile, &contacts, left, right, contact_style, contact_style));

    let link_style = text_style(profile, TextRole::Contact, FontWeight::Regular, ColorRole::Link);
    let links = link_items(info);
    lines.extend(item_rows(profile, &links, left, right, link_style, contact_style));

    emit_together(cursor, &lines, 0.0);
    cursor.advance(profile.header_gap);
}

fn contact_items(info: &PersonalInfo) -> Vec<Item> {
    let mut items = Vec::new();
    if let Some(email) = present(&info.email) {
        items.push(Item {
            text: email.to_string(),
            uri: Some(format!("mailto:{email}")),
        });
    }
    if let Some(phone) = present(&info.phone) {
        let dialable: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        items.push(Item {
            text: phone.to_string(),
            uri: (!dialable.is_empty()).then(|| format!("tel:{dialable}")),
        });
    }
    if let Some(location) = present(&info.location) {
        items.push(Item {
            text: location.to_string(),
            uri: None,
        });
    }
    items
}

fn link_items(info: &PersonalInfo) -> Vec<Item> {
    [&info.linkedin, &info.github, &info.website]
        .into_iter()
        .filter_map(present)
        .map(|url| Item {
            text: url.to_string(),
            uri: Some(url_target(url)),
        })
        .collect()
}

/// Wrapped text placed per the profile's header alignment.
fn aligned_text(
    profile: &StyleProfile,
    text: &str,
    left: f32,
    right: f32,
    style: TextStyle,
) -> Vec<Line> {
    let height = style.font.line_height(profile.line_height);
    let x = match profile.header_align {
        Align::Left => left,
        Align::Center => (left + right) / 2.0,
        Align::Right => right,
    };
    wrap_text(text, &style.font, right - left)
        .into_iter()
        .map(|line| Line::new(height).text(line, x, style, profile.header_align))
        .collect()
}

/// Packs items into rows joined by separators, greedily, then positions each
/// row per the header alignment.
fn item_rows(
    profile: &StyleProfile,
    items: &[Item],
    left: f32,
    right: f32,
    style: TextStyle,
    separator_style: TextStyle,
) -> Vec<Line> {
    let separator_width = text_width(SEPARATOR, &separator_style.font);
    let max_width = right - left;

    let mut rows: Vec<Vec<&Item>> = Vec::new();
    let mut row_width = 0.0;
    for item in items {
        let width = text_width(&item.text, &style.font);
        match rows.last_mut() {
            Some(row) if row_width + separator_width + width <= max_width => {
                row.push(item);
                row_width += separator_width + width;
            }
            _ => {
                rows.push(vec![item]);
                row_width = width;
            }
        }
    }

    let height = style.font.line_height(profile.line_height);
    rows.into_iter()
        .map(|row| {
            let widths: Vec<f32> = row.iter().map(|i| text_width(&i.text, &style.font)).collect();
            let total = widths.iter().sum::<f32>() + separator_width * (row.len() - 1) as f32;
            let mut x = match profile.header_align {
                Align::Left => left,
                Align::Center => (left + right - total) / 2.0,
                Align::Right => right - total,
            };

            let mut line = Line::new(height);
            for (index, (item, width)) in row.iter().zip(&widths).enumerate() {
                if index > 0 {
                    line = line.text(SEPARATOR, x, separator_style, Align::Left);
                    x += separator_width;
                }
                line = match &item.uri {
                    Some(uri) => line.linked(item.text.as_str(), x, style, uri.clone()),
                    None => line.text(item.text.as_str(), x, style, Align::Left),
                };
                x += width;
            }
            line
        })
        .collect()
}
