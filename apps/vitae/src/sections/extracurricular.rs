use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::models::cv::{present, present_str, Extracurricular};
use crate::sections::dates::format_range;
use crate::sections::{
    content_edges, first_entry_lead, heading_row, paragraph, text_style, write_entries,
    EntryBlock, SectionFormatter,
};

pub struct ExtracurricularSection<'a>(pub &'a [Extracurricular]);

impl SectionFormatter for ExtracurricularSection<'_> {
    fn title(&self) -> &'static str {
        "Extracurricular Activities"
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(is_blank)
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let (left, right) = content_edges(profile);
        let first = self.0.iter().find(|a| !is_blank(a));
        first_entry_lead(profile, first.map(|a| activity_block(profile, left, right, a)))
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let entries = self.0.iter().filter(|a| !is_blank(a));
        write_entries(cursor, profile, entries, write_activity);
    }
}

fn is_blank(activity: &Extracurricular) -> bool {
    present_str(&activity.title).is_none()
        && present_str(&activity.organization).is_none()
        && present_str(&activity.start_date).is_none()
        && present(&activity.end_date).is_none()
        && !activity.is_ongoing
        && present(&activity.description).is_none()
}

fn activity_block(
    profile: &StyleProfile,
    left: f32,
    right: f32,
    activity: &Extracurricular,
) -> EntryBlock {
    let dates = format_range(
        &activity.start_date,
        activity.end_date.as_deref(),
        activity.is_ongoing,
    );
    let title = present_str(&activity.title);
    let organization = present_str(&activity.organization);

    let mut heading = heading_row(
        profile,
        left,
        right,
        title.or(organization).unwrap_or_default(),
        &dates,
    );
    if let (Some(_), Some(organization)) = (title, organization) {
        let muted = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Muted);
        heading.extend(paragraph(profile, organization, left, right, muted));
    }

    let body = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    let description = present(&activity.description)
        .map(|text| paragraph(profile, text, left, right, body))
        .unwrap_or_default();

    EntryBlock {
        heading,
        body: description,
    }
}

fn write_activity(cursor: &mut Cursor, profile: &StyleProfile, activity: &Extracurricular) {
    activity_block(profile, cursor.left(), cursor.right(), activity).emit(cursor);
}
