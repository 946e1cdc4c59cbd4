use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::sections::{emit_flowing, paragraph, text_style, SectionFormatter};

/// Free-text professional summary.
pub struct SummarySection<'a>(pub &'a str);

impl SectionFormatter for SummarySection<'_> {
    fn title(&self) -> &'static str {
        "Professional Summary"
    }

    fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
        let lines = paragraph(profile, self.0, cursor.left(), cursor.right(), style);
        emit_flowing(cursor, &lines);
    }
}
