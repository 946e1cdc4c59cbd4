use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::models::cv::{present, present_str, WorkExperience};
use crate::sections::dates::format_range;
use crate::sections::{
    bullet, content_edges, first_entry_lead, heading_row, paragraph, text_style, write_entries,
    EntryBlock, Line, SectionFormatter,
};

pub struct ExperienceSection<'a>(pub &'a [WorkExperience]);

impl SectionFormatter for ExperienceSection<'_> {
    fn title(&self) -> &'static str {
        "Work Experience"
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(is_blank)
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let (left, right) = content_edges(profile);
        let first = self.0.iter().find(|job| !is_blank(job));
        first_entry_lead(profile, first.map(|job| job_block(profile, left, right, job)))
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let entries = self.0.iter().filter(|job| !is_blank(job));
        write_entries(cursor, profile, entries, write_job);
    }
}

fn is_blank(job: &WorkExperience) -> bool {
    present_str(&job.position).is_none()
        && present_str(&job.company).is_none()
        && present_str(&job.start_date).is_none()
        && present(&job.end_date).is_none()
        && !job.is_current_job
        && job.bullet_points.iter().all(|b| b.text.trim().is_empty())
}

/// Heading block of one job: position + dates, then company and location.
pub(crate) fn job_heading(
    profile: &StyleProfile,
    left: f32,
    right: f32,
    job: &WorkExperience,
) -> Vec<Line> {
    let dates = format_range(&job.start_date, job.end_date.as_deref(), job.is_current_job);
    let position = present_str(&job.position);
    let company = present_str(&job.company);
    let location = present(&job.location);

    let (title, secondary) = match position {
        Some(position) => {
            let parts: Vec<&str> = [company, location].into_iter().flatten().collect();
            (position, parts.join(" | "))
        }
        None => (company.unwrap_or_default(), location.unwrap_or_default().to_string()),
    };

    let mut lines = heading_row(profile, left, right, title, &dates);
    let muted = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Muted);
    lines.extend(paragraph(profile, &secondary, left, right, muted));
    lines
}

fn job_block(profile: &StyleProfile, left: f32, right: f32, job: &WorkExperience) -> EntryBlock {
    EntryBlock {
        heading: job_heading(profile, left, right, job),
        body: job
            .bullet_points
            .iter()
            .flat_map(|b| bullet(profile, left, right, &b.text))
            .collect(),
    }
}

fn write_job(cursor: &mut Cursor, profile: &StyleProfile, job: &WorkExperience) {
    job_block(profile, cursor.left(), cursor.right(), job).emit(cursor);
}
