use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::models::cv::{present, present_str, Project};
use crate::sections::dates::format_range;
use crate::sections::{
    content_edges, first_entry_lead, heading_row, paragraph, text_style, url_target,
    write_entries, EntryBlock, Line, SectionFormatter,
};

pub struct ProjectsSection<'a>(pub &'a [Project]);

impl SectionFormatter for ProjectsSection<'_> {
    fn title(&self) -> &'static str {
        "Projects"
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(is_blank)
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let (left, right) = content_edges(profile);
        let first = self.0.iter().find(|p| !is_blank(p));
        first_entry_lead(profile, first.map(|p| project_block(profile, left, right, p)))
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let entries = self.0.iter().filter(|p| !is_blank(p));
        write_entries(cursor, profile, entries, write_project);
    }
}

fn is_blank(project: &Project) -> bool {
    present_str(&project.name).is_none()
        && present_str(&project.description).is_none()
        && technologies(project).is_empty()
        && present(&project.url).is_none()
        && present(&project.start_date).is_none()
        && present(&project.end_date).is_none()
}

fn technologies(project: &Project) -> Vec<&str> {
    project
        .technologies
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect()
}

fn project_block(profile: &StyleProfile, left: f32, right: f32, project: &Project) -> EntryBlock {
    let dates = format_range(
        project.start_date.as_deref().unwrap_or_default(),
        project.end_date.as_deref(),
        false,
    );
    let mut heading = heading_row(profile, left, right, project.name.trim(), &dates);

    let technologies = technologies(project);
    if !technologies.is_empty() {
        let muted = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Muted);
        let text = format!("Technologies: {}", technologies.join(", "));
        heading.extend(paragraph(profile, &text, left, right, muted));
    }

    if let Some(url) = present(&project.url) {
        let link = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Link);
        let height = link.font.line_height(profile.line_height);
        heading.push(Line::new(height).linked(url, left, link, url_target(url)));
    }

    let body = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    EntryBlock {
        heading,
        body: paragraph(profile, &project.description, left, right, body),
    }
}

fn write_project(cursor: &mut Cursor, profile: &StyleProfile, project: &Project) {
    project_block(profile, cursor.left(), cursor.right(), project).emit(cursor);
}
