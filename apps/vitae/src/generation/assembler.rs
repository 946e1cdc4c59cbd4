//! Document assembly: runs the section formatters in their fixed order
//! over one fresh cursor and serializes the result.
//!
//! Flow: resolve style profile → header → summary → experience → education →
//!       skills → projects → certifications → extracurricular → finalize →
//!       render PDF.

use bytes::Bytes;
use tracing::info;

use crate::errors::GenerateError;
use crate::generation::output::file_name;
use crate::layout::style_profile::resolve_profile;
use crate::layout::{ColorRole, Cursor, FontWeight, PagedLayout, StyleProfile, TextRole};
use crate::models::cv::{present_str, Cv};
use crate::render::{render_pdf, DocumentInfo};
use crate::sections::certifications::CertificationsSection;
use crate::sections::education::EducationSection;
use crate::sections::experience::ExperienceSection;
use crate::sections::extracurricular::ExtracurricularSection;
use crate::sections::header::write_header;
use crate::sections::projects::ProjectsSection;
use crate::sections::skills::SkillsSection;
use crate::sections::summary::SummarySection;
use crate::sections::{format_section, text_style, SectionFormatter};

const GENERIC_TITLE: &str = "Curriculum Vitae";

// ────────────────────────────────────────────────────────────────────────────
// Output model
// ────────────────────────────────────────────────────────────────────────────

/// A finished document and what the caller needs to store or serve it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub bytes: Bytes,
    /// Suggested file name, derived from the person's name.
    pub file_name: String,
    pub page_count: usize,
    /// Identifier of the profile actually used (after fallback).
    pub style_id: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the whole CV with `profile`. Pure: no I/O, no logging above debug.
pub fn layout_document(cv: &Cv, profile: &StyleProfile) -> PagedLayout {
    let mut cursor = Cursor::new(profile);
    write_header(&mut cursor, profile, &cv.personal_info);

    let sections: [&dyn SectionFormatter; 7] = [
        &SummarySection(&cv.personal_info.summary),
        &ExperienceSection(&cv.work_experience),
        &EducationSection(&cv.education),
        &SkillsSection(&cv.skills),
        &ProjectsSection(&cv.projects),
        &CertificationsSection(&cv.certifications),
        &ExtracurricularSection(&cv.extracurriculars),
    ];
    for section in sections {
        format_section(section, &mut cursor, profile);
    }

    let footer = profile
        .page_numbers
        .then(|| text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Muted));
    cursor.finalize(footer)
}

/// Generates the PDF for `cv` in the style named `style_id`.
///
/// Unknown or empty identifiers fall back to the default profile. Any `Err`
/// means no document was produced.
pub fn generate(cv: &Cv, style_id: &str) -> Result<GeneratedDocument, GenerateError> {
    let profile = resolve_profile(style_id);
    let layout = layout_document(cv, profile);
    let page_count = layout.pages.len();

    let name = present_str(&cv.personal_info.full_name);
    let document_info = DocumentInfo {
        title: name
            .map(|n| format!("{n} - CV"))
            .unwrap_or_else(|| GENERIC_TITLE.to_string()),
        author: name.map(str::to_string),
    };
    let bytes = render_pdf(&layout, &document_info)?;

    info!(
        style = profile.id,
        pages = page_count,
        bytes = bytes.len(),
        "CV document generated"
    );

    Ok(GeneratedDocument {
        bytes: Bytes::from(bytes),
        file_name: file_name(&cv.personal_info.full_name),
        page_count,
        style_id: profile.id,
    })
}

/// In-memory output mode: the document bytes only.
pub fn generate_blob(cv: &Cv, style_id: &str) -> Result<Bytes, GenerateError> {
    Ok(generate(cv, style_id)?.bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
