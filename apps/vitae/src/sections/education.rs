use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::models::cv::{present, present_str, Education};
use crate::sections::dates::format_range;
use crate::sections::{
    content_edges, first_entry_lead, heading_row, paragraph, text_style, write_entries,
    EntryBlock, SectionFormatter,
};

pub struct EducationSection<'a>(pub &'a [Education]);

impl SectionFormatter for EducationSection<'_> {
    fn title(&self) -> &'static str {
        "Education"
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(is_blank)
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let (left, right) = content_edges(profile);
        let first = self.0.iter().find(|edu| !is_blank(edu));
        first_entry_lead(profile, first.map(|edu| education_block(profile, left, right, edu)))
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let entries = self.0.iter().filter(|edu| !is_blank(edu));
        write_entries(cursor, profile, entries, write_education);
    }
}

fn is_blank(edu: &Education) -> bool {
    present_str(&edu.institution).is_none()
        && degree_title(edu).is_none()
        && edu.class_of_degree.as_ref().and_then(|c| c.label()).is_none()
        && present_str(&edu.start_date).is_none()
        && present(&edu.end_date).is_none()
        && present(&edu.description).is_none()
}

/// "Degree in Field", or whichever half exists.
fn degree_title(edu: &Education) -> Option<String> {
    match (present_str(&edu.degree), present(&edu.field_of_study)) {
        (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
        (Some(degree), None) => Some(degree.to_string()),
        (None, Some(field)) => Some(field.to_string()),
        (None, None) => None,
    }
}

fn education_block(profile: &StyleProfile, left: f32, right: f32, edu: &Education) -> EntryBlock {
    let dates = format_range(&edu.start_date, edu.end_date.as_deref(), false);
    let institution = present_str(&edu.institution);
    let muted = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Muted);

    let mut heading = match degree_title(edu) {
        Some(title) => {
            let mut lines = heading_row(profile, left, right, &title, &dates);
            if let Some(institution) = institution {
                lines.extend(paragraph(profile, institution, left, right, muted));
            }
            lines
        }
        None => heading_row(profile, left, right, institution.unwrap_or_default(), &dates),
    };

    if let Some(label) = edu.class_of_degree.as_ref().and_then(|c| c.label()) {
        let small = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Muted);
        heading.extend(paragraph(profile, label, left, right, small));
    }

    let body = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    let description = present(&edu.description)
        .map(|text| paragraph(profile, text, left, right, body))
        .unwrap_or_default();

    EntryBlock {
        heading,
        body: description,
    }
}

fn write_education(cursor: &mut Cursor, profile: &StyleProfile, edu: &Education) {
    education_block(profile, cursor.left(), cursor.right(), edu).emit(cursor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style_profile::default_profile;
    use crate::models::cv::ClassOfDegree;
    use crate::sections::format_section;
    use crate::sections::tests::page_texts;

    fn render(entries: &[Education]) -> Vec<String> {
        let profile = default_profile();
        let mut cursor = Cursor::new(profile);
        format_section(&EducationSection(entries), &mut cursor, profile);
        page_texts(&cursor.finalize(None)).remove(0)
    }

    fn degree() -> Education {
        Education {
            institution: "University of Edinburgh".to_string(),
            degree: "BSc".to_string(),
            field_of_study: Some("Computer Science".to_string()),
            class_of_degree: Some(ClassOfDegree::UpperSecond),
            start_date: "2014-09".to_string(),
            end_date: Some("2018-06".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_full_entry() {
        assert_eq!(
            render(&[degree()]),
            vec![
                "EDUCATION",
                "BSc in Computer Science",
                "Sep 2014 - Jun 2018",
                "University of Edinburgh",
                "Second Class Upper",
            ]
        );
    }

    #[test]
    fn test_institution_only_becomes_title() {
        let edu = Education {
            institution: "MIT".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[edu]), vec!["EDUCATION", "MIT"]);
    }

    #[test]
    fn test_description_follows_heading() {
        let mut edu = degree();
        edu.class_of_degree = None;
        edu.description = Some("Dissertation on lock-free queues.".to_string());
        let texts = render(&[edu]);
        assert_eq!(texts.last().unwrap(), "Dissertation on lock-free queues.");
        assert!(!texts.iter().any(|t| t.contains("Class")));
    }

    #[test]
    fn test_empty_education_renders_nothing() {
        assert!(render(&[]).is_empty());
        assert!(render(&[Education::default()]).is_empty());
    }

    #[test]
    fn test_description_only_entry_is_kept() {
        let edu = Education {
            description: Some("Exchange semester abroad.".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&[edu]), vec!["EDUCATION", "Exchange semester abroad."]);
    }

    #[test]
    fn test_dates_and_class_without_institution_are_kept() {
        let edu = Education {
            class_of_degree: Some(ClassOfDegree::First),
            start_date: "2014-09".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[edu]), vec!["EDUCATION", "Sep 2014", "First Class Honours"]);
    }
}
