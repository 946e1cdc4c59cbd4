use crate::layout::{ColorRole, Cursor, FontWeight, StyleProfile, TextRole};
use crate::models::cv::{present, present_str, Certification};
use crate::sections::dates::format_month;
use crate::sections::{
    content_edges, first_entry_lead, heading_row, paragraph, text_style, url_target,
    write_entries, EntryBlock, Line, SectionFormatter,
};

pub struct CertificationsSection<'a>(pub &'a [Certification]);

impl SectionFormatter for CertificationsSection<'_> {
    fn title(&self) -> &'static str {
        "Certifications"
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(is_blank)
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let (left, right) = content_edges(profile);
        let first = self.0.iter().find(|c| !is_blank(c));
        first_entry_lead(profile, first.map(|c| certification_block(profile, left, right, c)))
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let entries = self.0.iter().filter(|c| !is_blank(c));
        write_entries(cursor, profile, entries, write_certification);
    }
}

fn is_blank(cert: &Certification) -> bool {
    present_str(&cert.name).is_none()
        && present_str(&cert.issuer).is_none()
        && present_str(&cert.date).is_none()
        && present(&cert.credential_id).is_none()
        && present(&cert.url).is_none()
}

/// Certifications are short: the whole entry is heading, kept on one page.
fn certification_block(
    profile: &StyleProfile,
    left: f32,
    right: f32,
    cert: &Certification,
) -> EntryBlock {
    let title = present_str(&cert.name).or(present_str(&cert.issuer)).unwrap_or_default();
    let mut lines = heading_row(profile, left, right, title, &format_month(&cert.date));

    if let (Some(_), Some(issuer)) = (present_str(&cert.name), present_str(&cert.issuer)) {
        let muted = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Muted);
        lines.extend(paragraph(profile, issuer, left, right, muted));
    }

    let small = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Muted);
    if let Some(id) = present(&cert.credential_id) {
        lines.extend(paragraph(profile, &format!("Credential ID: {id}"), left, right, small));
    }
    if let Some(url) = present(&cert.url) {
        let link = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Link);
        let height = link.font.line_height(profile.line_height);
        lines.push(Line::new(height).linked(url, left, link, url_target(url)));
    }

    EntryBlock {
        heading: lines,
        body: Vec::new(),
    }
}

fn write_certification(cursor: &mut Cursor, profile: &StyleProfile, cert: &Certification) {
    certification_block(profile, cursor.left(), cursor.right(), cert).emit(cursor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style_profile::default_profile;
    use crate::sections::format_section;
    use crate::sections::tests::page_texts;

    fn render(certs: &[Certification]) -> Vec<String> {
        let profile = default_profile();
        let mut cursor = Cursor::new(profile);
        format_section(&CertificationsSection(certs), &mut cursor, profile);
        page_texts(&cursor.finalize(None)).remove(0)
    }

    #[test]
    fn test_full_certification() {
        let cert = Certification {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2022-08".to_string(),
            credential_id: Some("LF-123".to_string()),
            url: Some("https://cncf.io/verify/LF-123".to_string()),
        };
        assert_eq!(
            render(&[cert]),
            vec![
                "CERTIFICATIONS",
                "CKA",
                "Aug 2022",
                "CNCF",
                "Credential ID: LF-123",
                "https://cncf.io/verify/LF-123",
            ]
        );
    }

    #[test]
    fn test_malformed_date_shown_raw() {
        let cert = Certification {
            name: "AWS SAA".to_string(),
            date: "sometime".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[cert]), vec!["CERTIFICATIONS", "AWS SAA", "sometime"]);
    }

    #[test]
    fn test_blank_certifications_skipped() {
        assert!(render(&[Certification::default()]).is_empty());
    }

    #[test]
    fn test_credential_only_entry_is_kept() {
        let cert = Certification {
            credential_id: Some("LF-123".to_string()),
            url: Some("https://cncf.io/verify/LF-123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render(&[cert]),
            vec![
                "CERTIFICATIONS",
                "Credential ID: LF-123",
                "https://cncf.io/verify/LF-123",
            ]
        );
    }

    #[test]
    fn test_date_only_entry_is_kept() {
        let cert = Certification {
            date: "2022-08".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[cert]), vec!["CERTIFICATIONS", "Aug 2022"]);
    }
}
