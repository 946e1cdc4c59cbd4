//! Skills section, in one of three profile-selected layouts.

use crate::layout::style_profile::SkillsLayout;
use crate::layout::{
    text_width, wrap_text, Align, ColorRole, Cursor, FontWeight, StyleProfile, TextRole,
};
use crate::models::cv::{present, present_str, Skill};
use crate::sections::{
    content_edges, emit_flowing, emit_together, paragraph, text_style, Line, SectionFormatter,
};

const UNCATEGORIZED: &str = "Other";
const COLUMN_GAP: f32 = 6.0;

pub struct SkillsSection<'a>(pub &'a [Skill]);

impl<'a> SkillsSection<'a> {
    fn named(&self) -> impl Iterator<Item = &'a Skill> + 'a {
        self.0.iter().filter(|s| present_str(&s.name).is_some())
    }
}

impl SectionFormatter for SkillsSection<'_> {
    fn title(&self) -> &'static str {
        "Skills"
    }

    fn is_empty(&self) -> bool {
        self.named().next().is_none()
    }

    fn lead_height(&self, profile: &StyleProfile) -> f32 {
        let body = profile.line_height_for(TextRole::Body);
        if profile.skills_layout != SkillsLayout::Leveled {
            return body;
        }
        let (left, right) = content_edges(profile);
        let first_row: Vec<&Skill> = self.named().take(2).collect();
        let height: f32 = leveled_row(profile, left, right, &first_row)
            .iter()
            .map(|l| l.height)
            .sum();
        height.max(body)
    }

    fn write_body(&self, cursor: &mut Cursor, profile: &StyleProfile) {
        let skills: Vec<&Skill> = self.named().collect();
        let (left, right) = (cursor.left(), cursor.right());
        match profile.skills_layout {
            SkillsLayout::Inline => {
                emit_flowing(cursor, &inline_lines(profile, left, right, &skills));
            }
            SkillsLayout::Grouped => {
                let categorized = skills.iter().any(|s| present(&s.category).is_some());
                if !categorized {
                    emit_flowing(cursor, &inline_lines(profile, left, right, &skills));
                } else {
                    for (label, names) in &group_by_category(&skills) {
                        let lines = grouped_lines(profile, left, right, label, names);
                        emit_flowing(cursor, &lines);
                    }
                }
            }
            SkillsLayout::Leveled => {
                for row in skills.chunks(2) {
                    let lines = leveled_row(profile, left, right, row);
                    emit_together(cursor, &lines, 0.0);
                }
            }
        }
    }
}

/// Proficiency label for a 1–5 level.
pub fn level_label(level: Option<u8>) -> Option<&'static str> {
    match level? {
        1 => Some("Beginner"),
        2 => Some("Elementary"),
        3 => Some("Intermediate"),
        4 => Some("Advanced"),
        5 => Some("Expert"),
        _ => None,
    }
}

/// Groups skill names by category, in order of each category's first appearance.
fn group_by_category<'a>(skills: &[&'a Skill]) -> Vec<(&'a str, Vec<&'a str>)> {
    let mut groups: Vec<(&'a str, Vec<&'a str>)> = Vec::new();
    for &skill in skills {
        let label = present(&skill.category).unwrap_or(UNCATEGORIZED);
        let name = skill.name.trim();
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, names)) => names.push(name),
            None => groups.push((label, vec![name])),
        }
    }
    groups
}

fn inline_lines(profile: &StyleProfile, left: f32, right: f32, skills: &[&Skill]) -> Vec<Line> {
    let joined = skills
        .iter()
        .map(|s| s.name.trim())
        .collect::<Vec<_>>()
        .join(", ");
    let style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    paragraph(profile, &joined, left, right, style)
}

/// `Label: a, b, c` with the items hanging under the first item.
fn grouped_lines(
    profile: &StyleProfile,
    left: f32,
    right: f32,
    label: &str,
    names: &[&str],
) -> Vec<Line> {
    let label_style = text_style(profile, TextRole::Body, FontWeight::Bold, ColorRole::Text);
    let item_style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    let label = format!("{label}:");
    let items_x = left + text_width(&format!("{label} "), &label_style.font);

    let mut lines = paragraph(profile, &names.join(", "), items_x, right, item_style);
    match lines.first_mut() {
        Some(first) => {
            let with_label = Line::new(first.height).text(label, left, label_style, Align::Left);
            let items = std::mem::take(&mut first.segments);
            *first = with_label;
            first.segments.extend(items);
        }
        None => {
            let height = profile.line_height_for(TextRole::Body);
            lines.push(Line::new(height).text(label, left, label_style, Align::Left));
        }
    }
    lines
}

/// One row of the two-column grid: name on the left of each column, level flush right.
fn leveled_row(profile: &StyleProfile, left: f32, right: f32, row: &[&Skill]) -> Vec<Line> {
    let name_style = text_style(profile, TextRole::Body, FontWeight::Regular, ColorRole::Text);
    let level_style = text_style(profile, TextRole::Small, FontWeight::Regular, ColorRole::Accent);
    let height = profile.line_height_for(TextRole::Body);
    let column_width = (right - left - COLUMN_GAP) / 2.0;

    let cells: Vec<(f32, f32, Vec<String>, Option<&str>)> = row
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let x = left + i as f32 * (column_width + COLUMN_GAP);
            let column_right = x + column_width;
            let level = level_label(skill.level);
            let level_width = level
                .map(|l| text_width(l, &level_style.font) + COLUMN_GAP / 2.0)
                .unwrap_or(0.0);
            let names = wrap_text(&skill.name, &name_style.font, column_width - level_width);
            (x, column_right, names, level)
        })
        .collect();

    let line_count = cells.iter().map(|c| c.2.len()).max().unwrap_or(0);
    (0..line_count)
        .map(|k| {
            let mut line = Line::new(height);
            for (x, column_right, names, level) in &cells {
                if let Some(name) = names.get(k) {
                    line = line.text(name.clone(), *x, name_style, Align::Left);
                }
                if let (0, Some(level)) = (k, level) {
                    line = line.text(*level, *column_right, level_style, Align::Right);
                }
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style_profile::find_profile;
    use crate::sections::format_section;
    use crate::sections::tests::page_texts;

    fn skill(name: &str, level: Option<u8>, category: Option<&str>) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            category: category.map(str::to_string),
        }
    }

    fn render(style: &str, skills: &[Skill]) -> Vec<String> {
        let profile = find_profile(style).unwrap();
        let mut cursor = Cursor::new(profile);
        format_section(&SkillsSection(skills), &mut cursor, profile);
        page_texts(&cursor.finalize(None)).remove(0)
    }

    #[test]
    fn test_blank_names_make_section_empty() {
        assert!(render("classic-ats", &[skill(" ", Some(3), None)]).is_empty());
        assert!(render("classic-ats", &[]).is_empty());
    }

    #[test]
    fn test_inline_layout_joins_names() {
        let skills = [skill("Rust", None, None), skill("SQL", Some(4), None)];
        assert_eq!(render("classic-ats", &skills), vec!["SKILLS", "Rust, SQL"]);
    }

    #[test]
    fn test_grouped_layout_keeps_first_appearance_order() {
        let skills = [
            skill("Rust", None, Some("Languages")),
            skill("Postgres", None, Some("Data")),
            skill("Go", None, Some("Languages")),
            skill("Kafka", None, None),
        ];
        assert_eq!(
            render("compact-technical", &skills),
            vec![
                "SKILLS",
                "Languages:",
                "Rust, Go",
                "Data:",
                "Postgres",
                "Other:",
                "Kafka",
            ]
        );
    }

    #[test]
    fn test_grouped_layout_without_categories_is_inline() {
        let skills = [skill("Rust", None, None), skill("Go", None, None)];
        assert_eq!(render("compact-technical", &skills), vec!["SKILLS", "Rust, Go"]);
    }

    #[test]
    fn test_grouped_layout_keeps_user_category_named_other() {
        let skills = [skill("Rust", None, Some("Other")), skill("Go", None, Some("Other"))];
        assert_eq!(
            render("compact-technical", &skills),
            vec!["SKILLS", "Other:", "Rust, Go"]
        );
    }

    #[test]
    fn test_leveled_layout_pairs_names_and_labels() {
        let skills = [
            skill("Rust", Some(5), None),
            skill("Go", Some(3), None),
            skill("Haskell", Some(9), None),
        ];
        assert_eq!(
            render("creative-accent", &skills),
            vec!["SKILLS", "Rust", "Expert", "Go", "Intermediate", "Haskell"]
        );
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(Some(1)), Some("Beginner"));
        assert_eq!(level_label(Some(4)), Some("Advanced"));
        assert_eq!(level_label(Some(0)), None);
        assert_eq!(level_label(Some(6)), None);
        assert_eq!(level_label(None), None);
    }

    #[test]
    fn test_leveled_lead_covers_first_row() {
        let profile = find_profile("creative-accent").unwrap();
        let long = "Distributed systems design and large-scale capacity planning";
        let skills = [skill(long, Some(5), None), skill("Go", Some(3), None)];
        let body = profile.line_height_for(TextRole::Body);
        assert!(SkillsSection(&skills).lead_height(profile) > body);
    }
}
