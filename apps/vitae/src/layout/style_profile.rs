//! Style profiles: every visual difference between output styles, as data.
//!
//! Profiles are static, read-only, and shared freely across generation calls.
//! Lengths are millimetres, font sizes are points.

use tracing::{debug, warn};

use crate::layout::font_metrics::{FontFamily, FontWeight};
use crate::layout::wrap::FontSpec;

/// Identifier of the profile used when the requested one is unknown.
pub const DEFAULT_STYLE_ID: &str = "classic-ats";

/// A4 portrait.
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

// ────────────────────────────────────────────────────────────────────────────
// Profile building blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Text roles with their own size in the font-size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Name,
    Title,
    SectionHeader,
    Body,
    Small,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub name: f32,
    pub title: f32,
    pub section_header: f32,
    pub body: f32,
    pub small: f32,
    pub contact: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components in the 0.0–1.0 range PDF colour operators expect.
    pub fn components(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Text,
    Heading,
    Accent,
    Muted,
    Link,
    Rule,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRoles {
    pub text: Rgb,
    pub heading: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
    pub link: Rgb,
    pub rule: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Rule drawn under each section header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleStyle {
    None,
    Line { thickness: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsLayout {
    /// One comma-separated paragraph.
    Inline,
    /// `Category: a, b` per category.
    Grouped,
    /// Two-column grid of name and proficiency label.
    Leveled,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub font_family: FontFamily,
    pub page_width: f32,
    pub page_height: f32,
    pub margins: Margins,
    pub font_sizes: FontSizes,
    pub line_height: f32,
    /// Space before each section header (skipped at the top of a page).
    pub section_spacing: f32,
    /// Space between consecutive entries of one section.
    pub entry_spacing: f32,
    /// Gap between a header's baseline box and its rule, and after the rule.
    pub header_gap: f32,
    pub colors: ColorRoles,
    pub header_align: Align,
    pub rule: RuleStyle,
    pub skills_layout: SkillsLayout,
    pub bullet_glyph: char,
    /// Left indent of bullet text relative to the content box.
    pub bullet_indent: f32,
    pub page_numbers: bool,
}

impl StyleProfile {
    pub fn font_size(&self, role: TextRole) -> f32 {
        let sizes = &self.font_sizes;
        match role {
            TextRole::Name => sizes.name,
            TextRole::Title => sizes.title,
            TextRole::SectionHeader => sizes.section_header,
            TextRole::Body => sizes.body,
            TextRole::Small => sizes.small,
            TextRole::Contact => sizes.contact,
        }
    }

    pub fn font(&self, role: TextRole, weight: FontWeight) -> FontSpec {
        FontSpec::new(self.font_family, weight, self.font_size(role))
    }

    /// Line box height for a role at this profile's line-height multiplier.
    pub fn line_height_for(&self, role: TextRole) -> f32 {
        self.font(role, FontWeight::Regular)
            .line_height(self.line_height)
    }

    pub fn color(&self, role: ColorRole) -> Rgb {
        let colors = &self.colors;
        match role {
            ColorRole::Text => colors.text,
            ColorRole::Heading => colors.heading,
            ColorRole::Accent => colors.accent,
            ColorRole::Muted => colors.muted,
            ColorRole::Link => colors.link,
            ColorRole::Rule => colors.rule,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - self.margins.left - self.margins.right
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile table
// ────────────────────────────────────────────────────────────────────────────

const INK: Rgb = Rgb(33, 33, 33);
const GREY: Rgb = Rgb(102, 102, 102);
const LINK_BLUE: Rgb = Rgb(26, 86, 178);

static PROFILES: [StyleProfile; 6] = [
    StyleProfile {
        id: "classic-ats",
        display_name: "Classic (ATS friendly)",
        font_family: FontFamily::Helvetica,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        },
        font_sizes: FontSizes {
            name: 22.0,
            title: 13.0,
            section_header: 12.0,
            body: 10.0,
            small: 9.0,
            contact: 9.5,
        },
        line_height: 1.35,
        section_spacing: 6.0,
        entry_spacing: 4.0,
        header_gap: 1.5,
        colors: ColorRoles {
            text: Rgb::BLACK,
            heading: Rgb::BLACK,
            accent: Rgb::BLACK,
            muted: GREY,
            link: LINK_BLUE,
            rule: Rgb::BLACK,
        },
        header_align: Align::Left,
        rule: RuleStyle::Line { thickness: 0.3 },
        skills_layout: SkillsLayout::Inline,
        bullet_glyph: '-',
        bullet_indent: 5.0,
        page_numbers: false,
    },
    StyleProfile {
        id: "modern-centered",
        display_name: "Modern (centered)",
        font_family: FontFamily::Helvetica,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 18.0,
            right: 18.0,
            bottom: 18.0,
            left: 18.0,
        },
        font_sizes: FontSizes {
            name: 26.0,
            title: 14.0,
            section_header: 12.5,
            body: 10.0,
            small: 9.0,
            contact: 9.5,
        },
        line_height: 1.4,
        section_spacing: 7.0,
        entry_spacing: 4.5,
        header_gap: 1.8,
        colors: ColorRoles {
            text: INK,
            heading: Rgb(30, 64, 124),
            accent: Rgb(30, 64, 124),
            muted: GREY,
            link: LINK_BLUE,
            rule: Rgb(30, 64, 124),
        },
        header_align: Align::Center,
        rule: RuleStyle::Line { thickness: 0.5 },
        skills_layout: SkillsLayout::Inline,
        bullet_glyph: '•',
        bullet_indent: 5.0,
        page_numbers: false,
    },
    StyleProfile {
        id: "minimal-spacious",
        display_name: "Minimal (spacious)",
        font_family: FontFamily::Helvetica,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 28.0,
            right: 26.0,
            bottom: 26.0,
            left: 26.0,
        },
        font_sizes: FontSizes {
            name: 24.0,
            title: 12.0,
            section_header: 11.0,
            body: 10.0,
            small: 9.0,
            contact: 9.0,
        },
        line_height: 1.6,
        section_spacing: 10.0,
        entry_spacing: 6.0,
        header_gap: 2.5,
        colors: ColorRoles {
            text: INK,
            heading: INK,
            accent: GREY,
            muted: Rgb(128, 128, 128),
            link: INK,
            rule: Rgb(200, 200, 200),
        },
        header_align: Align::Left,
        rule: RuleStyle::Line { thickness: 0.15 },
        skills_layout: SkillsLayout::Inline,
        bullet_glyph: '•',
        bullet_indent: 6.0,
        page_numbers: false,
    },
    StyleProfile {
        id: "executive-serif",
        display_name: "Executive (serif)",
        font_family: FontFamily::Times,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 22.0,
            right: 22.0,
            bottom: 22.0,
            left: 22.0,
        },
        font_sizes: FontSizes {
            name: 24.0,
            title: 13.0,
            section_header: 13.0,
            body: 11.0,
            small: 9.5,
            contact: 10.0,
        },
        line_height: 1.3,
        section_spacing: 7.0,
        entry_spacing: 4.0,
        header_gap: 1.5,
        colors: ColorRoles {
            text: Rgb::BLACK,
            heading: Rgb(60, 35, 20),
            accent: Rgb(60, 35, 20),
            muted: Rgb(90, 90, 90),
            link: Rgb(60, 35, 20),
            rule: Rgb(60, 35, 20),
        },
        header_align: Align::Center,
        rule: RuleStyle::Line { thickness: 0.8 },
        skills_layout: SkillsLayout::Inline,
        bullet_glyph: '•',
        bullet_indent: 5.0,
        page_numbers: true,
    },
    StyleProfile {
        id: "compact-technical",
        display_name: "Compact (technical)",
        font_family: FontFamily::Helvetica,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 14.0,
            right: 15.0,
            bottom: 15.0,
            left: 15.0,
        },
        font_sizes: FontSizes {
            name: 20.0,
            title: 11.5,
            section_header: 11.0,
            body: 9.0,
            small: 8.0,
            contact: 8.5,
        },
        line_height: 1.25,
        section_spacing: 4.0,
        entry_spacing: 2.5,
        header_gap: 1.0,
        colors: ColorRoles {
            text: INK,
            heading: Rgb(20, 20, 20),
            accent: Rgb(0, 110, 100),
            muted: GREY,
            link: Rgb(0, 110, 100),
            rule: Rgb(0, 110, 100),
        },
        header_align: Align::Left,
        rule: RuleStyle::Line { thickness: 0.25 },
        skills_layout: SkillsLayout::Grouped,
        bullet_glyph: '•',
        bullet_indent: 4.0,
        page_numbers: true,
    },
    StyleProfile {
        id: "creative-accent",
        display_name: "Creative (accent colour)",
        font_family: FontFamily::Helvetica,
        page_width: A4_WIDTH_MM,
        page_height: A4_HEIGHT_MM,
        margins: Margins {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        },
        font_sizes: FontSizes {
            name: 28.0,
            title: 14.0,
            section_header: 13.0,
            body: 10.0,
            small: 9.0,
            contact: 9.5,
        },
        line_height: 1.4,
        section_spacing: 7.0,
        entry_spacing: 4.5,
        header_gap: 1.5,
        colors: ColorRoles {
            text: INK,
            heading: Rgb(196, 62, 28),
            accent: Rgb(196, 62, 28),
            muted: GREY,
            link: Rgb(196, 62, 28),
            rule: Rgb(196, 62, 28),
        },
        header_align: Align::Left,
        rule: RuleStyle::None,
        skills_layout: SkillsLayout::Leveled,
        bullet_glyph: '•',
        bullet_indent: 5.0,
        page_numbers: false,
    },
];

/// All built-in profiles, default first.
pub fn profiles() -> &'static [StyleProfile] {
    &PROFILES
}

/// Looks up a profile by identifier (case-insensitive, surrounding whitespace ignored).
pub fn find_profile(id: &str) -> Option<&'static StyleProfile> {
    let id = id.trim();
    PROFILES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// The profile used when nothing else matches.
pub fn default_profile() -> &'static StyleProfile {
    &PROFILES[0]
}

/// Resolves a style identifier, falling back to the default profile.
///
/// Never fails: an unknown identifier is logged at warn level and the
/// default profile is returned.
pub fn resolve_profile(id: &str) -> &'static StyleProfile {
    if let Some(profile) = find_profile(id) {
        return profile;
    }
    if id.trim().is_empty() {
        debug!("No style requested, using '{DEFAULT_STYLE_ID}'");
    } else {
        warn!(
            requested = id,
            fallback = DEFAULT_STYLE_ID,
            "Unknown style identifier, falling back to default profile"
        );
    }
    default_profile()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_classic_ats() {
        assert_eq!(default_profile().id, DEFAULT_STYLE_ID);
    }

    #[test]
    fn test_profile_ids_are_unique() {
        let mut ids: Vec<&str> = profiles().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles().len());
    }

    #[test]
    fn test_find_profile_is_case_insensitive() {
        let profile = find_profile("  Modern-Centered ").expect("profile exists");
        assert_eq!(profile.id, "modern-centered");
    }

    #[test]
    fn test_unknown_identifier_falls_back() {
        assert_eq!(resolve_profile("nonexistent-style").id, DEFAULT_STYLE_ID);
        assert_eq!(resolve_profile("").id, DEFAULT_STYLE_ID);
    }

    #[test]
    fn test_profiles_have_sane_geometry() {
        for profile in profiles() {
            let usable_height =
                profile.page_height - profile.margins.top - profile.margins.bottom;
            assert!(profile.content_width() > 100.0, "{}", profile.id);
            assert!(usable_height > 200.0, "{}", profile.id);
            assert!(profile.line_height >= 1.0, "{}", profile.id);
            assert!(profile.font_sizes.name > profile.font_sizes.body, "{}", profile.id);
            assert!(profile.font_sizes.body > profile.font_sizes.small, "{}", profile.id);
        }
    }

    #[test]
    fn test_font_size_table_lookup() {
        let profile = default_profile();
        assert_eq!(profile.font_size(TextRole::Body), profile.font_sizes.body);
        assert_eq!(profile.font_size(TextRole::Name), profile.font_sizes.name);
        let font = profile.font(TextRole::SectionHeader, FontWeight::Bold);
        assert_eq!(font.size_pt, profile.font_sizes.section_header);
        assert_eq!(font.family, profile.font_family);
    }

    #[test]
    fn test_rgb_components_normalized() {
        assert_eq!(Rgb(255, 0, 51).components(), [1.0, 0.0, 0.2]);
    }
}
