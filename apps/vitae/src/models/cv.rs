//! CV data object consumed by the layout engine.
//!
//! The JSON boundary is camelCase (the form layer's shape). Every struct
//! defaults missing fields so a partially filled form still deserializes;
//! empty strings are treated exactly like absent values by the formatters.

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

// ────────────────────────────────────────────────────────────────────────────
// Root
// ────────────────────────────────────────────────────────────────────────────

/// Root CV object. All lists are in display order; the engine never re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cv {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub extracurriculars: Vec<Extracurricular>,
    /// Style/template identifier chosen in the form layer.
    pub template: Option<String>,
}

impl Cv {
    /// Parses a CV from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The style identifier stored on the CV, or empty when none was chosen.
    pub fn style_id(&self) -> &str {
        self.template.as_deref().unwrap_or("")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    /// `YYYY-MM`, but any string is accepted and degraded at render time.
    pub start_date: String,
    pub end_date: Option<String>,
    /// When set, the end bound renders as "Present" whatever `end_date` holds.
    pub is_current_job: bool,
    pub bullet_points: Vec<BulletPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletPoint {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub class_of_degree: Option<ClassOfDegree>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// UK-style degree classification.
///
/// Unknown values are kept verbatim instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassOfDegree {
    First,
    UpperSecond,
    LowerSecond,
    Third,
    Pass,
    Distinction,
    Merit,
    Other(String),
}

impl ClassOfDegree {
    /// Human-readable label; `None` when there is nothing to show.
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            ClassOfDegree::First => "First Class Honours",
            ClassOfDegree::UpperSecond => "Second Class Upper",
            ClassOfDegree::LowerSecond => "Second Class Lower",
            ClassOfDegree::Third => "Third Class Honours",
            ClassOfDegree::Pass => "Pass",
            ClassOfDegree::Distinction => "Distinction",
            ClassOfDegree::Merit => "Merit",
            ClassOfDegree::Other(raw) => raw.trim(),
        };
        (!label.is_empty()).then_some(label)
    }
}

impl From<String> for ClassOfDegree {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "first" => ClassOfDegree::First,
            "upperSecond" => ClassOfDegree::UpperSecond,
            "lowerSecond" => ClassOfDegree::LowerSecond,
            "third" => ClassOfDegree::Third,
            "pass" => ClassOfDegree::Pass,
            "distinction" => ClassOfDegree::Distinction,
            "merit" => ClassOfDegree::Merit,
            _ => ClassOfDegree::Other(raw),
        }
    }
}

impl From<ClassOfDegree> for String {
    fn from(class: ClassOfDegree) -> Self {
        match class {
            ClassOfDegree::First => "first".to_string(),
            ClassOfDegree::UpperSecond => "upperSecond".to_string(),
            ClassOfDegree::LowerSecond => "lowerSecond".to_string(),
            ClassOfDegree::Third => "third".to_string(),
            ClassOfDegree::Pass => "pass".to_string(),
            ClassOfDegree::Distinction => "distinction".to_string(),
            ClassOfDegree::Merit => "merit".to_string(),
            ClassOfDegree::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// 1–5; anything else is ignored by the formatter.
    pub level: Option<u8>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extracurricular {
    pub title: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
    pub description: Option<String>,
}

/// Trimmed, non-empty view of an optional field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Trimmed, non-empty view of a required-but-possibly-blank field.
pub fn present_str(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
