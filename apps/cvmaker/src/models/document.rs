//! The CV document aggregate and its wire format.
//!
//! The serde shape round-trips the JSON the original web app persisted:
//! camelCase keys, `meta` for display settings, `photoDataUrl`, and the
//! `certs` key for certifications. Unknown enum values never fail a parse —
//! they fold to defaults so a stale or hand-edited file still loads.

#![allow(dead_code)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::models::section::SectionKey;

/// Bumped when the persisted shape changes; absent in legacy files.
pub const SCHEMA_VERSION: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Display settings
// ────────────────────────────────────────────────────────────────────────────

/// One of the six fixed layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateId {
    #[default]
    Modern1,
    Modern2,
    Modern3,
    Ats1,
    Ats2,
    Ats3,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern1,
        TemplateId::Modern2,
        TemplateId::Modern3,
        TemplateId::Ats1,
        TemplateId::Ats2,
        TemplateId::Ats3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern1 => "modern-1",
            TemplateId::Modern2 => "modern-2",
            TemplateId::Modern3 => "modern-3",
            TemplateId::Ats1 => "ats-1",
            TemplateId::Ats2 => "ats-2",
            TemplateId::Ats3 => "ats-3",
        }
    }

    /// Unrecognized ids fall back to the default template.
    pub fn parse(s: &str) -> TemplateId {
        match s {
            "modern-1" => TemplateId::Modern1,
            "modern-2" => TemplateId::Modern2,
            "modern-3" => TemplateId::Modern3,
            "ats-1" => TemplateId::Ats1,
            "ats-2" => TemplateId::Ats2,
            "ats-3" => TemplateId::Ats3,
            _ => TemplateId::default(),
        }
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TemplateId::parse(&s))
    }
}

/// Font applied to the rendered CV (a CSS class on the root node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    #[default]
    Inter,
    System,
    Georgia,
    Mono,
}

impl FontChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontChoice::Inter => "inter",
            FontChoice::System => "system",
            FontChoice::Georgia => "georgia",
            FontChoice::Mono => "mono",
        }
    }

    pub fn parse(s: &str) -> FontChoice {
        match s {
            "system" => FontChoice::System,
            "georgia" => FontChoice::Georgia,
            "mono" => FontChoice::Mono,
            _ => FontChoice::Inter,
        }
    }
}

impl Serialize for FontChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FontChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FontChoice::parse(&s))
    }
}

/// Photo visibility. Anything that is not exactly `"on"` reads as off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoMode {
    #[default]
    On,
    Off,
}

impl PhotoMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoMode::On => "on",
            PhotoMode::Off => "off",
        }
    }

    pub fn parse(s: &str) -> PhotoMode {
        if s == "on" {
            PhotoMode::On
        } else {
            PhotoMode::Off
        }
    }
}

impl Serialize for PhotoMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhotoMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PhotoMode::parse(&s))
    }
}

/// Display metadata, persisted under the `meta` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[serde(default)]
    pub template: TemplateId,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub font: FontChoice,
    #[serde(default)]
    pub photo_mode: PhotoMode,
}

fn default_accent() -> String {
    "#2563eb".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            template: TemplateId::default(),
            accent: default_accent(),
            font: FontChoice::default(),
            photo_mode: PhotoMode::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

fn new_id() -> Uuid {
    Uuid::new_v4()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: String,
}

/// A work history entry. The id targets deletion and edits only — display
/// order is the vec order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    #[serde(default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub year: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The root aggregate: one CV, owned by the running session, persisted whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// 0 means "legacy file without a version"; migrated on load.
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub meta: DisplaySettings,
    #[serde(default)]
    pub photo_data_url: String,
    #[serde(default)]
    pub personal: Personal,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default, rename = "certs")]
    pub certifications: Vec<CertificationRecord>,
    #[serde(default)]
    pub referees: String,
    #[serde(default = "default_section_order")]
    pub section_order: Vec<SectionKey>,
}

fn default_section_order() -> Vec<SectionKey> {
    SectionKey::ALL.to_vec()
}

impl Document {
    pub fn has_photo(&self) -> bool {
        !self.photo_data_url.is_empty()
    }
}

/// First-run document with example content, so a new user sees a filled CV
/// instead of a blank page.
impl Default for Document {
    fn default() -> Self {
        Document {
            schema_version: SCHEMA_VERSION,
            meta: DisplaySettings::default(),
            photo_data_url: String::new(),
            personal: Personal {
                full_name: "Your Name".to_string(),
                job_title: "Customer Service Representative".to_string(),
                phone: "+254 7xx xxx xxx".to_string(),
                email: "email@example.com".to_string(),
                location: "Nairobi, Kenya".to_string(),
                link: String::new(),
            },
            summary: "Hardworking and reliable professional with strong communication \
                      skills and the ability to work under pressure. Seeking a role where \
                      I can grow and contribute to a strong team."
                .to_string(),
            skills: vec![
                "Communication".to_string(),
                "Customer Service".to_string(),
                "Microsoft Excel".to_string(),
                "Time Management".to_string(),
            ],
            experience: vec![ExperienceRecord {
                id: new_id(),
                role: "Customer Service Assistant".to_string(),
                company: "ABC Shop".to_string(),
                location: "Nairobi".to_string(),
                start: "2023".to_string(),
                end: "2025".to_string(),
                bullets: vec![
                    "Served customers and handled cash transactions.".to_string(),
                    "Resolved customer complaints professionally.".to_string(),
                    "Helped increase daily sales through upselling.".to_string(),
                ],
            }],
            education: vec![EducationRecord {
                id: new_id(),
                course: "KCSE".to_string(),
                school: "XYZ High School".to_string(),
                location: "Kenya".to_string(),
                start: "2019".to_string(),
                end: "2022".to_string(),
                bullets: vec!["Completed KCSE with strong performance.".to_string()],
            }],
            projects: vec![ProjectRecord {
                id: new_id(),
                name: "CV Maker Website".to_string(),
                link: String::new(),
                year: "2026".to_string(),
                bullets: vec![
                    "Built a CV maker using HTML, CSS, and JavaScript.".to_string(),
                    "Implemented PDF export and multiple templates.".to_string(),
                ],
            }],
            certifications: vec![CertificationRecord {
                id: new_id(),
                name: "Google Digital Skills for Africa".to_string(),
                issuer: "Google".to_string(),
                year: "2025".to_string(),
            }],
            referees: String::new(),
            section_order: default_section_order(),
        }
    }
}
