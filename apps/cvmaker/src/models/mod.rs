pub mod document;
pub mod section;

pub use document::{
    CertificationRecord, DisplaySettings, Document, EducationRecord, ExperienceRecord, FontChoice,
    Personal, PhotoMode, ProjectRecord, TemplateId, SCHEMA_VERSION,
};
pub use section::{normalize_section_order, SectionKey};
