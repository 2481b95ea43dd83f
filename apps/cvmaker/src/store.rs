//! Single-writer document store.
//!
//! The store owns the `Document` outright: every UI-facing mutation goes
//! through a method here, and each method synchronously persists the document
//! and notifies subscribers before returning. There is no batching and no
//! shared ownership — the UI thread drives the store, nothing else touches
//! the document.

#![allow(dead_code)]

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    CertificationRecord, Document, EducationRecord, ExperienceRecord, FontChoice, PhotoMode,
    ProjectRecord, SectionKey, TemplateId,
};
use crate::photo;
use crate::storage::{self, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    JobTitle,
    Phone,
    Email,
    Location,
    Link,
}

type Subscriber = Box<dyn Fn(&Document)>;

pub struct DocumentStore {
    doc: Document,
    storage: Storage,
    subscribers: Vec<Subscriber>,
}

impl DocumentStore {
    /// Opens the store from disk, falling back to the default document when
    /// nothing (or nothing readable) is saved.
    pub fn open(storage: Storage) -> Self {
        let doc = storage.load().unwrap_or_default();
        DocumentStore {
            doc,
            storage,
            subscribers: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Registers a callback invoked after every committed mutation.
    pub fn subscribe(&mut self, f: impl Fn(&Document) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Persist then notify. A failed save is logged and does not roll back
    /// the in-memory mutation — the session keeps working from memory.
    fn commit(&mut self) {
        if let Err(e) = self.storage.save(&self.doc) {
            warn!("could not persist CV: {e}");
        }
        for subscriber in &self.subscribers {
            subscriber(&self.doc);
        }
    }

    // ── display settings ────────────────────────────────────────────────────

    pub fn set_template(&mut self, template: TemplateId) {
        self.doc.meta.template = template;
        self.commit();
    }

    pub fn set_accent(&mut self, accent: &str) {
        self.doc.meta.accent = accent.to_string();
        self.commit();
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.doc.meta.font = font;
        self.commit();
    }

    pub fn set_photo_mode(&mut self, mode: PhotoMode) {
        self.doc.meta.photo_mode = mode;
        self.commit();
    }

    // ── free-text fields ────────────────────────────────────────────────────

    pub fn edit_personal(&mut self, field: PersonalField, value: &str) {
        let slot = match field {
            PersonalField::FullName => &mut self.doc.personal.full_name,
            PersonalField::JobTitle => &mut self.doc.personal.job_title,
            PersonalField::Phone => &mut self.doc.personal.phone,
            PersonalField::Email => &mut self.doc.personal.email,
            PersonalField::Location => &mut self.doc.personal.location,
            PersonalField::Link => &mut self.doc.personal.link,
        };
        *slot = value.to_string();
        self.commit();
    }

    pub fn set_summary(&mut self, value: &str) {
        self.doc.summary = value.to_string();
        self.commit();
    }

    pub fn set_referees(&mut self, value: &str) {
        self.doc.referees = value.to_string();
        self.commit();
    }

    // ── skills ──────────────────────────────────────────────────────────────

    /// Adds a skill. Blank input and case-insensitive duplicates are no-ops,
    /// so addition is idempotent under re-typed casing.
    pub fn add_skill(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        if self.doc.skills.iter().any(|s| s.to_lowercase() == lowered) {
            return false;
        }
        self.doc.skills.push(text.to_string());
        self.commit();
        true
    }

    /// Removes the exact skill entry (the chip the user clicked).
    pub fn remove_skill(&mut self, text: &str) -> bool {
        let before = self.doc.skills.len();
        self.doc.skills.retain(|s| s != text);
        if self.doc.skills.len() == before {
            return false;
        }
        self.commit();
        true
    }

    // ── record collections ──────────────────────────────────────────────────

    /// Prepends a placeholder work entry and returns its id.
    pub fn add_experience(&mut self) -> Uuid {
        let record = ExperienceRecord {
            id: Uuid::new_v4(),
            role: "New Role".to_string(),
            company: String::new(),
            location: String::new(),
            start: String::new(),
            end: String::new(),
            bullets: vec!["Did something important...".to_string()],
        };
        let id = record.id;
        self.doc.experience.insert(0, record);
        self.commit();
        id
    }

    pub fn add_education(&mut self) -> Uuid {
        let record = EducationRecord {
            id: Uuid::new_v4(),
            course: "New Qualification".to_string(),
            school: String::new(),
            location: String::new(),
            start: String::new(),
            end: String::new(),
            bullets: vec![],
        };
        let id = record.id;
        self.doc.education.insert(0, record);
        self.commit();
        id
    }

    pub fn add_project(&mut self) -> Uuid {
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            name: "New Project".to_string(),
            link: String::new(),
            year: String::new(),
            bullets: vec!["What you built...".to_string()],
        };
        let id = record.id;
        self.doc.projects.insert(0, record);
        self.commit();
        id
    }

    pub fn add_certification(&mut self) -> Uuid {
        let record = CertificationRecord {
            id: Uuid::new_v4(),
            name: "New Certification".to_string(),
            issuer: String::new(),
            year: String::new(),
        };
        let id = record.id;
        self.doc.certifications.insert(0, record);
        self.commit();
        id
    }

    pub fn delete_experience(&mut self, id: Uuid) -> bool {
        let before = self.doc.experience.len();
        self.doc.experience.retain(|r| r.id != id);
        self.finish_delete(before != self.doc.experience.len())
    }

    pub fn delete_education(&mut self, id: Uuid) -> bool {
        let before = self.doc.education.len();
        self.doc.education.retain(|r| r.id != id);
        self.finish_delete(before != self.doc.education.len())
    }

    pub fn delete_project(&mut self, id: Uuid) -> bool {
        let before = self.doc.projects.len();
        self.doc.projects.retain(|r| r.id != id);
        self.finish_delete(before != self.doc.projects.len())
    }

    pub fn delete_certification(&mut self, id: Uuid) -> bool {
        let before = self.doc.certifications.len();
        self.doc.certifications.retain(|r| r.id != id);
        self.finish_delete(before != self.doc.certifications.len())
    }

    fn finish_delete(&mut self, removed: bool) -> bool {
        if removed {
            self.commit();
        }
        removed
    }

    /// Single-record field edit: apply `f` to the record with the given id.
    pub fn update_experience(&mut self, id: Uuid, f: impl FnOnce(&mut ExperienceRecord)) -> bool {
        match self.doc.experience.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                f(record);
                self.commit();
                true
            }
            None => false,
        }
    }

    pub fn update_education(&mut self, id: Uuid, f: impl FnOnce(&mut EducationRecord)) -> bool {
        match self.doc.education.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                f(record);
                self.commit();
                true
            }
            None => false,
        }
    }

    pub fn update_project(&mut self, id: Uuid, f: impl FnOnce(&mut ProjectRecord)) -> bool {
        match self.doc.projects.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                f(record);
                self.commit();
                true
            }
            None => false,
        }
    }

    pub fn update_certification(
        &mut self,
        id: Uuid,
        f: impl FnOnce(&mut CertificationRecord),
    ) -> bool {
        match self.doc.certifications.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                f(record);
                self.commit();
                true
            }
            None => false,
        }
    }

    // ── section ordering ────────────────────────────────────────────────────

    /// Swaps the section with its neighbor. A no-op at the boundaries;
    /// `section_order` stays a permutation of the seven keys throughout.
    pub fn move_section(&mut self, key: SectionKey, direction: Direction) -> bool {
        let Some(idx) = self.doc.section_order.iter().position(|k| *k == key) else {
            return false;
        };
        let swap_with = match direction {
            Direction::Up if idx > 0 => idx - 1,
            Direction::Down if idx + 1 < self.doc.section_order.len() => idx + 1,
            _ => return false,
        };
        self.doc.section_order.swap(idx, swap_with);
        self.commit();
        true
    }

    // ── photo ───────────────────────────────────────────────────────────────

    /// Stores an uploaded photo. The size cap is checked before any state
    /// change; an oversized upload leaves the document untouched.
    pub fn set_photo(&mut self, bytes: &[u8], mime: &str) -> Result<(), AppError> {
        let data_url = photo::encode_data_url(bytes, mime)?;
        self.doc.photo_data_url = data_url;
        self.commit();
        Ok(())
    }

    pub fn clear_photo(&mut self) {
        self.doc.photo_data_url.clear();
        self.commit();
    }

    // ── whole-document operations ───────────────────────────────────────────

    /// Replaces everything with the default document.
    pub fn reset(&mut self) {
        debug!("resetting CV to defaults");
        self.doc = Document::default();
        self.commit();
    }

    /// Imports a JSON payload. Validation happens before any state change;
    /// a rejected payload leaves the current document untouched.
    pub fn import_json(&mut self, text: &str) -> Result<(), AppError> {
        let doc = storage::import_json(text)?;
        self.doc = doc;
        self.commit();
        Ok(())
    }

    /// Serializes the current document for download.
    pub fn export_json(&self) -> Result<String, AppError> {
        storage::export_json(&self.doc)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn temp_store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("cv.json"));
        (dir, DocumentStore::open(storage))
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_add_skill_case_insensitive_idempotent() {
        let (_dir, mut store) = temp_store();
        store.doc.skills.clear();
        assert!(store.add_skill("Excel"));
        assert!(!store.add_skill("excel"));
        assert!(!store.add_skill("  EXCEL  "));
        assert_eq!(store.document().skills, vec!["Excel".to_string()]);
    }

    #[test]
    fn test_add_skill_rejects_blank() {
        let (_dir, mut store) = temp_store();
        assert!(!store.add_skill("   "));
    }

    #[test]
    fn test_remove_skill_exact_match_only() {
        let (_dir, mut store) = temp_store();
        store.doc.skills = vec!["Excel".to_string()];
        assert!(!store.remove_skill("excel"));
        assert!(store.remove_skill("Excel"));
        assert!(store.document().skills.is_empty());
    }

    // ── section ordering ────────────────────────────────────────────────────

    #[test]
    fn test_move_first_section_up_is_noop() {
        let (_dir, mut store) = temp_store();
        let first = store.document().section_order[0];
        let before = store.document().section_order.clone();
        assert!(!store.move_section(first, Direction::Up));
        assert_eq!(store.document().section_order, before);
    }

    #[test]
    fn test_move_last_section_down_is_noop() {
        let (_dir, mut store) = temp_store();
        let last = *store.document().section_order.last().unwrap();
        assert!(!store.move_section(last, Direction::Down));
    }

    #[test]
    fn test_move_section_swaps_neighbors_and_keeps_permutation() {
        let (_dir, mut store) = temp_store();
        let second = store.document().section_order[1];
        assert!(store.move_section(second, Direction::Up));
        assert_eq!(store.document().section_order[0], second);

        let mut sorted = store.document().section_order.clone();
        sorted.sort_by_key(|k| k.as_str());
        sorted.dedup();
        assert_eq!(sorted.len(), 7);
    }

    // ── records ─────────────────────────────────────────────────────────────

    #[test]
    fn test_add_experience_prepends_with_fresh_id() {
        let (_dir, mut store) = temp_store();
        let existing = store.document().experience[0].id;
        let id = store.add_experience();
        assert_ne!(id, existing);
        assert_eq!(store.document().experience[0].id, id);
        assert_eq!(store.document().experience[0].role, "New Role");
    }

    #[test]
    fn test_delete_experience_by_id() {
        let (_dir, mut store) = temp_store();
        let id = store.add_experience();
        let before = store.document().experience.len();
        assert!(store.delete_experience(id));
        assert_eq!(store.document().experience.len(), before - 1);
        assert!(!store.delete_experience(id));
    }

    #[test]
    fn test_update_experience_edits_and_persists() {
        let (dir, mut store) = temp_store();
        let id = store.document().experience[0].id;
        assert!(store.update_experience(id, |job| job.role = "Lead".to_string()));
        assert_eq!(store.document().experience[0].role, "Lead");

        // A fresh storage handle sees the committed edit on disk.
        let reloaded = Storage::new(dir.path().join("cv.json")).load().unwrap();
        assert_eq!(reloaded.experience[0].role, "Lead");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (_dir, mut store) = temp_store();
        assert!(!store.update_project(Uuid::new_v4(), |p| p.name = "x".to_string()));
    }

    // ── photo ───────────────────────────────────────────────────────────────

    #[test]
    fn test_oversized_photo_leaves_state_unchanged() {
        let (_dir, mut store) = temp_store();
        let bytes = vec![0u8; crate::photo::MAX_PHOTO_BYTES + 1];
        let err = store.set_photo(&bytes, "image/png").unwrap_err();
        assert!(matches!(err, AppError::PhotoTooLarge { .. }));
        assert!(!store.document().has_photo());
    }

    #[test]
    fn test_set_and_clear_photo() {
        let (_dir, mut store) = temp_store();
        store.set_photo(&[1, 2, 3], "image/png").unwrap();
        assert!(store.document().has_photo());
        store.clear_photo();
        assert!(!store.document().has_photo());
    }

    // ── notifications / lifecycle ───────────────────────────────────────────

    #[test]
    fn test_subscriber_runs_on_every_mutation() {
        let (_dir, mut store) = temp_store();
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();
        store.subscribe(move |_doc| seen.set(seen.get() + 1));

        store.set_summary("new summary");
        store.add_skill("Rust");
        store.set_template(TemplateId::Ats2);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_failed_import_leaves_document_untouched() {
        let (_dir, mut store) = temp_store();
        store.set_summary("keep me");
        let err = store.import_json(r#"{"nope": true}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidImport(_)));
        assert_eq!(store.document().summary, "keep me");
    }

    #[test]
    fn test_import_export_round_trip_through_store() {
        let (_dir, mut store) = temp_store();
        store.set_summary("round trip");
        let json = store.export_json().unwrap();

        let (_dir2, mut other) = temp_store();
        other.import_json(&json).unwrap();
        assert_eq!(other.document(), store.document());
    }

    #[test]
    fn test_reset_restores_default_content() {
        let (_dir, mut store) = temp_store();
        store.set_summary("changed");
        store.reset();
        assert_eq!(store.document().personal.full_name, "Your Name");
    }

    #[test]
    fn test_open_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, "definitely not json").unwrap();
        let store = DocumentStore::open(Storage::new(path));
        assert_eq!(store.document().personal.full_name, "Your Name");
    }
}
