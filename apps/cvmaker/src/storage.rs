//! Persistence adapter: the CV document as a single JSON file on disk.
//!
//! Loading tolerates absent or corrupt data by falling back to `None` —
//! callers then start from the default document. That recovery is silent by
//! design (a warn log, no user-facing error). Import carries the original
//! app's minimal-validation contract: both `personal` and `meta` must be
//! present; every other structural defect is absorbed by serde defaulting.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::{normalize_section_order, Document, SCHEMA_VERSION};

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Writes the document as pretty JSON, creating parent directories.
    pub fn save(&self, doc: &Document) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(doc)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        debug!("saved CV to {}", self.path.display());
        Ok(())
    }

    /// Loads and migrates the saved document. Absent or unreadable data
    /// yields `None`; the caller falls back to defaults.
    pub fn load(&self) -> Option<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("could not read {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<Document>(&raw) {
            Ok(mut doc) => {
                migrate(&mut doc);
                Some(doc)
            }
            Err(e) => {
                warn!(
                    "saved CV at {} is corrupt, starting from defaults: {e}",
                    self.path.display()
                );
                None
            }
        }
    }
}

/// Raises a loaded document to the current schema. Field-level gaps are
/// already defaulted by serde; this re-establishes the invariants serde
/// cannot express.
pub fn migrate(doc: &mut Document) {
    if doc.schema_version < SCHEMA_VERSION {
        debug!(
            "migrating CV schema v{} -> v{}",
            doc.schema_version, SCHEMA_VERSION
        );
        doc.schema_version = SCHEMA_VERSION;
    }
    normalize_section_order(&mut doc.section_order);
}

/// Parses an imported JSON payload. Minimal validation: the payload must be
/// an object carrying both `personal` and `meta` top-level keys.
pub fn import_json(text: &str) -> Result<Document, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| AppError::InvalidImport(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| AppError::InvalidImport("not a JSON object".to_string()))?;
    if !obj.contains_key("personal") || !obj.contains_key("meta") {
        return Err(AppError::InvalidImport(
            "missing personal or meta".to_string(),
        ));
    }
    let mut doc: Document =
        serde_json::from_value(value).map_err(|e| AppError::InvalidImport(e.to_string()))?;
    migrate(&mut doc);
    Ok(doc)
}

/// Serializes the document for download. Round-trips through `import_json`.
pub fn export_json(doc: &Document) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
