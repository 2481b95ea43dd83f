//! Export adapter: turns the rendered CV into a downloadable document.
//!
//! The adapter seam is a trait object so the rendering pipeline is
//! swappable; the shipped implementation writes a standalone HTML page with
//! an embedded stylesheet. `ExportController` owns the in-flight flag that
//! keeps exports from overlapping — the equivalent of disabling the download
//! button while one runs. Export never touches the in-memory document, so a
//! failed run cannot corrupt state.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::models::Document;
use crate::render::render_document;

#[async_trait]
pub trait ExportAdapter: Send + Sync {
    /// Renders the CV markup into a file named from `file_stem` and returns
    /// the written path.
    async fn render(&self, html: &str, file_stem: &str) -> Result<PathBuf, AppError>;
}

/// Output file stem: the sanitized full name (whitespace runs collapsed to
/// underscores, `"CV"` when blank) plus the fixed `_CV` suffix.
pub fn export_file_stem(full_name: &str) -> String {
    let name = full_name.trim();
    let name = if name.is_empty() { "CV" } else { name };
    let collapsed: Vec<&str> = name.split_whitespace().collect();
    format!("{}_CV", collapsed.join("_"))
}

// ────────────────────────────────────────────────────────────────────────────
// HTML file adapter
// ────────────────────────────────────────────────────────────────────────────

pub struct HtmlFileExport {
    out_dir: PathBuf,
}

impl HtmlFileExport {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        HtmlFileExport {
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl ExportAdapter for HtmlFileExport {
    async fn render(&self, html: &str, file_stem: &str) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.out_dir).await?;
        let path = self.out_dir.join(format!("{file_stem}.html"));
        tokio::fs::write(&path, wrap_page(html)).await?;
        info!("exported CV to {}", path.display());
        Ok(path)
    }
}

fn wrap_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>CV</title>\n<style>{STYLESHEET}</style>\n</head>\n\
         <body>{body}</body>\n</html>\n"
    )
}

const STYLESHEET: &str = r#"
:root { --accent: #2563eb; }
body { margin: 0; background: #f3f4f6; }
.cv { max-width: 800px; margin: 24px auto; padding: 32px; background: #fff; color: #111827; line-height: 1.45; }
.font-inter { font-family: "Inter", "Helvetica Neue", Arial, sans-serif; }
.font-system { font-family: system-ui, sans-serif; }
.font-georgia { font-family: Georgia, "Times New Roman", serif; }
.font-mono { font-family: "Courier New", monospace; }
h1 { margin: 0; font-size: 26px; }
.role { color: var(--accent); font-weight: 600; }
.sec { padding: 10px 0; }
.section-title { font-size: 13px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.06em; color: var(--accent); margin-bottom: 6px; }
.item { margin-bottom: 8px; }
.line1 { font-weight: 600; }
.item ul { margin: 4px 0 0 18px; padding: 0; }
.contact div { font-size: 13px; }
.contact-row { display: flex; gap: 14px; flex-wrap: wrap; margin-top: 10px; }
.chips { display: flex; flex-wrap: wrap; gap: 6px; }
.chip { border: 1px solid var(--accent); border-radius: 999px; padding: 2px 10px; font-size: 12px; }
.hr { height: 2px; background: var(--accent); margin: 10px 0; }
.accent { height: 4px; background: var(--accent); margin: 10px 0; }
.photo img { width: 120px; height: 120px; object-fit: cover; }
.photo-circle img { border-radius: 50%; }
.template-modern-1, .template-ats-3 { display: grid; grid-template-columns: 1fr 2fr; gap: 24px; }
.template-ats-3 { grid-template-columns: 2fr 1fr; }
.template-modern-1 .left { border-right: 2px solid var(--accent); padding-right: 16px; }
.template-modern-2 .header-row { display: flex; justify-content: space-between; align-items: center; }
.template-modern-3 .header { text-align: center; }
.cardbox { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; }
"#;

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

/// Serializes export attempts: a second export while one is in flight fails
/// fast with `ExportInProgress`. The flag is released on success and failure
/// alike.
pub struct ExportController {
    in_flight: AtomicBool,
    adapter: Arc<dyn ExportAdapter>,
}

impl ExportController {
    pub fn new(adapter: Arc<dyn ExportAdapter>) -> Self {
        ExportController {
            in_flight: AtomicBool::new(false),
            adapter,
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn export(&self, doc: &Document) -> Result<PathBuf, AppError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::ExportInProgress);
        }
        let html = render_document(doc);
        let stem = export_file_stem(&doc.personal.full_name);
        let result = self.adapter.render(&html, &stem).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
