//! Section formatters — one pure function per section type.
//!
//! Each formatter returns `None` when its slice of the document is empty
//! after trimming, otherwise a `SectionFragment` tagged with its typed
//! `SectionKey`. The layout selector buckets fragments into regions by that
//! key alone, never by re-inspecting the markup.

use crate::models::{Document, SectionKey};
use crate::render::escape::escape_html;

/// A formatter's output for one section: self-describing markup plus the
/// typed key the layout selector routes on.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFragment {
    pub key: SectionKey,
    pub html: String,
}

/// Builds the non-empty fragments in the order imposed by `section_order`.
pub fn build_fragments(doc: &Document) -> Vec<SectionFragment> {
    doc.section_order
        .iter()
        .filter_map(|key| fragment_for(doc, *key))
        .collect()
}

fn fragment_for(doc: &Document, key: SectionKey) -> Option<SectionFragment> {
    match key {
        SectionKey::Summary => summary_fragment(doc),
        SectionKey::Skills => skills_fragment(doc),
        SectionKey::Experience => experience_fragment(doc),
        SectionKey::Education => education_fragment(doc),
        SectionKey::Projects => projects_fragment(doc),
        SectionKey::Certifications => certifications_fragment(doc),
        SectionKey::Referees => referees_fragment(doc),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared formatting rules
// ────────────────────────────────────────────────────────────────────────────

/// Date range formatting:
/// both blank → empty; start only → `"<start> - Present"`;
/// end only → `"<end>"`; both → `"<start> - <end>"`.
pub fn format_date_range(start: &str, end: &str) -> String {
    let start = start.trim();
    let end = end.trim();
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{start} - Present"),
        (true, false) => end.to_string(),
        (false, false) => format!("{start} - {end}"),
    }
}

/// Joins descriptive fields with `" | "`, skipping blanks after trimming.
fn join_fields(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Wraps a section body with its heading and `data-sec` tag.
fn section_shell(key: SectionKey, body: String) -> SectionFragment {
    let html = format!(
        "<div class=\"sec\" data-sec=\"{}\"><div class=\"section-title\">{}</div>{}</div>",
        key.as_str(),
        key.title(),
        body
    );
    SectionFragment { key, html }
}

/// One record entry: summary line plus an optional bullet list. Bullets are
/// trimmed and empty ones dropped; no `<ul>` is emitted when none survive.
fn record_item(line: &str, bullets: &[String]) -> String {
    let mut html = format!(
        "<div class=\"item\"><div class=\"line1\">{}</div>",
        escape_html(line)
    );
    let kept: Vec<&str> = bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if !kept.is_empty() {
        html.push_str("<ul>");
        for bullet in kept {
            html.push_str("<li>");
            html.push_str(&escape_html(bullet));
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>");
    html
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section formatters
// ────────────────────────────────────────────────────────────────────────────

fn summary_fragment(doc: &Document) -> Option<SectionFragment> {
    let text = doc.summary.trim();
    if text.is_empty() {
        return None;
    }
    let body = format!("<p class=\"para\">{}</p>", escape_html(text));
    Some(section_shell(SectionKey::Summary, body))
}

fn skills_fragment(doc: &Document) -> Option<SectionFragment> {
    if doc.skills.is_empty() {
        return None;
    }
    let mut chips = String::from("<div class=\"chips\">");
    for skill in &doc.skills {
        chips.push_str("<span class=\"chip\">");
        chips.push_str(&escape_html(skill));
        chips.push_str("</span>");
    }
    chips.push_str("</div>");
    Some(section_shell(SectionKey::Skills, chips))
}

fn experience_fragment(doc: &Document) -> Option<SectionFragment> {
    if doc.experience.is_empty() {
        return None;
    }
    let body: String = doc
        .experience
        .iter()
        .map(|job| {
            let range = format_date_range(&job.start, &job.end);
            let line = join_fields(&[
                job.role.as_str(),
                job.company.as_str(),
                job.location.as_str(),
                range.as_str(),
            ]);
            record_item(&line, &job.bullets)
        })
        .collect();
    Some(section_shell(SectionKey::Experience, body))
}

fn education_fragment(doc: &Document) -> Option<SectionFragment> {
    if doc.education.is_empty() {
        return None;
    }
    let body: String = doc
        .education
        .iter()
        .map(|edu| {
            let range = format_date_range(&edu.start, &edu.end);
            let line = join_fields(&[
                edu.course.as_str(),
                edu.school.as_str(),
                edu.location.as_str(),
                range.as_str(),
            ]);
            record_item(&line, &edu.bullets)
        })
        .collect();
    Some(section_shell(SectionKey::Education, body))
}

fn projects_fragment(doc: &Document) -> Option<SectionFragment> {
    if doc.projects.is_empty() {
        return None;
    }
    let body: String = doc
        .projects
        .iter()
        .map(|project| {
            let line = join_fields(&[project.name.as_str(), project.year.as_str()]);
            let link = project.link.trim();
            // Link rides on the summary line after a bullet separator.
            let mut item = format!(
                "<div class=\"item\"><div class=\"line1\">{}",
                escape_html(&line)
            );
            if !link.is_empty() {
                item.push_str(" \u{2022} ");
                item.push_str(&escape_html(link));
            }
            item.push_str("</div>");
            let kept: Vec<&str> = project
                .bullets
                .iter()
                .map(|b| b.trim())
                .filter(|b| !b.is_empty())
                .collect();
            if !kept.is_empty() {
                item.push_str("<ul>");
                for bullet in kept {
                    item.push_str("<li>");
                    item.push_str(&escape_html(bullet));
                    item.push_str("</li>");
                }
                item.push_str("</ul>");
            }
            item.push_str("</div>");
            item
        })
        .collect();
    Some(section_shell(SectionKey::Projects, body))
}

fn certifications_fragment(doc: &Document) -> Option<SectionFragment> {
    if doc.certifications.is_empty() {
        return None;
    }
    let body: String = doc
        .certifications
        .iter()
        .map(|cert| {
            let line = join_fields(&[cert.name.as_str(), cert.issuer.as_str(), cert.year.as_str()]);
            format!(
                "<div class=\"item\"><div class=\"line1\">{}</div></div>",
                escape_html(&line)
            )
        })
        .collect();
    Some(section_shell(SectionKey::Certifications, body))
}

fn referees_fragment(doc: &Document) -> Option<SectionFragment> {
    let lines: Vec<&str> = doc
        .referees
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    let body: String = lines
        .iter()
        .map(|line| {
            format!(
                "<div class=\"item\"><div class=\"line1\">{}</div></div>",
                escape_html(line)
            )
        })
        .collect();
    Some(section_shell(SectionKey::Referees, body))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
