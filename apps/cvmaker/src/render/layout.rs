//! Layout selector — arranges header, contact, photo, and section fragments
//! into one of six fixed layouts keyed by `TemplateId`.
//!
//! Multi-region templates bucket fragments by typed key membership against a
//! fixed key set per region; within a region fragments keep the relative
//! order `section_order` imposed. Markup content is never re-inspected.

use crate::models::{Document, Personal, PhotoMode, SectionKey, TemplateId};
use crate::render::escape::{escape_attr, escape_html};
use crate::render::sections::{build_fragments, SectionFragment};

/// Side-column sections for the two-column modern template.
const MODERN_SIDE: [SectionKey; 3] = [
    SectionKey::Skills,
    SectionKey::Certifications,
    SectionKey::Referees,
];

/// Side-column sections for the two-column ATS template.
const ATS_SIDE: [SectionKey; 2] = [SectionKey::Skills, SectionKey::Certifications];

/// Renders the complete CV markup for the document's selected template.
pub fn render_document(doc: &Document) -> String {
    let fragments = build_fragments(doc);
    let body = match doc.meta.template {
        TemplateId::Modern1 => modern_one(doc, &fragments),
        TemplateId::Modern2 => modern_two(doc, &fragments),
        TemplateId::Modern3 => modern_three(doc, &fragments),
        TemplateId::Ats1 => ats_one(doc, &fragments),
        TemplateId::Ats2 => ats_two(doc, &fragments),
        TemplateId::Ats3 => ats_three(doc, &fragments),
    };
    format!(
        "<div class=\"cv template-{} font-{}\" style=\"--accent: {};\">{}</div>",
        doc.meta.template.as_str(),
        doc.meta.font.as_str(),
        escape_attr(&doc.meta.accent),
        body
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Region bucketing
// ────────────────────────────────────────────────────────────────────────────

fn in_region(fragments: &[SectionFragment], keys: &[SectionKey]) -> String {
    fragments
        .iter()
        .filter(|f| keys.contains(&f.key))
        .map(|f| f.html.as_str())
        .collect()
}

fn outside_region(fragments: &[SectionFragment], keys: &[SectionKey]) -> String {
    fragments
        .iter()
        .filter(|f| !keys.contains(&f.key))
        .map(|f| f.html.as_str())
        .collect()
}

fn all_sections(fragments: &[SectionFragment]) -> String {
    fragments.iter().map(|f| f.html.as_str()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Shared blocks
// ────────────────────────────────────────────────────────────────────────────

fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

fn header_block(personal: &Personal) -> String {
    format!(
        "<div class=\"sec header\"><h1>{}</h1><div class=\"role\">{}</div></div>",
        escape_html(text_or(&personal.full_name, "Your Name")),
        escape_html(personal.job_title.trim())
    )
}

enum ContactMode {
    /// Titled column block for side columns.
    Column,
    /// Inline row under the header.
    Row,
}

fn contact_block(personal: &Personal, mode: ContactMode) -> String {
    let items: Vec<&str> = [
        personal.phone.as_str(),
        personal.email.as_str(),
        personal.location.as_str(),
        personal.link.as_str(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .collect();

    if items.is_empty() {
        return String::new();
    }

    let entries: String = items
        .iter()
        .map(|item| format!("<div>{}</div>", escape_html(item)))
        .collect();

    match mode {
        ContactMode::Column => format!(
            "<div class=\"sec\"><div class=\"section-title\">Contact</div>\
             <div class=\"contact\">{entries}</div></div>"
        ),
        ContactMode::Row => format!("<div class=\"contact contact-row\">{entries}</div>"),
    }
}

enum PhotoShape {
    Square,
    Circle,
}

/// Empty when the photo is toggled off or no payload exists — the slot
/// collapses instead of leaving a placeholder, under every template.
fn photo_block(doc: &Document, shape: PhotoShape) -> String {
    if doc.meta.photo_mode != PhotoMode::On || !doc.has_photo() {
        return String::new();
    }
    let class = match shape {
        PhotoShape::Square => "photo",
        PhotoShape::Circle => "photo photo-circle",
    };
    format!(
        "<div class=\"{}\"><img src=\"{}\" alt=\"Photo\" /></div>",
        class,
        escape_attr(&doc.photo_data_url)
    )
}

fn divider() -> &'static str {
    "<div class=\"hr\"></div>"
}

// ────────────────────────────────────────────────────────────────────────────
// The six layouts
// ────────────────────────────────────────────────────────────────────────────

/// Two-column: photo, accent bar, contact, and {skills, certs, referees} in
/// the side column; header plus everything else in the main column.
fn modern_one(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"left\">{}{}{}{}</div><div class=\"right\">{}{}</div>",
        photo_block(doc, PhotoShape::Square),
        "<div class=\"accent\"></div>",
        contact_block(&doc.personal, ContactMode::Column),
        in_region(fragments, &MODERN_SIDE),
        header_block(&doc.personal),
        outside_region(fragments, &MODERN_SIDE),
    )
}

/// Single column: header and contact inline in a row with a circular photo
/// beside them, all sections below.
fn modern_two(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"header\"><div class=\"header-row\"><div>{}{}</div>{}</div></div>\
         <div class=\"body\">{}</div>",
        header_block(&doc.personal),
        contact_block(&doc.personal, ContactMode::Row),
        photo_block(doc, PhotoShape::Circle),
        all_sections(fragments),
    )
}

/// Single column: centered header, divider, contact row, all sections grouped
/// in one card box.
fn modern_three(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"header\">{}{}{}</div>\
         <div class=\"body\"><div class=\"cardbox\">{}</div></div>",
        header_block(&doc.personal),
        divider(),
        contact_block(&doc.personal, ContactMode::Row),
        all_sections(fragments),
    )
}

/// ATS single column: header, divider, contact row, all sections. No photo.
fn ats_one(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"header\">{}{}{}</div><div class=\"body\">{}</div>",
        header_block(&doc.personal),
        divider(),
        contact_block(&doc.personal, ContactMode::Row),
        all_sections(fragments),
    )
}

/// ATS compact: header and contact row with no divider. No photo.
fn ats_two(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"header\">{}{}</div><div class=\"body\">{}</div>",
        header_block(&doc.personal),
        contact_block(&doc.personal, ContactMode::Row),
        all_sections(fragments),
    )
}

/// Two-column ATS: main column holds header, contact, and the non-side
/// sections; side column holds the photo plus {skills, certs}.
fn ats_three(doc: &Document, fragments: &[SectionFragment]) -> String {
    format!(
        "<div class=\"main\">{}{}{}{}</div><div class=\"side\">{}{}</div>",
        header_block(&doc.personal),
        divider(),
        contact_block(&doc.personal, ContactMode::Row),
        outside_region(fragments, &ATS_SIDE),
        photo_block(doc, PhotoShape::Square),
        in_region(fragments, &ATS_SIDE),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, PhotoMode, TemplateId};

    fn doc_with_template(template: TemplateId) -> Document {
        let mut doc = Document::default();
        doc.meta.template = template;
        doc
    }

    #[test]
    fn test_empty_skills_emit_no_skills_markup_on_ats_two() {
        let mut doc = doc_with_template(TemplateId::Ats2);
        doc.skills.clear();
        let html = render_document(&doc);
        assert!(!html.contains("data-sec=\"skills\""));
        assert!(!html.contains("class=\"chip\""));
    }

    #[test]
    fn test_photo_off_renders_no_image_on_any_template() {
        for template in TemplateId::ALL {
            let mut doc = doc_with_template(template);
            doc.photo_data_url = "data:image/png;base64,AAAA".to_string();
            doc.meta.photo_mode = PhotoMode::Off;
            let html = render_document(&doc);
            assert!(
                !html.contains("<img"),
                "template {} leaked a photo",
                template.as_str()
            );
        }
    }

    #[test]
    fn test_missing_payload_collapses_photo_slot() {
        let mut doc = doc_with_template(TemplateId::Modern1);
        doc.meta.photo_mode = PhotoMode::On;
        doc.photo_data_url.clear();
        let html = render_document(&doc);
        assert!(!html.contains("class=\"photo\""));
    }

    #[test]
    fn test_modern_one_routes_side_sections_left() {
        let mut doc = doc_with_template(TemplateId::Modern1);
        doc.referees = "Jane Ref — CEO".to_string();
        let html = render_document(&doc);
        let right = html.find("class=\"right\"").unwrap();
        for key in ["skills", "certs", "referees"] {
            let pos = html.find(&format!("data-sec=\"{key}\"")).unwrap();
            assert!(pos < right, "{key} should sit in the left column");
        }
        assert!(html.find("data-sec=\"experience\"").unwrap() > right);
    }

    #[test]
    fn test_ats_three_keeps_referees_in_main_column() {
        let mut doc = doc_with_template(TemplateId::Ats3);
        doc.referees = "Jane Ref — CEO".to_string();
        let html = render_document(&doc);
        let side = html.find("class=\"side\"").unwrap();
        assert!(html.find("data-sec=\"referees\"").unwrap() < side);
        assert!(html.find("data-sec=\"skills\"").unwrap() > side);
        assert!(html.find("data-sec=\"certs\"").unwrap() > side);
    }

    #[test]
    fn test_region_order_follows_section_order() {
        let mut doc = doc_with_template(TemplateId::Modern1);
        // Certifications ahead of skills: the side column must preserve that.
        doc.section_order = vec![
            crate::models::SectionKey::Certifications,
            crate::models::SectionKey::Skills,
            crate::models::SectionKey::Summary,
            crate::models::SectionKey::Experience,
            crate::models::SectionKey::Education,
            crate::models::SectionKey::Projects,
            crate::models::SectionKey::Referees,
        ];
        let html = render_document(&doc);
        let certs = html.find("data-sec=\"certs\"").unwrap();
        let skills = html.find("data-sec=\"skills\"").unwrap();
        assert!(certs < skills);
    }

    #[test]
    fn test_header_text_is_escaped() {
        let mut doc = doc_with_template(TemplateId::Ats1);
        doc.personal.full_name = "<script>alert(1)</script>".to_string();
        let html = render_document(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut doc = doc_with_template(TemplateId::Ats1);
        doc.personal.full_name = "   ".to_string();
        let html = render_document(&doc);
        assert!(html.contains("<h1>Your Name</h1>"));
    }

    #[test]
    fn test_contact_block_empty_when_all_fields_blank() {
        let mut doc = doc_with_template(TemplateId::Ats2);
        doc.personal.phone.clear();
        doc.personal.email.clear();
        doc.personal.location.clear();
        doc.personal.link.clear();
        let html = render_document(&doc);
        assert!(!html.contains("class=\"contact"));
    }

    #[test]
    fn test_root_carries_template_font_and_accent() {
        let mut doc = doc_with_template(TemplateId::Modern3);
        doc.meta.accent = "#ff0000".to_string();
        let html = render_document(&doc);
        assert!(html.starts_with("<div class=\"cv template-modern-3 font-inter\""));
        assert!(html.contains("--accent: #ff0000;"));
    }

    #[test]
    fn test_ats_templates_never_render_photo() {
        for template in [TemplateId::Ats1, TemplateId::Ats2] {
            let mut doc = doc_with_template(template);
            doc.meta.photo_mode = PhotoMode::On;
            doc.photo_data_url = "data:image/png;base64,AAAA".to_string();
            let html = render_document(&doc);
            assert!(!html.contains("<img"), "{} has no photo slot", template.as_str());
        }
    }
}
