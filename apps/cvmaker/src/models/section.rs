use serde::{Deserialize, Serialize};

/// The seven content sections a CV can carry. The wire names match the
/// persisted JSON keys (note `certs` for certifications).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    #[serde(rename = "certs")]
    Certifications,
    Referees,
}

impl SectionKey {
    /// Canonical order, also the default `section_order`.
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Summary,
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Referees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Skills => "skills",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certs",
            SectionKey::Referees => "referees",
        }
    }

    /// Heading shown on the rendered CV.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Summary => "Summary",
            SectionKey::Skills => "Skills",
            SectionKey::Experience => "Work Experience",
            SectionKey::Education => "Education",
            SectionKey::Projects => "Projects",
            SectionKey::Certifications => "Certifications",
            SectionKey::Referees => "Referees",
        }
    }
}

/// Repairs a section order into a permutation of the seven keys: duplicates
/// are dropped (first occurrence wins) and missing keys are appended in
/// canonical order. Applied on load and import, so downstream code can rely
/// on the permutation invariant.
pub fn normalize_section_order(order: &mut Vec<SectionKey>) {
    let mut seen: Vec<SectionKey> = Vec::with_capacity(SectionKey::ALL.len());
    for key in order.iter() {
        if !seen.contains(key) {
            seen.push(*key);
        }
    }
    for key in SectionKey::ALL {
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    *order = seen;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_has_seven_unique_keys() {
        let mut keys = SectionKey::ALL.to_vec();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_normalize_drops_duplicates_keeping_first() {
        let mut order = vec![
            SectionKey::Skills,
            SectionKey::Summary,
            SectionKey::Skills,
            SectionKey::Experience,
        ];
        normalize_section_order(&mut order);
        assert_eq!(order.len(), 7);
        assert_eq!(order[0], SectionKey::Skills);
        assert_eq!(order[1], SectionKey::Summary);
        assert_eq!(order[2], SectionKey::Experience);
    }

    #[test]
    fn test_normalize_appends_missing_in_canonical_order() {
        let mut order = vec![SectionKey::Referees];
        normalize_section_order(&mut order);
        assert_eq!(order[0], SectionKey::Referees);
        assert_eq!(
            &order[1..],
            &[
                SectionKey::Summary,
                SectionKey::Skills,
                SectionKey::Experience,
                SectionKey::Education,
                SectionKey::Projects,
                SectionKey::Certifications,
            ]
        );
    }

    #[test]
    fn test_normalize_is_identity_on_valid_permutation() {
        let mut order = vec![
            SectionKey::Referees,
            SectionKey::Certifications,
            SectionKey::Projects,
            SectionKey::Education,
            SectionKey::Experience,
            SectionKey::Skills,
            SectionKey::Summary,
        ];
        let before = order.clone();
        normalize_section_order(&mut order);
        assert_eq!(order, before);
    }

    #[test]
    fn test_certifications_wire_name_is_certs() {
        let json = serde_json::to_string(&SectionKey::Certifications).unwrap();
        assert_eq!(json, "\"certs\"");
        let back: SectionKey = serde_json::from_str("\"certs\"").unwrap();
        assert_eq!(back, SectionKey::Certifications);
    }
}
