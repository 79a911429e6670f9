//! One-way JSON export of the current document.

use serde::Serialize;

use crate::models::resume::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, SkillBlock,
};

/// File name offered to the browser for the download.
pub const EXPORT_FILE_NAME: &str = "resume-builder-export.json";

#[derive(Debug, Serialize)]
struct ExportPayload<'a> {
    personal: &'a PersonalInfo,
    experiences: &'a [Experience],
    educations: &'a [Education],
    projects: &'a [Project],
    skills: &'a [SkillBlock],
}

/// Serializes the document as pretty-printed JSON (2-space indentation).
pub fn export_document(doc: &ResumeDocument) -> Result<String, serde_json::Error> {
    let payload = ExportPayload {
        personal: &doc.personal,
        experiences: &doc.experiences,
        educations: &doc.educations,
        projects: &doc.projects,
        skills: &doc.skills,
    };
    serde_json::to_string_pretty(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionEntry;

    fn filled_document() -> ResumeDocument {
        let mut doc = ResumeDocument::starter();
        doc.personal.full_name = "Ada Lovelace".to_string();
        doc.personal.summary = "Writes \"programs\" for engines.\nSecond line.".to_string();
        doc.experiences[0].role = "Analyst".to_string();
        doc.experiences[0].bullets = vec!["First".to_string(), "Second".to_string()];
        let mut second = Experience::blank();
        second.company = "Babbage & Co".to_string();
        doc.experiences.push(second);
        doc.projects[0].highlights = vec!["Note G".to_string()];
        doc.skills[0].items = "Mathematics, Poetry".to_string();
        doc
    }

    #[test]
    fn test_export_round_trips_values_and_order() {
        let doc = filled_document();
        let json = export_document(&doc).unwrap();
        let parsed: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.experiences.len(), 2);
        assert_eq!(parsed.experiences[1].company, "Babbage & Co");
    }

    #[test]
    fn test_export_has_exactly_the_five_top_level_keys() {
        let json = export_document(&ResumeDocument::starter()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["educations", "experiences", "personal", "projects", "skills"]
        );
    }

    #[test]
    fn test_export_is_indented_with_two_spaces() {
        let json = export_document(&ResumeDocument::default()).unwrap();
        assert!(json.starts_with("{\n  \"personal\": {\n    \"fullName\""));
    }
}
