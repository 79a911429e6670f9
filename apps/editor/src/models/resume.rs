use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The root aggregate edited during a session. A single owned tree: no record
/// is ever shared between two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillBlock>,
}

impl ResumeDocument {
    /// The shape the editor opens with: empty personal details and one blank
    /// record in every list so each form section has something to edit.
    pub fn starter() -> Self {
        Self {
            personal: PersonalInfo::default(),
            experiences: vec![Experience::blank()],
            educations: vec![Education::blank()],
            projects: vec![Project::blank()],
            skills: vec![SkillBlock::blank()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: String,
    /// Free text, never parsed as a date.
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub details: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub link: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBlock {
    pub id: Uuid,
    pub label: String,
    /// Comma-separated, kept exactly as typed.
    pub items: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates
// ────────────────────────────────────────────────────────────────────────────

/// Fields present in a patch overwrite the record; absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPatch {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub details: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    pub label: Option<String>,
    pub items: Option<String>,
}

fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl PersonalInfo {
    pub fn merge(&mut self, patch: PersonalPatch) {
        merge_field(&mut self.full_name, patch.full_name);
        merge_field(&mut self.headline, patch.headline);
        merge_field(&mut self.email, patch.email);
        merge_field(&mut self.phone, patch.phone);
        merge_field(&mut self.location, patch.location);
        merge_field(&mut self.website, patch.website);
        merge_field(&mut self.linkedin, patch.linkedin);
        merge_field(&mut self.summary, patch.summary);
    }
}

/// A record living in one of the document's ordered lists.
///
/// `blank` is the factory: it stamps a fresh identifier and empty fields.
/// `merge` must never touch the identifier.
pub trait SectionEntry {
    type Patch;

    /// Plural section name, used in error messages and logs.
    const SECTION: &'static str;

    fn blank() -> Self;
    fn id(&self) -> Uuid;
    fn merge(&mut self, patch: Self::Patch);
}

impl SectionEntry for Experience {
    type Patch = ExperiencePatch;
    const SECTION: &'static str = "experiences";

    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            bullets: Vec::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn merge(&mut self, patch: ExperiencePatch) {
        merge_field(&mut self.role, patch.role);
        merge_field(&mut self.company, patch.company);
        merge_field(&mut self.location, patch.location);
        merge_field(&mut self.start_date, patch.start_date);
        merge_field(&mut self.end_date, patch.end_date);
        merge_field(&mut self.bullets, patch.bullets);
    }
}

impl SectionEntry for Education {
    type Patch = EducationPatch;
    const SECTION: &'static str = "educations";

    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            details: String::new(),
            location: String::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn merge(&mut self, patch: EducationPatch) {
        merge_field(&mut self.school, patch.school);
        merge_field(&mut self.degree, patch.degree);
        merge_field(&mut self.start_date, patch.start_date);
        merge_field(&mut self.end_date, patch.end_date);
        merge_field(&mut self.details, patch.details);
        merge_field(&mut self.location, patch.location);
    }
}

impl SectionEntry for Project {
    type Patch = ProjectPatch;
    const SECTION: &'static str = "projects";

    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            link: String::new(),
            highlights: Vec::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn merge(&mut self, patch: ProjectPatch) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.link, patch.link);
        merge_field(&mut self.highlights, patch.highlights);
    }
}

impl SectionEntry for SkillBlock {
    type Patch = SkillPatch;
    const SECTION: &'static str = "skills";

    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            label: String::new(),
            items: String::new(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn merge(&mut self, patch: SkillPatch) {
        merge_field(&mut self.label, patch.label);
        merge_field(&mut self.items, patch.items);
    }
}
