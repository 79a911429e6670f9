use serde::Serialize;

use crate::models::resume::ResumeDocument;

/// Minimum trimmed summary length (exclusive) for the summary item.
const SUMMARY_MIN_CHARS: usize = 60;
/// Bullets needed on at least one experience entry.
const MIN_EXPERIENCE_BULLETS: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub satisfied: bool,
    /// Both fixed tips for the item, whatever its state.
    pub tips: Vec<String>,
    /// The tips to display right now: empty once the item is satisfied.
    pub visible_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChecklistReport {
    pub items: Vec<ChecklistItem>,
    pub completed: usize,
    pub total: usize,
    /// True only when every item is satisfied, bonus items included.
    pub complete: bool,
}

struct ChecklistRule {
    id: &'static str,
    label: &'static str,
    required: bool,
    check: fn(&ResumeDocument) -> bool,
    tips: [&'static str; 2],
}

/// Display order is part of the contract.
const CHECKLIST_RULES: &[ChecklistRule] = &[
    ChecklistRule {
        id: "contact",
        label: "Contact details",
        required: true,
        check: has_contact_details,
        tips: [
            "Add your full name, a one-line headline, an email address, and your location.",
            "Use a professional email address you check regularly.",
        ],
    },
    ChecklistRule {
        id: "summary",
        label: "Professional summary",
        required: false,
        check: has_substantial_summary,
        tips: [
            "Write two or three sentences on who you are and the value you bring.",
            "Mention your focus area and one standout achievement.",
        ],
    },
    ChecklistRule {
        id: "experience",
        label: "Experience with achievements",
        required: true,
        check: has_detailed_experience,
        tips: [
            "Give at least one role three or more achievement bullets.",
            "Start bullets with an action verb and quantify the outcome where you can.",
        ],
    },
    ChecklistRule {
        id: "education",
        label: "Education",
        required: false,
        check: has_education_detail,
        tips: [
            "Add your degree or certification.",
            "Include honours, relevant coursework, or a thesis topic in the details.",
        ],
    },
    ChecklistRule {
        id: "skills",
        label: "Skills",
        required: true,
        check: has_skills,
        tips: [
            "List the tools and technologies you use, separated by commas.",
            "Group related skills under labels such as Languages or Tools.",
        ],
    },
];

/// Trims whitespace and byte-order marks, matching what a browser's
/// `String.prototype.trim` strips.
fn trimmed(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_blank(value: &str) -> bool {
    trimmed(value).is_empty()
}

fn has_contact_details(doc: &ResumeDocument) -> bool {
    let p = &doc.personal;
    [&p.full_name, &p.headline, &p.email, &p.location]
        .iter()
        .all(|v| !is_blank(v))
}

fn has_substantial_summary(doc: &ResumeDocument) -> bool {
    trimmed(&doc.personal.summary).chars().count() > SUMMARY_MIN_CHARS
}

fn has_detailed_experience(doc: &ResumeDocument) -> bool {
    doc.experiences
        .iter()
        .any(|e| e.bullets.len() >= MIN_EXPERIENCE_BULLETS)
}

fn has_education_detail(doc: &ResumeDocument) -> bool {
    doc.educations
        .iter()
        .any(|e| !is_blank(&e.degree) || !is_blank(&e.details))
}

fn has_skills(doc: &ResumeDocument) -> bool {
    doc.skills.iter().any(|s| !is_blank(&s.items))
}

/// Runs every checklist predicate against the document, in display order.
/// Pure: no state is kept between calls.
pub fn evaluate_checklist(doc: &ResumeDocument) -> Vec<ChecklistItem> {
    CHECKLIST_RULES
        .iter()
        .map(|rule| {
            let satisfied = (rule.check)(doc);
            let tips: Vec<String> = rule.tips.iter().map(|t| t.to_string()).collect();
            ChecklistItem {
                id: rule.id.to_string(),
                label: rule.label.to_string(),
                required: rule.required,
                satisfied,
                visible_tips: if satisfied { Vec::new() } else { tips.clone() },
                tips,
            }
        })
        .collect()
}

pub fn summarize(items: Vec<ChecklistItem>) -> ChecklistReport {
    let completed = items.iter().filter(|i| i.satisfied).count();
    let total = items.len();
    ChecklistReport {
        items,
        completed,
        total,
        complete: completed == total,
    }
}

pub fn checklist_report(doc: &ResumeDocument) -> ChecklistReport {
    summarize(evaluate_checklist(doc))
}
