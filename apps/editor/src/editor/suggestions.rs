//! Suggestion engine: rule-based achievement bullets keyed on role families.
//!
//! Algorithm:
//! 1. Walk `SUGGESTION_RULES` in declaration order
//! 2. A rule fires when its pattern matches the role context OR the summary
//! 3. Fired groups are concatenated, then `GENERIC_BULLETS` is appended
//! 4. Exact duplicates are dropped, first occurrence wins
//!
//! The output is never empty: the generic group is always present.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Experience;

/// One library entry: a case-insensitive role-family matcher and its bullets.
pub struct SuggestionRule {
    pub family: &'static str,
    pub pattern: Regex,
    pub bullets: &'static [&'static str],
}

impl SuggestionRule {
    pub fn matches(&self, role_context: &str, summary_context: &str) -> bool {
        self.pattern.is_match(role_context) || self.pattern.is_match(summary_context)
    }
}

const SOFTWARE_BULLETS: &[&str] = &[
    "Shipped a customer-facing feature end to end, cutting page load time by 35% through caching and query tuning.",
    "Automated the CI/CD pipeline, reducing release time from 2 days to under 1 hour.",
    "Mentored 4 engineers through code reviews and pairing, raising test coverage from 55% to 85%.",
];

const PRODUCT_BULLETS: &[&str] = &[
    "Owned the roadmap for a product line serving 50k+ users, prioritising work against revenue and retention goals.",
    "Ran 20+ customer discovery interviews that reshaped the onboarding flow and lifted activation by 18%.",
    "Defined success metrics and built dashboards that the team used in every weekly review.",
];

const DESIGN_BULLETS: &[&str] = &[
    "Redesigned the checkout flow from research to high-fidelity prototypes, increasing conversion by 12%.",
    "Built and documented a component library adopted by 3 product teams.",
    "Ran usability tests with 30 participants and turned findings into a prioritised design backlog.",
];

const DATA_BULLETS: &[&str] = &[
    "Built a forecasting model that improved demand accuracy by 22% and cut excess inventory costs.",
    "Designed ETL pipelines processing 5M+ events per day with automated data-quality checks.",
    "Defined success metrics and built dashboards that the team used in every weekly review.",
];

/// Appended for every input, after all matched groups.
pub const GENERIC_BULLETS: &[&str] = &[
    "Delivered a high-impact project ahead of schedule by coordinating across teams and clarifying priorities early.",
    "Identified a recurring bottleneck and introduced a process change that saved the team hours every week.",
    "Communicated progress and risks to stakeholders with concise written updates and demos.",
];

/// Ordered rule library. Order here is the order suggestions appear in.
pub static SUGGESTION_RULES: Lazy<Vec<SuggestionRule>> = Lazy::new(|| {
    vec![
        rule(
            "software",
            r"(?i)software|engineer|developer|programmer|front[- ]?end|back[- ]?end|full[- ]?stack|devops|\bsre\b",
            SOFTWARE_BULLETS,
        ),
        rule(
            "product",
            r"(?i)product\s+(manager|management|owner|lead)|\bpm\b",
            PRODUCT_BULLETS,
        ),
        rule(
            "design",
            r"(?i)design|\bux\b|\bui\b|user experience",
            DESIGN_BULLETS,
        ),
        rule(
            "data",
            r"(?i)\bdata\b|analyst|analytics|machine learning|\bml\b|scientist",
            DATA_BULLETS,
        ),
    ]
});

fn rule(family: &'static str, pattern: &str, bullets: &'static [&'static str]) -> SuggestionRule {
    SuggestionRule {
        family,
        // Patterns are compile-time literals covered by the tests below.
        pattern: Regex::new(pattern).expect("suggestion rule pattern must compile"),
        bullets,
    }
}

/// Returns candidate bullets for a role/company string and a free-text summary.
///
/// Deterministic and duplicate-free. `suggest_bullets("", "")` returns exactly
/// the generic group.
pub fn suggest_bullets(role_context: &str, summary_context: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    SUGGESTION_RULES
        .iter()
        .filter(|r| r.matches(role_context, summary_context))
        .flat_map(|r| r.bullets.iter())
        .chain(GENERIC_BULLETS.iter())
        .filter(|b| seen.insert(**b))
        .map(|b| b.to_string())
        .collect()
}

/// Names of the rule families that fire for the given context, in library order.
pub fn matched_families(role_context: &str, summary_context: &str) -> Vec<&'static str> {
    SUGGESTION_RULES
        .iter()
        .filter(|r| r.matches(role_context, summary_context))
        .map(|r| r.family)
        .collect()
}

/// Suggestions for one experience entry: bullets it already has are dropped
/// and the result is cut to `limit`.
pub fn suggestions_for_experience(
    experience: &Experience,
    summary: &str,
    limit: usize,
) -> Vec<String> {
    let role_context = format!("{} {}", experience.role, experience.company);
    suggest_bullets(&role_context, summary)
        .into_iter()
        .filter(|b| !experience.bullets.contains(b))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionEntry;

    fn generic() -> Vec<String> {
        GENERIC_BULLETS.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_all_rule_patterns_compile() {
        assert_eq!(SUGGESTION_RULES.len(), 4);
        let families: Vec<_> = SUGGESTION_RULES.iter().map(|r| r.family).collect();
        assert_eq!(families, vec!["software", "product", "design", "data"]);
    }

    #[test]
    fn test_empty_input_returns_generic_only() {
        assert_eq!(suggest_bullets("", ""), generic());
    }

    #[test]
    fn test_unmatched_role_returns_generic_only() {
        assert_eq!(suggest_bullets("Head Chef", "I run a busy kitchen."), generic());
    }

    #[test]
    fn test_software_role_puts_track_before_generic() {
        let out = suggest_bullets("Senior Software Engineer", "");
        assert_eq!(out.len(), 6);
        assert_eq!(&out[..3], SOFTWARE_BULLETS);
        assert_eq!(out[3..].to_vec(), generic());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            suggest_bullets("SENIOR SOFTWARE ENGINEER", ""),
            suggest_bullets("senior software engineer", "")
        );
    }

    #[test]
    fn test_summary_alone_can_trigger_a_rule() {
        let out = suggest_bullets("Consultant", "I build backend services in Rust.");
        assert_eq!(&out[..3], SOFTWARE_BULLETS);
    }

    #[test]
    fn test_multiple_matches_follow_library_order() {
        // Data is declared after design; role text order must not matter.
        let out = suggest_bullets("Data Analyst", "Background in UX design");
        assert_eq!(&out[..3], DESIGN_BULLETS);
        assert_eq!(&out[3..6], DATA_BULLETS);
    }

    #[test]
    fn test_shared_bullets_are_deduplicated_at_first_position() {
        let out = suggest_bullets("Data Product Manager", "");
        let shared = "Defined success metrics and built dashboards that the team used in every weekly review.";
        assert_eq!(out.iter().filter(|b| *b == shared).count(), 1);
        assert_eq!(out.iter().position(|b| b == shared), Some(2));
        // product (3) + data minus the shared one (2) + generic (3)
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_output_is_duplicate_free() {
        let out = suggest_bullets(
            "Full-stack developer and product manager",
            "UX design, data science, machine learning",
        );
        let unique: HashSet<&String> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
        assert!(out.ends_with(&generic()));
    }

    #[test]
    fn test_deterministic() {
        let a = suggest_bullets("Product Designer", "data-driven");
        let b = suggest_bullets("Product Designer", "data-driven");
        assert_eq!(a, b);
    }

    #[test]
    fn test_matched_families() {
        assert!(matched_families("", "").is_empty());
        assert_eq!(
            matched_families("UX Designer", "moving into data analytics"),
            vec!["design", "data"]
        );
    }

    #[test]
    fn test_pm_abbreviation_requires_word_boundary() {
        assert!(SUGGESTION_RULES[1].matches("Senior PM", ""));
        assert!(!SUGGESTION_RULES[1].matches("Npm maintainer", ""));
    }

    #[test]
    fn test_experience_suggestions_skip_existing_bullets_and_truncate() {
        let mut exp = Experience::blank();
        exp.role = "Backend Developer".to_string();
        exp.company = "Acme".to_string();
        exp.bullets.push(SOFTWARE_BULLETS[0].to_string());

        let out = suggestions_for_experience(&exp, "", 3);
        assert_eq!(
            out,
            vec![
                SOFTWARE_BULLETS[1].to_string(),
                SOFTWARE_BULLETS[2].to_string(),
                GENERIC_BULLETS[0].to_string(),
            ]
        );
    }

    #[test]
    fn test_experience_suggestions_use_company_text() {
        let mut exp = Experience::blank();
        exp.company = "Data Insights Ltd".to_string();
        let out = suggestions_for_experience(&exp, "", 10);
        assert_eq!(out[0], DATA_BULLETS[0]);
    }
}
