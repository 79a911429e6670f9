//! Live preview and print view renderers.
//!
//! The resume renderers skip blank records (every field empty) and emit a
//! section heading only when it has content. The live preview pane also shows
//! the checklist; the print view never does.

use crate::editor::checklist::ChecklistReport;
use crate::models::resume::{Education, Experience, Project, ResumeDocument, SkillBlock};

fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn join_filled<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    parts
        .iter()
        .filter_map(|p| filled(p.as_ref()))
        .collect::<Vec<_>>()
        .join(sep)
}

fn date_range(start: &str, end: &str) -> String {
    join_filled(&[start, end], " – ")
}

/// Normalizes the comma-separated skills string: trims items, drops empties.
pub fn skill_items(items: &str) -> Vec<&str> {
    items.split(',').filter_map(filled).collect()
}

fn experience_is_blank(e: &Experience) -> bool {
    [&e.role, &e.company, &e.location, &e.start_date, &e.end_date]
        .iter()
        .all(|v| filled(v).is_none())
        && e.bullets.iter().all(|b| filled(b).is_none())
}

fn education_is_blank(e: &Education) -> bool {
    [
        &e.school,
        &e.degree,
        &e.start_date,
        &e.end_date,
        &e.details,
        &e.location,
    ]
    .iter()
    .all(|v| filled(v).is_none())
}

fn project_is_blank(p: &Project) -> bool {
    [&p.name, &p.description, &p.link]
        .iter()
        .all(|v| filled(v).is_none())
        && p.highlights.iter().all(|h| filled(h).is_none())
}

fn skill_is_blank(s: &SkillBlock) -> bool {
    filled(&s.label).is_none() && skill_items(&s.items).is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Markdown
// ────────────────────────────────────────────────────────────────────────────

/// Renders the document as Markdown for the live preview pane.
pub fn render_markdown(doc: &ResumeDocument) -> String {
    let p = &doc.personal;
    let mut md = String::new();

    if let Some(name) = filled(&p.full_name) {
        md.push_str(&format!("# {name}\n\n"));
    }
    if let Some(headline) = filled(&p.headline) {
        md.push_str(&format!("*{headline}*\n\n"));
    }
    let contact = join_filled(
        &[&p.email, &p.phone, &p.location, &p.website, &p.linkedin],
        " · ",
    );
    if !contact.is_empty() {
        md.push_str(&format!("{contact}\n\n"));
    }
    if let Some(summary) = filled(&p.summary) {
        md.push_str(&format!("{summary}\n\n"));
    }

    let experiences: Vec<_> = doc
        .experiences
        .iter()
        .filter(|e| !experience_is_blank(e))
        .collect();
    if !experiences.is_empty() {
        md.push_str("## Experience\n\n");
        for e in experiences {
            md.push_str(&format!("### {}\n", join_filled(&[&e.role, &e.company], ", ")));
            let meta = join_filled(&[&e.location, &date_range(&e.start_date, &e.end_date)], " · ");
            if !meta.is_empty() {
                md.push_str(&format!("{meta}\n"));
            }
            md.push('\n');
            for bullet in e.bullets.iter().filter_map(|b| filled(b)) {
                md.push_str(&format!("- {bullet}\n"));
            }
            md.push('\n');
        }
    }

    let educations: Vec<_> = doc
        .educations
        .iter()
        .filter(|e| !education_is_blank(e))
        .collect();
    if !educations.is_empty() {
        md.push_str("## Education\n\n");
        for e in educations {
            md.push_str(&format!("### {}\n", join_filled(&[&e.degree, &e.school], ", ")));
            let meta = join_filled(&[&e.location, &date_range(&e.start_date, &e.end_date)], " · ");
            if !meta.is_empty() {
                md.push_str(&format!("{meta}\n"));
            }
            if let Some(details) = filled(&e.details) {
                md.push_str(&format!("\n{details}\n"));
            }
            md.push('\n');
        }
    }

    let projects: Vec<_> = doc
        .projects
        .iter()
        .filter(|p| !project_is_blank(p))
        .collect();
    if !projects.is_empty() {
        md.push_str("## Projects\n\n");
        for project in projects {
            let title = match (filled(&project.name), filled(&project.link)) {
                (Some(name), Some(link)) => format!("[{name}]({link})"),
                (Some(name), None) => name.to_string(),
                (None, Some(link)) => link.to_string(),
                (None, None) => String::new(),
            };
            md.push_str(&format!("### {title}\n"));
            if let Some(description) = filled(&project.description) {
                md.push_str(&format!("\n{description}\n"));
            }
            md.push('\n');
            for highlight in project.highlights.iter().filter_map(|h| filled(h)) {
                md.push_str(&format!("- {highlight}\n"));
            }
            md.push('\n');
        }
    }

    let skills: Vec<_> = doc.skills.iter().filter(|s| !skill_is_blank(s)).collect();
    if !skills.is_empty() {
        md.push_str("## Skills\n\n");
        for block in skills {
            let items = skill_items(&block.items).join(", ");
            match filled(&block.label) {
                Some(label) => md.push_str(&format!("- **{label}:** {items}\n")),
                None => md.push_str(&format!("- {items}\n")),
            }
        }
        md.push('\n');
    }

    md.trim_end().to_string() + "\n"
}

/// Renders the checklist panel. Tips appear only under unsatisfied items.
pub fn render_checklist_markdown(report: &ChecklistReport) -> String {
    let mut md = format!(
        "## Checklist ({}/{})\n\n",
        report.completed, report.total
    );
    for item in &report.items {
        let mark = if item.satisfied { 'x' } else { ' ' };
        let optional = if item.required { "" } else { " (optional)" };
        md.push_str(&format!("- [{mark}] {}{optional}\n", item.label));
        for tip in &item.visible_tips {
            md.push_str(&format!("  - {tip}\n"));
        }
    }
    md
}

/// The live preview pane: the rendered resume followed by the checklist.
pub fn render_preview(doc: &ResumeDocument, report: &ChecklistReport) -> String {
    let resume = render_markdown(doc);
    let checklist = render_checklist_markdown(report);
    if resume.trim().is_empty() {
        checklist
    } else {
        format!("{resume}\n---\n\n{checklist}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Print view
// ────────────────────────────────────────────────────────────────────────────

const PRINT_STYLE: &str = "body{font-family:Georgia,serif;max-width:48rem;margin:2rem auto;line-height:1.4}\
h1{margin-bottom:0}h2{border-bottom:1px solid #999;margin-top:1.5rem}h3{margin-bottom:.2rem}\
.meta{color:#555;font-size:.9rem}@page{margin:1.5cm}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_list(html: &mut String, lines: &[String]) {
    let lines: Vec<_> = lines.iter().filter_map(|l| filled(l)).collect();
    if lines.is_empty() {
        return;
    }
    html.push_str("<ul>");
    for line in lines {
        html.push_str(&format!("<li>{}</li>", escape_html(line)));
    }
    html.push_str("</ul>");
}

fn push_meta(html: &mut String, meta: &str) {
    if !meta.is_empty() {
        html.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(meta)));
    }
}

/// Renders a standalone HTML page for the browser's print dialog. Editing
/// controls never appear here.
pub fn render_print_html(doc: &ResumeDocument) -> String {
    let p = &doc.personal;
    let title = filled(&p.full_name).unwrap_or("Resume");
    let mut html = format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title><style>{PRINT_STYLE}</style></head><body>",
        escape_html(title)
    );

    html.push_str("<header>");
    if let Some(name) = filled(&p.full_name) {
        html.push_str(&format!("<h1>{}</h1>", escape_html(name)));
    }
    if let Some(headline) = filled(&p.headline) {
        html.push_str(&format!("<p><em>{}</em></p>", escape_html(headline)));
    }
    push_meta(
        &mut html,
        &join_filled(&[&p.email, &p.phone, &p.location, &p.website, &p.linkedin], " · "),
    );
    if let Some(summary) = filled(&p.summary) {
        html.push_str(&format!("<p>{}</p>", escape_html(summary)));
    }
    html.push_str("</header>");

    let experiences: Vec<_> = doc
        .experiences
        .iter()
        .filter(|e| !experience_is_blank(e))
        .collect();
    if !experiences.is_empty() {
        html.push_str("<section><h2>Experience</h2>");
        for e in experiences {
            html.push_str(&format!(
                "<h3>{}</h3>",
                escape_html(&join_filled(&[&e.role, &e.company], ", "))
            ));
            push_meta(
                &mut html,
                &join_filled(&[&e.location, &date_range(&e.start_date, &e.end_date)], " · "),
            );
            push_list(&mut html, &e.bullets);
        }
        html.push_str("</section>");
    }

    let educations: Vec<_> = doc
        .educations
        .iter()
        .filter(|e| !education_is_blank(e))
        .collect();
    if !educations.is_empty() {
        html.push_str("<section><h2>Education</h2>");
        for e in educations {
            html.push_str(&format!(
                "<h3>{}</h3>",
                escape_html(&join_filled(&[&e.degree, &e.school], ", "))
            ));
            push_meta(
                &mut html,
                &join_filled(&[&e.location, &date_range(&e.start_date, &e.end_date)], " · "),
            );
            if let Some(details) = filled(&e.details) {
                html.push_str(&format!("<p>{}</p>", escape_html(details)));
            }
        }
        html.push_str("</section>");
    }

    let projects: Vec<_> = doc
        .projects
        .iter()
        .filter(|p| !project_is_blank(p))
        .collect();
    if !projects.is_empty() {
        html.push_str("<section><h2>Projects</h2>");
        for project in projects {
            html.push_str(&format!(
                "<h3>{}</h3>",
                escape_html(&join_filled(&[&project.name, &project.link], " · "))
            ));
            if let Some(description) = filled(&project.description) {
                html.push_str(&format!("<p>{}</p>", escape_html(description)));
            }
            push_list(&mut html, &project.highlights);
        }
        html.push_str("</section>");
    }

    let skills: Vec<_> = doc.skills.iter().filter(|s| !skill_is_blank(s)).collect();
    if !skills.is_empty() {
        html.push_str("<section><h2>Skills</h2><ul>");
        for block in skills {
            let items = escape_html(&skill_items(&block.items).join(", "));
            match filled(&block.label) {
                Some(label) => {
                    html.push_str(&format!("<li><strong>{}:</strong> {items}</li>", escape_html(label)))
                }
                None => html.push_str(&format!("<li>{items}</li>")),
            }
        }
        html.push_str("</ul></section>");
    }

    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::checklist::checklist_report;

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::starter();
        doc.personal.full_name = "Ada Lovelace".to_string();
        doc.personal.headline = "Analyst".to_string();
        doc.personal.email = "ada@example.com".to_string();
        doc.personal.location = "London".to_string();
        doc.experiences[0].role = "Analyst".to_string();
        doc.experiences[0].company = "Analytical Engine".to_string();
        doc.experiences[0].start_date = "1842".to_string();
        doc.experiences[0].end_date = "1843".to_string();
        doc.experiences[0].bullets = vec!["Wrote Note G".to_string(), "  ".to_string()];
        doc.skills[0].label = "Languages".to_string();
        doc.skills[0].items = " Math , ,Poetry ".to_string();
        doc
    }

    #[test]
    fn test_skill_items_trims_and_drops_empties() {
        assert_eq!(skill_items(" Rust, ,Go ,"), vec!["Rust", "Go"]);
        assert!(skill_items("   ").is_empty());
    }

    #[test]
    fn test_markdown_renders_filled_sections_only() {
        let md = render_markdown(&sample());
        assert!(md.starts_with("# Ada Lovelace\n\n*Analyst*\n\nada@example.com · London\n"));
        assert!(md.contains("## Experience\n\n### Analyst, Analytical Engine\n1842 – 1843\n"));
        assert!(md.contains("- Wrote Note G\n"));
        assert!(!md.contains("- \n"));
        assert!(md.contains("- **Languages:** Math, Poetry\n"));
        assert!(!md.contains("## Education"));
        assert!(!md.contains("## Projects"));
    }

    #[test]
    fn test_markdown_of_starter_document_is_empty_line() {
        assert_eq!(render_markdown(&ResumeDocument::starter()), "\n");
    }

    #[test]
    fn test_markdown_project_title_links() {
        let mut doc = ResumeDocument::starter();
        doc.projects[0].name = "Engine".to_string();
        doc.projects[0].link = "https://example.com".to_string();
        assert!(render_markdown(&doc).contains("### [Engine](https://example.com)\n"));
    }

    #[test]
    fn test_checklist_panel_hides_tips_of_satisfied_items() {
        let doc = sample();
        let panel = render_checklist_markdown(&checklist_report(&doc));
        assert!(panel.starts_with("## Checklist (2/5)\n\n- [x] Contact details\n- [ ] Professional summary (optional)\n"));
        assert!(!panel.contains("Use a professional email address"));
        assert!(panel.contains("  - Give at least one role three or more achievement bullets.\n"));
        assert!(panel.contains("- [x] Skills\n"));
    }

    #[test]
    fn test_preview_appends_checklist_after_resume() {
        let doc = sample();
        let preview = render_preview(&doc, &checklist_report(&doc));
        assert!(preview.starts_with("# Ada Lovelace\n"));
        assert!(preview.contains("\n---\n\n## Checklist (2/5)\n"));
    }

    #[test]
    fn test_preview_of_starter_document_is_checklist_only() {
        let doc = ResumeDocument::starter();
        let preview = render_preview(&doc, &checklist_report(&doc));
        assert!(preview.starts_with("## Checklist (0/5)\n"));
        assert!(preview.contains("  - Use a professional email address you check regularly.\n"));
    }

    #[test]
    fn test_print_html_escapes_user_text() {
        let mut doc = sample();
        doc.personal.summary = "<script>alert('x')</script> & more".to_string();
        let html = render_print_html(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_print_html_contains_document_only() {
        let html = render_print_html(&sample());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada Lovelace</title>"));
        assert!(html.contains("<li>Wrote Note G</li>"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<h2>Education</h2>"));
        assert!(!html.contains("Checklist"));
    }

    #[test]
    fn test_print_html_defaults_title() {
        let html = render_print_html(&ResumeDocument::default());
        assert!(html.contains("<title>Resume</title>"));
    }
}
