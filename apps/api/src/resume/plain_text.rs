//! Plain-text export of a normalized resume, used as ATS analysis input.

use crate::render::format::{date_range, split_bullets};
use crate::resume::view_model::SanitizedViewModel;

/// Renders the resume as ATS-friendly plain text: a name line, a contact line,
/// then one upper-case heading per non-empty section.
pub fn to_plain_text(view: &SanitizedViewModel) -> String {
    let info = &view.personal_info;
    let mut out = Vec::new();

    if !info.full_name.trim().is_empty() {
        out.push(info.full_name.trim().to_string());
    }
    let contacts: Vec<&str> = [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.linkedin.as_str(),
        info.website.as_str(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect();
    if !contacts.is_empty() {
        out.push(contacts.join(" | "));
    }

    if !view.professional_summary.trim().is_empty() {
        push_heading(&mut out, "PROFESSIONAL SUMMARY");
        out.push(view.professional_summary.trim().to_string());
    }

    if !view.experience.is_empty() {
        push_heading(&mut out, "WORK EXPERIENCE");
        for exp in &view.experience {
            let title = [exp.position.trim(), exp.company.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !title.is_empty() {
                out.push(title);
            }
            if let Some(dates) = date_range(&exp.start_date, &exp.end_date, exp.is_current) {
                out.push(dates);
            }
            push_bullets(&mut out, &exp.description);
        }
    }

    if !view.project.is_empty() {
        push_heading(&mut out, "PROJECTS");
        for project in &view.project {
            if !project.name.trim().is_empty() {
                out.push(project.name.trim().to_string());
            }
            push_bullets(&mut out, &project.description);
        }
    }

    if view.education.iter().any(|e| e.has_institution()) {
        push_heading(&mut out, "EDUCATION");
        for edu in view.education.iter().filter(|e| e.has_institution()) {
            let mut line = format!("{} - {}", edu.degree.trim(), edu.institution.trim());
            if !edu.graduation_date.is_empty() {
                line.push_str(&format!(" ({})", edu.graduation_date));
            }
            out.push(line);
        }
    }

    let skills: Vec<&str> = view
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !skills.is_empty() {
        push_heading(&mut out, "SKILLS");
        out.push(skills.join(", "));
    }

    out.join("\n")
}

fn push_heading(out: &mut Vec<String>, heading: &str) {
    if !out.is_empty() {
        out.push(String::new());
    }
    out.push(heading.to_string());
}

fn push_bullets(out: &mut Vec<String>, description: &str) {
    out.extend(split_bullets(description).into_iter().map(|b| format!("- {b}")));
}
