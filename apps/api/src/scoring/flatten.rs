//! Profile Flattener: projects a structured résumé into one text corpus.

use crate::models::resume::ResumeProfile;

/// Number of skills listed in the generated profile summary.
const SUMMARY_SKILL_LIMIT: usize = 8;

/// Concatenates every populated résumé field in a fixed order:
/// skills, experience, education, projects, summary, certifications.
/// Fragments are trimmed, empty ones dropped, the rest joined by single spaces.
pub fn flatten_profile(resume: &ResumeProfile) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.extend(resume.skills.items().iter().map(String::as_str));
    for exp in resume.work_experience.items() {
        parts.extend([
            exp.title.as_str(),
            exp.organization.as_str(),
            exp.description.as_str(),
        ]);
    }
    for edu in resume.education.items() {
        parts.extend([edu.degree.as_str(), edu.institution.as_str(), edu.field.as_str()]);
    }
    for project in resume.projects.items() {
        parts.extend([project.name.as_str(), project.description.as_str()]);
    }
    if let Some(summary) = &resume.summary {
        parts.push(summary);
    }
    parts.extend(resume.certifications.items().iter().map(String::as_str));

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short human-readable summary shown on the candidate's profile.
pub fn summarize_profile(resume: &ResumeProfile, name: Option<&str>) -> String {
    let mut lines = Vec::new();

    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        lines.push(name.to_string());
    }

    let skills: Vec<&str> = resume
        .skills
        .items()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SKILL_LIMIT)
        .collect();
    if !skills.is_empty() {
        lines.push(format!("Skills: {}", skills.join(", ")));
    }

    let positions = resume.work_experience.count();
    if positions > 0 {
        lines.push(format!("Experience: {positions} position(s)"));
    }

    lines.join("\n")
}
