use serde::Serialize;
use serde_json::Value;

use crate::models::resume::ResumeProfile;
use crate::scoring::ScoringError;

const MAX_COMPLETENESS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Skills,
    WorkExperience,
    Education,
    Certifications,
    Projects,
}

/// (section, points per entry, cap)
const SECTION_RULES: &[(ResumeSection, u32, u32)] = &[
    (ResumeSection::Skills, 3, 30),
    (ResumeSection::WorkExperience, 8, 25),
    (ResumeSection::Education, 10, 20),
    (ResumeSection::Certifications, 5, 15),
    (ResumeSection::Projects, 5, 10),
];

#[derive(Debug, Clone, Serialize)]
pub struct SectionContribution {
    pub section: ResumeSection,
    pub entry_count: usize,
    pub points: u32,
    pub cap: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    pub overall_score: u32,
    pub sections: Vec<SectionContribution>,
    pub missing_sections: Vec<ResumeSection>,
}

fn section_count(resume: &ResumeProfile, section: ResumeSection) -> usize {
    match section {
        ResumeSection::Skills => resume.skills.count(),
        ResumeSection::WorkExperience => resume.work_experience.count(),
        ResumeSection::Education => resume.education.count(),
        ResumeSection::Certifications => resume.certifications.count(),
        ResumeSection::Projects => resume.projects.count(),
    }
}

/// Rates a résumé's structural richness. Each section contributes
/// `min(cap, count * per_item)`; the total is capped at 100.
pub fn compute_completeness_report(resume: &ResumeProfile) -> CompletenessReport {
    let mut sections = Vec::with_capacity(SECTION_RULES.len());
    let mut missing_sections = Vec::new();
    let mut total = 0u32;

    for &(section, per_item, cap) in SECTION_RULES {
        let entry_count = section_count(resume, section);
        let points = u32::try_from(entry_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(per_item)
            .min(cap);

        if entry_count == 0 {
            missing_sections.push(section);
        }
        total += points;
        sections.push(SectionContribution {
            section,
            entry_count,
            points,
            cap,
        });
    }

    CompletenessReport {
        overall_score: total.min(MAX_COMPLETENESS),
        sections,
        missing_sections,
    }
}

pub fn compute_completeness_score(resume: &ResumeProfile) -> u32 {
    compute_completeness_report(resume).overall_score
}

/// Completeness straight from extractor output. Only non-object data is rejected.
pub fn compute_completeness_score_from_json(extracted: &Value) -> Result<u32, ScoringError> {
    let resume = ResumeProfile::from_value(extracted)?;
    Ok(compute_completeness_score(&resume))
}
