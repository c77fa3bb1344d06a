//! Résumé profile as produced by the extraction collaborator.
//!
//! The extractor is loose about shapes: a section may be a list, a lone scalar,
//! or missing, and key names drift between versions. All of that is resolved
//! once here, in `ResumeProfile::from_value`, so scoring code only ever sees
//! `Section<T>` values.

use serde_json::{Map, Value};

use crate::scoring::ScoringError;

const SKILL_KEYS: &[&str] = &["skills", "skills_extracted", "keywords"];
const EXPERIENCE_KEYS: &[&str] = &["work_experience", "experience"];
const EDUCATION_KEYS: &[&str] = &["education"];
const PROJECT_KEYS: &[&str] = &["projects"];
const CERTIFICATION_KEYS: &[&str] = &["certifications"];
const SUMMARY_KEYS: &[&str] = &["summary", "objective", "professional_summary"];

/// One résumé section: missing, a single scalar where a list was expected, or a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Absent,
    Single(T),
    List(Vec<T>),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Absent
    }
}

impl<T> Section<T> {
    /// 0 when absent, 1 for a lone scalar, otherwise the list length.
    pub fn count(&self) -> usize {
        match self {
            Section::Absent => 0,
            Section::Single(_) => 1,
            Section::List(items) => items.len(),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Section::Absent => &[],
            Section::Single(item) => std::slice::from_ref(item),
            Section::List(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for Section<T> {
    fn from(items: Vec<T>) -> Self {
        Section::List(items)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub field: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
}

/// Structured extraction of a résumé. Immutable input to scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeProfile {
    pub skills: Section<String>,
    pub work_experience: Section<ExperienceEntry>,
    pub education: Section<EducationEntry>,
    pub projects: Section<ProjectEntry>,
    pub certifications: Section<String>,
    pub summary: Option<String>,
}

impl ResumeProfile {
    /// Coerces an extracted résumé document into a profile.
    ///
    /// `null` is an empty profile. Anything else that is not a JSON object
    /// cannot be coerced and is rejected.
    pub fn from_value(value: &Value) -> Result<Self, ScoringError> {
        let obj = match value {
            Value::Object(obj) => obj,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(ScoringError::InvalidInput(format!(
                    "resume data must be a JSON object, got {}",
                    json_kind(other)
                )))
            }
        };

        Ok(Self {
            skills: section(lookup(obj, SKILL_KEYS), label_of),
            work_experience: section(lookup(obj, EXPERIENCE_KEYS), experience_of),
            education: section(lookup(obj, EDUCATION_KEYS), education_of),
            projects: section(lookup(obj, PROJECT_KEYS), project_of),
            certifications: section(lookup(obj, CERTIFICATION_KEYS), label_of),
            summary: Some(field_text(obj, SUMMARY_KEYS)).filter(|s| !s.is_empty()),
        })
    }
}

/// First key holding a non-empty value.
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| is_populated(v))
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn section<T>(value: Option<&Value>, parse: fn(&Value) -> T) -> Section<T> {
    match value {
        None => Section::Absent,
        Some(Value::Array(items)) => Section::List(items.iter().map(parse).collect()),
        Some(other) => Section::Single(parse(other)),
    }
}

/// Text of a scalar. Strings are trimmed, numbers rendered, everything else is empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Like `text_of`, but a list of scalars is joined with single spaces.
fn joined_text_of(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(text_of)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        other => text_of(other),
    }
}

fn field_text(obj: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .map(joined_text_of)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Skills and certifications are plain strings, or objects carrying a name.
fn label_of(value: &Value) -> String {
    match value {
        Value::Object(obj) => field_text(obj, &["name", "title"]),
        other => text_of(other),
    }
}

fn experience_of(value: &Value) -> ExperienceEntry {
    match value {
        Value::Object(obj) => ExperienceEntry {
            title: field_text(obj, &["title", "position"]),
            organization: field_text(obj, &["organization", "company"]),
            description: field_text(obj, &["description", "responsibilities"]),
        },
        other => ExperienceEntry {
            description: text_of(other),
            ..Default::default()
        },
    }
}

fn education_of(value: &Value) -> EducationEntry {
    match value {
        Value::Object(obj) => EducationEntry {
            degree: field_text(obj, &["degree"]),
            institution: field_text(obj, &["institution"]),
            field: field_text(obj, &["field"]),
        },
        other => EducationEntry {
            degree: text_of(other),
            ..Default::default()
        },
    }
}

fn project_of(value: &Value) -> ProjectEntry {
    match value {
        Value::Object(obj) => ProjectEntry {
            name: field_text(obj, &["name", "title"]),
            description: field_text(obj, &["description"]),
        },
        other => ProjectEntry {
            name: text_of(other),
            ..Default::default()
        },
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_are_absent() {
        let profile = ResumeProfile::from_value(&json!({})).unwrap();
        assert_eq!(profile, ResumeProfile::default());
        assert_eq!(profile.skills.count(), 0);
        assert!(profile.summary.is_none());
    }

    #[test]
    fn test_null_is_empty_profile() {
        let profile = ResumeProfile::from_value(&Value::Null).unwrap();
        assert_eq!(profile, ResumeProfile::default());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = ResumeProfile::from_value(&json!(["Python"])).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput(_)));
        assert!(ResumeProfile::from_value(&json!("resume")).is_err());
    }

    #[test]
    fn test_scalar_section_counts_as_one() {
        let profile = ResumeProfile::from_value(&json!({
            "skills": "Python",
            "education": "BSc Computer Science"
        }))
        .unwrap();
        assert_eq!(profile.skills, Section::Single("Python".to_string()));
        assert_eq!(profile.skills.items(), ["Python".to_string()]);
        assert_eq!(profile.education.count(), 1);
        assert_eq!(profile.education.items()[0].degree, "BSc Computer Science");
    }

    #[test]
    fn test_skill_aliases_fall_through_empty_values() {
        let profile = ResumeProfile::from_value(&json!({
            "skills": [],
            "skills_extracted": null,
            "keywords": ["Rust", "Go"]
        }))
        .unwrap();
        assert_eq!(profile.skills.count(), 2);
    }

    #[test]
    fn test_extractor_field_names_are_understood() {
        let profile = ResumeProfile::from_value(&json!({
            "work_experience": [{
                "position": "Backend Engineer",
                "company": "Acme",
                "responsibilities": ["Built APIs", "Ran on-call"]
            }],
            "projects": [{"title": "Swipe", "description": "Job matching app"}],
            "certifications": [{"name": "AWS SAA", "issuer": "Amazon"}, "CKA"],
            "professional_summary": "  Engineer  "
        }))
        .unwrap();

        let exp = &profile.work_experience.items()[0];
        assert_eq!(exp.title, "Backend Engineer");
        assert_eq!(exp.organization, "Acme");
        assert_eq!(exp.description, "Built APIs Ran on-call");
        assert_eq!(profile.projects.items()[0].name, "Swipe");
        assert_eq!(profile.certifications.items(), ["AWS SAA", "CKA"]);
        assert_eq!(profile.summary.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_list_summary_is_joined() {
        let profile =
            ResumeProfile::from_value(&json!({"summary": ["Backend engineer", "Rust"]})).unwrap();
        assert_eq!(profile.summary.as_deref(), Some("Backend engineer Rust"));
    }

    #[test]
    fn test_unusable_summary_falls_through_to_objective() {
        let profile = ResumeProfile::from_value(&json!({
            "summary": true,
            "objective": "Backend engineer"
        }))
        .unwrap();
        assert_eq!(profile.summary.as_deref(), Some("Backend engineer"));
    }

    #[test]
    fn test_non_string_fields_become_empty() {
        let profile = ResumeProfile::from_value(&json!({
            "skills": [null, {"level": 3}, 42],
            "education": [{"degree": null, "institution": ["x", {"y": 1}], "field": true}]
        }))
        .unwrap();
        assert_eq!(profile.skills.items(), ["", "", "42"]);
        let edu = &profile.education.items()[0];
        assert_eq!(edu.degree, "");
        assert_eq!(edu.institution, "x");
        assert_eq!(edu.field, "");
    }
}
