use sqlx::FromRow;

/// The two free-text fields of a job posting. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobText {
    pub description: String,
    pub requirements: String,
}

impl JobText {
    pub fn new(description: impl Into<String>, requirements: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            requirements: requirements.into(),
        }
    }

    /// Description and requirements joined by a single space, trimmed.
    pub fn combined(&self) -> String {
        format!("{} {}", self.description, self.requirements)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub description_text: Option<String>,
    pub requirements: Option<String>,
}

impl From<JobRow> for JobText {
    fn from(row: JobRow) -> Self {
        JobText::new(
            row.description_text.unwrap_or_default(),
            row.requirements.unwrap_or_default(),
        )
    }
}
