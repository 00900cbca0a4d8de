use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub industry: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: Option<u32>,
    #[serde(default)]
    pub required_education: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub base_salary: Option<f64>,
}

impl JobPosting {
    /// Text used for the job side of the text-similarity signal:
    /// the description followed by the space-joined required skills.
    pub fn match_text(&self) -> String {
        format!("{} {}", self.description, self.required_skills.join(" "))
    }
}
