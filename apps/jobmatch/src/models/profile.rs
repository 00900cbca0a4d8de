use serde::{Deserialize, Serialize};

/// Candidate profile as produced by the upstream resume extractor.
///
/// `skills` is treated as a set: duplicates that differ only in case are
/// collapsed when scored (see `matching::skills::SkillSet`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
}
