use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::profile::Profile;

/// Per-signal breakdown, only produced by the advanced policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmScores {
    pub text_similarity: f64,
    pub weighted_overlap: f64,
    pub taxonomy_similarity: f64,
    pub ensemble_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobPosting,
    pub score: f64, // 0.0 – 1.0
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_scores: Option<AlgorithmScores>,
}

/// Full ranking output for one profile. Created per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub profile: Profile,
    pub job_matches: Vec<JobMatch>, // sorted by score, descending
    pub algorithm_label: String,
    pub processing_time_ms: u64,
    pub summary: String,
}
