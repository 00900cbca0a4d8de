//! Match report — wraps the ranked list into a `MatchResult` with a one-line summary.

use crate::matching::integrator::ScoringPolicy;
use crate::models::matching::{JobMatch, MatchResult};
use crate::models::profile::Profile;

pub const NO_MATCHES_SUMMARY: &str = "No matching jobs found.";

pub struct MatchReportBuilder {
    policy: ScoringPolicy,
    profile: Profile,
    job_matches: Vec<JobMatch>,
    processing_time_ms: u64,
}

impl MatchReportBuilder {
    pub fn new(policy: ScoringPolicy, profile: Profile) -> Self {
        Self {
            policy,
            profile,
            job_matches: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Ranked matches, highest score first.
    pub fn job_matches(mut self, job_matches: Vec<JobMatch>) -> Self {
        self.job_matches = job_matches;
        self
    }

    pub fn processing_time_ms(mut self, ms: u64) -> Self {
        self.processing_time_ms = ms;
        self
    }

    pub fn build(self) -> MatchResult {
        let summary = build_summary(self.policy, &self.job_matches);
        MatchResult {
            profile: self.profile,
            job_matches: self.job_matches,
            algorithm_label: self.policy.algorithm_label().to_string(),
            processing_time_ms: self.processing_time_ms,
            summary,
        }
    }
}

/// Summary line built from the top-ranked job only.
pub fn build_summary(policy: ScoringPolicy, job_matches: &[JobMatch]) -> String {
    let Some(best) = job_matches.first() else {
        return NO_MATCHES_SUMMARY.to_string();
    };

    match (policy, best.algorithm_scores) {
        (ScoringPolicy::Advanced, Some(scores)) => format!(
            "Recommended job: {}, overall match {:.1}%, algorithm breakdown: \
             text similarity {:.1}% / weighted overlap {:.1}% / taxonomy {:.1}%",
            best.job.title,
            best.score * 100.0,
            scores.text_similarity * 100.0,
            scores.weighted_overlap * 100.0,
            scores.taxonomy_similarity * 100.0,
        ),
        _ => format!(
            "Best matching job: {}, basic match {:.1}%",
            best.job.title,
            best.score * 100.0
        ),
    }
}
