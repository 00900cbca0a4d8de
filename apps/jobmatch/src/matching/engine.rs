//! MatchEngine — the entry points callers use: `basic_match`, `advanced_match`, `run`.
//!
//! Holds the process-wide taxonomy and integration weights. Cloning is cheap
//! (the taxonomy sits behind an `Arc`), and no state changes between calls.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::matching::integrator::{ScoringPolicy, ScoringWeights};
use crate::matching::ranker::Ranker;
use crate::matching::report::MatchReportBuilder;
use crate::matching::taxonomy::SkillTaxonomy;
use crate::models::job::JobPosting;
use crate::models::matching::MatchResult;
use crate::models::profile::Profile;

#[derive(Debug, Clone)]
pub struct MatchEngine {
    taxonomy: Arc<SkillTaxonomy>,
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, weights: ScoringWeights) -> Self {
        Self { taxonomy, weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn basic_match(
        &self,
        profile: &Profile,
        jobs: &[JobPosting],
        industry: Option<&str>,
    ) -> MatchResult {
        self.run(ScoringPolicy::Basic, profile, jobs, industry)
    }

    pub fn advanced_match(
        &self,
        profile: &Profile,
        jobs: &[JobPosting],
        industry: Option<&str>,
    ) -> MatchResult {
        self.run(ScoringPolicy::Advanced, profile, jobs, industry)
    }

    /// Ranks `jobs` for `profile` under `policy`. `industry = None` disables
    /// the industry filter.
    pub fn run(
        &self,
        policy: ScoringPolicy,
        profile: &Profile,
        jobs: &[JobPosting],
        industry: Option<&str>,
    ) -> MatchResult {
        let started = Instant::now();

        let job_matches =
            Ranker::new(&self.taxonomy, &self.weights).rank(profile, jobs, industry, policy);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            policy = %policy,
            industry = industry.unwrap_or("*"),
            jobs = job_matches.len(),
            elapsed_ms,
            "Match completed"
        );

        MatchReportBuilder::new(policy, profile.clone())
            .job_matches(job_matches)
            .processing_time_ms(elapsed_ms)
            .build()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(Arc::new(SkillTaxonomy::default()), ScoringWeights::default())
    }
}
