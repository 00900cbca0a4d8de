//! Ranker — scores every catalog job for one profile and orders the results.
//!
//! Algorithm:
//! 1. Keep jobs whose industry equals the filter (case-insensitive), or all jobs
//! 2. Score each job independently on the rayon pool; results keep catalog order
//! 3. Stable sort by score descending, so catalog order breaks ties
//!
//! Jobs are never dropped after scoring, however low the score.

use rayon::prelude::*;
use tracing::debug;

use crate::matching::integrator::{
    integrate_advanced, integrate_basic, ScoringPolicy, ScoringWeights,
};
use crate::matching::overlap::{skill_coverage, weighted_overlap};
use crate::matching::semantic::{experience_fit, taxonomy_similarity};
use crate::matching::skills::{partition_required, SkillSet};
use crate::matching::taxonomy::SkillTaxonomy;
use crate::matching::vectorizer::{cosine_similarity, vectorize, TermVector};
use crate::models::job::JobPosting;
use crate::models::matching::{AlgorithmScores, JobMatch};
use crate::models::profile::Profile;

pub struct Ranker<'a> {
    taxonomy: &'a SkillTaxonomy,
    weights: &'a ScoringWeights,
}

/// Profile-side inputs computed once per ranking run.
struct PreparedProfile<'p> {
    profile: &'p Profile,
    skills: SkillSet,
    text_vector: TermVector,
}

impl<'a> Ranker<'a> {
    pub fn new(taxonomy: &'a SkillTaxonomy, weights: &'a ScoringWeights) -> Self {
        Self { taxonomy, weights }
    }

    pub fn rank(
        &self,
        profile: &Profile,
        jobs: &[JobPosting],
        industry: Option<&str>,
        policy: ScoringPolicy,
    ) -> Vec<JobMatch> {
        let prepared = PreparedProfile {
            profile,
            skills: SkillSet::from_skills(&profile.skills),
            text_vector: match policy {
                ScoringPolicy::Advanced => vectorize(&profile.raw_text),
                ScoringPolicy::Basic => TermVector::new(),
            },
        };

        let mut matches: Vec<JobMatch> = jobs
            .par_iter()
            .filter(|job| industry_matches(job, industry))
            .map(|job| self.score_job(&prepared, job, policy))
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches
    }

    fn score_job(
        &self,
        prepared: &PreparedProfile<'_>,
        job: &JobPosting,
        policy: ScoringPolicy,
    ) -> JobMatch {
        let required = SkillSet::from_skills(&job.required_skills);
        let (matched_skills, missing_skills) =
            partition_required(&prepared.skills, &job.required_skills);

        let (score, algorithm_scores) = match policy {
            ScoringPolicy::Basic => {
                let coverage = skill_coverage(&prepared.skills, &job.required_skills);
                let fit = experience_fit(prepared.profile.years_of_experience, job.min_experience);
                (integrate_basic(coverage, fit, self.weights), None)
            }
            ScoringPolicy::Advanced => {
                let scores = self.advanced_scores(prepared, &required, job);
                (scores.ensemble_score, Some(scores))
            }
        };

        debug!(
            job_id = %job.id,
            title = %job.title,
            policy = %policy,
            score,
            matched = matched_skills.len(),
            "Scored job"
        );

        JobMatch {
            job: job.clone(),
            score,
            reason: match_reason(score, matched_skills.len()),
            matched_skills,
            missing_skills,
            algorithm_scores,
        }
    }

    fn advanced_scores(
        &self,
        prepared: &PreparedProfile<'_>,
        required: &SkillSet,
        job: &JobPosting,
    ) -> AlgorithmScores {
        let text = cosine_similarity(&prepared.text_vector, &vectorize(&job.match_text()));
        let overlap = weighted_overlap(&prepared.skills, required, self.taxonomy);
        let semantic = taxonomy_similarity(
            &prepared.skills,
            required,
            prepared.profile.years_of_experience,
            job.min_experience,
            self.taxonomy,
        );
        integrate_advanced(text, overlap, semantic, self.weights)
    }
}

fn industry_matches(job: &JobPosting, industry: Option<&str>) -> bool {
    match industry {
        Some(filter) => job.industry.to_lowercase() == filter.to_lowercase(),
        None => true,
    }
}

/// Human-readable explanation, banded by score.
pub fn match_reason(score: f64, matched_count: usize) -> String {
    let pct = score * 100.0;
    if score >= 0.8 {
        format!("Highly matched ({pct:.1}%), {matched_count} core skills matched")
    } else if score >= 0.6 {
        format!("Well matched ({pct:.1}%), {matched_count} key skills matched")
    } else if score >= 0.4 {
        format!("Moderately matched ({pct:.1}%), {matched_count} relevant skills matched")
    } else {
        format!(
            "Low match ({pct:.1}%), skill gap noted, {matched_count} skills matched; \
             consider strengthening the missing skills"
        )
    }
}
