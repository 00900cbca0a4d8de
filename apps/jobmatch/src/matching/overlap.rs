//! Weighted Jaccard overlap between a profile's skills and a job's requirements.

use crate::matching::skills::SkillSet;
use crate::matching::taxonomy::SkillTaxonomy;

/// Σ weight(profile ∩ job) / Σ weight(profile ∪ job).
///
/// Membership is case-insensitive. Returns 0.0 when the job lists no skills
/// or the union carries no weight.
pub fn weighted_overlap(profile: &SkillSet, required: &SkillSet, taxonomy: &SkillTaxonomy) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let intersection: f64 = required
        .keys()
        .filter(|k| profile.contains_key(k))
        .map(|k| taxonomy.weight(k))
        .sum();

    let union: f64 = profile.keys().map(|k| taxonomy.weight(k)).sum::<f64>()
        + required
            .keys()
            .filter(|k| !profile.contains_key(k))
            .map(|k| taxonomy.weight(k))
            .sum::<f64>();

    if union > 0.0 {
        (intersection / union).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fraction of the job's listed requirements covered by the profile.
///
/// The denominator is the raw length of `required_skills`, duplicates
/// included; the result is capped at 1.0.
pub fn skill_coverage(profile: &SkillSet, required_skills: &[String]) -> f64 {
    if required_skills.is_empty() || profile.is_empty() {
        return 0.0;
    }

    let required = SkillSet::from_skills(required_skills);
    let covered = profile.count_shared(&required);

    (covered as f64 / required_skills.len() as f64).min(1.0)
}
