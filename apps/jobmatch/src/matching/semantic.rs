//! Taxonomy signal — category overlap blended with experience fit.

use crate::matching::skills::SkillSet;
use crate::matching::taxonomy::SkillTaxonomy;

/// Fit assumed when the profile records no experience.
pub const UNKNOWN_EXPERIENCE_FIT: f64 = 0.3;
/// Fit assumed when the job states no minimum.
pub const NO_MINIMUM_EXPERIENCE_FIT: f64 = 0.5;

const CATEGORY_WEIGHT: f64 = 0.7;
const EXPERIENCE_WEIGHT: f64 = 0.3;

/// |profile categories ∩ job categories| / |job categories|.
pub fn category_overlap(profile: &SkillSet, required: &SkillSet, taxonomy: &SkillTaxonomy) -> f64 {
    let job_categories = taxonomy.categories_for(required.keys());
    if job_categories.is_empty() {
        return 0.0;
    }

    let profile_categories = taxonomy.categories_for(profile.keys());
    let shared = job_categories.intersection(&profile_categories).count();

    shared as f64 / job_categories.len() as f64
}

/// Experience fit in [0, 1]: full credit at or above the minimum, linear
/// partial credit below it.
pub fn experience_fit(profile_years: Option<u32>, min_experience: Option<u32>) -> f64 {
    let Some(years) = profile_years else {
        return UNKNOWN_EXPERIENCE_FIT;
    };
    let Some(min) = min_experience else {
        return NO_MINIMUM_EXPERIENCE_FIT;
    };

    if years >= min {
        1.0
    } else {
        years as f64 / min as f64
    }
}

/// Taxonomy similarity = category overlap × 0.7 + experience fit × 0.3.
pub fn taxonomy_similarity(
    profile: &SkillSet,
    required: &SkillSet,
    profile_years: Option<u32>,
    min_experience: Option<u32>,
    taxonomy: &SkillTaxonomy,
) -> f64 {
    let overlap = category_overlap(profile, required, taxonomy);
    let fit = experience_fit(profile_years, min_experience);
    (overlap * CATEGORY_WEIGHT + fit * EXPERIENCE_WEIGHT).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        SkillSet::from_skills(skills)
    }

    #[test]
    fn test_experience_fit_unknown_years() {
        assert_eq!(experience_fit(None, Some(3)), 0.3);
        assert_eq!(experience_fit(None, None), 0.3);
    }

    #[test]
    fn test_experience_fit_no_minimum() {
        assert_eq!(experience_fit(Some(4), None), 0.5);
    }

    #[test]
    fn test_experience_fit_meets_minimum() {
        assert_eq!(experience_fit(Some(2), Some(2)), 1.0);
        assert_eq!(experience_fit(Some(10), Some(2)), 1.0);
        assert_eq!(experience_fit(Some(0), Some(0)), 1.0);
    }

    #[test]
    fn test_experience_fit_partial_credit() {
        assert_eq!(experience_fit(Some(1), Some(4)), 0.25);
        assert_eq!(experience_fit(Some(0), Some(3)), 0.0);
    }

    #[test]
    fn test_category_overlap_full_and_partial() {
        let taxonomy = SkillTaxonomy::default();
        let job = set(&["Java", "Spring", "Vue", "MySQL"]); // backend + frontend
        assert_eq!(category_overlap(&set(&["Python"]), &job, &taxonomy), 0.5);
        assert_eq!(category_overlap(&set(&["Redis", "CSS"]), &job, &taxonomy), 1.0);
    }

    #[test]
    fn test_category_overlap_unresolvable_job_skills() {
        let taxonomy = SkillTaxonomy::default();
        let job = set(&["Spring Boot", "Erlang"]);
        assert_eq!(category_overlap(&set(&["Java"]), &job, &taxonomy), 0.0);
    }

    #[test]
    fn test_taxonomy_similarity_blend() {
        let taxonomy = SkillTaxonomy::default();
        let skills = set(&["Java", "Spring", "MySQL", "Redis"]);
        let score = taxonomy_similarity(&skills, &skills, Some(2), Some(2), &taxonomy);
        assert!((score - 1.0).abs() < 1e-12);

        let score = taxonomy_similarity(&set(&["Vue"]), &skills, None, Some(3), &taxonomy);
        // overlap 0.0, fit 0.3 → 0.09
        assert!((score - 0.09).abs() < 1e-12, "score was {score}");
    }
}
