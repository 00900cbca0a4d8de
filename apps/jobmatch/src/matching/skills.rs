//! Skill identity — every comparison of skill names goes through `skill_key`.

use std::collections::HashSet;

/// Canonical comparison key for a skill name: trimmed and lower-cased.
///
/// Surrounding whitespace is not part of a skill's identity, so `"Java "` and
/// `"java"` compare equal. A blank name yields an empty key, which no profile
/// skill can match.
pub fn skill_key(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// An ordered, case-insensitively deduplicated set of skill keys.
///
/// Blank names are skipped.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    ordered: Vec<String>,
    keys: HashSet<String>,
}

impl SkillSet {
    pub fn from_skills<S: AsRef<str>>(skills: &[S]) -> Self {
        let mut set = SkillSet::default();
        for skill in skills {
            let key = skill_key(skill.as_ref());
            if key.is_empty() || !set.keys.insert(key.clone()) {
                continue;
            }
            set.ordered.push(key);
        }
        set
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Canonical keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of skills in `self` that also appear in `other`.
    pub fn count_shared(&self, other: &SkillSet) -> usize {
        self.keys().filter(|k| other.contains_key(k)).count()
    }
}

/// Splits a job's required skills into (matched, missing) against a profile.
///
/// Both lists echo the job's entries verbatim, in job order, and together
/// cover every distinct required skill exactly once. Case variants collapse
/// to their first spelling. Blank entries are kept and always land in
/// `missing`, the same way `skill_coverage` counts them as uncovered.
pub fn partition_required<S: AsRef<str>>(
    profile: &SkillSet,
    required: &[S],
) -> (Vec<String>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        let name = skill.as_ref();
        let key = skill_key(name);
        if !seen.insert(key.clone()) {
            continue;
        }
        if profile.contains_key(&key) {
            matched.push(name.to_string());
        } else {
            missing.push(name.to_string());
        }
    }

    (matched, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_key_is_case_and_whitespace_insensitive() {
        assert_eq!(skill_key("  Spring Boot "), "spring boot");
        assert_eq!(skill_key("MySQL"), skill_key("mysql"));
    }

    #[test]
    fn test_skill_set_dedupes_case_variants_keeping_first_spelling() {
        let required = ["Java", "java", "JAVA", "Redis"];
        let set = SkillSet::from_skills(&required);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["java", "redis"]);

        let (matched, missing) = partition_required(&SkillSet::default(), &required);
        assert!(matched.is_empty());
        assert_eq!(missing, vec!["Java", "Redis"]);
    }

    #[test]
    fn test_skill_set_skips_blank_entries() {
        let set = SkillSet::from_skills(&["", "   ", "Docker"]);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["docker"]);
    }

    #[test]
    fn test_partition_covers_required_skills_without_overlap() {
        let profile = SkillSet::from_skills(&["java", "REDIS", "Go"]);
        let required = ["Java", "Spring", "MySQL", "Redis"];

        let (matched, missing) = partition_required(&profile, &required);

        assert_eq!(matched, vec!["Java", "Redis"]);
        assert_eq!(missing, vec!["Spring", "MySQL"]);
        assert_eq!(matched.len() + missing.len(), required.len());
        assert!(matched.iter().all(|m| !missing.contains(m)));
    }

    #[test]
    fn test_partition_collapses_duplicate_requirements() {
        let profile = SkillSet::from_skills(&["Vue"]);
        let (matched, missing) = partition_required(&profile, &["Vue", "vue", "React"]);

        assert_eq!(matched, vec!["Vue"]);
        assert_eq!(missing, vec!["React"]);
    }

    #[test]
    fn test_partition_keeps_blank_and_padded_entries_verbatim() {
        let profile = SkillSet::from_skills(&["Java", "redis", ""]);
        let required = ["Java", "", " Redis ", "Kafka"];

        let (matched, missing) = partition_required(&profile, &required);

        assert_eq!(matched, vec!["Java", " Redis "]);
        assert_eq!(missing, vec!["", "Kafka"]);
        assert_eq!(matched.len() + missing.len(), required.len());
    }

    #[test]
    fn test_count_shared() {
        let a = SkillSet::from_skills(&["Java", "Spring", "Kafka"]);
        let b = SkillSet::from_skills(&["spring", "java"]);
        assert_eq!(a.count_shared(&b), 2);
    }
}
