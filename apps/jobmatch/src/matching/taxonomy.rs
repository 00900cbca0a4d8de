//! Skill taxonomy — category membership and importance weights per skill.
//!
//! Built once at startup (built-in defaults or a JSON definition file) and
//! shared read-only behind an `Arc` for the lifetime of the process.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::skills::skill_key;

/// Weight assigned to skills that are absent from the weight table.
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.5;

/// Serializable form of the taxonomy, as stored in `SKILL_TAXONOMY_PATH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    /// category name → member skills
    pub categories: BTreeMap<String, Vec<String>>,
    /// skill name → importance weight
    pub weights: BTreeMap<String, f64>,
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_SKILL_WEIGHT
}

/// Read-only lookup tables keyed by `skill_key`.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories_by_skill: HashMap<String, Vec<String>>,
    weights: HashMap<String, f64>,
    default_weight: f64,
}

impl SkillTaxonomy {
    /// Validates a definition and builds the lookup tables.
    pub fn from_definition(definition: TaxonomyDefinition) -> Result<Self> {
        for (skill, weight) in &definition.weights {
            anyhow::ensure!(
                weight.is_finite() && *weight >= 0.0,
                "Skill weight for '{skill}' must be a non-negative number, got {weight}"
            );
        }
        anyhow::ensure!(
            definition.default_weight.is_finite() && definition.default_weight >= 0.0,
            "default_weight must be a non-negative number"
        );
        Ok(Self::build(definition))
    }

    fn build(definition: TaxonomyDefinition) -> Self {
        let mut categories_by_skill: HashMap<String, Vec<String>> = HashMap::new();
        for (category, skills) in &definition.categories {
            for skill in skills {
                let entry = categories_by_skill.entry(skill_key(skill)).or_default();
                if !entry.contains(category) {
                    entry.push(category.clone());
                }
            }
        }

        let weights = definition
            .weights
            .into_iter()
            .map(|(skill, w)| (skill_key(&skill), w))
            .collect();

        Self {
            categories_by_skill,
            weights,
            default_weight: definition.default_weight,
        }
    }

    /// Loads a taxonomy definition from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill taxonomy from {}", path.display()))?;
        let definition: TaxonomyDefinition = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid skill taxonomy JSON in {}", path.display()))?;
        Self::from_definition(definition)
    }

    /// Importance weight of a skill; unknown skills get the default weight.
    pub fn weight(&self, skill: &str) -> f64 {
        self.weights
            .get(&skill_key(skill))
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Categories a skill belongs to. Empty for unknown skills.
    pub fn categories_of(&self, skill: &str) -> &[String] {
        self.categories_by_skill
            .get(&skill_key(skill))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Union of the categories of every skill in `skills`.
    pub fn categories_for<'a, I>(&self, skills: I) -> BTreeSet<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        skills
            .into_iter()
            .flat_map(|s| self.categories_of(s).iter().map(String::as_str))
            .collect()
    }
}

impl Default for TaxonomyDefinition {
    fn default() -> Self {
        let category = |name: &str, skills: &[&str]| {
            (
                name.to_string(),
                skills.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
        };

        let categories = BTreeMap::from([
            category("backend", &["Java", "Spring", "MySQL", "Redis", "Python"]),
            category("frontend", &["JavaScript", "Vue", "React", "HTML", "CSS"]),
            category("operations", &["Docker", "Kubernetes", "Linux", "AWS"]),
        ]);

        let weights = [
            ("Java", 1.0),
            ("Spring", 0.9),
            ("Spring Boot", 0.9),
            ("MySQL", 0.8),
            ("Redis", 0.7),
            ("Python", 0.8),
            ("JavaScript", 0.8),
            ("Vue", 0.7),
            ("React", 0.7),
            ("Docker", 0.6),
            ("Kubernetes", 0.6),
            ("Linux", 0.5),
        ]
        .into_iter()
        .map(|(s, w)| (s.to_string(), w))
        .collect();

        Self {
            categories,
            weights,
            default_weight: DEFAULT_SKILL_WEIGHT,
        }
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::build(TaxonomyDefinition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_known_weights_are_case_insensitive() {
        let taxonomy = SkillTaxonomy::default();
        assert_eq!(taxonomy.weight("Java"), 1.0);
        assert_eq!(taxonomy.weight("java"), 1.0);
        assert_eq!(taxonomy.weight("spring boot"), 0.9);
    }

    #[test]
    fn test_unknown_skill_gets_default_weight() {
        let taxonomy = SkillTaxonomy::default();
        assert_eq!(taxonomy.weight("COBOL"), DEFAULT_SKILL_WEIGHT);
        assert_eq!(taxonomy.weight("HTML"), DEFAULT_SKILL_WEIGHT);
    }

    #[test]
    fn test_categories_lookup() {
        let taxonomy = SkillTaxonomy::default();
        assert_eq!(taxonomy.categories_of("redis").to_vec(), vec!["backend".to_string()]);
        assert_eq!(taxonomy.categories_of("AWS").to_vec(), vec!["operations".to_string()]);
        assert!(taxonomy.categories_of("Spring Boot").is_empty());
    }

    #[test]
    fn test_categories_for_collects_union() {
        let taxonomy = SkillTaxonomy::default();
        let cats = taxonomy.categories_for(["Java", "Vue", "Rust"]);
        assert_eq!(cats.into_iter().collect::<Vec<_>>(), vec!["backend", "frontend"]);
    }

    #[test]
    fn test_definition_allows_multi_category_skills() {
        let definition = TaxonomyDefinition {
            categories: BTreeMap::from([
                ("backend".to_string(), vec!["Python".to_string()]),
                ("data".to_string(), vec!["python".to_string(), "Spark".to_string()]),
            ]),
            weights: BTreeMap::new(),
            default_weight: 0.5,
        };
        let taxonomy = SkillTaxonomy::from_definition(definition).unwrap();
        assert_eq!(taxonomy.categories_of("Python").len(), 2);
    }

    #[test]
    fn test_definition_rejects_negative_weight() {
        let definition = TaxonomyDefinition {
            categories: BTreeMap::new(),
            weights: BTreeMap::from([("Java".to_string(), -1.0)]),
            default_weight: 0.5,
        };
        assert!(SkillTaxonomy::from_definition(definition).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": {{"data": ["Spark", "Kafka"]}}, "weights": {{"Spark": 0.9}}}}"#
        )
        .unwrap();

        let taxonomy = SkillTaxonomy::from_json_file(file.path()).unwrap();
        assert_eq!(taxonomy.weight("spark"), 0.9);
        assert_eq!(taxonomy.weight("kafka"), DEFAULT_SKILL_WEIGHT);
        assert_eq!(taxonomy.categories_of("Kafka").to_vec(), vec!["data".to_string()]);
    }
}
