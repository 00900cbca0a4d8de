//! Score integration — folds the individual signals into one ensemble score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::matching::AlgorithmScores;

/// Which signals feed the ensemble score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Skill coverage + experience fit.
    Basic,
    /// Text similarity + weighted overlap + taxonomy similarity.
    Advanced,
}

impl ScoringPolicy {
    pub const ALL: [ScoringPolicy; 2] = [ScoringPolicy::Basic, ScoringPolicy::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicy::Basic => "basic",
            ScoringPolicy::Advanced => "advanced",
        }
    }

    pub fn algorithm_label(&self) -> &'static str {
        match self {
            ScoringPolicy::Basic => "Basic skill matching",
            ScoringPolicy::Advanced => {
                "Multi-algorithm ensemble (TF-IDF + weighted Jaccard + taxonomy)"
            }
        }
    }

    /// Signals this policy blends, paired with their integration weight.
    pub fn signals(&self, weights: &ScoringWeights) -> Vec<(&'static str, f64)> {
        match self {
            ScoringPolicy::Basic => vec![
                ("skill_coverage", weights.skill_coverage),
                ("experience_fit", weights.experience_fit),
            ],
            ScoringPolicy::Advanced => vec![
                ("text_similarity", weights.text_similarity),
                ("weighted_overlap", weights.weighted_overlap),
                ("taxonomy_similarity", weights.taxonomy_similarity),
            ],
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ScoringPolicy::Basic),
            "advanced" => Ok(ScoringPolicy::Advanced),
            other => Err(AppError::Validation(format!(
                "Unknown scoring policy '{other}' (expected 'basic' or 'advanced')"
            ))),
        }
    }
}

/// Integration weights for both policies. Fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub text_similarity: f64,
    pub weighted_overlap: f64,
    pub taxonomy_similarity: f64,
    pub skill_coverage: f64,
    pub experience_fit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            text_similarity: 0.4,
            weighted_overlap: 0.35,
            taxonomy_similarity: 0.25,
            skill_coverage: 0.6,
            experience_fit: 0.4,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    pub fn advanced_sum(&self) -> f64 {
        self.text_similarity + self.weighted_overlap + self.taxonomy_similarity
    }

    pub fn basic_sum(&self) -> f64 {
        self.skill_coverage + self.experience_fit
    }

    /// Every weight must lie in [0, 1] and each policy's weights must sum to 1.
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("text_similarity", self.text_similarity),
            ("weighted_overlap", self.weighted_overlap),
            ("taxonomy_similarity", self.taxonomy_similarity),
            ("skill_coverage", self.skill_coverage),
            ("experience_fit", self.experience_fit),
        ];
        for (name, w) in named {
            if !(0.0..=1.0).contains(&w) {
                return Err(format!("weight '{name}' must be within [0, 1], got {w}"));
            }
        }
        if (self.advanced_sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!(
                "advanced weights must sum to 1.0, got {:.4}",
                self.advanced_sum()
            ));
        }
        if (self.basic_sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!(
                "basic weights must sum to 1.0, got {:.4}",
                self.basic_sum()
            ));
        }
        Ok(())
    }
}

/// Advanced ensemble: linear blend of the three signals.
pub fn integrate_advanced(
    text_similarity: f64,
    weighted_overlap: f64,
    taxonomy_similarity: f64,
    weights: &ScoringWeights,
) -> AlgorithmScores {
    let ensemble_score = (weights.text_similarity * text_similarity
        + weights.weighted_overlap * weighted_overlap
        + weights.taxonomy_similarity * taxonomy_similarity)
        .clamp(0.0, 1.0);

    AlgorithmScores {
        text_similarity,
        weighted_overlap,
        taxonomy_similarity,
        ensemble_score,
    }
}

/// Basic ensemble: skill coverage and experience fit, capped at 1.0.
pub fn integrate_basic(skill_coverage: f64, experience_fit: f64, weights: &ScoringWeights) -> f64 {
    (weights.skill_coverage * skill_coverage + weights.experience_fit * experience_fit)
        .clamp(0.0, 1.0)
}
