use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::integrator::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON array of job postings; the built-in sample catalog is used when unset.
    pub job_catalog_path: Option<PathBuf>,
    /// JSON taxonomy definition; the built-in taxonomy is used when unset.
    pub skill_taxonomy_path: Option<PathBuf>,
    pub weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            text_similarity: env_f64("MATCH_WEIGHT_TEXT", defaults.text_similarity)?,
            weighted_overlap: env_f64("MATCH_WEIGHT_OVERLAP", defaults.weighted_overlap)?,
            taxonomy_similarity: env_f64("MATCH_WEIGHT_TAXONOMY", defaults.taxonomy_similarity)?,
            skill_coverage: env_f64("MATCH_WEIGHT_SKILL_COVERAGE", defaults.skill_coverage)?,
            experience_fit: env_f64("MATCH_WEIGHT_EXPERIENCE", defaults.experience_fit)?,
        };
        weights
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid scoring weights: {e}"))?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_catalog_path: optional_env("JOB_CATALOG_PATH").map(PathBuf::from),
            skill_taxonomy_path: optional_env("SKILL_TAXONOMY_PATH").map(PathBuf::from),
            weights,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match optional_env(key) {
        Some(raw) => parse_weight(key, &raw),
        None => Ok(default),
    }
}

fn parse_weight(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("Environment variable '{key}' must be a number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_accepts_numbers() {
        assert_eq!(parse_weight("MATCH_WEIGHT_TEXT", " 0.5 ").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_weight_names_offending_variable() {
        let err = parse_weight("MATCH_WEIGHT_TEXT", "heavy").unwrap_err();
        assert!(err.to_string().contains("MATCH_WEIGHT_TEXT"));
    }
}
