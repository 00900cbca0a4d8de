//! Job catalog provider — pluggable, trait-based source of job postings.
//!
//! Default: `StaticCatalog`, an in-memory list seeded from the built-in sample
//! postings or from a JSON file named by `JOB_CATALOG_PATH`.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`, so a listing-store backend can be
//! swapped in at startup without touching handlers or the engine.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPosting;

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Current catalog snapshot, in catalog order.
    async fn jobs(&self) -> Result<Arc<Vec<JobPosting>>, AppError>;
}

/// Fixed, read-only catalog held in memory.
pub struct StaticCatalog {
    jobs: Arc<Vec<JobPosting>>,
}

impl StaticCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: Arc::new(jobs),
        }
    }

    /// Loads a JSON array of job postings. Missing ids are generated.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog from {}", path.display()))?;
        let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid job catalog JSON in {}", path.display()))?;
        info!("Loaded {} job postings from {}", jobs.len(), path.display());
        Ok(Self::new(jobs))
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(sample_jobs())
    }
}

#[async_trait]
impl JobCatalog for StaticCatalog {
    async fn jobs(&self) -> Result<Arc<Vec<JobPosting>>, AppError> {
        Ok(Arc::clone(&self.jobs))
    }
}

/// Built-in sample postings used when no catalog file is configured.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        sample_job("Java Developer", &["Java", "Spring", "MySQL", "Redis"], 2, 15000.0),
        sample_job(
            "Senior Java Developer",
            &["Java", "Spring Boot", "MySQL", "Redis", "Docker"],
            3,
            20000.0,
        ),
        sample_job("Frontend Developer", &["JavaScript", "Vue", "React", "HTML"], 1, 12000.0),
        sample_job("Full-Stack Developer", &["Java", "Spring", "Vue", "MySQL"], 2, 18000.0),
        sample_job(
            "Backend Developer",
            &["Java", "Spring Boot", "MySQL", "Redis"],
            2,
            16000.0,
        ),
    ]
}

fn sample_job(title: &str, skills: &[&str], min_experience: u32, salary: f64) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: Some("Example Tech Co.".to_string()),
        industry: "internet".to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        min_experience: Some(min_experience),
        required_education: Some("Bachelor".to_string()),
        description: format!(
            "Hiring {title}, requires {} and {min_experience}+ years of relevant experience",
            skills.join(", ")
        ),
        base_salary: Some(salary),
    }
}
