//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::integrator::{ScoringPolicy, ScoringWeights};
use crate::models::job::JobPosting;
use crate::models::matching::MatchResult;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: Profile,
    #[serde(default)]
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PolicyMatchRequest {
    pub profile: Profile,
    #[serde(default)]
    pub industry: Option<String>,
    pub policy: String,
}

#[derive(Debug, Serialize)]
pub struct CompareMatchResponse {
    pub profile: Profile,
    pub basic_match: MatchResult,
    pub advanced_match: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct SignalWeight {
    pub signal: &'static str,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmInfo {
    pub policy: ScoringPolicy,
    pub label: &'static str,
    pub signals: Vec<SignalWeight>,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmListResponse {
    pub algorithms: Vec<AlgorithmInfo>,
    pub weights: ScoringWeights,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state.catalog.jobs().await?;
    Ok(Json(JobListResponse {
        jobs: jobs.as_ref().clone(),
    }))
}

/// GET /api/v1/algorithms
///
/// Describes each scoring policy with the weights the engine is running with.
pub async fn handle_list_algorithms(
    State(state): State<AppState>,
) -> Json<AlgorithmListResponse> {
    let weights = *state.engine.weights();
    let algorithms = ScoringPolicy::ALL
        .into_iter()
        .map(|policy| AlgorithmInfo {
            policy,
            label: policy.algorithm_label(),
            signals: policy
                .signals(&weights)
                .into_iter()
                .map(|(signal, weight)| SignalWeight { signal, weight })
                .collect(),
        })
        .collect();

    Json(AlgorithmListResponse {
        algorithms,
        weights,
    })
}

/// POST /api/v1/match/basic
pub async fn handle_basic_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result =
        run_match(&state, ScoringPolicy::Basic, request.profile, request.industry).await?;
    Ok(Json(result))
}

/// POST /api/v1/match/advanced
pub async fn handle_advanced_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result =
        run_match(&state, ScoringPolicy::Advanced, request.profile, request.industry).await?;
    Ok(Json(result))
}

/// POST /api/v1/match
///
/// Policy chosen by name. Unknown names are rejected with 400 rather than
/// falling back to a default.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<PolicyMatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let policy: ScoringPolicy = request.policy.parse()?;
    let result = run_match(&state, policy, request.profile, request.industry).await?;
    Ok(Json(result))
}

/// POST /api/v1/match/compare
///
/// Runs both policies against the same catalog snapshot.
pub async fn handle_compare_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<CompareMatchResponse>, AppError> {
    let basic_match = run_match(
        &state,
        ScoringPolicy::Basic,
        request.profile.clone(),
        request.industry.clone(),
    )
    .await?;
    let advanced_match = run_match(
        &state,
        ScoringPolicy::Advanced,
        request.profile.clone(),
        request.industry,
    )
    .await?;

    Ok(Json(CompareMatchResponse {
        profile: request.profile,
        basic_match,
        advanced_match,
    }))
}

/// Ranks off the async runtime: per-job scoring fans out on the rayon pool.
async fn run_match(
    state: &AppState,
    policy: ScoringPolicy,
    profile: Profile,
    industry: Option<String>,
) -> Result<MatchResult, AppError> {
    let jobs = state.catalog.jobs().await?;
    let engine = state.engine.clone();
    let industry = industry.filter(|i| !i.trim().is_empty());

    tokio::task::spawn_blocking(move || {
        let industry = industry.as_deref();
        match policy {
            ScoringPolicy::Basic => engine.basic_match(&profile, &jobs, industry),
            ScoringPolicy::Advanced => engine.advanced_match(&profile, &jobs, industry),
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Match worker failed: {e}")))
}
