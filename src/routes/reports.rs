use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::pipeline::report::build_report;
use crate::state::AppState;
use crate::types::report::{Package, Report, Summary};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reports", post(create_report))
        .route("/api/reports/:report_id", get(get_report))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportRequest {
    packages: Vec<Package>,
}

async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<Report>, AppError> {
    validate_batch_size(request.packages.len(), state.config().max_packages)?;

    let summaries: Vec<Summary> = build_report(&request.packages)?
        .into_iter()
        .map(Summary::from)
        .collect();

    let report = Report {
        report_id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        summaries,
    };

    tracing::info!(
        "Built report {} with {} summaries",
        report.report_id,
        report.summaries.len()
    );

    state.insert(report.clone());
    Ok(Json(report))
}

async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<Report>, AppError> {
    state
        .get(&report_id)
        .map(Json)
        .ok_or(AppError::NotFound(report_id))
}

fn validate_batch_size(count: usize, max: usize) -> Result<(), AppError> {
    if count == 0 {
        return Err(AppError::BadRequest("No packages provided".to_string()));
    }
    if count > max {
        return Err(AppError::BadRequest(format!(
            "Too many packages: {}. At most {} are accepted per report",
            count, max
        )));
    }
    Ok(())
}
