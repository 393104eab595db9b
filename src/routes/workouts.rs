use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::types::training::WorkoutType;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/workout-types", get(workout_types))
}

#[derive(Serialize)]
struct WorkoutTypeInfo {
    code: WorkoutType,
    name: String,
    fields: Vec<String>,
}

async fn workout_types() -> Json<Vec<WorkoutTypeInfo>> {
    let types = WorkoutType::ALL
        .iter()
        .map(|kind| WorkoutTypeInfo {
            code: *kind,
            name: kind.name().to_string(),
            fields: kind.fields().iter().map(|f| f.to_string()).collect(),
        })
        .collect();
    Json(types)
}
