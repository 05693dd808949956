use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::token;

pub async fn list(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let problems: Vec<serde_json::Value> = state
        .graders
        .list()
        .iter()
        .map(|g| {
            json!({
                "id": g.id(),
                "name": g.name(),
                "widgets": g.widgets(),
            })
        })
        .collect();

    Json(json!({ "problems": problems }))
}

/// The problem's widget configuration, both as JSON and as the encoded token.
pub async fn config(
    State(state): State<SharedState>,
    Path(problem_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = state
        .graders
        .get(&problem_id)
        .and_then(|g| g.config())
        .ok_or_else(|| AppError::NotFound(format!("No configuration for problem: {problem_id}")))?;

    let token = token::encode_config(&config)?;

    Ok(Json(json!({
        "id": problem_id,
        "config": config,
        "token": token,
    })))
}
