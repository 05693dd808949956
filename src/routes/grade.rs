use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::error::AppError;
use crate::grading::{self, GradeResponse};
use crate::state::SharedState;
use crate::submission::parser;

pub async fn grade(
    State(state): State<SharedState>,
    Path(problem_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GradeResponse>, AppError> {
    let grader = state
        .graders
        .get(&problem_id)
        .ok_or_else(|| AppError::NotFound(format!("Problem not found: {problem_id}")))?;

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let response = grading::dispatch(&**grader, &raw).inspect_err(|e| {
        tracing::warn!("Rejected submission for '{problem_id}': {e}");
    })?;

    Ok(Json(response))
}
