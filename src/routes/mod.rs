pub mod grade;
pub mod problems;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/problems", get(problems::list))
        .route("/api/v1/problems/{id}/config", get(problems::config))
        .route("/api/v1/problems/{id}/grade", post(grade::grade))
}
