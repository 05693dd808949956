use std::sync::Arc;

use crate::config::Config;
use crate::grading::GraderRegistry;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub graders: GraderRegistry,
}
