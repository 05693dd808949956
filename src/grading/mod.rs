pub mod dispatch;
pub mod outcome;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::AppError;
use crate::submission::Gradeables;

pub use dispatch::{dispatch, grade};
pub use outcome::{GradeOutcome, GradeResponse};

/// A problem's grading logic.
///
/// `widgets` lists the identifiers the grader consumes; a submission must
/// carry exactly those widgets before `grade` is called.
pub trait Grader: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn widgets(&self) -> &[String];

    /// Widget configuration published to the browser, if any.
    fn config(&self) -> Option<Value> {
        None
    }

    fn grade(&self, gradeables: &Gradeables) -> Result<GradeOutcome, AppError>;
}

type GradeFn = dyn Fn(&Gradeables) -> Result<GradeOutcome, AppError> + Send + Sync;

/// A grader built from a closure.
pub struct FnGrader {
    id: String,
    name: String,
    widgets: Vec<String>,
    config: Option<Value>,
    func: Box<GradeFn>,
}

impl FnGrader {
    pub fn new<F>(id: &str, widgets: &[&str], func: F) -> Self
    where
        F: Fn(&Gradeables) -> Result<GradeOutcome, AppError> + Send + Sync + 'static,
    {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            widgets: widgets.iter().map(|w| w.to_string()).collect(),
            config: None,
            func: Box::new(func),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl Grader for FnGrader {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn widgets(&self) -> &[String] {
        &self.widgets
    }

    fn config(&self) -> Option<Value> {
        self.config.clone()
    }

    fn grade(&self, gradeables: &Gradeables) -> Result<GradeOutcome, AppError> {
        (self.func)(gradeables)
    }
}

#[derive(Default)]
pub struct GraderRegistry {
    graders: BTreeMap<String, Arc<dyn Grader>>,
}

impl GraderRegistry {
    pub fn new() -> Self {
        Self {
            graders: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, grader: Arc<dyn Grader>) {
        if self.graders.contains_key(grader.id()) {
            tracing::warn!("Replacing grader for problem '{}'", grader.id());
        }
        self.graders.insert(grader.id().to_string(), grader);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Grader>> {
        self.graders.get(id)
    }

    pub fn list(&self) -> Vec<&Arc<dyn Grader>> {
        self.graders.values().collect()
    }
}
