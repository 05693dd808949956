use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// What a grader hands back before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeOutcome {
    /// The `(passed, message)` form; a missing message becomes `""`.
    PassFail { ok: bool, msg: Option<String> },
    /// An already-shaped response carrying an `ok` key, passed through as-is.
    Preformatted(Map<String, Value>),
}

/// The response sent back to the course platform.
///
/// Pass/fail outcomes always produce `{ok, msg}`. Preformatted outcomes keep
/// every key exactly as the grader wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeResponse(Map<String, Value>);

impl GradeResponse {
    /// True only when `ok` is the JSON literal `true`.
    pub fn ok(&self) -> bool {
        self.0.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn msg(&self) -> &str {
        self.0.get("msg").and_then(Value::as_str).unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl GradeOutcome {
    pub fn pass(msg: impl Into<String>) -> Self {
        GradeOutcome::PassFail {
            ok: true,
            msg: Some(msg.into()),
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        GradeOutcome::PassFail {
            ok: false,
            msg: Some(msg.into()),
        }
    }

    /// Accept an already-shaped response; it only has to contain `ok`.
    pub fn preformatted(response: Map<String, Value>) -> Result<Self, AppError> {
        if !response.contains_key("ok") {
            return Err(AppError::MalformedOutcome(
                "preformatted response has no 'ok' key".to_string(),
            ));
        }
        Ok(GradeOutcome::Preformatted(response))
    }

    pub fn normalize(self) -> GradeResponse {
        match self {
            GradeOutcome::PassFail { ok, msg } => {
                let mut response = Map::new();
                response.insert("ok".to_string(), Value::Bool(ok));
                response.insert("msg".to_string(), Value::String(msg.unwrap_or_default()));
                GradeResponse(response)
            }
            GradeOutcome::Preformatted(response) => GradeResponse(response),
        }
    }
}

impl From<(bool,)> for GradeOutcome {
    fn from((ok,): (bool,)) -> Self {
        GradeOutcome::PassFail { ok, msg: None }
    }
}

impl From<(bool, &str)> for GradeOutcome {
    fn from((ok, msg): (bool, &str)) -> Self {
        GradeOutcome::PassFail {
            ok,
            msg: Some(msg.to_string()),
        }
    }
}

impl From<(bool, String)> for GradeOutcome {
    fn from((ok, msg): (bool, String)) -> Self {
        GradeOutcome::PassFail { ok, msg: Some(msg) }
    }
}

/// Validate a dynamically produced result.
///
/// Only an object with an `ok` key is accepted. JSON has no tuples, so arrays
/// are rejected like any other shape; Rust graders get the pair form through
/// the `From<(bool, ..)>` impls.
impl TryFrom<Value> for GradeOutcome {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => GradeOutcome::preformatted(map),
            other => Err(AppError::MalformedOutcome(format!(
                "expected an object with 'ok', got {other}"
            ))),
        }
    }
}
