use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppError;

use super::collection::GradeableCollection;
use super::parser;

pub const SUPPORTED_API_VERSION: &str = "0.1";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub api_version: String,
    pub meta: Meta,
    pub data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// All collections decoded from one submission, in the order the widget sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradeables {
    collections: Vec<GradeableCollection>,
}

impl Gradeables {
    pub fn get(&self, identifier: &str) -> Option<&GradeableCollection> {
        self.collections.iter().find(|c| c.identifier == identifier)
    }

    /// Like [`Gradeables::get`], for graders that propagate a missing widget with `?`.
    pub fn require(&self, identifier: &str) -> Result<&GradeableCollection, AppError> {
        self.get(identifier)
            .ok_or_else(|| AppError::WidgetMismatch(format!("missing widget '{identifier}'")))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|c| c.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GradeableCollection> {
        self.collections.iter()
    }
}

/// Decode a raw submission, with or without the outer `{"answer": ...}` wrapper.
pub fn decode(raw: &str) -> Result<Gradeables, AppError> {
    let payload = parser::unwrap_answer(raw);
    let envelope: Envelope = serde_json::from_str(&payload)?;
    from_envelope(envelope)
}

pub fn from_envelope(envelope: Envelope) -> Result<Gradeables, AppError> {
    if envelope.api_version != SUPPORTED_API_VERSION {
        return Err(AppError::UnsupportedVersion(envelope.api_version));
    }

    let config = envelope.meta.config;
    let collections = envelope
        .data
        .into_iter()
        .map(|(identifier, raw)| -> Result<GradeableCollection, AppError> {
            // Every widget reports a list; anything else is a malformed payload.
            let entries: Vec<Value> = serde_json::from_value(raw)?;
            Ok(GradeableCollection::new(&identifier, &config, entries))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    tracing::debug!(
        "Decoded {} gradeable collection(s): {:?}",
        collections.len(),
        collections.iter().map(|c| c.identifier.as_str()).collect::<Vec<_>>()
    );

    Ok(Gradeables { collections })
}
