use crate::error::AppError;
use crate::submission::{self, Gradeables};

use super::{GradeOutcome, GradeResponse, Grader};

/// Decode `raw` and run it through `grader`.
pub fn dispatch(grader: &dyn Grader, raw: &str) -> Result<GradeResponse, AppError> {
    let gradeables = submission::decode(raw)?;
    check_widgets(grader.widgets(), &gradeables)?;

    let response = grader.grade(&gradeables)?.normalize();
    tracing::debug!(
        "Graded submission for '{}': ok={}",
        grader.id(),
        response.ok()
    );
    Ok(response)
}

/// One-off grading with a plain function, no registered grader needed.
pub fn grade<F, R>(raw: &str, func: F) -> Result<GradeResponse, AppError>
where
    F: FnOnce(&Gradeables) -> R,
    R: Into<GradeOutcome>,
{
    let gradeables = submission::decode(raw)?;
    let outcome: GradeOutcome = func(&gradeables).into();
    Ok(outcome.normalize())
}

fn check_widgets(expected: &[String], gradeables: &Gradeables) -> Result<(), AppError> {
    if let Some(missing) = expected.iter().find(|w| gradeables.get(w.as_str()).is_none()) {
        return Err(AppError::WidgetMismatch(format!("missing widget '{missing}'")));
    }

    if let Some(unexpected) = gradeables
        .identifiers()
        .find(|id| !expected.iter().any(|w| w == id))
    {
        return Err(AppError::WidgetMismatch(format!(
            "unexpected widget '{unexpected}'"
        )));
    }

    Ok(())
}
