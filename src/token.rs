use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

use crate::error::AppError;

/// Encode a widget configuration for embedding in its initialization tag.
///
/// JSON, then base64 with the URL-safe alphabet (`-` and `_`) and no `=` padding.
pub fn encode_config<T: Serialize + ?Sized>(config: &T) -> Result<String, AppError> {
    let json = serde_json::to_vec(config)?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(json))
}
