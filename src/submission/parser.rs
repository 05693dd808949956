use std::borrow::Cow;

use serde_json::Value;

/// Strip the outer `{"answer": "<json>"}` wrapper some course platforms add.
/// Anything that is not such a wrapper is returned as-is.
pub fn unwrap_answer(raw: &str) -> Cow<'_, str> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(mut outer)) => match outer.remove("answer") {
            Some(Value::String(inner)) => Cow::Owned(inner),
            _ => Cow::Borrowed(raw),
        },
        _ => Cow::Borrowed(raw),
    }
}

/// Extract the raw submission string from a request body based on Content-Type.
///
/// Form posts carry the payload in their `answer` field; every other body is
/// taken verbatim.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<String, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/x-www-form-urlencoded") {
        parse_form_answer(body)
    } else {
        String::from_utf8(body.to_vec()).map_err(|e| format!("Invalid UTF-8: {e}"))
    }
}

fn parse_form_answer(body: &[u8]) -> Result<String, String> {
    form_urlencoded::parse(body)
        .find(|(k, _)| k == "answer")
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| "Missing form field: answer".to_string())
}
