use axum::{extract::rejection::JsonRejection, Json};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Unwraps a JSON request body that must be a non-empty object.
///
/// A missing body, invalid JSON, a non-object or `{}` are all bad requests.
pub fn require_object(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>> {
    let Json(value) = payload?;
    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        Value::Object(_) => Err(Error::BadRequest("Request body is empty".into())),
        _ => Err(Error::BadRequest("Request body must be a JSON object".into())),
    }
}
