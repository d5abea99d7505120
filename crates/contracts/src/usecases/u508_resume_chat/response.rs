//! Response bodies of the resume chat backend.
//!
//! Every field is optional: the backend is free to omit any of them and the
//! client falls back to its own message. Unknown fields are ignored.
//! Message fields take any truthy JSON scalar, so `{"answer": 42}` reads as `"42"`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Scalar → text. `null`, `false`, `0`, arrays and objects count as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    };
    Ok(text)
}

/// Ответ на `POST`/`PUT /api/upload/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "scalar_text")]
    pub status: Option<String>,
}

/// Ответ на `DELETE /api/upload/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
}

/// Ответ на `POST /api/ask/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "scalar_text")]
    pub answer: Option<String>,
}

/// Body of any non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "scalar_text")]
    pub error: Option<String>,
}

/// Ответ на `GET /api/upload/`: есть ли сейчас резюме на сервере
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStatusResponse {
    #[serde(default)]
    pub uploaded: bool,
    #[serde(default)]
    pub filename: Option<String>,
}
