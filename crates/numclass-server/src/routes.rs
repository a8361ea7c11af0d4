//! The classify-number route.
//!
//! Query parsing, classification, fact retrieval, and JSON assembly for
//! `GET /api/classify-number`. Validation errors become 4xx responses
//! with the `{"number": ..., "error": true}` payload; a failed fact
//! lookup never does, it just degrades the `fun_fact` field.

use bytes::Bytes;
use http::{Response, StatusCode};
use http_body_util::Full;
use numclass_core::{classify, Classification};
use numclass_facts::FactClient;
use serde::{Deserialize, Serialize};

/// Type alias for the HTTP response body.
pub type ResponseBody = Full<Bytes>;

/// Type alias for the HTTP response.
pub type HttpResponse = Response<ResponseBody>;

/// Successful classification payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// The computed number properties.
    #[serde(flatten)]
    pub classification: Classification,

    /// Trivia fact for the number, or the fallback text.
    pub fun_fact: String,
}

/// Handles `GET /api/classify-number`.
///
/// `query` is the raw query string of the request URI, if any.
pub async fn handle_classify(facts: &FactClient, query: Option<&str>) -> HttpResponse {
    let raw_number = extract_number_param(query);

    match classify(raw_number.as_deref()) {
        Ok(classification) => {
            let fun_fact = facts.math_fact_or_fallback(classification.number).await;
            let body = ClassifyResponse {
                classification,
                fun_fact,
            };
            match serde_json::to_string(&body) {
                Ok(json) => json_response(StatusCode::OK, json),
                Err(e) => {
                    tracing::error!("Failed to serialize classification: {}", e);
                    json_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        r#"{"error":"serialization failure"}"#.to_string(),
                    )
                }
            }
        }
        Err(e) => {
            tracing::debug!("Rejected classify input: {}", e);
            json_response(e.status_code(), e.error_body().to_string())
        }
    }
}

/// Builds the 404 response for unknown paths.
#[must_use]
pub fn not_found(path: &str) -> HttpResponse {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path
    });
    json_response(StatusCode::NOT_FOUND, body.to_string())
}

/// Pulls the raw `number` parameter out of the query string.
///
/// The value stays a raw string so an unparsable one can be echoed back
/// verbatim in the error payload. When the parameter is repeated, the
/// first occurrence wins; a query string that cannot be decoded at all
/// is treated as having no parameter.
fn extract_number_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value)
}

/// Builds a JSON response with the given status and body.
fn json_response(status: StatusCode, body: String) -> HttpResponse {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
