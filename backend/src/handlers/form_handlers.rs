use axum::{http::StatusCode, Json};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::form_fields::{semantic_name, FORM_ENDPOINT};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("collection endpoint returned status {0}")]
    UpstreamRejected(u16),
    #[error("could not reach collection endpoint: {0}")]
    TransportFailure(#[from] reqwest::Error),
}

/// Accepts the wizard's finished answer set and forwards it to the collection
/// form. Missing or extra fields are forwarded as-is; the upstream keeps what
/// it recognizes. All failure modes collapse into one opaque 500.
pub async fn submit_form(
    Json(submission): Json<Value>,
) -> Result<Json<SubmitResponse>, (StatusCode, Json<SubmitResponse>)> {
    let Some(fields) = submission.as_object() else {
        tracing::warn!("submission body was not a JSON object");
        return Err(failure(StatusCode::BAD_REQUEST));
    };

    let recognized: Vec<&str> = fields.keys().filter_map(|key| semantic_name(key)).collect();
    tracing::info!(
        total = fields.len(),
        recognized = ?recognized,
        "relaying registration submission"
    );

    match relay_submission(FORM_ENDPOINT, fields).await {
        Ok(()) => Ok(Json(SubmitResponse {
            success: true,
            message: "Form submitted successfully!".to_string(),
        })),
        Err(e) => {
            tracing::error!("failed to relay submission: {}", e);
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

fn failure(status: StatusCode) -> (StatusCode, Json<SubmitResponse>) {
    (
        status,
        Json(SubmitResponse {
            success: false,
            message: "Form submission failed.".to_string(),
        }),
    )
}

/// Issues the single outbound POST carrying the form-encoded submission.
/// No retries, no timeout override.
pub async fn relay_submission(
    endpoint: &str,
    fields: &Map<String, Value>,
) -> Result<(), SubmitError> {
    let body = encode_form_body(&form_pairs(fields));

    let response = Client::new()
        .post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SubmitError::UpstreamRejected(response.status().as_u16()));
    }

    Ok(())
}

/// Flattens a submission object into form fields, in the order the keys
/// arrived. Array values expand to one entry per element under the repeated
/// key; booleans become the "Yes"/"No" tokens the collection form expects;
/// everything else is coerced to text.
pub fn form_pairs(fields: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (key, value) in fields {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), text_value(item)));
                }
            }
            Value::Bool(flag) => {
                let token = if *flag { "Yes" } else { "No" };
                pairs.push((key.clone(), token.to_string()));
            }
            other => pairs.push((key.clone(), text_value(other))),
        }
    }

    pairs
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn encode_form_body(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
