use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::rsvp::{
    outcome::{SubmissionError, GENERIC_FAILURE_MESSAGE},
    Rsvp,
};

static UNKNOWN_FIELD_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Unknown field name: "(.+)""#).expect("The field name pattern should compile")
});

/// The three secrets needed to write into the RSVP table.
#[derive(Clone)]
pub struct AirtableCredentials {
    pub api_key: Secret<String>,
    pub base_id: String,
    pub table_name: String,
}

#[derive(Clone)]
pub struct AirtableClient {
    http_client: Client,
    base_url: String,
    credentials: Option<AirtableCredentials>,
}

#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    fields: RsvpFields<'a>,
}

#[derive(Serialize)]
struct RsvpFields<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
}

/// Body of a non-2xx Airtable response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiError {
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        message: Option<serde_json::Value>,
    },
    // e.g. `{"error": "NOT_FOUND"}`
    Code(String),
}

impl AirtableClient {
    /// Without `timeout` requests wait as long as the transport lets them.
    pub fn new(
        base_url: String,
        credentials: Option<AirtableCredentials>,
        timeout: Option<Duration>,
    ) -> Self {
        let http_client = match timeout {
            Some(timeout) => Client::builder().timeout(timeout),
            None => Client::builder(),
        }
        .build()
        .expect("The HTTP client should be built with the default TLS backend.");

        Self {
            http_client,
            base_url,
            credentials,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Append the RSVP to the configured table.
    ///
    /// Fails with [`SubmissionError::Configuration`] before touching the
    /// network if any secret is missing.
    #[tracing::instrument(
        name = "Record an RSVP in Airtable",
        skip(self, rsvp),
        fields(email = %rsvp.email)
    )]
    pub async fn create_rsvp(&self, rsvp: &Rsvp) -> Result<(), SubmissionError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SubmissionError::Configuration)?;

        let url = format!(
            "{}/v0/{}/{}",
            self.base_url.trim_end_matches('/'),
            credentials.base_id,
            urlencoding::encode(&credentials.table_name)
        );
        let body = CreateRecordRequest {
            fields: RsvpFields {
                email: rsvp.email.as_ref(),
            },
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(credentials.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.map_err(transport_error)?;
        Err(interpret_error(status, &text, &credentials.table_name))
    }
}

/// The request URL carries the base id and table name, so it is stripped.
fn transport_error(e: reqwest::Error) -> SubmissionError {
    let e = e.without_url();
    tracing::error!(detail = ?e, "Failed to reach Airtable");
    SubmissionError::Transport(e)
}

/// Turn a rejected request into the most specific message we can offer.
fn interpret_error(status: StatusCode, body: &str, table_name: &str) -> SubmissionError {
    let status_text = status.canonical_reason().unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(payload) => {
            tracing::error!(
                status = status.as_u16(),
                status_text,
                error = ?payload,
                "Airtable API error"
            );
            SubmissionError::Integration {
                status,
                message: payload.user_message(table_name),
            }
        }
        Err(_) => {
            tracing::error!(
                status = status.as_u16(),
                status_text,
                body,
                "Airtable API error (unparseable)"
            );
            SubmissionError::IntegrationUnparseable {
                status,
                body: body.to_owned(),
            }
        }
    }
}

impl ErrorBody {
    fn user_message(&self, table_name: &str) -> String {
        let Some(ApiError::Detailed { kind, message }) = &self.error else {
            return GENERIC_FAILURE_MESSAGE.to_owned();
        };

        let message = message.as_ref().and_then(message_text);
        match (kind.as_deref(), message.as_deref()) {
            (Some("INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND"), _) => {
                "Invalid API key or base ID. Please check your configuration.".to_owned()
            }
            (Some("TABLE_NOT_FOUND"), _) => {
                format!("Table \"{table_name}\" not found. Please check your table name.")
            }
            (Some("UNKNOWN_FIELD_NAME"), message) => {
                // best effort: depends on Airtable's exact wording
                let field_name = message
                    .and_then(|m| UNKNOWN_FIELD_NAME.captures(m))
                    .and_then(|c| c.get(1))
                    .map_or("unknown", |m| m.as_str());
                format!(
                    "Field \"{field_name}\" not found in your Airtable table. \
                    Please check that the Email field exists."
                )
            }
            (_, Some(message)) => format!("Airtable error: {message}"),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Airtable messages are strings, but anything else non-empty is shown as is.
fn message_text(message: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match message {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
