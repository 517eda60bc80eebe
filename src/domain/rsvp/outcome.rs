use std::error::Error as _;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const THANK_YOU_MESSAGE: &str = "Thank you for your RSVP! We look forward to seeing you.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit RSVP. Please try again.";

/// What the visitor sees after submitting the RSVP form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: THANK_YOU_MESSAGE.to_owned(),
        }
    }

    pub fn rejected(error: &SubmissionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}

impl From<Result<(), SubmissionError>> for SubmissionResult {
    fn from(outcome: Result<(), SubmissionError>) -> Self {
        match outcome {
            Ok(()) => Self::accepted(),
            Err(e) => Self::rejected(&e),
        }
    }
}

/// Every way an RSVP submission can fail.
///
/// The `Display` output of each variant is the message shown to the visitor.
#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Server configuration error. Please contact support.")]
    Configuration,
    #[error("{message}")]
    Integration { status: StatusCode, message: String },
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    IntegrationUnparseable { status: StatusCode, body: String },
    #[error("An error occurred: {}. Please try again later.", describe(.0))]
    Transport(#[source] reqwest::Error),
}

/// The error text followed by any cause it does not already mention.
fn describe(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.contains(&cause_text) {
            if !text.is_empty() {
                text.push_str(": ");
            }
            text.push_str(&cause_text);
        }
        source = cause.source();
    }

    if text.is_empty() {
        "Unknown error".to_owned()
    } else {
        text
    }
}
