use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::rsvp::outcome::{SubmissionError, SubmissionResult};

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type for the JSON API handlers.
///
/// Every error is answered with a `SubmissionResult` body, so API clients
/// read the same `{ success, message }` shape whatever the outcome.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The request body could not be read as an RSVP.
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Submission(SubmissionError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Submission(SubmissionError::Configuration) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Submission(
                SubmissionError::Integration { .. }
                | SubmissionError::IntegrationUnparseable { .. }
                | SubmissionError::Transport(_),
            ) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) => {
                tracing::debug!(detail = %s, "rejecting unreadable RSVP body");
                let result = SubmissionResult {
                    success: false,
                    message: s.to_owned(),
                };
                (self.status_code(), Json(result)).into_response()
            }
            Self::Submission(ref e) => {
                tracing::debug!(detail = ?e, "rejecting RSVP submission");
                (self.status_code(), Json(SubmissionResult::rejected(e))).into_response()
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}
