use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::schema::RsvpBody;
use crate::{
    airtable::AirtableClient,
    app::{error::AppResult, AppState},
    domain::rsvp::{
        outcome::{SubmissionError, SubmissionResult},
        Rsvp,
    },
};

#[tracing::instrument(name = "RSVP via the API", skip(state, body))]
pub async fn rsvp(
    State(state): State<AppState>,
    body: Result<Json<RsvpBody>, JsonRejection>,
) -> AppResult<Json<SubmissionResult>> {
    let Json(body) = body?;
    submit_rsvp(&state.airtable_client, body).await?;

    Ok(Json(SubmissionResult::accepted()))
}

/// Validate the submitted email, then record it in Airtable.
///
/// Validation short-circuits: a missing or malformed email never reaches the
/// configuration check, and a missing configuration never reaches the network.
#[tracing::instrument(
    name = "Submit an RSVP",
    skip(airtable_client, body),
    fields(email = %body.email())
)]
pub(in crate::app) async fn submit_rsvp(
    airtable_client: &AirtableClient,
    body: RsvpBody,
) -> Result<(), SubmissionError> {
    let rsvp = Rsvp::try_from(body).map_err(|e| {
        tracing::info!(detail = %e, "rejecting RSVP with an invalid email");
        SubmissionError::InvalidInput(e)
    })?;

    airtable_client.create_rsvp(&rsvp).await
}
