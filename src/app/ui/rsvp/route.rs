use axum::{
    extract::{rejection::FormRejection, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Form,
};

use super::{
    schema::{RsvpFormData, WidgetSlot},
    widget::RsvpWidget,
};
use crate::{
    app::{api::rsvp::route::submit_rsvp, ui::home::route::HomeTemplate, AppState},
    domain::rsvp::outcome::{SubmissionError, SubmissionResult},
};

/// Set by htmx on every request it issues.
const HX_REQUEST: &str = "HX-Request";

/// Handle a submission from one of the landing page widgets.
///
/// htmx requests get the re-rendered widget back, to be swapped in place.
/// Plain form posts get the whole page, with the submitting widget showing
/// the result.
#[tracing::instrument(
    name = "RSVP via the landing page",
    skip(state, headers, form),
    fields(widget = tracing::field::Empty)
)]
pub async fn rsvp_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<RsvpFormData>, FormRejection>,
) -> Response {
    let widget = match form {
        Ok(Form(form)) => {
            let slot = WidgetSlot::parse(form.widget.as_deref());
            tracing::Span::current().record("widget", slot.as_str());

            let result =
                SubmissionResult::from(submit_rsvp(&state.airtable_client, form.body()).await);
            RsvpWidget::with_result(slot, form.email, result)
        }
        Err(rejection) => {
            let error = SubmissionError::InvalidInput(rejection.body_text());
            tracing::debug!(detail = %error, "rejecting unreadable RSVP form");
            RsvpWidget::with_result(
                WidgetSlot::Hero,
                String::new(),
                SubmissionResult::rejected(&error),
            )
        }
    };

    if headers.contains_key(HX_REQUEST) {
        widget.into_response()
    } else {
        HomeTemplate::default().with_widget(widget).into_response()
    }
}
