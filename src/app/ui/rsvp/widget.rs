use askama::Template;

use super::schema::WidgetSlot;
use crate::domain::rsvp::outcome::SubmissionResult;

/// The email capture form, rendered on its own for htmx swaps and embedded
/// in the landing page otherwise.
#[derive(Template)]
#[template(path = "rsvp_widget.html")]
pub struct RsvpWidget {
    pub slot: WidgetSlot,
    pub email: String,
    pub result: Option<SubmissionResult>,
}

impl RsvpWidget {
    pub fn empty(slot: WidgetSlot) -> Self {
        Self {
            slot,
            email: String::new(),
            result: None,
        }
    }

    /// The input is cleared after a successful submission and keeps the
    /// submitted value otherwise, so the visitor can correct it.
    pub fn with_result(slot: WidgetSlot, submitted_email: String, result: SubmissionResult) -> Self {
        let email = if result.success {
            String::new()
        } else {
            submitted_email
        };

        Self {
            slot,
            email,
            result: Some(result),
        }
    }
}
