use axum::{routing::post, Router};

use crate::app::AppState;

pub mod route;
pub mod schema;
pub mod widget;

pub fn router() -> Router<AppState> {
    Router::new().route("/rsvp", post(route::rsvp_form))
}
