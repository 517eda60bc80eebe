use axum::Router;

use super::AppState;

mod health;
pub mod rsvp;

pub fn router() -> Router<AppState> {
    health::router().merge(rsvp::router())
}
