use axum::Router;

use super::AppState;

mod asset;
mod home;
pub mod not_found;
mod rsvp;

pub fn router() -> Router<AppState> {
    home::router()
        .merge(rsvp::router())
        .merge(asset::router())
}
