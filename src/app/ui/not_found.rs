use askama::Template;
use axum::{http::StatusCode, response::IntoResponse};

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

#[tracing::instrument(name = "Not found page")]
pub async fn not_found_page() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
