//! Home and informational pages.

use axum::http::StatusCode;
use axum::response::Html;
use rand::Rng;

use crate::adapter::inbound::http::view;

/// Draw a lucky number in `1..=1000`.
pub fn lucky_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=1000)
}

/// `GET /`
pub async fn home() -> Html<String> {
    let lucky = lucky_number(&mut rand::thread_rng());
    Html(view::page::home(lucky))
}

/// `GET /about-us`
pub async fn about_us() -> Html<String> {
    Html(view::page::about_us())
}

/// `GET /contact-us`
pub async fn contact_us() -> Html<String> {
    Html(view::page::contact_us())
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(view::page::not_found()))
}
