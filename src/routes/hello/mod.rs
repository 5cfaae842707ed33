use axum::{http::header, response::IntoResponse};
use tracing::{info, instrument};

/// The page served for every invocation, embedded at compile time.
pub const HELLO_PAGE: &str = include_str!("hello.html");

#[instrument]
pub async fn hello() -> impl IntoResponse {
    info!("processed a request");
    ([(header::CONTENT_TYPE, "text/html")], HELLO_PAGE)
}
