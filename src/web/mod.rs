//! HTTP surface: JSON API and server-rendered pages.

pub mod api;
pub mod html;
pub mod mock;
pub mod pages;

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::context::Context;

/// Request logging middleware.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::debug!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}

/// Build the application router.
pub fn router(ctx: Context) -> Router {
    Router::new()
        .route("/", get(pages::catalogue_page))
        .route("/component/:app/*path", get(pages::component_page))
        .route("/api/components", get(api::list_components))
        .route("/api/components/:app/*path", get(api::component_detail))
        .layer(middleware::from_fn(log_requests))
        .with_state(ctx)
}
