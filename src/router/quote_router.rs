use axum::http::Method;
use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handler::quote_handler::submit_quote_handler;
use crate::service::quote_service::QuoteIntakeServiceImpl;

/// Public submit route. Only POST is mounted, so any other method gets a 405
/// from the method router before the body is touched; the CORS layer answers
/// browser pre-flight OPTIONS requests.
pub fn quote_router(service: Arc<QuoteIntakeServiceImpl>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/submit", post(submit_quote_handler))
        .layer(cors)
        .with_state(service)
}
