//! HTTP gateway: routes, handlers and their wiring to the domain.

pub mod error;
pub mod middleware;
pub mod order;
pub mod web;

use crate::domain::OrderCreator;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub use error::{ApiError, ErrorResponse};
pub use order::{CreateOrderRequest, CreateOrderResponse};

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderCreator>,
}

pub async fn healthz() -> &'static str {
    "OK"
}

/// Builds the application router.
///
/// - `POST /orders` - allocate packs for `{"quantity": n}`
/// - `GET /healthz` - liveness probe
/// - `GET /` - calculator page
pub fn router(orders: Arc<dyn OrderCreator>) -> Router {
    Router::new()
        .route("/orders", post(order::create_order))
        .route("/healthz", get(healthz))
        .route("/", get(web::index))
        .route("/js/index.js", get(web::index_js))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(AppState { orders })
}
