// Application wiring: catalog -> service -> router.

use crate::config::CatalogSource;
use crate::domain::{OrderService, PackRepository};
use crate::gateways::http;
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;

/// Loads the catalog once and builds the HTTP router around it.
pub fn build_router(catalog: &CatalogSource) -> Result<Router> {
    let repository: Arc<dyn PackRepository> = Arc::new(catalog.load()?);
    Ok(router_with_repository(repository))
}

pub fn router_with_repository(repository: Arc<dyn PackRepository>) -> Router {
    let service = OrderService::new(repository);
    http::router(Arc::new(service))
}
