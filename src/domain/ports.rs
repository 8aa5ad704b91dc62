use crate::domain::error::{CatalogError, OrderError};
use crate::domain::model::{Order, Pack};
use async_trait::async_trait;

/// Supplies the pack catalog. Implementations are read-only after construction.
#[async_trait]
pub trait PackRepository: Send + Sync {
    async fn list_packs(&self) -> Result<Vec<Pack>, CatalogError>;
}

/// What the transport layer needs from the domain.
#[async_trait]
pub trait OrderCreator: Send + Sync {
    async fn create(&self, quantity: i64) -> Result<Order, OrderError>;
}
