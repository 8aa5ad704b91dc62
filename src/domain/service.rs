use crate::domain::allocator::allocate;
use crate::domain::error::OrderError;
use crate::domain::model::Order;
use crate::domain::ports::{OrderCreator, PackRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Creates orders against the catalog supplied by a [`PackRepository`].
#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn PackRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn PackRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderCreator for OrderService {
    async fn create(&self, quantity: i64) -> Result<Order, OrderError> {
        // 先驗證數量，無效請求不需要讀取目錄
        if quantity <= 0 {
            return Err(OrderError::InvalidArgument { quantity });
        }

        let packs = self.repository.list_packs().await?;
        tracing::debug!(quantity, packs = packs.len(), "allocating order");

        allocate(quantity, &packs)
    }
}
