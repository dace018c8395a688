//! The backend being strangled.

use crate::error::OrderServiceError;
use crate::model::{Order, OrderId};
use crate::service::OrderService;
use async_trait::async_trait;
use tracing::info;

/// Stub for the original order service. Accepts every operation, logs it,
/// and keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyOrderService;

impl LegacyOrderService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderService for LegacyOrderService {
    async fn create_order(&self, order: Order) -> Result<(), OrderServiceError> {
        info!(backend = "legacy", order_id = %order.id, label = %order.label, price = order.price, "Create order");
        Ok(())
    }

    async fn update_order(&self, order: Order) -> Result<(), OrderServiceError> {
        info!(backend = "legacy", order_id = %order.id, label = %order.label, price = order.price, "Update order");
        Ok(())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        info!(backend = "legacy", order_id = %order_id, "Delete order");
        Ok(())
    }
}
