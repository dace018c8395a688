//! The replacement backend taking over traffic.

use crate::error::OrderServiceError;
use crate::model::{Order, OrderId};
use crate::service::OrderService;
use async_trait::async_trait;
use tracing::info;

/// Stub for the new order service. Behaviorally identical to the legacy stub;
/// only the logged backend name differs, which is exactly what makes the two
/// sides interchangeable behind the capability trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernOrderService;

impl ModernOrderService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderService for ModernOrderService {
    async fn create_order(&self, order: Order) -> Result<(), OrderServiceError> {
        info!(backend = "modern", order_id = %order.id, label = %order.label, price = order.price, "Create order");
        Ok(())
    }

    async fn update_order(&self, order: Order) -> Result<(), OrderServiceError> {
        info!(backend = "modern", order_id = %order.id, label = %order.label, price = order.price, "Update order");
        Ok(())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        info!(backend = "modern", order_id = %order_id, "Delete order");
        Ok(())
    }
}
