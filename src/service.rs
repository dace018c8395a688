//! # Order Operations Capability
//!
//! The [`OrderService`] trait is the single seam of the system. Both backends
//! implement it, and so does the strangler façade itself — which is what
//! makes the façade substitutable anywhere a backend is expected, the defining
//! property of the pattern.
//!
//! # Architecture Note
//! The trait is `#[async_trait]` and object-safe. Backends here are inert
//! stubs, but anything real behind this seam (a database, a remote service)
//! would do I/O, and the façade must not care which it is fronting.

use crate::error::OrderServiceError;
use crate::model::{Order, OrderId};
use async_trait::async_trait;

/// The capability every order backend must provide.
///
/// Implementers: [`LegacyOrderService`](crate::backends::LegacyOrderService),
/// [`ModernOrderService`](crate::backends::ModernOrderService), the
/// [`StranglerOrderService`](crate::routing::StranglerOrderService) façade,
/// and the test doubles in [`backends::mock`](crate::backends::mock).
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Registers a new order.
    async fn create_order(&self, order: Order) -> Result<(), OrderServiceError>;

    /// Replaces the stored state of an order with a freshly constructed value.
    async fn update_order(&self, order: Order) -> Result<(), OrderServiceError>;

    /// Removes an order by id.
    async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderServiceError>;
}
