//! Assembly of the strangler façade and its two backends.

use crate::backends::{LegacyOrderService, ModernOrderService};
use crate::routing::{CoinFlip, RoutingPolicy, StranglerOrderService};
use std::sync::Arc;

/// The assembled migration system.
///
/// `OrderSystem` wires the two stub backends and a decision policy into a
/// ready [`StranglerOrderService`]. Callers treat `orders` as *the* order
/// service; which side actually executes each call is the policy's business.
///
/// # Example
///
/// ```rust
/// use order_strangler::model::{Order, OrderId};
/// use order_strangler::routing::{Pinned, Route};
/// use order_strangler::runtime::OrderSystem;
/// use order_strangler::service::OrderService;
///
/// #[tokio::main]
/// async fn main() {
///     // Pin routing for a deterministic run
///     let system = OrderSystem::with_policy(Pinned(Route::Modern));
///     system
///         .orders
///         .create_order(Order::new(OrderId(1), "Item 1", 10.0))
///         .await
///         .unwrap();
/// }
/// ```
pub struct OrderSystem {
    /// The strangler façade fronting both backends.
    pub orders: StranglerOrderService,
}

impl OrderSystem {
    /// The reference configuration: a coin flip between the two stubs.
    pub fn new() -> Self {
        Self::with_policy(CoinFlip::new())
    }

    /// Same wiring with an injected decision policy.
    pub fn with_policy(policy: impl RoutingPolicy + 'static) -> Self {
        let legacy = Arc::new(LegacyOrderService::new());
        let modern = Arc::new(ModernOrderService::new());

        Self {
            orders: StranglerOrderService::new(legacy, modern, policy),
        }
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
