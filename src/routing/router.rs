//! # Strangler Façade
//!
//! The router holds both backends and a decision policy. For every incoming
//! operation it validates the input, consults the policy exactly once, and
//! forwards the entire call to exactly one backend. No broadcast, no shadow
//! dispatch, no outcome comparison, and no fallback: if the chosen backend
//! fails, the call fails.
//!
//! # Concurrency Note
//! The router is safe to share across concurrent callers. Delegation is
//! stateless and decision evaluation is pure from the router's perspective;
//! the only interior state is whatever entropy a policy owns, locked inside
//! the policy itself. Calls are fully independent and order-insensitive.

use crate::error::OrderServiceError;
use crate::model::{Order, OrderId};
use crate::routing::policy::{Route, RouteRequest, RoutingPolicy};
use crate::service::OrderService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Strangler-fig façade over two interchangeable order backends.
///
/// Implements [`OrderService`] itself, so it is substitutable anywhere a
/// backend is expected. Both backends and the policy are injected at
/// construction — swap in a [`Pinned`](crate::routing::Pinned) policy and
/// recording backends to make every routing decision observable in tests.
pub struct StranglerOrderService {
    legacy: Arc<dyn OrderService>,
    modern: Arc<dyn OrderService>,
    policy: Box<dyn RoutingPolicy>,
}

impl StranglerOrderService {
    /// Builds the façade from its two sides and a decision policy.
    ///
    /// The router exclusively owns its view of both backends; `Arc` is used
    /// so tests can keep a handle to a backend double while the router holds
    /// the other.
    pub fn new(
        legacy: Arc<dyn OrderService>,
        modern: Arc<dyn OrderService>,
        policy: impl RoutingPolicy + 'static,
    ) -> Self {
        Self {
            legacy,
            modern,
            policy: Box::new(policy),
        }
    }

    /// Consults the policy once and resolves the backend that serves the call.
    fn select(&self, request: &RouteRequest<'_>) -> (Route, &dyn OrderService) {
        let route = self.policy.decide(request);
        let backend: &dyn OrderService = match route {
            Route::Legacy => self.legacy.as_ref(),
            Route::Modern => self.modern.as_ref(),
        };
        (route, backend)
    }
}

#[async_trait]
impl OrderService for StranglerOrderService {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create_order(&self, order: Order) -> Result<(), OrderServiceError> {
        order.validate()?;
        let (route, backend) = self.select(&RouteRequest::Create(&order));
        debug!(%route, "Routing create");
        backend.create_order(order).await
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn update_order(&self, order: Order) -> Result<(), OrderServiceError> {
        order.validate()?;
        let (route, backend) = self.select(&RouteRequest::Update(&order));
        debug!(%route, "Routing update");
        backend.update_order(order).await
    }

    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        let (route, backend) = self.select(&RouteRequest::Delete(order_id));
        debug!(%route, "Routing delete");
        backend.delete_order(order_id).await
    }
}
