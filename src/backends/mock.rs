//! # Test Doubles
//!
//! [`RecordingOrderService`] captures every call it receives so tests can
//! assert exactly-one delivery through the façade: for any operation sent to
//! the router, precisely one of the two backends must record it, with the
//! exact argument, and the other must record nothing.
//!
//! [`UnavailableOrderService`] refuses every call, for exercising the
//! no-fallback contract: a failure on the chosen side is surfaced to the
//! caller, and the other side stays untouched.
//!
//! Both are ordinary [`OrderService`] implementations, usable anywhere a
//! backend is expected.

use crate::error::OrderServiceError;
use crate::model::{Order, OrderId};
use crate::routing::Route;
use crate::service::OrderService;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A call received by a [`RecordingOrderService`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create(Order),
    Update(Order),
    Delete(OrderId),
}

/// Backend double that records every call it receives.
///
/// Clones share the same call log, so a test keeps one handle while the
/// router owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingOrderService {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OrderService for RecordingOrderService {
    async fn create_order(&self, order: Order) -> Result<(), OrderServiceError> {
        self.record(RecordedCall::Create(order));
        Ok(())
    }

    async fn update_order(&self, order: Order) -> Result<(), OrderServiceError> {
        self.record(RecordedCall::Update(order));
        Ok(())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        self.record(RecordedCall::Delete(order_id));
        Ok(())
    }
}

/// Backend double that fails every operation with
/// [`OrderServiceError::BackendUnavailable`].
#[derive(Debug, Clone, Copy)]
pub struct UnavailableOrderService {
    route: Route,
}

impl UnavailableOrderService {
    /// `route` names which side of the migration this double is standing in
    /// for, so the surfaced error identifies the failing backend.
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    fn refuse(&self) -> OrderServiceError {
        OrderServiceError::BackendUnavailable {
            backend: self.route,
            reason: "backend is offline".to_string(),
        }
    }
}

#[async_trait]
impl OrderService for UnavailableOrderService {
    async fn create_order(&self, _order: Order) -> Result<(), OrderServiceError> {
        Err(self.refuse())
    }

    async fn update_order(&self, _order: Order) -> Result<(), OrderServiceError> {
        Err(self.refuse())
    }

    async fn delete_order(&self, _order_id: OrderId) -> Result<(), OrderServiceError> {
        Err(self.refuse())
    }
}
