//! Error types for the order service capability.
//!
//! By centralizing error definitions, the façade and every backend share one
//! taxonomy: input problems (`InvalidOrder`) are rejected before routing,
//! execution problems (`BackendUnavailable`) are surfaced from whichever
//! backend the policy chose. Nothing is recovered silently and a failed call
//! is never retried against the other backend.

use crate::routing::Route;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderServiceError {
    /// The order data provided is invalid. Raised before the decision policy
    /// runs, so neither backend observes the call.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// The backend chosen for this call cannot execute it. Surfaced to the
    /// caller as-is; the router never falls back to the other side.
    #[error("{backend} backend unavailable: {reason}")]
    BackendUnavailable { backend: Route, reason: String },
}
