//! Strangler-fig routing: decision policies and the façade router.

pub mod policy;
pub mod router;

pub use policy::{CoinFlip, Pinned, Route, RouteRequest, RoutingPolicy};
pub use router::StranglerOrderService;
