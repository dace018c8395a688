//! # Order Strangler
//!
//! A minimal, test-friendly rendition of the Strangler Fig migration pattern:
//! a façade ([`StranglerOrderService`]) routes each order operation to one of
//! two interchangeable backends according to a pluggable [`RoutingPolicy`].
//!
//! ## Core Components
//!
//! - **[model]**: the immutable [`Order`] record and its typed id.
//! - **[service]**: the [`OrderService`] capability that both backends and
//!   the façade itself implement.
//! - **[routing]**: decision policies and the façade router.
//! - **[backends]**: the legacy/modern stubs plus test doubles.
//! - **[runtime]**: system wiring and tracing setup.
//!
//! ## Routing Contract
//!
//! Exactly one backend receives each call: no broadcast, no shadow dispatch,
//! and no fallback to the other side when the chosen backend fails. The stock
//! [`CoinFlip`] policy makes repeated calls non-idempotent across backends —
//! a documented property of random routing, not a bug. Substitute a
//! [`Pinned`] policy to make routing fully deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use order_strangler::model::{Order, OrderId};
//! use order_strangler::runtime::OrderSystem;
//! use order_strangler::service::OrderService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = OrderSystem::new();
//!     system
//!         .orders
//!         .create_order(Order::new(OrderId(1), "Item 1", 10.0))
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod backends;
pub mod error;
pub mod model;
pub mod routing;
pub mod runtime;
pub mod service;

// Re-export core types for convenience
pub use error::OrderServiceError;
pub use model::{Order, OrderId};
pub use routing::{CoinFlip, Pinned, Route, RouteRequest, RoutingPolicy, StranglerOrderService};
pub use service::OrderService;
