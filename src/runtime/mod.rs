//! # Runtime Wiring
//!
//! Orchestration of the migration façade: constructing both backends and the
//! decision policy, wiring them into the router, and setting up tracing.
//!
//! The pattern mirrors how larger systems wire their services: components are
//! created without dependencies, then composed once, and callers only ever
//! see the assembled [`OrderSystem`].

pub mod order_system;
pub mod tracing;

pub use order_system::OrderSystem;
pub use tracing::setup_tracing;
