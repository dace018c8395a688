//! Backend implementations of the order capability.
//!
//! `legacy` is the side being strangled; `modern` is its replacement. Both
//! are inert placeholders that accept the three operation shapes, log, and
//! return — a deployment would put real data access behind the same trait.
//! The [`mock`] module holds the test doubles.

pub mod legacy;
pub mod mock;
pub mod modern;

pub use legacy::LegacyOrderService;
pub use modern::ModernOrderService;
