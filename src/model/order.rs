//! The immutable order record.

use crate::error::OrderServiceError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// An order as seen by the migration façade.
///
/// The value is immutable once constructed: an update is expressed by
/// building a new `Order` with the same id, never by mutating an existing
/// one. The record is owned by the call that constructs it — neither the
/// router nor the stub backends keep orders around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub label: String,
    pub price: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within a run
    /// * `label` - Human-readable order label
    /// * `price` - Total price; must be finite and non-negative to pass
    ///   [`validate`](Order::validate)
    pub fn new(id: OrderId, label: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            label: label.into(),
            price,
        }
    }

    /// Checks the record against the capability's input contract.
    ///
    /// The router runs this before the decision policy is consulted, so a
    /// malformed order is rejected without either backend (or the policy)
    /// ever seeing it.
    pub fn validate(&self) -> Result<(), OrderServiceError> {
        if self.label.trim().is_empty() {
            return Err(OrderServiceError::InvalidOrder(format!(
                "{}: label must not be empty",
                self.id
            )));
        }
        if !self.price.is_finite() {
            return Err(OrderServiceError::InvalidOrder(format!(
                "{}: price must be finite",
                self.id
            )));
        }
        if self.price < 0.0 {
            return Err(OrderServiceError::InvalidOrder(format!(
                "{}: price must be non-negative",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_order_passes_validation() {
        let order = Order::new(OrderId(1), "Item 1", 10.0);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn zero_price_is_valid() {
        let order = Order::new(OrderId(2), "Freebie", 0.0);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn empty_label_is_rejected() {
        let order = Order::new(OrderId(3), "   ", 10.0);
        let err = order.validate().unwrap_err();
        assert!(matches!(err, OrderServiceError::InvalidOrder(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let order = Order::new(OrderId(4), "Item 4", -1.0);
        assert!(matches!(
            order.validate(),
            Err(OrderServiceError::InvalidOrder(_))
        ));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let order = Order::new(OrderId(5), "Item 5", f64::NAN);
        assert!(matches!(
            order.validate(),
            Err(OrderServiceError::InvalidOrder(_))
        ));
    }

    #[test]
    fn order_id_display() {
        assert_eq!(OrderId(7).to_string(), "order_7");
    }
}
