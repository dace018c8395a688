//! Demonstration binary: the reference strangler-fig flow.
//!
//! Issues four hardcoded order operations through the coin-flip façade. Run
//! with `RUST_LOG=debug` to see which side served each call.

use order_strangler::error::OrderServiceError;
use order_strangler::model::{Order, OrderId};
use order_strangler::runtime::{setup_tracing, OrderSystem};
use order_strangler::service::OrderService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), OrderServiceError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting strangler-fig order demo");

    let system = OrderSystem::new();

    system
        .orders
        .create_order(Order::new(OrderId(1), "Item 1", 10.0))
        .await?;

    system
        .orders
        .update_order(Order::new(OrderId(2), "Item 2", 20.0))
        .await?;

    system.orders.delete_order(OrderId(1)).await?;

    system
        .orders
        .create_order(Order::new(OrderId(3), "Item 3", 150.0))
        .await?;

    info!("Demo completed");
    Ok(())
}
