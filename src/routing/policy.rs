//! # Decision Policies
//!
//! A [`RoutingPolicy`] decides, per call, which backend serves it. The router
//! consults the policy exactly once per operation and forwards the entire
//! call to the chosen side.
//!
//! # Architecture Note
//! The policy is injected into the router at construction, and any entropy a
//! policy needs is owned by the policy value itself. Reaching for ambient
//! global randomness inside a component makes it untestable; owning the RNG
//! means tests can seed it and replay the exact routing sequence.
//!
//! Stock policies:
//! - [`Pinned`] — constant choice; deterministic routing for tests and for
//!   staged cutover.
//! - [`CoinFlip`] — uniform random choice, the reference behavior.
//!
//! Any `Fn(&RouteRequest) -> Route` closure (or fn) is also a policy, which
//! is the seam for deliberate per-order routing (e.g. by price band).

use crate::model::{Order, OrderId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::sync::Mutex;

/// The two sides of the migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The original backend being strangled.
    Legacy,
    /// The replacement backend taking over traffic.
    Modern,
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Legacy => write!(f, "legacy"),
            Route::Modern => write!(f, "modern"),
        }
    }
}

/// What a policy may observe about the call it is routing.
///
/// The stock policies ignore this entirely; it exists so a deliberate
/// per-order policy can be written without changing the router.
#[derive(Debug, Clone, Copy)]
pub enum RouteRequest<'a> {
    Create(&'a Order),
    Update(&'a Order),
    Delete(OrderId),
}

impl RouteRequest<'_> {
    /// The id of the order the call concerns.
    pub fn order_id(&self) -> OrderId {
        match self {
            RouteRequest::Create(order) | RouteRequest::Update(order) => order.id,
            RouteRequest::Delete(id) => *id,
        }
    }
}

/// Per-call routing decision.
///
/// `decide` is consulted exactly once per operation and its result fully
/// determines which backend receives the call. Calls are independent: the
/// router guarantees no ordering between decisions, so a policy must not
/// assume it sees operations in any particular sequence.
pub trait RoutingPolicy: Send + Sync {
    fn decide(&self, request: &RouteRequest<'_>) -> Route;
}

impl<F> RoutingPolicy for F
where
    F: Fn(&RouteRequest<'_>) -> Route + Send + Sync,
{
    fn decide(&self, request: &RouteRequest<'_>) -> Route {
        self(request)
    }
}

/// Constant policy: every call goes to the same side.
///
/// This is what makes the router fully testable by substitution, and it is
/// also the end state of a migration (pin to [`Route::Modern`] once the
/// legacy backend is ready to retire).
#[derive(Debug, Clone, Copy)]
pub struct Pinned(pub Route);

impl RoutingPolicy for Pinned {
    fn decide(&self, _request: &RouteRequest<'_>) -> Route {
        self.0
    }
}

/// Uniform random choice between the two sides — the reference behavior.
///
/// The decision ignores the request content. The original implementation
/// this mirrors carried a comment promising price-threshold routing ("orders
/// above 100 use the new service") while actually flipping a coin; the coin
/// flip is the executed behavior and is preserved here as such rather than
/// silently "fixed". A price-aware policy is one closure away via
/// [`RoutingPolicy`].
///
/// Under this policy the same operation issued twice may land on different
/// backends. That non-idempotence is inherent to random routing.
pub struct CoinFlip {
    rng: Mutex<StdRng>,
}

impl CoinFlip {
    /// A coin flip seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible coin flip. Two policies built from the same seed
    /// produce the same decision sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingPolicy for CoinFlip {
    fn decide(&self, _request: &RouteRequest<'_>) -> Route {
        let mut rng = self.rng.lock().unwrap();
        if rng.gen_bool(0.5) {
            Route::Modern
        } else {
            Route::Legacy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_threshold(request: &RouteRequest<'_>) -> Route {
        match request {
            RouteRequest::Create(order) | RouteRequest::Update(order) if order.price > 100.0 => {
                Route::Modern
            }
            _ => Route::Legacy,
        }
    }

    #[test]
    fn pinned_always_returns_its_route() {
        let order = Order::new(OrderId(1), "Item 1", 10.0);
        let policy = Pinned(Route::Modern);
        for _ in 0..10 {
            assert_eq!(policy.decide(&RouteRequest::Create(&order)), Route::Modern);
        }
    }

    #[test]
    fn seeded_coin_flips_are_reproducible() {
        let a = CoinFlip::seeded(7);
        let b = CoinFlip::seeded(7);
        let request = RouteRequest::Delete(OrderId(1));
        let first: Vec<Route> = (0..32).map(|_| a.decide(&request)).collect();
        let second: Vec<Route> = (0..32).map(|_| b.decide(&request)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn coin_flip_ignores_request_content() {
        let a = CoinFlip::seeded(42);
        let b = CoinFlip::seeded(42);
        let cheap = Order::new(OrderId(1), "Item 1", 10.0);
        let expensive = Order::new(OrderId(1), "Item 1", 150.0);
        let on_cheap: Vec<Route> = (0..32)
            .map(|_| a.decide(&RouteRequest::Create(&cheap)))
            .collect();
        let on_expensive: Vec<Route> = (0..32)
            .map(|_| b.decide(&RouteRequest::Create(&expensive)))
            .collect();
        assert_eq!(on_cheap, on_expensive);
    }

    #[test]
    fn fn_policies_see_the_request() {
        let cheap = Order::new(OrderId(1), "Item 1", 10.0);
        let expensive = Order::new(OrderId(2), "Item 2", 150.0);
        assert_eq!(
            price_threshold.decide(&RouteRequest::Create(&cheap)),
            Route::Legacy
        );
        assert_eq!(
            price_threshold.decide(&RouteRequest::Create(&expensive)),
            Route::Modern
        );
        // Deletes carry no price, so they stay on the legacy side.
        assert_eq!(
            price_threshold.decide(&RouteRequest::Delete(OrderId(2))),
            Route::Legacy
        );
    }

    #[test]
    fn route_request_exposes_the_order_id() {
        let order = Order::new(OrderId(9), "Item 9", 1.0);
        assert_eq!(RouteRequest::Create(&order).order_id(), OrderId(9));
        assert_eq!(RouteRequest::Update(&order).order_id(), OrderId(9));
        assert_eq!(RouteRequest::Delete(OrderId(3)).order_id(), OrderId(3));
    }
}
