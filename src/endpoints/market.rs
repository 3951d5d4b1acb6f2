//! Price quote and price history generators

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::endpoints::round_to;
use crate::models::market::{PricePoint, PriceQuote};

pub const PAIR_SYMBOL: &str = "GBP/JPY";
pub const BASE_PRICE: f64 = 199.8990;

/// Current quote for the pair.
pub fn current_price(now: DateTime<Utc>) -> PriceQuote {
    PriceQuote {
        symbol: PAIR_SYMBOL.to_string(),
        price: BASE_PRICE,
        change: -0.0234,
        change_percent: -0.01,
        bid: 199.8950,
        ask: 199.9030,
        spread: 0.0080,
        timestamp: now,
    }
}

/// Trailing 24 hours of prices, one point per hour, oldest first.
///
/// Prices wander within half a unit of the base quote; volume is an
/// integer in [1000, 5000].
pub fn price_history<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Vec<PricePoint> {
    (0..24)
        .map(|i| {
            let timestamp = now - Duration::hours(24 - i);
            let price = BASE_PRICE + rng.gen_range(-0.5..=0.5);
            PricePoint {
                timestamp,
                price: round_to(price, 4),
                volume: rng.gen_range(1000..=5000),
            }
        })
        .collect()
}
