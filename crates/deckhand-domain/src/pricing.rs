//! Coin prices for buying and selling catalog items.

/// Cost factor applied when no variant is specified or the variant is unknown.
pub const DEFAULT_COST_FACTOR: f64 = 1.0;

/// Purchase price: quantity x cost_factor x base cost, rounded to whole coins.
pub fn purchase_cost(base_cost: i64, cost_factor: f64, quantity: i64) -> i64 {
    (quantity as f64 * cost_factor * base_cost as f64).round() as i64
}

/// Sale value: the per-unit resale price is rounded first, then scaled by
/// quantity, so selling n copies always pays exactly n times one copy.
pub fn sale_value(base_cost: i64, cost_factor: f64, quantity: i64, sell_ratio: f64) -> i64 {
    quantity * (base_cost as f64 * cost_factor * sell_ratio).round() as i64
}
