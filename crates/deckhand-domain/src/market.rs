//! Market pricing rules, constructed from service config and passed into
//! usecases explicitly.

/// Fixed economy knobs. `sell_ratio` is the fraction of the purchase price
/// paid back when selling to the system; always below 1.
#[derive(Debug, Clone, Copy)]
pub struct MarketRules {
    pub sell_ratio: f64,
    pub avatar_cost: i64,
    pub cardback_cost: i64,
}

impl Default for MarketRules {
    fn default() -> Self {
        Self {
            sell_ratio: 0.8,
            avatar_cost: 500,
            cardback_cost: 1000,
        }
    }
}
