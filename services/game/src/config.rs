use deckhand_domain::market::MarketRules;

/// Game service configuration loaded from environment variables.
#[derive(Debug)]
pub struct GameConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `GAME_PORT`.
    pub game_port: u16,
    /// Fraction of the purchase price paid on resale (default 0.8). Env var: `SELL_RATIO`.
    pub sell_ratio: f64,
    /// Flat avatar price in coins (default 500). Env var: `AVATAR_COST`.
    pub avatar_cost: i64,
    /// Flat cardback price in coins (default 1000). Env var: `CARDBACK_COST`.
    pub cardback_cost: i64,
}

impl GameConfig {
    pub fn from_env() -> Self {
        let defaults = MarketRules::default();
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            game_port: std::env::var("GAME_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            sell_ratio: std::env::var("SELL_RATIO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sell_ratio),
            avatar_cost: std::env::var("AVATAR_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.avatar_cost),
            cardback_cost: std::env::var("CARDBACK_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cardback_cost),
        }
    }

    /// Market knobs handed to usecases; never read from ambient state.
    pub fn market_rules(&self) -> MarketRules {
        MarketRules {
            sell_ratio: self.sell_ratio,
            avatar_cost: self.avatar_cost,
            cardback_cost: self.cardback_cost,
        }
    }
}
