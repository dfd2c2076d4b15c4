use anyhow::Context as _;
use sea_orm::Database;

use deckhand_core::tracing::init_tracing;
use deckhand_game::config::GameConfig;
use deckhand_game::router::router;
use deckhand_game::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GameConfig::from_env();
    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState::new(db, config.market_rules());
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.game_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "game service listening");
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
