use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use tower_http::trace::TraceLayer;

use deckhand_core::health::healthz;

use crate::handlers::{card, cosmetic, deck, maintenance, pack, wallet};
use crate::state::AppState;

/// `GET /readyz` — the service is ready only while the database answers.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/users/@me/cards/buy", post(card::buy_card))
        .route("/users/@me/cards/sell", post(card::sell_card))
        .route("/users/@me/cards/sell-duplicates", post(card::sell_duplicates))
        .route("/users/@me/packs/buy", post(pack::buy_pack))
        .route("/users/@me/packs/sell", post(pack::sell_pack))
        .route("/users/@me/packs/open", post(pack::open_pack))
        .route("/users/@me/avatars/buy", post(cosmetic::buy_avatar))
        .route("/users/@me/cardbacks/buy", post(cosmetic::buy_cardback))
        .route("/users/@me/decks/{deck_id}", put(deck::update_deck))
        .route("/users/@me/decks/{deck_id}", delete(deck::delete_deck))
        .route("/users/@me/wallets", post(wallet::connect_wallet))
        .route("/users/@me/wallets", get(wallet::list_my_wallets))
        .route(
            "/users/@me/wallets/{address}/removal",
            post(wallet::request_removal),
        )
        .route("/admin/fix-variants", post(maintenance::fix_variants))
        .route(
            "/admin/wallets/removals",
            get(wallet::list_pending_removals),
        )
        .route("/admin/wallets/removals", post(wallet::process_removal))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
