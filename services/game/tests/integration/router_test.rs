use axum::body::Body;
use http::{Request, StatusCode};
use sea_orm::{DatabaseBackend, MockDatabase};
use tower::ServiceExt as _;
use uuid::Uuid;

use deckhand_domain::market::MarketRules;
use deckhand_game::router::router;
use deckhand_game::state::AppState;

fn test_state() -> AppState {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    AppState::new(db, MarketRules::default())
}

#[tokio::test]
async fn should_answer_health_probes() {
    let app = router(test_state());
    let resp = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_ready_while_the_database_answers() {
    let app = router(test_state());
    let resp = app
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_mutations_without_identity_headers() {
    let app = router(test_state());
    let resp = app
        .oneshot(
            Request::post("/users/@me/cards/buy")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"card":"c1","quantity":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_non_positive_quantities_before_touching_storage() {
    let app = router(test_state());
    let resp = app
        .oneshot(
            Request::post("/users/@me/cards/buy")
                .header("content-type", "application/json")
                .header("x-deckhand-user-id", Uuid::new_v4().to_string())
                .header("x-deckhand-username", "alice")
                .header("x-deckhand-user-role", "1")
                .body(Body::from(r#"{"card":"c1","quantity":0}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_forbid_admin_routes_to_regular_users() {
    let app = router(test_state());
    let resp = app
        .oneshot(
            Request::post("/admin/fix-variants")
                .header("content-type", "application/json")
                .header("x-deckhand-user-id", Uuid::new_v4().to_string())
                .header("x-deckhand-username", "alice")
                .header("x-deckhand-user-role", "1")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
