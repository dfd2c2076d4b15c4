use axum::http::StatusCode;

/// `GET /healthz` — process liveness for the gateway's probe. Readiness is
/// service-specific (each service gates it on its own dependencies) and is
/// registered next to that service's router.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
