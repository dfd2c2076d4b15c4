pub mod card;
pub mod cosmetic;
pub mod deck;
pub mod maintenance;
pub mod pack;
pub mod wallet;

use crate::error::GameServiceError;

/// Quantity fields default to 1 and must be strictly positive.
pub(crate) fn validated_quantity(quantity: Option<i64>) -> Result<i64, GameServiceError> {
    let quantity = quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(GameServiceError::InvalidParameters);
    }
    Ok(quantity)
}

/// Required string ids must be non-empty.
pub(crate) fn required_id(id: &str) -> Result<(), GameServiceError> {
    if id.is_empty() {
        return Err(GameServiceError::InvalidParameters);
    }
    Ok(())
}

/// Empty JSON object body used by mutations that return nothing.
pub(crate) fn empty_object() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({}))
}
