use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::token::ErrorResponse;
use crate::services::aggregator::{aggregate_prices, AggregateError};
use crate::AppState;

pub const MARKETS_UNAVAILABLE: &str = "Failed to fetch markets from CoinGecko";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Handler for any method on /api/prices
/// Returns the tracked DePIN tokens plus the DePIN category summary
pub async fn get_prices(State(state): State<AppState>) -> impl IntoResponse {
    match aggregate_prices(&state.coingecko).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(AggregateError::MarketsUnavailable(status)) => error_response(status, MARKETS_UNAVAILABLE),
        Err(AggregateError::Internal(e)) => {
            tracing::error!("Price aggregation failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
