// src/lib.rs

use axum::{
    http::{header, HeaderValue},
    routing::any,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use services::coingecko::CoinGeckoService;

/// Path the dashboard fetches its data from.
pub const PRICES_PATH: &str = "/api/prices";

#[derive(Clone)]
pub struct AppState {
    pub coingecko: CoinGeckoService,
}

pub mod config;

pub mod services {
    pub mod aggregator;
    pub mod category_service;
    pub mod coingecko;
}

pub mod models;
pub mod handlers;
pub mod presenter;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(PRICES_PATH, any(handlers::prices::get_prices))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
