use std::sync::{Arc, Mutex};

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use depin_dashboard::{build_router, services::coingecko::CoinGeckoService, AppState};

/// Canned answer for one fake CoinGecko endpoint.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct FakeState {
    markets: Canned,
    categories: Canned,
    market_queries: Arc<Mutex<Vec<String>>>,
}

/// A CoinGecko stand-in listening on a random local port.
pub struct FakeCoinGecko {
    pub base_url: String,
    market_queries: Arc<Mutex<Vec<String>>>,
}

impl FakeCoinGecko {
    pub async fn spawn(markets: Canned, categories: Canned) -> Self {
        let market_queries = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            markets,
            categories,
            market_queries: market_queries.clone(),
        };

        let app = Router::new()
            .route("/api/v3/coins/markets", get(fake_markets))
            .route("/api/v3/coins/categories", get(fake_categories))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v3", addr),
            market_queries,
        }
    }

    pub fn market_queries(&self) -> Vec<String> {
        self.market_queries.lock().unwrap().clone()
    }
}

async fn fake_markets(State(state): State<FakeState>, RawQuery(query): RawQuery) -> Response {
    state.market_queries.lock().unwrap().push(query.unwrap_or_default());
    canned_response(&state.markets)
}

async fn fake_categories(State(state): State<FakeState>) -> Response {
    canned_response(&state.categories)
}

fn canned_response(canned: &Canned) -> Response {
    (
        canned.status,
        [("content-type", "application/json")],
        canned.body.clone(),
    )
        .into_response()
}

/// Router under test, pointed at `base_url`.
pub fn app_for(base_url: &str) -> Router {
    let coingecko = CoinGeckoService::new(None, base_url.to_string());
    build_router(AppState { coingecko })
}

/// A local URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v3", addr)
}

pub fn sample_markets() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "chainlink",
            "symbol": "link",
            "name": "Chainlink",
            "current_price": 22.81,
            "market_cap": 14500000000u64,
            "price_change_percentage_24h": 3.456
        },
        {
            "id": "render-token",
            "symbol": "render",
            "name": "Render",
            "current_price": 7.12,
            "market_cap": 3700000000u64,
            "price_change_percentage_24h": -1.2
        },
        {
            "id": "io-net",
            "symbol": "io",
            "name": "io.net",
            "current_price": 1.98,
            "market_cap": 310000000,
            "price_change_percentage_24h": null
        }
    ])
}

pub fn sample_categories() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "layer-1",
            "name": "Layer 1 (L1)",
            "market_cap": 2500000000000u64,
            "market_cap_change_24h": 0.8,
            "content": "",
            "updated_at": "2026-01-07T10:00:00.000Z"
        },
        {
            "id": "depin",
            "name": "DePIN",
            "market_cap": 5000000000u64,
            "market_cap_change_24h": -2.5,
            "content": "a,b,c",
            "updated_at": "2026-01-07T10:00:00.000Z"
        }
    ])
}
