//! Aggregation behind `GET /api/prices`.
//!
//! Issues the markets and categories calls concurrently, then inspects each result on
//! its own: a market failure is fatal to the request, a category failure only drops the
//! category summary.

use std::collections::HashSet;

use reqwest::StatusCode;

use crate::models::{category::CategorySummary, prices::AggregatedResponse, token::TokenQuote};
use crate::services::category_service::{find_depin_category, summarize_category};
use crate::services::coingecko::{CategoryMarket, CoinGeckoError, CoinGeckoService, CoinMarket};

/// CoinGecko ids of the tracked DePIN tokens.
pub const TRACKED_TOKEN_IDS: [&str; 12] = [
    "render-token",
    "filecoin",
    "bittensor",
    "internet-computer",
    "the-graph",
    "helium",
    "arweave",
    "akash-network",
    "iotex",
    "io-net",
    "storj",
    "chainlink",
];

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("markets request returned {0}")]
    MarketsUnavailable(StatusCode),

    #[error(transparent)]
    Internal(#[from] CoinGeckoError),
}

pub async fn aggregate_prices(coingecko: &CoinGeckoService) -> Result<AggregatedResponse, AggregateError> {
    let (markets_result, categories_result) = tokio::join!(
        coingecko.fetch_markets(&TRACKED_TOKEN_IDS),
        coingecko.fetch_categories()
    );

    combine_results(markets_result, categories_result)
}

/// Apply the failure precedence to the two upstream outcomes.
fn combine_results(
    markets_result: Result<Vec<CoinMarket>, CoinGeckoError>,
    categories_result: Result<Vec<CategoryMarket>, CoinGeckoError>,
) -> Result<AggregatedResponse, AggregateError> {
    // A call that never got a response sinks the request even if markets answered.
    let categories_result = match categories_result {
        Err(e) if e.is_transport() => return Err(e.into()),
        other => other,
    };

    let markets = match markets_result {
        Ok(markets) => markets,
        Err(CoinGeckoError::Status { status, body }) => {
            tracing::warn!("CoinGecko markets request failed with {}: {}", status, body);
            return Err(AggregateError::MarketsUnavailable(status));
        }
        Err(e) => return Err(e.into()),
    };

    let tokens = to_token_quotes(markets);

    let category = match categories_result {
        Ok(categories) => depin_summary(&categories),
        Err(CoinGeckoError::Status { status, .. }) => {
            tracing::warn!("CoinGecko categories request failed with {}, omitting category", status);
            None
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(
        "Aggregated {} tokens (category summary: {})",
        tokens.len(),
        category.is_some()
    );

    Ok(AggregatedResponse { tokens, category })
}

/// Reshape market rows, keeping upstream order.
///
/// Rows outside the tracked set and repeated ids are dropped.
pub fn to_token_quotes(markets: Vec<CoinMarket>) -> Vec<TokenQuote> {
    let mut seen = HashSet::new();

    markets
        .into_iter()
        .filter(|coin| {
            if !TRACKED_TOKEN_IDS.contains(&coin.id.as_str()) {
                tracing::warn!("Dropping untracked coin '{}' from markets response", coin.id);
                return false;
            }
            if !seen.insert(coin.id.clone()) {
                tracing::warn!("Dropping duplicate coin '{}' from markets response", coin.id);
                return false;
            }
            true
        })
        .map(|coin| TokenQuote {
            id: coin.id,
            symbol: coin.symbol.to_uppercase(),
            name: coin.name,
            price: coin.current_price,
            change_24h: coin.price_change_percentage_24h,
            market_cap: coin.market_cap,
        })
        .collect()
}

fn depin_summary(categories: &[CategoryMarket]) -> Option<CategorySummary> {
    match find_depin_category(categories) {
        Some(category) => Some(summarize_category(category)),
        None => {
            tracing::warn!("No DePIN category among {} CoinGecko categories", categories.len());
            None
        }
    }
}
