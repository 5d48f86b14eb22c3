use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Number;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Clone)]
pub struct CoinGeckoService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoinGeckoError {
    #[error("request to CoinGecko failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("CoinGecko API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode CoinGecko response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl CoinGeckoError {
    /// True when the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, CoinGeckoError::Transport(_))
    }
}

/// Row of `/coins/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub current_price: Option<Number>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<Number>,
    #[serde(default)]
    pub market_cap: Option<Number>,
}

/// Row of `/coins/categories` (the variant with market data).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryMarket {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub market_cap: Option<Number>,
    #[serde(default)]
    pub market_cap_change_24h: Option<Number>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub coins_count: Option<u64>,
}

impl CoinGeckoService {
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Market rows for `coin_ids`, largest market cap first, with 24h change.
    pub async fn fetch_markets(&self, coin_ids: &[&str]) -> Result<Vec<CoinMarket>, CoinGeckoError> {
        let ids = coin_ids.join(",");
        tracing::info!("Fetching markets for {} coins from CoinGecko", coin_ids.len());

        let url = format!("{}/coins/markets", self.base_url);

        let request = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&[
                ("vs_currency", "usd"),
                ("ids", ids.as_str()),
                ("order", "market_cap_desc"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ]);

        let response = self.authorize(request).send().await.map_err(CoinGeckoError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoinGeckoError::Status { status, body });
        }

        let markets: Vec<CoinMarket> = response.json().await.map_err(CoinGeckoError::Decode)?;

        tracing::debug!("Fetched {} market rows from CoinGecko", markets.len());

        Ok(markets)
    }

    /// Every category CoinGecko knows about, with aggregate market data.
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryMarket>, CoinGeckoError> {
        tracing::info!("Fetching categories from CoinGecko");

        let url = format!("{}/coins/categories", self.base_url);

        let request = self.client.get(&url).header("accept", "application/json");

        let response = self.authorize(request).send().await.map_err(CoinGeckoError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoinGeckoError::Status { status, body });
        }

        let categories: Vec<CategoryMarket> = response.json().await.map_err(CoinGeckoError::Decode)?;

        tracing::debug!("Fetched {} categories from CoinGecko", categories.len());

        Ok(categories)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("x-cg-pro-api-key", key),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let service = CoinGeckoService::new(None, "http://localhost:9999/api/v3/".to_string());
        assert_eq!(service.base_url(), "http://localhost:9999/api/v3");
    }

    #[test]
    fn test_market_row_tolerates_missing_numbers() {
        let row: CoinMarket = serde_json::from_str(
            r#"{"id":"helium","symbol":"hnt","name":"Helium","current_price":null}"#,
        )
        .unwrap();

        assert_eq!(row.symbol, "hnt");
        assert!(row.current_price.is_none());
        assert!(row.price_change_percentage_24h.is_none());
        assert!(row.market_cap.is_none());
    }

    #[test]
    fn test_category_row_keeps_integer_market_cap() {
        let row: CategoryMarket = serde_json::from_str(
            r#"{"id":"depin","name":"DePIN","market_cap":5000000000,"market_cap_change_24h":-2.5}"#,
        )
        .unwrap();

        assert_eq!(row.market_cap.unwrap().to_string(), "5000000000");
        assert!(row.content.is_none());
        assert!(row.coins_count.is_none());
    }
}
