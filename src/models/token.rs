use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One tracked asset as returned to the dashboard.
///
/// Numeric fields are kept as the JSON numbers CoinGecko sent so that integers stay
/// integers on the way through; `None` means the provider did not report the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenQuote {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: Option<Number>,
    pub change_24h: Option<Number>,
    pub market_cap: Option<Number>,
}

impl TokenQuote {
    pub fn price_usd(&self) -> Option<f64> {
        self.price.as_ref().and_then(Number::as_f64)
    }

    pub fn change_24h_pct(&self) -> Option<f64> {
        self.change_24h.as_ref().and_then(Number::as_f64)
    }

    pub fn market_cap_usd(&self) -> Option<f64> {
        self.market_cap.as_ref().and_then(Number::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
