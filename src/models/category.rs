use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Aggregate statistics for the DePIN category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub market_cap: Option<Number>,
    pub market_cap_change_24h: Option<Number>,
    pub total_coins: u64,
}

impl CategorySummary {
    pub fn market_cap_usd(&self) -> Option<f64> {
        self.market_cap.as_ref().and_then(Number::as_f64)
    }

    pub fn market_cap_change_24h_pct(&self) -> Option<f64> {
        self.market_cap_change_24h.as_ref().and_then(Number::as_f64)
    }
}
