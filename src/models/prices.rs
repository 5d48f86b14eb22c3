use serde::{Deserialize, Serialize};

use crate::models::{category::CategorySummary, token::TokenQuote};

/// Body of a successful `GET /api/prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResponse {
    pub tokens: Vec<TokenQuote>,
    pub category: Option<CategorySummary>,
}
