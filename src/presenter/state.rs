use strum::{Display, EnumIter, EnumString};

use crate::models::{category::CategorySummary, prices::AggregatedResponse, token::TokenQuote};
use crate::presenter::catalog::token_metadata;
use crate::presenter::client::PresenterError;
use crate::presenter::format::{format_percent, format_usd_compact, percent_tone, Tone};

/// Shown in summary cards until the fetch settles.
pub const LOADING_PLACEHOLDER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    #[default]
    Overview,
    Tokens,
    Networks,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Tokens => "Tokens",
            Tab::Networks => "Networks",
        }
    }
}

/// Loading -> Loaded | Failed, once per mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// A quote with its display category and color attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedToken {
    pub quote: TokenQuote,
    pub category: &'static str,
    pub color: &'static str,
}

impl EnrichedToken {
    pub fn from_quote(quote: TokenQuote) -> Self {
        let meta = token_metadata(&quote.id);
        Self {
            quote,
            category: meta.category,
            color: meta.color,
        }
    }

    /// First two characters of the symbol, as shown in the row badge.
    pub fn badge(&self) -> String {
        self.quote.symbol.chars().take(2).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    tab: Tab,
    load_state: LoadState,
    tokens: Vec<EnrichedToken>,
    category: Option<CategorySummary>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            tab: Tab::default(),
            load_state: LoadState::Loading,
            tokens: Vec::new(),
            category: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn tokens(&self) -> &[EnrichedToken] {
        &self.tokens
    }

    pub fn category(&self) -> Option<&CategorySummary> {
        self.category.as_ref()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Commit the result of the single fetch. Returns false if already settled.
    pub fn settle(&mut self, outcome: Result<AggregatedResponse, PresenterError>) -> bool {
        if self.load_state != LoadState::Loading {
            tracing::debug!("Ignoring fetch result, view already {:?}", self.load_state);
            return false;
        }

        match outcome {
            Ok(response) => {
                self.tokens = response.tokens.into_iter().map(EnrichedToken::from_quote).collect();
                self.category = response.category;
                self.load_state = LoadState::Loaded;
                tracing::debug!(
                    "Loaded {} tokens (category: {})",
                    self.tokens.len(),
                    self.category.is_some()
                );
            }
            Err(e) => {
                tracing::error!("Error fetching prices: {}", e);
                self.load_state = LoadState::Failed;
            }
        }

        true
    }

    /// Category market cap when reported and non-zero, else the sum over tokens.
    pub fn total_market_cap(&self) -> f64 {
        match self.category.as_ref().and_then(CategorySummary::market_cap_usd) {
            Some(cap) if cap != 0.0 => cap,
            _ => self
                .tokens
                .iter()
                .filter_map(|token| token.quote.market_cap_usd())
                .sum(),
        }
    }

    pub fn summary_cards(&self) -> [StatCard; 3] {
        if self.is_loading() {
            return [
                StatCard { label: "DePIN Market Cap", value: LOADING_PLACEHOLDER.to_string(), tone: None },
                StatCard { label: "Tracked Tokens", value: LOADING_PLACEHOLDER.to_string(), tone: None },
                StatCard { label: "24h Change", value: LOADING_PLACEHOLDER.to_string(), tone: Some(Tone::Neutral) },
            ];
        }

        let change = self
            .category
            .as_ref()
            .and_then(CategorySummary::market_cap_change_24h_pct);

        [
            StatCard {
                label: "DePIN Market Cap",
                value: format_usd_compact(self.total_market_cap()),
                tone: None,
            },
            StatCard {
                label: "Tracked Tokens",
                value: self.tokens.len().to_string(),
                tone: None,
            },
            StatCard {
                label: "24h Change",
                value: format_percent(change),
                tone: Some(percent_tone(change)),
            },
        ]
    }
}
