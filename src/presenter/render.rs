use strum::IntoEnumIterator;

use crate::presenter::catalog::{
    palette, DASHBOARD_SUBTITLE, DASHBOARD_TITLE, FOOTER, NETWORKS, SECTOR_CATEGORIES,
    SECTOR_CATEGORIES_SOURCE, SECTOR_METRICS,
};
use crate::presenter::format::{format_percent, format_price, format_usd_compact_opt, percent_tone};
use crate::presenter::state::{DashboardView, EnrichedToken, Tab};

pub const LOADING_TOKENS: &str = "Loading token data...";
pub const FAILED_TOKENS: &str = "Failed to load token data";

/// Turns a [`DashboardView`] into a screen of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// 24-bit ANSI colors taken from the palette.
    pub fn with_color() -> Self {
        Self { color: true }
    }

    pub fn render(&self, view: &DashboardView) -> String {
        let mut lines = Vec::new();

        lines.push(self.paint(DASHBOARD_TITLE, palette::ACCENT));
        lines.push(self.paint(DASHBOARD_SUBTITLE, palette::TEXT_SECONDARY));
        lines.push(String::new());
        lines.push(self.tab_bar(view.tab()));
        lines.push(String::new());

        match view.tab() {
            Tab::Overview => self.overview(view, &mut lines),
            Tab::Tokens => self.tokens(view, &mut lines),
            Tab::Networks => self.networks(&mut lines),
        }

        lines.push(String::new());
        lines.push(self.paint(FOOTER, palette::TEXT_MUTED));

        lines.join("\n")
    }

    fn tab_bar(&self, active: Tab) -> String {
        Tab::iter()
            .map(|tab| {
                if tab == active {
                    self.paint(&format!("[ {} ]", tab.title()), palette::ACCENT)
                } else {
                    format!("  {}  ", tab.title())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn overview(&self, view: &DashboardView, lines: &mut Vec<String>) {
        lines.push(format!("LIVE DATA {}", self.paint("(CoinGecko)", palette::TEXT_MUTED)));
        for card in view.summary_cards() {
            let value = match card.tone {
                Some(tone) => self.paint(&card.value, tone.color()),
                None => card.value,
            };
            lines.push(format!("  {:<18} {}", card.label, value));
        }

        lines.push(String::new());
        lines.push("STATIC METRICS".to_string());
        for metric in SECTOR_METRICS {
            lines.push(format!(
                "  {:<18} {:<10} {}",
                metric.label,
                metric.value,
                self.paint(metric.source, palette::TEXT_MUTED)
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "PROJECT CATEGORIES {}",
            self.paint(&format!("({})", SECTOR_CATEGORIES_SOURCE), palette::TEXT_MUTED)
        ));
        for category in SECTOR_CATEGORIES {
            lines.push(format!("  {} {}", self.paint("●", category.color), category.name));
        }
    }

    fn tokens(&self, view: &DashboardView, lines: &mut Vec<String>) {
        lines.push("DEPIN TOKEN PRICES".to_string());

        if view.is_loading() {
            lines.push(format!("  {}", LOADING_TOKENS));
            return;
        }
        if view.tokens().is_empty() {
            lines.push(format!("  {}", self.paint(FAILED_TOKENS, palette::TEXT_MUTED)));
            return;
        }

        for (i, token) in view.tokens().iter().enumerate() {
            lines.push(self.token_row(i + 1, token));
        }
    }

    fn token_row(&self, rank: usize, token: &EnrichedToken) -> String {
        let quote = &token.quote;
        let change = quote.change_24h_pct();

        format!(
            "{:>3}  {} {:<7} {:<20} {:<9} {:>14} {} {:>9}",
            rank,
            self.paint(&format!("[{:<2}]", token.badge()), token.color),
            quote.symbol,
            quote.name,
            token.category,
            format_price(quote.price_usd()),
            self.paint(&format!("{:>8}", format_percent(change)), percent_tone(change).color()),
            format_usd_compact_opt(quote.market_cap_usd()),
        )
    }

    fn networks(&self, lines: &mut Vec<String>) {
        lines.push("NETWORK BENCHMARKS".to_string());

        for network in NETWORKS {
            lines.push(String::new());
            lines.push(format!(
                "  {}  {}",
                self.paint(network.name, network.color),
                self.paint(network.source, palette::TEXT_MUTED)
            ));
            let metrics: Vec<String> = network
                .metrics
                .iter()
                .map(|metric| format!("{}: {}", metric.label, metric.value))
                .collect();
            lines.push(format!("    {}", metrics.join(" | ")));
        }
    }

    fn paint(&self, text: &str, hex: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match hex_to_rgb(hex) {
            Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            None => text.to_string(),
        }
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
