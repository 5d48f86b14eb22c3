use crate::models::category::CategorySummary;
use crate::services::coingecko::CategoryMarket;

pub const DEPIN_CATEGORY_ID: &str = "depin";
const DEPIN_NAME_PHRASE: &str = "decentralized physical infrastructure";

/// First category that is DePIN by id, by name, or by a name containing the long form.
///
/// Each row is tested against all three rules before moving on, so list order decides
/// between several plausible matches.
pub fn find_depin_category(categories: &[CategoryMarket]) -> Option<&CategoryMarket> {
    categories.iter().find(|category| is_depin(category))
}

fn is_depin(category: &CategoryMarket) -> bool {
    if category.id.as_deref() == Some(DEPIN_CATEGORY_ID) {
        return true;
    }

    match category.name.as_deref() {
        Some(name) => {
            let name = name.to_lowercase();
            name == DEPIN_CATEGORY_ID || name.contains(DEPIN_NAME_PHRASE)
        }
        None => false,
    }
}

pub fn summarize_category(category: &CategoryMarket) -> CategorySummary {
    CategorySummary {
        market_cap: category.market_cap.clone(),
        market_cap_change_24h: category.market_cap_change_24h.clone(),
        total_coins: count_coins(category),
    }
}

/// `content` pieces win when present (an empty string still counts as one),
/// then a non-zero `coins_count`, then zero.
fn count_coins(category: &CategoryMarket) -> u64 {
    if let Some(content) = &category.content {
        return content.split(',').count() as u64;
    }

    match category.coins_count {
        Some(count) if count > 0 => count,
        _ => 0,
    }
}
