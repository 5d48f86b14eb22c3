use rust_decimal::{Decimal, RoundingStrategy};

use crate::presenter::catalog::palette;

/// Placeholder for a value the provider did not report.
pub const MISSING: &str = "—";

/// Direction of a signed change, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Up,
    Down,
    Neutral,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Up => palette::UP,
            Tone::Down => palette::DOWN,
            Tone::Neutral => palette::TEXT_MUTED,
        }
    }
}

/// `value` with exactly `digits` fraction digits.
///
/// Rounds the exact binary value half away from zero, so `1.005` stays `1.00`
/// while `0.125` becomes `0.13`. The sign follows the input: `-0.004` is `-0.00`,
/// `-0.0` is `0.00`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    let precision = digits as usize;
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let digits_text = match Decimal::from_f64_retain(magnitude) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", precision, rounded)
        }
        None => format!("{:.*}", precision, magnitude),
    };

    format!("{}{}", sign, digits_text)
}

/// `$1.50B`, `$25M`, or the plain number behind a dollar sign below a million.
pub fn format_usd_compact(value: f64) -> String {
    if value >= 1e9 {
        format!("${}B", to_fixed(value / 1e9, 2))
    } else if value >= 1e6 {
        format!("${}M", to_fixed(value / 1e6, 0))
    } else if value == 0.0 {
        "$0".to_string()
    } else {
        format!("${}", value)
    }
}

pub fn format_usd_compact_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format_usd_compact(v),
        None => MISSING.to_string(),
    }
}

/// Signed percentage with two decimals, e.g. `+3.46%` or `-1.20%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) if v >= 0.0 => format!("+{}%", to_fixed(v, 2)),
        Some(v) => format!("{}%", to_fixed(v, 2)),
        None => MISSING.to_string(),
    }
}

pub fn percent_tone(value: Option<f64>) -> Tone {
    match value.filter(|v| !v.is_nan()) {
        Some(v) if v >= 0.0 => Tone::Up,
        Some(_) => Tone::Down,
        None => Tone::Neutral,
    }
}

/// Unit price in en-US style: grouped thousands, two decimals, up to four below $1.
pub fn format_price(value: Option<f64>) -> String {
    let Some(price) = value.filter(|v| v.is_finite()) else {
        return MISSING.to_string();
    };

    let max_digits = if price < 1.0 { 4 } else { 2 };
    let fixed = to_fixed(price.abs(), max_digits);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, group_thousands(int_part), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
