//! Display formatting for metric values.
//!
//! Monetary amounts follow the Brazilian Real convention (`R$ 1.234,50`),
//! percentages keep one decimal and plain numbers print as-is.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::metrics::MetricValue;

/// Marker rendered for values that cannot be read as a number.
pub const NAN_MARKER: &str = "NaN";

const CURRENCY_SYMBOL: &str = "R$";
// Locale formatting puts a no-break space between symbol and amount.
const CURRENCY_SPACE: char = '\u{a0}';

/// Decodes leniently through [`FormatKind::parse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FormatKind {
    Currency,
    Percentage,
    #[default]
    Number,
}

impl FormatKind {
    /// Lenient parse: anything unrecognized formats as a plain number.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "currency" => FormatKind::Currency,
            "percentage" => FormatKind::Percentage,
            _ => FormatKind::Number,
        }
    }
}

impl From<String> for FormatKind {
    fn from(name: String) -> Self {
        FormatKind::parse(&name)
    }
}

pub fn format_value(value: &MetricValue, kind: FormatKind) -> String {
    match kind {
        FormatKind::Currency => format_currency(coerce_number(value)),
        FormatKind::Percentage => format_percentage(coerce_number(value)),
        FormatKind::Number => match value {
            MetricValue::Number(number) => format_plain(*number),
            MetricValue::Text(text) => text.clone(),
        },
    }
}

/// Reads a metric value as a number. Blank text counts as zero; anything
/// else that does not parse is NaN.
pub fn coerce_number(value: &MetricValue) -> f64 {
    match value {
        MetricValue::Number(number) => *number,
        MetricValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
    }
}

pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}{CURRENCY_SPACE}{NAN_MARKER}");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}{CURRENCY_SPACE}∞");
    }

    let rounded = Rounded::new(amount, 2);
    let sign = rounded.sign();
    let whole = group_thousands(&rounded.whole);
    format!("{sign}{CURRENCY_SYMBOL}{CURRENCY_SPACE}{whole},{}", rounded.fraction)
}

pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return format!("{NAN_MARKER}%");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}∞%");
    }

    let rounded = Rounded::new(value, 1);
    format!("{}{}.{}%", rounded.sign(), rounded.whole, rounded.fraction)
}

/// Shortest textual form; integral values print without a fraction.
pub fn format_plain(value: f64) -> String {
    if value.is_nan() {
        return NAN_MARKER.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".into() } else { "∞".into() };
    }
    if value == 0.0 {
        // Drop the sign of negative zero.
        return "0".to_string();
    }
    value.to_string()
}

/// A finite value rounded half away from zero, split into digit strings.
struct Rounded {
    negative: bool,
    whole: String,
    fraction: String,
}

impl Rounded {
    /// Rounds the shortest decimal form of `value`, so `1.005` is treated as
    /// the literal it was written as rather than its binary neighbour.
    fn new(value: f64, dp: u32) -> Self {
        let text = value.abs().to_string();
        let digits = match Decimal::from_str(&text) {
            Ok(decimal) => {
                let mut rounded =
                    decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(dp);
                rounded.to_string()
            }
            // Below the smallest representable step: rounds to zero.
            Err(_) if value.abs() < 1.0 => Decimal::ZERO.to_string(),
            // Beyond Decimal's range every f64 is integral.
            Err(_) => text,
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let mut fraction = fraction.to_string();
        while fraction.len() < dp as usize {
            fraction.push('0');
        }
        let is_zero = whole.chars().chain(fraction.chars()).all(|ch| ch == '0');

        Self {
            negative: value.is_sign_negative() && !is_zero,
            whole: whole.to_string(),
            fraction,
        }
    }

    fn sign(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
