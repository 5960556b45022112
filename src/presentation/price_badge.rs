use crate::domain::chart::{Color, Summary};
use serde::Serialize;

/// Placeholder text shown instead of a chart when no data arrived
pub const UNAVAILABLE_TEXT: &str = "Data unavailable";
/// Shown where a figure cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// `1234567.891` with 2 decimals -> `1,234,567.89`
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero { format!("-{}", grouped) } else { grouped }
}

/// Always carries a sign: `+5.00`, `-1,200.50`
pub fn format_signed(value: f64, decimals: usize) -> String {
    let body = format_grouped(value, decimals);
    if body.starts_with('-') { body } else { format!("+{}", body) }
}

/// Price label pinned to the right edge of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBadge {
    pub currency: String,
    pub price: String,
    pub change_pct: String,
    pub change_abs: String,
    pub background: Color,
}

impl PriceBadge {
    /// `None` for an unavailable summary
    pub fn from_summary(summary: &Summary, currency: &str) -> Option<Self> {
        let stats = summary.stats()?;
        let change_pct = match stats.change_pct() {
            Ok(pct) => format!("{}%", format_signed(pct, 2)),
            Err(_) => NOT_AVAILABLE.to_string(),
        };
        Some(Self {
            currency: currency.to_string(),
            price: format_grouped(stats.current.value(), 1),
            change_pct,
            change_abs: format_signed(stats.change_abs, 2),
            background: stats.trend().color(),
        })
    }

    /// Badge lines top to bottom; an empty currency is skipped
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(4);
        if !self.currency.is_empty() {
            lines.push(self.currency.as_str());
        }
        lines.extend([self.price.as_str(), self.change_pct.as_str(), self.change_abs.as_str()]);
        lines
    }
}

/// High / low / average / volume captions under a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsCaption {
    pub high: String,
    pub low: String,
    pub mean: String,
    pub volume: String,
}

impl StatisticsCaption {
    pub fn from_summary(summary: &Summary) -> Option<Self> {
        let stats = summary.stats()?;
        Some(Self {
            high: format_grouped(stats.high.value(), 2),
            low: format_grouped(stats.low.value(), 2),
            mean: format_grouped(stats.mean.value(), 2),
            volume: stats
                .volume_total
                .map(|v| format!("{:.2}B", v.value() / 1e9))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        })
    }
}
