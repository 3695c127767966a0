//! Display formatting for currency, percentages and backend codes.
//!
//! Amounts are Indian rupees and use en-IN digit grouping: the last three
//! digits form one group and every two digits above that form the next
//! (`12,34,56,789`).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for values the backend did not supply.
pub const MISSING: &str = "—";

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Whole-rupee amount with en-IN grouping, e.g. `₹12,34,567`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING.to_owned();
    }
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(rounded.unsigned_abs()))
}

/// Short lakh/crore form for headline figures, e.g. `₹1.2 Cr`.
///
/// The unit is picked after rounding to one decimal, so `9,999,999.9`
/// reads `₹1.0 Cr` rather than `₹100.0 L`.
pub fn format_inr_compact(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING.to_owned();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs.round() < LAKH {
        return format_inr(amount);
    }
    let lakhs = round_tenths(abs / LAKH);
    if lakhs * LAKH < CRORE {
        format!("{sign}₹{lakhs:.1} L")
    } else {
        format!("{sign}₹{:.1} Cr", round_tenths(abs / CRORE))
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_optional_inr(amount: Option<f64>) -> String {
    amount.map_or_else(|| MISSING.to_owned(), format_inr)
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_owned();
    }
    format!("{value:.decimals$}%")
}

pub fn format_optional_percent(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format_percent(v, decimals))
}

/// Signed trend delta, e.g. `+1.2%` or `-0.2%`.
pub fn format_trend(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => format!("+{v:.1}%"),
        Some(v) if v.is_finite() => format!("{v:.1}%"),
        _ => MISSING.to_owned(),
    }
}

/// Insurer rating on the backend's five-point scale.
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| MISSING.to_owned(), |r| format!("{r:.1} / 5"))
}

/// Turn a backend code like `term_life` into `Term Life`.
pub fn humanize_code(code: &str) -> String {
    code.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            if matches!(word, "ulip" | "sip") {
                return word.to_ascii_uppercase();
            }
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Date part of an ISO-8601 timestamp (`2026-10-01T10:00:00Z` to `2026-10-01`).
pub fn format_iso_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.split(['T', ' ']).next().unwrap_or(value).to_owned(),
        None => MISSING.to_owned(),
    }
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
