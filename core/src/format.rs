//! Display formatting for prices and dates, fixed to US conventions.

use chrono::{DateTime, NaiveDate};

/// US-dollar currency string: `$19,999.50`, `-$5.00`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if price.is_sign_negative() && price != 0.0 { "-" } else { "" };
    if price.is_infinite() {
        return format!("{sign}$∞");
    }

    // No integer cast: it saturates above u64::MAX cents.
    let fixed = format!("{:.2}", price.abs());
    let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(dollars))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Long US date: `2024-03-05` → `March 5, 2024`.
///
/// Accepts plain dates and RFC 3339 timestamps (the UTC calendar date is
/// used). Anything else renders as `Invalid Date`.
pub fn format_date(date: &str) -> String {
    let date = date.trim();
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.naive_utc().date()));

    match parsed {
        Some(day) => day.format("%B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
