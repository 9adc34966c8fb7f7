use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::models::round2;

/// Groups digits in threes: `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_rupees(amount: u64) -> String {
    format!("Rs. {}", format_count(amount))
}

/// Percentage as the backend sends it, without trailing `.0` noise.
pub fn format_percentage(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Renders an RFC 3339 timestamp as `M/D/YYYY` in `offset`. Unparsable input is
/// returned unchanged.
pub fn format_report_date(raw: &str, offset: UtcOffset) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_string();
    };

    parsed
        .to_offset(offset)
        .format(format_description!(
            "[month padding:none]/[day padding:none]/[year]"
        ))
        .unwrap_or_else(|_| raw.to_string())
}

pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
