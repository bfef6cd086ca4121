//! Display helpers for the `en-IN` locale. Cosmetic only: canonical values
//! are integer rupees and UTC instants.

use chrono::{DateTime, Utc};

/// `15 Jan 2024`
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%-d %b %Y").to_string()
}

/// Full weekday name, e.g. `Monday`.
pub fn weekday_name(instant: DateTime<Utc>) -> String {
    instant.format("%A").to_string()
}

/// Rupee amount with Indian digit grouping and no fraction digits: `₹1,00,000`.
pub fn format_currency(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
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

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_use_short_month_names() {
        let d = Utc.with_ymd_and_hms(2024, 4, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(d), "5 Apr 2024");
        assert_eq!(weekday_name(d), "Friday");
    }

    #[test]
    fn currency_uses_lakh_grouping() {
        assert_eq!(format_currency(0), "₹0");
        assert_eq!(format_currency(999), "₹999");
        assert_eq!(format_currency(2700), "₹2,700");
        assert_eq!(format_currency(100_000), "₹1,00,000");
        assert_eq!(format_currency(12_345_678), "₹1,23,45,678");
    }
}
