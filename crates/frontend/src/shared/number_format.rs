//! Amount and count formatting for tables and stat cards.
//!
//! The shop prices in rupees, so digits are grouped the Indian way:
//! the last three, then pairs (`1,20,000`).

pub const CURRENCY_SYMBOL: &str = "₹";

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
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

/// Whole amounts are shown without paise: `₹1,200`, `₹799.50`.
pub fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let rounded = (abs * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let paise = ((rounded - whole as f64) * 100.0).round() as u64;
    let grouped = group_indian(&whole.to_string());
    if paise == 0 {
        format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, grouped, paise)
    }
}

pub fn format_count(value: i64) -> String {
    let grouped = group_indian(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(120000.0), "₹1,20,000");
        assert_eq!(format_money(1200.0), "₹1,200");
        assert_eq!(format_money(850.0), "₹850");
        assert_eq!(format_money(799.5), "₹799.50");
        assert_eq!(format_money(0.0), "₹0");
        assert_eq!(format_money(-1234567.0), "-₹12,34,567");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(350), "350");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(10000000), "1,00,00,000");
        assert_eq!(format_count(-58), "-58");
    }
}
