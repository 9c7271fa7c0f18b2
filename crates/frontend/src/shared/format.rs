//! Number formatting for table cells and stat cards.

/// Group an integer with dots, the Vietnamese thousands separator.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// VND amount: whole đồng, grouped, with the currency sign.
/// Large dashboard figures compress to millions ("12,5tr ₫").
pub fn format_vnd(amount: f64) -> String {
    if amount.abs() >= 1_000_000_000.0 {
        format!("{}tr ₫", format_thousands((amount / 1_000_000.0).round() as i64))
    } else {
        format!("{} ₫", format_thousands(amount.round() as i64))
    }
}

/// Percent with one decimal, comma as the decimal separator.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_dot_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2_500_000), "2.500.000");
        assert_eq!(format_thousands(-1234), "-1.234");
    }

    #[test]
    fn vnd_rounds_to_whole_dong() {
        assert_eq!(format_vnd(2_500_000.4), "2.500.000 ₫");
    }

    #[test]
    fn billions_compress_to_millions() {
        assert_eq!(format_vnd(1_250_000_000.0), "1.250tr ₫");
    }

    #[test]
    fn percent_uses_comma_separator() {
        assert_eq!(format_percent(0.253), "25,3%");
        assert_eq!(format_percent(0.0), "0,0%");
    }
}
