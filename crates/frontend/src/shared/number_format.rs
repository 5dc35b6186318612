//! Money formatting for price display.

/// Formats a price with two decimal places and a space as the thousands
/// separator. Aggregation keeps full precision; this is the only point where
/// rounding happens.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, dec_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };
    format!("{}.{}", group_thousands(int_part), dec_part)
}

fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_money(2700.0), "2 700.00");
        assert_eq!(format_money(99.999), "100.00");
    }

    #[test]
    fn test_short_integers_stay_ungrouped() {
        assert_eq!(format_money(7.5), "7.50");
        assert_eq!(format_money(999.0), "999.00");
    }
}
