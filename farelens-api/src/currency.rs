/// Display-time currency formatting. Raw quote values are never rounded;
/// only these strings are.
pub fn format_rupees(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("₹ {}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(format_rupees(1050.0), "₹ 1,050.00");
        assert_eq!(format_rupees(0.5), "₹ 0.50");
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(format_rupees(123.0), "₹ 123.00");
        assert_eq!(format_rupees(1234.0), "₹ 1,234.00");
        assert_eq!(format_rupees(1234567.89), "₹ 1,234,567.89");
    }

    #[test]
    fn test_rounds_at_display_time() {
        assert_eq!(format_rupees(999.999), "₹ 1,000.00");
        assert_eq!(format_rupees(25.004), "₹ 25.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_rupees(-1050.5), "₹ -1,050.50");
    }
}
