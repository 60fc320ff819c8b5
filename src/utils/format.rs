//! Display formatting helpers

/// Format an amount the way the summary screens show money: rounded to three
/// decimal places, thousands separated, trailing zeros and the currency
/// symbol dropped.
pub fn double_to_currency(amount: f64) -> String {
    let rounded = (amount * 1000.0).round() / 1000.0;

    let mut text = format!("{:.3}", rounded.abs());
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (text, None),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a ratio as a percentage with two fraction digits
pub fn format_as_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_to_currency() {
        assert_eq!(double_to_currency(123.456), "123.456");
        assert_eq!(double_to_currency(100.0), "100");
        assert_eq!(double_to_currency(1_234_567.8912), "1,234,567.891");
        assert_eq!(double_to_currency(0.5), "0.5");
        assert_eq!(double_to_currency(-42.125), "-42.125");
    }

    #[test]
    fn test_double_to_currency_rounds_to_three_decimals() {
        assert_eq!(double_to_currency(62_314.299999), "62,314.3");
    }

    #[test]
    fn test_format_as_percentage() {
        assert_eq!(format_as_percentage(0.1234), "12.34%");
        assert_eq!(format_as_percentage(0.05), "5.00%");
        assert_eq!(format_as_percentage(1.0), "100.00%");
    }
}
