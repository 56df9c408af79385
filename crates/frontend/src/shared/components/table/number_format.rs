//! Number formatting for tables and summary figures (en-PH conventions)

/// Formats a number with comma thousands separators and the given number of decimals
///
/// # Examples
///
/// ```
/// use portal_frontend::shared::components::table::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole number with thousands separators
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Peso amount with two decimals, e.g. `₱1,234,567.89`
pub fn format_peso(value: f64) -> String {
    format!("₱{}", format_money(value))
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Compact peso amount in millions, e.g. `₱97.7M`
pub fn format_peso_millions(value: f64) -> String {
    format!("₱{:.1}M", value / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(69296.0), "69,296");
        assert_eq!(format_number_int(100.0), "100");
        assert_eq!(format_number_int(1000000.0), "1,000,000");
    }

    #[test]
    fn test_format_peso() {
        assert_eq!(format_peso(96500000.5), "₱96,500,000.50");
        assert_eq!(format_peso_millions(97700000.5), "₱97.7M");
    }
}
