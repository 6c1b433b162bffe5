//! Display formatting for amounts stored in cents.

/// Format an amount in cents as US dollars, e.g. `123456` -> `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let remainder = abs % 100;

    format!("{}${}.{:02}", sign, group_thousands(dollars), remainder)
}

/// Convert cents to dollars for edit forms.
pub fn cents_to_dollars(cents: i32) -> f64 {
    f64::from(cents) / 100.0
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(15795), "$157.95");
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(100000000), "$1,000,000.00");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(-500), "-$5.00");
        assert_eq!(format_currency(-123456789), "-$1,234,567.89");
    }

    #[test]
    fn test_cents_to_dollars() {
        assert_eq!(cents_to_dollars(44800), 448.0);
        assert_eq!(cents_to_dollars(666), 6.66);
    }
}
