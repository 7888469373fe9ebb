//! Fare text parsing.

/// A parsed fare field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Amount in cents, rounded to the nearest cent.
    pub cents: u32,
    /// True when no fare text was supplied, the text flags a default fare,
    /// or the amount is exactly zero.
    pub is_default: bool,
}

/// Parse free-text fare values such as `"$3.50"`, `"3.50"`, or
/// `"default fare"`.
///
/// Everything that is not a digit or decimal point is stripped before the
/// numeric parse; a failed parse degrades to zero rather than erroring.
pub fn parse_fare(value: Option<&str>) -> Fare {
    let Some(raw) = value else {
        return Fare {
            cents: 0,
            is_default: true,
        };
    };
    let text = raw.to_lowercase();
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let amount = numeric.parse::<f64>().unwrap_or(0.0);
    Fare {
        cents: (amount * 100.0).round() as u32,
        is_default: text.contains("default") || amount == 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_text_parses_to_cents() {
        assert_eq!(parse_fare(Some("$3.50")), Fare { cents: 350, is_default: false });
        assert_eq!(parse_fare(Some("3.00")), Fare { cents: 300, is_default: false });
        assert_eq!(parse_fare(Some("AUD 4.16")), Fare { cents: 416, is_default: false });
    }

    #[test]
    fn absent_value_is_default_zero() {
        assert_eq!(parse_fare(None), Fare { cents: 0, is_default: true });
    }

    #[test]
    fn default_text_is_flagged_regardless_of_amount() {
        assert_eq!(parse_fare(Some("default fare")), Fare { cents: 0, is_default: true });
        assert_eq!(parse_fare(Some("Default $5.20")), Fare { cents: 520, is_default: true });
    }

    #[test]
    fn zero_amount_is_default() {
        assert_eq!(parse_fare(Some("0.00")), Fare { cents: 0, is_default: true });
        assert_eq!(parse_fare(Some("")), Fare { cents: 0, is_default: true });
        assert_eq!(parse_fare(Some("free")), Fare { cents: 0, is_default: true });
    }

    #[test]
    fn sub_cent_amount_rounds_but_is_not_default() {
        let fare = parse_fare(Some("0.001"));
        assert_eq!(fare.cents, 0);
        assert!(!fare.is_default);
    }
}
