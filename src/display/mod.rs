//! Terminal display formatting
//!
//! Formatting helpers and table rendering for CLI output. Presentation
//! only: nothing here feeds back into the engine, and formatting the same
//! value twice always yields the same string.

pub mod scenario;
pub mod tax;

/// Format an amount in billions for display, e.g. `$76.03B` / `-$4.84B`
pub fn format_billions(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}B", amount.abs())
    } else {
        format!("${:.2}B", amount)
    }
}

/// Format a dollar amount with thousands separators, e.g. `$15,705.00`
pub fn format_dollars(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, fraction)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_billions() {
        assert_eq!(format_billions(76.03), "$76.03B");
        assert_eq!(format_billions(-4.84), "-$4.84B");
        assert_eq!(format_billions(0.0), "$0.00B");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(15_705.0), "$15,705.00");
        assert_eq!(format_dollars(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_dollars(-99.5), "-$99.50");
        assert_eq!(format_dollars(0.0), "$0.00");
        assert_eq!(format_dollars(999.0), "$999.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(7.5), "7.5%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(12.34), "12.3%");
    }

    #[test]
    fn test_formatting_is_idempotent_on_value() {
        let a = format_billions(47.27);
        let b = format_billions(47.27);
        assert_eq!(a, b);
    }
}
