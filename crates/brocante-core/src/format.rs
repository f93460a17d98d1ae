//! Display formatting for prices, dates and result counts.

use chrono::{DateTime, Duration, Utc};

/// Formats a euro amount the French way: `1 250 €`, `12,50 €`.
///
/// Cents are dropped when the amount is whole.
pub fn format_currency(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    if fraction == 0 {
        format!("{}{} €", sign, grouped)
    } else {
        format!("{}{},{:02} €", sign, grouped, fraction)
    }
}

/// `12 Mar 2024`
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

/// Timestamp shown next to a message: the time for today, the weekday for
/// the past week, the full date otherwise.
pub fn format_message_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if at.date_naive() == now.date_naive() {
        at.format("%H:%M").to_string()
    } else if now.signed_duration_since(at) < Duration::days(7) {
        at.format("%a").to_string()
    } else {
        at.format("%d/%m/%Y").to_string()
    }
}

/// `1 result found`, `3 results found`
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{} results found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0 €");
        assert_eq!(format_currency(45.0), "45 €");
        assert_eq!(format_currency(12.5), "12,50 €");
        assert_eq!(format_currency(1250.0), "1 250 €");
        assert_eq!(format_currency(1234567.891), "1 234 567,89 €");
        assert_eq!(format_currency(-3.2), "-3,20 €");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 2, 14, 0, 0).unwrap();
        assert_eq!(format_date(at), "02 Mar 2024");
    }

    #[test]
    fn test_format_message_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();

        let today = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
        assert_eq!(format_message_time(today, now), "09:05");

        let tuesday = Utc.with_ymd_and_hms(2024, 3, 12, 9, 5, 0).unwrap();
        assert_eq!(format_message_time(tuesday, now), "Tue");

        let old = Utc.with_ymd_and_hms(2024, 2, 1, 9, 5, 0).unwrap();
        assert_eq!(format_message_time(old, now), "01/02/2024");
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 results found");
        assert_eq!(results_label(1), "1 result found");
        assert_eq!(results_label(12), "12 results found");
    }
}
