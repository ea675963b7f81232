/// Utilities for value formatting (ru-RU style)
///
/// Provides consistent money/date formatting across the application

/// Format an optional amount as RUB currency.
/// Example: `Some(1234567.5)` -> "1 234 567,50 ₽"; `None` -> "Не указано"
pub fn format_money(amount: Option<f64>) -> String {
    let Some(value) = amount else {
        return "Не указано".to_string();
    };

    let cents = (value.abs() * 100.0).round() as i64;
    let mut grouped = format_thousands(cents / 100);
    if value < 0.0 && cents > 0 {
        grouped.insert(0, '-');
    }
    format!("{},{:02}\u{00a0}₽", grouped, cents % 100)
}

fn format_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let time = time.trim_end_matches('Z');
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(1000.0)), "1\u{00a0}000,00\u{00a0}₽");
        assert_eq!(
            format_money(Some(1234567.5)),
            "1\u{00a0}234\u{00a0}567,50\u{00a0}₽"
        );
        assert_eq!(format_money(Some(0.0)), "0,00\u{00a0}₽");
        assert_eq!(format_money(Some(-1234.56)), "-1\u{00a0}234,56\u{00a0}₽");
    }

    #[test]
    fn test_format_money_absent() {
        assert_eq!(format_money(None), "Не указано");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_datetime_invalid() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
