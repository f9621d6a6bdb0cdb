//! Number and date formatting shared by the templates.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Formats a number with at most `max_decimals` decimals.
///
/// Trailing zeros are trimmed while keeping at least `min_decimals`.
/// Missing or non-numeric input renders as `"0"`.
pub fn format_number(value: &Value, min_decimals: usize, max_decimals: usize) -> String {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    let Some(number) = number.filter(|number| number.is_finite()) else {
        return "0".to_string();
    };

    let fixed = format!("{number:.max_decimals$}");
    let (int_part, decimals) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let mut decimals = decimals.trim_end_matches('0').to_string();
    while decimals.len() < min_decimals {
        decimals.push('0');
    }

    if decimals.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{decimals}")
    }
}

/// Renders a backend timestamp as `Jan 5, 2026` with an optional time.
///
/// Empty input renders as `N/A`; unparseable input is shown as is.
pub fn format_date(raw: &str, show_time: bool) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        let pattern = if show_time {
            "%b %-d, %Y, %I:%M %p"
        } else {
            "%b %-d, %Y"
        };
        return timestamp.format(pattern).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(feature = "server")]
pub mod filters {
    //! Tera bindings for the formatting helpers.

    use std::collections::HashMap;

    use tera::{Tera, Value};

    fn usize_arg(args: &HashMap<String, Value>, name: &str, default: usize) -> usize {
        args.get(name)
            .and_then(Value::as_u64)
            .map_or(default, |value| value as usize)
    }

    /// `{{ amount | format_number(min=2, max=4) }}`
    pub fn format_number(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let min = usize_arg(args, "min", 0);
        let max = usize_arg(args, "max", 4).max(min);
        Ok(Value::String(super::format_number(value, min, max)))
    }

    /// `{{ created_at | format_date(time=false) }}`
    pub fn format_date(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let show_time = args.get("time").and_then(Value::as_bool).unwrap_or(true);
        let raw = value.as_str().unwrap_or_default();
        Ok(Value::String(super::format_date(raw, show_time)))
    }

    pub fn register(tera: &mut Tera) {
        tera.register_filter("format_number", format_number);
        tera.register_filter("format_date", format_date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(&json!(12.5), 0, 4), "12.5");
        assert_eq!(format_number(&json!(3), 0, 4), "3");
        assert_eq!(format_number(&json!(0.123456), 0, 4), "0.1235");
    }

    #[test]
    fn keeps_minimum_decimals() {
        assert_eq!(format_number(&json!(7), 2, 4), "7.00");
        assert_eq!(format_number(&json!("1.5"), 2, 4), "1.50");
    }

    #[test]
    fn invalid_input_is_zero() {
        assert_eq!(format_number(&Value::Null, 0, 4), "0");
        assert_eq!(format_number(&json!(""), 0, 4), "0");
        assert_eq!(format_number(&json!("abc"), 2, 4), "0");
    }

    #[test]
    fn dates_render_in_short_month_form() {
        assert_eq!(format_date("2026-01-05T14:30:00Z", false), "Jan 5, 2026");
        assert_eq!(
            format_date("2026-01-05T14:30:00Z", true),
            "Jan 5, 2026, 02:30 PM"
        );
        assert_eq!(format_date("2026-03-09", true), "Mar 9, 2026");
        assert_eq!(format_date("", true), "N/A");
        assert_eq!(format_date("soon", true), "soon");
    }
}
