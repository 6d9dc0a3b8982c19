// Display formatting - Default renderer for raw measure values
use crate::domain::metric::MetricType;

/// Hours counted as one working day when rendering work durations.
const HOURS_IN_DAY: i64 = 8;

/// Renders a raw measure value according to its metric type. This is the
/// stock implementation of the formatting contract the tooltip assembler
/// takes as a closure; a caller with locale-aware needs supplies its own.
pub fn format_value(value: f64, metric_type: MetricType) -> String {
    match metric_type {
        MetricType::Int | MetricType::Level | MetricType::Data => format_int(value),
        MetricType::ShortInt => format_short_int(value),
        MetricType::Float => format!("{value:.1}"),
        MetricType::Percent => format!("{value:.1}%"),
        MetricType::Bool => {
            let text = if value != 0.0 { "yes" } else { "no" };
            text.to_string()
        }
        MetricType::Millisec => format_duration_ms(value),
        MetricType::Rating => format_rating(value),
        MetricType::WorkDur => format_work_duration(value),
    }
}

fn format_int(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_short_int(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        trim_decimal(value / 1e9, "b")
    } else if magnitude >= 1e6 {
        trim_decimal(value / 1e6, "m")
    } else if magnitude >= 1e3 {
        trim_decimal(value / 1e3, "k")
    } else {
        format!("{}", value.round() as i64)
    }
}

// "1.0k" reads as noise; shorten to "1k".
fn trim_decimal(scaled: f64, suffix: &str) -> String {
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

fn format_duration_ms(value: f64) -> String {
    let ms = value.round() as i64;
    if ms.abs() >= 60_000 {
        format!("{}min", ms / 60_000)
    } else if ms.abs() >= 1_000 {
        format!("{}s", ms / 1_000)
    } else {
        format!("{ms}ms")
    }
}

/// Ratings come in as 1..=5 and render as school grades A..=E.
fn format_rating(value: f64) -> String {
    let grade = (value.round() as i64).clamp(1, 5);
    let letter = char::from(b'A' + (grade - 1) as u8);
    letter.to_string()
}

/// Work durations come in as minutes of effort; rendered with 8-hour days.
fn format_work_duration(value: f64) -> String {
    let total_minutes = value.round() as i64;
    if total_minutes == 0 {
        return "0min".to_string();
    }
    let sign = if total_minutes < 0 { "-" } else { "" };
    let mut minutes = total_minutes.abs();

    let days = minutes / (HOURS_IN_DAY * 60);
    minutes %= HOURS_IN_DAY * 60;
    let hours = minutes / 60;
    minutes %= 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}min"));
    }
    format!("{sign}{}", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int_groups_thousands() {
        assert_eq!(format_value(0.0, MetricType::Int), "0");
        assert_eq!(format_value(999.0, MetricType::Int), "999");
        assert_eq!(format_value(1234.0, MetricType::Int), "1,234");
        assert_eq!(format_value(1234567.0, MetricType::Int), "1,234,567");
        assert_eq!(format_value(-1234.0, MetricType::Int), "-1,234");
    }

    #[test]
    fn test_format_short_int() {
        assert_eq!(format_value(42.0, MetricType::ShortInt), "42");
        assert_eq!(format_value(1000.0, MetricType::ShortInt), "1k");
        assert_eq!(format_value(1700.0, MetricType::ShortInt), "1.7k");
        assert_eq!(format_value(2_300_000.0, MetricType::ShortInt), "2.3m");
        assert_eq!(format_value(1_200_000_000.0, MetricType::ShortInt), "1.2b");
    }

    #[test]
    fn test_format_float_and_percent() {
        assert_eq!(format_value(12.34, MetricType::Float), "12.3");
        assert_eq!(format_value(87.5, MetricType::Percent), "87.5%");
        assert_eq!(format_value(100.0, MetricType::Percent), "100.0%");
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_value(1.0, MetricType::Bool), "yes");
        assert_eq!(format_value(0.0, MetricType::Bool), "no");
    }

    #[test]
    fn test_format_millisec() {
        assert_eq!(format_value(450.0, MetricType::Millisec), "450ms");
        assert_eq!(format_value(3_200.0, MetricType::Millisec), "3s");
        assert_eq!(format_value(180_000.0, MetricType::Millisec), "3min");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_value(1.0, MetricType::Rating), "A");
        assert_eq!(format_value(3.0, MetricType::Rating), "C");
        assert_eq!(format_value(5.0, MetricType::Rating), "E");
        assert_eq!(format_value(9.0, MetricType::Rating), "E");
    }

    #[test]
    fn test_format_work_duration() {
        assert_eq!(format_value(0.0, MetricType::WorkDur), "0min");
        assert_eq!(format_value(45.0, MetricType::WorkDur), "45min");
        assert_eq!(format_value(125.0, MetricType::WorkDur), "2h 5min");
        // 8h days: 500min = 1d 20min.
        assert_eq!(format_value(500.0, MetricType::WorkDur), "1d 20min");
        assert_eq!(format_value(-65.0, MetricType::WorkDur), "-1h 5min");
    }

    #[test]
    fn test_level_and_data_fall_back_to_int() {
        assert_eq!(format_value(2.0, MetricType::Level), "2");
        assert_eq!(format_value(1500.0, MetricType::Data), "1,500");
    }
}
