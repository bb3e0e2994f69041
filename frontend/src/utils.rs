pub const MISSING_VALUE: &str = "N/A";

/// Formats a publication timestamp as "March 5, 2024".
pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%B %-d, %Y").to_string()
    } else {
        iso_date.to_string()
    }
}

/// Compact count for video stats: 1.5K, 2.3M. Absent or zero renders as "N/A".
pub fn format_number(number: Option<u64>) -> String {
    match number {
        None | Some(0) => MISSING_VALUE.to_string(),
        Some(n) if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1_000_000.0),
        Some(n) if n >= 1_000 => format!("{:.1}K", n as f64 / 1_000.0),
        Some(n) => n.to_string(),
    }
}

// Formats each x1000 step
pub fn format_with_separators(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Renders `PT#H#M#S` as `H:MM:SS`, or `M:SS` without hours.
/// Anything else is returned unchanged.
pub fn format_iso8601_duration(duration: &str) -> String {
    match parse_iso8601_duration(duration) {
        Some((hours, minutes, seconds)) if hours > 0 => {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        }
        Some((_, minutes, seconds)) => format!("{}:{:02}", minutes, seconds),
        None => duration.to_string(),
    }
}

/// Badge text for an optional duration; missing and empty values show nothing.
pub fn format_optional_duration(duration: Option<&str>) -> Option<String> {
    duration
        .filter(|d| !d.is_empty())
        .map(format_iso8601_duration)
}

fn parse_iso8601_duration(duration: &str) -> Option<(u64, u64, u64)> {
    let mut rest = duration.strip_prefix("PT")?;
    let mut parts = [0u64; 3];

    for (slot, unit) in ["H", "M", "S"].iter().enumerate() {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            continue;
        }
        if let Some(after) = rest[digits..].strip_prefix(unit) {
            parts[slot] = rest[..digits].parse().ok()?;
            rest = after;
        }
    }

    rest.is_empty().then_some((parts[0], parts[1], parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(999)), "999");
        assert_eq!(format_number(Some(1_500)), "1.5K");
        assert_eq!(format_number(Some(2_300_000)), "2.3M");
        assert_eq!(format_number(Some(1_000)), "1.0K");
        assert_eq!(format_number(Some(0)), "N/A");
        assert_eq!(format_number(None), "N/A");
    }

    #[test]
    fn test_format_with_separators() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1_000), "1,000");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_iso8601_duration("PT1H2M30S"), "1:02:30");
        assert_eq!(format_iso8601_duration("PT2H"), "2:00:00");
    }

    #[test]
    fn test_format_duration_without_hours() {
        assert_eq!(format_iso8601_duration("PT5M9S"), "5:09");
        assert_eq!(format_iso8601_duration("PT45S"), "0:45");
        assert_eq!(format_iso8601_duration("PT12M"), "12:00");
    }

    #[test]
    fn test_format_duration_passes_malformed_input_through() {
        assert_eq!(format_iso8601_duration("abc"), "abc");
        assert_eq!(format_iso8601_duration("P1DT2H"), "P1DT2H");
        assert_eq!(format_iso8601_duration("PT5X"), "PT5X");
        assert_eq!(format_iso8601_duration(""), "");
    }

    #[test]
    fn test_optional_duration_hides_missing_and_empty() {
        assert_eq!(format_optional_duration(None), None);
        assert_eq!(format_optional_duration(Some("")), None);
        assert_eq!(
            format_optional_duration(Some("PT4M13S")),
            Some("4:13".to_string())
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_iso8601_date("2024-03-05T12:00:00Z"), "March 5, 2024");
        assert_eq!(format_iso8601_date("yesterday"), "yesterday");
    }
}
