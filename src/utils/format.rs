//! Display formatting for metrics and timestamps.

/// Format a relative-strength metric with two decimals and explicit sign
/// (e.g. "+1.25", "-0.40"). NaN renders as a dash.
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    format!("{:+.2}", value)
}

/// Format a composite score with two decimals, no sign.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    format!("{:.2}", value)
}

/// CSS class for coloring a signed metric cell.
pub fn metric_class(value: f64) -> &'static str {
    if value > 0.0 {
        "pos"
    } else if value < 0.0 {
        "neg"
    } else {
        ""
    }
}

/// Extract "HH:MM:SS" from an ISO-8601 timestamp string.
///
/// The backend emits timestamps like `2026-08-28T09:45:12.345+00:00`;
/// anything that does not look like that is returned unchanged.
pub fn format_clock(ts: &str) -> String {
    if let Some((_, rest)) = ts.split_once('T')
        && rest.as_bytes().get(2) == Some(&b':')
        && let Some(clock) = rest.get(..8)
    {
        clock.to_string()
    } else {
        ts.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric_signs() {
        assert_eq!(format_metric(1.254), "+1.25");
        assert_eq!(format_metric(-0.4), "-0.40");
        assert_eq!(format_metric(0.0), "+0.00");
        assert_eq!(format_metric(f64::NAN), "—");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(3.14159), "3.14");
        assert_eq!(format_score(f64::NAN), "—");
    }

    #[test]
    fn test_metric_class() {
        assert_eq!(metric_class(0.5), "pos");
        assert_eq!(metric_class(-0.5), "neg");
        assert_eq!(metric_class(0.0), "");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock("2026-08-28T09:45:12+00:00"), "09:45:12");
        assert_eq!(format_clock("2026-08-28T09:45:12.345678+00:00"), "09:45:12");
        // Not a timestamp: passed through untouched.
        assert_eq!(format_clock("pending"), "pending");
        assert_eq!(format_clock(""), "");
    }

    #[test]
    fn test_format_clock_multibyte_input() {
        // Byte 2 after the 'T' is ':' but byte 8 falls inside 'é'; must
        // pass through instead of slicing mid-character.
        let ts = "2026-08-28T05:45:aé";
        assert_eq!(format_clock(ts), ts);
        // Too short after the 'T'.
        assert_eq!(format_clock("xT09:4"), "xT09:4");
    }
}
