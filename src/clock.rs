//! Wall-clock helpers for the simulated day.
//!
//! All times are minutes after local midnight. Values past 24:00 are allowed
//! so a long day simply keeps counting.

/// Minutes after midnight, or a duration in minutes.
pub type Minutes = u32;

/// 09:00, where every simulated day begins.
pub const DAY_START: Minutes = 9 * 60;

/// Dwell time assumed for stops that do not specify one.
pub const DEFAULT_VISIT_MINUTES: Minutes = 60;

/// Parse a 24-hour `"HH:MM"` string into minutes after midnight.
///
/// Anything that is not two numeric fields separated by `:` yields `None`,
/// which callers treat exactly like a missing bound. Trailing fields
/// (`"09:30:00"`) are ignored and hours are not range-checked, so `"25:00"`
/// parses to 1500.
pub fn parse_clock(value: &str) -> Option<Minutes> {
    let mut parts = value.split(':');
    let hours: Minutes = parts.next()?.trim().parse().ok()?;
    let minutes: Minutes = parts.next()?.trim().parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Format minutes after midnight as `"HH:MM"`.
pub fn format_clock(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(parse_clock("09:00"), Some(540));
        assert_eq!(parse_clock("00:00"), Some(0));
        assert_eq!(parse_clock("23:59"), Some(1439));
        assert_eq!(parse_clock("9:05"), Some(545));
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_seconds() {
        assert_eq!(parse_clock(" 10 : 30 "), Some(630));
        assert_eq!(parse_clock("10:30:45"), Some(630));
    }

    #[test]
    fn test_parse_does_not_range_check_hours() {
        assert_eq!(parse_clock("25:00"), Some(1500));
    }

    #[test]
    fn test_parse_malformed_is_none() {
        for raw in ["", "10", "ab:cd", "10:xx", "-1:00", "10:", ":30", "noon"] {
            assert_eq!(parse_clock(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(540), "09:00");
        assert_eq!(format_clock(905), "15:05");
        assert_eq!(format_clock(1500), "25:00");
    }
}
