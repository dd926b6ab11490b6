//! Clock-style duration strings.

/// Format whole seconds as `H:MM:SS`, with a `N day(s), ` prefix past 24 hours.
///
/// ```
/// use autocaption_probe::format_duration;
///
/// assert_eq!(format_duration(90), "0:01:30");
/// assert_eq!(format_duration(86_400 + 61), "1 day, 0:01:01");
/// ```
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let rem = total_secs % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Parse a fractional seconds string (as printed by ffprobe) and format it.
/// Fractions are truncated.
pub(crate) fn format_seconds_str(secs: &str) -> Option<String> {
    let secs: f64 = secs.trim().parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(format_duration(secs as u64))
}
