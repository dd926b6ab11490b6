//! Human-readable byte sizes.

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and two decimals.
///
/// Zero is rendered as `0 B`. Anything past the last unit is expressed in PB.
///
/// # Examples
///
/// ```
/// use autocaption_common::size::human_readable_size;
///
/// assert_eq!(human_readable_size(0), "0 B");
/// assert_eq!(human_readable_size(1536), "1.50 KB");
/// assert_eq!(human_readable_size(1073741824), "1.00 GB");
/// ```
pub fn human_readable_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} PB", size)
}
