/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use history_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format `part` as a percentage of `total`, one decimal place.
///
/// Returns `"0.0%"` when `total` is zero.
///
/// # Examples
///
/// ```
/// use history_core::formatting::format_share;
///
/// assert_eq!(format_share(1, 4), "25.0%");
/// assert_eq!(format_share(0, 0), "0.0%");
/// ```
pub fn format_share(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
