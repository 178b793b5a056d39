//! Centralized display formatting utilities.
//!
//! All bar and counter rendering goes through this module so the CLI and
//! snapshot consumers show fill percentages, AP counts, and countdowns the
//! same way.

/// Format a fill percentage with 1 decimal place.
///
/// The value is clamped to `0..=100` before formatting.
///
/// # Examples
/// ```
/// use tempo_types::formatting::format_fill_pct;
/// assert_eq!(format_fill_pct(42.66), "42.7%");
/// assert_eq!(format_fill_pct(0.0), "0.0%");
/// assert_eq!(format_fill_pct(117.3), "100.0%");
/// ```
pub fn format_fill_pct(fill: f64) -> String {
    format!("{:.1}%", fill.clamp(0.0, 100.0))
}

/// Render a fill percentage as a bracketed text bar.
///
/// `width` counts the cells between the brackets; filled cells are `#`,
/// empty cells `-`. The fill is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use tempo_types::formatting::fill_bar;
/// assert_eq!(fill_bar(0.0, 10), "[----------]");
/// assert_eq!(fill_bar(50.0, 10), "[#####-----]");
/// assert_eq!(fill_bar(100.0, 10), "[##########]");
/// assert_eq!(fill_bar(34.0, 4), "[#---]");
/// ```
pub fn fill_bar(fill: f64, width: usize) -> String {
    let fill = fill.clamp(0.0, 100.0);
    let filled = ((fill / 100.0) * width as f64).floor() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..width {
        bar.push('-');
    }
    bar.push(']');
    bar
}

/// Format an AP counter as `current/max`.
///
/// # Examples
/// ```
/// use tempo_types::formatting::format_ap;
/// assert_eq!(format_ap(3, 5), "3/5");
/// assert_eq!(format_ap(0, 10), "0/10");
/// ```
pub fn format_ap(ap: u32, max_ap: u32) -> String {
    format!("{}/{}", ap, max_ap)
}

/// Format a countdown in milliseconds for bar display.
///
/// - Values >= 60s: `M:SS`
/// - Values >= 10s: whole seconds with an `s` suffix
/// - Values < 10s: one decimal place with an `s` suffix
/// - Values <= 0: returns the provided `zero_label`
///
/// # Examples
/// ```
/// use tempo_types::formatting::format_countdown_ms;
/// assert_eq!(format_countdown_ms(75_300.0, "ready"), "1:15");
/// assert_eq!(format_countdown_ms(15_700.0, "ready"), "16s");
/// assert_eq!(format_countdown_ms(3_500.0, "ready"), "3.5s");
/// assert_eq!(format_countdown_ms(0.0, "ready"), "ready");
/// ```
pub fn format_countdown_ms(ms: f64, zero_label: &str) -> String {
    if ms <= 0.0 {
        return zero_label.to_string();
    }
    let secs = ms / 1000.0;
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor() as u32;
        let remaining_secs = (secs % 60.0).floor() as u32;
        format!("{}:{:02}", mins, remaining_secs)
    } else if secs >= 10.0 {
        format!("{:.0}s", secs)
    } else {
        format!("{:.1}s", secs)
    }
}

/// Format a duration in milliseconds as `M:SS` (rounded to whole seconds).
///
/// # Examples
/// ```
/// use tempo_types::formatting::format_duration_ms;
/// assert_eq!(format_duration_ms(125_000.0), "2:05");
/// assert_eq!(format_duration_ms(59_400.0), "0:59");
/// assert_eq!(format_duration_ms(0.0), "0:00");
/// ```
pub fn format_duration_ms(ms: f64) -> String {
    let total_secs = (ms / 1000.0).round() as i64;
    let total_secs = total_secs.max(0);
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fill_pct() {
        assert_eq!(format_fill_pct(0.0), "0.0%");
        assert_eq!(format_fill_pct(42.66), "42.7%");
        assert_eq!(format_fill_pct(100.0), "100.0%");
        assert_eq!(format_fill_pct(-3.0), "0.0%");
        assert_eq!(format_fill_pct(117.3), "100.0%");
    }

    #[test]
    fn test_fill_bar() {
        assert_eq!(fill_bar(0.0, 10), "[----------]");
        assert_eq!(fill_bar(10.0, 10), "[#---------]");
        assert_eq!(fill_bar(50.0, 10), "[#####-----]");
        assert_eq!(fill_bar(99.9, 10), "[#########-]");
        assert_eq!(fill_bar(100.0, 10), "[##########]");
        assert_eq!(fill_bar(150.0, 10), "[##########]");
        assert_eq!(fill_bar(-5.0, 10), "[----------]");
    }

    #[test]
    fn test_format_ap() {
        assert_eq!(format_ap(0, 10), "0/10");
        assert_eq!(format_ap(3, 5), "3/5");
        assert_eq!(format_ap(5, 5), "5/5");
    }

    #[test]
    fn test_format_countdown_ms() {
        assert_eq!(format_countdown_ms(75_300.0, "ready"), "1:15");
        assert_eq!(format_countdown_ms(60_000.0, "ready"), "1:00");
        assert_eq!(format_countdown_ms(15_700.0, "ready"), "16s");
        assert_eq!(format_countdown_ms(10_000.0, "ready"), "10s");
        assert_eq!(format_countdown_ms(9_990.0, "ready"), "10.0s");
        assert_eq!(format_countdown_ms(3_500.0, "ready"), "3.5s");
        assert_eq!(format_countdown_ms(0.0, "ready"), "ready");
        assert_eq!(format_countdown_ms(-100.0, "ready"), "ready");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(0.0), "0:00");
        assert_eq!(format_duration_ms(59_000.0), "0:59");
        assert_eq!(format_duration_ms(60_000.0), "1:00");
        assert_eq!(format_duration_ms(125_000.0), "2:05");
        assert_eq!(format_duration_ms(125_700.0), "2:06");
    }
}
