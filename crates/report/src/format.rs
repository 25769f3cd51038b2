use chrono::{Local, TimeZone};

const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Renders a byte count with binary (1024-based) units.
///
/// The value is divided down until it drops below 1024 or runs out of
/// units, then printed with `decimals` places using the platform's default
/// float rounding (nearest, ties to even). `1536` with 0 decimals is
/// therefore `"2 KiB"`.
pub fn human_size(bytes: f64, decimals: usize) -> String {
    let mut value = bytes;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.prec$} {}", value, UNITS[unit], prec = decimals)
}

/// Renders a Unix timestamp as e.g. `Feb 23 2023` (always 11 columns),
/// in the local timezone.
pub fn simple_date(secs: u64) -> String {
    Local
        .timestamp_opt(secs as i64, 0)
        .single()
        .map(|dt| dt.format("%b %d %Y").to_string())
        .unwrap_or_else(|| String::from("???"))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
