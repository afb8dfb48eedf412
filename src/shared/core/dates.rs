// Date helpers for the slash separated `MM/DD/YYYY` format used by event records.
//
// No calendar validation is done. Missing segments render as empty text and are padded like
// any other segment.

use chrono::Local;

/// Zero-pads month and day of an `M/D/YYYY` date to two digits each.
pub fn pad_date(date: &str) -> String {
    let [month, day, year] = split_date(date);
    format!("{month:0>2}/{day:0>2}/{year}")
}

/// Reorders an `MM/DD/YYYY` date into the `YYYY-MM-DD` form used for sorting.
pub fn create_sort_date(date: &str) -> String {
    let [month, day, year] = split_date(date);
    format!("{year}-{month:0>2}-{day:0>2}")
}

/// Today's local date as `MM/DD/YYYY`.
pub fn today() -> String {
    pad_date(&Local::now().format("%-m/%-d/%Y").to_string())
}

fn split_date(date: &str) -> [&str; 3] {
    let mut parts = date.split('/');
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}
