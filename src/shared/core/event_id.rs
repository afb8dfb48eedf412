// Event identifiers arrive as text from every inbound adapter.
//
// Parsing follows the lenient leading-integer rule the events API has always used:
// leading whitespace is skipped, an optional sign is accepted, and digits are read until the
// first non-digit. Anything that does not yield a positive integer matches no record.

pub type EventId = u64;

pub fn parse_event_id(raw: &str) -> Option<EventId> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let id: EventId = unsigned[..digits_end].parse().ok()?;
    if negative || id == 0 {
        return None;
    }
    Some(id)
}
