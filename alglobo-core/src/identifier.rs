use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use crate::request::ReservationId;

// 8-4-4-4-12 hex; version nibble 1-5, variant nibble 8/9/a/b
static RESERVATION_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("reservation id pattern is valid")
});

/// Returns true if `raw` has the canonical shape of a reservation id.
pub fn is_reservation_id(raw: &str) -> bool {
    RESERVATION_ID_RE.is_match(raw)
}

/// Keep only the values that are strings shaped like reservation ids.
///
/// Order of first appearance is preserved and duplicates are kept. Anything
/// else (numbers, objects, null sentinels, malformed strings) is dropped.
pub fn valid_reservation_ids(values: &[Value]) -> Vec<ReservationId> {
    let ids: Vec<ReservationId> = values
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|raw| ReservationId::parse(raw).ok())
        .collect();

    tracing::debug!("Kept {} of {} values as reservation ids", ids.len(), values.len());
    ids
}
