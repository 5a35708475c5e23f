use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback phrase returned for any status code outside the curated table.
pub const UNKNOWN_STATUS: &str = "Unknown Status";

// Curated subset of standard HTTP status codes and their canonical phrases.
// Read-only after initialization, so concurrent lookups need no locking.
static STATUS_MESSAGES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (200, "OK"),
        (201, "Created"),
        (202, "Accepted"),
        (204, "No Content"),
        (400, "Bad Request"),
        (401, "Unauthorized"),
        (402, "Payment Required"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (405, "Method Not Allowed"),
        (409, "Conflict"),
        (410, "Gone"),
        (422, "Unprocessable Entity"),
        (500, "Internal Server Error"),
        (502, "Bad Gateway"),
        (503, "Service Unavailable"),
        (504, "Gateway Timeout"),
    ])
});

/// Look up the canonical phrase for an HTTP status code.
///
/// Total over all of `u16`: codes not in the table (including 0 and
/// out-of-range values like 999) yield `"Unknown Status"`.
pub fn status_message(code: u16) -> &'static str {
    STATUS_MESSAGES.get(&code).copied().unwrap_or(UNKNOWN_STATUS)
}
