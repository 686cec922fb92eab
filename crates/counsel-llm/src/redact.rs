//! Key masking and error scrubbing
//!
//! Anything that might reach a log line or the browser goes through here
//! first so the API key cannot leak.

/// Keys at or below this length are fully masked
const MIN_KEY_LEN_FOR_PARTIAL: usize = 8;

/// Characters shown at each end of a masked key
const MASK_VISIBLE: usize = 4;

/// Substrings that mark an error message as sensitive
const SENSITIVE_MARKERS: &[&str] = &[
    "api_key",
    "api-key",
    "apikey",
    "authorization",
    "bearer",
    "secret",
    "credential",
];

/// Mask an API key for display in logs.
///
/// Shows the first and last four characters for keys longer than eight
/// characters, otherwise "****".
///
/// # Examples
/// ```
/// use counsel_llm::redact::mask_key;
/// assert_eq!(mask_key("sk-1234567890abcdef"), "sk-1...cdef");
/// assert_eq!(mask_key("short"), "****");
/// ```
#[must_use]
pub fn mask_key(key: &str) -> String {
    if key.len() <= MIN_KEY_LEN_FOR_PARTIAL {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &key[..MASK_VISIBLE],
        &key[key.len() - MASK_VISIBLE..]
    )
}

/// Scrub an error message before showing it to a user.
///
/// Messages containing credential-shaped content collapse to a generic
/// message; everything else passes through unchanged.
#[must_use]
pub fn scrub_error(error: &str) -> String {
    let lower = error.to_lowercase();
    for marker in SENSITIVE_MARKERS {
        if lower.contains(marker) {
            return "An API error occurred. Please try again.".to_string();
        }
    }
    error.to_string()
}
