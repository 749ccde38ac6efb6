//! Backend error text to user-facing copy.
//!
//! Classification is a case-sensitive substring match on the backend message,
//! checked in a fixed order: the first rule that matches wins.

use crate::error::BackendError;

pub const DUPLICATE_ENTRY: &str = "This information is already in our system.";
pub const INVALID_REFERENCE: &str = "Invalid reference. Please try again.";
pub const PERMISSION_DENIED: &str = "You don't have permission to perform this action.";
pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";
pub const ALREADY_SUBSCRIBED: &str = "This email is already subscribed to our newsletter.";

const RULES: &[(&str, &str)] = &[
    ("violates", DUPLICATE_ENTRY),
    ("foreign key", INVALID_REFERENCE),
    ("permission", PERMISSION_DENIED),
];

/// Map a backend error to a message safe to show to visitors.
pub fn normalize(error: &BackendError) -> String {
    normalize_message(error.message.as_deref())
}

pub fn normalize_message(message: Option<&str>) -> String {
    let Some(message) = message.filter(|m| !m.is_empty()) else {
        return GENERIC_FAILURE.to_string();
    };
    RULES
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map(|(_, copy)| (*copy).to_string())
        .unwrap_or_else(|| message.to_string())
}
