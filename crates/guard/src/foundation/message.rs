//! Message finalization shared by every guard.

use std::borrow::Cow;

use serde::Serialize;

/// Appends a terminating period unless one is already present.
#[must_use]
pub fn add_period(message: &str) -> Cow<'_, str> {
    if message.ends_with('.') {
        Cow::Borrowed(message)
    } else {
        Cow::Owned(format!("{message}."))
    }
}

/// Picks the message a failing guard reports.
///
/// A custom message that is missing, empty or whitespace-only falls back to
/// `default`, which is used verbatim. Any other custom message is kept as-is
/// apart from a trailing period being added when missing.
///
/// ```rust
/// use bulwark_guard::foundation::finalize_message;
///
/// assert_eq!(finalize_message(Some("bad value"), || "Default.".into()), "bad value.");
/// assert_eq!(finalize_message(Some("   "), || "Default.".into()), "Default.");
/// assert_eq!(finalize_message(None, || "Default.".into()), "Default.");
/// ```
pub fn finalize_message(custom: Option<&str>, default: impl FnOnce() -> String) -> String {
    match custom {
        Some(message) if !message.trim().is_empty() => add_period(message).into_owned(),
        _ => default(),
    }
}

/// Renders a value for an error message in its diagnostic (JSON) form.
///
/// Structured values keep their JSON shape so they stay legible; a bare
/// string is shown without the surrounding quotes. Values that cannot be
/// serialized are shown by type name.
pub fn render<T: Serialize + ?Sized>(value: &T) -> String {
    // Serialize straight to text: the `Value` tree cannot hold 128-bit integers.
    match serde_json::to_string(value) {
        Ok(json) if json.starts_with('"') => serde_json::from_str::<String>(&json).unwrap_or(json),
        Ok(json) => json,
        Err(_) => format!("<{}>", std::any::type_name::<T>()),
    }
}
