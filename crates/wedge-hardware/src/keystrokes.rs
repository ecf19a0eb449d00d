//! Escaping for the keystroke sink.
//!
//! The sink interprets `+ ^ % ~ ( )` as modifiers and grouping; each is
//! typed literally by wrapping it in braces. A trailing `~` presses Enter.

use wedge_core::constants::{KEYSTROKE_ENTER, KEYSTROKE_SPECIAL_CHARS};

/// Returns `true` if the sink treats `c` as a metacharacter.
#[inline]
#[must_use]
pub fn is_special(c: char) -> bool {
    KEYSTROKE_SPECIAL_CHARS.contains(&c)
}

/// Escape `text` for the sink and append the Enter token.
///
/// # Examples
///
/// ```
/// use wedge_hardware::keystrokes::escape_keystrokes;
///
/// assert_eq!(escape_keystrokes("8:192"), "8:192~");
/// assert_eq!(escape_keystrokes("a+b"), "a{+}b~");
/// ```
#[must_use]
pub fn escape_keystrokes(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + KEYSTROKE_ENTER.len());
    for c in text.chars() {
        if is_special(c) {
            escaped.push('{');
            escaped.push(c);
            escaped.push('}');
        } else {
            escaped.push(c);
        }
    }
    escaped.push_str(KEYSTROKE_ENTER);
    escaped
}
