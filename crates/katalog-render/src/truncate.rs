//! Listing summary truncation.

use std::borrow::Cow;

/// Number of characters of a description shown on the listing page.
pub const SUMMARY_CHARS: usize = 200;

/// Marker appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_chars` characters plus [`ELLIPSIS`] if it is longer.
///
/// Lengths are counted in Unicode scalar values, so multi-byte text is
/// never split inside a character. Text at or under the limit is returned
/// unchanged.
///
/// ```
/// use katalog_render::truncate_description;
///
/// assert_eq!(truncate_description("gong", 3), "gon...");
/// assert_eq!(truncate_description("gong", 4), "gong");
/// ```
pub fn truncate_description(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
