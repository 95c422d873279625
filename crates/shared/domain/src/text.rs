//! Text helpers shared by the value objects.

/// True if `value` holds nothing but separator characters.
///
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) count as
/// content, while the ASCII information separators (U+001C..=U+001F) count
/// as blank.
pub(crate) fn is_blank(value: &str) -> bool {
    value.chars().all(is_separator)
}

fn is_separator(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
