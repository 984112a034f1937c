use alloc::string::String;

/// Escapes `text` so it can sit between the quotes of a JSON string.
///
/// | input              | output       |
/// |--------------------|--------------|
/// | `"`                | `\"`         |
/// | `\`                | `\\`         |
/// | backspace          | `\b`         |
/// | form feed          | `\f`         |
/// | newline            | `\n`         |
/// | carriage return    | `\r`         |
/// | tab                | `\t`         |
/// | other `0x00..0x1F` | `\u00xx`     |
///
/// Everything else, including non-ASCII text, passes through unchanged.
/// The surrounding quotes are not added, see [`quote_into`].
///
/// # Examples
///
/// ```
/// assert_eq!(tw_text::escape("a\tb"), "a\\tb");
/// assert_eq!(tw_text::escape("\u{1}"), "\\u0001");
/// assert_eq!(tw_text::escape(""), "");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    escape_into(text, &mut out);
    out
}

/// Appends the escaped form of `text` to `out`.
///
/// See [`escape`] for the translation table.
pub fn escape_into(text: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    // Copy unescaped runs in one go.
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        let named = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{08}' => Some("\\b"),
            '\u{0C}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            '\u{00}'..='\u{1F}' => None,
            _ => continue,
        };

        out.push_str(&text[start..idx]);
        match named {
            Some(seq) => out.push_str(seq),
            None => {
                let byte = ch as u8;
                out.push_str("\\u00");
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0F)] as char);
            }
        }
        start = idx + ch.len_utf8();
    }
    out.push_str(&text[start..]);
}

/// Appends `text` to `out` as a complete JSON string, quotes included.
///
/// ```
/// let mut out = String::new();
/// tw_text::quote_into("line\n", &mut out);
/// assert_eq!(out, "\"line\\n\"");
/// ```
#[inline]
pub fn quote_into(text: &str, out: &mut String) {
    out.reserve(text.len() + 2);
    out.push('"');
    escape_into(text, out);
    out.push('"');
}
