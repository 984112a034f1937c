/// Returns `true` when `text` is a complete JSON number token.
///
/// The grammar is the strict one from RFC 8259: an optional minus sign,
/// an integer part without leading zeros, an optional fraction and an
/// optional exponent. `NaN`, `inf` and a leading `+` are rejected.
///
/// ```
/// assert!(tw_text::is_json_number("-12.5e3"));
/// assert!(!tw_text::is_json_number("012"));
/// assert!(!tw_text::is_json_number("NaN"));
/// ```
pub fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let digits = |pos: &mut usize| {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos - start
    };

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            digits(&mut pos);
        }
        _ => return false,
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if digits(&mut pos) == 0 {
            return false;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}

/// Returns `true` when `text` is a bare JSON scalar token:
/// `true`, `false`, `null` or a number.
///
/// Such a token can be spliced into a JSON document without quoting.
#[inline]
pub fn is_json_literal(text: &str) -> bool {
    matches!(text, "true" | "false" | "null") || is_json_number(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for ok in ["0", "-0", "7", "42", "-42", "3.25", "-0.5", "1e9", "1E+2", "2.5e-3"] {
            assert!(is_json_number(ok), "{ok}");
        }
        for bad in ["", "-", "+1", "01", "1.", ".5", "1e", "1e+", "0x10", "1 ", "NaN", "inf"] {
            assert!(!is_json_number(bad), "{bad}");
        }
    }

    #[test]
    fn literals() {
        assert!(is_json_literal("true"));
        assert!(is_json_literal("false"));
        assert!(is_json_literal("null"));
        assert!(is_json_literal("18446744073709551615"));
        assert!(!is_json_literal("True"));
        assert!(!is_json_literal("hello"));
        assert!(!is_json_literal(""));
    }
}
