//! Structural skip routines.
//!
//! These advance a caret exactly past one well-formed JSON value without
//! decoding it; the decoder uses them for unknown fields and for values of
//! `Other`-kind types. They never fail: on a truncated buffer the caret is
//! left at the end, and the caller's next required-character check reports
//! the problem.
//!
//! Escape handling is the one place nesting and quoting interact. All three
//! routines treat a backslash as escaping exactly the next byte (advance by
//! two); getting this wrong would silently corrupt skip boundaries for
//! unrelated fields.

use typed_json_caret::Caret;

/// Skip a balanced `open`..`close` scope. Precondition: caret at `open`.
///
/// Walks forward counting nesting depth of `open`/`close`, ignoring both
/// while inside a quoted string (a boolean toggled on each unescaped `"`).
/// Stops just past the matching `close` when depth returns to zero.
pub fn skip_scope(caret: &mut Caret, open: u8, close: u8) {
    let data = caret.data();
    let size = data.len();
    let mut pos = caret.position();
    let mut depth: i64 = 0;
    let mut in_string = false;

    while pos < size {
        let b = data[pos];
        if b == open {
            if !in_string {
                depth += 1;
            }
        } else if b == close {
            if !in_string {
                depth -= 1;
                if depth == 0 {
                    caret.set_position(pos + 1);
                    return;
                }
            }
        } else if b == b'"' {
            in_string = !in_string;
        } else if b == b'\\' {
            pos += 1;
        }
        pos += 1;
    }
    caret.set_position(pos);
}

/// Skip a quoted string. Precondition: caret at the opening `"`.
///
/// Counts quote characters rather than toggling a state flag: a string has
/// exactly two unescaped quotes at its boundary. Stops after the second.
pub fn skip_string(caret: &mut Caret) {
    let data = caret.data();
    let size = data.len();
    let mut pos = caret.position();
    let mut quotes = 0;

    while pos < size {
        let b = data[pos];
        if b == b'"' {
            quotes += 1;
            if quotes == 2 {
                caret.set_position(pos + 1);
                return;
            }
        } else if b == b'\\' {
            pos += 1;
        }
        pos += 1;
    }
    caret.set_position(pos);
}

/// Skip a bare literal (`true`, `false`, `null`, a number): advance until
/// whitespace or one of the structural delimiters `}` `,` `]`, without
/// consuming the delimiter.
pub fn skip_token(caret: &mut Caret) {
    let data = caret.data();
    let size = data.len();
    let mut pos = caret.position();

    while pos < size {
        match data[pos] {
            b' ' | b'\t' | b'\n' | b'\r' | 0x08 | 0x0c | b'}' | b',' | b']' => break,
            _ => pos += 1,
        }
    }
    caret.set_position(pos);
}

/// Skip one JSON value of any shape, dispatching on the current byte.
pub fn skip_value(caret: &mut Caret) {
    match caret.peek() {
        Some(b'{') => skip_scope(caret, b'{', b'}'),
        Some(b'[') => skip_scope(caret, b'[', b']'),
        Some(b'"') => skip_string(caret),
        _ => skip_token(caret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped(input: &[u8], skip: fn(&mut Caret)) -> usize {
        let mut caret = Caret::new(input);
        skip(&mut caret);
        caret.position()
    }

    #[test]
    fn test_skip_scope_flat() {
        let input = b"{\"a\":1},";
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'{', b'}');
        assert_eq!(caret.position(), input.len() - 1);
        assert!(caret.at(b','));
    }

    #[test]
    fn test_skip_scope_nested() {
        let input = b"{\"a\":{\"b\":{}}}tail";
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'{', b'}');
        assert_eq!(caret.position(), 14);
        assert!(caret.at(b't'));
    }

    #[test]
    fn test_skip_scope_close_char_inside_string() {
        // The '}' inside the string value must not affect depth
        let input = b"{\"a\": \"}\", \"b\": [1,2]}";
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'{', b'}');
        assert_eq!(caret.position(), input.len());
    }

    #[test]
    fn test_skip_scope_escaped_quote_inside_string() {
        // The escaped quote must not end the string early; the '}' after it
        // is still string content
        let input = br#"{"a": "\"}", "b": 1} "#;
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'{', b'}');
        assert_eq!(caret.position(), input.len() - 1);
    }

    #[test]
    fn test_skip_scope_brackets() {
        let input = b"[[1,2],[3]]x";
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'[', b']');
        assert!(caret.at(b'x'));
    }

    #[test]
    fn test_skip_scope_truncated_leaves_caret_at_end() {
        let input = b"{\"a\": {";
        let mut caret = Caret::new(input);
        skip_scope(&mut caret, b'{', b'}');
        assert_eq!(caret.position(), input.len());
        assert!(!caret.can_continue());
    }

    #[test]
    fn test_skip_string() {
        assert_eq!(skipped(b"\"ab\"cd", skip_string), 4);
        assert_eq!(skipped(b"\"\"x", skip_string), 2);
    }

    #[test]
    fn test_skip_string_escaped_pairs() {
        // `\"` and `\\` are escaped pairs; the final quote terminates
        let input = br#""ab\"cd\\"tail"#;
        assert_eq!(skipped(input, skip_string), 10);
    }

    #[test]
    fn test_skip_string_truncated() {
        assert_eq!(skipped(b"\"abc", skip_string), 4);
    }

    #[test]
    fn test_skip_token() {
        assert_eq!(skipped(b"true,1", skip_token), 4);
        assert_eq!(skipped(b"false}", skip_token), 5);
        assert_eq!(skipped(b"null]", skip_token), 4);
        assert_eq!(skipped(b"-12.5e3 ", skip_token), 7);
        // Runs to the end when no delimiter follows
        assert_eq!(skipped(b"12345", skip_token), 5);
    }

    #[test]
    fn test_skip_token_does_not_consume_delimiter() {
        let mut caret = Caret::new(b"42,");
        skip_token(&mut caret);
        assert!(caret.at(b','));
    }

    #[test]
    fn test_skip_value_dispatch() {
        assert_eq!(skipped(b"{\"a\":1} ", skip_value), 7);
        assert_eq!(skipped(b"[1,2] ", skip_value), 5);
        assert_eq!(skipped(b"\"s\" ", skip_value), 3);
        assert_eq!(skipped(b"12 ", skip_value), 2);
    }
}
