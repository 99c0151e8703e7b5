//! Typed JSON literal parsers.
//!
//! Each parser consumes one literal token on success. On failure the caret
//! is left wherever the scan stopped; callers abort, so the exact resting
//! position after an error is not part of the contract.

use crate::{Caret, CaretError};

impl<'a> Caret<'a> {
    /// Parse a 32-bit integer literal.
    ///
    /// The whole number token is scanned (sign, digits, and any fraction or
    /// exponent tail), so `1.5` is a malformed int32 rather than a silently
    /// truncated `1`.
    pub fn parse_i32(&mut self) -> Result<i32, CaretError> {
        let start = self.pos;
        let token = self.number_token();
        parse_token(token).ok_or(CaretError::InvalidInt32(start))
    }

    /// Parse a 64-bit integer literal.
    pub fn parse_i64(&mut self) -> Result<i64, CaretError> {
        let start = self.pos;
        let token = self.number_token();
        parse_token(token).ok_or(CaretError::InvalidInt64(start))
    }

    /// Parse a 32-bit float literal.
    pub fn parse_f32(&mut self) -> Result<f32, CaretError> {
        let start = self.pos;
        let token = self.number_token();
        parse_token(token).ok_or(CaretError::InvalidFloat32(start))
    }

    /// Parse a 64-bit float literal.
    pub fn parse_f64(&mut self) -> Result<f64, CaretError> {
        let start = self.pos;
        let token = self.number_token();
        parse_token(token).ok_or(CaretError::InvalidFloat64(start))
    }

    /// Parse a boolean literal spelled as one of two given texts.
    pub fn parse_bool(&mut self, true_text: &[u8], false_text: &[u8]) -> Result<bool, CaretError> {
        if self.advance_if(true_text) {
            Ok(true)
        } else if self.advance_if(false_text) {
            Ok(false)
        } else {
            Err(CaretError::InvalidBoolean(self.pos))
        }
    }

    /// Parse a quoted JSON string literal, resolving escape sequences.
    pub fn parse_string(&mut self) -> Result<String, CaretError> {
        let start = self.pos;
        if !self.expect(b'"') {
            return Err(CaretError::StringOpenExpected(start));
        }
        let body_start = self.pos;
        let body_end = self.find_ending_quote(body_start, start)?;
        let s = unescape(&self.data[body_start..body_end], start)?;
        self.pos = body_end + 1;
        Ok(s)
    }

    /// Scan one number token: optional minus, digits, optional fraction,
    /// optional exponent. The token is handed to `str::parse` afterwards;
    /// scanning is deliberately permissive so that malformed tails become
    /// parse failures instead of stray unread bytes.
    fn number_token(&mut self) -> &'a [u8] {
        let data = self.data;
        let len = data.len();
        let start = self.pos;
        let mut x = self.pos;
        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.pos = x;
        &data[start..x]
    }

    /// Offset of the closing quote of the string body starting at `from`.
    /// A backslash skips its following byte.
    fn find_ending_quote(&self, from: usize, string_start: usize) -> Result<usize, CaretError> {
        let data = self.data;
        let mut x = from;
        while x < data.len() {
            match data[x] {
                b'"' => return Ok(x),
                b'\\' => x += 2,
                _ => x += 1,
            }
        }
        Err(CaretError::UnterminatedString(string_start))
    }
}

fn parse_token<T: std::str::FromStr>(token: &[u8]) -> Option<T> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Decode a JSON string body (between the quotes), resolving escapes.
fn unescape(bytes: &[u8], at: usize) -> Result<String, CaretError> {
    // Fast path: no backslash
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| CaretError::InvalidUtf8(at));
    }
    // Re-wrap in quotes and let serde_json resolve the escape sequences
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).map_err(|_| CaretError::InvalidEscape(at))
}
