//! Scanner for the packed `;`-separated records in the session file.
//!
//! Multi-field state is stored in single values such as
//! `1;0;1;0;42;/tmp/fib.bas` (document record) or `50;50;800;600` (window
//! placement). [`FieldScanner`] walks such a value left to right: each
//! [`next_integer`](FieldScanner::next_integer) call consumes one unsigned
//! decimal run plus a single trailing separator, and
//! [`rest`](FieldScanner::rest) returns whatever remains, which is how the
//! path field at the end of a document record is taken verbatim.
//!
//! ```rust
//! use session_core::FieldScanner;
//!
//! let mut scanner = FieldScanner::new("1;0;42;/tmp/fib.bas");
//! assert_eq!(scanner.next_integer(), 1);
//! assert_eq!(scanner.next_integer(), 0);
//! assert_eq!(scanner.next_integer(), 42);
//! assert_eq!(scanner.rest(), "/tmp/fib.bas");
//! ```

/// Cursor over one packed record value.
#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> FieldScanner<'a> {
    /// Starts a scan at the beginning of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Consumes and returns the next unsigned decimal integer field.
    ///
    /// Digits are accumulated until the first non-digit or the end of input;
    /// if the byte after the digit run is a `;` the cursor steps past it, so
    /// consecutive calls walk consecutive fields. An empty run yields `0`,
    /// indistinguishable from an explicit `0`: records carry a fixed field
    /// count rather than sentinel values. Values too large for `usize`
    /// saturate instead of wrapping.
    pub fn next_integer(&mut self) -> usize {
        let bytes = self.text.as_bytes();
        let mut result: usize = 0;
        while self.cursor < bytes.len() && bytes[self.cursor].is_ascii_digit() {
            let digit = usize::from(bytes[self.cursor] - b'0');
            result = result.saturating_mul(10).saturating_add(digit);
            self.cursor += 1;
        }
        if self.cursor < bytes.len() && bytes[self.cursor] == b';' {
            self.cursor += 1;
        }
        result
    }

    /// Returns everything after the last consumed field.
    ///
    /// The cursor only advances over ASCII digits and separators, so the
    /// split is always on a character boundary.
    pub fn rest(&self) -> &'a str {
        &self.text[self.cursor..]
    }

    /// Current byte offset into the scanned value.
    pub fn position(&self) -> usize {
        self.cursor
    }
}
