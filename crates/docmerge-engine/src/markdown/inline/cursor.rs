/// A byte cursor over one inline segment.
///
/// Delimiters are all ASCII, so every position the cursor stops at while
/// matching one is a valid `str` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|b| b.starts_with(pat))
    }

    /// Advances past the current character (not just one byte), so that
    /// slicing at `i` stays valid for non-ASCII text.
    pub fn bump(&mut self) {
        if let Some(c) = self.s.get(self.i..).and_then(|r| r.chars().next()) {
            self.i += c.len_utf8();
        } else {
            self.i += 1;
        }
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until the remaining input starts with `pat`, returning the
    /// skipped slice, or `None` (cursor untouched) when `pat` never occurs.
    pub fn take_until(&mut self, pat: &[u8]) -> Option<&'a str> {
        let (s, start) = (self.s, self.i);
        let mut probe = self.clone();
        while !probe.eof() {
            if probe.starts_with(pat) {
                self.i = probe.i;
                return Some(&s[start..probe.i]);
            }
            probe.bump();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        cur.bump();
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("[[link]]");
        assert!(cur.starts_with(b"[["));
        assert!(!cur.starts_with(b"]]"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn bump_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("é`");
        cur.bump();
        assert_eq!(cur.peek(), Some(b'`'));
    }

    #[test]
    fn take_until_finds_pattern() {
        let mut cur = Cursor::new("target]] rest");
        assert_eq!(cur.take_until(b"]]"), Some("target"));
        assert!(cur.starts_with(b"]]"));
    }

    #[test]
    fn take_until_missing_pattern_leaves_cursor() {
        let mut cur = Cursor::new("no close");
        assert_eq!(cur.take_until(b"]]"), None);
        assert_eq!(cur.i, 0);
    }
}
