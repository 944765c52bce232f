/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Byte offset where the item text starts (after marker and spacing).
    pub content_start: usize,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'*', b'+', b'-'];
    pub const ORDERED_SUFFIX: u8 = b'.';

    /// Detects `* `, `+ `, `- ` or `<digits>. ` after `indent` bytes of
    /// leading whitespace. The marker must be followed by whitespace or end
    /// of line, so `**bold**` is not a bullet.
    pub fn detect(line: &str, indent: usize) -> Option<ListMarker> {
        let b = line.as_bytes();
        let mut i = indent;
        let ordered = match b.get(i) {
            Some(c) if Self::BULLETS.contains(c) => {
                i += 1;
                false
            }
            Some(c) if c.is_ascii_digit() => {
                while b.get(i).is_some_and(u8::is_ascii_digit) {
                    i += 1;
                }
                if b.get(i) != Some(&Self::ORDERED_SUFFIX) {
                    return None;
                }
                i += 1;
                true
            }
            _ => return None,
        };

        match b.get(i) {
            None => {}
            Some(c) if c.is_ascii_whitespace() => {
                while b.get(i).is_some_and(u8::is_ascii_whitespace) {
                    i += 1;
                }
            }
            Some(_) => return None,
        }

        Some(ListMarker {
            ordered,
            content_start: i,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* item", 0, Some((false, 2)))]
    #[case("+ item", 0, Some((false, 2)))]
    #[case("- item", 0, Some((false, 2)))]
    #[case("    * item", 4, Some((false, 6)))]
    #[case("1. item", 0, Some((true, 3)))]
    #[case("12.  item", 0, Some((true, 5)))]
    #[case("-", 0, Some((false, 1)))]
    #[case("**bold**", 0, None)]
    #[case("1.5 apples", 0, None)]
    #[case("12 items", 0, None)]
    #[case("text", 0, None)]
    fn detects_markers(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] expected: Option<(bool, usize)>,
    ) {
        let found = ListMarker::detect(line, indent).map(|m| (m.ordered, m.content_start));
        assert_eq!(found, expected);
    }
}
