/// Whether a delimiter pair produces bold or italic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Strong,
    Emphasis,
}

/// An emphasis delimiter and the rules for where it may open and close.
#[derive(Debug, Clone, Copy)]
pub struct Emphasis {
    pub delim: &'static str,
    pub kind: EmphasisKind,
    /// Underscore delimiters never open or close inside a word.
    pub intraword: bool,
}

impl Emphasis {
    pub const STAR_STRONG: Emphasis = Emphasis {
        delim: "**",
        kind: EmphasisKind::Strong,
        intraword: true,
    };
    pub const UNDERSCORE_STRONG: Emphasis = Emphasis {
        delim: "__",
        kind: EmphasisKind::Strong,
        intraword: false,
    };
    pub const STAR: Emphasis = Emphasis {
        delim: "*",
        kind: EmphasisKind::Emphasis,
        intraword: true,
    };
    pub const UNDERSCORE: Emphasis = Emphasis {
        delim: "_",
        kind: EmphasisKind::Emphasis,
        intraword: false,
    };

    /// Precedence order, outermost first.
    pub const LAYERS: [Emphasis; 4] = [
        Self::STAR_STRONG,
        Self::UNDERSCORE_STRONG,
        Self::STAR,
        Self::UNDERSCORE,
    ];

    fn delim_char(&self) -> char {
        self.delim.chars().next().unwrap_or('*')
    }

    /// Whether the delimiter at byte `at` of `s` is a standalone run of
    /// exactly this delimiter (`*` next to another `*` is not).
    fn is_run(&self, s: &str, at: usize) -> bool {
        let c = self.delim_char();
        let end = at + self.delim.len();
        s.get(at..end) == Some(self.delim)
            && s[..at].chars().next_back() != Some(c)
            && s[end..].chars().next() != Some(c)
    }

    pub fn can_open(&self, s: &str, at: usize) -> bool {
        if !self.is_run(s, at) {
            return false;
        }
        let next = s[at + self.delim.len()..].chars().next();
        let prev = s[..at].chars().next_back();
        next.is_some_and(|c| !c.is_whitespace())
            && (self.intraword || !prev.is_some_and(char::is_alphanumeric))
    }

    pub fn can_close(&self, s: &str, at: usize) -> bool {
        if !self.is_run(s, at) {
            return false;
        }
        let next = s[at + self.delim.len()..].chars().next();
        let prev = s[..at].chars().next_back();
        prev.is_some_and(|c| !c.is_whitespace())
            && (self.intraword || !next.is_some_and(char::is_alphanumeric))
    }
}
