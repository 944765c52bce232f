#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

/// Fenced code block delimiters: three or more backticks or tildes,
/// optionally followed by a language tag that is ignored. After a backtick
/// run the tag may not contain a backtick, so "```x```" stays inline.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Whether a line (leading whitespace allowed) opens or closes a fence.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            let info = t.trim_start_matches('`');
            (!info.contains('`')).then_some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    /// A fence is closed by any fence line of the same character.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        sig == Some(open)
    }
}
