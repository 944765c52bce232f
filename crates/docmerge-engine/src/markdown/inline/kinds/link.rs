pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
}

/// `[text](url)`
pub struct MarkdownLink;

impl MarkdownLink {
    pub const TEXT_OPEN: &'static [u8; 1] = b"[";
    pub const TEXT_CLOSE: &'static [u8; 2] = b"](";
    pub const URL_CLOSE: &'static [u8; 1] = b")";
}
