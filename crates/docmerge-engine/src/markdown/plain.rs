use crate::document::RunFormat;

use super::builder::{DocumentBuilder, ParagraphKind};

/// Flattens rendered Markdown into plain text.
///
/// Paragraphs are joined with `\n`; hyperlinks contribute their text.
#[derive(Debug, Default)]
pub struct PlainTextBuilder {
    paragraphs: Vec<String>,
}

impl PlainTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }

    fn current(&mut self) -> &mut String {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(String::new());
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }
}

impl DocumentBuilder for PlainTextBuilder {
    fn new_paragraph(&mut self, _kind: ParagraphKind) {
        self.paragraphs.push(String::new());
    }

    fn add_run(&mut self, text: &str, _format: &RunFormat) {
        self.current().push_str(text);
    }

    fn add_hyperlink(&mut self, text: &str, _url: &str) {
        self.current().push_str(text);
    }
}
