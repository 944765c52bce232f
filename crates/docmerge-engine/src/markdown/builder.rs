use crate::document::RunFormat;

/// Structural style of a rendered paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    Body,
    /// Heading at level (0 = Heading 1).
    Heading(u8),
    /// Numbered list item at indent level (0 = outermost).
    ListOrdered(u8),
    /// Bulleted list item at indent level (0 = outermost).
    ListUnordered(u8),
    Preformatted,
}

/// Sink for rendered Markdown.
///
/// Events arrive as: `new_paragraph`, then the paragraph's runs and
/// hyperlinks, repeated per paragraph, then a single `end`.
pub trait DocumentBuilder {
    fn new_paragraph(&mut self, kind: ParagraphKind);
    fn add_run(&mut self, text: &str, format: &RunFormat);
    fn add_hyperlink(&mut self, text: &str, url: &str);
    fn end(&mut self) {}
}

/// A recorded [`DocumentBuilder`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    NewParagraph(ParagraphKind),
    Run(String, RunFormat),
    Hyperlink(String, String),
    End,
}

/// Records events, mainly for inspecting what a renderer produced.
impl DocumentBuilder for Vec<RenderEvent> {
    fn new_paragraph(&mut self, kind: ParagraphKind) {
        self.push(RenderEvent::NewParagraph(kind));
    }

    fn add_run(&mut self, text: &str, format: &RunFormat) {
        self.push(RenderEvent::Run(text.to_string(), format.clone()));
    }

    fn add_hyperlink(&mut self, text: &str, url: &str) {
        self.push(RenderEvent::Hyperlink(text.to_string(), url.to_string()));
    }

    fn end(&mut self) {
        self.push(RenderEvent::End);
    }
}
