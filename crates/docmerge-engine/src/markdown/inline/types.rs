/// A parsed inline node.
///
/// Unlike block text, inline nodes own their text: delimiters are consumed
/// and only the rendered content remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**strong**` or `__strong__`.
    Strong(Vec<InlineNode>),
    /// `*emphasis*` or `_emphasis_`.
    Emphasis(Vec<InlineNode>),
    /// A code span (backtick-delimited). This is a raw zone: no parsing inside.
    Code(String),
    /// `[[target]]`, `[[target|alias]]` or `[text](url)`.
    Link { text: String, url: String },
}

impl InlineNode {
    /// Text of the node with all markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            InlineNode::Text(t) | InlineNode::Code(t) => t.clone(),
            InlineNode::Link { text, .. } => text.clone(),
            InlineNode::Strong(children) | InlineNode::Emphasis(children) => {
                children.iter().map(InlineNode::plain_text).collect()
            }
        }
    }
}
