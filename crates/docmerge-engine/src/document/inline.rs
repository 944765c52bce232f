use serde::{Deserialize, Serialize};

use super::field::MergeField;

/// Character style applied to runs inside a hyperlink.
pub const HYPERLINK_STYLE: &str = "InternetLink";

fn is_false(b: &bool) -> bool {
    !*b
}

/// Formatting flags of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    /// Rendered in the preformatted (fixed pitch) font.
    #[serde(default, skip_serializing_if = "is_false")]
    pub monospace: bool,
    /// Character style id, e.g. `InternetLink`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl RunFormat {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn monospace() -> Self {
        Self {
            monospace: true,
            ..Self::default()
        }
    }
}

/// A formatted span of text. Line breaks inside a run are kept as `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub format: RunFormat,
}

impl Run {
    pub fn new(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunFormat::plain())
    }
}

/// A hyperlink whose target lives in the document's relationship table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Relationship id resolving to the target URL.
    pub rel_id: String,
    pub runs: Vec<Run>,
}

/// A complex field: an instruction (e.g. ` MERGEFIELD req.title `) plus the
/// runs currently displayed as its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub instruction: String,
    #[serde(default)]
    pub result: Vec<Run>,
}

impl Field {
    /// A merge field for `name`, displaying `«name»` as Word does.
    pub fn merge(name: &str) -> Self {
        Self {
            instruction: format!(" {} {name} ", MergeField::KEYWORD),
            result: vec![Run::plain(format!("«{name}»"))],
        }
    }

    /// The merge field name, if this field is a merge field.
    pub fn merge_name(&self) -> Option<&str> {
        MergeField::parse(&self.instruction)
    }

    /// The formatting of the displayed result, used when the field is replaced.
    pub fn result_format(&self) -> RunFormat {
        self.result
            .first()
            .map(|r| r.format.clone())
            .unwrap_or_default()
    }
}

/// An item of paragraph content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Run(Run),
    Hyperlink(Hyperlink),
    Field(Field),
}

impl Inline {
    /// The text a reader sees for this item.
    pub fn visible_text(&self) -> String {
        match self {
            Inline::Run(run) => run.text.clone(),
            Inline::Hyperlink(link) => link.runs.iter().map(|r| r.text.as_str()).collect(),
            Inline::Field(field) => field.result.iter().map(|r| r.text.as_str()).collect(),
        }
    }

    /// Whether this item shows anything outside of a field.
    pub fn is_visible_outside_field(&self) -> bool {
        match self {
            Inline::Run(run) => !run.text.is_empty(),
            Inline::Hyperlink(_) => true,
            Inline::Field(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_field_has_name_and_placeholder_result() {
        let field = Field::merge("req.title");
        assert_eq!(field.merge_name(), Some("req.title"));
        assert_eq!(Inline::Field(field).visible_text(), "«req.title»");
    }

    #[test]
    fn non_merge_field_has_no_name() {
        let field = Field {
            instruction: " PAGE ".to_string(),
            result: vec![Run::plain("3")],
        };
        assert_eq!(field.merge_name(), None);
    }

    #[test]
    fn empty_runs_are_invisible() {
        assert!(!Inline::Run(Run::plain("")).is_visible_outside_field());
        assert!(Inline::Run(Run::plain(" ")).is_visible_outside_field());
    }

    #[test]
    fn inline_serializes_with_type_tag() {
        let json = serde_json::to_string(&Inline::Run(Run::new("x", RunFormat::bold()))).unwrap();
        assert_eq!(json, r#"{"type":"run","text":"x","format":{"bold":true}}"#);
    }
}
