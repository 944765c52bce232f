use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Paragraph style ids for headings, Heading 1 first.
pub const HEADING_STYLE_ID: [&str; 4] = ["Heading1", "Heading2", "Heading3", "Heading4"];

/// Style id for plain body text.
pub const NORMAL_STYLE_ID: &str = "Normal";

/// Reference from a paragraph (or style) to a numbering definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingRef {
    pub num_id: String,
    /// Indent level of the list item, 0 being the outermost.
    #[serde(default)]
    pub level: u8,
}

/// Paragraph formatting carried by every block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<NumberingRef>,
}

/// A paragraph style definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDef {
    /// Outline level for heading styles, 0 being Heading 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<NumberingRef>,
}

/// Paragraph styles by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet(pub BTreeMap<String, StyleDef>);

impl StyleSheet {
    pub fn get(&self, style_id: &str) -> Option<&StyleDef> {
        self.0.get(style_id)
    }

    pub fn insert(&mut self, style_id: impl Into<String>, def: StyleDef) {
        self.0.insert(style_id.into(), def);
    }
}

impl Default for StyleSheet {
    /// `Normal` plus `Heading1`..`Heading4`.
    fn default() -> Self {
        let mut styles = BTreeMap::new();
        styles.insert(NORMAL_STYLE_ID.to_string(), StyleDef::default());
        for (level, id) in HEADING_STYLE_ID.iter().enumerate() {
            styles.insert(
                id.to_string(),
                StyleDef {
                    outline_level: Some(level as u8),
                    numbering: None,
                },
            );
        }
        Self(styles)
    }
}

/// Number format of a list definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    Decimal,
    Bullet,
    #[serde(untagged)]
    Other(String),
}

/// A numbering definition paragraphs can refer to by `num_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingDef {
    pub num_id: String,
    pub format: NumberFormat,
}

/// Finds the first numbering definition with the given format.
pub fn num_id_for(numbering: &[NumberingDef], format: &NumberFormat) -> Option<String> {
    numbering
        .iter()
        .find(|def| &def.format == format)
        .map(|def| def.num_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_has_heading_outline_levels() {
        let styles = StyleSheet::default();
        assert_eq!(styles.get("Heading1").unwrap().outline_level, Some(0));
        assert_eq!(styles.get("Heading4").unwrap().outline_level, Some(3));
        assert_eq!(styles.get("Normal").unwrap().outline_level, None);
    }

    #[test]
    fn finds_numbering_by_format() {
        let numbering = vec![
            NumberingDef {
                num_id: "1".into(),
                format: NumberFormat::Bullet,
            },
            NumberingDef {
                num_id: "2".into(),
                format: NumberFormat::Decimal,
            },
        ];
        assert_eq!(
            num_id_for(&numbering, &NumberFormat::Decimal),
            Some("2".to_string())
        );
        assert_eq!(
            num_id_for(&numbering, &NumberFormat::Other("lowerRoman".into())),
            None
        );
    }

    #[test]
    fn unknown_number_format_round_trips() {
        let format: NumberFormat = serde_json::from_str(r#""lowerRoman""#).unwrap();
        assert_eq!(format, NumberFormat::Other("lowerRoman".into()));
        let format: NumberFormat = serde_json::from_str(r#""bullet""#).unwrap();
        assert_eq!(format, NumberFormat::Bullet);
    }
}
