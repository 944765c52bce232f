use std::sync::OnceLock;

use regex::Regex;

/// Merge field token grammar: `WHITESPACE* MERGEFIELD WHITESPACE+ <name> WHITESPACE*`.
pub struct MergeField;

impl MergeField {
    pub const KEYWORD: &'static str = "MERGEFIELD";

    fn regex() -> &'static Regex {
        static MERGEFIELD_REGEX: OnceLock<Regex> = OnceLock::new();
        MERGEFIELD_REGEX.get_or_init(|| {
            Regex::new(r"^\s*MERGEFIELD\s+(.*?)\s*$").expect("Invalid MERGEFIELD regex")
        })
    }

    /// Returns the field name if `instruction` is a merge field instruction.
    pub fn parse(instruction: &str) -> Option<&str> {
        let caps = Self::regex().captures(instruction)?;
        let name = caps.get(1)?.as_str();
        if name.is_empty() { None } else { Some(name) }
    }

    /// Splits `object_type.field_name`; anything but exactly one dot is malformed.
    pub fn split(name: &str) -> Option<(&str, &str)> {
        let (object_type, field) = name.split_once('.')?;
        if field.contains('.') {
            return None;
        }
        Some((object_type, field))
    }
}
