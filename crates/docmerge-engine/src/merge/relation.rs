//! Relations between object types, used to narrow a child scope's lists to
//! the records related to the record being iterated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data::{Record, value_to_text};

/// Answers which of `from_records` relate to `to_record`.
///
/// `None` means no relation is defined between the two types, so the
/// records are not narrowed at all. `Some(vec![])` means a relation exists
/// and nothing matches.
pub trait Relation {
    fn related(
        &self,
        from_type: &str,
        from_records: &[Record],
        to_type: &str,
        to_record: &Record,
    ) -> Option<Vec<Record>>;
}

impl<F> Relation for F
where
    F: Fn(&str, &[Record], &str, &Record) -> Option<Vec<Record>>,
{
    fn related(
        &self,
        from_type: &str,
        from_records: &[Record],
        to_type: &str,
        to_record: &Record,
    ) -> Option<Vec<Record>> {
        self(from_type, from_records, to_type, to_record)
    }
}

/// No relations at all: lists are never narrowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrelated;

impl Relation for Unrelated {
    fn related(&self, _: &str, _: &[Record], _: &str, _: &Record) -> Option<Vec<Record>> {
        None
    }
}

/// How a record of one type points at a record of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationKind {
    /// `from.field == prefix + to.target_field`, e.g. `"#101"` referencing
    /// internal id `101`.
    Reference {
        field: String,
        target_field: String,
        #[serde(default)]
        prefix: String,
    },
    /// `from.field` is one of the values in the array `to.target_field`.
    Membership { field: String, target_field: String },
}

/// A relation from records of type `from` to a record of type `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRule {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub kind: RelationKind,
}

impl RelationRule {
    pub fn matches(&self, from_record: &Record, to_record: &Record) -> bool {
        match &self.kind {
            RelationKind::Reference {
                field,
                target_field,
                prefix,
            } => {
                let from = from_record.get(field).and_then(value_to_text);
                let to = to_record
                    .get(target_field)
                    .and_then(value_to_text)
                    .map(|t| format!("{prefix}{t}"));
                from.is_some() && from == to
            }
            RelationKind::Membership {
                field,
                target_field,
            } => {
                let Some(from) = from_record.get(field).and_then(value_to_text) else {
                    return false;
                };
                match to_record.get(target_field) {
                    Some(Value::Array(items)) => items
                        .iter()
                        .any(|item| value_to_text(item).as_deref() == Some(from.as_str())),
                    Some(single) => value_to_text(single).as_deref() == Some(from.as_str()),
                    None => false,
                }
            }
        }
    }
}

/// A set of relation rules; the first rule for a `(from, to)` pair applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationTable(pub Vec<RelationRule>);

impl RelationTable {
    pub fn new(rules: Vec<RelationRule>) -> Self {
        Self(rules)
    }

    fn rule(&self, from_type: &str, to_type: &str) -> Option<&RelationRule> {
        self.0
            .iter()
            .find(|rule| rule.from == from_type && rule.to == to_type)
    }
}

impl Relation for RelationTable {
    fn related(
        &self,
        from_type: &str,
        from_records: &[Record],
        to_type: &str,
        to_record: &Record,
    ) -> Option<Vec<Record>> {
        let rule = self.rule(from_type, to_type)?;
        Some(
            from_records
                .iter()
                .filter(|r| rule.matches(r, to_record))
                .cloned()
                .collect(),
        )
    }
}
