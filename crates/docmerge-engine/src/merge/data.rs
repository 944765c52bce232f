//! The hierarchical data context a merge draws field values from.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::MergeField;

use super::relation::Relation;

/// One object: field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// What an object type is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectData {
    List(Vec<Record>),
    Single(Record),
}

/// Merge data as loaded: object type to its record or records.
pub type Bindings = BTreeMap<String, ObjectData>;

/// The text shown for a field value. `null` is no value; arrays are
/// joined with `", "`.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_to_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// A scope of merge data.
///
/// List-typed objects are iterated lazily: the first [`get_data`] for a
/// type starts it at its first record, and [`next_section`] moves on every
/// type read since the previous call. While a type is iterated, other list
/// types are narrowed to the records related to its current record.
///
/// [`get_data`]: MergeData::get_data
/// [`next_section`]: MergeData::next_section
pub struct MergeData<'r> {
    /// Bindings this scope was created with.
    source: Bindings,
    /// `source` with non-iterated lists narrowed.
    current: Bindings,
    indices: BTreeMap<String, usize>,
    /// Types read since the last `next_section`.
    dirty: BTreeSet<String>,
    relation: &'r dyn Relation,
}

impl<'r> MergeData<'r> {
    pub fn new(bindings: Bindings, relation: &'r dyn Relation) -> Self {
        Self {
            current: bindings.clone(),
            source: bindings,
            indices: BTreeMap::new(),
            dirty: BTreeSet::new(),
            relation,
        }
    }

    /// Value of `type.field` and whether it comes from the last record of
    /// its list. Anything unresolvable is `(None, true)`.
    pub fn get_data(&mut self, name: &str) -> (Option<String>, bool) {
        let Some((object_type, field)) = MergeField::split(name) else {
            return (None, true);
        };
        match self.current.get(object_type) {
            None => (None, true),
            Some(ObjectData::Single(record)) => (record.get(field).and_then(value_to_text), true),
            Some(ObjectData::List(records)) => {
                let index = *self.indices.entry(object_type.to_string()).or_insert(0);
                self.dirty.insert(object_type.to_string());
                match records.get(index) {
                    Some(record) => (
                        record.get(field).and_then(value_to_text),
                        index + 1 == records.len(),
                    ),
                    None => (None, true),
                }
            }
        }
    }

    /// The scope for the children of the current section: iterated types
    /// become their current record (or an empty list once exhausted) and
    /// other lists are narrowed to what relates to those records.
    pub fn deeper_data(&self) -> MergeData<'r> {
        let mut bindings = self.narrowed();
        for (object_type, &index) in &self.indices {
            if let Some(ObjectData::List(records)) = self.current.get(object_type) {
                let promoted = match records.get(index) {
                    Some(record) => ObjectData::Single(record.clone()),
                    None => ObjectData::List(vec![]),
                };
                bindings.insert(object_type.clone(), promoted);
            }
        }
        MergeData::new(bindings, self.relation)
    }

    /// Advances every type read since the previous call.
    pub fn next_section(&mut self) {
        for object_type in std::mem::take(&mut self.dirty) {
            if let Some(index) = self.indices.get_mut(&object_type) {
                *index += 1;
                log::debug!("Advanced {object_type} to record {index}");
            }
        }
        self.current = self.narrowed();
    }

    /// Starts every list over at its first record. Called when the owning
    /// section wraps; the types stay iterated, so later children are still
    /// scoped to record 0.
    pub fn reset_iterations(&mut self) {
        if !self.indices.is_empty() {
            log::debug!("Reset iterations of {:?}", self.indices.keys());
        }
        for index in self.indices.values_mut() {
            *index = 0;
        }
        self.dirty.clear();
        self.current = self.narrowed();
    }

    /// Current record of each iterated type.
    fn iterated_records(&self) -> Vec<(&str, &Record)> {
        self.indices
            .iter()
            .filter_map(|(object_type, &index)| match self.current.get(object_type) {
                Some(ObjectData::List(records)) => {
                    records.get(index).map(|r| (object_type.as_str(), r))
                }
                _ => None,
            })
            .collect()
    }

    /// Bindings with every non-iterated list narrowed from `source`.
    /// Iterated lists keep the records they started with.
    fn narrowed(&self) -> Bindings {
        let iterated = self.iterated_records();
        let mut out = self.source.clone();
        for (object_type, data) in out.iter_mut() {
            if self.indices.contains_key(object_type) {
                if let Some(kept) = self.current.get(object_type) {
                    *data = kept.clone();
                }
                continue;
            }
            let ObjectData::List(records) = data else {
                continue;
            };
            for (to_type, to_record) in &iterated {
                if let Some(subset) = self
                    .relation
                    .related(object_type, records, to_type, to_record)
                {
                    *records = subset;
                }
            }
        }
        out
    }
}
