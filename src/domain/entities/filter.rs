use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::domain::entities::labels::facet_label;

pub const FACET_KEYS: [&str; 8] = [
    "type", "subtype", "kind", "cost", "attack", "defence", "set", "rarity",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn from_json(value: &Value) -> Option<Scalar> {
        match value {
            Value::String(text) => Some(Scalar::Text(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .map(Scalar::Int)
                .or_else(|| number.as_f64().map(Scalar::Float)),
            Value::Bool(flag) => Some(Scalar::Text(flag.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub key: String,
    pub value: Scalar,
    pub label: String,
}

impl FilterSelection {
    pub fn new(key: impl Into<String>, value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn chip_text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InClause {
    pub values: Vec<Scalar>,
}

impl Serialize for InClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InClause", 1)?;
        state.serialize_field("_in", &self.values)?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPredicate {
    entries: Vec<(String, InClause)>,
}

impl FilterPredicate {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InClause)> {
        self.entries
            .iter()
            .map(|(key, clause)| (key.as_str(), clause))
    }

    fn push(&mut self, key: &str, value: Scalar) {
        match self.entries.iter_mut().find(|(entry_key, _)| entry_key == key) {
            Some((_, clause)) => clause.values.push(value),
            None => self.entries.push((
                key.to_string(),
                InClause {
                    values: vec![value],
                },
            )),
        }
    }
}

impl Serialize for FilterPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, clause) in &self.entries {
            map.serialize_entry(key, clause)?;
        }
        map.end()
    }
}

pub fn aggregate(selections: &[FilterSelection]) -> FilterPredicate {
    let mut predicate = FilterPredicate::default();
    for selection in selections {
        predicate.push(&selection.key, selection.value.clone());
    }
    predicate
}

// Selections are matched by value only, so equal values under different keys
// toggle each other.
pub fn is_selected(selections: &[FilterSelection], value: &Scalar) -> bool {
    selections.iter().any(|selection| &selection.value == value)
}

pub fn remove_value(selections: &[FilterSelection], value: &Scalar) -> Vec<FilterSelection> {
    selections
        .iter()
        .filter(|selection| &selection.value != value)
        .cloned()
        .collect()
}

pub fn toggle(selections: &[FilterSelection], candidate: &FilterSelection) -> Vec<FilterSelection> {
    if is_selected(selections, &candidate.value) {
        return remove_value(selections, &candidate.value);
    }
    let mut next = selections.to_vec();
    next.push(candidate.clone());
    next
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterFacet {
    pub key: String,
    pub label: String,
    pub values: Vec<FilterSelection>,
}

impl FilterFacet {
    pub fn matching(&self, keyword: &str) -> Vec<FilterSelection> {
        let needle = keyword.to_lowercase();
        self.values
            .iter()
            .filter(|selection| selection.value.to_string().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

pub fn facets_from_response(game: &str, data: &Value) -> Vec<FilterFacet> {
    FACET_KEYS
        .iter()
        .filter_map(|key| {
            let rows = data.get(*key)?.as_array()?;
            let label = facet_label(game, key);
            let values: Vec<FilterSelection> = rows
                .iter()
                .filter_map(|row| row.get(*key).and_then(Scalar::from_json))
                .map(|value| FilterSelection::new(*key, value, label.clone()))
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(FilterFacet {
                key: key.to_string(),
                label,
                values,
            })
        })
        .collect()
}
