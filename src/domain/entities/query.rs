use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::domain::entities::filter::FilterPredicate;
use crate::domain::entities::page::PageState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Set,
    Rarity,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Set, SortKey::Rarity];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Set => "set",
            SortKey::Rarity => "rarity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Set => "Set",
            SortKey::Rarity => "Rarity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort value: {0}")]
pub struct UnknownSortValue(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownSortValue(value.to_string()))
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == value)
            .ok_or_else(|| UnknownSortValue(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryVariables {
    pub name_like: String,
    pub category: String,
    pub predicate: FilterPredicate,
    pub sort_key: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
    pub limit: i64,
    pub offset: i64,
}

pub fn build(
    search: &str,
    category: &str,
    predicate: &FilterPredicate,
    sort: SortSpec,
    page: &PageState,
) -> QueryVariables {
    QueryVariables {
        name_like: format!("%{search}%"),
        category: category.to_string(),
        predicate: predicate.clone(),
        sort_key: sort.key,
        sort_direction: sort.direction,
        limit: page.page_size,
        offset: page.offset(),
    }
}

impl QueryVariables {
    pub fn where_clause(&self) -> Value {
        let mut clause = Map::new();
        clause.insert("name".to_string(), json!({ "_ilike": self.name_like }));
        clause.insert("tcg".to_string(), json!({ "_eq": self.category }));
        // Distinct keys are OR-ed together; an empty `_or` would match nothing.
        if !self.predicate.is_empty() {
            let alternatives: Vec<Value> = self
                .predicate
                .iter()
                .map(|(key, in_clause)| json!({ key: in_clause }))
                .collect();
            clause.insert("_or".to_string(), Value::Array(alternatives));
        }
        Value::Object(clause)
    }

    pub fn order_by(&self) -> Option<Value> {
        let direction = self.sort_direction?;
        let key = self.sort_key.unwrap_or(SortKey::Set);
        Some(json!({ key.as_str(): direction.as_str() }))
    }

    pub fn to_list_variables(&self) -> Value {
        let mut variables = Map::new();
        variables.insert("where".to_string(), self.where_clause());
        if let Some(order_by) = self.order_by() {
            variables.insert("order_by".to_string(), order_by);
        }
        variables.insert("limit".to_string(), json!(self.limit));
        variables.insert("offset".to_string(), json!(self.offset));
        Value::Object(variables)
    }

    pub fn to_count_variables(&self) -> Value {
        json!({ "where": self.where_clause() })
    }
}
