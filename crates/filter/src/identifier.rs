use crate::types::IdentifierType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A column (or JSON document column) that filters may reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// Name used in the filter text.
    pub name: String,

    /// Physical column name emitted in SQL. Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    #[serde(rename = "type")]
    pub kind: IdentifierType,

    /// Shape of the document; only read for `json` identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<JsonTree>,
}

impl Identifier {
    pub fn new(name: impl Into<String>, kind: IdentifierType) -> Self {
        Self {
            name: name.into(),
            column: None,
            kind,
            json: None,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_json(mut self, json: JsonTree) -> Self {
        self.json = Some(json);
        self
    }

    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}

/// One level of a JSON document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonTree(HashMap<String, JsonElement>);

impl JsonTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, element: impl Into<JsonElement>) -> Self {
        self.0.insert(key.into(), element.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonElement> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A JSON property is either a nested object or a typed leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonElement {
    Leaf(IdentifierType),
    Tree(JsonTree),
}

impl From<IdentifierType> for JsonElement {
    fn from(value: IdentifierType) -> Self {
        JsonElement::Leaf(value)
    }
}

impl From<JsonTree> for JsonElement {
    fn from(value: JsonTree) -> Self {
        JsonElement::Tree(value)
    }
}
