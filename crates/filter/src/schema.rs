use crate::{dialect::TranslatorDialect, identifier::Identifier, translator::Translator};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Declared identifiers, usually loaded from a JSON document:
///
/// ```json
/// {
///   "dialect": "postgres",
///   "identifiers": [
///     { "name": "age", "type": "int" },
///     { "name": "doc", "column": "document", "type": "json", "json": { "title": "string" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub dialect: TranslatorDialect,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
}

impl Schema {
    pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let schema = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            identifiers = schema.identifiers.len(),
            "Loaded schema"
        );
        Ok(schema)
    }

    pub fn into_translator(self) -> Translator {
        Translator::new(self.identifiers, self.dialect)
    }
}
