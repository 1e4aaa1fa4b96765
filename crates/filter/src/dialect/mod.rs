//! Defines the `Dialect` trait for database-specific SQL rendering.

pub mod postgres;

use crate::{
    identifier::JsonElement,
    operators::{BinaryOperatorDescriptor, UnaryOperatorDescriptor},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub use postgres::Postgres;

pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect (e.g., "PostgreSQL").
    fn name(&self) -> &'static str;

    /// Descriptor for a binary operator token of the expression language.
    fn binary_operator(&self, token: &str) -> Option<&BinaryOperatorDescriptor>;

    /// Descriptor for a unary operator token of the expression language.
    fn unary_operator(&self, token: &str) -> Option<&UnaryOperatorDescriptor>;

    /// Renders access of `key` on the JSON value `object`, where `element`
    /// is the declared shape of the accessed property. Scalar leaves are
    /// extracted as text and cast to their declared type.
    fn json_member(&self, object: &str, key: &str, element: &JsonElement) -> String;

    fn null_literal(&self) -> &'static str;

    /// Quotes `value` as a string literal, escaping embedded quotes.
    fn string_literal(&self, value: &str) -> String;

    fn bool_literal(&self, value: bool) -> &'static str;
}

/// Selects the SQL dialect a translator renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorDialect {
    #[default]
    Postgres,
}

impl TranslatorDialect {
    pub fn dialect(&self) -> &'static dyn Dialect {
        match self {
            TranslatorDialect::Postgres => &Postgres,
        }
    }
}

impl FromStr for TranslatorDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(TranslatorDialect::Postgres),
            other => Err(format!("Unsupported dialect: {other}")),
        }
    }
}

impl fmt::Display for TranslatorDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorDialect::Postgres => write!(f, "postgres"),
        }
    }
}
