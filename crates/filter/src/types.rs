use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag carried by every translated sub-expression.
///
/// Literal kinds describe values written in the filter text, identifier
/// kinds describe references to declared columns or JSON fields. The two
/// families never compare equal; operator constraints list the exact
/// pairs they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Nil,
    Int,
    Float,
    Bool,
    String,
    Timestamp,
    IntIdentifier,
    FloatIdentifier,
    BoolIdentifier,
    StringIdentifier,
    TimestampIdentifier,
    JsonIdentifier,
}

impl ExprType {
    pub fn is_bool(&self) -> bool {
        matches!(self, ExprType::Bool | ExprType::BoolIdentifier)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, ExprType::Int | ExprType::IntIdentifier)
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprType::Nil => "expr_nil",
            ExprType::Int => "expr_int",
            ExprType::Float => "expr_float",
            ExprType::Bool => "expr_bool",
            ExprType::String => "expr_string",
            ExprType::Timestamp => "expr_timestamp",
            ExprType::IntIdentifier => "int",
            ExprType::FloatIdentifier => "float",
            ExprType::BoolIdentifier => "bool",
            ExprType::StringIdentifier => "string",
            ExprType::TimestampIdentifier => "timestamp",
            ExprType::JsonIdentifier => "json",
        };
        write!(f, "{}", name)
    }
}

/// Declared type of a column or JSON field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    Int,
    Float,
    Bool,
    String,
    Timestamp,
    Json,
}

impl From<IdentifierType> for ExprType {
    fn from(value: IdentifierType) -> Self {
        match value {
            IdentifierType::Int => ExprType::IntIdentifier,
            IdentifierType::Float => ExprType::FloatIdentifier,
            IdentifierType::Bool => ExprType::BoolIdentifier,
            IdentifierType::String => ExprType::StringIdentifier,
            IdentifierType::Timestamp => ExprType::TimestampIdentifier,
            IdentifierType::Json => ExprType::JsonIdentifier,
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ExprType::from(*self))
    }
}

/// SQL text of a sub-expression together with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub expr: String,
    pub ty: ExprType,
}

impl TranslationResult {
    pub fn new(expr: impl Into<String>, ty: ExprType) -> Self {
        Self {
            expr: expr.into(),
            ty,
        }
    }
}
