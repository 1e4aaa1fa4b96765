use crate::{
    dialect::Dialect,
    identifier::JsonElement,
    operators::{BinaryOperatorDescriptor, UnaryOperatorDescriptor},
    types::IdentifierType,
};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref BINARY_OPERATORS: HashMap<&'static str, BinaryOperatorDescriptor> =
        build_binary_operators();
    static ref UNARY_OPERATORS: HashMap<&'static str, UnaryOperatorDescriptor> =
        build_unary_operators();
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn binary_operator(&self, token: &str) -> Option<&BinaryOperatorDescriptor> {
        BINARY_OPERATORS.get(token)
    }

    fn unary_operator(&self, token: &str) -> Option<&UnaryOperatorDescriptor> {
        UNARY_OPERATORS.get(token)
    }

    fn json_member(&self, object: &str, key: &str, element: &JsonElement) -> String {
        let key = key.replace('\'', "''");
        match element {
            JsonElement::Leaf(IdentifierType::String | IdentifierType::Timestamp) => {
                format!("{object} ->> '{key}'")
            }
            JsonElement::Leaf(IdentifierType::Int) => format!("cast({object} ->> '{key}' as int)"),
            JsonElement::Leaf(IdentifierType::Float) => {
                format!("cast({object} ->> '{key}' as float)")
            }
            JsonElement::Leaf(IdentifierType::Bool) => {
                format!("cast({object} ->> '{key}' as boolean)")
            }
            JsonElement::Leaf(IdentifierType::Json) | JsonElement::Tree(_) => {
                format!("{object} -> '{key}'")
            }
        }
    }

    fn null_literal(&self) -> &'static str {
        "NULL"
    }

    fn string_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }
}

fn build_binary_operators() -> HashMap<&'static str, BinaryOperatorDescriptor> {
    HashMap::from([
        ("+", BinaryOperatorDescriptor::arithmetic("+")),
        ("-", BinaryOperatorDescriptor::arithmetic("-")),
        ("*", BinaryOperatorDescriptor::arithmetic("*")),
        ("/", BinaryOperatorDescriptor::arithmetic("/")),
        ("%", BinaryOperatorDescriptor::arithmetic("%")),
        ("**", BinaryOperatorDescriptor::arithmetic("^")),
        ("^", BinaryOperatorDescriptor::arithmetic("^")),
        ("==", BinaryOperatorDescriptor::nillable_comparison("=", "IS")),
        ("!=", BinaryOperatorDescriptor::nillable_comparison("<>", "IS NOT")),
        ("<", BinaryOperatorDescriptor::comparison("<")),
        (">", BinaryOperatorDescriptor::comparison(">")),
        ("<=", BinaryOperatorDescriptor::comparison("<=")),
        (">=", BinaryOperatorDescriptor::comparison(">=")),
        ("&&", BinaryOperatorDescriptor::logical("and")),
        ("and", BinaryOperatorDescriptor::logical("and")),
        ("||", BinaryOperatorDescriptor::logical("or")),
        ("or", BinaryOperatorDescriptor::logical("or")),
        ("contains", BinaryOperatorDescriptor::like("%", "%")),
        ("startsWith", BinaryOperatorDescriptor::like("", "%")),
        ("endsWith", BinaryOperatorDescriptor::like("%", "")),
        ("matches", BinaryOperatorDescriptor::regex("~")),
    ])
}

fn build_unary_operators() -> HashMap<&'static str, UnaryOperatorDescriptor> {
    HashMap::from([
        ("!", UnaryOperatorDescriptor::logical("not")),
        ("not", UnaryOperatorDescriptor::logical("not")),
        ("-", UnaryOperatorDescriptor::numeric("-")),
    ])
}
