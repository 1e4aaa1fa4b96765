use crate::{
    dialect::{Dialect, TranslatorDialect},
    error::TranslateError,
    identifier::{Identifier, JsonElement, JsonTree},
    literal::{format_float, normalize_timestamp},
    registry::IdentifierRegistry,
    types::{ExprType, TranslationResult},
};
use expr_syntax::{MAX_DEPTH, Node, NodeKind};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// SQL boolean fragment ready to be placed in a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SqlWhereCondition(String);

impl SqlWhereCondition {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SqlWhereCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SqlWhereCondition {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SqlWhereCondition {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<SqlWhereCondition> for String {
    fn from(value: SqlWhereCondition) -> Self {
        value.0
    }
}

/// Translates filter expressions into SQL conditions over a fixed set of
/// allowed identifiers. Immutable once built and safe to share.
pub struct Translator {
    registry: IdentifierRegistry,
    dialect: &'static dyn Dialect,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("registry", &self.registry)
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl Translator {
    pub fn new(identifiers: Vec<Identifier>, dialect: TranslatorDialect) -> Self {
        Self {
            registry: IdentifierRegistry::new(identifiers),
            dialect: dialect.dialect(),
        }
    }

    /// Parse and translate `query`. The filter must evaluate to a boolean.
    pub fn translate(&self, query: &str) -> Result<SqlWhereCondition, TranslateError> {
        let node = expr_syntax::parse(query)?;
        let condition = self.translate_ast(&node)?;

        debug!(
            query,
            condition = %condition,
            dialect = self.dialect.name(),
            "Translated filter"
        );
        Ok(condition)
    }

    /// Translate an already parsed expression tree.
    pub fn translate_ast(&self, node: &Node) -> Result<SqlWhereCondition, TranslateError> {
        let result = self.translate_node(node, 0)?;
        if !result.ty.is_bool() {
            return Err(TranslateError::InvalidFilter);
        }
        Ok(SqlWhereCondition(result.expr))
    }

    fn translate_node(
        &self,
        node: &Node,
        depth: usize,
    ) -> Result<TranslationResult, TranslateError> {
        let depth = descend(depth)?;

        match &node.kind {
            NodeKind::Nil => Ok(TranslationResult::new(
                self.dialect.null_literal(),
                ExprType::Nil,
            )),
            NodeKind::String(value) => Ok(match normalize_timestamp(value) {
                Some(timestamp) => TranslationResult::new(
                    self.dialect.string_literal(&timestamp),
                    ExprType::Timestamp,
                ),
                None => TranslationResult::new(self.dialect.string_literal(value), ExprType::String),
            }),
            NodeKind::Integer(value) => Ok(TranslationResult::new(value.to_string(), ExprType::Int)),
            NodeKind::Float(value) => Ok(TranslationResult::new(format_float(*value), ExprType::Float)),
            NodeKind::Bool(value) => Ok(TranslationResult::new(
                self.dialect.bool_literal(*value),
                ExprType::Bool,
            )),
            NodeKind::Identifier(name) => Ok(self.registry.resolve(name)?.0),
            NodeKind::Member { .. } => Ok(self.translate_json(node, depth)?.0),
            NodeKind::Unary { operator, node } => {
                let operand = self.translate_node(node, depth)?;
                self.translate_unary(operator, &operand)
            }
            NodeKind::Binary {
                operator,
                left,
                right,
            } => {
                let left = self.translate_node(left, depth)?;
                let right = self.translate_node(right, depth)?;
                self.translate_binary(operator, &left, &right)
            }
            _ => Err(TranslateError::UnsupportedOperation(node.to_string())),
        }
    }

    /// Resolve an identifier or a member access chain on a JSON identifier.
    /// Returns the object shape when the resolved value is a JSON object.
    fn translate_json(
        &self,
        node: &Node,
        depth: usize,
    ) -> Result<(TranslationResult, Option<&JsonTree>), TranslateError> {
        match &node.kind {
            NodeKind::Identifier(name) => self.registry.resolve(name),
            NodeKind::Member {
                node: base,
                property,
                ..
            } => {
                let (object, tree) = self.translate_json(base, descend(depth)?)?;

                let NodeKind::String(key) = &property.kind else {
                    return Err(TranslateError::UnsupportedOperation(format!(
                        "json key needs to be string, instead found {}",
                        property
                    )));
                };

                let tree = match tree {
                    Some(tree) if object.ty == ExprType::JsonIdentifier => tree,
                    _ => {
                        return Err(TranslateError::UnsupportedOperation(format!(
                            "value at '{}' is not a json object",
                            base
                        )));
                    }
                };

                let element = tree.get(key).ok_or_else(|| {
                    TranslateError::UnknownIdentifier(format!(
                        "json object at '{}' does not contain field '{}'",
                        base, key
                    ))
                })?;

                let expr = self.dialect.json_member(&object.expr, key, element);
                Ok(match element {
                    JsonElement::Tree(nested) => (
                        TranslationResult::new(expr, ExprType::JsonIdentifier),
                        Some(nested),
                    ),
                    JsonElement::Leaf(kind) => (TranslationResult::new(expr, (*kind).into()), None),
                })
            }
            _ => Err(TranslateError::UnsupportedOperation(format!("json {}", node))),
        }
    }

    fn translate_binary(
        &self,
        operator: &str,
        left: &TranslationResult,
        right: &TranslationResult,
    ) -> Result<TranslationResult, TranslateError> {
        match self.dialect.binary_operator(operator) {
            Some(descriptor) if descriptor.accepts(left.ty, right.ty) => {
                Ok(descriptor.render(left, right))
            }
            _ => Err(TranslateError::UnsupportedOperation(format!(
                "{} {} {}",
                left.expr, operator, right.expr
            ))),
        }
    }

    fn translate_unary(
        &self,
        operator: &str,
        operand: &TranslationResult,
    ) -> Result<TranslationResult, TranslateError> {
        match self.dialect.unary_operator(operator) {
            Some(descriptor) if descriptor.accepts(operand.ty) => Ok(descriptor.render(operand)),
            _ => Err(TranslateError::UnsupportedOperation(format!(
                "{}{}",
                operator, operand.expr
            ))),
        }
    }
}

/// Trees built by the parser never exceed `MAX_DEPTH`; hand-built ones may.
fn descend(depth: usize) -> Result<usize, TranslateError> {
    if depth >= MAX_DEPTH {
        return Err(TranslateError::UnsupportedOperation(format!(
            "expression nesting exceeds {} levels",
            MAX_DEPTH
        )));
    }
    Ok(depth + 1)
}
