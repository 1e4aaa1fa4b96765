//! Operator descriptors: which operand types an operator accepts and how
//! an accepted application is rendered.

use crate::types::{ExprType, TranslationResult};

use ExprType::*;

/// Allowed `(left, right)` operand type pair.
pub type TypeConstraint = (ExprType, ExprType);

const NUMERIC: &[TypeConstraint] = &[
    (IntIdentifier, IntIdentifier),
    (IntIdentifier, FloatIdentifier),
    (FloatIdentifier, IntIdentifier),
    (FloatIdentifier, FloatIdentifier),
    (IntIdentifier, Int),
    (IntIdentifier, Float),
    (FloatIdentifier, Int),
    (FloatIdentifier, Float),
    (Int, Int),
    (Int, Float),
    (Float, Int),
    (Float, Float),
];

const EQUALITY: &[TypeConstraint] = &[
    (IntIdentifier, Nil),
    (FloatIdentifier, Nil),
    (BoolIdentifier, Nil),
    (StringIdentifier, Nil),
    (TimestampIdentifier, Nil),
    (IntIdentifier, Int),
    (FloatIdentifier, Float),
    (BoolIdentifier, Bool),
    (StringIdentifier, String),
    (TimestampIdentifier, Timestamp),
];

const ORDERING: &[TypeConstraint] = &[
    (IntIdentifier, Int),
    (FloatIdentifier, Float),
    (StringIdentifier, String),
    (TimestampIdentifier, Timestamp),
];

const LOGICAL: &[TypeConstraint] = &[
    (BoolIdentifier, Bool),
    (BoolIdentifier, BoolIdentifier),
    (Bool, Bool),
    (Bool, BoolIdentifier),
];

const STRING_MATCH: &[TypeConstraint] = &[(StringIdentifier, String)];

const UNARY_LOGICAL: &[ExprType] = &[BoolIdentifier, Bool];
const UNARY_NUMERIC: &[ExprType] = &[Int, Float];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryRendering {
    /// `left op right`; integer result only when both sides are integers.
    Arithmetic(&'static str),
    /// `left op right`
    Comparison(&'static str),
    /// Like `Comparison`, but uses `nil_op` when the right side is `Nil`.
    NillableComparison {
        op: &'static str,
        nil_op: &'static str,
    },
    /// `left op right` over booleans.
    Logical(&'static str),
    /// `left like '<prefix><literal text><suffix>'`
    Like {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `left op <literal>`
    Regex(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperatorDescriptor {
    constraints: &'static [TypeConstraint],
    rendering: BinaryRendering,
}

impl BinaryOperatorDescriptor {
    pub fn new(constraints: &'static [TypeConstraint], rendering: BinaryRendering) -> Self {
        Self {
            constraints,
            rendering,
        }
    }

    pub fn arithmetic(op: &'static str) -> Self {
        Self::new(NUMERIC, BinaryRendering::Arithmetic(op))
    }

    pub fn comparison(op: &'static str) -> Self {
        Self::new(ORDERING, BinaryRendering::Comparison(op))
    }

    pub fn nillable_comparison(op: &'static str, nil_op: &'static str) -> Self {
        Self::new(EQUALITY, BinaryRendering::NillableComparison { op, nil_op })
    }

    pub fn logical(op: &'static str) -> Self {
        Self::new(LOGICAL, BinaryRendering::Logical(op))
    }

    pub fn like(prefix: &'static str, suffix: &'static str) -> Self {
        Self::new(STRING_MATCH, BinaryRendering::Like { prefix, suffix })
    }

    pub fn regex(op: &'static str) -> Self {
        Self::new(STRING_MATCH, BinaryRendering::Regex(op))
    }

    pub fn accepts(&self, left: ExprType, right: ExprType) -> bool {
        self.constraints.contains(&(left, right))
    }

    /// Render an accepted application, wrapped in parentheses.
    pub fn render(&self, left: &TranslationResult, right: &TranslationResult) -> TranslationResult {
        let (expr, ty) = match &self.rendering {
            BinaryRendering::Arithmetic(op) => {
                let ty = if left.ty.is_int() && right.ty.is_int() {
                    Int
                } else {
                    Float
                };
                (format!("{} {} {}", left.expr, op, right.expr), ty)
            }
            BinaryRendering::Comparison(op)
            | BinaryRendering::Logical(op)
            | BinaryRendering::Regex(op) => (format!("{} {} {}", left.expr, op, right.expr), Bool),
            BinaryRendering::NillableComparison { op, nil_op } => {
                let op = if right.ty == Nil { nil_op } else { op };
                (format!("{} {} {}", left.expr, op, right.expr), Bool)
            }
            BinaryRendering::Like { prefix, suffix } => (
                format!(
                    "{} like '{}{}{}'",
                    left.expr,
                    prefix,
                    unquote(&right.expr),
                    suffix
                ),
                Bool,
            ),
        };

        TranslationResult::new(format!("({})", expr), ty)
    }
}

/// Inner text of a rendered string literal.
fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(literal)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnaryRendering {
    /// `op X` over booleans.
    Logical(&'static str),
    /// `opX`, keeping the operand type.
    Numeric(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOperatorDescriptor {
    constraints: &'static [ExprType],
    rendering: UnaryRendering,
}

impl UnaryOperatorDescriptor {
    pub fn new(constraints: &'static [ExprType], rendering: UnaryRendering) -> Self {
        Self {
            constraints,
            rendering,
        }
    }

    pub fn logical(op: &'static str) -> Self {
        Self::new(UNARY_LOGICAL, UnaryRendering::Logical(op))
    }

    pub fn numeric(op: &'static str) -> Self {
        Self::new(UNARY_NUMERIC, UnaryRendering::Numeric(op))
    }

    pub fn accepts(&self, operand: ExprType) -> bool {
        self.constraints.contains(&operand)
    }

    pub fn render(&self, operand: &TranslationResult) -> TranslationResult {
        let (expr, ty) = match &self.rendering {
            UnaryRendering::Logical(op) => (format!("{} {}", op, operand.expr), Bool),
            UnaryRendering::Numeric(op) => (format!("{}{}", op, operand.expr), operand.ty),
        };

        TranslationResult::new(format!("({})", expr), ty)
    }
}
