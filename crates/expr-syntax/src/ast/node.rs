use crate::ast::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

/// Node variants produced by the parser.
///
/// `Chain`, `Call`, `Array` and `Conditional` are part of the expression
/// language but have no SQL rendering; consumers are expected to reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Nil,
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Identifier(String),
    /// `node.name`, `node?.name` or `node[expr]`. Dotted access stores the
    /// name as a `String` property node.
    Member {
        node: Box<Node>,
        property: Box<Node>,
        optional: bool,
    },
    Unary {
        operator: String,
        node: Box<Node>,
    },
    Binary {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Access chain containing at least one `?.` step.
    Chain(Box<Node>),
    Call {
        callee: String,
        arguments: Vec<Node>,
    },
    Array(Vec<Node>),
    Conditional {
        cond: Box<Node>,
        then: Box<Node>,
        otherwise: Box<Node>,
    },
}

impl NodeKind {
    fn is_compound(&self) -> bool {
        matches!(
            self,
            NodeKind::Binary { .. } | NodeKind::Conditional { .. }
        )
    }
}

fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn fmt_operand(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    if node.kind.is_compound() {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Nil => write!(f, "nil"),
            NodeKind::String(s) => write!(f, "{:?}", s),
            NodeKind::Integer(i) => write!(f, "{}", i),
            NodeKind::Float(v) => write!(f, "{:?}", v),
            NodeKind::Bool(b) => write!(f, "{}", b),
            NodeKind::Identifier(name) => write!(f, "{}", name),
            NodeKind::Member {
                node,
                property,
                optional,
            } => {
                fmt_operand(f, node)?;
                let sep = if *optional { "?." } else { "." };
                match &property.kind {
                    NodeKind::String(name) if is_plain_name(name) => write!(f, "{}{}", sep, name),
                    _ if *optional => write!(f, "?.[{}]", property),
                    _ => write!(f, "[{}]", property),
                }
            }
            NodeKind::Unary { operator, node } => {
                if operator.chars().all(|c| c.is_ascii_alphabetic()) {
                    write!(f, "{} ", operator)?;
                } else {
                    write!(f, "{}", operator)?;
                }
                fmt_operand(f, node)
            }
            NodeKind::Binary {
                operator,
                left,
                right,
            } => {
                fmt_operand(f, left)?;
                write!(f, " {} ", operator)?;
                fmt_operand(f, right)
            }
            NodeKind::Chain(node) => write!(f, "{}", node),
            NodeKind::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                fmt_list(f, arguments)?;
                write!(f, ")")
            }
            NodeKind::Array(items) => {
                write!(f, "[")?;
                fmt_list(f, items)?;
                write!(f, "]")
            }
            NodeKind::Conditional {
                cond,
                then,
                otherwise,
            } => {
                fmt_operand(f, cond)?;
                write!(f, " ? ")?;
                fmt_operand(f, then)?;
                write!(f, " : ")?;
                fmt_operand(f, otherwise)
            }
        }
    }
}
